#![allow(non_snake_case)]
use sparseconv::{algebra::*, converter::*, io::ConfigurablePrintTarget};

fn sparse_matrix() -> Matrix<f64> {
    // nnz = 6, below the CSR crossover for a 4 x 5 matrix
    Matrix::from_rows(&[
        [0., 0., 3., 0., 4.],
        [0., 0., 5., 7., 0.],
        [0., 0., 0., 0., 0.],
        [0., 2., 6., 0., 0.],
    ])
}

fn dense_matrix() -> Matrix<f64> {
    // nnz = 8, above the CSR crossover for a 3 x 3 matrix
    Matrix::from_rows(&[[1., 2., 3.], [4., 0., 6.], [7., 8., 9.]])
}

fn converter_with_format(format: &str) -> SparseConverter<f64> {
    let settings = ConverterSettingsBuilder::default()
        .format(format.to_string())
        .build()
        .unwrap();
    SparseConverter::new(settings).unwrap()
}

#[test]
fn test_auto_format_choice() {
    let mut converter = converter_with_format("auto");

    let A = sparse_matrix();
    let encoded = converter.encode(&A).unwrap();
    assert_eq!(encoded.format(), SparseFormat::Csr);
    assert_eq!(encoded.info, SparsityInfo::new(4, 5, 6));
    assert_eq!(converter.decode(&encoded).unwrap(), A);

    let A = dense_matrix();
    let encoded = converter.encode(&A).unwrap();
    assert_eq!(encoded.format(), SparseFormat::Coordinate);
    assert_eq!(encoded.nnz(), 8);
    assert_eq!(converter.decode(&encoded).unwrap(), A);
}

#[test]
fn test_fixed_formats() {
    let A = sparse_matrix();

    for (name, format) in [
        ("coordinate", SparseFormat::Coordinate),
        ("triplet_list", SparseFormat::TripletList),
        ("csr", SparseFormat::Csr),
    ] {
        let mut converter = converter_with_format(name);
        let encoded = converter.encode(&A).unwrap();
        assert_eq!(encoded.format(), format);
        assert_eq!(encoded.nnz(), 6);
        assert_eq!(encoded.size(), (4, 5));
        assert_eq!(encoded.to_dense().unwrap(), A);
    }
}

#[test]
fn test_encoded_variants() {
    let A = sparse_matrix();
    let mut converter = converter_with_format("triplet_list");
    let encoded = converter.encode(&A).unwrap();

    match encoded.data {
        AnySparseMatrix::TripletList(ref list) => {
            assert_eq!(list.size(), 6);
            assert_eq!(list.to_coordinate(), CoordinateArrays::from_dense(&A));
        }
        _ => panic!("expected a triplet list"),
    }
}

#[test]
fn test_bad_settings_rejected() {
    let settings = ConverterSettings {
        format: "bsr".to_string(),
        verbose: false,
    };
    let converter = SparseConverter::<f64>::new(settings);
    assert!(matches!(converter, Err(SettingsError::BadField("format"))));
}

#[test]
fn test_settings_changed_after_construction() {
    let mut converter = converter_with_format("csr");
    converter.settings.format = "bsr".to_string();

    let result = converter.encode(&sparse_matrix());
    assert!(matches!(
        result,
        Err(ConverterError::Settings(SettingsError::BadField("format")))
    ));

    // a valid change is picked up by the next call
    converter.settings.format = "coordinate".to_string();
    let encoded = converter.encode(&sparse_matrix()).unwrap();
    assert_eq!(encoded.format(), SparseFormat::Coordinate);
}

#[test]
fn test_verbose_report() {
    let settings = ConverterSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut converter = SparseConverter::new(settings).unwrap();
    converter.print_to_buffer();

    converter.encode(&sparse_matrix()).unwrap();
    let report = converter.get_print_buffer().unwrap();

    assert!(report.contains("size          = 4 x 5"));
    assert!(report.contains("nnz           = 6"));
    assert!(report.contains("sparsity      = 0.7000"));
    assert!(report.contains("format        = csr (requested \"auto\")"));
    assert!(report.contains("csr           = 17"));
}

#[test]
fn test_quiet_by_default() {
    let mut converter = SparseConverter::new(ConverterSettings::default()).unwrap();
    converter.print_to_buffer();
    converter.encode(&sparse_matrix()).unwrap();
    assert!(converter.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_integer_entries() {
    let A = Matrix::from_rows(&[[0i64, -3], [0, 0], [9, 0]]);
    let mut converter = converter_with_format_i64("csr");
    let encoded = converter.encode(&A).unwrap();
    assert_eq!(encoded.info.nnz, 2);
    assert_eq!(converter.decode(&encoded).unwrap(), A);
}

fn converter_with_format_i64(format: &str) -> SparseConverter<i64> {
    let settings = ConverterSettingsBuilder::default()
        .format(format.to_string())
        .build()
        .unwrap();
    SparseConverter::new(settings).unwrap()
}
