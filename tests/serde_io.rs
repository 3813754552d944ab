#![allow(non_snake_case)]

#[cfg(feature = "serde")]
#[test]
fn test_json_io() {
    use sparseconv::{algebra::*, converter::*};

    let A = Matrix::from_rows(&[
        [0., 0., 3., 0., 4.],
        [0., 0., 5., 7., 0.],
        [0., 0., 0., 0., 0.],
        [0., 2., 6., 0., 0.],
    ]);

    let mut converter = SparseConverter::new(ConverterSettings::default()).unwrap();
    let encoded = converter.encode(&A).unwrap();

    let json = serde_json::to_string(&encoded).unwrap();
    let encoded2: EncodedMatrix<f64> = serde_json::from_str(&json).unwrap();
    assert_eq!(encoded, encoded2);
    assert_eq!(encoded2.to_dense().unwrap(), A);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_settings_defaults() {
    use sparseconv::converter::*;

    // missing fields take their default values
    let settings: ConverterSettings = serde_json::from_str(r#"{"verbose": true}"#).unwrap();
    assert_eq!(settings.format, "auto");
    assert!(settings.verbose);
}

#[cfg(feature = "serde")]
#[test]
fn test_json_coordinate_unequal_lengths() {
    use sparseconv::algebra::*;

    let json = r#"{"rowval":[0,1,1],"colval":[0,0,1],"nzval":[1.0,2.0]}"#;
    let coo: CoordinateArrays<f64> = serde_json::from_str(json).unwrap();

    assert_eq!(
        coo.to_dense(2, 2),
        Err(SparseError::FormatViolation(
            SparseFormatError::IncompatibleDimension
        ))
    );
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::IncompatibleDimension));
}
