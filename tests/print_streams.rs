#![allow(non_snake_case)]

use sparseconv::{algebra::*, converter::*, io::ConfigurablePrintTarget};

fn test_print_converter() -> (SparseConverter<f64>, Matrix<f64>) {
    let A = Matrix::from_rows(&[[0., 1.], [0., 0.]]);
    let settings = ConverterSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    (SparseConverter::new(settings).unwrap(), A)
}

#[test]
fn test_print_to_stdout() {
    let (mut converter, A) = test_print_converter();
    converter.print_to_stdout();
    converter.encode(&A).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let (mut converter, A) = test_print_converter();
    converter.print_to_buffer();
    converter.encode(&A).unwrap();
    let result = converter.get_print_buffer().unwrap();
    assert!(result.contains("conversion:"));
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let (mut converter, A) = test_print_converter();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    converter.print_to_file(file.into_file());
    converter.encode(&A).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("conversion:"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let (mut converter, A) = test_print_converter();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    converter.print_to_stream(stream);
    converter.encode(&A).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("conversion:"));
}

#[test]
fn test_print_to_sink() {
    let (mut converter, A) = test_print_converter();
    converter.print_to_sink();
    converter.encode(&A).unwrap();
    // no output
    assert!(converter.get_print_buffer().is_err());
}
