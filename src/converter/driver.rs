#![allow(non_snake_case)]

use super::*;
use crate::algebra::*;
use crate::io::{ConfigurablePrintTarget, PrintTarget};
use std::io::Write;
use thiserror::Error;

/// Error type returned by [`SparseConverter::encode`]
#[derive(Error, Debug)]
pub enum ConverterError {
    /// The settings were modified after construction and are no longer valid
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// Writing the verbose report failed
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A sparse encoding together with the dimensions of its source matrix
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncodedMatrix<T>
where
    T: ScalarT,
{
    /// dimensions and sparsity summary of the source matrix
    pub info: SparsityInfo,
    /// the encoded entries
    pub data: AnySparseMatrix<T>,
}

impl<T> EncodedMatrix<T>
where
    T: ScalarT,
{
    /// dimensions of the source matrix
    pub fn size(&self) -> (usize, usize) {
        (self.info.m, self.info.n)
    }

    pub fn format(&self) -> SparseFormat {
        self.data.format()
    }

    pub fn nnz(&self) -> usize {
        self.data.nnz()
    }

    /// Reconstruct the dense source matrix
    pub fn to_dense(&self) -> Result<Matrix<T>, SparseError> {
        self.data.to_dense(self.info.m, self.info.n)
    }
}

/// Driver for encoding dense matrices according to [`ConverterSettings`].
///
/// __Example usage__ :
/// ```
/// use sparseconv::algebra::*;
/// use sparseconv::converter::*;
///
/// let A = Matrix::from_rows(&[
///     [0., 0., 3., 0., 4.],
///     [0., 0., 5., 7., 0.],
///     [0., 0., 0., 0., 0.],
///     [0., 2., 6., 0., 0.],
/// ]);
///
/// let mut converter = SparseConverter::new(ConverterSettings::default()).unwrap();
/// let encoded = converter.encode(&A).unwrap();
///
/// assert_eq!(encoded.format(), SparseFormat::Csr);
/// assert_eq!(encoded.nnz(), 6);
/// assert_eq!(converter.decode(&encoded).unwrap(), A);
/// ```
#[derive(Debug)]
pub struct SparseConverter<T> {
    pub settings: ConverterSettings,
    pub(crate) stream: PrintTarget,
    phantom: std::marker::PhantomData<T>,
}

impl<T> SparseConverter<T>
where
    T: ScalarT,
{
    pub fn new(settings: ConverterSettings) -> Result<Self, SettingsError> {
        settings.validate()?;
        Ok(Self {
            settings,
            stream: PrintTarget::default(),
            phantom: std::marker::PhantomData,
        })
    }

    /// Encode a dense matrix.
    ///
    /// With `format = "auto"` the CSR encoding is chosen when it is
    /// cheaper than dense storage, and coordinate arrays otherwise.  Fails
    /// if `settings` no longer validate or the verbose report cannot be
    /// written.
    pub fn encode<M>(&mut self, A: &M) -> Result<EncodedMatrix<T>, ConverterError>
    where
        M: DenseView<T>,
    {
        let (m, n) = A.size();

        let (data, info) = match self.settings.fixed_format()? {
            Some(format) => {
                let data = AnySparseMatrix::from_dense(A, format);
                let info = SparsityInfo::new(m, n, data.nnz());
                (data, info)
            }
            None => {
                // the CSR scan gives the nonzero count needed for the choice
                let csr = CsrMatrix::from_dense(A);
                let info = SparsityInfo::new(m, n, csr.nnz());
                if info.is_csr_more_efficient() {
                    (csr.into(), info)
                } else {
                    (csr.to_coordinate().into(), info)
                }
            }
        };

        let encoded = EncodedMatrix { info, data };
        self.print_conversion(&encoded)?;
        Ok(encoded)
    }

    /// Reconstruct the dense matrix from an encoding
    pub fn decode(&self, encoded: &EncodedMatrix<T>) -> Result<Matrix<T>, SparseError> {
        encoded.to_dense()
    }
}

impl<T> ConfigurablePrintTarget for SparseConverter<T> {
    fn print_to_stdout(&mut self) {
        self.stream.print_to_stdout()
    }
    fn print_to_file(&mut self, file: std::fs::File) {
        self.stream.print_to_file(file)
    }
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        self.stream.print_to_stream(stream)
    }
    fn print_to_sink(&mut self) {
        self.stream.print_to_sink()
    }
    fn print_to_buffer(&mut self) {
        self.stream.print_to_buffer()
    }
    fn get_print_buffer(&mut self) -> std::io::Result<String> {
        self.stream.get_print_buffer()
    }
}
