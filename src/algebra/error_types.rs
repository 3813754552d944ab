use thiserror::Error;

/// Error type returned by checked dense and coordinate indexing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatrixIndexError {
    /// An access or write target falls outside the matrix dimensions
    #[error("Index ({row}, {col}) is out of range for a {m} x {n} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        m: usize,
        n: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
/// Error type returned by sparse matrix assembly and decoding operations.
pub enum SparseFormatError {
    /// Matrix dimension fields and/or array lengths are incompatible
    #[error("Matrix dimension fields and/or array lengths are incompatible")]
    IncompatibleDimension,
    #[error("Bad row pointer values")]
    /// Matrix row pointer values are defective
    BadRowptr,
    #[error("Column value exceeds the matrix column dimension")]
    /// Column value exceeds the matrix column dimension
    BadColval,
    /// Data is not sorted by column index within each row
    #[error("Data is not sorted by column index within each row")]
    BadColumnOrdering,
    /// Triplet data is not in row-major order
    #[error("Triplet data is not in row-major order")]
    BadRowOrdering,
}

/// Error type returned when decoding any of the supported sparse formats.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SparseError {
    #[error(transparent)]
    IndexOutOfRange(#[from] MatrixIndexError),
    #[error("Format violation: {0}")]
    FormatViolation(#[from] SparseFormatError),
}
