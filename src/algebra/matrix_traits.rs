use crate::algebra::{
    CoordinateArrays, Matrix, MatrixIndexError, ScalarT, SparseError, Triplet,
};
use enum_dispatch::*;

/// Dimension queries shared by dense and sparse matrix types
pub trait ShapedMatrix {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn size(&self) -> (usize, usize) {
        (self.nrows(), self.ncols())
    }
}

/// Read-only access to a dense, row-major grid of values.
///
/// This is the input contract shared by all of the sparse encoders.  The
/// view is never mutated by an encoder, and callers must not mutate the
/// underlying data while an encode call is in flight.
pub trait DenseView<T>: ShapedMatrix
where
    T: ScalarT,
{
    /// Value at `(row, col)`.
    ///
    /// # Panics
    /// Implementations may panic if the index is out of bounds.  Use
    /// [`at`](DenseView::at) for a checked access.
    fn value(&self, idx: (usize, usize)) -> T;

    /// Checked access to the value at `(row, col)`
    fn at(&self, row: usize, col: usize) -> Result<T, MatrixIndexError> {
        let (m, n) = self.size();
        if row >= m || col >= n {
            return Err(MatrixIndexError::IndexOutOfRange { row, col, m, n });
        }
        Ok(self.value((row, col)))
    }

    /// Row-major scan over the nonzero entries of the view
    fn nonzeros(&self) -> RowMajorNonzeros<'_, Self, T>
    where
        Self: Sized,
    {
        RowMajorNonzeros {
            src: self,
            row: 0,
            col: 0,
            phantom: std::marker::PhantomData,
        }
    }
}

/// Iterator over the nonzero entries of a [`DenseView`] in row-major order.
///
/// Produced by [`DenseView::nonzeros`].
pub struct RowMajorNonzeros<'a, M, T>
where
    M: DenseView<T>,
    T: ScalarT,
{
    src: &'a M,
    row: usize,
    col: usize,
    phantom: std::marker::PhantomData<T>,
}

impl<'a, M, T> Iterator for RowMajorNonzeros<'a, M, T>
where
    M: DenseView<T>,
    T: ScalarT,
{
    type Item = Triplet<T>;

    fn next(&mut self) -> Option<Triplet<T>> {
        let (m, n) = self.src.size();
        while self.row < m {
            while self.col < n {
                let (row, col) = (self.row, self.col);
                self.col += 1;
                let value = self.src.value((row, col));
                if value.is_nonzero() {
                    return Some(Triplet { row, col, value });
                }
            }
            self.col = 0;
            self.row += 1;
        }
        None
    }
}

/// Marker for the supported sparse encodings
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SparseFormat {
    /// Parallel row / column / value arrays
    Coordinate,
    /// Append-ordered sequence of triplets
    TripletList,
    /// Compressed Sparse Row
    Csr,
}

impl std::fmt::Display for SparseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SparseFormat::Coordinate => "coordinate",
            SparseFormat::TripletList => "triplet_list",
            SparseFormat::Csr => "csr",
        };
        write!(f, "{}", name)
    }
}

/// Operations common to every sparse encoding
#[enum_dispatch]
pub trait SparseStorage<T>
where
    T: ScalarT,
{
    /// number of nonzeros
    fn nnz(&self) -> usize;

    /// encoding tag
    fn format(&self) -> SparseFormat;

    /// Reconstruct the `m x n` dense matrix
    fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseError>;

    /// Row-major coordinate arrays holding the same entries
    fn to_coordinate(&self) -> CoordinateArrays<T>;
}
