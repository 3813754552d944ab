#![allow(non_snake_case)]

use crate::algebra::*;

impl<T> Matrix<T>
where
    T: ScalarT,
{
    /// An `m x n` matrix of zeros
    pub fn zeros(size: (usize, usize)) -> Self {
        let (m, n) = size;
        let data = vec![T::zero(); m * n];
        Self {
            size,
            data,
            phantom: std::marker::PhantomData,
        }
    }

    /// Copy row-major data into a new matrix.
    ///
    /// # Panics
    /// Panics if `src` does not have exactly `m * n` entries.
    pub fn new_from_slice(size: (usize, usize), src: &[T]) -> Self {
        let (m, n) = size;
        assert_eq!(m * n, src.len());
        Self {
            size,
            data: src.to_vec(),
            phantom: std::marker::PhantomData,
        }
    }

    /// Build a matrix from a collection of rows, e.g. a nested literal
    ///
    /// ```
    /// use sparseconv::algebra::*;
    ///
    /// let A = Matrix::from_rows(&[
    ///     [0., 3., 0.],
    ///     [1., 0., 0.],
    /// ]);
    /// assert_eq!(A.size(), (2, 3));
    /// assert_eq!(A[(0, 1)], 3.);
    /// ```
    ///
    /// # Panics
    /// Panics if the rows do not all have the same length.
    pub fn from_rows<R>(rows: &[R]) -> Self
    where
        R: AsRef<[T]>,
    {
        let m = rows.len();
        let n = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(m * n);
        for row in rows {
            let row = row.as_ref();
            assert_eq!(row.len(), n, "rows must all have the same length");
            data.extend_from_slice(row);
        }
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData,
        }
    }

    /// Checked write of a single entry
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixIndexError> {
        let (m, n) = self.size;
        if row >= m || col >= n {
            return Err(MatrixIndexError::IndexOutOfRange { row, col, m, n });
        }
        self[(row, col)] = value;
        Ok(())
    }
}

impl<'a, T> BorrowedMatrix<'a, T>
where
    T: ScalarT,
{
    /// Row-major view over borrowed data
    ///
    /// # Panics
    /// Panics if `data` does not have exactly `m * n` entries.
    pub fn from_slice(data: &'a [T], m: usize, n: usize) -> Self {
        assert_eq!(m * n, data.len());
        Self {
            size: (m, n),
            data,
            phantom: std::marker::PhantomData,
        }
    }
}

#[test]
fn test_dense_from_rows() {
    let A = Matrix::from_rows(&[vec![1, 0, 2], vec![0, 3, 0]]);
    assert_eq!(A.size(), (2, 3));
    assert_eq!(A.data(), &[1, 0, 2, 0, 3, 0]);
    assert_eq!(A.row_slice(1), &[0, 3, 0]);
    assert_eq!(A[(0, 2)], 2);
}

#[test]
#[should_panic]
fn test_dense_from_rows_ragged() {
    let _A = Matrix::from_rows(&[vec![1., 0.], vec![0.]]);
}

#[test]
fn test_dense_checked_access() {
    let mut A = Matrix::<f64>::zeros((2, 3));
    assert!(A.set(1, 2, 4.).is_ok());
    assert_eq!(A.at(1, 2), Ok(4.));
    assert_eq!(
        A.at(2, 0),
        Err(MatrixIndexError::IndexOutOfRange {
            row: 2,
            col: 0,
            m: 2,
            n: 3
        })
    );
    assert!(A.set(0, 3, 1.).is_err());
}

#[test]
fn test_borrowed_view() {
    let data = [0, 5, 0, 0, 0, 7];
    let B = BorrowedMatrix::from_slice(&data, 3, 2);
    assert_eq!(B.size(), (3, 2));
    assert_eq!(B.value((2, 1)), 7);
    let nz: Vec<_> = B.nonzeros().map(|t| (t.row, t.col, t.value)).collect();
    assert_eq!(nz, vec![(0, 1, 5), (2, 1, 7)]);
}
