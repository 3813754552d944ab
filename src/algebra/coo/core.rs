#![allow(non_snake_case)]

use crate::algebra::*;
use itertools::izip;

/// Sparse matrix in coordinate (triplet array) format
///
/// Entry `k` of the matrix is `nzval[k]` at position `(rowval[k], colval[k])`.
/// When built from a dense matrix the entries appear in row-major order,
/// which is the ordering required by [`to_csr`](CoordinateArrays::to_csr).
///
/// __Example usage__ :
/// ```
/// use sparseconv::algebra::*;
///
/// let A = Matrix::from_rows(&[
///     [0, 0, 3],
///     [4, 0, 0],
/// ]);
/// let coo = CoordinateArrays::from_dense(&A);
///
/// assert_eq!(coo.rowval, vec![0, 1]);
/// assert_eq!(coo.colval, vec![2, 0]);
/// assert_eq!(coo.nzval, vec![3, 4]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoordinateArrays<T = f64> {
    /// vector of row indices
    pub rowval: Vec<usize>,
    /// vector of column indices
    pub colval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> Default for CoordinateArrays<T> {
    fn default() -> Self {
        Self {
            rowval: Vec::new(),
            colval: Vec::new(),
            nzval: Vec::new(),
        }
    }
}

impl<T> CoordinateArrays<T>
where
    T: ScalarT,
{
    /// `CoordinateArrays` constructor.
    ///
    /// # Panics
    /// Panics if the three arrays do not have equal length.  This
    /// constructor does __not__ check that entries are nonzero, in
    /// range or ordered.
    pub fn new(rowval: Vec<usize>, colval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(rowval.len(), nzval.len());
        assert_eq!(colval.len(), nzval.len());
        Self {
            rowval,
            colval,
            nzval,
        }
    }

    /// Encode the nonzero entries of a dense matrix, in row-major order
    pub fn from_dense<M>(A: &M) -> Self
    where
        M: DenseView<T>,
    {
        A.nonzeros().collect()
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Check that the three arrays have equal length
    pub fn check_format(&self) -> Result<(), SparseFormatError> {
        if self.rowval.len() != self.nzval.len() || self.colval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        Ok(())
    }

    /// Entries as triplets, in stored order
    pub fn iter(&self) -> impl Iterator<Item = Triplet<T>> + '_ {
        izip!(&self.rowval, &self.colval, &self.nzval)
            .map(|(&row, &col, &value)| Triplet { row, col, value })
    }

    /// Reconstruct the `m x n` dense matrix.
    ///
    /// Positions not named by any entry are zero.  If the same `(row, col)`
    /// pair appears more than once, the last entry wins.  Fails if the
    /// arrays have unequal length or an entry lies outside `m x n`.
    pub fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseError> {
        self.check_format()?;

        let mut A = Matrix::zeros((m, n));
        for t in self.iter() {
            A.set(t.row, t.col, t.value)?;
        }
        Ok(A)
    }

    /// Derive CSR arrays for a matrix with `m` rows.
    ///
    /// Entries must be in row-major order with no repeated positions,
    /// as produced by [`from_dense`](CoordinateArrays::from_dense).
    pub fn to_csr(&self, m: usize) -> Result<CsrMatrix<T>, SparseFormatError> {
        self.check_format()?;

        let mut rowptr = vec![0; m + 1];

        let mut prev: Option<(usize, usize)> = None;
        for t in self.iter() {
            if t.row >= m {
                return Err(SparseFormatError::IncompatibleDimension);
            }
            if prev.is_some_and(|p| p >= t.index()) {
                return Err(SparseFormatError::BadRowOrdering);
            }
            prev = Some(t.index());
            rowptr[t.row + 1] += 1;
        }

        // row counts -> cumulative row pointers
        for i in 0..m {
            rowptr[i + 1] += rowptr[i];
        }

        Ok(CsrMatrix::new(
            rowptr,
            self.colval.clone(),
            self.nzval.clone(),
        ))
    }
}

impl<T> SparseStorage<T> for CoordinateArrays<T>
where
    T: ScalarT,
{
    fn nnz(&self) -> usize {
        self.nzval.len()
    }
    fn format(&self) -> SparseFormat {
        SparseFormat::Coordinate
    }
    fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseError> {
        CoordinateArrays::to_dense(self, m, n)
    }
    fn to_coordinate(&self) -> CoordinateArrays<T> {
        self.clone()
    }
}

impl<T> FromIterator<Triplet<T>> for CoordinateArrays<T>
where
    T: ScalarT,
{
    fn from_iter<I: IntoIterator<Item = Triplet<T>>>(iter: I) -> Self {
        let mut coo = Self::default();
        for t in iter {
            coo.rowval.push(t.row);
            coo.colval.push(t.col);
            coo.nzval.push(t.value);
        }
        coo
    }
}

#[test]
fn test_coo_to_dense_last_write_wins() {
    let coo = CoordinateArrays::new(vec![0, 1, 0], vec![1, 0, 1], vec![2., 5., 9.]);
    let A = coo.to_dense(2, 2).unwrap();
    assert_eq!(A.data(), &[0., 9., 5., 0.]);
}

#[test]
fn test_coo_to_dense_out_of_range() {
    let coo = CoordinateArrays::new(vec![0, 2], vec![0, 0], vec![1., 1.]);
    assert_eq!(
        coo.to_dense(2, 2),
        Err(SparseError::IndexOutOfRange(
            MatrixIndexError::IndexOutOfRange {
                row: 2,
                col: 0,
                m: 2,
                n: 2
            }
        ))
    );

    let coo = CoordinateArrays::new(vec![0], vec![3], vec![1.]);
    assert!(coo.to_dense(2, 3).is_err());
}

#[test]
fn test_coo_to_csr_ordering() {
    // [ ⋅   1   ⋅ ]
    // [ 2   ⋅   3 ]
    let coo = CoordinateArrays::new(vec![0, 1, 1], vec![1, 0, 2], vec![1, 2, 3]);
    let csr = coo.to_csr(2).unwrap();
    assert_eq!(csr.rowptr, vec![0, 1, 3]);
    assert_eq!(csr.colval, vec![1, 0, 2]);
    assert_eq!(csr.nzval, vec![1, 2, 3]);

    // column order broken within a row
    let coo = CoordinateArrays::new(vec![1, 1], vec![2, 0], vec![3, 2]);
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::BadRowOrdering));

    // repeated position
    let coo = CoordinateArrays::new(vec![0, 0], vec![1, 1], vec![3, 2]);
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::BadRowOrdering));

    // row out of range
    let coo = CoordinateArrays::new(vec![4], vec![0], vec![1]);
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::IncompatibleDimension));
}

#[test]
fn test_coo_unequal_lengths() {
    // fields are public, so mismatched arrays bypass the constructor
    let coo = CoordinateArrays {
        rowval: vec![0, 1],
        colval: vec![0, 1],
        nzval: vec![5.],
    };
    assert_eq!(
        coo.check_format(),
        Err(SparseFormatError::IncompatibleDimension)
    );
    assert_eq!(
        coo.to_dense(2, 2),
        Err(SparseError::FormatViolation(
            SparseFormatError::IncompatibleDimension
        ))
    );
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::IncompatibleDimension));

    let coo = CoordinateArrays {
        rowval: vec![0, 1, 1],
        colval: vec![0, 0],
        nzval: vec![1., 2., 3.],
    };
    assert!(coo.to_dense(2, 2).is_err());
    assert_eq!(coo.to_csr(2), Err(SparseFormatError::IncompatibleDimension));

    assert!(CoordinateArrays::<f64>::default().check_format().is_ok());
}

#[test]
#[should_panic]
fn test_coo_new_bad_lengths() {
    let _coo = CoordinateArrays::new(vec![0, 1], vec![0], vec![1., 2.]);
}
