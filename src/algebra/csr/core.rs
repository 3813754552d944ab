#![allow(non_snake_case)]

use crate::algebra::*;

/// Sparse matrix in standard Compressed Sparse Row (CSR) format
///
/// __Example usage__ : To encode the 3 x 3 matrix
/// ```text
/// A = [1.  0.  2.]
///     [0.  0.  0.]
///     [0.  3.  4.]
/// ```
///
/// ```
/// use sparseconv::algebra::*;
///
/// let A = Matrix::from_rows(&[
///     [1., 0., 2.],
///     [0., 0., 0.],
///     [0., 3., 4.],
/// ]);
/// let csr = CsrMatrix::from_dense(&A);
///
/// assert_eq!(csr.rowptr, vec![0, 2, 2, 4]);
/// assert_eq!(csr.colval, vec![0, 2, 1, 2]);
/// assert_eq!(csr.nzval, vec![1., 2., 3., 4.]);
///
/// // optional correctness check
/// assert!(csr.check_format(3).is_ok());
/// ```
///

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CsrMatrix<T = f64> {
    /// CSR format row pointer.
    ///
    /// Ths field should have length `m+1`, with `rowptr[0] = 0`.  Entry `i`
    /// is the number of nonzeros in rows `0..i`, so the last entry is the
    /// number of nonzeros and should agree with the lengths of the `colval`
    /// and `nzval` fields.
    pub rowptr: Vec<usize>,
    /// vector of column indices
    pub colval: Vec<usize>,
    /// vector of non-zero matrix elements
    pub nzval: Vec<T>,
}

impl<T> CsrMatrix<T>
where
    T: ScalarT,
{
    /// `CsrMatrix` constructor.
    ///
    /// # Panics
    /// Makes rudimentary dimensional compatibility checks and panics on
    /// failure.   This constructor does __not__ ensure that column indices
    /// are all in bounds or that entries within each row appear in order of
    /// increasing column index.  Use [`check_format`](CsrMatrix::check_format)
    /// for a complete check.
    ///
    pub fn new(rowptr: Vec<usize>, colval: Vec<usize>, nzval: Vec<T>) -> Self {
        assert_eq!(colval.len(), nzval.len());
        assert!(!rowptr.is_empty());
        assert_eq!(rowptr[rowptr.len() - 1], colval.len());
        CsrMatrix {
            rowptr,
            colval,
            nzval,
        }
    }

    /// An `m` row matrix with no nonzeros
    pub fn zeros(m: usize) -> Self {
        CsrMatrix::new(vec![0; m + 1], Vec::new(), Vec::new())
    }

    /// Encode a dense matrix.
    ///
    /// Each row is scanned in turn and the running nonzero count is
    /// appended to `rowptr` once per completed row, after the initial 0.
    pub fn from_dense<M>(A: &M) -> Self
    where
        M: DenseView<T>,
    {
        let (m, n) = A.size();
        let mut rowptr = Vec::with_capacity(m + 1);
        let mut colval = Vec::new();
        let mut nzval = Vec::new();

        let mut nnz = 0;
        rowptr.push(nnz);
        for row in 0..m {
            for col in 0..n {
                let v = A.value((row, col));
                if v.is_nonzero() {
                    colval.push(col);
                    nzval.push(v);
                    nnz += 1;
                }
            }
            rowptr.push(nnz);
        }

        CsrMatrix::new(rowptr, colval, nzval)
    }

    /// number of rows
    pub fn nrows(&self) -> usize {
        self.rowptr.len().saturating_sub(1)
    }

    /// number of nonzeros
    pub fn nnz(&self) -> usize {
        self.nzval.len()
    }

    /// Column indices and values of row `row`
    ///
    /// # Panics
    /// Panics if `row` is out of bounds.
    pub fn row(&self, row: usize) -> (&[usize], &[T]) {
        let rng = self.rowptr[row]..self.rowptr[row + 1];
        (&self.colval[rng.clone()], &self.nzval[rng])
    }

    /// Check that matrix data is correctly formatted for a matrix
    /// with `n` columns.
    pub fn check_format(&self, n: usize) -> Result<(), SparseFormatError> {
        if self.colval.len() != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        if self.rowptr.is_empty() || self.rowptr[0] != 0 {
            return Err(SparseFormatError::BadRowptr);
        }

        //check for rowptr monotonicity
        if self.rowptr.windows(2).any(|c| c[0] > c[1]) {
            return Err(SparseFormatError::BadRowptr);
        }

        if self.rowptr[self.nrows()] != self.nzval.len() {
            return Err(SparseFormatError::IncompatibleDimension);
        }

        //check for column values out of bounds
        if !self.colval.iter().all(|c| c < &n) {
            return Err(SparseFormatError::BadColval);
        }

        //check for colval monotonicity within each row
        for row in 0..self.nrows() {
            let (cols, _) = self.row(row);
            if cols.windows(2).any(|c| c[0] >= c[1]) {
                return Err(SparseFormatError::BadColumnOrdering);
            }
        }

        Ok(())
    }

    /// Reconstruct the `m x n` dense matrix.
    ///
    /// Fails if `rowptr` does not have length `m+1` or if the data
    /// violates any of the conditions checked by
    /// [`check_format`](CsrMatrix::check_format).
    pub fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseFormatError> {
        if self.rowptr.len().checked_sub(1) != Some(m) {
            return Err(SparseFormatError::IncompatibleDimension);
        }
        self.check_format(n)?;

        let mut A = Matrix::zeros((m, n));
        for row in 0..m {
            let (cols, vals) = self.row(row);
            let dest = A.row_slice_mut(row);
            for (&col, &v) in cols.iter().zip(vals) {
                dest[col] = v;
            }
        }
        Ok(A)
    }

    /// Expand to coordinate arrays, in row-major order
    ///
    /// # Panics
    /// Panics if `rowptr` is not non-decreasing or its final entry
    /// disagrees with the lengths of `colval` and `nzval`.  Data that
    /// passes [`check_format`](CsrMatrix::check_format) never panics.
    pub fn to_coordinate(&self) -> CoordinateArrays<T> {
        assert!(self.rowptr.windows(2).all(|c| c[0] <= c[1]));
        let mut rowval = Vec::with_capacity(self.nnz());
        for row in 0..self.nrows() {
            let count = self.rowptr[row + 1] - self.rowptr[row];
            rowval.extend(std::iter::repeat(row).take(count));
        }
        CoordinateArrays::new(rowval, self.colval.clone(), self.nzval.clone())
    }

    /// Returns the value at the given (row,col) index as an Option.
    /// Returns None if the given index is not a structural nonzero.
    ///
    /// # Panics
    /// Panics if the given row is out of bounds.
    pub fn get_entry(&self, idx: (usize, usize)) -> Option<T> {
        let (row, col) = idx;
        assert!(row < self.nrows());

        let (cols_in_this_row, vals) = self.row(row);
        match cols_in_this_row.binary_search(&col) {
            Ok(k) => Some(vals[k]),
            Err(_) => None,
        }
    }
}

impl<T> SparseStorage<T> for CsrMatrix<T>
where
    T: ScalarT,
{
    fn nnz(&self) -> usize {
        self.nzval.len()
    }
    fn format(&self) -> SparseFormat {
        SparseFormat::Csr
    }
    fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseError> {
        Ok(CsrMatrix::to_dense(self, m, n)?)
    }
    fn to_coordinate(&self) -> CoordinateArrays<T> {
        CsrMatrix::to_coordinate(self)
    }
}

#[test]
fn test_csr_get_entry() {
    // A =
    //[ ⋅   4.0    ⋅    ⋅   12.0]
    //[1.0  5.0    ⋅    ⋅     ⋅ ]
    //[ ⋅   6.0    ⋅    ⋅   13.0]
    //[2.0  7.0  10.0   ⋅     ⋅ ]

    let A = CsrMatrix::new(
        vec![0, 2, 4, 6, 9],                         // rowptr
        vec![1, 4, 0, 1, 1, 4, 0, 1, 2],             // colval
        vec![4., 12., 1., 5., 6., 13., 2., 7., 10.], // nzval
    );
    assert!(A.check_format(5).is_ok());

    assert_eq!(A.get_entry((0, 1)).unwrap(), 4.);
    assert_eq!(A.get_entry((0, 4)).unwrap(), 12.);
    assert_eq!(A.get_entry((1, 0)).unwrap(), 1.);
    assert_eq!(A.get_entry((2, 4)).unwrap(), 13.);
    assert_eq!(A.get_entry((3, 2)).unwrap(), 10.);

    assert!(A.get_entry((0, 0)).is_none());
    assert!(A.get_entry((1, 4)).is_none());
    assert!(A.get_entry((3, 3)).is_none());
}

#[test]
fn test_csr_row_slices() {
    let A = CsrMatrix::new(vec![0, 1, 1, 3], vec![2, 0, 1], vec![5, 6, 7]);
    assert_eq!(A.nrows(), 3);

    let (cols, vals) = A.row(0);
    assert_eq!(cols, &[2]);
    assert_eq!(vals, &[5]);

    let (cols, vals) = A.row(1);
    assert!(cols.is_empty() && vals.is_empty());

    let (cols, vals) = A.row(2);
    assert_eq!(cols, &[0, 1]);
    assert_eq!(vals, &[6, 7]);
}

#[test]
fn test_csr_check_format() {
    // non-monotone rowptr
    let A = CsrMatrix {
        rowptr: vec![0, 2, 1, 2],
        colval: vec![0, 1],
        nzval: vec![1., 1.],
    };
    assert_eq!(A.check_format(2), Err(SparseFormatError::BadRowptr));

    // nonzero first pointer
    let A = CsrMatrix {
        rowptr: vec![1, 2],
        colval: vec![0, 1],
        nzval: vec![1., 1.],
    };
    assert_eq!(A.check_format(2), Err(SparseFormatError::BadRowptr));

    // array length mismatch
    let A = CsrMatrix {
        rowptr: vec![0, 2],
        colval: vec![0, 1],
        nzval: vec![1.],
    };
    assert_eq!(
        A.check_format(2),
        Err(SparseFormatError::IncompatibleDimension)
    );

    // final pointer disagrees with nnz
    let A = CsrMatrix {
        rowptr: vec![0, 1],
        colval: vec![0, 1],
        nzval: vec![1., 1.],
    };
    assert_eq!(
        A.check_format(2),
        Err(SparseFormatError::IncompatibleDimension)
    );

    // unsorted columns
    let A = CsrMatrix::new(vec![0, 2], vec![1, 0], vec![1., 1.]);
    assert_eq!(
        A.check_format(2),
        Err(SparseFormatError::BadColumnOrdering)
    );

    // dangling column
    let A = CsrMatrix::new(vec![0, 1], vec![2], vec![1.]);
    assert_eq!(A.check_format(2), Err(SparseFormatError::BadColval));
}

#[test]
fn test_csr_to_dense_wrong_row_count() {
    let A = CsrMatrix::new(vec![0, 1, 1], vec![0], vec![1.]);
    assert_eq!(
        A.to_dense(3, 2),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
fn test_csr_to_dense_row_count_overflow() {
    let A = CsrMatrix::<f64>::zeros(2);
    assert_eq!(
        A.to_dense(usize::MAX, 1),
        Err(SparseFormatError::IncompatibleDimension)
    );

    let A = CsrMatrix::<f64> {
        rowptr: vec![],
        colval: vec![],
        nzval: vec![],
    };
    assert_eq!(
        A.to_dense(0, 0),
        Err(SparseFormatError::IncompatibleDimension)
    );
}

#[test]
#[should_panic]
fn test_csr_to_coordinate_bad_rowptr() {
    let A = CsrMatrix {
        rowptr: vec![0, 2, 1, 2],
        colval: vec![0, 1],
        nzval: vec![1., 1.],
    };
    assert_eq!(A.check_format(2), Err(SparseFormatError::BadRowptr));
    let _coo = A.to_coordinate();
}

#[test]
fn test_csr_to_coordinate() {
    let A = CsrMatrix::new(vec![0, 2, 2, 3], vec![0, 3, 1], vec![1, 2, 3]);
    let coo = A.to_coordinate();
    assert_eq!(coo.rowval, vec![0, 0, 2]);
    assert_eq!(coo.colval, vec![0, 3, 1]);
    assert_eq!(coo.nzval, vec![1, 2, 3]);
    assert_eq!(coo.to_csr(3).unwrap(), A);
}
