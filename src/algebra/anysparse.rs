use crate::algebra::*;
use enum_dispatch::*;

/// Any one of the supported sparse encodings.
///
/// Implements [`SparseStorage`] by dispatching to the wrapped encoding.
#[enum_dispatch(SparseStorage<T>)]
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnySparseMatrix<T>
where
    T: ScalarT,
{
    Coordinate(CoordinateArrays<T>),
    TripletList(TripletList<T>),
    Csr(CsrMatrix<T>),
}

impl<T> AnySparseMatrix<T>
where
    T: ScalarT,
{
    /// Encode a dense matrix in the requested format
    pub fn from_dense<M>(A: &M, format: SparseFormat) -> Self
    where
        M: DenseView<T>,
    {
        match format {
            SparseFormat::Coordinate => CoordinateArrays::from_dense(A).into(),
            SparseFormat::TripletList => TripletList::from_dense(A).into(),
            SparseFormat::Csr => CsrMatrix::from_dense(A).into(),
        }
    }
}

#[test]
#[allow(non_snake_case)]
fn test_anysparse_dispatch() {
    let A = Matrix::from_rows(&[[0, 1, 0], [2, 0, 3]]);

    for format in [
        SparseFormat::Coordinate,
        SparseFormat::TripletList,
        SparseFormat::Csr,
    ] {
        let S = AnySparseMatrix::from_dense(&A, format);
        assert_eq!(S.format(), format);
        assert_eq!(S.nnz(), 3);
        assert_eq!(S.to_dense(2, 3).unwrap(), A);
        assert_eq!(S.to_coordinate(), CoordinateArrays::from_dense(&A));
    }
}
