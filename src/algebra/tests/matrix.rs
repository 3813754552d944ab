#![allow(non_snake_case)]
use crate::algebra::*;

fn test_matrix_4x5() -> Matrix<i64> {
    // A =
    //[ ⋅   ⋅   3   ⋅   4 ]
    //[ ⋅   ⋅   5   7   ⋅ ]
    //[ ⋅   ⋅   ⋅   ⋅   ⋅ ]
    //[ ⋅   2   6   ⋅   ⋅ ]
    Matrix::from_rows(&[
        [0, 0, 3, 0, 4],
        [0, 0, 5, 7, 0],
        [0, 0, 0, 0, 0],
        [0, 2, 6, 0, 0],
    ])
}

fn test_matrix_3x4() -> Matrix<f64> {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    Matrix::from_rows(&[
        [-1., -17., 6., 10.],
        [3., 0., 7., 0.],
        [0., -4., 0., -5.],
    ])
}

fn test_matrix_3x3_zeros() -> Matrix<f64> {
    Matrix::zeros((3, 3))
}

#[test]
fn test_coordinate_from_dense() {
    let A = test_matrix_4x5();
    let coo = CoordinateArrays::from_dense(&A);

    assert_eq!(coo.nnz(), 6);
    assert_eq!(coo.rowval, vec![0, 0, 1, 1, 3, 3]);
    assert_eq!(coo.colval, vec![2, 4, 2, 3, 1, 2]);
    assert_eq!(coo.nzval, vec![3, 4, 5, 7, 2, 6]);
}

#[test]
fn test_csr_from_dense() {
    let A = test_matrix_4x5();
    let csr = CsrMatrix::from_dense(&A);

    assert_eq!(csr.nnz(), 6);
    assert_eq!(csr.nzval, vec![3, 4, 5, 7, 2, 6]);
    assert_eq!(csr.colval, vec![2, 4, 2, 3, 1, 2]);
    assert_eq!(csr.rowptr, vec![0, 2, 4, 4, 6]);
    assert!(csr.check_format(5).is_ok());
}

#[test]
fn test_tripletlist_from_dense() {
    let A = test_matrix_4x5();
    let list = TripletList::from_dense(&A);

    assert_eq!(list.size(), 6);
    assert_eq!(list.head(), Some(&Triplet::new(0, 2, 3)));
    assert_eq!(list.tail(), Some(&Triplet::new(3, 2, 6)));
}

#[test]
fn test_all_zero_matrix() {
    let A = test_matrix_3x3_zeros();

    let csr = CsrMatrix::from_dense(&A);
    assert_eq!(csr.nnz(), 0);
    assert_eq!(csr.rowptr, vec![0, 0, 0, 0]);
    assert!(csr.colval.is_empty());
    assert!(csr.nzval.is_empty());
    assert_eq!(csr, CsrMatrix::zeros(3));

    let coo = CoordinateArrays::from_dense(&A);
    assert_eq!(coo.nnz(), 0);

    let list = TripletList::from_dense(&A);
    assert!(list.is_empty());

    assert_eq!(sparsity(3, 3, csr.nnz()), 1.0);
    assert_eq!(csr.to_dense(3, 3).unwrap(), A);
}

#[test]
fn test_round_trips() {
    let A = test_matrix_3x4();
    let (m, n) = A.size();

    let coo = CoordinateArrays::from_dense(&A);
    assert_eq!(coo.to_dense(m, n).unwrap(), A);

    let csr = CsrMatrix::from_dense(&A);
    assert_eq!(csr.to_dense(m, n).unwrap(), A);

    let list = TripletList::from_dense(&A);
    assert_eq!(list.to_dense(m, n).unwrap(), A);
}

#[test]
fn test_ordering_agrees() {
    let A = test_matrix_3x4();
    let coo = CoordinateArrays::from_dense(&A);
    let list = TripletList::from_dense(&A);

    assert!(coo.iter().eq(list.iter()));
    assert_eq!(list.to_coordinate(), coo);
}

#[test]
fn test_nnz_consistency() {
    let A = test_matrix_3x4();
    let nnz = CoordinateArrays::from_dense(&A).nnz();
    assert_eq!(nnz, 8);
    assert_eq!(TripletList::from_dense(&A).size(), nnz);
    assert_eq!(CsrMatrix::from_dense(&A).nnz(), nnz);
}

#[test]
fn test_csr_coordinate_agree() {
    let A = test_matrix_4x5();
    let coo = CoordinateArrays::from_dense(&A);
    let csr = CsrMatrix::from_dense(&A);

    assert_eq!(coo.to_csr(A.nrows()).unwrap(), csr);
    assert_eq!(csr.to_coordinate(), coo);
}

#[test]
fn test_csr_decode_dangling_column() {
    let csr = CsrMatrix::new(vec![0, 1, 1], vec![5], vec![1.]);
    assert_eq!(csr.to_dense(2, 3), Err(SparseFormatError::BadColval));
}

#[test]
fn test_csr_rowptr_invariants() {
    // a mix of empty, single and full rows
    let A = Matrix::from_rows(&[
        [0., 0., 0.],
        [1., 2., 3.],
        [0., 0., 0.],
        [0., 4., 0.],
        [0., 0., 0.],
    ]);
    let csr = CsrMatrix::from_dense(&A);

    assert_eq!(csr.rowptr.len(), A.nrows() + 1);
    assert_eq!(csr.rowptr[0], 0);
    assert_eq!(csr.rowptr[A.nrows()], csr.nnz());
    assert!(csr.rowptr.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(csr.rowptr, vec![0, 0, 3, 3, 4, 4]);
}

#[test]
fn test_degenerate_shapes() {
    // no rows
    let A = Matrix::<f64>::zeros((0, 4));
    let csr = CsrMatrix::from_dense(&A);
    assert_eq!(csr.rowptr, vec![0]);
    assert_eq!(csr.to_dense(0, 4).unwrap(), A);

    // no columns
    let A = Matrix::<f64>::zeros((2, 0));
    let csr = CsrMatrix::from_dense(&A);
    assert_eq!(csr.rowptr, vec![0, 0, 0]);
    assert_eq!(csr.to_dense(2, 0).unwrap(), A);
    assert_eq!(CoordinateArrays::from_dense(&A).nnz(), 0);
}
