//! __sparseconv__ builds and interconverts compact encodings of sparse
//! matrices.
//!
//! Given a dense, row-major grid of values in which most entries are zero,
//! the crate produces three encodings:
//!
//! * __coordinate arrays__ : parallel `rowval`, `colval` and `nzval` arrays,
//! * __ordered triplet list__ : an append-only sequence of `(row, col, value)`
//!   entries,
//! * __Compressed Sparse Row (CSR)__ : `nzval`, `colval` and a per-row
//!   cumulative `rowptr` of length `m+1`.
//!
//! Every encoding keeps its entries in row-major scan order, and each can be
//! decoded back to the original dense matrix.   For an `m x n` matrix with
//! `nnz` nonzeros, the sparsity is
//!
//! $$
//! 1 - \frac{\text{nnz}}{m n}
//! $$
//!
//! and CSR storage (`2 nnz + m + 1` words) is cheaper than dense storage
//! (`m n` words) exactly when `nnz < (m(n-1) - 1)/2`.
//!
//! ## Example
//!
//! ```
//! use sparseconv::algebra::*;
//!
//! let A = Matrix::from_rows(&[
//!     [0, 0, 3, 0, 4],
//!     [0, 0, 5, 7, 0],
//!     [0, 0, 0, 0, 0],
//!     [0, 2, 6, 0, 0],
//! ]);
//!
//! let csr = CsrMatrix::from_dense(&A);
//! assert_eq!(csr.rowptr, vec![0, 2, 4, 4, 6]);
//! assert_eq!(csr.to_dense(4, 5).unwrap(), A);
//! ```
//!
//! # License
//!
//! Licensed under Apache License, Version 2.0.

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod algebra;
pub mod converter;
pub mod io;

/// crate version string
pub fn version() -> &'static str {
    VERSION
}
