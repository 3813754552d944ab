//! __sparseconv__ data types and encoders.
//!
//! Dense input matrices are presented through the [`DenseView`] trait,
//! which is implemented for the row-major [`Matrix`] and [`BorrowedMatrix`]
//! types.   Three sparse encodings can be built from any view:
//!
//! * [`CoordinateArrays`] : parallel row / column / value arrays.
//! * [`TripletList`] : an append-only ordered sequence of [`Triplet`] entries.
//! * [`CsrMatrix`] : Compressed Sparse Row format.
//!
//! All encodings store entries in row-major scan order.

#![allow(non_snake_case)]

mod error_types;
mod scalars;
mod triplet;
pub use error_types::*;
pub use scalars::*;
pub use triplet::*;

// NB: matrix_traits must be declared before anysparse
// so that the enum_dispatch trait is registered first
mod matrix_traits;
pub use matrix_traits::*;

mod coo;
mod csr;
mod dense;
mod tripletlist;
pub use coo::*;
pub use csr::*;
pub use dense::*;
pub use tripletlist::*;

mod anysparse;
pub use anysparse::*;

mod sparsity;
pub use sparsity::*;

#[cfg(test)]
mod tests;
