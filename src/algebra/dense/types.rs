use crate::algebra::*;
use std::ops::{Index, IndexMut};

/// Dense matrix stored in row-major order.
///
/// The storage `S` may be owned (see [`Matrix`]) or borrowed (see
/// [`BorrowedMatrix`]), so that encoders can read from either a matrix
/// owned by the caller or a plain slice without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    /// dimensions
    pub size: (usize, usize),
    /// vector of data in row major format
    pub data: S,
    pub(crate) phantom: std::marker::PhantomData<T>,
}

/// Owned dense matrix
pub type Matrix<T> = DenseStorageMatrix<Vec<T>, T>;
/// Dense matrix view over a borrowed row-major slice
pub type BorrowedMatrix<'a, T> = DenseStorageMatrix<&'a [T], T>;

impl<S, T> ShapedMatrix for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    fn nrows(&self) -> usize {
        self.size.0
    }
    fn ncols(&self) -> usize {
        self.size.1
    }
    fn size(&self) -> (usize, usize) {
        self.size
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    #[inline]
    pub(crate) fn index_linear(&self, idx: (usize, usize)) -> usize {
        assert!(idx.0 < self.size.0 && idx.1 < self.size.1);
        idx.0 * self.size.1 + idx.1
    }

    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Row `row` as a contiguous slice
    pub fn row_slice(&self, row: usize) -> &[T] {
        let (m, n) = self.size;
        assert!(row < m);
        &self.data()[(row * n)..(row + 1) * n]
    }
}

impl<S, T> DenseStorageMatrix<S, T>
where
    S: AsMut<[T]> + AsRef<[T]>,
{
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    pub fn row_slice_mut(&mut self, row: usize) -> &mut [T] {
        let (m, n) = self.size;
        assert!(row < m);
        &mut self.data_mut()[(row * n)..(row + 1) * n]
    }
}

impl<S, T> Index<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
{
    type Output = T;
    fn index(&self, idx: (usize, usize)) -> &T {
        let lidx = self.index_linear(idx);
        &self.data()[lidx]
    }
}

impl<S, T> IndexMut<(usize, usize)> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]> + AsMut<[T]>,
{
    fn index_mut(&mut self, idx: (usize, usize)) -> &mut Self::Output {
        let lidx = self.index_linear(idx);
        &mut self.data_mut()[lidx]
    }
}

impl<S, T> DenseView<T> for DenseStorageMatrix<S, T>
where
    S: AsRef<[T]>,
    T: ScalarT,
{
    #[inline]
    fn value(&self, idx: (usize, usize)) -> T {
        self[idx]
    }
}
