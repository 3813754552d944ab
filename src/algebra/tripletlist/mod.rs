#![allow(non_snake_case)]

use crate::algebra::*;

/// Append-only ordered sequence of nonzero entries.
///
/// Entries are kept in the order they were appended.  When built with
/// [`from_dense`](TripletList::from_dense) that order is the row-major
/// scan order of the source matrix.  Entries can be appended but never
/// removed or reordered.
///
/// __Example usage__ :
/// ```
/// use sparseconv::algebra::*;
///
/// let mut list = TripletList::new();
/// list.append(0, 2, 3.);
/// list.append(1, 0, 4.);
///
/// assert_eq!(list.size(), 2);
/// let rows: Vec<usize> = list.iter().map(|t| t.row).collect();
/// assert_eq!(rows, vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TripletList<T = f64> {
    nodes: Vec<Triplet<T>>,
}

impl<T> Default for TripletList<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl<T> TripletList<T>
where
    T: ScalarT,
{
    /// An empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Encode the nonzero entries of a dense matrix, in row-major order
    pub fn from_dense<M>(A: &M) -> Self
    where
        M: DenseView<T>,
    {
        let mut list = Self::new();
        for t in A.nonzeros() {
            list.append(t.row, t.col, t.value);
        }
        list
    }

    /// Append an entry after the current tail.
    ///
    /// No zero check is made here.  Callers are responsible for only
    /// appending nonzero values.
    pub fn append(&mut self, row: usize, col: usize, value: T) {
        self.nodes.push(Triplet { row, col, value });
    }

    /// number of entries in the list
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// first entry, if any
    pub fn head(&self) -> Option<&Triplet<T>> {
        self.nodes.first()
    }

    /// last entry, if any
    pub fn tail(&self) -> Option<&Triplet<T>> {
        self.nodes.last()
    }

    /// Traverse the list from head to tail.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> impl Iterator<Item = Triplet<T>> + '_ {
        self.nodes.iter().copied()
    }

    /// Flatten the list into coordinate arrays, preserving order
    pub fn to_coordinate(&self) -> CoordinateArrays<T> {
        self.iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a TripletList<T>
where
    T: ScalarT,
{
    type Item = Triplet<T>;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Triplet<T>>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter().copied()
    }
}

impl<T> SparseStorage<T> for TripletList<T>
where
    T: ScalarT,
{
    fn nnz(&self) -> usize {
        self.size()
    }
    fn format(&self) -> SparseFormat {
        SparseFormat::TripletList
    }
    fn to_dense(&self, m: usize, n: usize) -> Result<Matrix<T>, SparseError> {
        let mut A = Matrix::zeros((m, n));
        for t in self {
            A.set(t.row, t.col, t.value)?;
        }
        Ok(A)
    }
    fn to_coordinate(&self) -> CoordinateArrays<T> {
        TripletList::to_coordinate(self)
    }
}

#[test]
fn test_tripletlist_append_and_size() {
    let mut list = TripletList::<i32>::new();
    assert!(list.is_empty());
    assert_eq!(list.size(), 0);
    assert!(list.head().is_none());

    list.append(0, 1, 7);
    assert_eq!(list.size(), 1);
    assert_eq!(list.head(), list.tail());

    list.append(2, 0, -1);
    assert_eq!(list.size(), 2);
    assert_eq!(list.head(), Some(&Triplet::new(0, 1, 7)));
    assert_eq!(list.tail(), Some(&Triplet::new(2, 0, -1)));
}

#[test]
fn test_tripletlist_restartable_traversal() {
    let A = Matrix::from_rows(&[[0., 1.], [2., 0.], [0., 3.]]);
    let list = TripletList::from_dense(&A);

    let first: Vec<_> = list.iter().collect();
    let second: Vec<_> = list.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), list.size());

    let by_ref: Vec<_> = (&list).into_iter().collect();
    assert_eq!(first, by_ref);
}
