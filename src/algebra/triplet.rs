/// A single nonzero matrix entry.
///
/// Triplets are only ever produced for entries whose value is nonzero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Triplet<T = f64> {
    /// row index
    pub row: usize,
    /// column index
    pub col: usize,
    /// entry value
    pub value: T,
}

impl<T> Triplet<T> {
    pub fn new(row: usize, col: usize, value: T) -> Self {
        Self { row, col, value }
    }

    /// (row, col) index pair
    pub fn index(&self) -> (usize, usize) {
        (self.row, self.col)
    }
}

impl<T> From<(usize, usize, T)> for Triplet<T> {
    fn from(t: (usize, usize, T)) -> Self {
        Triplet::new(t.0, t.1, t.2)
    }
}
