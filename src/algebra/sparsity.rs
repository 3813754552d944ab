//! Sparsity measures and storage cost comparisons.
//!
//! All functions here are pure and operate only on dimensions and
//! nonzero counts, so they can be applied to the output of any of the
//! encoders.

/// Fraction of entries in an `m x n` matrix that are zero.
///
/// Computed as `1 - nnz/(m*n)`.  A matrix with no entries at all
/// (`m*n == 0`) is defined to have sparsity `1.0`.
pub fn sparsity(m: usize, n: usize, nnz: usize) -> f64 {
    let numel = m.saturating_mul(n);
    if numel == 0 {
        return 1.0;
    }
    1.0 - (nnz as f64) / (numel as f64)
}

/// True if CSR storage is cheaper than dense storage for an
/// `m x n` matrix with `nnz` nonzeros, i.e. `nnz < (m*(n-1) - 1)/2`.
///
/// This is an advisory comparison only.
pub fn is_csr_more_efficient(m: usize, n: usize, nnz: usize) -> bool {
    // exact integer form of nnz < (m(n-1) - 1)/2, allowing for n = 0
    let lhs = 2 * (nnz as i128);
    let rhs = (m as i128) * (n as i128 - 1) - 1;
    lhs < rhs
}

/// words needed by the coordinate encoding
pub fn coordinate_storage(nnz: usize) -> usize {
    3 * nnz
}

/// words needed by the CSR encoding
pub fn csr_storage(m: usize, nnz: usize) -> usize {
    2 * nnz + m + 1
}

/// words needed by dense storage
pub fn dense_storage(m: usize, n: usize) -> usize {
    m * n
}

/// Summary of the sparsity of a single matrix
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparsityInfo {
    /// number of rows
    pub m: usize,
    /// number of columns
    pub n: usize,
    /// number of nonzeros
    pub nnz: usize,
    /// fraction of zero entries
    pub sparsity: f64,
}

impl SparsityInfo {
    pub fn new(m: usize, n: usize, nnz: usize) -> Self {
        Self {
            m,
            n,
            nnz,
            sparsity: sparsity(m, n, nnz),
        }
    }

    pub fn is_csr_more_efficient(&self) -> bool {
        is_csr_more_efficient(self.m, self.n, self.nnz)
    }
}

#[test]
fn test_sparsity_ratio() {
    assert_eq!(sparsity(4, 5, 6), 1.0 - 6.0 / 20.0);
    assert_eq!(sparsity(3, 3, 0), 1.0);
    assert_eq!(sparsity(2, 2, 4), 0.0);

    // degenerate shapes
    assert_eq!(sparsity(0, 5, 0), 1.0);
    assert_eq!(sparsity(5, 0, 0), 1.0);
}

#[test]
fn test_sparsity_bounds() {
    for m in 1..6 {
        for n in 1..6 {
            for nnz in 0..=(m * n) {
                let s = sparsity(m, n, nnz);
                assert!((0.0..=1.0).contains(&s));
            }
        }
    }
}

#[test]
fn test_csr_efficiency_crossover() {
    // 4 x 5 : threshold is (4*4 - 1)/2 = 7.5
    assert!(is_csr_more_efficient(4, 5, 6));
    assert!(is_csr_more_efficient(4, 5, 7));
    assert!(!is_csr_more_efficient(4, 5, 8));

    // 3 x 3 : threshold is (3*2 - 1)/2 = 2.5
    assert!(is_csr_more_efficient(3, 3, 2));
    assert!(!is_csr_more_efficient(3, 3, 3));

    // never for single columns or empty matrices
    assert!(!is_csr_more_efficient(10, 1, 0));
    assert!(!is_csr_more_efficient(0, 0, 0));
    assert!(!is_csr_more_efficient(3, 0, 0));
}

#[test]
fn test_storage_costs() {
    assert_eq!(coordinate_storage(6), 18);
    assert_eq!(csr_storage(4, 6), 17);
    assert_eq!(dense_storage(4, 5), 20);
    assert_eq!(csr_storage(3, 0), 4);
}
