use num_traits::Num;
use std::fmt::{Debug, Display};

/// Core trait for matrix entries.
///
/// All sparse encodings in this crate are generic over values implementing
/// `ScalarT`.  The trait is implemented automatically for any type that
/// satisfies its bounds, which includes all of the native integer and
/// floating point types.   An entry is treated as structurally zero when it
/// compares equal to `T::zero()`.
///
/// `ScalarT` relies on [`num_traits`](num_traits) for its arithmetic bounds.
pub trait ScalarT: 'static + Send + Sync + Copy + Num + Debug + Display + Sized {
    /// true if the value is a structural zero
    #[inline]
    fn is_nonzero(&self) -> bool {
        *self != Self::zero()
    }
}

impl<T> ScalarT for T where T: 'static + Send + Sync + Copy + Num + Debug + Display + Sized {}
