//! Settings-driven conversion of dense matrices to a sparse encoding.
//!
//! [`SparseConverter`] chooses an output format according to its
//! [`ConverterSettings`] and optionally reports each conversion to a
//! configurable print target (see [`crate::io`]).

mod driver;
mod info_print;
mod settings;

//export flattened
pub use driver::*;
pub use settings::*;
