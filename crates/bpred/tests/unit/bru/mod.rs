//! Branch prediction unit tests.



/// Gshare indexing, training order and aliasing.
pub mod gshare;
