//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod line_range;
mod marker;

pub use line_range::LineRange;
pub use marker::Marker;
