//! Core abstractions: scalar bound, axis selector, and the linear-algebra
//! trait seams implemented by every vector and matrix type.

pub mod axis;
pub mod scalar;
pub mod traits;
pub mod wrappers;

pub use axis::Axis;
pub use scalar::Scalar;
