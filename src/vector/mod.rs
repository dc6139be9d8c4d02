//! Vector module: dynamic-length and fixed 3-component vectors.

pub mod dynamic;
pub use dynamic::Vector;
pub mod fixed;
pub use fixed::Vector3;
mod ops;
