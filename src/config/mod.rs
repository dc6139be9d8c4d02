//! Configuration for numerical tolerances.

pub mod options;
pub use options::{DEFAULT_EPSILON, LinalgOptions};
