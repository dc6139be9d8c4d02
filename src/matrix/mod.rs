//! Matrix module: the generic dense matrix, its linear algebra, and the
//! fixed 3×3 specialization.

pub mod dense;
pub use dense::Matrix;
pub mod factory;
pub mod fixed;
pub use fixed::Matrix3;
pub mod linalg;
pub mod structure;
pub use structure::Structure;
mod ops;
