//! genmat: generic dense vectors and matrices
//!
//! This crate provides value-semantics vector and matrix types over any
//! real-number-like scalar, with elementwise combinators, determinant via
//! Gaussian elimination with partial pivoting, cofactor/adjugate inverse, and
//! fixed-size 3D specializations.

pub mod config;
pub mod core;
pub mod error;
pub mod matrix;
pub mod utils;
pub mod vector;

// Re-exports for convenience
pub use crate::config::{DEFAULT_EPSILON, LinalgOptions};
pub use crate::core::traits::{InnerProduct, MatShape, MatTransVec, MatVec};
pub use crate::core::{Axis, Scalar};
pub use crate::error::{LinalgError, Result};
pub use crate::matrix::{Matrix, Matrix3, Structure};
pub use crate::utils::fast_list;
pub use crate::vector::{Vector, Vector3};
