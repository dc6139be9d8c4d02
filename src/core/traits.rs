//! Core linear-algebra traits for genmat.

use crate::error::Result;

/// Matrix–vector product: y ← A x.
pub trait MatVec<V> {
    /// Compute y = A · x, treating `x` as a column vector.
    ///
    /// Fails unless `x` has `ncols` and `y` has `nrows` elements.
    fn matvec(&self, x: &V, y: &mut V) -> Result<()>;
}

/// Row-vector product: y ← xᵀ A.
pub trait MatTransVec<V> {
    /// Compute y = xᵀ · A, treating `x` as a row vector.
    ///
    /// Fails unless `x` has `nrows` and `y` has `ncols` elements.
    fn mattransvec(&self, x: &V, y: &mut V) -> Result<()>;
}

/// Inner products & norms.
pub trait InnerProduct<V> {
    /// Associated scalar type.
    type Scalar: Copy + PartialOrd;
    /// Compute dot(x, y).
    fn dot(&self, x: &V, y: &V) -> Result<Self::Scalar>;
    /// Compute ‖x‖₂.
    fn norm(&self, x: &V) -> Self::Scalar;
}

/// Row and column counts.
pub trait MatShape {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
}
