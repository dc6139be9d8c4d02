//! Trait implementations for the crate's vector and matrix types.
//!
//! This module wires `Matrix`/`Vector` and the fixed `Matrix3`/`Vector3`
//! into the core traits (`MatVec`, `MatTransVec`, `InnerProduct`,
//! `MatShape`) and into `approx::AbsDiffEq`, so generic code and tests can
//! treat them uniformly.
//!
//! # Conventions
//! - `matvec` treats its input as a column vector (`A · x`).
//! - `mattransvec` treats its input as a row vector (`xᵀ · A`).
//! - Inner products are provided on `()`, as a stateless context.
//!
//! # References
//! - [num-traits crate documentation](https://docs.rs/num-traits)
//! - [approx crate documentation](https://docs.rs/approx)

use approx::AbsDiffEq;

use crate::config::{DEFAULT_EPSILON, LinalgOptions};
use crate::core::scalar::{self, Scalar};
use crate::core::traits::{InnerProduct, MatShape, MatTransVec, MatVec};
use crate::error::{LinalgError, Result};
use crate::matrix::{Matrix, Matrix3};
use crate::vector::{Vector, Vector3};

fn check_output(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LinalgError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Computes `y = A * x` where `A` is a dense matrix and `x` a column vector.
impl<D: Scalar> MatVec<Vector<D>> for Matrix<D> {
    fn matvec(&self, x: &Vector<D>, y: &mut Vector<D>) -> Result<()> {
        if x.len() != self.cols() {
            return Err(LinalgError::DimensionMismatch {
                op: "matvec",
                left: self.shape(),
                right: (x.len(), 1),
            });
        }
        check_output(self.rows(), y.len())?;
        let cols = self.cols();
        for (yi, row) in y.as_mut_slice().iter_mut().zip(self.as_slice().chunks_exact(cols)) {
            *yi = row
                .iter()
                .zip(x.as_slice())
                .fold(D::zero(), |acc, (&a, &b)| acc + a * b);
        }
        Ok(())
    }
}

/// Computes `y = xᵀ * A` where `x` is a row vector.
impl<D: Scalar> MatTransVec<Vector<D>> for Matrix<D> {
    fn mattransvec(&self, x: &Vector<D>, y: &mut Vector<D>) -> Result<()> {
        if x.len() != self.rows() {
            return Err(LinalgError::DimensionMismatch {
                op: "mattransvec",
                left: (1, x.len()),
                right: self.shape(),
            });
        }
        check_output(self.cols(), y.len())?;
        let cols = self.cols();
        let a = self.as_slice();
        for (j, yj) in y.as_mut_slice().iter_mut().enumerate() {
            *yj = x
                .iter()
                .enumerate()
                .fold(D::zero(), |acc, (i, &xi)| acc + xi * a[i * cols + j]);
        }
        Ok(())
    }
}

impl<D: Scalar> MatShape for Matrix<D> {
    fn nrows(&self) -> usize {
        self.rows()
    }
    fn ncols(&self) -> usize {
        self.cols()
    }
}

impl<D: Scalar> MatVec<Vector3<D>> for Matrix3<D> {
    fn matvec(&self, x: &Vector3<D>, y: &mut Vector3<D>) -> Result<()> {
        *y = *self * *x;
        Ok(())
    }
}

impl<D: Scalar> MatTransVec<Vector3<D>> for Matrix3<D> {
    fn mattransvec(&self, x: &Vector3<D>, y: &mut Vector3<D>) -> Result<()> {
        *y = *x * *self;
        Ok(())
    }
}

impl<D: Scalar> MatShape for Matrix3<D> {
    fn nrows(&self) -> usize {
        3
    }
    fn ncols(&self) -> usize {
        3
    }
}

/// Inner product and Euclidean norm for dynamic vectors.
impl<D: Scalar> InnerProduct<Vector<D>> for () {
    type Scalar = D;

    fn dot(&self, x: &Vector<D>, y: &Vector<D>) -> Result<D> {
        x.dot(y)
    }

    fn norm(&self, x: &Vector<D>) -> D {
        x.magnitude()
    }
}

impl<D: Scalar> InnerProduct<Vector3<D>> for () {
    type Scalar = D;

    fn dot(&self, x: &Vector3<D>, y: &Vector3<D>) -> Result<D> {
        Ok(x.dot(*y))
    }

    fn norm(&self, x: &Vector3<D>) -> D {
        scalar::sqrt(x.sqr_magnitude())
    }
}

// Absolute-difference comparisons reuse `near_with`, so the bound is strict.

impl<D: Scalar> AbsDiffEq for Vector<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.near_with(other, &LinalgOptions::new().with_epsilon(epsilon))
    }
}

impl<D: Scalar> AbsDiffEq for Matrix<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.near_with(other, &LinalgOptions::new().with_epsilon(epsilon))
    }
}

impl<D: Scalar> AbsDiffEq for Vector3<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.near_with(*other, &LinalgOptions::new().with_epsilon(epsilon))
    }
}

impl<D: Scalar> AbsDiffEq for Matrix3<D> {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        DEFAULT_EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        Matrix::from(*self).abs_diff_eq(&Matrix::from(*other), epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn matvec_checks_both_lengths() {
        let a = Matrix::from_array([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]).unwrap();
        let mut y = Vector::new(3);
        a.matvec(&Vector::from([1.0, 1.0]), &mut y).unwrap();
        assert_eq!(y, Vector::from([3.0, 7.0, 11.0]));

        assert!(a.matvec(&Vector::from([1.0, 1.0, 1.0]), &mut y).is_err());
        let mut short = Vector::new(2);
        assert_eq!(
            a.matvec(&Vector::from([1.0, 1.0]), &mut short),
            Err(LinalgError::LengthMismatch { expected: 3, found: 2 })
        );
    }

    #[test]
    fn mattransvec_is_row_vector_product() {
        let a = Matrix::from_array([[1, 2], [3, 4], [5, 6]]).unwrap();
        let mut y = Vector::new(2);
        a.mattransvec(&Vector::from([1, 0, 1]), &mut y).unwrap();
        assert_eq!(y, Vector::from([6, 8]));
        assert_eq!((a.nrows(), a.ncols()), (3, 2));
    }

    #[test]
    fn fixed_and_dynamic_mat_vec_agree() {
        let m3 = Matrix3::new([[1.0, 2.0, 0.0], [0.0, 1.0, 0.0], [2.0, 0.0, 1.0]]);
        let v3 = Vector3::new(1.0, -1.0, 2.0);
        let mut out3 = Vector3::zero();
        m3.matvec(&v3, &mut out3).unwrap();

        let m = Matrix::from(m3);
        let mut out = Vector::new(3);
        m.matvec(&Vector::from(v3), &mut out).unwrap();
        assert_abs_diff_eq!(Vector::from(out3), out);

        m3.mattransvec(&v3, &mut out3).unwrap();
        m.mattransvec(&Vector::from(v3), &mut out).unwrap();
        assert_abs_diff_eq!(Vector::from(out3), out);
    }
}
