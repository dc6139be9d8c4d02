//! Constant, identity, triangular and rotation matrices.

use super::Matrix;
use crate::core::axis::Axis;
use crate::core::scalar::{self, Scalar};
use crate::error::{LinalgError, Result};

impl<D: Scalar> Matrix<D> {
    /// Filled with a single value.
    pub fn filled(rows: usize, cols: usize, value: D) -> Result<Self> {
        Self::from_fn(rows, cols, |_, _| value)
    }

    pub fn zero(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, D::zero())
    }

    pub fn one(rows: usize, cols: usize) -> Result<Self> {
        Self::filled(rows, cols, D::one())
    }

    /// `n×n` identity.
    pub fn identity(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if i == j { D::one() } else { D::zero() })
    }

    /// Ones on and above the diagonal.
    pub fn upper_triangular(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if j >= i { D::one() } else { D::zero() })
    }

    /// Ones on and below the diagonal.
    pub fn lower_triangular(n: usize) -> Result<Self> {
        Self::from_fn(n, n, |i, j| if j <= i { D::one() } else { D::zero() })
    }

    /// Counter-clockwise 2D rotation by `theta` radians.
    pub fn rot2d(theta: D) -> Self {
        let (s, c) = (scalar::sin(theta), scalar::cos(theta));
        Self::from_raw_parts(2, 2, vec![c, -s, s, c])
    }

    /// 3D rotation by `theta` radians about a coordinate axis.
    ///
    /// Fails for `Axis::W`.
    pub fn rot3d(axis: Axis, theta: D) -> Result<Self> {
        let (s, c) = (scalar::sin(theta), scalar::cos(theta));
        let (o, z) = (D::one(), D::zero());
        let data = match axis {
            Axis::X => vec![o, z, z, z, c, -s, z, s, c],
            Axis::Y => vec![c, z, s, z, o, z, -s, z, c],
            Axis::Z => vec![c, -s, z, s, c, z, z, z, o],
            Axis::W => return Err(LinalgError::InvalidAxis(axis.index())),
        };
        Ok(Self::from_raw_parts(3, 3, data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn triangular_fill() {
        let u = Matrix::<i32>::upper_triangular(3).unwrap();
        assert_eq!(u.to_nested_vec(), vec![vec![1, 1, 1], vec![0, 1, 1], vec![0, 0, 1]]);
        assert_eq!(Matrix::<i32>::lower_triangular(3).unwrap(), u.transpose());
    }

    #[test]
    fn factories_reject_zero_dimensions() {
        assert!(Matrix::<f64>::identity(0).is_err());
        assert!(Matrix::<f64>::zero(2, 0).is_err());
        assert_eq!(Matrix::<f64>::one(2, 2).unwrap().sum(), 4.0);
    }

    #[test]
    fn rotations() {
        let r = Matrix::rot2d(FRAC_PI_2);
        assert!(r.near(&Matrix::from_array([[0.0, -1.0], [1.0, 0.0]]).unwrap()));
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let m = Matrix::rot3d(axis, 0.3).unwrap();
            assert!(m.mul_matrix(&m.transpose()).unwrap().near(&Matrix::identity(3).unwrap()));
        }
        assert_eq!(Matrix::rot3d(Axis::W, 0.3), Err(LinalgError::InvalidAxis(3)));
    }
}
