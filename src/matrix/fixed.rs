//! Fixed 3×3 matrix with unrolled algebra.
//!
//! `Matrix3<D>` mirrors the generic `Matrix` contract for the common 3D
//! case: rule-of-Sarrus determinant, explicit cofactors, and stack storage.

use std::fmt;
use std::ops::{Index, IndexMut, Mul};

use num_traits::Float;

use super::Matrix;
use crate::config::LinalgOptions;
use crate::core::axis::Axis;
use crate::core::scalar::{self, Scalar};
use crate::error::{LinalgError, Result};
use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3<D> {
    m: [[D; 3]; 3],
}

impl<D: Scalar> Matrix3<D> {
    /// From three rows.
    pub fn new(m: [[D; 3]; 3]) -> Self {
        Self { m }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> D>(mut f: F) -> Self {
        Self::new([
            [f(0, 0), f(0, 1), f(0, 2)],
            [f(1, 0), f(1, 1), f(1, 2)],
            [f(2, 0), f(2, 1), f(2, 2)],
        ])
    }

    pub fn zero() -> Self {
        Self::new([[D::zero(); 3]; 3])
    }

    pub fn identity() -> Self {
        Self::from_fn(|i, j| if i == j { D::one() } else { D::zero() })
    }

    /// Rotation by `theta` radians about a coordinate axis; fails for `W`.
    pub fn rot(axis: Axis, theta: D) -> Result<Self> {
        let (s, c) = (scalar::sin(theta), scalar::cos(theta));
        let (o, z) = (D::one(), D::zero());
        Ok(match axis {
            Axis::X => Self::new([[o, z, z], [z, c, -s], [z, s, c]]),
            Axis::Y => Self::new([[c, z, s], [z, o, z], [-s, z, c]]),
            Axis::Z => Self::new([[c, -s, z], [s, c, z], [z, z, o]]),
            Axis::W => return Err(LinalgError::InvalidAxis(axis.index())),
        })
    }

    pub fn row(&self, i: usize) -> Vector3<D> {
        let [x, y, z] = self.m[i];
        Vector3::new(x, y, z)
    }

    pub fn column(&self, j: usize) -> Vector3<D> {
        Vector3::new(self.m[0][j], self.m[1][j], self.m[2][j])
    }

    pub fn to_array(self) -> [[D; 3]; 3] {
        self.m
    }

    pub fn det(&self) -> D {
        let m = &self.m;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(|i, j| self.m[j][i])
    }

    /// Signed 2×2 minor at `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> D {
        let (r0, r1) = ((row + 1) % 3, (row + 2) % 3);
        let (c0, c1) = ((col + 1) % 3, (col + 2) % 3);
        // cyclic index order already carries the (-1)^(row+col) sign
        self.m[r0][c0] * self.m[r1][c1] - self.m[r0][c1] * self.m[r1][c0]
    }

    pub fn adj(&self) -> Self {
        Self::from_fn(|i, j| self.cofactor(j, i))
    }

    pub fn map<F: FnMut(D) -> D>(&self, mut f: F) -> Self {
        Self::from_fn(|i, j| f(self.m[i][j]))
    }

    pub fn near(&self, other: &Self) -> bool {
        let eps = LinalgOptions::default().epsilon;
        (0..3).all(|i| (0..3).all(|j| self.m[i][j].near(other.m[i][j], eps)))
    }
}

impl<D: Scalar + Float> Matrix3<D> {
    pub fn inv(&self) -> Result<Self> {
        self.inv_with(&LinalgOptions::default())
    }

    /// `adj() / det()`; fails if the determinant is near zero.
    pub fn inv_with(&self, options: &LinalgOptions) -> Result<Self> {
        let det = self.det();
        if det.near_zero(options.epsilon) {
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.adj().map(|x| x / det))
    }
}

impl<D> Index<(usize, usize)> for Matrix3<D> {
    type Output = D;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &D {
        &self.m[row][col]
    }
}

impl<D> IndexMut<(usize, usize)> for Matrix3<D> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut D {
        &mut self.m[row][col]
    }
}

/// Matrix3 * Matrix3.
impl<D: Scalar> Mul for Matrix3<D> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self::from_fn(|i, j| self.row(i).dot(rhs.column(j)))
    }
}

/// Matrix3 * Column Vector3.
impl<D: Scalar> Mul<Vector3<D>> for Matrix3<D> {
    type Output = Vector3<D>;

    fn mul(self, v: Vector3<D>) -> Vector3<D> {
        Vector3::new(self.row(0).dot(v), self.row(1).dot(v), self.row(2).dot(v))
    }
}

/// Row Vector3 * Matrix3.
impl<D: Scalar> Mul<Matrix3<D>> for Vector3<D> {
    type Output = Vector3<D>;

    fn mul(self, m: Matrix3<D>) -> Vector3<D> {
        Vector3::new(self.dot(m.column(0)), self.dot(m.column(1)), self.dot(m.column(2)))
    }
}

impl<D: Scalar> Mul<D> for Matrix3<D> {
    type Output = Self;

    fn mul(self, rhs: D) -> Self {
        self.map(|x| x * rhs)
    }
}

impl<D: Scalar> From<Matrix3<D>> for Matrix<D> {
    fn from(m: Matrix3<D>) -> Self {
        Matrix::from_raw_parts(3, 3, m.m.iter().flatten().copied().collect())
    }
}

impl<D: Scalar> TryFrom<&Matrix<D>> for Matrix3<D> {
    type Error = LinalgError;

    fn try_from(m: &Matrix<D>) -> Result<Self> {
        if m.shape() != (3, 3) {
            return Err(LinalgError::DimensionMismatch { op: "into Matrix3", left: m.shape(), right: (3, 3) });
        }
        let a = m.as_slice();
        Ok(Self::from_fn(|i, j| a[i * 3 + j]))
    }
}

impl<D: fmt::Display> fmt::Display for Matrix3<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = |i: usize| format!("({}, {}, {})", self.m[i][0], self.m[i][1], self.m[i][2]);
        write!(f, "[{}; {}; {}]", r(0), r(1), r(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Matrix3<f64> {
        Matrix3::new([[2.0, 4.0, 1.0], [3.0, 5.0, 6.0], [5.0, 7.0, 8.0]])
    }

    #[test]
    fn agrees_with_generic_engine() {
        let m = sample();
        let g = Matrix::from(m);
        assert!(m.det().near(g.det().unwrap(), 1e-9));
        assert_eq!(Matrix::from(m.transpose()), g.transpose());
        assert!(Matrix::from(m.adj()).near(&g.adj().unwrap()));
        assert!(Matrix::from(m.inv().unwrap()).near(&g.inv().unwrap()));
    }

    #[test]
    fn inverse_round_trip() {
        let m = sample();
        assert!((m * m.inv().unwrap()).near(&Matrix3::identity()));
        assert_eq!(Matrix3::<f64>::zero().inv(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn rotation_about_z() {
        let r = Matrix3::rot(Axis::Z, std::f64::consts::FRAC_PI_2).unwrap();
        let x = Vector3::<f64>::unit(Axis::X).unwrap();
        assert!((r * x).near(Vector3::new(0.0, 1.0, 0.0)));
        assert!((x * r).near(Vector3::new(0.0, -1.0, 0.0)));
    }

    #[test]
    fn try_from_requires_3x3() {
        let g = Matrix::<i32>::identity(2).unwrap();
        assert!(Matrix3::<i32>::try_from(&g).is_err());
        let i = Matrix::<i32>::identity(3).unwrap();
        assert_eq!(Matrix3::try_from(&i).unwrap(), Matrix3::identity());
    }

    #[test]
    fn display_matches_generic_format() {
        let m = Matrix3::<i32>::identity();
        assert_eq!(m.to_string(), Matrix::from(m).to_string());
    }
}
