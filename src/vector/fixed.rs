//! Fixed three-component vector.
//!
//! `Vector3<D>` is the unrolled counterpart of a length-3 `Vector<D>`; the
//! same algebra without a heap buffer.

use std::fmt;
use std::ops::{Add, Div, Index, IndexMut, Mul, Neg, Sub};

use super::Vector;
use crate::config::LinalgOptions;
use crate::core::axis::Axis;
use crate::core::scalar::{self, Scalar};
use crate::error::{LinalgError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector3<D> {
    pub x: D,
    pub y: D,
    pub z: D,
}

impl<D: Scalar> Vector3<D> {
    pub fn new(x: D, y: D, z: D) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(D::zero(), D::zero(), D::zero())
    }

    /// Unit vector along `axis`; `Axis::W` has no 3D counterpart.
    pub fn unit(axis: Axis) -> Result<Self> {
        let mut v = Self::zero();
        match axis {
            Axis::X => v.x = D::one(),
            Axis::Y => v.y = D::one(),
            Axis::Z => v.z = D::one(),
            Axis::W => return Err(LinalgError::InvalidAxis(axis.index())),
        }
        Ok(v)
    }

    pub fn dot(self, other: Self) -> D {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn sqr_magnitude(self) -> D {
        self.dot(self)
    }

    pub fn magnitude(self) -> D {
        scalar::sqrt(self.sqr_magnitude())
    }

    pub fn normalized(self) -> Result<Self> {
        let mag = self.magnitude();
        if mag.near_zero(LinalgOptions::default().epsilon) {
            return Err(LinalgError::ZeroMagnitude);
        }
        Ok(self / mag)
    }

    pub fn near(self, other: Self) -> bool {
        self.near_with(other, &LinalgOptions::default())
    }

    pub fn near_with(self, other: Self, options: &LinalgOptions) -> bool {
        let eps = options.epsilon;
        self.x.near(other.x, eps) && self.y.near(other.y, eps) && self.z.near(other.z, eps)
    }

    pub fn to_array(self) -> [D; 3] {
        [self.x, self.y, self.z]
    }
}

impl<D> Index<usize> for Vector3<D> {
    type Output = D;

    fn index(&self, index: usize) -> &D {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index {index} out of range for Vector3"),
        }
    }
}

impl<D> IndexMut<usize> for Vector3<D> {
    fn index_mut(&mut self, index: usize) -> &mut D {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index {index} out of range for Vector3"),
        }
    }
}

impl<D: Scalar> Add for Vector3<D> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<D: Scalar> Sub for Vector3<D> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<D: Scalar> Neg for Vector3<D> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// Dot product.
impl<D: Scalar> Mul for Vector3<D> {
    type Output = D;

    fn mul(self, rhs: Self) -> D {
        self.dot(rhs)
    }
}

impl<D: Scalar> Mul<D> for Vector3<D> {
    type Output = Self;

    fn mul(self, rhs: D) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<D: Scalar> Div<D> for Vector3<D> {
    type Output = Self;

    fn div(self, rhs: D) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<D: Scalar> From<Vector3<D>> for Vector<D> {
    fn from(v: Vector3<D>) -> Self {
        Vector::from(v.to_array())
    }
}

impl<D: Scalar> TryFrom<&Vector<D>> for Vector3<D> {
    type Error = LinalgError;

    fn try_from(v: &Vector<D>) -> Result<Self> {
        match v.as_slice() {
            &[x, y, z] => Ok(Self::new(x, y, z)),
            other => Err(LinalgError::LengthMismatch { expected: 3, found: other.len() }),
        }
    }
}

impl<D: fmt::Display> fmt::Display for Vector3<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agrees_with_dynamic_vector() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, -5.0, 6.0);
        let (da, db) = (Vector::from(a), Vector::from(b));
        assert_eq!(a.dot(b), da.dot(&db).unwrap());
        assert_eq!(Vector::from(a.cross(b)), da.cross(&db).unwrap());
        assert!(a.magnitude().near(da.magnitude(), 1e-12));
    }

    #[test]
    fn try_from_checks_length() {
        let v = Vector::from([1, 2, 3]);
        assert_eq!(Vector3::try_from(&v).unwrap(), Vector3::new(1, 2, 3));
        assert!(Vector3::<i32>::try_from(&Vector::from([1, 2])).is_err());
        assert!(Vector3::<f64>::unit(Axis::W).is_err());
    }

    #[test]
    fn unit_vectors_are_orthonormal() {
        let x = Vector3::<f64>::unit(Axis::X).unwrap();
        let y = Vector3::<f64>::unit(Axis::Y).unwrap();
        assert_eq!(x.cross(y), Vector3::unit(Axis::Z).unwrap());
        assert_eq!(x * y, 0.0);
        assert!((x * 3.0).normalized().unwrap().near(x));
    }
}
