//! The scalar abstraction every `Vector` and `Matrix` is generic over.
//!
//! A scalar is any signed, bounded, castable number: all built-in floats and
//! signed integers qualify through the blanket impl below. Transcendental
//! functions go through `f64` and convert back saturating, so integer
//! scalars clamp instead of overflowing.
//!
//! Elimination-based routines (`det`, `inv`, `adj`, ...) divide by pivots,
//! so they additionally require `num_traits::Float`. Integer matrices can go
//! through them after `Matrix::cast`.

use num_traits::{Bounded, NumCast, Signed, ToPrimitive};
use std::fmt::{Debug, Display};

/// A real-number-like element type.
pub trait Scalar: Signed + Bounded + NumCast + Copy + PartialOrd + Debug + Display {
    /// Widen to `f64`. Values that cannot be represented map to zero.
    fn to_real(self) -> f64 {
        <Self as ToPrimitive>::to_f64(&self).unwrap_or(0.0)
    }

    /// Narrow from `f64`, clamping to the representable range.
    ///
    /// NaN becomes zero for types that cannot hold it. Infinities pass
    /// through only when the input was already infinite.
    fn from_real(value: f64) -> Self {
        match <Self as NumCast>::from(value) {
            Some(v) if value.is_finite() && v.to_real().is_infinite() => {
                if value > 0.0 { Self::max_value() } else { Self::min_value() }
            }
            Some(v) => v,
            None if value.is_nan() => Self::zero(),
            None if value > 0.0 => Self::max_value(),
            None => Self::min_value(),
        }
    }

    /// `|a - b| < epsilon`, compared in `f64`.
    fn near(self, other: Self, epsilon: f64) -> bool {
        (self.to_real() - other.to_real()).abs() < epsilon
    }

    fn near_zero(self, epsilon: f64) -> bool {
        self.to_real().abs() < epsilon
    }
}

impl<T> Scalar for T where T: Signed + Bounded + NumCast + Copy + PartialOrd + Debug + Display {}

pub fn sqrt<D: Scalar>(x: D) -> D {
    D::from_real(x.to_real().sqrt())
}

pub fn sin<D: Scalar>(x: D) -> D {
    D::from_real(x.to_real().sin())
}

pub fn cos<D: Scalar>(x: D) -> D {
    D::from_real(x.to_real().cos())
}

pub fn pow<D: Scalar>(base: D, exp: f64) -> D {
    D::from_real(base.to_real().powf(exp))
}
