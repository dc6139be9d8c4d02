//! Operator overloads for `Vector`.
//!
//! Binary vector-vector operators panic on length mismatch; use the named
//! `composite`/`dot` methods for the fallible forms. `&a * &b` between two
//! vectors is the dot product, not an elementwise product.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use super::Vector;
use crate::core::scalar::Scalar;

fn unwrap_op<T>(result: crate::error::Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

impl<D> Index<usize> for Vector<D> {
    type Output = D;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_ref()[index]
    }
}

impl<D> IndexMut<usize> for Vector<D> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut()[index]
    }
}

/// Elementwise sum.
impl<D: Scalar> Add for &Vector<D> {
    type Output = Vector<D>;

    fn add(self, rhs: Self) -> Self::Output {
        unwrap_op(self.composite(rhs, |a, b| a + b))
    }
}

impl<D: Scalar> Add for Vector<D> {
    type Output = Vector<D>;

    fn add(self, rhs: Self) -> Self::Output {
        &self + &rhs
    }
}

/// Elementwise difference.
impl<D: Scalar> Sub for &Vector<D> {
    type Output = Vector<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_op(self.composite(rhs, |a, b| a - b))
    }
}

impl<D: Scalar> Sub for Vector<D> {
    type Output = Vector<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        &self - &rhs
    }
}

impl<D: Scalar> Neg for &Vector<D> {
    type Output = Vector<D>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<D: Scalar> Neg for Vector<D> {
    type Output = Vector<D>;

    fn neg(mut self) -> Self::Output {
        self.map_in_place(|x| -x);
        self
    }
}

/// Dot product.
impl<D: Scalar> Mul for &Vector<D> {
    type Output = D;

    fn mul(self, rhs: Self) -> D {
        unwrap_op(self.dot(rhs))
    }
}

/// Vector * Scalar.
impl<D: Scalar> Mul<D> for &Vector<D> {
    type Output = Vector<D>;

    fn mul(self, rhs: D) -> Self::Output {
        self.combine(rhs, |x, s| x * s)
    }
}

impl<D: Scalar> Mul<D> for Vector<D> {
    type Output = Vector<D>;

    fn mul(mut self, rhs: D) -> Self::Output {
        self *= rhs;
        self
    }
}

/// Vector / Scalar.
impl<D: Scalar> Div<D> for &Vector<D> {
    type Output = Vector<D>;

    fn div(self, rhs: D) -> Self::Output {
        self.combine(rhs, |x, s| x / s)
    }
}

impl<D: Scalar> Div<D> for Vector<D> {
    type Output = Vector<D>;

    fn div(mut self, rhs: D) -> Self::Output {
        self /= rhs;
        self
    }
}

impl<D: Scalar> AddAssign<&Vector<D>> for Vector<D> {
    fn add_assign(&mut self, rhs: &Vector<D>) {
        unwrap_op(self.composite_in_place(rhs, |a, b| a + b));
    }
}

impl<D: Scalar> SubAssign<&Vector<D>> for Vector<D> {
    fn sub_assign(&mut self, rhs: &Vector<D>) {
        unwrap_op(self.composite_in_place(rhs, |a, b| a - b));
    }
}

impl<D: Scalar> MulAssign<D> for Vector<D> {
    fn mul_assign(&mut self, rhs: D) {
        self.combine_in_place(rhs, |x, s| x * s);
    }
}

impl<D: Scalar> DivAssign<D> for Vector<D> {
    fn div_assign(&mut self, rhs: D) {
        self.combine_in_place(rhs, |x, s| x / s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_elementwise_except_vector_product() {
        let a = Vector::from([1.0, 2.0, 3.0]);
        let b = Vector::from([0.5, 0.5, 0.5]);
        assert_eq!(&a + &b, Vector::from([1.5, 2.5, 3.5]));
        assert_eq!(&a - &b, Vector::from([0.5, 1.5, 2.5]));
        assert_eq!(&a * 2.0, Vector::from([2.0, 4.0, 6.0]));
        assert_eq!(&a / 2.0, Vector::from([0.5, 1.0, 1.5]));
        assert_eq!(-&a, Vector::from([-1.0, -2.0, -3.0]));
        assert_eq!(&a * &b, 3.0);
    }

    #[test]
    fn compound_assignment_mutates_receiver() {
        let mut a = Vector::from([1, 2, 3]);
        a += &Vector::from([1, 1, 1]);
        a *= 3;
        a -= &Vector::from([0, 3, 6]);
        assert_eq!(a, Vector::from([6, 6, 6]));
        a[1] = 0;
        assert_eq!(a[1], 0);
    }

    #[test]
    #[should_panic(expected = "length mismatch")]
    fn add_panics_on_length_mismatch() {
        let _ = &Vector::from([1.0, 2.0]) + &Vector::from([1.0]);
    }
}
