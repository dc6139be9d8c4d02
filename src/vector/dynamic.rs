//! Dynamic-length vector over any `Scalar`.
//!
//! `Vector<D>` owns a contiguous buffer whose length is fixed at construction.
//! Arithmetic returns new vectors; the `_in_place` methods mutate the
//! receiver's buffer. A vector is a plain owned value: sharing one between
//! threads for mutation needs external synchronization.

use std::fmt;

use crate::config::LinalgOptions;
use crate::core::axis::Axis;
use crate::core::scalar::{self, Scalar};
use crate::error::{LinalgError, Result};
use crate::utils::fast_list;

#[derive(Debug, Clone, PartialEq)]
pub struct Vector<D> {
    data: Vec<D>,
}

impl<D: Scalar> Vector<D> {
    /// Zero vector of length `len`.
    pub fn new(len: usize) -> Self {
        Self::filled(len, D::zero())
    }

    pub fn filled(len: usize, value: D) -> Self {
        Self { data: vec![value; len] }
    }

    pub fn from_vec(data: Vec<D>) -> Self {
        Self { data }
    }

    pub fn from_slice(data: &[D]) -> Self {
        Self { data: data.to_vec() }
    }

    /// Build each element from its index.
    pub fn from_fn<F>(len: usize, f: F) -> Self
    where
        F: FnMut(usize) -> D,
    {
        Self { data: fast_list::generate(len, f) }
    }

    /// Unit vector along `axis`; fails if `len` has no such component.
    pub fn unit(len: usize, axis: Axis) -> Result<Self> {
        if axis.index() >= len {
            return Err(LinalgError::ComponentMissing { component: axis.name(), len });
        }
        let mut v = Self::new(len);
        v.data[axis.index()] = D::one();
        Ok(v)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<D> {
        self.data
            .get(index)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange { index, len: self.len() })
    }

    pub fn set(&mut self, index: usize, value: D) -> Result<()> {
        let len = self.len();
        let slot = self
            .data
            .get_mut(index)
            .ok_or(LinalgError::IndexOutOfRange { index, len })?;
        *slot = value;
        Ok(())
    }

    pub fn component(&self, axis: Axis) -> Result<D> {
        self.data
            .get(axis.index())
            .copied()
            .ok_or(LinalgError::ComponentMissing { component: axis.name(), len: self.len() })
    }

    pub fn x(&self) -> Result<D> {
        self.component(Axis::X)
    }

    pub fn y(&self) -> Result<D> {
        self.component(Axis::Y)
    }

    pub fn z(&self) -> Result<D> {
        self.component(Axis::Z)
    }

    pub fn w(&self) -> Result<D> {
        self.component(Axis::W)
    }

    pub fn as_slice(&self) -> &[D] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [D] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<D> {
        self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.data.iter()
    }

    pub fn map<F: FnMut(D) -> D>(&self, f: F) -> Self {
        Self { data: fast_list::map(&self.data, f) }
    }

    pub fn map_in_place<F: FnMut(D) -> D>(&mut self, f: F) {
        fast_list::map_in_place(&mut self.data, f);
    }

    /// `f(element, scalar)` for every element.
    pub fn combine<F: FnMut(D, D) -> D>(&self, scalar: D, f: F) -> Self {
        Self { data: fast_list::combine(&self.data, scalar, f) }
    }

    pub fn combine_in_place<F: FnMut(D, D) -> D>(&mut self, scalar: D, f: F) {
        fast_list::combine_in_place(&mut self.data, scalar, f);
    }

    /// `f(self[i], other[i])`; lengths must agree.
    pub fn composite<F: FnMut(D, D) -> D>(&self, other: &Self, f: F) -> Result<Self> {
        Ok(Self { data: fast_list::composite(&self.data, &other.data, f)? })
    }

    pub fn composite_in_place<F: FnMut(D, D) -> D>(&mut self, other: &Self, f: F) -> Result<()> {
        fast_list::composite_in_place(&mut self.data, &other.data, f)
    }

    /// Folds the whole vector into `seed`.
    pub fn accumulate<A, F: FnMut(A, D) -> A>(&self, seed: A, f: F) -> A {
        fast_list::accumulate(&self.data, seed, f)
    }

    pub fn true_for_all<F: FnMut(D) -> bool>(&self, pred: F) -> bool {
        fast_list::for_all(&self.data, pred)
    }

    pub fn true_for_any<F: FnMut(D) -> bool>(&self, pred: F) -> bool {
        fast_list::for_any(&self.data, pred)
    }

    pub fn sum(&self) -> D {
        self.accumulate(D::zero(), |acc, x| acc + x)
    }

    /// Largest element; `D::min_value()` when empty.
    pub fn max(&self) -> D {
        self.accumulate(D::min_value(), |acc, x| if x > acc { x } else { acc })
    }

    /// Smallest element; `D::max_value()` when empty.
    pub fn min(&self) -> D {
        self.accumulate(D::max_value(), |acc, x| if x < acc { x } else { acc })
    }

    pub fn dot(&self, other: &Self) -> Result<D> {
        if self.len() != other.len() {
            return Err(LinalgError::LengthMismatch { expected: self.len(), found: other.len() });
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .fold(D::zero(), |acc, (&a, &b)| acc + a * b))
    }

    /// Cross product; both operands must have length 3.
    pub fn cross(&self, other: &Self) -> Result<Self> {
        for v in [self, other] {
            if v.len() != 3 {
                return Err(LinalgError::LengthMismatch { expected: 3, found: v.len() });
            }
        }
        let (a, b) = (&self.data, &other.data);
        Ok(Self::from_vec(vec![
            a[1] * b[2] - a[2] * b[1],
            a[2] * b[0] - a[0] * b[2],
            a[0] * b[1] - a[1] * b[0],
        ]))
    }

    pub fn sqr_magnitude(&self) -> D {
        self.accumulate(D::zero(), |acc, x| acc + x * x)
    }

    pub fn magnitude(&self) -> D {
        scalar::sqrt(self.sqr_magnitude())
    }

    pub fn normalized(&self) -> Result<Self> {
        self.normalized_with(&LinalgOptions::default())
    }

    pub fn normalized_with(&self, options: &LinalgOptions) -> Result<Self> {
        let mut v = self.clone();
        v.normalize_in_place_with(options)?;
        Ok(v)
    }

    pub fn normalize_in_place(&mut self) -> Result<()> {
        self.normalize_in_place_with(&LinalgOptions::default())
    }

    /// Scales to unit magnitude; fails if the magnitude is near zero.
    pub fn normalize_in_place_with(&mut self, options: &LinalgOptions) -> Result<()> {
        let mag = self.magnitude();
        if mag.near_zero(options.epsilon) {
            return Err(LinalgError::ZeroMagnitude);
        }
        self.combine_in_place(mag, |x, m| x / m);
        Ok(())
    }

    pub fn distance(&self, other: &Self) -> Result<D> {
        Ok(self.composite(other, |a, b| a - b)?.magnitude())
    }

    /// Angle between two vectors, in radians.
    pub fn angle(&self, other: &Self) -> Result<D> {
        let dot = self.dot(other)?.to_real();
        let denom = self.magnitude().to_real() * other.magnitude().to_real();
        if denom.abs() < LinalgOptions::default().epsilon {
            return Err(LinalgError::ZeroMagnitude);
        }
        Ok(D::from_real((dot / denom).clamp(-1.0, 1.0).acos()))
    }

    pub fn near(&self, other: &Self) -> bool {
        self.near_with(other, &LinalgOptions::default())
    }

    /// Elementwise approximate equality; false on length mismatch.
    pub fn near_with(&self, other: &Self, options: &LinalgOptions) -> bool {
        self.len() == other.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.near(b, options.epsilon))
    }
}

impl<D> From<Vec<D>> for Vector<D> {
    fn from(data: Vec<D>) -> Self {
        Self { data }
    }
}

impl<D, const N: usize> From<[D; N]> for Vector<D> {
    fn from(data: [D; N]) -> Self {
        Self { data: data.into() }
    }
}

impl<D> From<Vector<D>> for Vec<D> {
    fn from(v: Vector<D>) -> Self {
        v.data
    }
}

impl<D> AsRef<[D]> for Vector<D> {
    fn as_ref(&self) -> &[D] {
        &self.data
    }
}

impl<D> AsMut<[D]> for Vector<D> {
    fn as_mut(&mut self) -> &mut [D] {
        &mut self.data
    }
}

impl<'a, D> IntoIterator for &'a Vector<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<D: fmt::Display> fmt::Display for Vector<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
