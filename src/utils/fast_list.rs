//! Bulk elementwise operations over homogeneous slices.
//!
//! These are the loops every `Vector` and `Matrix` combinator is built on.
//! Each element-producing operation has an allocating form returning a fresh
//! `Vec` and an `_in_place` form writing into the receiver. Binary operations
//! require equal lengths and fail with `LinalgError::LengthMismatch`
//! otherwise.

use crate::error::{LinalgError, Result};

fn check_len(expected: usize, found: usize) -> Result<()> {
    if expected != found {
        return Err(LinalgError::LengthMismatch { expected, found });
    }
    Ok(())
}

/// Build a buffer of `len` elements from an index function.
pub fn generate<T, F>(len: usize, mut f: F) -> Vec<T>
where
    F: FnMut(usize) -> T,
{
    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        out.push(f(i));
    }
    out
}

/// `out[i] = f(src[i])`
pub fn map<T, U, F>(src: &[T], mut f: F) -> Vec<U>
where
    T: Copy,
    F: FnMut(T) -> U,
{
    src.iter().map(|&x| f(x)).collect()
}

pub fn map_in_place<T, F>(dst: &mut [T], mut f: F)
where
    T: Copy,
    F: FnMut(T) -> T,
{
    for x in dst.iter_mut() {
        *x = f(*x);
    }
}

/// `out[i] = f(src[i], scalar)`
pub fn combine<T, F>(src: &[T], scalar: T, mut f: F) -> Vec<T>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    src.iter().map(|&x| f(x, scalar)).collect()
}

pub fn combine_in_place<T, F>(dst: &mut [T], scalar: T, mut f: F)
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    for x in dst.iter_mut() {
        *x = f(*x, scalar);
    }
}

/// `out[i] = f(a[i], b[i])`; `a` and `b` must have equal length.
pub fn composite<T, F>(a: &[T], b: &[T], mut f: F) -> Result<Vec<T>>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    check_len(a.len(), b.len())?;
    Ok(a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect())
}

pub fn composite_in_place<T, F>(dst: &mut [T], other: &[T], mut f: F) -> Result<()>
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    check_len(dst.len(), other.len())?;
    for (x, &y) in dst.iter_mut().zip(other) {
        *x = f(*x, y);
    }
    Ok(())
}

/// Left fold of the whole slice into `seed`.
pub fn accumulate<T, A, F>(src: &[T], seed: A, mut f: F) -> A
where
    T: Copy,
    F: FnMut(A, T) -> A,
{
    let mut acc = seed;
    for &x in src {
        acc = f(acc, x);
    }
    acc
}

/// Running fold: `dst[i]` becomes the fold of `seed` with `dst[..=i]`.
/// Returns the final accumulator.
pub fn accumulate_in_place<T, F>(dst: &mut [T], seed: T, mut f: F) -> T
where
    T: Copy,
    F: FnMut(T, T) -> T,
{
    let mut acc = seed;
    for x in dst.iter_mut() {
        acc = f(acc, *x);
        *x = acc;
    }
    acc
}

/// True when `pred` holds for every element (vacuously true when empty).
pub fn for_all<T, F>(src: &[T], mut pred: F) -> bool
where
    T: Copy,
    F: FnMut(T) -> bool,
{
    for &x in src {
        if !pred(x) {
            return false;
        }
    }
    true
}

pub fn for_any<T, F>(src: &[T], mut pred: F) -> bool
where
    T: Copy,
    F: FnMut(T) -> bool,
{
    for &x in src {
        if pred(x) {
            return true;
        }
    }
    false
}
