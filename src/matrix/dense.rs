//! Row-major dense matrix over any `Scalar`.
//!
//! `Matrix<D>` stores `rows * cols` elements in one row-major buffer, so every
//! row is a contiguous slice of exactly `cols` elements. Both dimensions are
//! positive and fixed for the lifetime of the value; there is no way to build
//! an empty or ragged matrix.
//!
//! Every constructor copies (or takes ownership of) its input, and every
//! operation returning a `Matrix` allocates fresh storage: no two matrices
//! ever share a buffer. Mutation happens only through the `_in_place`
//! methods, `set`/`set_row`/`set_column`, and `IndexMut`. Concurrent mutation
//! from several threads needs external synchronization.

use std::fmt;

use crate::config::LinalgOptions;
use crate::core::scalar::Scalar;
use crate::core::traits::{MatTransVec, MatVec};
use crate::error::{LinalgError, Result};
use crate::utils::fast_list;
use crate::vector::Vector;

#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<D> {
    rows: usize,
    cols: usize,
    data: Vec<D>,
}

impl<D: Scalar> Matrix<D> {
    /// Takes ownership of a flat row-major buffer.
    ///
    /// Fails if `data` is empty or does not hold exactly `rows * cols`
    /// elements.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<D>) -> Result<Self> {
        if data.is_empty() {
            return Err(LinalgError::EmptyData);
        }
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(LinalgError::ShapeMismatch { rows, cols, len: data.len() });
        }
        Ok(Self { rows, cols, data })
    }

    /// Caller guarantees `rows * cols == data.len()` with both positive.
    pub(crate) fn from_raw_parts(rows: usize, cols: usize, data: Vec<D>) -> Self {
        debug_assert!(rows > 0 && cols > 0 && rows * cols == data.len());
        Self { rows, cols, data }
    }

    pub fn from_slice(rows: usize, cols: usize, data: &[D]) -> Result<Self> {
        Self::from_vec(rows, cols, data.to_vec())
    }

    /// From a two-dimensional array; fails if it has no elements.
    pub fn from_array<const R: usize, const C: usize>(arr: [[D; C]; R]) -> Result<Self> {
        if R * C == 0 {
            return Err(LinalgError::EmptyData);
        }
        let data = arr.iter().flat_map(|row| row.iter().copied()).collect();
        Ok(Self { rows: R, cols: C, data })
    }

    /// From a jagged set of rows. Every row must match the first row's
    /// length, which must be positive.
    pub fn from_rows<R: AsRef<[D]>>(rows: &[R]) -> Result<Self> {
        let first = rows.first().ok_or(LinalgError::EmptyData)?;
        let cols = first.as_ref().len();
        if cols == 0 {
            return Err(LinalgError::EmptyData);
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(LinalgError::RaggedRows { row: i, expected: cols, found: row.len() });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { rows: rows.len(), cols, data })
    }

    pub fn from_row_vectors(rows: &[Vector<D>]) -> Result<Self> {
        Self::from_rows(rows)
    }

    /// Generates every cell from its `(row, col)` coordinates.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> D,
    {
        check_dims(rows, cols)?;
        let data = fast_list::generate(rows * cols, |k| f(k / cols, k % cols));
        Ok(Self { rows, cols, data })
    }

    /// Applies the same per-column generator to every row.
    pub fn from_row_fn<F>(rows: usize, cols: usize, mut f: F) -> Result<Self>
    where
        F: FnMut(usize) -> D,
    {
        check_dims(rows, cols)?;
        let row = fast_list::generate(cols, |c| f(c));
        let mut data = Vec::with_capacity(rows * cols);
        for _ in 0..rows {
            data.extend_from_slice(&row);
        }
        Ok(Self { rows, cols, data })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements.
    pub fn count(&self) -> usize {
        self.data.len()
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows {
            return Err(LinalgError::IndexOutOfRange { index: row, len: self.rows });
        }
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfRange { index: col, len: self.cols });
        }
        Ok(row * self.cols + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<D> {
        Ok(self.data[self.offset(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, value: D) -> Result<()> {
        let k = self.offset(row, col)?;
        self.data[k] = value;
        Ok(())
    }

    pub fn row_slice(&self, row: usize) -> Result<&[D]> {
        let start = self.offset(row, 0)?;
        Ok(&self.data[start..start + self.cols])
    }

    /// Copy of one row.
    pub fn row(&self, row: usize) -> Result<Vector<D>> {
        Ok(Vector::from_slice(self.row_slice(row)?))
    }

    /// Copy of one column.
    pub fn column(&self, col: usize) -> Result<Vector<D>> {
        if col >= self.cols {
            return Err(LinalgError::IndexOutOfRange { index: col, len: self.cols });
        }
        Ok(Vector::from_fn(self.rows, |r| self.data[r * self.cols + col]))
    }

    /// Overwrites a row; `values` must have exactly `cols` elements.
    pub fn set_row(&mut self, row: usize, values: &[D]) -> Result<()> {
        if values.len() != self.cols {
            return Err(LinalgError::LengthMismatch { expected: self.cols, found: values.len() });
        }
        let start = self.offset(row, 0)?;
        self.data[start..start + self.cols].copy_from_slice(values);
        Ok(())
    }

    pub fn set_column(&mut self, col: usize, values: &[D]) -> Result<()> {
        if values.len() != self.rows {
            return Err(LinalgError::LengthMismatch { expected: self.rows, found: values.len() });
        }
        self.offset(0, col)?;
        for (r, &v) in values.iter().enumerate() {
            self.data[r * self.cols + col] = v;
        }
        Ok(())
    }

    /// One independent copy per row, in row order.
    pub fn get_rows(&self) -> Vec<Vector<D>> {
        self.data.chunks_exact(self.cols).map(Vector::from_slice).collect()
    }

    /// One independent copy per column, in column order.
    pub fn get_columns(&self) -> Vec<Vector<D>> {
        (0..self.cols)
            .map(|c| Vector::from_fn(self.rows, |r| self.data[r * self.cols + c]))
            .collect()
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[D] {
        &self.data
    }

    /// Flat row-major mutable view; the shape cannot change through it.
    pub fn as_mut_slice(&mut self) -> &mut [D] {
        &mut self.data
    }

    pub fn to_nested_vec(&self) -> Vec<Vec<D>> {
        self.data.chunks_exact(self.cols).map(<[D]>::to_vec).collect()
    }

    /// Element-by-element conversion to another scalar type, saturating at
    /// the target's bounds.
    pub fn cast<E: Scalar>(&self) -> Matrix<E> {
        let data = fast_list::map(&self.data, |x: D| E::from_real(x.to_real()));
        Matrix { rows: self.rows, cols: self.cols, data }
    }

    fn check_square(&self) -> Result<()> {
        if !self.is_square() {
            return Err(LinalgError::NotSquare { rows: self.rows, cols: self.cols });
        }
        Ok(())
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) -> Result<()> {
        self.offset(a, 0)?;
        self.offset(b, 0)?;
        if a != b {
            for c in 0..self.cols {
                self.data.swap(a * self.cols + c, b * self.cols + c);
            }
        }
        Ok(())
    }

    /// Copy without row `row`; fails if that would leave no rows.
    pub fn remove_row(&self, row: usize) -> Result<Self> {
        self.offset(row, 0)?;
        if self.rows == 1 {
            return Err(LinalgError::EmptyData);
        }
        let data = self
            .data
            .chunks_exact(self.cols)
            .enumerate()
            .filter(|&(r, _)| r != row)
            .flat_map(|(_, chunk)| chunk.iter().copied())
            .collect();
        Ok(Self { rows: self.rows - 1, cols: self.cols, data })
    }

    /// Copy without column `col`; fails if that would leave no columns.
    pub fn remove_column(&self, col: usize) -> Result<Self> {
        self.offset(0, col)?;
        if self.cols == 1 {
            return Err(LinalgError::EmptyData);
        }
        let data = self
            .data
            .iter()
            .enumerate()
            .filter(|&(k, _)| k % self.cols != col)
            .map(|(_, &v)| v)
            .collect();
        Ok(Self { rows: self.rows, cols: self.cols - 1, data })
    }

    /// The submatrix left after deleting `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        self.remove_row(row)?.remove_column(col)
    }

    fn check_same_shape(&self, other: &Self, op: &'static str) -> Result<()> {
        if self.shape() != other.shape() {
            return Err(LinalgError::DimensionMismatch { op, left: self.shape(), right: other.shape() });
        }
        Ok(())
    }

    /// `f(self[i][j], other[i][j])`; shapes must be identical.
    pub fn composite<F: FnMut(D, D) -> D>(&self, other: &Self, f: F) -> Result<Self> {
        self.check_same_shape(other, "composite")?;
        let data = fast_list::composite(&self.data, &other.data, f)?;
        Ok(Self { rows: self.rows, cols: self.cols, data })
    }

    pub fn composite_in_place<F: FnMut(D, D) -> D>(&mut self, other: &Self, f: F) -> Result<()> {
        self.check_same_shape(other, "composite")?;
        fast_list::composite_in_place(&mut self.data, &other.data, f)
    }

    /// `f(self[i][j], scalar)` for every cell.
    pub fn combine<F: FnMut(D, D) -> D>(&self, scalar: D, f: F) -> Self {
        Self { rows: self.rows, cols: self.cols, data: fast_list::combine(&self.data, scalar, f) }
    }

    pub fn combine_in_place<F: FnMut(D, D) -> D>(&mut self, scalar: D, f: F) {
        fast_list::combine_in_place(&mut self.data, scalar, f);
    }

    pub fn map<F: FnMut(D) -> D>(&self, f: F) -> Self {
        Self { rows: self.rows, cols: self.cols, data: fast_list::map(&self.data, f) }
    }

    pub fn map_in_place<F: FnMut(D) -> D>(&mut self, f: F) {
        fast_list::map_in_place(&mut self.data, f);
    }

    /// Regenerates every cell from its coordinates, ignoring prior values.
    pub fn remap<F: FnMut(usize, usize) -> D>(&self, f: F) -> Self {
        let mut m = self.clone();
        m.remap_in_place(f);
        m
    }

    pub fn remap_in_place<F: FnMut(usize, usize) -> D>(&mut self, mut f: F) {
        let cols = self.cols;
        for (k, v) in self.data.iter_mut().enumerate() {
            *v = f(k / cols, k % cols);
        }
    }

    /// Folds every element, in row-major order, into one running total.
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

    pub fn max(&self) -> D {
        self.accumulate(D::min_value(), |acc, x| if x > acc { x } else { acc })
    }

    pub fn min(&self) -> D {
        self.accumulate(D::max_value(), |acc, x| if x < acc { x } else { acc })
    }

    /// Sum of the diagonal; square matrices only.
    pub fn trace(&self) -> Result<D> {
        self.check_square()?;
        Ok((0..self.rows).fold(D::zero(), |acc, i| acc + self.data[i * self.cols + i]))
    }

    /// Columns become rows.
    pub fn transpose(&self) -> Self {
        let (rows, cols) = (self.cols, self.rows);
        let data = fast_list::generate(rows * cols, |k| self.data[(k % cols) * self.cols + k / cols]);
        Self { rows, cols, data }
    }

    /// Matrix product; requires `self.cols == other.rows`.
    pub fn mul_matrix(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(LinalgError::DimensionMismatch { op: "mul", left: self.shape(), right: other.shape() });
        }
        let (n, p) = (self.cols, other.cols);
        let data = fast_list::generate(self.rows * p, |k| {
            let (r, c) = (k / p, k % p);
            (0..n).fold(D::zero(), |acc, i| acc + self.data[r * n + i] * other.data[i * p + c])
        });
        Ok(Self { rows: self.rows, cols: p, data })
    }

    /// `self * v` with `v` as a column vector; result has `rows` elements.
    pub fn mul_vector(&self, v: &Vector<D>) -> Result<Vector<D>> {
        let mut y = Vector::new(self.rows);
        self.matvec(v, &mut y)?;
        Ok(y)
    }

    /// Elementwise division by a scalar.
    pub fn div_scalar(&self, scalar: D) -> Self {
        self.combine(scalar, |x, s| x / s)
    }

    pub fn add_matrix(&self, other: &Self) -> Result<Self> {
        self.composite(other, |a, b| a + b)
    }

    pub fn sub_matrix(&self, other: &Self) -> Result<Self> {
        self.composite(other, |a, b| a - b)
    }

    /// `self` multiplied by itself `n` times; `n == 0` gives the identity.
    pub fn pow(&self, n: u32) -> Result<Self> {
        self.check_square()?;
        let mut acc = Self::identity(self.rows)?;
        for _ in 0..n {
            acc = acc.mul_matrix(self)?;
        }
        Ok(acc)
    }

    pub fn near(&self, other: &Self) -> bool {
        self.near_with(other, &LinalgOptions::default())
    }

    /// Elementwise approximate equality; false if shapes differ.
    pub fn near_with(&self, other: &Self, options: &LinalgOptions) -> bool {
        self.shape() == other.shape()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a.near(b, options.epsilon))
    }
}

impl<D: Scalar> Vector<D> {
    /// `self * m` with `self` as a row vector; requires `len == m.rows()`.
    pub fn mul_matrix(&self, m: &Matrix<D>) -> Result<Vector<D>> {
        let mut y = Vector::new(m.cols());
        m.mattransvec(self, &mut y)?;
        Ok(y)
    }
}

fn check_dims(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(LinalgError::InvalidDimensions { rows, cols });
    }
    Ok(())
}

impl<D: Scalar> TryFrom<Vec<Vec<D>>> for Matrix<D> {
    type Error = LinalgError;

    fn try_from(rows: Vec<Vec<D>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<D: Scalar> From<Matrix<D>> for Vec<Vec<D>> {
    fn from(m: Matrix<D>) -> Self {
        m.to_nested_vec()
    }
}

impl<D: fmt::Display> fmt::Display for Matrix<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (r, row) in self.data.chunks_exact(self.cols).enumerate() {
            if r > 0 {
                write!(f, "; ")?;
            }
            write!(f, "(")?;
            for (c, v) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{v}")?;
            }
            write!(f, ")")?;
        }
        write!(f, "]")
    }
}
