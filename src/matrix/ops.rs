//! Operator overloads for `Matrix`.
//!
//! Shape violations panic here; the named methods (`add_matrix`,
//! `mul_matrix`, `mul_vector`, `div_matrix`, ...) return them as errors.
//!
//! `&a / &b` between two matrices is `a * b⁻¹`, while `&a / s` with a scalar
//! divides every element. The two are unrelated operations.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::Float;

use super::Matrix;
use crate::core::scalar::Scalar;
use crate::vector::Vector;

fn unwrap_op<T>(result: crate::error::Result<T>) -> T {
    match result {
        Ok(v) => v,
        Err(e) => panic!("{e}"),
    }
}

impl<D: Scalar> Index<(usize, usize)> for Matrix<D> {
    type Output = D;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        let (rows, cols) = self.shape();
        assert!(row < rows, "row {row} out of range for {rows} rows");
        assert!(col < cols, "column {col} out of range for {cols} columns");
        &self.as_slice()[row * cols + col]
    }
}

impl<D: Scalar> IndexMut<(usize, usize)> for Matrix<D> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        let (rows, cols) = self.shape();
        assert!(row < rows, "row {row} out of range for {rows} rows");
        assert!(col < cols, "column {col} out of range for {cols} columns");
        &mut self.as_mut_slice()[row * cols + col]
    }
}

/// Matrix + Matrix (elementwise).
impl<D: Scalar> Add for &Matrix<D> {
    type Output = Matrix<D>;

    fn add(self, rhs: Self) -> Self::Output {
        unwrap_op(self.add_matrix(rhs))
    }
}

/// Matrix - Matrix (elementwise).
impl<D: Scalar> Sub for &Matrix<D> {
    type Output = Matrix<D>;

    fn sub(self, rhs: Self) -> Self::Output {
        unwrap_op(self.sub_matrix(rhs))
    }
}

/// Matrix * Matrix.
impl<D: Scalar> Mul for &Matrix<D> {
    type Output = Matrix<D>;

    fn mul(self, rhs: Self) -> Self::Output {
        unwrap_op(self.mul_matrix(rhs))
    }
}

/// Matrix / Matrix, i.e. `self * rhs.inv()`.
impl<D: Scalar + Float> Div for &Matrix<D> {
    type Output = Matrix<D>;

    fn div(self, rhs: Self) -> Self::Output {
        unwrap_op(self.div_matrix(rhs))
    }
}

/// Matrix * Column Vector.
impl<D: Scalar> Mul<&Vector<D>> for &Matrix<D> {
    type Output = Vector<D>;

    fn mul(self, rhs: &Vector<D>) -> Self::Output {
        unwrap_op(self.mul_vector(rhs))
    }
}

/// Row Vector * Matrix.
impl<D: Scalar> Mul<&Matrix<D>> for &Vector<D> {
    type Output = Vector<D>;

    fn mul(self, rhs: &Matrix<D>) -> Self::Output {
        unwrap_op(self.mul_matrix(rhs))
    }
}

impl<D: Scalar> Add<D> for &Matrix<D> {
    type Output = Matrix<D>;

    fn add(self, rhs: D) -> Self::Output {
        self.combine(rhs, |x, s| x + s)
    }
}

impl<D: Scalar> Sub<D> for &Matrix<D> {
    type Output = Matrix<D>;

    fn sub(self, rhs: D) -> Self::Output {
        self.combine(rhs, |x, s| x - s)
    }
}

/// Matrix * Scalar.
impl<D: Scalar> Mul<D> for &Matrix<D> {
    type Output = Matrix<D>;

    fn mul(self, rhs: D) -> Self::Output {
        self.combine(rhs, |x, s| x * s)
    }
}

/// Matrix / Scalar (elementwise).
impl<D: Scalar> Div<D> for &Matrix<D> {
    type Output = Matrix<D>;

    fn div(self, rhs: D) -> Self::Output {
        self.div_scalar(rhs)
    }
}

impl<D: Scalar> Neg for &Matrix<D> {
    type Output = Matrix<D>;

    fn neg(self) -> Self::Output {
        self.map(|x| -x)
    }
}

impl<D: Scalar> AddAssign<&Matrix<D>> for Matrix<D> {
    fn add_assign(&mut self, rhs: &Matrix<D>) {
        unwrap_op(self.composite_in_place(rhs, |a, b| a + b));
    }
}

impl<D: Scalar> SubAssign<&Matrix<D>> for Matrix<D> {
    fn sub_assign(&mut self, rhs: &Matrix<D>) {
        unwrap_op(self.composite_in_place(rhs, |a, b| a - b));
    }
}

impl<D: Scalar> MulAssign<D> for Matrix<D> {
    fn mul_assign(&mut self, rhs: D) {
        self.combine_in_place(rhs, |x, s| x * s);
    }
}

impl<D: Scalar> DivAssign<D> for Matrix<D> {
    fn div_assign(&mut self, rhs: D) {
        self.combine_in_place(rhs, |x, s| x / s);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_and_matrix_division_differ() {
        let a = Matrix::from_array([[2.0, 0.0], [0.0, 4.0]]).unwrap();
        assert_eq!(&a / 2.0, Matrix::from_array([[1.0, 0.0], [0.0, 2.0]]).unwrap());
        assert!((&a / &a).near(&Matrix::identity(2).unwrap()));
    }

    #[test]
    fn vector_products_follow_row_and_column_conventions() {
        let m = Matrix::from_array([[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(&m * &Vector::from([1, 0, 1]), Vector::from([4, 10]));
        assert_eq!(&Vector::from([1, 1]) * &m, Vector::from([5, 7, 9]));
    }

    #[test]
    #[should_panic(expected = "dimension mismatch in mul")]
    fn mul_panics_on_inner_dimension_mismatch() {
        let m = Matrix::<f64>::one(2, 3).unwrap();
        let _ = &m * &m;
    }

    #[test]
    #[should_panic(expected = "out of range for 2 rows")]
    fn index_rejects_row_past_end() {
        // row * 3 wraps to offset 2, inside the buffer
        let m = Matrix::<i32>::zero(2, 3).unwrap();
        let _ = m[(usize::MAX / 3 + 1, 0)];
    }

    #[test]
    #[should_panic(expected = "row 2 out of range for 2 rows")]
    fn index_mut_rejects_row_past_end() {
        let mut m = Matrix::<i32>::zero(2, 1).unwrap();
        m[(2, 0)] = 1;
    }

    #[test]
    fn index_and_compound_assignment() {
        let mut m = Matrix::<i32>::zero(2, 2).unwrap();
        m[(1, 0)] = 5;
        m += &Matrix::one(2, 2).unwrap();
        m *= 2;
        assert_eq!(m.to_nested_vec(), vec![vec![2, 2], vec![12, 2]]);
        assert_eq!(-&m, &m * -1);
    }
}
