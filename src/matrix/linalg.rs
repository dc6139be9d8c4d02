//! Determinant, cofactors, adjugate and inverse for `Matrix`.
//!
//! The determinant uses Gaussian elimination with partial pivoting on a copy
//! of the rows:
//!
//! 1. every row at or below the pivot column whose entry is not near zero is
//!    divided by that entry, and the entry is folded into the running
//!    determinant;
//! 2. the first such row becomes the pivot row (a swap flips the sign);
//! 3. the pivot row is subtracted from every later row with a non-zero entry
//!    in the pivot column.
//!
//! If no row can be normalized for some column the determinant does not
//! exist for this elimination and `det` fails. The inverse is the classical
//! adjugate over determinant, so it costs `n²` determinants of `(n-1)`-sized
//! minors: O(n⁵) overall. `Matrix3` has an unrolled path for the 3×3 case.
//!
//! Everything here divides, so it is only available for `Float` scalars.
//! Integer matrices convert first:
//!
//! ```rust
//! use genmat::Matrix;
//!
//! let m = Matrix::from_array([[2, 4, 1], [3, 5, 6], [5, 7, 8]])?;
//! let det = m.cast::<f64>().det()?;
//! assert!((det - 16.0).abs() < 1e-9);
//! # Ok::<(), genmat::LinalgError>(())
//! ```
//!
//! Calling them on an integer matrix does not compile:
//!
//! ```compile_fail
//! use genmat::Matrix;
//!
//! let m = Matrix::from_array([[2, 4, 1], [3, 5, 6], [5, 7, 8]]).unwrap();
//! let _ = m.det();
//! ```

use log::{debug, trace};
use num_traits::Float;

use super::Matrix;
use crate::config::LinalgOptions;
use crate::core::scalar::Scalar;
use crate::error::{LinalgError, Result};

impl<D: Scalar + Float> Matrix<D> {
    pub fn det(&self) -> Result<D> {
        self.det_with(&LinalgOptions::default())
    }

    /// Determinant with an explicit near-zero tolerance.
    ///
    /// Never mutates `self`.
    pub fn det_with(&self, options: &LinalgOptions) -> Result<D> {
        if !self.is_square() {
            return Err(LinalgError::NoDeterminant("matrix is not square"));
        }
        let eps = options.epsilon;
        let n = self.rows();
        let a = self.as_slice();
        match n {
            1 => return Ok(a[0]),
            2 => return Ok(a[0] * a[3] - a[1] * a[2]),
            _ => {}
        }

        let mut rows = self.to_nested_vec();
        let mut det = D::one();
        for c in 0..n {
            let mut reduced = false;
            for row in rows.iter_mut().skip(c) {
                let pivot = row[c];
                if !pivot.near_zero(eps) {
                    det = det * pivot;
                    for v in row.iter_mut() {
                        *v = *v / pivot;
                    }
                    reduced = true;
                }
            }
            if !reduced {
                debug!("det: no pivot in column {c} of {n}x{n} matrix");
                return Err(LinalgError::NoDeterminant("no usable pivot"));
            }

            let mut pivot_row = c;
            while rows[pivot_row][c].near_zero(eps) {
                pivot_row += 1;
            }
            if pivot_row != c {
                trace!("det: swapping rows {c} and {pivot_row}");
                rows.swap(c, pivot_row);
                det = -det;
            }

            let (head, tail) = rows.split_at_mut(c + 1);
            let pivot = &head[c];
            for row in tail.iter_mut() {
                if !row[c].near_zero(eps) {
                    for (v, &p) in row.iter_mut().zip(pivot.iter()) {
                        *v = *v - p;
                    }
                }
            }
            trace!("det: column {c} eliminated, running det = {det}");
        }
        Ok(det)
    }

    /// Signed determinant of the minor at `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<D> {
        let minor_det = self.minor(row, col)?.det()?;
        Ok(if (row + col) % 2 == 0 { minor_det } else { -minor_det })
    }

    /// Transpose of the cofactor matrix. A 1×1 matrix has adjugate `[[1]]`.
    pub fn adj(&self) -> Result<Self> {
        if !self.is_square() {
            return Err(LinalgError::NoDeterminant("matrix is not square"));
        }
        let n = self.rows();
        if n == 1 {
            return Self::from_vec(1, 1, vec![D::one()]);
        }
        let mut cofactors = Vec::with_capacity(n * n);
        for r in 0..n {
            for c in 0..n {
                cofactors.push(self.cofactor(r, c)?);
            }
        }
        Ok(Self::from_vec(n, n, cofactors)?.transpose())
    }

    pub fn inv(&self) -> Result<Self> {
        self.inv_with(&LinalgOptions::default())
    }

    /// `adj() / det()`; fails if the determinant is near zero.
    pub fn inv_with(&self, options: &LinalgOptions) -> Result<Self> {
        let det = self.det_with(options)?;
        if det.near_zero(options.epsilon) {
            debug!("inv: determinant {det} is within {} of zero", options.epsilon);
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.adj()?.div_scalar(det))
    }

    pub fn normalized(&self) -> Result<Self> {
        self.normalized_with(&LinalgOptions::default())
    }

    /// `self / det()`, guarded by the same near-zero test as `inv`.
    pub fn normalized_with(&self, options: &LinalgOptions) -> Result<Self> {
        let det = self.det_with(options)?;
        if det.near_zero(options.epsilon) {
            return Err(LinalgError::SingularMatrix);
        }
        Ok(self.div_scalar(det))
    }

    /// `self * other.inv()`. This is not elementwise division.
    pub fn div_matrix(&self, other: &Self) -> Result<Self> {
        self.mul_matrix(&other.inv()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn m3() -> Matrix<f64> {
        Matrix::from_array([[2.0, 4.0, 1.0], [3.0, 5.0, 6.0], [5.0, 7.0, 8.0]]).unwrap()
    }

    #[test]
    fn det_small_sizes_are_direct() {
        assert_eq!(Matrix::from_array([[7.0]]).unwrap().det().unwrap(), 7.0);
        assert_eq!(Matrix::from_array([[1.0, 2.0], [3.0, 4.0]]).unwrap().det().unwrap(), -2.0);
    }

    #[test]
    fn det_of_3x3_matches_cofactor_expansion() {
        // 2(40-42) - 4(24-30) + 1(21-25)
        assert_abs_diff_eq!(m3().det().unwrap(), 16.0, epsilon = 1e-9);
    }

    #[test]
    fn integer_input_is_exact_after_cast() {
        let m = Matrix::from_array([[2, 4, 1], [3, 5, 6], [5, 7, 8]]).unwrap().cast::<f64>();
        assert_abs_diff_eq!(m.det().unwrap(), 16.0, epsilon = 1e-9);

        let d = Matrix::from_array([[2, 0, 0], [0, 3, 0], [0, 0, 5]]).unwrap().cast::<f64>();
        let expected = Matrix::from_array([[0.5, 0.0, 0.0], [0.0, 1.0 / 3.0, 0.0], [0.0, 0.0, 0.2]]).unwrap();
        assert_abs_diff_eq!(d.inv().unwrap(), expected, epsilon = 1e-12);
    }

    #[test]
    fn det_tracks_row_swaps() {
        let m = Matrix::from_array([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]).unwrap();
        assert_abs_diff_eq!(m.det().unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn det_does_not_mutate_source() {
        let m = m3();
        let before = m.clone();
        m.det().unwrap();
        assert_eq!(m, before);
    }

    #[test]
    fn det_fails_for_non_square_and_singular() {
        let rect = Matrix::from_array([[1.0, 2.0, 3.0]]).unwrap();
        assert_eq!(rect.det(), Err(LinalgError::NoDeterminant("matrix is not square")));
        let singular = Matrix::from_array([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]).unwrap();
        assert!(matches!(singular.det(), Err(LinalgError::NoDeterminant(_))));
    }

    #[test]
    fn cofactor_signs_alternate() {
        let m = m3();
        assert_abs_diff_eq!(m.cofactor(0, 0).unwrap(), -2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.cofactor(0, 1).unwrap(), 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(m.cofactor(0, 2).unwrap(), -4.0, epsilon = 1e-12);
    }

    #[test]
    fn inverse_of_1x1_and_2x2() {
        let a = Matrix::from_array([[4.0]]).unwrap();
        assert_eq!(a.inv().unwrap(), Matrix::from_array([[0.25]]).unwrap());
        let b = Matrix::from_array([[4.0, 7.0], [2.0, 6.0]]).unwrap();
        let expected = Matrix::from_array([[0.6, -0.7], [-0.2, 0.4]]).unwrap();
        assert!(b.inv().unwrap().near(&expected));
    }

    #[test]
    fn singular_2x2_has_no_inverse() {
        let m = Matrix::from_array([[1.0, 2.0], [2.0, 4.0]]).unwrap();
        assert_eq!(m.inv(), Err(LinalgError::SingularMatrix));
        assert_eq!(m.normalized(), Err(LinalgError::SingularMatrix));
    }

    #[test]
    fn normalized_divides_by_det() {
        let m = Matrix::from_array([[2.0, 0.0], [0.0, 2.0]]).unwrap();
        assert_eq!(m.normalized().unwrap(), Matrix::from_array([[0.5, 0.0], [0.0, 0.5]]).unwrap());
    }
}
