//! Tests for the core trait seams: matrix-vector products, dot product, and norm.
//!
//! These tests verify the MatVec, MatTransVec and InnerProduct implementations
//! for the dense matrix and vector types, using random and fixed data.

use approx::assert_abs_diff_eq;
use genmat::core::traits::{InnerProduct, MatTransVec, MatVec};
use genmat::{Matrix, Vector};
use rand::Rng;

/// Test matrix-vector multiplication for a small random dense matrix.
///
/// This test constructs a random 5x4 matrix and a random vector, computes the
/// product through the MatVec trait, and checks it against a manual computation.
#[test]
fn matvec_random_small() {
    let (rows, cols) = (5, 4);
    let mut rng = rand::thread_rng();
    let vals: Vec<f64> = (0..rows * cols).map(|_| rng.r#gen()).collect();
    let a = Matrix::from_slice(rows, cols, &vals).unwrap();
    let x: Vec<f64> = (0..cols).map(|_| rng.r#gen()).collect();
    let mut y = Vector::new(rows);
    a.matvec(&Vector::from_slice(&x), &mut y).unwrap();

    // check y[i] == sum_j A[i,j]*x[j]
    for i in 0..rows {
        let expected = (0..cols).map(|j| vals[i * cols + j] * x[j]).sum::<f64>();
        assert_abs_diff_eq!(y[i], expected, epsilon = 1e-12);
    }
}

/// The row-vector product equals the column-vector product with the transpose.
#[test]
fn mattransvec_matches_transpose() {
    let mut rng = rand::thread_rng();
    let a = Matrix::from_fn(4, 6, |_, _| rng.r#gen::<f64>()).unwrap();
    let x = Vector::from_fn(4, |_| rng.r#gen::<f64>());
    let mut y = Vector::new(6);
    a.mattransvec(&x, &mut y).unwrap();
    assert_abs_diff_eq!(y, a.transpose().mul_vector(&x).unwrap(), epsilon = 1e-12);
}

/// Test dot product and Euclidean norm for small vectors.
#[test]
fn dot_and_norm() {
    let x = Vector::from([1.0, 2.0, 3.0]);
    let y = Vector::from([4.0, -5.0, 6.0]);
    let ip = ();
    let dot = ip.dot(&x, &y).unwrap();
    assert_abs_diff_eq!(dot, 1.0 * 4.0 + 2.0 * (-5.0) + 3.0 * 6.0, epsilon = 1e-12);
    let norm_x = ip.norm(&x);
    let expected_norm = ((1.0f64).powi(2) + 2.0f64.powi(2) + 3.0f64.powi(2)).sqrt();
    assert_abs_diff_eq!(norm_x, expected_norm, epsilon = 1e-12);
    assert!(ip.dot(&x, &Vector::from([1.0])).is_err());
}
