//! Vector arithmetic, conversions between fixed and dynamic types, and
//! row/column extraction from matrices.

use approx::assert_abs_diff_eq;
use genmat::{Axis, LinalgError, LinalgOptions, Matrix, Matrix3, Vector, Vector3};

#[test]
fn vector_product_operator_is_dot() {
    let a = Vector::from([1.0, 2.0, 3.0]);
    let b = Vector::from([3.0, 2.0, 1.0]);
    assert_eq!(&a * &b, 10.0);
    assert_eq!(&a * 2.0, Vector::from([2.0, 4.0, 6.0]));
}

#[test]
fn cross_product_is_orthogonal() {
    let a = Vector::from([1.0, -2.0, 0.5]);
    let b = Vector::from([0.3, 4.0, -1.0]);
    let c = a.cross(&b).unwrap();
    assert_abs_diff_eq!(c.dot(&a).unwrap(), 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.dot(&b).unwrap(), 0.0, epsilon = 1e-12);
}

#[test]
fn normalization_honours_tolerance() {
    let tiny = Vector::from([1e-7, 0.0]);
    assert!(tiny.normalized().is_ok());
    let loose = LinalgOptions::new().with_epsilon(1e-6);
    assert_eq!(tiny.normalized_with(&loose), Err(LinalgError::ZeroMagnitude));
}

#[test]
fn extracted_rows_do_not_alias_the_matrix() {
    let m = Matrix::from_array([[1.0, 2.0], [3.0, 4.0]]).unwrap();
    let mut rows = m.get_rows();
    rows[0].map_in_place(|x| x * 100.0);
    assert_eq!(m.row(0).unwrap(), Vector::from([1.0, 2.0]));

    let rebuilt = Matrix::from_row_vectors(&m.get_columns()).unwrap();
    assert_eq!(rebuilt, m.transpose());
}

#[test]
fn fixed_types_round_trip_through_dynamic() {
    let v = Vector3::new(1.0, 2.0, 3.0);
    assert_eq!(Vector3::try_from(&Vector::from(v)).unwrap(), v);

    let r = Matrix3::rot(Axis::X, 0.7).unwrap();
    let g = Matrix::rot3d(Axis::X, 0.7).unwrap();
    assert_abs_diff_eq!(Matrix::from(r), g);
    assert_abs_diff_eq!(Vector::from(r * v), g.mul_vector(&Vector::from(v)).unwrap());
}

#[test]
fn integer_matrices_invert_through_float_cast() {
    let m = Matrix::from_array([[2, 1], [7, 4]]).unwrap();
    let f = m.cast::<f64>();
    assert_eq!(f.det().unwrap(), 1.0);
    assert_eq!(f.inv().unwrap().cast::<i32>(), Matrix::from_array([[4, -1], [-7, 2]]).unwrap());
    assert_eq!(m.mul_matrix(&m.transpose()).unwrap().trace().unwrap(), 70);
    assert_eq!(format!("{m}"), "[(2, 1); (7, 4)]");
}
