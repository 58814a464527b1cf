// Set of tests that should mirror the examples in README

#[macro_use] extern crate ragged_matrix as matrix;

use matrix::{Determinant, Matrix};
use matrix::generate::{self, GeneratorConfig};

#[test]
fn test_creation() {
    let a = mat![1, 2, 3; 4, 5, 6];
    assert_eq!(a.dims(), (2, 3));

    // the vector in from_vec is row-major
    let b = Matrix::from_vec(vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3);
    assert_eq!(a, b);
    assert_eq!(a.iter().collect::<Vec<_>>(), b.iter().collect::<Vec<_>>());
}

#[test]
fn test_access() {
    let mut a = Matrix::<f64>::zeros(2, 2);
    a[0][1] = 3.0;
    assert_eq!(a.get(0, 1).unwrap(), 3.0);
    assert!(a.get(2, 0).is_err());
    a.set(1, 0, -1.0).unwrap();
    assert_eq!(a[1][0], -1.0);
}

#[test]
fn test_determinant() {
    let a = mat![2, -3, 1; 2, 0, -1; 1, 4, 5];
    assert_fp_eq!(a.determinant(), 49.0);
    assert_eq!(a[0][0], 2.0);

    assert_eq!(mat![1, 2; 2, 4].determinant(), 0.0);
}

#[test]
fn test_generate() {
    let a = generate::with_determinant(5, 12.0, 42, &GeneratorConfig::default());
    assert_eq!(a.dims(), (5, 5));
}
