use num::Float;

use fp;
use Matrix;

/// Determinant of a square matrix.
pub trait Determinant {
    type Scalar;

    /// Determinant using the machine epsilon of the scalar type as the zero tolerance.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    fn determinant(&self) -> Self::Scalar;

    /// Determinant, treating values within `epsilon` (relative, see `fp::eq_eps`) of zero
    /// as zero.
    ///
    /// # Panics
    /// Panics if the matrix is not square.
    fn determinant_eps(&self, epsilon: Self::Scalar) -> Self::Scalar;
}

impl<T: Float> Determinant for Matrix<T> {
    type Scalar = T;

    fn determinant(&self) -> T {
        self.determinant_eps(T::epsilon())
    }

    // Gaussian elimination with partial pivoting on a copy of the matrix. Every row swap
    // flips the sign; the result is the product of the resulting upper-triangular diagonal.
    fn determinant_eps(&self, epsilon: T) -> T {
        assert!(self.is_square(), "determinant requires a square matrix");

        let n = self.nrows();
        let mut work = self.clone();
        let mut sign_flip = false;

        for pivot in 0..n.saturating_sub(1) {
            let max_row = work.abs_max_in_col(pivot, pivot..n);
            if fp::is_zero_eps(work[max_row][pivot], epsilon) {
                debug!("zero pivot in column {} of {}x{} matrix; matrix is singular",
                    pivot, n, n);
                return T::zero();
            }

            if max_row != pivot {
                trace!("swapping rows {} and {}", pivot, max_row);
                work.swap_rows(max_row, pivot);
                sign_flip = !sign_flip;
            }

            for r in (pivot + 1)..n {
                let mul = -work[r][pivot] / work[pivot][pivot];
                work.add_row_to_row(r, pivot, mul);
            }
        }

        let product = (0..n).fold(T::one(), |acc, i| acc * work[i][i]);
        // also maps -0.0 to 0.0
        if fp::is_zero_eps(product, epsilon) {
            return T::zero();
        }
        if sign_flip { -product } else { product }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        for n in 0..8 {
            let a: Matrix<f64> = Matrix::eye(n);
            assert_eq!(a.determinant(), 1.0);
        }
    }

    #[test]
    fn test_empty_is_one() {
        let a: Matrix<f64> = Matrix::zeros(0, 0);
        assert_eq!(a.determinant(), 1.0);
    }

    #[test]
    fn test_single() {
        assert_eq!(mat![-4.5].determinant(), -4.5);
        assert_eq!(mat![0.0].determinant(), 0.0);
    }

    #[test]
    fn test_three_by_three() {
        let a = mat![1, 1, 1; 1, 3, 4; 2, 5, 1];
        assert_fp_eq!(a.determinant(), -11.0);
    }

    #[test]
    fn test_two_by_two_singular() {
        let a = mat![1.5, 2.0; 3.0, 4.0];
        let det = a.determinant();
        assert_eq!(det, 0.0);
        assert!(det.is_sign_positive());
    }

    #[test]
    fn test_swapped_identity() {
        let mut a: Matrix<f64> = Matrix::identity(5);
        a.swap_rows(0, 4);
        assert_eq!(a.determinant(), -1.0);
    }

    #[test]
    fn test_diag() {
        let a = Matrix::diag(4, 7.0);
        assert_fp_eq!(a.determinant(), 2401.0);
    }

    #[test]
    fn test_zero_pivot_column() {
        // first column is all zero, so elimination stops immediately
        let a = mat![0, 1, 2; 0, 3, 4; 0, 5, 6];
        assert_eq!(a.determinant(), 0.0);
    }

    #[test]
    fn test_needs_pivoting() {
        // zero in the leading position forces a swap
        let a = mat![0, 2; 3, 1];
        assert_fp_eq!(a.determinant(), -6.0);
    }

    #[test]
    fn test_does_not_mutate() {
        let a = mat![2, -1, 0; -1, 2, -1; 0, -1, 2];
        let before = a.clone();
        let d1 = a.determinant();
        let d2 = a.determinant();
        assert_eq!(a, before);
        assert_eq!(d1, d2);
        assert_fp_eq!(d1, 4.0);
    }

    #[test]
    fn test_f32() {
        let a: Matrix<f32> = Matrix::from_rows(vec![vec![1.0, 1.0, 1.0],
                                                     vec![1.0, 3.0, 4.0],
                                                     vec![2.0, 5.0, 1.0]]);
        assert_fp_eq!(a.determinant(), -11.0, 1e-5);
    }

    #[test]
    fn test_custom_epsilon() {
        // with a coarse tolerance a nearly singular matrix reads as singular
        let a = mat![1.0, 1.0; 1.0, 1.0 + 1e-9];
        assert!(a.determinant() != 0.0);
        assert_eq!(a.determinant_eps(1e-6), 0.0);
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_non_square() {
        mat![1, 2, 3; 4, 5, 6].determinant();
    }

    #[test]
    #[should_panic(expected = "square")]
    fn test_no_rows_non_square() {
        Matrix::<f64>::zeros(0, 5).determinant();
    }
}
