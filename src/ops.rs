use std::ops::Neg;

use num::Float;

use Matrix;

// negation; returns a new matrix, see `Matrix::negate` for the in-place form
impl<T: Float> Neg for Matrix<T> {
    type Output = Matrix<T>;

    fn neg(mut self) -> Matrix<T> {
        self.negate();
        self
    }
}
impl<'b, T: Float> Neg for &'b Matrix<T> {
    type Output = Matrix<T>;

    fn neg(self) -> Matrix<T> {
        let (m, n) = self.dims();
        Matrix::from_vec(self.iter().map(|e| -e).collect(), m, n)
    }
}
