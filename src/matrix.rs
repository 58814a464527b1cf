use std::fmt;
use std::ops::{Index, IndexMut, Range};

use num::Float;

use errors::*;
use rect::{RectArray, Rows};

/// Dense row-major matrix over a floating point scalar.
///
/// Storage is a `RectArray`, one buffer per row, so row swaps exchange buffers instead of
/// copying elements. `m[r][c]` indexes an entry and panics when out of range; `get` and
/// `set` are the checked forms.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    data: RectArray<T>,
    // kept here since the storage reports width 0 once it has no rows
    ncols: usize,
}

impl<T: Float> Matrix<T> {
    /// `n` x `n` matrix of zeros.
    pub fn square(n: usize) -> Matrix<T> {
        Matrix::zeros(n, n)
    }
    pub fn zeros(nrows: usize, ncols: usize) -> Matrix<T> {
        Matrix { data: RectArray::with_dims(nrows, ncols, T::zero()), ncols: ncols }
    }
    pub fn ones(nrows: usize, ncols: usize) -> Matrix<T> {
        Matrix { data: RectArray::with_dims(nrows, ncols, T::one()), ncols: ncols }
    }
    /// Build from `data` laid out in row-major order.
    pub fn from_vec(data: Vec<T>, nrows: usize, ncols: usize) -> Matrix<T> {
        assert_eq!(data.len(), nrows * ncols);
        Matrix { data: RectArray::from_elems(nrows, ncols, data), ncols: ncols }
    }
    /// Build from a table of equal-length rows.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Matrix<T> {
        let data = RectArray::from_rows(rows);
        let ncols = data.n_cols();
        Matrix { data: data, ncols: ncols }
    }
    /// `n` x `n` matrix with `value` on the diagonal and zeros elsewhere.
    pub fn diag(n: usize, value: T) -> Matrix<T> {
        let mut m = Matrix::square(n);
        for i in 0..n {
            m[i][i] = value;
        }
        m
    }
    pub fn eye(n: usize) -> Matrix<T> {
        Matrix::diag(n, T::one())
    }
    #[inline]
    pub fn identity(n: usize) -> Matrix<T> { Matrix::eye(n) }

    pub fn nrows(&self) -> usize { self.data.n_rows() }
    pub fn ncols(&self) -> usize { self.ncols }
    pub fn dims(&self) -> (usize, usize) { (self.nrows(), self.ncols) }
    pub fn length(&self) -> usize { self.nrows() * self.ncols() }
    pub fn is_square(&self) -> bool { self.nrows() == self.ncols() }

    /// Entries in row-major order.
    pub fn iter(&self) -> MatrixIter<T> {
        MatrixIter {
            mat: &self,
            current_loc: (0, 0),
        }
    }
    pub fn rows(&self) -> Rows<T> { self.data.rows() }

    pub fn get(&self, r: usize, c: usize) -> Result<T> {
        if r >= self.nrows() || c >= self.ncols() {
            return Err(Error::from_kind(ErrorKind::IndexError("index out of bounds")));
        }
        Ok(self.data[r][c])
    }
    pub fn set(&mut self, r: usize, c: usize, value: T) -> Result<()> {
        if r >= self.nrows() || c >= self.ncols() {
            return Err(Error::from_kind(ErrorKind::IndexError("index out of bounds")));
        }
        self.data[r][c] = value;
        Ok(())
    }

    /// Multiply every entry by -1 in place. Use unary `-` for a negated copy.
    pub fn negate(&mut self) -> &mut Matrix<T> {
        for r in 0..self.nrows() {
            for x in self.data[r].iter_mut() {
                *x = -*x;
            }
        }
        self
    }

    /// New `ncols` x `nrows` matrix with `result[j][i] == self[i][j]`; `self` is untouched.
    pub fn transpose(&self) -> Matrix<T> {
        let (m, n) = self.dims();
        let mut tr = Matrix::zeros(n, m);
        for i in 0..m {
            for j in 0..n {
                tr[j][i] = self[i][j];
            }
        }
        tr
    }
    #[inline]
    pub fn t(&self) -> Matrix<T> { self.transpose() }

    /// Exchange two rows; O(1), no entries are copied.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.data.swap_rows(i, j);
    }

    /// `row[dst] += mul * row[src]`
    pub fn add_row_to_row(&mut self, dst: usize, src: usize, mul: T) {
        for c in 0..self.ncols() {
            let v = self.data[src][c];
            self.data[dst][c] = self.data[dst][c] + v * mul;
        }
    }

    /// Index of the row within `rows` whose entry in column `col` has the largest
    /// magnitude. Ties go to the first such row.
    ///
    /// # Panics
    /// Panics if `rows` is empty.
    pub fn abs_max_in_col(&self, col: usize, rows: Range<usize>) -> usize {
        assert!(rows.start < rows.end, "empty row range");
        let mut best = rows.start;
        let mut best_abs = self.data[best][col].abs();
        for r in (rows.start + 1)..rows.end {
            let v = self.data[r][col].abs();
            if v > best_abs {
                best = r;
                best_abs = v;
            }
        }
        best
    }

    /// Change both dimensions, keeping entries inside the overlap. New entries are zero.
    pub fn resize(&mut self, nrows: usize, ncols: usize) {
        self.data.resize_with_width(nrows, ncols, T::zero());
        self.ncols = ncols;
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];

    #[inline]
    fn index(&self, r: usize) -> &[T] { &self.data[r] }
}
impl<T> IndexMut<usize> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, r: usize) -> &mut [T] { &mut self.data[r] }
}

impl<T: fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

pub struct MatrixIter<'a, T: 'a> {
    mat: &'a Matrix<T>,
    current_loc: (usize, usize),
}
impl<'a, T: Float> Iterator for MatrixIter<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let (nrows, ncols) = self.mat.dims();
        if ncols == 0 || self.current_loc.0 >= nrows { return None }

        let val = self.mat[self.current_loc.0][self.current_loc.1];

        self.current_loc.1 += 1;
        if self.current_loc.1 >= ncols {
            self.current_loc.1 = 0;
            self.current_loc.0 += 1;
        }
        Some(val)
    }
}
