use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use array::Array;
use jagged::JaggedArray;

/// Jagged array whose rows all have the same length.
///
/// Every constructor checks the shape, and rows are only ever handed out as slices, so the
/// common width cannot be broken from outside. Width changes go through `resize_width`
/// or `resize_with_width`, which resize all rows together.
#[derive(Debug, Clone, PartialEq)]
pub struct RectArray<T> {
    data: JaggedArray<T>,
}

impl<T> RectArray<T> {
    pub fn new() -> RectArray<T> {
        RectArray { data: JaggedArray::new() }
    }
    pub fn with_dims(n_rows: usize, n_cols: usize, value: T) -> RectArray<T> where T: Clone {
        RectArray { data: JaggedArray::with_width(n_rows, n_cols, value) }
    }
    /// # Panics
    /// Panics if `elems` does not yield exactly `n_rows * n_cols` values.
    pub fn from_elems<I>(n_rows: usize, n_cols: usize, elems: I) -> RectArray<T>
            where I: IntoIterator<Item = T> {
        RectArray { data: JaggedArray::from_width_elems(n_rows, n_cols, elems) }
    }
    /// # Panics
    /// Panics if the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> RectArray<T> {
        if let Some(first) = rows.first() {
            let n_cols = first.len();
            assert!(rows.iter().all(|row| row.len() == n_cols),
                "rows of a rectangular array must all have the same length");
        }
        RectArray { data: JaggedArray::from_rows(rows) }
    }

    pub fn n_rows(&self) -> usize { self.data.n_rows() }
    /// Common row length; 0 when there are no rows.
    pub fn n_cols(&self) -> usize {
        if self.data.is_empty() { 0 } else { self.data.row_len(0) }
    }
    pub fn dims(&self) -> (usize, usize) { (self.n_rows(), self.n_cols()) }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn rows(&self) -> Rows<T> {
        Rows { inner: self.data.iter() }
    }
    pub fn as_jagged(&self) -> &JaggedArray<T> { &self.data }

    /// Change the row count. New rows get the current width, `n_cols()`, which is 0 when
    /// the array has no rows; use `resize_with_width` to grow from empty.
    pub fn resize(&mut self, n_rows: usize, value: T) where T: Clone {
        let (old_rows, n_cols) = self.dims();
        self.data.resize(n_rows);
        for i in old_rows..n_rows {
            self.data.resize_row(i, n_cols, value.clone());
        }
    }

    /// Change both dimensions. Entries inside the overlap keep their positions.
    pub fn resize_with_width(&mut self, n_rows: usize, n_cols: usize, value: T) where T: Clone {
        self.data.resize(n_rows);
        for row in self.data.iter_mut() {
            if row.len() != n_cols {
                row.resize(n_cols, value.clone());
            }
        }
    }

    /// Resize every row to `n_cols`, each keeping its own prefix.
    pub fn resize_width(&mut self, n_cols: usize, value: T) where T: Clone {
        for row in self.data.iter_mut() {
            row.resize(n_cols, value.clone());
        }
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.data.swap_rows(i, j);
    }
}

impl<T> Default for RectArray<T> {
    fn default() -> RectArray<T> { RectArray::new() }
}

impl<T> Index<usize> for RectArray<T> {
    type Output = [T];

    #[inline]
    fn index(&self, i: usize) -> &[T] { self.data[i].as_slice() }
}
impl<T> IndexMut<usize> for RectArray<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut [T] { self.data[i].as_mut_slice() }
}

impl<T: fmt::Display> fmt::Display for RectArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.data)
    }
}

/// Iterator over the rows of a `RectArray`, as slices.
pub struct Rows<'a, T: 'a> {
    inner: slice::Iter<'a, Array<T>>,
}
impl<'a, T> Iterator for Rows<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<&'a [T]> {
        self.inner.next().map(|row| row.as_slice())
    }
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}
