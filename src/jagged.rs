use std::fmt;
use std::ops::{Index, IndexMut};
use std::slice;

use array::Array;

/// Ordered sequence of independently sized rows.
///
/// No relation between row lengths is maintained. Row order is only ever changed by
/// `swap_rows`, which exchanges the row buffers themselves rather than their elements.
#[derive(Debug, Clone, PartialEq)]
pub struct JaggedArray<T> {
    rows: Vec<Array<T>>,
}

impl<T> JaggedArray<T> {
    pub fn new() -> JaggedArray<T> {
        JaggedArray { rows: Vec::new() }
    }

    /// Build from a table of rows; row lengths are taken from the table.
    pub fn from_rows(rows: Vec<Vec<T>>) -> JaggedArray<T> {
        JaggedArray { rows: rows.into_iter().map(Array::from).collect() }
    }

    /// `n_rows` rows of `width` copies of `value`.
    pub fn with_width(n_rows: usize, width: usize, value: T) -> JaggedArray<T> where T: Clone {
        JaggedArray { rows: (0..n_rows).map(|_| Array::filled(width, value.clone())).collect() }
    }

    /// Rows of lengths `widths`, every element set to `value`.
    pub fn with_widths(widths: &[usize], value: T) -> JaggedArray<T> where T: Clone {
        JaggedArray { rows: widths.iter().map(|&w| Array::filled(w, value.clone())).collect() }
    }

    /// `n_rows` rows of `width` elements, consumed from `elems` in row-major order.
    ///
    /// # Panics
    /// Panics if `elems` does not yield exactly `n_rows * width` values.
    pub fn from_width_elems<I>(n_rows: usize, width: usize, elems: I) -> JaggedArray<T>
            where I: IntoIterator<Item = T> {
        JaggedArray::from_widths_elems(&vec![width; n_rows], elems)
    }

    /// Rows of lengths `widths`, consumed from `elems` in row-major order.
    ///
    /// # Panics
    /// Panics if `elems` does not yield exactly `widths.iter().sum()` values.
    pub fn from_widths_elems<I>(widths: &[usize], elems: I) -> JaggedArray<T>
            where I: IntoIterator<Item = T> {
        let mut elems = elems.into_iter();
        let mut rows = Vec::with_capacity(widths.len());
        for &w in widths {
            let row: Vec<T> = elems.by_ref().take(w).collect();
            assert_eq!(row.len(), w, "fewer elements than the row widths require");
            rows.push(Array::from(row));
        }
        assert!(elems.next().is_none(), "more elements than the row widths require");
        JaggedArray { rows: rows }
    }

    pub fn n_rows(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn row_len(&self, i: usize) -> usize { self.rows[i].len() }

    pub fn iter(&self) -> slice::Iter<Array<T>> { self.rows.iter() }
    pub fn iter_mut(&mut self) -> slice::IterMut<Array<T>> { self.rows.iter_mut() }

    /// Truncate, or append zero-length rows, to reach `n_rows` rows.
    pub fn resize(&mut self, n_rows: usize) {
        if n_rows < self.rows.len() {
            self.rows.truncate(n_rows);
        } else {
            while self.rows.len() < n_rows {
                self.rows.push(Array::default());
            }
        }
    }

    /// Resize row `i` only, preserving its prefix and filling new slots with `value`.
    pub fn resize_row(&mut self, i: usize, len: usize, value: T) where T: Clone {
        self.rows[i].resize(len, value);
    }
    pub fn resize_row_default(&mut self, i: usize, len: usize) where T: Default + Clone {
        self.rows[i].resize_default(len);
    }

    /// Exchange the storage of rows `i` and `j` without touching their elements.
    pub fn swap_rows(&mut self, i: usize, j: usize) {
        self.rows.swap(i, j);
    }
}

impl<T> Default for JaggedArray<T> {
    fn default() -> JaggedArray<T> { JaggedArray::new() }
}

impl<T> Index<usize> for JaggedArray<T> {
    type Output = Array<T>;

    #[inline]
    fn index(&self, i: usize) -> &Array<T> { &self.rows[i] }
}
impl<T> IndexMut<usize> for JaggedArray<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Array<T> { &mut self.rows[i] }
}

impl<T: fmt::Display> fmt::Display for JaggedArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                write!(f, "\n")?;
            }
            write!(f, "{}", row)?;
        }
        Ok(())
    }
}
