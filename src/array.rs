use std::fmt;
use std::iter::FromIterator;
use std::mem;
use std::ops::{Index, IndexMut};
use std::slice;

use errors::*;

/// Owning, fixed-length, contiguous buffer that can be reallocated to a new length.
///
/// The length always equals the number of live elements; there is no spare capacity.
/// Indexing past the end panics, `get` and `get_mut` are the checked alternatives.
#[derive(Debug, Clone, PartialEq)]
pub struct Array<T> {
    data: Box<[T]>,
}

impl<T> Array<T> {
    /// Array of `len` default values.
    pub fn new(len: usize) -> Array<T> where T: Default {
        (0..len).map(|_| T::default()).collect()
    }
    pub fn filled(len: usize, value: T) -> Array<T> where T: Clone {
        Array { data: vec![value; len].into_boxed_slice() }
    }
    pub fn from_slice(values: &[T]) -> Array<T> where T: Clone {
        Array { data: values.to_vec().into_boxed_slice() }
    }

    pub fn len(&self) -> usize { self.data.len() }
    pub fn is_empty(&self) -> bool { self.data.is_empty() }

    pub fn as_slice(&self) -> &[T] { &self.data }
    pub fn as_mut_slice(&mut self) -> &mut [T] { &mut self.data }

    pub fn iter(&self) -> slice::Iter<T> { self.data.iter() }
    pub fn iter_mut(&mut self) -> slice::IterMut<T> { self.data.iter_mut() }

    pub fn get(&self, i: usize) -> Result<&T> {
        self.data.get(i).ok_or(Error::from_kind(ErrorKind::IndexError("index out of bounds")))
    }
    pub fn get_mut(&mut self, i: usize) -> Result<&mut T> {
        self.data.get_mut(i).ok_or(Error::from_kind(ErrorKind::IndexError("index out of bounds")))
    }

    pub fn fill(&mut self, value: T) where T: Clone {
        for slot in self.data.iter_mut() {
            *slot = value.clone();
        }
    }

    /// Overwrite the leading `src.len()` elements with `src`.
    ///
    /// # Panics
    /// Panics if `src` is longer than this array.
    pub fn copy_from(&mut self, src: &[T]) where T: Clone {
        assert!(src.len() <= self.len(), "source longer than destination array");
        self.data[..src.len()].clone_from_slice(src);
    }

    /// Reallocate to `new_len` elements. The first `min(len, new_len)` elements are moved
    /// over unchanged, any new trailing slots are set to `value`.
    pub fn resize(&mut self, new_len: usize, value: T) where T: Clone {
        let old = mem::replace(&mut self.data, Vec::new().into_boxed_slice());
        let mut v = Vec::with_capacity(new_len);
        v.extend(old.into_vec().into_iter().take(new_len));
        v.resize(new_len, value);
        self.data = v.into_boxed_slice();
    }
    pub fn resize_default(&mut self, new_len: usize) where T: Default + Clone {
        self.resize(new_len, T::default());
    }

    /// Move the contents out, leaving this array empty.
    pub fn take(&mut self) -> Array<T> {
        mem::replace(self, Array::default())
    }
}

impl<T> Default for Array<T> {
    fn default() -> Array<T> {
        Array { data: Vec::new().into_boxed_slice() }
    }
}

impl<T> From<Vec<T>> for Array<T> {
    fn from(v: Vec<T>) -> Array<T> {
        Array { data: v.into_boxed_slice() }
    }
}

impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Array<T> {
        Array::from(iter.into_iter().collect::<Vec<T>>())
    }
}

impl<'a, T> IntoIterator for &'a Array<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> slice::Iter<'a, T> { self.data.iter() }
}

impl<T> Index<usize> for Array<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T { &self.data[i] }
}
impl<T> IndexMut<usize> for Array<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T { &mut self.data[i] }
}

impl<T: fmt::Display> fmt::Display for Array<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
