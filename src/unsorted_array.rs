//! Unsorted array container: the linear-scan baseline.
//!
//! [`UnsortedArray`] stores unique integers in insertion order and answers
//! every operation by scanning from the front. It exists as the O(n)
//! baseline the other containers are measured against.
//!
//! # Time Complexity
//!
//! | Operation | Complexity                 |
//! |-----------|----------------------------|
//! | `find`    | O(n)                       |
//! | `insert`  | O(n) (duplicate check)     |
//! | `delete`  | O(n) scan + O(1) removal   |
//! | `len`     | O(1)                       |
//!
//! `delete` uses swap-remove: the found slot is overwritten with the last
//! element and the vector shrinks by one, so the relative order of the
//! remaining elements is not preserved.

use crate::benchable::Benchable;

/// A set of integers stored in insertion order, scanned linearly.
///
/// Duplicates are never stored: `insert` is a no-op when the value is
/// already present.
///
/// # Examples
///
/// ```rust
/// use benchable_sets::UnsortedArray;
///
/// let mut array = UnsortedArray::new();
/// assert_eq!(array.insert(1), 0);
/// assert_eq!(array.insert(2), 1);
/// assert_eq!(array.insert(3), 2);
/// assert_eq!(array.insert(2), 1); // already present
///
/// assert!(array.delete(2));
/// assert_eq!(array.len(), 2);
/// assert!(array.find(3).is_some()); // still found, index may have moved
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnsortedArray {
    inner: Vec<i64>,
}

impl UnsortedArray {
    /// Creates a new, empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use benchable_sets::UnsortedArray;
    ///
    /// let array = UnsortedArray::new();
    /// assert!(array.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Returns the number of stored values.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if no values are stored.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Searches for `value` by scanning from index 0.
    ///
    /// Returns the index of the first match, or `None` if `value` is not
    /// stored.
    ///
    /// # Complexity
    ///
    /// O(n)
    #[must_use]
    pub fn find(&self, value: i64) -> Option<usize> {
        self.inner.iter().position(|&stored| stored == value)
    }

    /// Inserts `value`, returning its index.
    ///
    /// If `value` is already stored, nothing changes and its existing index
    /// is returned. Otherwise it is appended at the end.
    ///
    /// # Complexity
    ///
    /// O(n) for the duplicate check, O(1) amortized for the append.
    pub fn insert(&mut self, value: i64) -> usize {
        match self.find(value) {
            Some(index) => index,
            None => {
                self.inner.push(value);
                self.inner.len() - 1
            }
        }
    }

    /// Removes `value` by swap-remove.
    ///
    /// The found slot is overwritten with the last element and the vector
    /// shrinks by one; the relative order of the remaining elements is not
    /// preserved. Returns `false` (and changes nothing) when `value` is not
    /// stored.
    ///
    /// # Complexity
    ///
    /// O(n) scan, O(1) removal.
    pub fn delete(&mut self, value: i64) -> bool {
        match self.find(value) {
            Some(index) => {
                self.inner.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Returns the stored values as a slice, in storage order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.inner
    }

    /// Copies the stored values into a new `Vec`, in storage order.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.inner.clone()
    }
}

impl FromIterator<i64> for UnsortedArray {
    /// Builds a container by inserting every yielded value; duplicates are
    /// dropped.
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut array = Self::new();
        for value in iter {
            array.insert(value);
        }
        array
    }
}

impl Benchable for UnsortedArray {
    type Handle = usize;

    #[inline]
    fn insert(&mut self, value: i64) -> usize {
        Self::insert(self, value)
    }

    #[inline]
    fn find(&self, value: i64) -> Option<usize> {
        Self::find(self, value)
    }

    #[inline]
    fn delete(&mut self, value: i64) -> bool {
        Self::delete(self, value)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }
}
