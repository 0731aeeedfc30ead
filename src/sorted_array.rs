//! Sorted array container with two interchangeable search strategies.
//!
//! [`SortedArray`] keeps its integers strictly ascending at all times and
//! answers membership queries with either binary search or interpolation
//! search. Both strategies share one contract: they return the match index
//! when the value is stored, and otherwise the exact position at which the
//! value could be inserted without breaking the order. For any array state
//! and any query the two strategies return identical results; only their
//! probe sequences (and therefore their cost on different key
//! distributions) differ.
//!
//! # Time Complexity
//!
//! | Operation              | Complexity                      |
//! |------------------------|---------------------------------|
//! | `find`                 | O(log n)                        |
//! | `binary_search`        | O(log n)                        |
//! | `interpolation_search` | O(log log n) uniform, O(n) skewed |
//! | `insert`               | O(n) (shifting)                 |
//! | `delete`               | O(n) (shifting)                 |
//! | `len`                  | O(1)                            |

use crate::benchable::Benchable;

/// A set of integers kept strictly ascending, searched in O(log n).
///
/// Invariant: `inner[i] < inner[i + 1]` for every valid `i`. The invariant
/// holds whenever control is outside this module; every mutation restores
/// it before returning. Duplicates are never stored.
///
/// # Examples
///
/// ```rust
/// use benchable_sets::SortedArray;
///
/// let mut array = SortedArray::new();
/// array.insert(5);
/// array.insert(1);
/// array.insert(3);
/// assert_eq!(array.as_slice(), &[1, 3, 5]);
///
/// assert_eq!(array.find(3), Some(1));
/// assert_eq!(array.find(4), None);
///
/// assert!(array.delete(3));
/// assert_eq!(array.as_slice(), &[1, 5]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SortedArray {
    inner: Vec<i64>,
}

impl SortedArray {
    /// Creates a new, empty container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use benchable_sets::SortedArray;
    ///
    /// let array = SortedArray::new();
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

    /// Searches for `value`, returning its index or `None`.
    ///
    /// Delegates to [`binary_search`](Self::binary_search), the canonical
    /// membership check for this container.
    #[inline]
    #[must_use]
    pub fn find(&self, value: i64) -> Option<usize> {
        self.binary_search(value)
    }

    /// Searches for `value` using binary search.
    ///
    /// Returns the index of `value`, or `None` if it is not stored.
    ///
    /// # Complexity
    ///
    /// O(log n)
    #[inline]
    #[must_use]
    pub fn binary_search(&self, value: i64) -> Option<usize> {
        self.binary_search_internal(value).ok()
    }

    /// Searches for `value` using interpolation search.
    ///
    /// Returns the index of `value`, or `None` if it is not stored. Agrees
    /// with [`binary_search`](Self::binary_search) on every array state and
    /// query.
    ///
    /// # Complexity
    ///
    /// O(log log n) expected on uniformly distributed keys, O(n) worst case
    /// on skewed distributions.
    #[inline]
    #[must_use]
    pub fn interpolation_search(&self, value: i64) -> Option<usize> {
        self.interpolation_search_internal(value).ok()
    }

    /// Inserts `value`, returning its index.
    ///
    /// If `value` is already stored, nothing changes and its existing index
    /// is returned. Otherwise it is spliced in at its sort-preserving
    /// position, shifting subsequent elements right by one.
    ///
    /// # Complexity
    ///
    /// O(log n) search + O(n) shifting.
    pub fn insert(&mut self, value: i64) -> usize {
        match self.binary_search_internal(value) {
            Ok(index) => index,
            Err(index) => {
                self.inner.insert(index, value);
                debug_assert!(is_strictly_ascending(&self.inner));
                index
            }
        }
    }

    /// Removes `value`, shifting subsequent elements left by one.
    ///
    /// Returns `false` (and changes nothing) when `value` is not stored.
    ///
    /// # Complexity
    ///
    /// O(log n) search + O(n) shifting.
    pub fn delete(&mut self, value: i64) -> bool {
        match self.binary_search_internal(value) {
            Ok(index) => {
                self.inner.remove(index);
                debug_assert!(is_strictly_ascending(&self.inner));
                true
            }
            Err(_) => false,
        }
    }

    /// Returns the stored values as a slice, strictly ascending.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[i64] {
        &self.inner
    }

    /// Copies the stored values into a new `Vec`, strictly ascending.
    #[inline]
    #[must_use]
    pub fn to_vec(&self) -> Vec<i64> {
        self.inner.clone()
    }

    /// Binary search over the ascending sequence.
    ///
    /// Returns `Ok(index)` on an exact match, `Err(index)` with the
    /// sort-preserving insertion point otherwise. Empty container, values
    /// below the minimum, and values above the maximum are answered before
    /// the loop. Loop invariant: the answer, if present, lies in
    /// `[left, right]`.
    fn binary_search_internal(&self, value: i64) -> Result<usize, usize> {
        if self.inner.is_empty() {
            return Err(0);
        }

        let mut left = 0;
        let mut right = self.inner.len() - 1;
        if value < self.inner[left] {
            return Err(0);
        }
        if value > self.inner[right] {
            return Err(right + 1);
        }

        while left <= right {
            let middle = left + (right - left) / 2;
            match value.cmp(&self.inner[middle]) {
                std::cmp::Ordering::Equal => return Ok(middle),
                // `middle > 0` here: the pre-loop shortcut rules out values
                // below `inner[0]`, so `value < inner[middle]` forces it.
                std::cmp::Ordering::Less => right = middle - 1,
                std::cmp::Ordering::Greater => left = middle + 1,
            }
        }

        Err(left)
    }

    /// Interpolation search over the ascending sequence.
    ///
    /// Same contract and same pre-loop shortcuts as
    /// [`binary_search_internal`](Self::binary_search_internal), but the
    /// probe index is computed by linear interpolation between the window's
    /// bounding values, rounded to nearest. A probe falling left of the
    /// window answers `Err(left)`, right of the window `Err(right + 1)`;
    /// both are exactly the insertion point at that moment, which keeps the
    /// two strategies in lockstep on skewed distributions instead of
    /// diverging.
    ///
    /// The interpolation divides by `inner[right] - inner[left]`. That
    /// divisor cannot be zero while the strict-ascending invariant holds and
    /// `left < right`; the `left == right` window probes `left` directly,
    /// and equal bounding values fall back to probing `left` as well, so the
    /// division is guarded rather than merely unreachable.
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn interpolation_search_internal(&self, value: i64) -> Result<usize, usize> {
        if self.inner.is_empty() {
            return Err(0);
        }

        let mut left = 0;
        let mut right = self.inner.len() - 1;
        if value < self.inner[left] {
            return Err(0);
        }
        if value > self.inner[right] {
            return Err(right + 1);
        }

        while left <= right {
            let candidate = if left == right || self.inner[left] == self.inner[right] {
                left
            } else {
                let low = self.inner[left] as f64;
                let high = self.inner[right] as f64;
                let fraction = (value as f64 - low) / (high - low);
                let offset = ((right - left) as f64 * fraction).round();
                if offset < 0.0 {
                    // probe fell left of the window
                    return Err(left);
                }
                let probed = left + offset as usize;
                if probed > right {
                    // probe fell right of the window
                    return Err(right + 1);
                }
                probed
            };

            match value.cmp(&self.inner[candidate]) {
                std::cmp::Ordering::Equal => return Ok(candidate),
                // `candidate > 0` here, by the same argument as in binary
                // search.
                std::cmp::Ordering::Less => right = candidate - 1,
                std::cmp::Ordering::Greater => left = candidate + 1,
            }
        }

        Err(left)
    }
}

impl FromIterator<i64> for SortedArray {
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

impl Benchable for SortedArray {
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

fn is_strictly_ascending(values: &[i64]) -> bool {
    values.windows(2).all(|pair| pair[0] < pair[1])
}
