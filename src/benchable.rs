//! The uniform contract the benchmark harness drives.
//!
//! Every container in this crate exposes the same three operations so the
//! harness can treat them polymorphically and time them against identical
//! operation sequences. The containers differ only in cost, never in
//! observable answers.

use std::fmt::Debug;

/// A container of unique integers usable by the benchmark harness.
///
/// The contract has no exceptional failure modes: a missing value is a
/// normal outcome (`None` / `false`), and inserting a duplicate is a no-op
/// that reports where the value already lives.
///
/// # Handles
///
/// [`Handle`](Benchable::Handle) is whatever the container uses to name a
/// stored value: an index for the array containers, an opaque node id for
/// the tree. A handle is only guaranteed valid until the next mutation —
/// swap-remove moves array elements and tree deletion splices nodes out.
///
/// # Examples
///
/// ```rust
/// use benchable_sets::prelude::*;
///
/// fn exercise<S: Benchable>(structure: &mut S) {
///     structure.insert(7);
///     assert!(structure.find(7).is_some());
///     assert!(structure.delete(7));
///     assert!(structure.find(7).is_none());
/// }
///
/// exercise(&mut UnsortedArray::new());
/// exercise(&mut SortedArray::new());
/// exercise(&mut IntervalBst::new());
/// ```
pub trait Benchable {
    /// Names a stored value: an index for arrays, a node id for the tree.
    type Handle: Copy + Eq + Debug;

    /// Inserts `value`, returning its handle.
    ///
    /// Idempotent: if `value` is already stored, nothing changes and the
    /// existing handle is returned.
    fn insert(&mut self, value: i64) -> Self::Handle;

    /// Returns the handle of `value`, or `None` if it is not stored.
    fn find(&self, value: i64) -> Option<Self::Handle>;

    /// Removes `value`. Returns `true` if it was stored, `false` otherwise
    /// (in which case the container is unchanged).
    fn delete(&mut self, value: i64) -> bool;

    /// Returns the number of stored values.
    fn len(&self) -> usize;

    /// Returns `true` if no values are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
