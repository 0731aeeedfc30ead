//! # benchable-sets
//!
//! Three ways of storing a dynamic set of integers and answering membership
//! queries, behind one uniform contract so a timing harness can benchmark
//! them interchangeably:
//!
//! - [`UnsortedArray`]: a plain vector scanned linearly.
//! - [`SortedArray`]: a strictly ascending vector searched by binary or
//!   interpolation search.
//! - [`IntervalBst`]: an (intentionally unbalanced) binary search tree whose
//!   leaves explicitly represent the open intervals between stored keys.
//!
//! All three implement [`Benchable`] with identical observable semantics:
//! the same operation sequence yields the same found/not-found answers in
//! every container, even though internal cost characteristics differ.
//!
//! | Container       | `find`       | `insert`     | `delete`     |
//! |-----------------|--------------|--------------|--------------|
//! | `UnsortedArray` | O(n)         | O(n)         | O(n) scan, O(1) removal |
//! | `SortedArray`   | O(log n)     | O(n)         | O(n)         |
//! | `IntervalBst`   | O(height)    | O(height)    | O(height)    |
//!
//! "Not found" and "duplicate insert" are ordinary outcomes signaled through
//! return values; no operation panics on any sequence of public calls.
//!
//! # Examples
//!
//! ```rust
//! use benchable_sets::prelude::*;
//!
//! let mut sorted = SortedArray::new();
//! sorted.insert(5);
//! sorted.insert(1);
//! sorted.insert(3);
//! assert_eq!(sorted.as_slice(), &[1, 3, 5]);
//! assert_eq!(sorted.binary_search(3), Some(1));
//! assert_eq!(sorted.interpolation_search(3), Some(1));
//!
//! let mut tree = IntervalBst::new();
//! tree.insert(10);
//! tree.insert(5);
//! tree.insert(20);
//! assert!(tree.find(5).is_some());
//! assert!(tree.find(6).is_none());
//! assert!(tree.delete(10));
//! assert!(tree.find(10).is_none());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod benchable;
pub mod interval_bst;
pub mod layout;
pub mod sorted_array;
pub mod unsorted_array;

pub use benchable::Benchable;
pub use interval_bst::{IntervalBst, NodeId};
pub use layout::{LayoutEdge, LayoutNode, NodeLabel, TreeLayout};
pub use sorted_array::SortedArray;
pub use unsorted_array::UnsortedArray;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use benchable_sets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::benchable::Benchable;
    pub use crate::interval_bst::{IntervalBst, NodeId};
    pub use crate::layout::{LayoutEdge, LayoutNode, NodeLabel, TreeLayout};
    pub use crate::sorted_array::SortedArray;
    pub use crate::unsorted_array::UnsortedArray;
}

// The harness may move whole containers between threads; access to any one
// instance stays exclusive.
static_assertions::assert_impl_all!(UnsortedArray: Send, Sync);
static_assertions::assert_impl_all!(SortedArray: Send, Sync);
static_assertions::assert_impl_all!(IntervalBst: Send, Sync);
