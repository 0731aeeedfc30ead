//! Binary search tree with explicit interval leaves.
//!
//! [`IntervalBst`] stores one key per internal node and, unlike a textbook
//! BST, materializes every gap between neighboring keys as a leaf holding
//! the open interval `(lower, upper)` — unbounded at the extremes. Every
//! search therefore ends at a node that *names its own answer*: a value node
//! on a hit, or the leaf covering the queried value on a miss. The tree is
//! never empty; the starting state is a single `(-∞, +∞)` leaf.
//!
//! The tree does not rebalance. Degenerate shapes (and their O(n)
//! operations) are expected and intentional: the point of this container is
//! to measure exactly that behavior against the array containers.
//!
//! # Structural invariants
//!
//! - Every leaf is an interval node; every internal node is a value node
//!   with exactly two children.
//! - In-order, the leaf intervals tile the whole integer domain with no
//!   gaps or overlaps, and each boundary equals the nearest ancestor key:
//!   `(-∞, k₁), k₁, (k₁, k₂), k₂, …, kₙ, (kₙ, +∞)`.
//!
//! # Representation
//!
//! Nodes live in an arena (`Vec` of slots) addressed by [`NodeId`]; child
//! and parent links are plain ids, so the parent back-reference is
//! non-owning and no ownership cycles exist. Slots vacated by `delete` are
//! recycled through a free list.
//!
//! # Time Complexity
//!
//! | Operation | Complexity                          |
//! |-----------|-------------------------------------|
//! | `find`    | O(height), O(n) worst case          |
//! | `insert`  | O(height)                           |
//! | `delete`  | O(height)                           |
//! | `len`     | O(1)                                |

use std::cmp::Ordering;
use std::fmt;

use crate::benchable::Benchable;

/// Opaque handle to a node of an [`IntervalBst`].
///
/// Ids are only guaranteed valid until the next `delete`; a deletion may
/// free the addressed node and a later `insert` may recycle its slot.
/// [`IntervalBst::key`] looks up an id without panicking on staleness.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

/// What a node holds: a stored key with two children, or an open interval.
///
/// The split into two variants makes the invalid states (a leaf with a key,
/// an internal node with an interval) unrepresentable.
#[derive(Clone, Debug)]
pub(crate) enum NodeKind {
    /// Internal node: one stored key and exactly two children.
    Value {
        key: i64,
        left: NodeId,
        right: NodeId,
    },
    /// Leaf: the open interval between neighboring stored keys.
    /// `None` means unbounded (`-∞` for `lower`, `+∞` for `upper`).
    Interval {
        lower: Option<i64>,
        upper: Option<i64>,
    },
}

#[derive(Clone, Debug)]
struct Node {
    /// Non-owning back-reference; `None` only for the root.
    parent: Option<NodeId>,
    kind: NodeKind,
}

/// An unbalanced binary search tree whose leaves are open intervals.
///
/// # Examples
///
/// ```rust
/// use benchable_sets::IntervalBst;
///
/// let mut tree = IntervalBst::new();
/// for key in [10, 5, 20, 3, 7] {
///     tree.insert(key);
/// }
///
/// assert!(tree.find(7).is_some());
/// assert!(tree.find(6).is_none());
///
/// assert!(tree.delete(10));
/// assert!(tree.find(10).is_none());
/// assert!(tree.find(5).is_some());
/// assert_eq!(tree.keys(), vec![3, 5, 7, 20]);
/// ```
#[derive(Clone, Debug)]
pub struct IntervalBst {
    nodes: Vec<Option<Node>>,
    /// Indices of vacant slots, recycled by `allocate`.
    free: Vec<usize>,
    root: NodeId,
    /// Number of value nodes.
    length: usize,
}

impl IntervalBst {
    /// Creates a tree in its starting state: a single `(-∞, +∞)` leaf.
    ///
    /// The tree always has at least one node; "empty" means no *value*
    /// nodes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use benchable_sets::IntervalBst;
    ///
    /// let tree = IntervalBst::new();
    /// assert!(tree.is_empty());
    /// assert_eq!(tree.leaf_intervals(), vec![(None, None)]);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(Node {
                parent: None,
                kind: NodeKind::Interval {
                    lower: None,
                    upper: None,
                },
            })],
            free: Vec::new(),
            root: NodeId(0),
            length: 0,
        }
    }

    /// Returns the number of stored keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if no keys are stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Searches for `value`.
    ///
    /// Returns the id of the value node holding `value`, or `None` if the
    /// descent ended at an interval leaf (a leaf is never reported as a
    /// match).
    ///
    /// # Complexity
    ///
    /// O(height)
    #[must_use]
    pub fn find(&self, value: i64) -> Option<NodeId> {
        let id = self.search_for(value);
        match self.node(id).kind {
            NodeKind::Value { .. } => Some(id),
            NodeKind::Interval { .. } => None,
        }
    }

    /// Inserts `value`, returning the id of its value node.
    ///
    /// If `value` is already stored, nothing changes and the existing node's
    /// id is returned. Otherwise the leaf covering `value` is split: two new
    /// leaves `(lower, value)` and `(value, upper)` become its children and
    /// the leaf itself turns into the value node, so interval coverage is
    /// preserved exactly.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn insert(&mut self, value: i64) -> NodeId {
        let id = self.search_for(value);
        let NodeKind::Interval { lower, upper } = self.node(id).kind else {
            // already present
            return id;
        };

        let left = self.allocate(Node {
            parent: Some(id),
            kind: NodeKind::Interval {
                lower,
                upper: Some(value),
            },
        });
        let right = self.allocate(Node {
            parent: Some(id),
            kind: NodeKind::Interval {
                lower: Some(value),
                upper,
            },
        });
        self.node_mut(id).kind = NodeKind::Value {
            key: value,
            left,
            right,
        };
        self.length += 1;
        id
    }

    /// Removes `value`. Returns `false` (and changes nothing) when it is
    /// not stored.
    ///
    /// Two cases, both of which re-derive one leaf's lower bound so the
    /// intervals keep tiling the domain:
    ///
    /// - The node's left child is a leaf: the node is spliced out in favor
    ///   of its right child, and the lower bound of that subtree's leftmost
    ///   leaf is widened to the removed leaf's lower bound.
    /// - The left subtree contains values: the in-order predecessor's key is
    ///   promoted into the node, the predecessor is spliced out in favor of
    ///   its (necessarily leaf) right child, and the leftmost leaf under the
    ///   node's right subtree gets the promoted key as its lower bound.
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn delete(&mut self, value: i64) -> bool {
        let id = self.search_for(value);
        let NodeKind::Value { left, right, .. } = self.node(id).kind else {
            return false;
        };

        if let NodeKind::Interval {
            lower: removed_lower,
            ..
        } = self.node(left).kind
        {
            // no values to the left: promote the right child wholesale
            let replacement = self.splice(id, left);
            let leftmost = self.leftmost_leaf(replacement);
            self.set_lower_bound(leftmost, removed_lower);
        } else {
            // promote the in-order predecessor's key
            let predecessor = self.rightmost_value(left);
            let NodeKind::Value {
                key: promoted,
                right: predecessor_right,
                ..
            } = self.node(predecessor).kind
            else {
                unreachable!("rightmost_value returned a leaf")
            };

            match &mut self.node_mut(id).kind {
                NodeKind::Value { key, .. } => *key = promoted,
                NodeKind::Interval { .. } => {
                    unreachable!("deleted position must hold a value")
                }
            }
            self.splice(predecessor, predecessor_right);

            let leftmost = self.leftmost_leaf(right);
            self.set_lower_bound(leftmost, Some(promoted));
        }

        self.length -= 1;
        true
    }

    /// Returns the key currently stored at `id`, or `None` if the id does
    /// not address a value node (stale handles included).
    #[must_use]
    pub fn key(&self, id: NodeId) -> Option<i64> {
        match self.nodes.get(id.0)?.as_ref()?.kind {
            NodeKind::Value { key, .. } => Some(key),
            NodeKind::Interval { .. } => None,
        }
    }

    /// Returns the stored keys in ascending order.
    ///
    /// The traversal is iterative, so a degenerate (list-shaped) tree
    /// cannot overflow the stack.
    #[must_use]
    pub fn keys(&self) -> Vec<i64> {
        let mut keys = Vec::with_capacity(self.length);
        self.visit_in_order(|kind| {
            if let NodeKind::Value { key, .. } = *kind {
                keys.push(key);
            }
        });
        keys
    }

    /// Returns every leaf's `(lower, upper)` bounds in ascending order.
    ///
    /// For a tree holding keys `k₁ < … < kₙ` this is exactly
    /// `[(None, Some(k₁)), (Some(k₁), Some(k₂)), …, (Some(kₙ), None)]`;
    /// for the starting state it is `[(None, None)]`.
    #[must_use]
    pub fn leaf_intervals(&self) -> Vec<(Option<i64>, Option<i64>)> {
        let mut intervals = Vec::with_capacity(self.length + 1);
        self.visit_in_order(|kind| {
            if let NodeKind::Interval { lower, upper } = *kind {
                intervals.push((lower, upper));
            }
        });
        intervals
    }

    /// Computes a diagnostic rendering layout for this tree.
    ///
    /// See [`TreeLayout`](crate::layout::TreeLayout).
    #[must_use]
    pub fn layout(&self) -> crate::layout::TreeLayout {
        crate::layout::TreeLayout::of(self)
    }

    pub(crate) const fn root_id(&self) -> NodeId {
        self.root
    }

    pub(crate) fn kind(&self, id: NodeId) -> &NodeKind {
        &self.node(id).kind
    }

    /// Descends from the root: left on smaller, right on larger, stopping
    /// on an exact match or at any leaf. The returned node names the
    /// answer either way.
    fn search_for(&self, value: i64) -> NodeId {
        let mut current = self.root;
        loop {
            match self.node(current).kind {
                NodeKind::Value { key, left, right } => match value.cmp(&key) {
                    Ordering::Less => current = left,
                    Ordering::Greater => current = right,
                    Ordering::Equal => return current,
                },
                NodeKind::Interval { .. } => return current,
            }
        }
    }

    /// Splices `target` out of the tree using its leaf child `leaf`: the
    /// *other* child takes `target`'s place under `target`'s parent (or
    /// becomes the root), and both `target` and `leaf` are freed.
    ///
    /// Preconditions (internal invariants, never violated by any sequence
    /// of public operations): `leaf` is a direct child of `target` and is an
    /// interval leaf.
    fn splice(&mut self, target: NodeId, leaf: NodeId) -> NodeId {
        let NodeKind::Value { left, right, .. } = self.node(target).kind else {
            unreachable!("splice target must be a value node")
        };
        debug_assert!(
            leaf == left || leaf == right,
            "spliced leaf must be a direct child of the target",
        );
        debug_assert!(
            matches!(self.node(leaf).kind, NodeKind::Interval { .. }),
            "spliced child must be an interval leaf",
        );

        let keeper = if leaf == left { right } else { left };
        let parent = self.node(target).parent;
        self.node_mut(keeper).parent = parent;
        match parent {
            Some(parent_id) => match &mut self.node_mut(parent_id).kind {
                NodeKind::Value { left, right, .. } => {
                    if *left == target {
                        *left = keeper;
                    } else {
                        *right = keeper;
                    }
                }
                NodeKind::Interval { .. } => {
                    unreachable!("a parent is always a value node")
                }
            },
            None => self.root = keeper,
        }

        self.release(target);
        self.release(leaf);
        keeper
    }

    /// Walks right from `from` (a value node) to the last value node before
    /// the leaves: the in-order predecessor's position when `from` is a left
    /// subtree root.
    fn rightmost_value(&self, from: NodeId) -> NodeId {
        let mut current = from;
        loop {
            let NodeKind::Value { right, .. } = self.node(current).kind else {
                unreachable!("rightmost_value must start at a value node")
            };
            if matches!(self.node(right).kind, NodeKind::Value { .. }) {
                current = right;
            } else {
                return current;
            }
        }
    }

    /// Walks down the left spine from `from` to its leftmost leaf.
    fn leftmost_leaf(&self, from: NodeId) -> NodeId {
        let mut current = from;
        while let NodeKind::Value { left, .. } = self.node(current).kind {
            current = left;
        }
        current
    }

    fn set_lower_bound(&mut self, leaf: NodeId, bound: Option<i64>) {
        match &mut self.node_mut(leaf).kind {
            NodeKind::Interval { lower, .. } => *lower = bound,
            NodeKind::Value { .. } => {
                unreachable!("lower bounds live on interval leaves")
            }
        }
    }

    /// In-order traversal with an explicit agenda (no recursion).
    fn visit_in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&NodeKind),
    {
        enum Step {
            Descend(NodeId),
            Emit(NodeId),
        }

        let mut agenda = vec![Step::Descend(self.root)];
        while let Some(step) = agenda.pop() {
            match step {
                Step::Descend(id) => match self.node(id).kind {
                    NodeKind::Value { left, right, .. } => {
                        agenda.push(Step::Descend(right));
                        agenda.push(Step::Emit(id));
                        agenda.push(Step::Descend(left));
                    }
                    NodeKind::Interval { .. } => visit(&self.node(id).kind),
                },
                Step::Emit(id) => visit(&self.node(id).kind),
            }
        }
    }

    fn node(&self, id: NodeId) -> &Node {
        match &self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("node id addresses a vacant slot"),
        }
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match &mut self.nodes[id.0] {
            Some(node) => node,
            None => unreachable!("node id addresses a vacant slot"),
        }
    }

    fn allocate(&mut self, node: Node) -> NodeId {
        if let Some(index) = self.free.pop() {
            self.nodes[index] = Some(node);
            NodeId(index)
        } else {
            self.nodes.push(Some(node));
            NodeId(self.nodes.len() - 1)
        }
    }

    fn release(&mut self, id: NodeId) {
        self.nodes[id.0] = None;
        self.free.push(id.0);
    }

    fn fmt_subtree(&self, id: NodeId, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let NodeKind::Value { key, left, right } = self.node(id).kind {
            write!(formatter, "{key}")?;
            let left_is_value = matches!(self.node(left).kind, NodeKind::Value { .. });
            let right_is_value = matches!(self.node(right).kind, NodeKind::Value { .. });
            if left_is_value || right_is_value {
                formatter.write_str("(")?;
                self.fmt_subtree(left, formatter)?;
                formatter.write_str(",")?;
                self.fmt_subtree(right, formatter)?;
                formatter.write_str(")")?;
            }
        }
        Ok(())
    }
}

impl Default for IntervalBst {
    fn default() -> Self {
        Self::new()
    }
}

/// Linearized form: a value node prints its key, followed by
/// `(left,right)` only when at least one child holds a value; leaves print
/// nothing; the starting state prints the empty string.
///
/// Recursive and intended for small diagnostic dumps.
///
/// # Examples
///
/// ```rust
/// use benchable_sets::IntervalBst;
///
/// let tree: IntervalBst = [10, 5, 20].into_iter().collect();
/// assert_eq!(tree.to_string(), "10(5,20)");
/// ```
impl fmt::Display for IntervalBst {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_subtree(self.root, formatter)
    }
}

impl FromIterator<i64> for IntervalBst {
    /// Builds a tree by inserting every yielded value in order; duplicates
    /// are dropped. Insertion order shapes the tree.
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        let mut tree = Self::new();
        for value in iter {
            tree.insert(value);
        }
        tree
    }
}

impl Benchable for IntervalBst {
    type Handle = NodeId;

    #[inline]
    fn insert(&mut self, value: i64) -> NodeId {
        Self::insert(self, value)
    }

    #[inline]
    fn find(&self, value: i64) -> Option<NodeId> {
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
