//! Diagnostic layout for rendering an [`IntervalBst`].
//!
//! Produces positions and connecting edges only; turning the geometry into
//! an actual picture (SVG, terminal art, …) is left to external tooling.
//! Subtrees are packed left to right: a node's left subtree is placed
//! first, the node itself centers over the gap that follows it, and the
//! right subtree packs after the node. Leaves get wide boxes (they carry
//! two bounds), value nodes narrow rounded ones.
//!
//! ```rust
//! use benchable_sets::{IntervalBst, NodeLabel};
//!
//! let tree: IntervalBst = [10].into_iter().collect();
//! let layout = tree.layout();
//!
//! // one value box, two leaf boxes, two edges
//! assert_eq!(layout.nodes.len(), 3);
//! assert_eq!(layout.edges.len(), 2);
//! assert!(layout
//!     .nodes
//!     .iter()
//!     .any(|node| node.label == NodeLabel::Key(10)));
//! ```

use crate::interval_bst::{IntervalBst, NodeId, NodeKind};

/// Vertical distance between two tree levels.
pub const LEVEL_HEIGHT: f64 = 60.0;

/// Box width of a leaf (interval) node.
pub const INTERVAL_WIDTH: f64 = 68.0;

/// Box width of a value node.
pub const VALUE_WIDTH: f64 = 40.0;

/// Box height of any node.
pub const NODE_HEIGHT: f64 = 24.0;

/// Horizontal space between two horizontally adjacent boxes.
pub const HORIZONTAL_GAP: f64 = 12.0;

/// Vertical offset that centers a text baseline inside its box.
pub const BASELINE_OFFSET: f64 = 7.0;

/// What a laid-out node displays.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeLabel {
    /// A stored key.
    Key(i64),
    /// A leaf's bounds; `None` means unbounded.
    Bounds {
        /// Lower bound of the open interval.
        lower: Option<i64>,
        /// Upper bound of the open interval.
        upper: Option<i64>,
    },
}

/// One node's box and text anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutNode {
    /// What the node displays.
    pub label: NodeLabel,
    /// Left edge of the box.
    pub x: f64,
    /// Top edge of the box.
    pub y: f64,
    /// Box width ([`VALUE_WIDTH`] or [`INTERVAL_WIDTH`]).
    pub width: f64,
    /// Box height ([`NODE_HEIGHT`]).
    pub height: f64,
    /// Horizontal center for the label text.
    pub text_x: f64,
    /// Baseline for the label text.
    pub text_y: f64,
}

/// A straight edge from a parent's bottom anchor to a child's top anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEdge {
    /// Parent anchor, horizontal.
    pub from_x: f64,
    /// Parent anchor, vertical.
    pub from_y: f64,
    /// Child anchor, horizontal.
    pub to_x: f64,
    /// Child anchor, vertical.
    pub to_y: f64,
}

/// The computed geometry of a whole tree.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TreeLayout {
    /// Every node's box, in left-to-right placement order.
    pub nodes: Vec<LayoutNode>,
    /// Every parent-to-child edge.
    pub edges: Vec<LayoutEdge>,
}

impl TreeLayout {
    /// Computes the layout of `tree`, anchored at the origin.
    ///
    /// Recursive over the tree shape; intended for small diagnostic dumps,
    /// not for degenerate trees with thousands of keys.
    #[must_use]
    pub fn of(tree: &IntervalBst) -> Self {
        let mut layout = Self::default();
        layout.place(tree, tree.root_id(), 0.0, 0);
        layout
    }

    /// Places the subtree rooted at `id` with its leftmost box starting at
    /// `left`. Returns `(center, right)`: the horizontal center of `id`'s
    /// own box (edge anchor for the caller) and the rightmost extent of the
    /// whole subtree (packing start for the next sibling).
    fn place(&mut self, tree: &IntervalBst, id: NodeId, left: f64, level: u32) -> (f64, f64) {
        let baseline = f64::from(level) * LEVEL_HEIGHT + BASELINE_OFFSET + NODE_HEIGHT / 2.0;
        let top = baseline - BASELINE_OFFSET - NODE_HEIGHT / 2.0;

        match *tree.kind(id) {
            NodeKind::Interval { lower, upper } => {
                let center = left + INTERVAL_WIDTH / 2.0;
                self.nodes.push(LayoutNode {
                    label: NodeLabel::Bounds { lower, upper },
                    x: left,
                    y: top,
                    width: INTERVAL_WIDTH,
                    height: NODE_HEIGHT,
                    text_x: center,
                    text_y: baseline,
                });
                (center, left + INTERVAL_WIDTH)
            }
            NodeKind::Value {
                key,
                left: left_child,
                right: right_child,
            } => {
                let (left_center, left_right) = self.place(tree, left_child, left, level + 1);
                let center = left_right + HORIZONTAL_GAP / 2.0;

                let child_top_anchor = baseline - BASELINE_OFFSET - NODE_HEIGHT / 2.0 + LEVEL_HEIGHT;
                let bottom_anchor = baseline - BASELINE_OFFSET + NODE_HEIGHT / 2.0;
                self.edges.push(LayoutEdge {
                    from_x: center,
                    from_y: bottom_anchor,
                    to_x: left_center,
                    to_y: child_top_anchor,
                });

                self.nodes.push(LayoutNode {
                    label: NodeLabel::Key(key),
                    x: center - VALUE_WIDTH / 2.0,
                    y: top,
                    width: VALUE_WIDTH,
                    height: NODE_HEIGHT,
                    text_x: center,
                    text_y: baseline,
                });

                let (right_center, right_right) =
                    self.place(tree, right_child, left_right + HORIZONTAL_GAP, level + 1);
                self.edges.push(LayoutEdge {
                    from_x: center,
                    from_y: bottom_anchor,
                    to_x: right_center,
                    to_y: child_top_anchor,
                });

                (center, right_right)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{
        HORIZONTAL_GAP, INTERVAL_WIDTH, LEVEL_HEIGHT, NodeLabel, TreeLayout, VALUE_WIDTH,
    };
    use crate::interval_bst::IntervalBst;

    #[test]
    fn starting_state_is_one_unbounded_leaf_at_the_origin() {
        let layout = TreeLayout::of(&IntervalBst::new());
        assert_eq!(layout.edges.len(), 0);
        assert_eq!(layout.nodes.len(), 1);

        let leaf = &layout.nodes[0];
        assert_eq!(
            leaf.label,
            NodeLabel::Bounds {
                lower: None,
                upper: None
            }
        );
        assert_eq!(leaf.x, 0.0);
        assert_eq!(leaf.y, 0.0);
        assert_eq!(leaf.width, INTERVAL_WIDTH);
    }

    #[test]
    fn single_key_packs_left_leaf_then_root_then_right_leaf() {
        let tree: IntervalBst = [10].into_iter().collect();
        let layout = TreeLayout::of(&tree);

        assert_eq!(layout.nodes.len(), 3);
        assert_eq!(layout.edges.len(), 2);

        // left leaf starts at the origin on level 1
        assert_eq!(layout.nodes[0].x, 0.0);
        assert_eq!(layout.nodes[0].y, LEVEL_HEIGHT);

        // root centers over the gap after its left subtree, on level 0
        let root = &layout.nodes[1];
        assert_eq!(root.label, NodeLabel::Key(10));
        assert_eq!(root.text_x, INTERVAL_WIDTH + HORIZONTAL_GAP / 2.0);
        assert_eq!(root.x, root.text_x - VALUE_WIDTH / 2.0);
        assert_eq!(root.y, 0.0);

        // right leaf packs after the left subtree plus the gap
        assert_eq!(layout.nodes[2].x, INTERVAL_WIDTH + HORIZONTAL_GAP);
        assert_eq!(layout.nodes[2].y, LEVEL_HEIGHT);
    }

    #[test]
    fn edges_run_from_parent_center_to_child_centers() {
        let tree: IntervalBst = [10].into_iter().collect();
        let layout = TreeLayout::of(&tree);

        let root_center = INTERVAL_WIDTH + HORIZONTAL_GAP / 2.0;
        for edge in &layout.edges {
            assert_eq!(edge.from_x, root_center);
        }
        assert_eq!(layout.edges[0].to_x, layout.nodes[0].text_x);
        assert_eq!(layout.edges[1].to_x, layout.nodes[2].text_x);
    }
}
