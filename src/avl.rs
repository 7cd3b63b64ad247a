//! A self-balancing BST (specifically, an AVL tree). Every node tracks the height of its subtree
//! and, after each insert or delete, the nodes along the search path are rotated so the heights
//! of any node's two subtrees differ by at most one. This keeps the tree's height `O(lg N)`.
//!
//! # Examples
//!
//! ```
//! use bstkit::avl::Tree;
//!
//! // Sorted inserts would make a plain BST a list. Here they stay balanced.
//! let tree: Tree = (1..=7).collect();
//! assert_eq!(tree.height(), 2);
//!
//! let tree = tree.delete(4);
//! assert!(!tree.find(4));
//! assert_eq!(tree.node_count(), 6);
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::iter::{Direction, Dump};
use crate::node::{self, rotate_left, rotate_right, Link, Node, Tag};

/// The balancing tag of AVL nodes: the length of the longest path from the node down to a leaf.
/// A node with no children has a height of 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Height(pub(crate) i32);

impl Tag for Height {
    fn fresh() -> Self {
        Height(0)
    }

    fn refresh(node: &mut Node<Self>) {
        node.tag = Height(1 + height(&node.left).max(height(&node.right)));
    }
}

/// Stored height of a subtree, -1 when it's empty.
fn height(link: &Link<Height>) -> i32 {
    link.as_ref().map_or(-1, |n| n.tag.0)
}

/// The difference in height between the left and right subtrees. Positive means left-heavy.
fn balance_factor(node: &Node<Height>) -> i32 {
    height(&node.left) - height(&node.right)
}

/// An AVL tree of `i32`s. Inserting a value that is already present does nothing.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link<Height>,
}

impl Drop for Tree {
    fn drop(&mut self) {
        node::teardown(self.root.take());
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Returns the tree with `value` added, rebalanced.
    ///
    /// # Examples
    ///
    /// ```
    /// use bstkit::avl::Tree;
    ///
    /// let tree = Tree::new().insert(10).insert(20).insert(30);
    ///
    /// // Inserting 30 rotated 20 up to the root.
    /// assert_eq!(tree.height(), 1);
    /// assert!(tree.find(30));
    /// ```
    pub fn insert(mut self, value: i32) -> Self {
        self.root = Some(insert(self.root.take(), value));
        self
    }

    /// Returns the tree without `value`, rebalanced. Deleting a value that isn't stored returns
    /// the tree unchanged.
    pub fn delete(mut self, value: i32) -> Self {
        self.root = delete(self.root.take(), value);
        self
    }

    /// Whether `value` is stored in the tree.
    pub fn find(&self, value: i32) -> bool {
        node::contains(&self.root, value)
    }

    /// The smallest stored value, or [`Error::Empty`] for an empty tree.
    pub fn min_value(&self) -> Result<i32> {
        self.root
            .as_deref()
            .map(node::min_value)
            .ok_or(Error::Empty)
    }

    /// Length of the longest root-to-leaf path, -1 for an empty tree. This is read from the root
    /// rather than recomputed.
    pub fn height(&self) -> i32 {
        height(&self.root)
    }

    /// How many values are stored.
    pub fn node_count(&self) -> usize {
        node::count(&self.root)
    }

    /// Whether the tree stores no values.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Iterates over the stored values in the given order.
    pub fn dump(&self, direction: Direction) -> Dump<'_, Height> {
        Dump::new(self.root.as_deref(), direction)
    }

    /// Iterates over the stored values from smallest to largest.
    pub fn iter(&self) -> Dump<'_, Height> {
        self.dump(Direction::Ascending)
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            self.root = Some(insert(self.root.take(), value));
        }
    }
}

impl std::iter::FromIterator<i32> for Tree {
    fn from_iter<I: IntoIterator<Item = i32>>(values: I) -> Self {
        let mut tree = Self::new();
        tree.extend(values);
        tree
    }
}

fn insert(link: Link<Height>, value: i32) -> Box<Node<Height>> {
    let Some(mut node) = link else {
        return Node::new_boxed(value);
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value)),
        Ordering::Equal => return node,
        Ordering::Greater => node.right = Some(insert(node.right.take(), value)),
    }

    Height::refresh(&mut node);
    node::debug_assert_ordered(&node);

    // The new value tells us which grandchild subtree grew. If it's the inner one we need a
    // double rotation.
    let balanced = match balance_factor(&node) {
        factor if factor > 1 => {
            if node.left.as_ref().map_or(false, |left| value > left.value) {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        factor if factor < -1 => {
            if node.right.as_ref().map_or(false, |right| value < right.value) {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    };

    debug_assert_balanced(&balanced);
    balanced
}

fn delete(link: Link<Height>, value: i32) -> Link<Height> {
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            // A spliced-in child is already balanced with a correct height. Our parent refreshes
            // its own height when it unwinds.
            (None, right) => return right,
            (left, None) => return left,
            (left, Some(right)) => {
                let successor = node::min_value(&right);
                node.value = successor;
                node.left = left;
                node.right = delete(Some(right), successor);
            }
        },
    }

    Height::refresh(&mut node);
    node::debug_assert_ordered(&node);
    Some(rebalance(node))
}

/// Restores the AVL invariant at `node` after a delete shrank one of its subtrees. The double
/// rotation is only needed when the inner grandchild is strictly taller than the outer one.
fn rebalance(mut node: Box<Node<Height>>) -> Box<Node<Height>> {
    let balanced = match balance_factor(&node) {
        factor if factor > 1 => {
            if node.left.as_deref().map_or(false, |left| balance_factor(left) < 0) {
                node.left = node.left.take().map(rotate_left);
            }
            rotate_right(node)
        }
        factor if factor < -1 => {
            if node.right.as_deref().map_or(false, |right| balance_factor(right) > 0) {
                node.right = node.right.take().map(rotate_right);
            }
            rotate_left(node)
        }
        _ => node,
    };

    debug_assert_balanced(&balanced);
    balanced
}

fn debug_assert_balanced(node: &Node<Height>) {
    if cfg!(debug_assertions) {
        let left_height = height(&node.left);
        let right_height = height(&node.right);
        assert_eq!(node.tag.0, left_height.max(right_height) + 1);
        assert!((left_height - right_height).abs() <= 1);
    }
}
