//! A plain, unbalanced BST. Its height depends entirely on insertion order (inserting sorted
//! values degrades it into a list) but it is the simplest correct reference for the balanced
//! variants and backs the [`PriorityQueue`][crate::queue::PriorityQueue].
//!
//! # Examples
//!
//! ```
//! use bstkit::simple::Tree;
//! use bstkit::Direction;
//!
//! let tree: Tree = [5, 3, 8, 1, 4].iter().copied().collect();
//!
//! assert!(tree.find(4));
//! assert_eq!(tree.height(), 2);
//! assert_eq!(tree.dump(Direction::Descending).collect::<Vec<_>>(), [8, 5, 4, 3, 1]);
//!
//! // Operations that change the tree consume it and hand back the new one.
//! let tree = tree.delete(4);
//! assert!(!tree.find(4));
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::iter::{Direction, Dump};
use crate::node::{self, Link, Node};

/// An unbalanced Binary Search Tree of `i32`s. Inserting a value that is already present does
/// nothing.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link<()>,
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

    /// Returns the tree with `value` added.
    pub fn insert(mut self, value: i32) -> Self {
        self.root = Some(insert(self.root.take(), value));
        self
    }

    /// Returns the tree without `value`. Deleting a value that isn't stored returns the tree
    /// unchanged.
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

    /// Length of the longest root-to-leaf path, -1 for an empty tree.
    pub fn height(&self) -> i32 {
        node::height(&self.root)
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
    pub fn dump(&self, direction: Direction) -> Dump<'_, ()> {
        Dump::new(self.root.as_deref(), direction)
    }

    /// Iterates over the stored values from smallest to largest.
    pub fn iter(&self) -> Dump<'_, ()> {
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

fn insert(link: Link<()>, value: i32) -> Box<Node<()>> {
    let Some(mut node) = link else {
        return Node::new_boxed(value);
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value)),
        Ordering::Equal => {}
        Ordering::Greater => node.right = Some(insert(node.right.take(), value)),
    }

    node::debug_assert_ordered(&node);
    node
}

fn delete(link: Link<()>, value: i32) -> Link<()> {
    let mut node = link?;

    match value.cmp(&node.value) {
        Ordering::Less => node.left = delete(node.left.take(), value),
        Ordering::Greater => node.right = delete(node.right.take(), value),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, right) => return right,
            (left, None) => return left,
            // Promote the in-order successor. It has no left child so deleting it from the
            // right subtree is one of the easy cases above.
            (left, Some(right)) => {
                let successor = node::min_value(&right);
                node.value = successor;
                node.left = left;
                node.right = delete(Some(right), successor);
            }
        },
    }

    node::debug_assert_ordered(&node);
    Some(node)
}
