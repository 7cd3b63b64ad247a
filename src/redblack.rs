//! A self-balancing BST using node colors (a red-black tree). The tree keeps three invariants:
//!
//! 1. A red node never has a red child.
//! 2. Every path from a node down to an empty subtree crosses the same number of black nodes
//!    (the node's "black-height").
//! 3. The root is black.
//!
//! Together these bound the longest root-to-leaf path to twice the shortest so the height is
//! `O(lg N)`.
//!
//! Inserts add a red node and repair red-red violations while unwinding: whenever a node has a
//! red child with a red child of its own, the three are rotated into a red node with two black
//! children. Deletes report upward whether a subtree lost a black node and each parent repairs
//! that deficit from its sibling or passes it further up.
//!
//! # Examples
//!
//! ```
//! use bstkit::redblack::Tree;
//!
//! let tree: Tree = (1..=100).collect();
//! assert!(tree.height() <= 12);
//!
//! let tree = tree.delete(50);
//! assert!(!tree.find(50));
//! assert_eq!(tree.node_count(), 99);
//! ```

use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::iter::{Direction, Dump};
use crate::node::{self, rotate_left, rotate_right, Link, Node, Tag};

/// The balancing tag of red-black nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// New nodes are red.
    Red,
    /// Counted by the black-height.
    Black,
}

// Rotations only relink. The callers recolor.
impl Tag for Color {
    fn fresh() -> Self {
        Color::Red
    }
}

fn is_red(link: &Link<Color>) -> bool {
    matches!(link, Some(node) if node.tag == Color::Red)
}

fn paint(link: &mut Link<Color>, color: Color) {
    if let Some(node) = link {
        node.tag = color;
    }
}

/// A red-black tree of `i32`s. Inserting a value that is already present does nothing.
#[derive(Clone, Debug, Default)]
pub struct Tree {
    root: Link<Color>,
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

    /// Returns the tree with `value` added, rebalanced. The root is always black afterwards.
    pub fn insert(mut self, value: i32) -> Self {
        let mut root = insert(self.root.take(), value);
        root.tag = Color::Black;
        self.root = Some(root);
        self
    }

    /// Returns the tree without `value`, rebalanced. The root is always black afterwards.
    /// Deleting a value that isn't stored returns the tree unchanged.
    pub fn delete(mut self, value: i32) -> Self {
        let (root, _shorter) = delete(self.root.take(), value);
        self.root = root;
        paint(&mut self.root, Color::Black);
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
    pub fn dump(&self, direction: Direction) -> Dump<'_, Color> {
        Dump::new(self.root.as_deref(), direction)
    }

    /// Iterates over the stored values from smallest to largest.
    pub fn iter(&self) -> Dump<'_, Color> {
        self.dump(Direction::Ascending)
    }
}

impl Extend<i32> for Tree {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, values: I) {
        for value in values {
            let mut root = insert(self.root.take(), value);
            root.tag = Color::Black;
            self.root = Some(root);
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

fn insert(link: Link<Color>, value: i32) -> Box<Node<Color>> {
    let Some(mut node) = link else {
        return Node::new_boxed(value);
    };

    match value.cmp(&node.value) {
        Ordering::Less => node.left = Some(insert(node.left.take(), value)),
        Ordering::Equal => return node,
        Ordering::Greater => node.right = Some(insert(node.right.take(), value)),
    }

    node::debug_assert_ordered(&node);
    repair(node)
}

/// Whether the child is red and, if so, which of its own children are red.
fn red_grandchildren(link: &Link<Color>) -> (bool, bool) {
    match link {
        Some(child) if child.tag == Color::Red => (is_red(&child.left), is_red(&child.right)),
        _ => (false, false),
    }
}

/// Fixes a red child with a red child below `node`, rotating the middle value of the three up.
/// The result is a red node with two black children. Only the first matching pattern is fixed.
fn repair(mut node: Box<Node<Color>>) -> Box<Node<Color>> {
    let (left_left, left_right) = red_grandchildren(&node.left);
    let (right_left, right_right) = red_grandchildren(&node.right);

    if left_left {
        if let Some(left) = node.left.as_mut() {
            paint(&mut left.left, Color::Black);
        }
        rotate_right(node)
    } else if left_right {
        paint(&mut node.left, Color::Black);
        node.left = node.left.take().map(rotate_left);
        rotate_right(node)
    } else if right_right {
        if let Some(right) = node.right.as_mut() {
            paint(&mut right.right, Color::Black);
        }
        rotate_left(node)
    } else if right_left {
        paint(&mut node.right, Color::Black);
        node.right = node.right.take().map(rotate_right);
        rotate_left(node)
    } else {
        node
    }
}

/// Deletes `value` from the subtree. The flag is `true` when the subtree's black-height shrank by
/// one (it is "double black") and the caller has to make up for it.
fn delete(link: Link<Color>, value: i32) -> (Link<Color>, bool) {
    let Some(mut node) = link else {
        return (None, false);
    };

    match value.cmp(&node.value) {
        Ordering::Less => {
            let (left, shorter) = delete(node.left.take(), value);
            node.left = left;
            if shorter {
                fix_left_deficit(node)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Greater => {
            let (right, shorter) = delete(node.right.take(), value);
            node.right = right;
            if shorter {
                fix_right_deficit(node)
            } else {
                (Some(node), false)
            }
        }
        Ordering::Equal => excise(node),
    }
}

/// Removes `node` itself from the tree.
fn excise(mut node: Box<Node<Color>>) -> (Link<Color>, bool) {
    match (node.left.take(), node.right.take()) {
        (Some(left), Some(right)) => {
            let successor = node::min_value(&right);
            node.value = successor;
            node.left = Some(left);

            let (right, shorter) = delete(Some(right), successor);
            node.right = right;
            if shorter {
                fix_right_deficit(node)
            } else {
                (Some(node), false)
            }
        }
        // Only removing a black leaf loses a black node.
        (None, None) => (None, node.tag == Color::Black),
        (Some(mut child), None) | (None, Some(mut child)) => match (node.tag, child.tag) {
            (Color::Red, _) => (Some(child), false),
            (Color::Black, Color::Red) => {
                child.tag = Color::Black;
                (Some(child), false)
            }
            (Color::Black, Color::Black) => (Some(child), true),
        },
    }
}

/// `parent`'s left subtree is one black node short. Borrows from the right sibling if it can,
/// otherwise returns `true` to pass the deficit up.
fn fix_left_deficit(mut parent: Box<Node<Color>>) -> (Link<Color>, bool) {
    if is_red(&parent.right) {
        // Rotate the red sibling above the parent. The short subtree then has a black sibling
        // and a red parent so the second pass can't come up short.
        parent.tag = Color::Red;
        paint(&mut parent.right, Color::Black);
        let mut top = rotate_left(parent);
        if let Some(lowered) = top.left.take() {
            let (left, shorter) = fix_left_deficit(lowered);
            debug_assert!(!shorter);
            top.left = left;
        }
        return (Some(top), false);
    }

    let Some(sibling) = parent.right.as_mut() else {
        unreachable!("A short left subtree implies a black node in the right subtree.");
    };

    if !is_red(&sibling.left) && !is_red(&sibling.right) {
        sibling.tag = Color::Red;
        let shorter = parent.tag == Color::Black;
        parent.tag = Color::Black;
        return (Some(parent), shorter);
    }

    if !is_red(&sibling.right) {
        // Only the inner nephew is red. Rotate it out so the outer nephew is red.
        sibling.tag = Color::Red;
        paint(&mut sibling.left, Color::Black);
        parent.right = parent.right.take().map(rotate_right);
    }

    let color = parent.tag;
    let mut top = rotate_left(parent);
    top.tag = color;
    paint(&mut top.left, Color::Black);
    paint(&mut top.right, Color::Black);
    (Some(top), false)
}

/// Mirror image of [`fix_left_deficit`].
fn fix_right_deficit(mut parent: Box<Node<Color>>) -> (Link<Color>, bool) {
    if is_red(&parent.left) {
        parent.tag = Color::Red;
        paint(&mut parent.left, Color::Black);
        let mut top = rotate_right(parent);
        if let Some(lowered) = top.right.take() {
            let (right, shorter) = fix_right_deficit(lowered);
            debug_assert!(!shorter);
            top.right = right;
        }
        return (Some(top), false);
    }

    let Some(sibling) = parent.left.as_mut() else {
        unreachable!("A short right subtree implies a black node in the left subtree.");
    };

    if !is_red(&sibling.left) && !is_red(&sibling.right) {
        sibling.tag = Color::Red;
        let shorter = parent.tag == Color::Black;
        parent.tag = Color::Black;
        return (Some(parent), shorter);
    }

    if !is_red(&sibling.left) {
        sibling.tag = Color::Red;
        paint(&mut sibling.right, Color::Black);
        parent.left = parent.left.take().map(rotate_left);
    }

    let color = parent.tag;
    let mut top = rotate_right(parent);
    top.tag = color;
    paint(&mut top.left, Color::Black);
    paint(&mut top.right, Color::Black);
    (Some(top), false)
}
