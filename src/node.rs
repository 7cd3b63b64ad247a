//! The node type shared by every tree variant along with the operations that don't care about
//! balancing: rotations, lookups, and measuring.

use std::cmp::Ordering;

/// An owned, possibly empty, subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single stored value. `T` is the balancing tag of the tree variant: `()` for the plain BST,
/// a height for AVL trees and a color for red-black trees.
#[derive(Clone, Debug)]
pub(crate) struct Node<T> {
    pub(crate) value: i32,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) tag: T,
}

/// The per-variant balancing information stored on each node.
pub(crate) trait Tag: Sized {
    /// The tag of a node that was just inserted.
    fn fresh() -> Self;

    /// Recomputes the tag of `node` from its children. Rotations call this on the node that moves
    /// down and then on the node that moves up.
    fn refresh(_node: &mut Node<Self>) {}
}

impl Tag for () {
    fn fresh() -> Self {}
}

impl<T: Tag> Node<T> {
    pub(crate) fn new_boxed(value: i32) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
            tag: T::fresh(),
        })
    }
}

/// Rotates `node` to the left. This moves the right child up vertically and `node` down
/// vertically. A node without a right child is returned untouched.
///
/// ```text
///   old_root                     new_root
///    /   \                        /    \
///   x   new_root   rotate ->  old_root  z
///         /  \                 /   \
///        y    z               x     y
/// ```
pub(crate) fn rotate_left<T: Tag>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = node.right.take() else {
        return node;
    };

    node.right = new_root.left.take();
    T::refresh(&mut node);

    new_root.left = Some(node);
    T::refresh(&mut new_root);
    new_root
}

/// Rotates `node` to the right. This moves the left child up vertically and `node` down
/// vertically. A node without a left child is returned untouched.
///
/// ```text
///      old_root               new_root
///       /   \                  /    \
///   new_root  z   rotate ->   x   old_root
///    /  \                          /   \
///   x    y                        y     z
/// ```
pub(crate) fn rotate_right<T: Tag>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let Some(mut new_root) = node.left.take() else {
        return node;
    };

    node.left = new_root.right.take();
    T::refresh(&mut node);

    new_root.right = Some(node);
    T::refresh(&mut new_root);
    new_root
}

/// In debug builds, asserts the BST ordering between `node` and its children.
pub(crate) fn debug_assert_ordered<T>(node: &Node<T>) {
    if cfg!(debug_assertions) {
        if let Some(left) = &node.left {
            assert!(node.value > left.value);
        }
        if let Some(right) = &node.right {
            assert!(node.value < right.value);
        }
    }
}

pub(crate) fn contains<T>(mut link: &Link<T>, value: i32) -> bool {
    while let Some(node) = link {
        link = match value.cmp(&node.value) {
            Ordering::Less => &node.left,
            Ordering::Equal => return true,
            Ordering::Greater => &node.right,
        };
    }
    false
}

/// The smallest value in the subtree rooted at `node`.
pub(crate) fn min_value<T>(mut node: &Node<T>) -> i32 {
    while let Some(left) = &node.left {
        node = left;
    }
    node.value
}

/// Length of the longest path from `link` down to a leaf. An empty subtree has height -1.
pub(crate) fn height<T>(link: &Link<T>) -> i32 {
    match link {
        None => -1,
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
    }
}

pub(crate) fn count<T>(link: &Link<T>) -> usize {
    match link {
        None => 0,
        Some(node) => 1 + count(&node.left) + count(&node.right),
    }
}

/// Releases every node of a subtree exactly once, children before their parent. This uses an
/// explicit stack so unbalanced trees can't overflow the call stack.
pub(crate) fn teardown<T>(link: Link<T>) {
    let mut stack: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = stack.pop() {
        match (node.left.take(), node.right.take()) {
            (None, None) => drop(node),
            (left, right) => {
                stack.push(node);
                stack.extend(left);
                stack.extend(right);
            }
        }
    }
}
