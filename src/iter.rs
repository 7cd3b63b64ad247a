//! Lazy, ordered traversal over the values of a tree.

use std::iter::FusedIterator;

use crate::node::Node;

/// Which order [`Dump`] yields values in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Smallest value first (in-order).
    Ascending,
    /// Largest value first (reverse in-order).
    Descending,
}

/// An iterator over the values of a tree in [`Direction`] order. Values are produced lazily by
/// walking the tree with an explicit stack holding at most `height + 1` nodes.
///
/// A `Dump` can be cloned to restart the traversal from wherever the clone was taken.
pub struct Dump<'a, T> {
    stack: Vec<&'a Node<T>>,
    direction: Direction,
}

/// Manual implementation of `Clone` so we don't require the tag to be `Clone`.
impl<'a, T> Clone for Dump<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
            direction: self.direction,
        }
    }
}

impl<'a, T> Dump<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>, direction: Direction) -> Self {
        let mut dump = Self {
            stack: Vec::new(),
            direction,
        };
        dump.descend(root);
        dump
    }

    /// Pushes `node` and its chain of children on the side we yield first.
    fn descend(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = match self.direction {
                Direction::Ascending => n.left.as_deref(),
                Direction::Descending => n.right.as_deref(),
            };
        }
    }
}

impl<'a, T> Iterator for Dump<'a, T> {
    type Item = i32;

    fn next(&mut self) -> Option<i32> {
        let node = self.stack.pop()?;
        let after = match self.direction {
            Direction::Ascending => node.right.as_deref(),
            Direction::Descending => node.left.as_deref(),
        };
        self.descend(after);
        Some(node.value)
    }
}

impl<'a, T> FusedIterator for Dump<'a, T> {}
