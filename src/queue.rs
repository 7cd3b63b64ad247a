//! A min-priority queue stored in a plain [`simple::Tree`]: the front of the queue is the smallest
//! value in the tree. Like the tree, the queue holds each value at most once.
//!
//! # Examples
//!
//! ```
//! use bstkit::queue::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new();
//! queue.enqueue(5);
//! queue.enqueue(4);
//!
//! assert_eq!(queue.peek()?, 4);
//! assert_eq!(queue.dequeue()?, 4);
//! assert_eq!(queue.peek()?, 5);
//! # Ok::<(), bstkit::Error>(())
//! ```

use crate::error::Result;
use crate::iter::Dump;
use crate::simple;

/// A queue that always yields its smallest value first.
#[derive(Clone, Debug, Default)]
pub struct PriorityQueue {
    tree: simple::Tree,
}

impl PriorityQueue {
    /// Generates a new, empty `PriorityQueue`.
    pub fn new() -> Self {
        Self {
            tree: simple::Tree::new(),
        }
    }

    /// Adds `value` to the queue. Enqueuing a value that is already queued does nothing.
    pub fn enqueue(&mut self, value: i32) {
        self.tree = std::mem::take(&mut self.tree).insert(value);
    }

    /// The smallest queued value, or [`Error::Empty`][crate::Error::Empty] if there are none.
    pub fn peek(&self) -> Result<i32> {
        self.tree.min_value()
    }

    /// Removes and returns the smallest queued value, or
    /// [`Error::Empty`][crate::Error::Empty] if there are none.
    pub fn dequeue(&mut self) -> Result<i32> {
        let front = self.peek()?;
        self.tree = std::mem::take(&mut self.tree).delete(front);
        Ok(front)
    }

    /// How many values are queued.
    pub fn len(&self) -> usize {
        self.tree.node_count()
    }

    /// Whether nothing is queued.
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Iterates over the queued values from front to back.
    pub fn iter(&self) -> Dump<'_, ()> {
        self.tree.iter()
    }
}
