//! A binary max-heap stored in a flat, fixed-capacity array. The tree is implicit: the parent of
//! slot `i` is slot `(i - 1) / 2` and its children are slots `2i + 1` and `2i + 2`. Every slot
//! holds a value at least as large as its children's so the maximum is always in slot 0.
//!
//! # Examples
//!
//! ```
//! use bstkit::heap::Heap;
//!
//! let mut heap = Heap::new();
//! for value in [4, 5, 6, 6, 7] {
//!     heap.add(value)?;
//! }
//!
//! assert_eq!(heap.peek()?, 7);
//! assert_eq!(heap.remove()?, 7);
//! assert_eq!(heap.peek()?, 6);
//! # Ok::<(), bstkit::Error>(())
//! ```

use crate::error::{Error, Result};

/// How many values [`Heap::new`] can hold.
pub const DEFAULT_CAPACITY: usize = 1000;

/// A max-heap of `i32`s that holds at most a fixed number of values. Equal values are all kept.
#[derive(Clone, Debug)]
pub struct Heap {
    slots: Vec<i32>,
    capacity: usize,
}

impl Default for Heap {
    fn default() -> Self {
        Self::new()
    }
}

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

impl Heap {
    /// Generates a new, empty `Heap` holding up to [`DEFAULT_CAPACITY`] values.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Generates a new, empty `Heap` holding up to `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Adds `value` to the heap, or returns [`Error::Full`] if it is at capacity.
    pub fn add(&mut self, value: i32) -> Result<()> {
        if self.slots.len() == self.capacity {
            return Err(Error::Full {
                capacity: self.capacity,
            });
        }

        self.slots.push(value);
        self.sift_up(self.slots.len() - 1);
        Ok(())
    }

    /// The largest value, or [`Error::Empty`] if there are none.
    pub fn peek(&self) -> Result<i32> {
        self.slots.first().copied().ok_or(Error::Empty)
    }

    /// Removes and returns the largest value, or [`Error::Empty`] if there are none.
    pub fn remove(&mut self) -> Result<i32> {
        if self.slots.is_empty() {
            return Err(Error::Empty);
        }

        // The last slot's value moves into the root and sinks back down.
        let max = self.slots.swap_remove(0);
        self.sift_down(0);
        Ok(max)
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the heap stores no values.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The most values this heap can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The stored values in slot order, i.e. breadth first through the implicit tree.
    pub fn as_slice(&self) -> &[i32] {
        &self.slots
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 && self.slots[i] > self.slots[parent(i)] {
            self.slots.swap(i, parent(i));
            i = parent(i);
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let len = self.slots.len();
        loop {
            let mut largest = i;
            for child in [2 * i + 1, 2 * i + 2] {
                if child < len && self.slots[child] > self.slots[largest] {
                    largest = child;
                }
            }
            if largest == i {
                break;
            }
            self.slots.swap(i, largest);
            i = largest;
        }
    }
}

/// Sorts `values` in ascending order by pushing them all through a [`Heap`] and taking the
/// maximum back out into the last unfilled slot.
///
/// # Examples
///
/// ```
/// let mut values = [3, -1, 4, 1, 5, 9, 2, 6];
/// bstkit::heap::sort(&mut values);
/// assert_eq!(values, [-1, 1, 2, 3, 4, 5, 6, 9]);
/// ```
pub fn sort(values: &mut [i32]) {
    let mut heap = Heap::with_capacity(values.len());
    for &value in values.iter() {
        heap.slots.push(value);
        heap.sift_up(heap.slots.len() - 1);
    }

    for slot in values.iter_mut().rev() {
        match heap.remove() {
            Ok(max) => *slot = max,
            Err(_) => unreachable!("The heap holds exactly as many values as the slice."),
        }
    }
}
