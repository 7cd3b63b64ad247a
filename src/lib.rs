//! This crate exposes a family of ordered containers of `i32`s, mostly for educational purposes:
//! an unbalanced BST, two self-balancing BSTs (AVL and red-black), a binary max-heap, and a
//! priority queue built on the unbalanced BST.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). With clever construction the
//! height of a BST can be limited to `O(lg N)` where `N` is the number of nodes
//! in the tree. BSTs also naturally support sorted iteration by visiting the
//! left subtree, then the subtree root, then the right subtree.
//!
//! ## Handles
//!
//! Every tree's `insert` and `delete` take the tree by value and return the updated tree. The
//! root may have changed so the old tree can't be used anymore, which the compiler enforces:
//!
//! ```
//! use bstkit::avl::Tree;
//!
//! let tree = Tree::new();
//! let tree = tree.insert(10).insert(20).insert(30);
//! let tree = tree.delete(10);
//!
//! assert_eq!(tree.iter().collect::<Vec<_>>(), [20, 30]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod error;
pub mod heap;
pub mod iter;
mod node;
pub mod queue;
pub mod redblack;
pub mod simple;


pub use error::{Error, Result};
pub use iter::{Direction, Dump};
