//! This crate exposes an ordered collection backed by an unbalanced Binary Search Tree (BST).
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
//! Searching for values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). [`OrderedTree`] makes no attempt to keep its
//! height down, so inserting already sorted values gives a tree as tall as it is long.
//!
//! ## Traversals
//!
//! Values can be visited in three orders (see [`Order`]):
//!
//! - pre-order visits a `Node` before either of its subtrees,
//! - in-order visits the left subtree, then the `Node`, then the right subtree, which yields the
//!   values sorted,
//! - post-order visits both subtrees before the `Node`.
//!
//! [`OrderedTree::iter`] walks the tree lazily while [`Snapshot`] copies every value up front
//! so it can be drained after the tree has changed.
//!
//! ```
//! use ordered_tree::{OrderedTree, Order};
//!
//! let tree: OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
//!
//! let mut snapshot = tree.snapshot(Order::PreOrder);
//! assert_eq!(snapshot.next_item(), Ok(5));
//! assert_eq!(snapshot.next_item(), Ok(3));
//!
//! let sorted: Vec<_> = tree.iter(Order::InOrder).copied().collect();
//! assert_eq!(sorted, [1, 3, 4, 5, 8]);
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
pub mod iter;
pub mod snapshot;
pub mod tree;

pub use error::EmptyIteratorError;
pub use iter::{Iter, Order};
pub use snapshot::Snapshot;
pub use tree::OrderedTree;
