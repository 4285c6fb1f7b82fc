//! An eagerly filled FIFO buffer of a tree's values.
//!
//! A [`Snapshot`] copies every value out of the tree when it is reset so it holds no borrow of
//! the tree afterwards; the tree can be changed while the snapshot is drained.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{EmptyIteratorError, OrderedTree, Order, Snapshot};
//!
//! let mut tree: OrderedTree<_> = vec![5, 3, 8].into_iter().collect();
//!
//! let mut snapshot = Snapshot::new();
//! assert_eq!(snapshot.next_item(), Err(EmptyIteratorError));
//!
//! snapshot.reset(&tree, Order::InOrder);
//! tree.delete(&3);
//!
//! assert_eq!(snapshot.next_item(), Ok(3));
//! assert_eq!(snapshot.next_item(), Ok(5));
//! assert_eq!(snapshot.next_item(), Ok(8));
//! assert_eq!(snapshot.next_item(), Err(EmptyIteratorError));
//! ```

use std::collections::VecDeque;
use std::iter::FusedIterator;

use crate::error::EmptyIteratorError;
use crate::iter::Order;
use crate::tree::OrderedTree;

/// Copies of a tree's values queued up in traversal order.
#[derive(Clone, Debug)]
pub struct Snapshot<T> {
    items: VecDeque<T>,
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Snapshot<T> {
    /// Creates an empty snapshot. Taking an item from it fails until it is reset.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Drops anything still queued and refills the queue with every value in `tree`, visited in
    /// `order`.
    pub fn reset(&mut self, tree: &OrderedTree<T>, order: Order)
    where
        T: Clone,
    {
        self.items.clear();
        self.items.extend(tree.iter(order).cloned());
    }

    /// Takes the next value off the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyIteratorError`] if the snapshot was never reset or every value has already
    /// been taken.
    pub fn next_item(&mut self) -> Result<T, EmptyIteratorError> {
        self.items.pop_front().ok_or(EmptyIteratorError)
    }

    /// How many values are still queued.
    pub fn remaining(&self) -> usize {
        self.items.len()
    }

    /// Whether every queued value has been taken.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Iterator for Snapshot<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.items.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.items.len(), Some(self.items.len()))
    }
}

impl<T> ExactSizeIterator for Snapshot<T> {}

impl<T> FusedIterator for Snapshot<T> {}
