//! Traversals over an [`OrderedTree`][crate::tree::OrderedTree].
//!
//! Walks use an explicit stack instead of recursion so a tree that has degenerated into a long
//! list can still be traversed.

use std::iter::FusedIterator;

use crate::tree::{Link, Node};

/// The order in which a traversal visits each node relative to its subtrees.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Order {
    /// The node, then its left subtree, then its right subtree.
    PreOrder,
    /// The left subtree, then the node, then the right subtree. This yields sorted values.
    InOrder,
    /// The left subtree, then the right subtree, then the node.
    PostOrder,
}

enum Visit<'a, T> {
    /// Push this node's subtrees and the node itself according to the traversal order.
    Expand(&'a Node<T>),
    /// Hand this node out.
    Yield(&'a Node<T>),
}

/// Walks the nodes of a subtree in some [`Order`].
pub(crate) struct Nodes<'a, T> {
    order: Order,
    stack: Vec<Visit<'a, T>>,
}

impl<'a, T> Nodes<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, order: Order) -> Self {
        Self {
            order,
            stack: root.node().map(Visit::Expand).into_iter().collect(),
        }
    }

    fn expand(&mut self, node: &'a Node<T>) {
        let left = node.left.node().map(Visit::Expand);
        let right = node.right.node().map(Visit::Expand);

        // The stack pops in reverse so everything goes on back to front.
        match self.order {
            Order::PreOrder => {
                self.stack.extend(right);
                self.stack.extend(left);
                self.stack.push(Visit::Yield(node));
            }
            Order::InOrder => {
                self.stack.extend(right);
                self.stack.push(Visit::Yield(node));
                self.stack.extend(left);
            }
            Order::PostOrder => {
                self.stack.push(Visit::Yield(node));
                self.stack.extend(right);
                self.stack.extend(left);
            }
        }
    }
}

impl<'a, T> Iterator for Nodes<'a, T> {
    type Item = &'a Node<T>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.stack.pop()? {
                Visit::Expand(node) => self.expand(node),
                Visit::Yield(node) => return Some(node),
            }
        }
    }
}

impl<'a, T> FusedIterator for Nodes<'a, T> {}

/// A lazy traversal over the values of a tree, created by
/// [`OrderedTree::iter`][crate::tree::OrderedTree::iter].
///
/// # Examples
///
/// ```
/// use ordered_tree::{OrderedTree, Order};
///
/// let tree: OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
///
/// let mut iter = tree.iter(Order::PreOrder);
/// assert_eq!(iter.len(), 5);
/// assert_eq!(iter.next(), Some(&5));
/// assert_eq!(iter.next(), Some(&3));
/// assert_eq!(iter.len(), 3);
/// ```
pub struct Iter<'a, T> {
    nodes: Nodes<'a, T>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: &'a Link<T>, order: Order, len: usize) -> Self {
        Self {
            nodes: Nodes::new(root, order),
            remaining: len,
        }
    }

    /// The order this traversal visits values in.
    pub fn order(&self) -> Order {
        self.nodes.order
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.nodes.next()?;
        self.remaining -= 1;
        Some(&node.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}
