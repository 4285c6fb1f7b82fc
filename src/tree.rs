//! An owned, unbalanced BST holding a set of values. Every node owns its children outright so
//! the tree never shares nodes and never needs `unsafe`.
//!
//! # Examples
//!
//! ```
//! use ordered_tree::{OrderedTree, Order};
//!
//! let mut tree = OrderedTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Inserting the same value again is rejected.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting a value hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use crate::iter::{Iter, Nodes, Order};
use crate::snapshot::Snapshot;

/// A Binary Search Tree storing distinct values in their natural order. The tree does not
/// rebalance itself so inserting sorted input degenerates it into a list.
pub struct OrderedTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for OrderedTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for OrderedTree<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
            len: self.len,
        }
    }

    /// Makes `self` a deep copy of `source`. The copy is fully built before the nodes currently
    /// held by `self` are released.
    fn clone_from(&mut self, source: &Self) {
        let root = source.root.clone();
        self.root = root;
        self.len = source.len;
    }
}

impl<T> fmt::Debug for OrderedTree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter(Order::InOrder)).finish()
    }
}

/// Two trees are equal when they hold the same values in the same shape. A BST's pre-order
/// sequence pins down its shape so comparing those is enough.
impl<T> PartialEq for OrderedTree<T>
where
    T: Ord,
{
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter(Order::PreOrder).eq(other.iter(Order::PreOrder))
    }
}

impl<T> Eq for OrderedTree<T> where T: Ord {}

impl<T> OrderedTree<T> {
    /// Generates a new, empty `OrderedTree`.
    pub const fn new() -> Self {
        Self {
            root: Link(None),
            len: 0,
        }
    }

    /// The number of values stored in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no values at all.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Releases every node, leaving an empty tree.
    pub fn clear(&mut self) {
        self.root = Link(None);
        self.len = 0;
    }

    /// Inserts `value` into the tree. Returns `false`, leaving the tree untouched, if an equal
    /// value is already stored.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    ///
    /// assert!(tree.insert(5));
    /// assert!(tree.insert(3));
    /// assert!(!tree.insert(5));
    ///
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut link = &mut self.root.0;
        while let Some(node) = link {
            link = match value.cmp(&node.value) {
                Ordering::Less => &mut node.left.0,
                Ordering::Equal => return false,
                Ordering::Greater => &mut node.right.0,
            };
        }

        *link = Some(Node::new_boxed(value));
        self.len += 1;
        true
    }

    /// Removes the value equal to `value` from the tree and returns it. If the tree does not
    /// hold such a value, nothing happens and `None` is returned.
    ///
    /// A node with two children keeps its place in the tree and takes on the value of its
    /// in-order predecessor, whose own node is spliced out instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Order};
    ///
    /// let mut tree: OrderedTree<_> = vec![50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&50), Some(50));
    /// assert_eq!(tree.delete(&50), None);
    ///
    /// let pre_order: Vec<_> = tree.iter(Order::PreOrder).copied().collect();
    /// assert_eq!(pre_order, [40, 30, 20, 70, 60, 80]);
    /// ```
    pub fn delete(&mut self, value: &T) -> Option<T>
    where
        T: Ord,
    {
        let removed = self.root.find_slot(value)?.remove()?;
        self.len -= 1;
        Some(removed)
    }

    /// Whether the tree holds a value equal to `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::OrderedTree;
    ///
    /// let mut tree = OrderedTree::new();
    /// tree.insert(1);
    ///
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&42));
    /// ```
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.get(value).is_some()
    }

    /// Returns the stored value equal to `value`, if any.
    pub fn get(&self, value: &T) -> Option<&T>
    where
        T: Ord,
    {
        let mut link = &self.root;
        while let Some(node) = link.node() {
            link = match value.cmp(&node.value) {
                Ordering::Less => &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => &node.right,
            };
        }

        None
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(left) = node.left.node() {
            node = left;
        }
        Some(&node.value)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        let mut node = self.root.node()?;
        while let Some(right) = node.right.node() {
            node = right;
        }
        Some(&node.value)
    }

    /// How many levels are on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a lone root has a height of 1.
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack: Vec<_> = self.root.node().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = stack.pop() {
            height = height.max(depth);
            stack.extend(node.left.node().map(|left| (left, depth + 1)));
            stack.extend(node.right.node().map(|right| (right, depth + 1)));
        }

        height
    }

    /// Lazily walks the tree in the given order.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_tree::{OrderedTree, Order};
    ///
    /// let tree: OrderedTree<_> = vec![5, 3, 8, 1, 4].into_iter().collect();
    ///
    /// let post_order: Vec<_> = tree.iter(Order::PostOrder).copied().collect();
    /// assert_eq!(post_order, [1, 4, 3, 8, 5]);
    /// ```
    pub fn iter(&self, order: Order) -> Iter<'_, T> {
        Iter::new(&self.root, order, self.len)
    }

    /// Copies every value into a fresh [`Snapshot`] in the given order.
    pub fn snapshot(&self, order: Order) -> Snapshot<T>
    where
        T: Clone,
    {
        let mut snapshot = Snapshot::new();
        snapshot.reset(self, order);
        snapshot
    }

    /// The value at the root of the tree.
    #[cfg(test)]
    pub(crate) fn root_value(&self) -> Option<&T> {
        self.root.node().map(|root| &root.value)
    }
}

impl<'a, T> IntoIterator for &'a OrderedTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    /// Iterates in sorted order.
    fn into_iter(self) -> Self::IntoIter {
        self.iter(Order::InOrder)
    }
}

impl<T> Extend<T> for OrderedTree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T> FromIterator<T> for OrderedTree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// An owning slot for a subtree: either the tree's root or one of a node's children.
pub(crate) struct Link<T>(pub(crate) Option<Box<Node<T>>>);

/// Tears the subtree down children-first with an explicit stack so arbitrarily deep trees can't
/// overflow the call stack.
impl<T> Drop for Link<T> {
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node<T>>> = self.0.take().into_iter().collect();
        while let Some(mut node) = stack.pop() {
            match (node.left.0.take(), node.right.0.take()) {
                (None, None) => drop(node),
                (left, right) => {
                    // Come back to this node once both subtrees are gone.
                    stack.push(node);
                    stack.extend(right);
                    stack.extend(left);
                }
            }
        }
    }
}

/// Deep copy. Nodes are rebuilt bottom up from a post-order walk, which leaves each node's
/// right and then left subtree copies on top of `built` by the time the node itself is reached.
impl<T> Clone for Link<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        let mut built: Vec<Box<Node<T>>> = Vec::new();
        for node in Nodes::new(self, Order::PostOrder) {
            let right = node.right.0.as_ref().and_then(|_| built.pop());
            let left = node.left.0.as_ref().and_then(|_| built.pop());
            built.push(Box::new(Node {
                value: node.value.clone(),
                left: Link(left),
                right: Link(right),
            }));
        }

        debug_assert!(built.len() <= 1);
        Link(built.pop())
    }
}

impl<T> Link<T> {
    pub(crate) fn node(&self) -> Option<&Node<T>> {
        self.0.as_deref()
    }

    /// Finds the link owning the node that holds `value`.
    fn find_slot(&mut self, value: &T) -> Option<&mut Self>
    where
        T: Ord,
    {
        let mut link = self;
        loop {
            let ordering = value.cmp(&link.node()?.value);
            link = match ordering {
                Ordering::Less => &mut link.0.as_mut()?.left,
                Ordering::Equal => return Some(link),
                Ordering::Greater => &mut link.0.as_mut()?.right,
            };
        }
    }

    /// Finds the link owning the largest node in this subtree by following right children.
    fn largest_slot(&mut self) -> Option<&mut Self> {
        let mut link = self;
        while link.node()?.right.0.is_some() {
            link = &mut link.0.as_mut()?.right;
        }
        Some(link)
    }

    /// Removes the node owned by this link and returns its value.
    fn remove(&mut self) -> Option<T>
    where
        T: Ord,
    {
        let node = self.0.as_mut()?;
        if node.left.0.is_some() && node.right.0.is_some() {
            // The predecessor is the rightmost node of the left subtree so it has no right
            // child and can be spliced out directly.
            let predecessor = node.left.largest_slot()?.splice()?;
            let removed = mem::replace(&mut node.value, predecessor);

            if cfg!(debug_assertions) {
                if let Some(left) = node.left.node() {
                    assert!(left.value < node.value);
                }
                if let Some(right) = node.right.node() {
                    assert!(node.value < right.value);
                }
            }
            Some(removed)
        } else {
            self.splice()
        }
    }

    /// Replaces the node owned by this link with its child, if it has one, and returns the
    /// node's value. The node must not have two children.
    fn splice(&mut self) -> Option<T> {
        let mut node = self.0.take()?;
        debug_assert!(node.left.0.is_none() || node.right.0.is_none());

        self.0 = node.left.0.take().or_else(|| node.right.0.take());
        let Node { value, .. } = *node;
        Some(value)
    }
}

/// A single value with exclusive ownership of its (possibly empty) left and right subtrees.
pub(crate) struct Node<T> {
    pub(crate) value: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Node {
            value,
            left: Link(None),
            right: Link(None),
        })
    }
}
