//! An unbalanced Binary Search Tree storing each value at most once.
//!
//! Nodes own their children through `Box`es, so there are no parent pointers. Operations walk
//! down from the root by holding a mutable reference to the link they are about to follow.
//!
//! # Examples
//!
//! ```
//! use heaps::tree::{BinaryTree, Tree};
//!
//! let mut tree = BinaryTree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search(&1), None);
//!
//! assert!(tree.add(2));
//! assert!(tree.add(1));
//! assert!(tree.add(3));
//!
//! // Adding a value that's already there does nothing.
//! assert!(!tree.add(3));
//! assert_eq!(tree.len(), 3);
//!
//! // Iteration is in ascending order.
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! // Removing a value returns it.
//! assert_eq!(tree.remove(&2), Some(2));
//! assert_eq!(tree.search(&2), None);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;
use std::mem;

use log::debug;

use crate::cursor::{Cursor, EXHAUSTED};
use crate::stack::{ListStack, Stack};

/// The operations of a binary search tree.
pub trait Tree<T> {
    /// Returns the value at the root, or `None` if the tree is empty.
    fn root(&self) -> Option<&T>;

    /// Adds `value` to the tree. Returns `false`, leaving the tree unchanged, if an equal value
    /// is already present.
    fn add(&mut self, value: T) -> bool;

    /// Finds the stored value equal to `value`.
    fn search(&self, value: &T) -> Option<&T>;

    /// Removes the value equal to `value` and returns it, or `None` if there is no such value.
    fn remove(&mut self, value: &T) -> Option<T>;

    /// Removes every value.
    fn clear(&mut self);

    /// The number of values in the tree.
    fn len(&self) -> usize;

    /// Whether the tree has no values.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

type Link<T> = Option<Box<Node<T>>>;

struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }
}

/// A Binary Search Tree. Smaller values go left and larger values go right. There is no
/// rebalancing so inserting sorted values produces a tree as tall as it is large.
pub struct BinaryTree<T> {
    root: Link<T>,
    size: usize,
}

impl<T> Default for BinaryTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for BinaryTree<T> {
    fn drop(&mut self) {
        free(self.root.take());
    }
}

impl<T> BinaryTree<T> {
    /// Generates a new, empty `BinaryTree`.
    pub fn new() -> Self {
        Self {
            root: None,
            size: 0,
        }
    }

    /// Iterates over the values in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaps::cursor::Cursor;
    /// use heaps::tree::BinaryTree;
    ///
    /// let tree: BinaryTree<_> = vec![50, 30, 70, 20, 40].into_iter().collect();
    ///
    /// let mut iter = tree.iter();
    /// assert_eq!(iter.next_item(), &20);
    /// assert_eq!(iter.next_item(), &30);
    /// assert!(iter.has_next());
    /// ```
    pub fn iter(&self) -> InOrder<'_, T> {
        InOrder::new(self.root.as_deref())
    }
}

impl<T: Ord> Tree<T> for BinaryTree<T> {
    fn root(&self) -> Option<&T> {
        self.root.as_ref().map(|node| &node.value)
    }

    fn add(&mut self, value: T) -> bool {
        let mut link = &mut self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &mut node.left,
                Ordering::Equal => return false,
                Ordering::Greater => link = &mut node.right,
            }
        }

        *link = Some(Node::new_boxed(value));
        self.size += 1;
        true
    }

    fn search(&self, value: &T) -> Option<&T> {
        let mut link = &self.root;
        while let Some(node) = link {
            match value.cmp(&node.value) {
                Ordering::Less => link = &node.left,
                Ordering::Equal => return Some(&node.value),
                Ordering::Greater => link = &node.right,
            }
        }

        None
    }

    fn remove(&mut self, value: &T) -> Option<T> {
        let mut link = &mut self.root;
        loop {
            let ordering = match link.as_deref() {
                Some(node) => value.cmp(&node.value),
                None => return None,
            };
            match ordering {
                Ordering::Less => link = &mut link.as_mut()?.left,
                Ordering::Equal => break,
                Ordering::Greater => link = &mut link.as_mut()?.right,
            }
        }

        let node = link.as_mut()?;
        let removed = if node.left.is_some() && node.right.is_some() {
            // Two children: the in-order successor takes this node's place by value and its own
            // node is unlinked instead.
            debug!("removing a node with two children");
            let successor = detach_min(&mut node.right)?;
            mem::replace(&mut node.value, successor)
        } else {
            let Node {
                value: removed,
                left,
                right,
            } = *link.take()?;
            *link = left.or(right);
            removed
        };

        self.size -= 1;
        Some(removed)
    }

    fn clear(&mut self) {
        free(self.root.take());
        self.size = 0;
    }

    fn len(&self) -> usize {
        self.size
    }
}

impl<T: Ord> Extend<T> for BinaryTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinaryTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: fmt::Debug> fmt::Debug for BinaryTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a BinaryTree<T> {
    type Item = &'a T;
    type IntoIter = InOrder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Unlinks the smallest node of the non-empty subtree behind `link`, putting that node's right
/// child in its place, and returns its value.
fn detach_min<T>(mut link: &mut Link<T>) -> Option<T> {
    while link.as_ref()?.left.is_some() {
        link = &mut link.as_mut()?.left;
    }

    let Node { value, right, .. } = *link.take()?;
    *link = right;
    Some(value)
}

/// Drops a subtree one node at a time so tall trees can't overflow the call stack.
fn free<T>(root: Link<T>) {
    let mut pending = ListStack::new();
    if let Some(root) = root {
        pending.push(root);
    }

    while let Some(mut node) = pending.pop() {
        if let Some(left) = node.left.take() {
            pending.push(left);
        }
        if let Some(right) = node.right.take() {
            pending.push(right);
        }
    }
}

/// In-order iterator over a [`BinaryTree`]. Created by [`BinaryTree::iter`].
///
/// The stack holds the nodes whose left subtrees are being visited. The top of the stack is
/// always the smallest value not yet yielded.
pub struct InOrder<'a, T> {
    stack: ListStack<&'a Node<T>>,
}

impl<'a, T> InOrder<'a, T> {
    fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self {
            stack: ListStack::new(),
        };
        iter.push_left_spine(root);
        iter
    }

    /// Pushes `node` and all of its left descendants.
    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, T> Cursor for InOrder<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        !self.stack.is_empty()
    }

    fn next_item(&mut self) -> Self::Item {
        self.next().expect(EXHAUSTED)
    }
}

impl<'a, T> Iterator for InOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.value)
    }
}
