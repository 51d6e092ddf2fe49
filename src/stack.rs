//! A LIFO stack. [`ListStack`] keeps its elements in a doubly linked list and pushes and pops at
//! the back of it.
//!
//! # Examples
//!
//! ```
//! use heaps::stack::{ListStack, Stack};
//!
//! let mut stack = ListStack::new();
//! stack.push(1);
//! stack.push(2);
//!
//! assert_eq!(stack.peek(), Some(&2));
//! assert_eq!(stack.pop(), Some(2));
//! assert_eq!(stack.pop(), Some(1));
//! assert_eq!(stack.pop(), None);
//! ```

use std::collections::LinkedList;

/// The operations of a last-in, first-out stack.
pub trait Stack<T> {
    /// Puts `value` on top of the stack.
    fn push(&mut self, value: T);

    /// Removes and returns the top of the stack, or `None` if it is empty.
    fn pop(&mut self) -> Option<T>;

    /// Returns the top of the stack without removing it.
    fn peek(&self) -> Option<&T>;

    /// The number of elements on the stack.
    fn len(&self) -> usize;

    /// Whether the stack has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A [`Stack`] backed by a [`LinkedList`].
#[derive(Clone, Debug)]
pub struct ListStack<T> {
    list: LinkedList<T>,
}

impl<T> Default for ListStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ListStack<T> {
    /// Generates a new, empty `ListStack`.
    pub fn new() -> Self {
        Self {
            list: LinkedList::new(),
        }
    }
}

impl<T> Stack<T> for ListStack<T> {
    fn push(&mut self, value: T) {
        self.list.push_back(value);
    }

    fn pop(&mut self) -> Option<T> {
        self.list.pop_back()
    }

    fn peek(&self) -> Option<&T> {
        self.list.back()
    }

    fn len(&self) -> usize {
        self.list.len()
    }
}
