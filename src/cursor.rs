//! The `has_next`/`next` iteration contract shared by every iterator in this crate.
//!
//! A [`Cursor`] expects its caller to check [`Cursor::has_next`] before asking for the next
//! item. Asking anyway is a bug in the caller, so [`Cursor::next_item`] panics instead of
//! handing back a placeholder. Every cursor here also implements [`Iterator`], whose `next`
//! returns `None` once the cursor is exhausted, for use with `for` loops and adapters.
//!
//! # Examples
//!
//! ```
//! use heaps::cursor::Cursor;
//! use heaps::heap::{BinaryHeap, Heap};
//!
//! let mut heap = BinaryHeap::min();
//! heap.push(2);
//! heap.push(1);
//!
//! let mut sorted = heap.sorted_iter();
//! while sorted.has_next() {
//!     println!("{}", sorted.next_item());
//! }
//! ```

/// Message every cursor panics with when [`Cursor::next_item`] is called after exhaustion.
pub(crate) const EXHAUSTED: &str = "iterator: cannot call next after iteration finished";

/// A single-pass, non-restartable sequence of items.
pub trait Cursor {
    /// The type of the items this cursor yields.
    type Item;

    /// Returns `true` if [`next_item`][Cursor::next_item] would yield another item.
    fn has_next(&self) -> bool;

    /// Yields the next item.
    ///
    /// ## Panics
    ///
    /// When called after [`has_next`][Cursor::has_next] has returned `false`.
    fn next_item(&mut self) -> Self::Item;
}
