//! An array-backed binary heap. The heap stores an implicit complete binary tree in a `Vec`:
//! the children of the element at index `i` live at `2i + 1` and `2i + 2`. Priority is decided
//! by a user supplied comparator together with a [`Mode`] that says whether smaller
//! ([`Mode::Min`]) or larger ([`Mode::Max`]) elements come out first.
//!
//! # Examples
//!
//! ```
//! use heaps::heap::{BinaryHeap, Heap};
//!
//! let mut heap = BinaryHeap::min();
//!
//! // Nothing in here yet.
//! assert_eq!(heap.peek(), None);
//!
//! heap.push(3);
//! heap.push(1);
//! heap.push(2);
//! assert_eq!(heap.peek(), Some(&1));
//!
//! // Sorted iteration works on a copy so the heap is left alone.
//! assert_eq!(heap.sorted_iter().collect::<Vec<_>>(), vec![1, 2, 3]);
//! assert_eq!(heap.len(), 3);
//!
//! // Popping drains it in priority order.
//! assert_eq!(heap.pop(), Some(1));
//! assert_eq!(heap.pop(), Some(2));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```
//!
//! None of the types here are synchronized. Sharing a heap between threads requires the caller
//! to wrap it in a lock.

use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::cursor::{Cursor, EXHAUSTED};
use crate::util::{left_child, parent, right_child};

/// Which end of the comparator's order has the highest priority.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    /// The element the comparator orders first (`Ordering::Less`) is popped first.
    Min,
    /// The element the comparator orders last (`Ordering::Greater`) is popped first.
    Max,
}

impl Default for Mode {
    fn default() -> Self {
        Self::Min
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Min => f.write_str("min"),
            Self::Max => f.write_str("max"),
        }
    }
}

impl Mode {
    /// Whether `a` outranks `b` given `ordering == compare(a, b)`. Equal elements never outrank
    /// each other.
    fn prefers(self, ordering: Ordering) -> bool {
        match self {
            Self::Min => ordering == Ordering::Less,
            Self::Max => ordering == Ordering::Greater,
        }
    }
}

/// The operations of a priority queue.
pub trait Heap<T> {
    /// Returns the highest priority element without removing it, or `None` if the heap is empty.
    fn peek(&self) -> Option<&T>;

    /// Adds `value` to the heap. `O(log n)`.
    fn push(&mut self, value: T);

    /// Removes and returns the highest priority element, or `None` if the heap is empty.
    /// `O(log n)`.
    fn pop(&mut self) -> Option<T>;

    /// The number of elements in the heap.
    fn len(&self) -> usize;

    /// Whether the heap has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Replaces the contents of the heap with `elements` and restores heap order in `O(n)`,
    /// which is cheaper than pushing the elements one at a time.
    fn heapify(&mut self, elements: Vec<T>);

    /// The elements in storage (level) order. This is *not* sorted; only the first element is
    /// guaranteed to be the highest priority one.
    fn as_slice(&self) -> &[T];
}

/// A binary heap ordered by the comparator `C`.
///
/// The comparator and [`Mode`] are fixed when the heap is built.
#[derive(Clone)]
pub struct BinaryHeap<T, C = fn(&T, &T) -> Ordering> {
    data: Vec<T>,
    mode: Mode,
    comparator: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Builds an empty heap that pops the smallest element first, using `T`'s own ordering.
    pub fn min() -> Self {
        Self::new(Mode::Min, T::cmp)
    }

    /// Builds an empty heap that pops the largest element first, using `T`'s own ordering.
    pub fn max() -> Self {
        Self::new(Mode::Max, T::cmp)
    }
}

impl<T: Ord> Default for BinaryHeap<T> {
    fn default() -> Self {
        Self::min()
    }
}

impl<T, C> BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    /// Builds an empty heap ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaps::heap::{BinaryHeap, Heap, Mode};
    ///
    /// // Longest string first.
    /// let mut heap = BinaryHeap::new(Mode::Max, |a: &&str, b: &&str| a.len().cmp(&b.len()));
    /// heap.push("ab");
    /// heap.push("abcd");
    /// heap.push("a");
    ///
    /// assert_eq!(heap.pop(), Some("abcd"));
    /// ```
    pub fn new(mode: Mode, comparator: C) -> Self {
        Self {
            data: Vec::new(),
            mode,
            comparator,
        }
    }

    /// Builds an empty heap that pops the element `comparator` orders first.
    pub fn min_by(comparator: C) -> Self {
        Self::new(Mode::Min, comparator)
    }

    /// Builds an empty heap that pops the element `comparator` orders last.
    pub fn max_by(comparator: C) -> Self {
        Self::new(Mode::Max, comparator)
    }

    /// Builds a heap holding `data` using [`Heap::heapify`].
    ///
    /// # Examples
    ///
    /// ```
    /// use heaps::heap::{BinaryHeap, Heap, Mode};
    ///
    /// let heap = BinaryHeap::from_vec(Mode::Max, i32::cmp, vec![4, 9, 1]);
    /// assert_eq!(heap.peek(), Some(&9));
    /// ```
    pub fn from_vec(mode: Mode, comparator: C, data: Vec<T>) -> Self {
        let mut heap = Self::new(mode, comparator);
        heap.heapify(data);
        heap
    }

    /// Whether this heap pops its minimum or maximum first.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns a copy of the elements in storage (level) order.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Iterates over the elements in storage (level) order, not priority order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            data: &self.data,
            index: 0,
        }
    }

    /// Iterates over the elements in priority order without modifying this heap. The iterator
    /// drains a copy taken now, so pushes and pops made afterwards aren't seen by it.
    ///
    /// Creating the iterator is `O(n)` and draining it is `O(n log n)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use heaps::heap::{BinaryHeap, Heap};
    ///
    /// let mut heap = BinaryHeap::max();
    /// heap.heapify(vec![2, 7, 2, 5]);
    ///
    /// let sorted: Vec<_> = heap.sorted_iter().collect();
    /// assert_eq!(sorted, vec![7, 5, 2, 2]);
    /// assert_eq!(heap.len(), 4);
    /// ```
    pub fn sorted_iter(&self) -> SortedIter<T, C>
    where
        T: Clone,
        C: Clone,
    {
        self.clone().into_sorted_iter()
    }

    /// Like [`sorted_iter`][BinaryHeap::sorted_iter] but consumes the heap instead of copying it.
    pub fn into_sorted_iter(self) -> SortedIter<T, C> {
        SortedIter { heap: self }
    }

    /// Whether the element at `i` strictly outranks the element at `j`.
    fn is_higher_priority(&self, i: usize, j: usize) -> bool {
        self.mode
            .prefers((self.comparator)(&self.data[i], &self.data[j]))
    }

    /// Moves the element at `index` towards the root until its parent outranks or ties it.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = parent(index);
            if !self.is_higher_priority(index, parent) {
                return;
            }
            self.data.swap(index, parent);
            index = parent;
        }
    }

    /// Moves the element at `index` towards the leaves until it outranks or ties both of its
    /// children.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let mut highest = index;
            let left = left_child(index);
            let right = right_child(index);
            if left < len && self.is_higher_priority(left, highest) {
                highest = left;
            }
            if right < len && self.is_higher_priority(right, highest) {
                highest = right;
            }
            if highest == index {
                return;
            }
            self.data.swap(index, highest);
            index = highest;
        }
    }
}

impl<T, C> Heap<T> for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    fn push(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    fn pop(&mut self) -> Option<T> {
        if self.data.is_empty() {
            return None;
        }

        // `swap_remove` moves the last element into the root's slot.
        let top = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }
        Some(top)
    }

    fn len(&self) -> usize {
        self.data.len()
    }

    fn clear(&mut self) {
        trace!("clearing {} heap of {} elements", self.mode, self.data.len());
        self.data.clear();
    }

    fn heapify(&mut self, elements: Vec<T>) {
        self.data = elements;
        // Leaves are already heaps so start from the last node with a child.
        for index in (0..self.data.len() / 2).rev() {
            self.sift_down(index);
        }
        trace!("heapified {} heap of {} elements", self.mode, self.data.len());
    }

    fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl<T, C> Extend<T> for BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push(value);
        }
    }
}

impl<T, C> fmt::Debug for BinaryHeap<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("mode", &self.mode)
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<'a, T, C> IntoIterator for &'a BinaryHeap<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over a heap's elements in storage order. Created by [`BinaryHeap::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    data: &'a [T],
    index: usize,
}

impl<'a, T> Cursor for Iter<'a, T> {
    type Item = &'a T;

    fn has_next(&self) -> bool {
        self.index < self.data.len()
    }

    fn next_item(&mut self) -> Self::Item {
        self.next().expect(EXHAUSTED)
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.data.get(self.index)?;
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.data.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

/// Iterator yielding a heap's elements in priority order by popping from a heap it owns.
/// Created by [`BinaryHeap::sorted_iter`] and [`BinaryHeap::into_sorted_iter`].
#[derive(Clone)]
pub struct SortedIter<T, C = fn(&T, &T) -> Ordering> {
    heap: BinaryHeap<T, C>,
}

impl<T, C> fmt::Debug for SortedIter<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedIter").field("heap", &self.heap).finish()
    }
}

impl<T, C> Cursor for SortedIter<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn has_next(&self) -> bool {
        !self.heap.is_empty()
    }

    fn next_item(&mut self) -> Self::Item {
        self.heap.pop().expect(EXHAUSTED)
    }
}

impl<T, C> Iterator for SortedIter<T, C>
where
    C: Fn(&T, &T) -> Ordering,
{
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T, C> ExactSizeIterator for SortedIter<T, C> where C: Fn(&T, &T) -> Ordering {}
