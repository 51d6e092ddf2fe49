//! This crate exposes a handful of classic data structures and an
//! interview-style algorithm built on them, mostly for educational purposes.
//!
//! ## Binary Heap
//!
//! A binary heap is a priority queue supporting operations to insert
//! elements and to remove the element of highest priority. It is a
//! complete binary tree (every level is full except possibly the last,
//! which fills from the left) so it can be stored in an array without
//! any pointers: the children of index `i` live at `2i + 1` and `2i + 2`.
//! The most important invariant of a heap is:
//!
//! 1. No element has a higher priority than its parent.
//!
//! > Note that this says nothing about siblings or cousins. A heap is only
//! > partially ordered which is what makes it cheap to maintain.
//!
//! The invariant puts the highest priority element at index `0`. Pushing
//! appends to the array and "sifts up" the new element, popping moves the
//! last element to the root and "sifts down", and both take `O(lg N)`.
//! An arbitrary array can be turned into a heap in `O(N)` by sifting down
//! every node that has children, starting from the last one ("heapify").
//!
//! See [`heap`] for the heap itself, [`closest`] for the "k closest points
//! to the origin" exercise solved with it, [`tree`] for a Binary Search
//! Tree with an in-order iterator driven by a [`stack`], and [`cursor`]
//! for the iteration contract they share.
//!
//! Nothing in this crate is synchronized. Callers sharing a structure
//! between threads need their own locking.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod closest;
pub mod cursor;
pub mod heap;
pub mod stack;
pub mod tree;
mod util;
