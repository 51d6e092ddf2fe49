use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// heaps in a quicktest.
#[derive(Clone, Debug)]
pub(crate) enum HeapOp<T> {
    /// Push the T onto the heap
    Push(T),
    /// Pop the highest priority element
    Pop,
    /// Replace the contents of the heap
    Heapify(Vec<T>),
    /// Empty the heap
    Clear,
    /// Compare sorted iteration
    Sorted,
}

impl<T> Arbitrary for HeapOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation.
    /// Pushes and pops are weighted up so heaps get a chance to grow.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 1, 1, 2, 3, 4]).unwrap() {
            0 => HeapOp::Push(T::arbitrary(g)),
            1 => HeapOp::Pop,
            2 => HeapOp::Heapify(Vec::arbitrary(g)),
            3 => HeapOp::Clear,
            4 => HeapOp::Sorted,
            _ => unreachable!(),
        }
    }
}

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum TreeOp<T> {
    /// Add the T to the tree
    Add(T),
    /// Remove the T from the tree
    Remove(T),
    /// Compare iterators
    Iter,
}

impl<T> Arbitrary for TreeOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2]).unwrap() {
            0 => TreeOp::Add(T::arbitrary(g)),
            1 => TreeOp::Remove(T::arbitrary(g)),
            2 => TreeOp::Iter,
            _ => unreachable!(),
        }
    }
}
