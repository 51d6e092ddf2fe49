use heaps::heap::{BinaryHeap, Heap, Mode};
use quickcheck_macros::quickcheck;

use crate::{init_logger, Op};

/// Pops everything out of the heap.
fn drain<T, C>(mut heap: BinaryHeap<T, C>) -> Vec<T>
where
    C: Fn(&T, &T) -> std::cmp::Ordering,
{
    std::iter::from_fn(|| heap.pop()).collect()
}

#[quickcheck]
fn peek_is_extremal_after_every_op(ops: Vec<Op<i16>>, max: bool) -> bool {
    init_logger();
    let mut heap = if max {
        BinaryHeap::max()
    } else {
        BinaryHeap::min()
    };
    let mut present = Vec::new();

    for op in ops {
        match op {
            Op::Push(x) => {
                heap.push(x);
                present.push(x);
            }
            Op::Pop => {
                if let Some(x) = heap.pop() {
                    let pos = present.iter().position(|y| *y == x).unwrap();
                    present.swap_remove(pos);
                }
            }
        }

        let expected = if max {
            present.iter().max()
        } else {
            present.iter().min()
        };
        if heap.peek() != expected {
            return false;
        }
    }

    true
}

#[quickcheck]
fn heapify_drains_like_pushes(xs: Vec<i16>) -> bool {
    let mut pushed = BinaryHeap::min();
    for x in &xs {
        pushed.push(*x);
    }
    let mut heapified = BinaryHeap::min();
    heapified.heapify(xs.clone());

    let mut sorted = xs;
    sorted.sort_unstable();

    let pushed = drain(pushed);
    pushed == drain(heapified) && pushed == sorted
}

#[quickcheck]
fn sorted_iter_is_non_destructive(xs: Vec<i16>) -> bool {
    let heap = BinaryHeap::from_vec(Mode::Max, i16::cmp, xs.clone());
    let size = heap.len();
    let top = heap.peek().copied();

    let sorted: Vec<_> = heap.sorted_iter().collect();
    let mut expected = xs;
    expected.sort_unstable_by(|a, b| b.cmp(a));

    sorted == expected
        && heap.len() == size
        && heap.peek().copied() == top
        && drain(heap) == expected
}

#[quickcheck]
fn clone_is_independent(xs: Vec<i16>, extra: i16) -> bool {
    let mut original = BinaryHeap::min();
    original.extend(xs);
    let size = original.len();
    let top = original.peek().copied();

    let mut copy = original.clone();
    copy.push(extra);
    copy.pop();
    copy.pop();
    let copy_size = copy.len();
    let copy_top = copy.peek().copied();
    let unchanged = original.len() == size && original.peek().copied() == top;

    original.push(extra);
    original.clear();
    unchanged && copy.len() == copy_size && copy.peek().copied() == copy_top
}

#[quickcheck]
fn iter_visits_storage_order(xs: Vec<i16>) -> bool {
    let mut heap = BinaryHeap::max();
    heap.extend(xs);

    heap.iter().eq(heap.as_slice().iter())
}
