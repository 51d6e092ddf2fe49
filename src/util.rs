//! Index arithmetic for a complete binary tree stored in a `Vec`.

/// Index of the parent of `index`. Must not be called with the root (`0`).
pub(crate) fn parent(index: usize) -> usize {
    (index - 1) / 2
}

pub(crate) fn left_child(index: usize) -> usize {
    2 * index + 1
}

pub(crate) fn right_child(index: usize) -> usize {
    2 * index + 2
}
