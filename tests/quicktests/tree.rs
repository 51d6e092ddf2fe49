use std::collections::BTreeSet;

use heaps::tree::{BinaryTree, Tree};
use quickcheck_macros::quickcheck;

use crate::init_logger;

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();
    let values: Vec<_> = tree.iter().copied().collect();

    values.windows(2).all(|pair| pair[0] < pair[1])
        && values.len() == xs.iter().collect::<BTreeSet<_>>().len()
        && values.len() == tree.len()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: BinaryTree<_> = xs.iter().copied().collect();
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    init_logger();
    let mut tree: BinaryTree<_> = xs.iter().copied().collect();
    let mut expected: BTreeSet<_> = xs.into_iter().collect();

    for delete in &deletes {
        if tree.remove(delete) != expected.take(delete) {
            return false;
        }
    }

    deletes.iter().all(|x| tree.search(x).is_none()) && tree.iter().eq(expected.iter())
}
