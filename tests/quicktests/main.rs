use quickcheck::{Arbitrary, Gen};

mod closest;
mod heap;
mod tree;

/// Lets `RUST_LOG=trace cargo test` show the crate's logging.
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// An enum for the various kinds of "things" to do to
/// a heap in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op<T> {
    /// Push the T onto the heap
    Push(T),
    /// Pop the highest priority element
    Pop,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Push(T::arbitrary(g)),
            1 => Op::Pop,
            _ => unreachable!(),
        }
    }
}
