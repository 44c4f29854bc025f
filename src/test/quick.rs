use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum Op<T> {
    /// Insert the T into the data structure
    Insert(T),
    /// Replace the tree with the result of serializing and deserializing it
    RoundTrip,
    /// Walk the tree with the threaded traversal
    Threaded,
    /// Drop every element
    Clear,
}

impl<T> Arbitrary for Op<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation. Inserts are
    /// weighted up so trees actually get some depth before being cleared.
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 0, 0, 0, 0, 1, 2, 3]).unwrap() {
            0 => Op::Insert(T::arbitrary(g)),
            1 => Op::RoundTrip,
            2 => Op::Threaded,
            3 => Op::Clear,
            _ => unreachable!(),
        }
    }
}
