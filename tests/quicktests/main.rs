use quickcheck::{Arbitrary, Gen};

mod properties;

/// Something to do to both an `OrderedTree` and a reference map.
#[derive(Copy, Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Remove the K from the data structure
    Remove(K),
    /// Remove the smallest key
    RemoveMin,
    /// Remove the largest key
    RemoveMax,
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 1, 2, 3]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            2 => Op::RemoveMin,
            3 => Op::RemoveMax,
            _ => unreachable!(),
        }
    }
}
