use ordered_tree::OrderedTree;

use std::collections::{BTreeMap, BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys and values in both.
fn do_ops<K, V>(ops: &[Op<K, V>], bst: &mut OrderedTree<K, V>, map: &mut BTreeMap<K, V>)
where
    K: Ord + Clone,
    V: Clone,
{
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                bst.insert(k.clone(), v.clone());
                map.insert(k.clone(), v.clone());
            }
            Op::Remove(k) => {
                bst.remove(k);
                map.remove(k);
            }
            Op::RemoveMin => {
                bst.remove_min();
                map.pop_first();
            }
            Op::RemoveMax => {
                bst.remove_max();
                map.pop_last();
            }
        }
    }
}

fn owned<K: Clone>(keys: Vec<&K>) -> Vec<K> {
    keys.into_iter().cloned().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut map = BTreeMap::new();

    do_ops(&ops, &mut tree, &mut map);
    tree.is_valid_bst()
        && tree.size() == map.len()
        && tree.iter().eq(map.iter())
        && map.keys().all(|key| tree.search(key) == map.get(key))
}

#[quickcheck]
fn size_counts_distinct_keys(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, ())).collect();
    let distinct: HashSet<_> = xs.iter().collect();

    tree.is_valid_bst() && tree.size() == distinct.len()
}

#[quickcheck]
fn reinsert_only_changes_value(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, 0)).collect();
    let size = tree.size();

    for x in &xs {
        tree.insert(*x, i32::from(*x) + 1);
    }

    tree.size() == size && xs.iter().all(|x| tree.search(x) == Some(&(i32::from(*x) + 1)))
}

#[quickcheck]
fn contain_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, x)).collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contain(x) && tree.search(x).is_none())
}

#[quickcheck]
fn removing_missing_key_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: OrderedTree<_, _> = xs
        .iter()
        .filter(|&&x| x != missing)
        .map(|&x| (x, ()))
        .collect();
    let before = owned(tree.pre_order());
    let size = tree.size();

    tree.remove(&missing).is_none() && tree.size() == size && owned(tree.pre_order()) == before
}

#[quickcheck]
fn removing_everything_empties(xs: Vec<i8>, order: Vec<usize>) -> bool {
    let mut tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, ())).collect();

    // Shuffle the removal order using the second input.
    let mut keys: Vec<_> = xs.iter().copied().collect::<BTreeSet<_>>().into_iter().collect();
    for (i, j) in order.into_iter().enumerate() {
        if !keys.is_empty() {
            let len = keys.len();
            keys.swap(i % len, j % len);
        }
    }

    for key in &keys {
        if tree.remove(key).is_none() || !tree.is_valid_bst() {
            return false;
        }
    }

    tree.size() == 0 && tree.is_empty()
}

#[quickcheck]
fn threaded_in_order_matches_stack(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, ())).collect();
    let stack = owned(tree.in_order());
    let threaded = owned(tree.in_order_threaded());

    let sorted: Vec<_> = xs.into_iter().collect::<BTreeSet<_>>().into_iter().collect();

    stack == threaded && stack == sorted
}

#[quickcheck]
fn threaded_traversals_restore_shape(xs: Vec<i8>) -> bool {
    let mut tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, ())).collect();
    let levels: Vec<Vec<i8>> = tree.level_order().into_iter().map(owned).collect();
    let post = owned(tree.post_order());
    let pre = owned(tree.pre_order());

    owned(tree.post_order_threaded()) == post
        && owned(tree.pre_order_threaded()) == pre
        && tree
            .level_order()
            .into_iter()
            .map(owned)
            .collect::<Vec<_>>()
            == levels
}

#[quickcheck]
fn min_max_bound_keys(xs: Vec<i8>) -> bool {
    let tree: OrderedTree<_, _> = xs.iter().map(|&x| (x, ())).collect();

    match (tree.minimum(), tree.maximum()) {
        (Ok(min), Ok(max)) => xs.iter().all(|x| min <= x && x <= max),
        _ => xs.is_empty(),
    }
}
