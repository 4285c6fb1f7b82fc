use ordered_tree::{EmptyIteratorError, Order, OrderedTree};

use std::collections::HashSet;

use crate::{Op, ORDERS};

/// Whether an in-order walk of the tree is strictly increasing.
fn is_sorted(tree: &OrderedTree<i8>) -> bool {
    let values: Vec<_> = tree.iter(Order::InOrder).collect();
    values.windows(2).all(|pair| pair[0] < pair[1])
}

/// Applies a set of operations to a tree and a hashset, checking the order invariant
/// after every step. Returns whether the tree and set still agree.
fn do_ops(ops: &[Op<i8>], tree: &mut OrderedTree<i8>, set: &mut HashSet<i8>) -> bool {
    for op in ops {
        match op {
            Op::Insert(v) => {
                if tree.insert(*v) != set.insert(*v) {
                    return false;
                }
            }
            Op::Delete(v) => {
                if tree.delete(v).is_some() != set.remove(v) {
                    return false;
                }
            }
            Op::Iter(order) => {
                if tree.iter(*order).count() != set.len() {
                    return false;
                }
            }
        }

        if !is_sorted(tree) || tree.len() != set.len() {
            return false;
        }
    }

    true
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = OrderedTree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set)
            && set.iter().all(|value| tree.contains(value))
    }
}

quickcheck::quickcheck! {
    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.iter().copied().collect();
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        tree.len() == added.len() && nots.all(|x| !tree.contains(x))
    }
}

quickcheck::quickcheck! {
    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.iter().copied().collect();
        for delete in &deletes {
            tree.delete(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| !tree.contains(x))
            && still_present.iter().all(|x| tree.contains(x))
            && is_sorted(&tree)
    }
}

quickcheck::quickcheck! {
    fn deleting_absent_values_changes_nothing(xs: Vec<i8>, y: i8) -> bool {
        let mut tree: OrderedTree<_> = xs.into_iter().filter(|x| *x != y).collect();
        let before = tree.clone();

        tree.delete(&y).is_none() && tree == before
    }
}

quickcheck::quickcheck! {
    fn every_order_visits_every_value_once(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let sorted: Vec<_> = tree.iter(Order::InOrder).copied().collect();

        ORDERS.iter().all(|order| {
            let mut visited: Vec<_> = tree.iter(*order).copied().collect();
            visited.sort_unstable();
            visited == sorted
        })
    }
}

quickcheck::quickcheck! {
    fn snapshot_matches_lazy_walk(xs: Vec<i8>, order: usize) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let order = ORDERS[order % ORDERS.len()];
        let mut snapshot = tree.snapshot(order);

        tree.iter(order).all(|value| snapshot.next_item() == Ok(*value))
            && snapshot.next_item() == Err(EmptyIteratorError)
    }
}
