use ordered_tree::{Order, OrderedTree};

use crate::{Op, ORDERS};

/// Every traversal of the tree, one after another.
fn walks(tree: &OrderedTree<i8>) -> Vec<Vec<i8>> {
    ORDERS
        .iter()
        .map(|order| tree.iter(*order).copied().collect())
        .collect()
}

fn apply(ops: &[Op<i8>], tree: &mut OrderedTree<i8>) {
    for op in ops {
        match op {
            Op::Insert(v) => {
                tree.insert(*v);
            }
            Op::Delete(v) => {
                tree.delete(v);
            }
            Op::Iter(order) => {
                tree.iter(*order).for_each(drop);
            }
        }
    }
}

quickcheck::quickcheck! {
    fn clone_is_equal(xs: Vec<i8>) -> bool {
        let tree: OrderedTree<_> = xs.into_iter().collect();
        let copy = tree.clone();

        copy == tree && copy.len() == tree.len() && walks(&copy) == walks(&tree)
    }
}

quickcheck::quickcheck! {
    fn changing_the_original_leaves_the_copy(xs: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let mut original: OrderedTree<_> = xs.into_iter().collect();
        let copy = original.clone();
        let expected = walks(&copy);

        apply(&ops, &mut original);

        walks(&copy) == expected
    }
}

quickcheck::quickcheck! {
    fn changing_the_copy_leaves_the_original(xs: Vec<i8>, ys: Vec<i8>, ops: Vec<Op<i8>>) -> bool {
        let original: OrderedTree<_> = xs.into_iter().collect();
        let expected = walks(&original);

        let mut copy: OrderedTree<_> = ys.into_iter().collect();
        copy.clone_from(&original);
        let matched = copy == original;
        apply(&ops, &mut copy);

        matched && walks(&original) == expected
    }
}

quickcheck::quickcheck! {
    fn reassigning_a_copy_changes_nothing(xs: Vec<i8>) -> bool {
        let mut tree: OrderedTree<_> = xs.into_iter().collect();
        let expected = walks(&tree);
        let len = tree.len();

        let copy = tree.clone();
        tree.clone_from(&copy);

        walks(&tree) == expected
            && tree.len() == len
            && tree.iter(Order::InOrder).all(|x| copy.contains(x))
    }
}
