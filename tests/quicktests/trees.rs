use treecables::node::Node;
use treecables::{balanced, find_max, find_min, sum_keys, unbalanced, SearchTree};

use crate::Op;

/// Recomputes every height from scratch, checking the AVL balance and that the
/// cached heights agree. Returns the height of `node`.
fn checked_height(node: Option<&Node>) -> usize {
    let Some(node) = node else {
        return 0;
    };
    let left = checked_height(node.left());
    let right = checked_height(node.right());

    assert!(left.abs_diff(right) <= 1, "node {} is unbalanced", node.key());
    assert_eq!(node.height(), left.max(right) + 1, "stale height at {}", node.key());
    node.height()
}

/// Applies `ops` to `tree` through `insert`, checking sorted order, min, max and sum
/// against the inserted keys every time an `Op::Check` comes up.
fn do_ops<T: SearchTree>(
    ops: &[Op],
    tree: &mut T,
    mut insert: impl FnMut(&mut T, i64),
    keys: impl Fn(&T) -> Vec<i64>,
) -> bool {
    let mut inserted = Vec::new();

    for op in ops {
        match *op {
            Op::Insert(key) => {
                insert(tree, i64::from(key));
                inserted.push(i64::from(key));
            }
            Op::Check => {
                inserted.sort_unstable();
                let sum: i128 = inserted.iter().copied().map(i128::from).sum();

                if keys(tree) != inserted
                    || find_min(tree) != inserted.first().copied()
                    || find_max(tree) != inserted.last().copied()
                    || sum_keys(tree) != sum
                {
                    return false;
                }
            }
        }
    }

    true
}

quickcheck::quickcheck! {
    fn unbalanced_matches_sorted_keys(ops: Vec<Op>) -> bool {
        let mut tree = unbalanced::Tree::new();
        do_ops(&ops, &mut tree, unbalanced::Tree::insert, |t| t.iter().collect())
    }

    fn balanced_matches_sorted_keys(ops: Vec<Op>) -> bool {
        let mut tree = balanced::Tree::new();
        do_ops(
            &ops,
            &mut tree,
            |tree, key| {
                tree.insert(key);
                checked_height(tree.root());
            },
            |t| t.iter().collect(),
        )
    }

    fn both_trees_agree(xs: Vec<i64>) -> bool {
        let bst: unbalanced::Tree = xs.iter().copied().collect();
        let avl: balanced::Tree = xs.iter().copied().collect();

        bst.iter().eq(avl.iter())
            && find_min(&bst) == find_min(&avl)
            && sum_keys(&bst) == sum_keys(&avl)
    }

    fn in_order_is_non_decreasing(xs: Vec<i64>) -> bool {
        let avl: balanced::Tree = xs.iter().copied().collect();
        let keys: Vec<_> = (&avl).into_iter().collect();

        keys.windows(2).all(|w| w[0] <= w[1]) && keys.len() == xs.len()
    }
}

#[test]
fn sample_minimums() {
    let keys = [10, 5, 1, 7, 40, 50];
    let bst: unbalanced::Tree = keys.into_iter().collect();
    let avl: balanced::Tree = keys.into_iter().collect();

    assert_eq!(find_min(&bst), Some(1));
    assert_eq!(find_min(&avl), Some(1));

    let avl: balanced::Tree = [10, 20, 30, 40, 50, 25].into_iter().collect();
    assert_eq!(find_min(&avl), Some(10));
    assert_eq!(sum_keys(&avl), 175);
}

#[test]
fn sample_sum() {
    let bst: unbalanced::Tree = [2, 1, 3].into_iter().collect();
    let avl: balanced::Tree = [2, 1, 3].into_iter().collect();

    assert_eq!(sum_keys(&bst), 6);
    assert_eq!(sum_keys(&avl), 6);
}

#[test]
fn empty_trees() {
    assert_eq!(find_min(&unbalanced::Tree::new()), None);
    assert_eq!(find_min(&balanced::Tree::new()), None);
    assert_eq!(sum_keys(&unbalanced::Tree::new()), 0);
    assert_eq!(sum_keys(&balanced::Tree::new()), 0);
}

#[test]
fn iteration_restarts() {
    let avl: balanced::Tree = (0..100).rev().collect();

    let first: Vec<_> = avl.iter().take(3).collect();
    let again: Vec<_> = avl.iter().take(3).collect();
    assert_eq!(first, vec![0, 1, 2]);
    assert_eq!(first, again);
}

#[test]
fn degenerate_bst_survives_queries_and_drop() {
    let bst: unbalanced::Tree = (0..20_000).rev().collect();

    assert_eq!(bst.height(), 20_000);
    assert_eq!(find_min(&bst), Some(0));
    assert_eq!(sum_keys(&bst), 199_990_000);
    assert_eq!(bst.iter().last(), Some(19_999));
}
