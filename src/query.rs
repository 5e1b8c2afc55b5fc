//! Read-only algorithms that work on any tree honouring the search-tree ordering,
//! no matter which variant built it.

use crate::node::Node;

/// Something with an optional root [`Node`] whose subtrees are ordered: keys on the
/// left never exceed a node's key and keys on the right are never smaller.
pub trait SearchTree {
    /// The root node, or `None` when the tree is empty.
    fn root(&self) -> Option<&Node>;
}

/// A node is the search tree rooted at itself.
impl SearchTree for Node {
    fn root(&self) -> Option<&Node> {
        Some(self)
    }
}

/// Returns the smallest key in the tree by following left links from the root, or
/// `None` for an empty tree. Takes `O(height)` time.
///
/// # Examples
///
/// ```
/// use treecables::{balanced, find_min, unbalanced};
///
/// let keys = [10, 5, 1, 7, 40, 50];
/// let bst: unbalanced::Tree = keys.into_iter().collect();
/// let avl: balanced::Tree = keys.into_iter().collect();
///
/// assert_eq!(find_min(&bst), Some(1));
/// assert_eq!(find_min(&avl), Some(1));
/// assert_eq!(find_min(&unbalanced::Tree::new()), None);
/// ```
pub fn find_min<T: SearchTree + ?Sized>(tree: &T) -> Option<i64> {
    let mut node = tree.root()?;
    while let Some(left) = node.left() {
        node = left;
    }
    Some(node.key())
}

/// Returns the largest key in the tree by following right links from the root.
pub fn find_max<T: SearchTree + ?Sized>(tree: &T) -> Option<i64> {
    let mut node = tree.root()?;
    while let Some(right) = node.right() {
        node = right;
    }
    Some(node.key())
}

/// Adds up every key in the tree, visiting each node once. An empty tree sums to 0.
///
/// Nodes are visited pre-order from an explicit stack rather than by recursion, so
/// an unbalanced tree of any depth is fine. The result is widened to `i128`, which
/// can't overflow for any tree that fits in memory.
///
/// # Examples
///
/// ```
/// use treecables::{sum_keys, unbalanced::Tree};
///
/// let tree: Tree = [2, 1, 3].into_iter().collect();
/// assert_eq!(sum_keys(&tree), 6);
/// assert_eq!(sum_keys(&Tree::new()), 0);
/// ```
pub fn sum_keys<T: SearchTree + ?Sized>(tree: &T) -> i128 {
    let mut sum = 0;
    let mut stack: Vec<&Node> = tree.root().into_iter().collect();

    while let Some(node) = stack.pop() {
        sum += i128::from(node.key());
        // Right first so the left subtree is popped next.
        stack.extend(node.right());
        stack.extend(node.left());
    }

    sum
}
