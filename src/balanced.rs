//! A self-balancing Binary Search Tree (specifically, an AVL tree).
//!
//! Insertion descends recursively to an empty slot, attaches the new node and then,
//! on the way back up, recomputes each ancestor's height and rotates wherever the
//! two subtrees differ in height by more than one. Since one insertion changes any
//! subtree's height by at most one, a single (or double) rotation per unbalanced
//! ancestor is enough to keep the whole tree within `O(lg N)` height.
//!
//! # Examples
//!
//! ```
//! use treecables::balanced::Tree;
//! use treecables::{find_min, sum_keys};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(find_min(&tree), None);
//!
//! // Ascending inserts would make a plain BST into a list...
//! for key in [10, 20, 30, 40, 50, 25] {
//!     tree.insert(key);
//! }
//!
//! // ...but this one stays shallow.
//! assert_eq!(tree.height(), 3);
//! assert_eq!(find_min(&tree), Some(10));
//! assert_eq!(sum_keys(&tree), 175);
//! ```

use std::fmt;

use tracing::trace;

use crate::node::{Iter, Link, Node};
use crate::query::SearchTree;

/// An AVL tree of `i64` keys. Duplicate keys are kept, each in its own node.
///
/// Inserts send equal keys right, but a later rotation may lift the right-hand copy
/// above the other one. The in-order sequence is non-decreasing either way.
#[derive(Clone, Default)]
pub struct Tree {
    root: Link,
    len: usize,
}

impl Tree {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Inserts `key`, rebalancing every ancestor of the new node as needed.
    ///
    /// Keys equal to an existing key go to its right.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecables::balanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// // The root was rotated left so `2` is on top.
    /// assert_eq!(tree.root().map(|n| n.key()), Some(2));
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn insert(&mut self, key: i64) {
        self.root = Some(insert(self.root.take(), key));
        self.len += 1;
    }

    /// The number of keys in the tree, counting duplicates.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree holds no keys.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The height of the tree: 0 when empty, 1 for a lone root.
    pub fn height(&self) -> usize {
        crate::node::height(&self.root)
    }

    /// The root node, if the tree isn't empty.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }

    /// Iterates over the keys in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.root())
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl SearchTree for Tree {
    fn root(&self) -> Option<&Node> {
        self.root.as_deref()
    }
}

impl<'a> IntoIterator for &'a Tree {
    type Item = i64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<i64> for Tree {
    fn extend<I: IntoIterator<Item = i64>>(&mut self, keys: I) {
        for key in keys {
            self.insert(key);
        }
    }
}

impl FromIterator<i64> for Tree {
    fn from_iter<I: IntoIterator<Item = i64>>(keys: I) -> Self {
        let mut tree = Self::new();
        tree.extend(keys);
        tree
    }
}

/// Inserts `key` into the subtree at `link` and returns the subtree's new root.
fn insert(link: Link, key: i64) -> Box<Node> {
    let mut node = match link {
        Some(node) => node,
        None => return Node::new_boxed(key),
    };

    if key < node.key {
        node.left = Some(insert(node.left.take(), key));
    } else {
        node.right = Some(insert(node.right.take(), key));
    }

    rebalance(node, key)
}

/// Refreshes `node`'s height and rotates if `key`'s insertion below it left the two
/// subtrees more than one level apart.
///
/// The double rotation (Left-Right) is picked when `key >= left.key` rather than the
/// textbook `key > left.key`. Equal keys descend right, so a duplicate of the left
/// child's key lands in that child's right subtree, and only the double rotation
/// rebalances it: after inserting `10, 5, 5` a single rotation would leave a root of
/// `5` with a balance factor of -2. For distinct keys both comparisons agree. Right-Left keeps the plain
/// `key < right.key`, which already matches the descent.
///
/// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
fn rebalance(mut node: Box<Node>, key: i64) -> Box<Node> {
    node.fix_height();

    let balance_factor = node.balance_factor();
    let new_root = if balance_factor > 1 {
        let left = node.left.take().expect("Left heavy => left child");
        // The descent went right at `left` exactly when `key >= left.key`. That puts the
        // extra level in `left`'s right subtree: the Left-Right case.
        node.left = Some(if key >= left.key {
            rotate_left(left)
        } else {
            left
        });
        rotate_right(node)
    } else if balance_factor < -1 {
        let right = node.right.take().expect("Right heavy => right child");
        node.right = Some(if key < right.key {
            rotate_right(right)
        } else {
            right
        });
        rotate_left(node)
    } else {
        node
    };

    if cfg!(debug_assertions) {
        let left_height = crate::node::height(&new_root.left);
        let right_height = crate::node::height(&new_root.right);
        assert_eq!(new_root.height, left_height.max(right_height) + 1);
        assert!(left_height.abs_diff(right_height) <= 1);
    }

    new_root
}

/// Rotate `old_root` to the right. This moves the left child up vertically and
/// `old_root` down vertically. Used to rebalance the tree when the left child is too
/// tall. As such, it must only be called when there _is_ a left child.
///
/// ## Panics
///
/// When called on a node without a left child.
///
/// # Diagram
///
/// ```text
///        old_root          new_root
///         /     \           /     \
///    new_root    z  ->     x    old_root
///     /   \                       /  \
///    x     y                     y    z
/// ```
fn rotate_right(mut old_root: Box<Node>) -> Box<Node> {
    let mut new_root = old_root.left.take().expect("Rotate right => left child");
    trace!(pivot = old_root.key, new_root = new_root.key, "rotating right");

    old_root.left = new_root.right.take();
    old_root.fix_height();

    new_root.right = Some(old_root);
    new_root.fix_height();
    new_root
}

/// Mirror image of [`rotate_right`]: lifts the right child above `old_root`.
///
/// ## Panics
///
/// When called on a node without a right child.
fn rotate_left(mut old_root: Box<Node>) -> Box<Node> {
    let mut new_root = old_root.right.take().expect("Rotate left => right child");
    trace!(pivot = old_root.key, new_root = new_root.key, "rotating left");

    old_root.right = new_root.left.take();
    old_root.fix_height();

    new_root.left = Some(old_root);
    new_root.fix_height();
    new_root
}
