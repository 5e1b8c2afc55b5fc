//! A plain, unbalanced Binary Search Tree.
//!
//! Keys are placed by walking down from the root and never moved afterwards, so the
//! tree's shape is entirely decided by insertion order. Ascending input produces a
//! list; every operation here is iterative so that doesn't blow the stack.
//!
//! # Examples
//!
//! ```
//! use treecables::unbalanced::Tree;
//! use treecables::{find_min, sum_keys};
//!
//! let mut tree = Tree::new();
//! assert_eq!(find_min(&tree), None);
//! assert_eq!(sum_keys(&tree), 0);
//!
//! for key in [10, 5, 1, 7, 40, 50] {
//!     tree.insert(key);
//! }
//!
//! assert_eq!(find_min(&tree), Some(1));
//! assert_eq!(sum_keys(&tree), 113);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 5, 7, 10, 40, 50]);
//! ```

use std::fmt;

use crate::node::{self, Iter, Link, Node};
use crate::query::SearchTree;

/// An unbalanced BST of `i64` keys. Duplicate keys are kept and go to the right of
/// the copies already present.
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

    /// Inserts `key` at the first empty slot found by descending left when `key` is
    /// smaller than the current node and right otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use treecables::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2);
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.left().map(|n| n.key()), Some(1));
    /// // The duplicate went right.
    /// assert_eq!(root.right().map(|n| n.key()), Some(2));
    /// ```
    pub fn insert(&mut self, key: i64) {
        // The first walk finds how deep the new leaf lands so the second can raise
        // every cached height on the path as it goes.
        let mut depth = 0;
        let mut cursor = self.root();
        while let Some(node) = cursor {
            depth += 1;
            cursor = if key < node.key {
                node.left()
            } else {
                node.right()
            };
        }

        let mut link = &mut self.root;
        while let Some(node) = link {
            node.height = node.height.max(depth + 1);
            depth -= 1;
            link = if key < node.key {
                &mut node.left
            } else {
                &mut node.right
            };
        }

        *link = Some(Node::new_boxed(key));
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

    /// The length of the longest root-to-leaf path, counted in nodes.
    pub fn height(&self) -> usize {
        node::height(&self.root)
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
