//! The node shared by both tree variants, plus the in-order iterator over it.
//!
//! A [`Node`] owns its children outright through `Option<Box<Node>>`, so a tree is
//! a plain ownership hierarchy: no parent pointers, no reference counting and no
//! cycles. Dropping a node drops everything below it.

use std::fmt;

/// An owned, possibly empty, subtree.
pub(crate) type Link = Option<Box<Node>>;

/// A single key in a binary search tree.
///
/// Every key in the left subtree is less than `key` and every key in the right
/// subtree is greater than or equal to it. Insertion sends duplicates right; only an
/// AVL rotation can move one copy to the left of another equal key.
pub struct Node {
    pub(crate) key: i64,
    pub(crate) left: Link,
    pub(crate) right: Link,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    pub(crate) height: usize,
}

impl Drop for Node {
    // Children are unlinked onto a heap-allocated stack so a long, list-shaped
    // subtree doesn't recurse once per level.
    fn drop(&mut self) {
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.left.take());
        stack.extend(self.right.take());

        while let Some(mut node) = stack.pop() {
            stack.extend(node.left.take());
            stack.extend(node.right.take());
        }
    }
}

impl Clone for Node {
    // Built bottom-up from an explicit post-order walk, for the same reason `Drop`
    // doesn't recurse.
    fn clone(&self) -> Self {
        enum Visit<'a> {
            Enter(Option<&'a Node>),
            Exit(&'a Node),
        }

        let mut built: Vec<Link> = Vec::new();
        let mut stack = vec![Visit::Enter(self.right()), Visit::Enter(self.left())];

        while let Some(visit) = stack.pop() {
            match visit {
                Visit::Enter(None) => built.push(None),
                Visit::Enter(Some(node)) => {
                    stack.push(Visit::Exit(node));
                    stack.push(Visit::Enter(node.right()));
                    stack.push(Visit::Enter(node.left()));
                }
                Visit::Exit(node) => {
                    let right = built.pop().flatten();
                    let left = built.pop().flatten();
                    built.push(Some(Box::new(Node {
                        key: node.key,
                        left,
                        right,
                        height: node.height,
                    })));
                }
            }
        }

        let right = built.pop().flatten();
        let left = built.pop().flatten();
        Node {
            key: self.key,
            left,
            right,
            height: self.height,
        }
    }
}

impl fmt::Debug for Node {
    // Children are shown by key only; printing whole subtrees would recurse per level.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("height", &self.height)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl Node {
    pub(crate) fn new_boxed(key: i64) -> Box<Self> {
        Box::new(Node {
            key,
            left: None,
            right: None,
            height: 1,
        })
    }

    /// The key stored in this node.
    pub fn key(&self) -> i64 {
        self.key
    }

    /// The root of the left subtree, if any.
    pub fn left(&self) -> Option<&Node> {
        self.left.as_deref()
    }

    /// The root of the right subtree, if any.
    pub fn right(&self) -> Option<&Node> {
        self.right.as_deref()
    }

    /// How many levels are in the subtree rooted at this node, as cached by the tree
    /// that owns it. A leaf has a height of 1.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Walks the whole subtree and returns its height, ignoring the cached values.
    pub fn measure_height(&self) -> usize {
        let mut deepest = 0;
        let mut stack = vec![(self, 1)];

        while let Some((node, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(node.left().map(|n| (n, depth + 1)));
            stack.extend(node.right().map(|n| (n, depth + 1)));
        }

        deepest
    }

    /// Adjusts the height of `self` to be the max of its children's heights + 1.
    pub(crate) fn fix_height(&mut self) {
        self.height = height(&self.left).max(height(&self.right)) + 1;
    }

    /// Left height minus right height. Positive means left-heavy.
    pub(crate) fn balance_factor(&self) -> isize {
        height(&self.left) as isize - height(&self.right) as isize
    }
}

/// Cached height of a link, 0 when empty.
pub(crate) fn height(link: &Link) -> usize {
    link.as_ref().map_or(0, |n| n.height)
}

/// An iterator over the keys of a tree in ascending order.
///
/// It keeps the path of pending ancestors on an explicit stack, so iteration
/// never recurses and uses `O(height)` memory. Each call to a tree's `iter`
/// starts a fresh traversal.
///
/// # Examples
///
/// ```
/// use treecables::unbalanced::Tree;
///
/// let tree: Tree = [3, 1, 2].into_iter().collect();
///
/// assert_eq!(tree.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
/// // And again from the start.
/// assert_eq!(tree.iter().next(), Some(1));
/// ```
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.key)
    }
}

impl std::iter::FusedIterator for Iter<'_> {}
