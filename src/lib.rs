//! Two small textbook algorithms: binary search trees (plain and AVL) with a couple
//! of queries over them, and greedy minimum-cost cable joining.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert and
//! find stored keys. BSTs are typically defined recursively using the notion of a
//! `Node`. A `Node` stores a key and will sometimes have child `Node`s. The most
//! important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a key less
//!    than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a key
//!    greater than or equal to its own key. Duplicates are allowed and go right.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)` (where `height` is the longest path from the root
//! `Node` to a leaf `Node`). [`unbalanced::Tree`] makes no attempt to limit that, so
//! ascending inserts give it `O(N)` height. [`balanced::Tree`] rotates nodes after
//! each insert to keep the height within `O(lg N)`. Both support sorted iteration
//! and both work with the queries in [`query`].
//!
//! ## Cables
//!
//! [`cables::connect`] joins a set of cable lengths into one, always joining the two
//! shortest first, and reports the minimal total cost along with every join made.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod balanced;
pub mod cables;
pub mod error;
pub mod node;
pub mod query;
pub mod unbalanced;


pub use error::{Error, Result};
pub use query::{find_max, find_min, sum_keys, SearchTree};
