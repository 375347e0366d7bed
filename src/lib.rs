//! This crate is an interactive demonstration of an unbalanced Binary Search Tree
//! (BST), built for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to insert, find,
//! and delete stored records. BSTs are typically defined recursively using the notion
//! of a `Node`. A `Node` stores some sort of value (here, a single integer) and
//! sometimes has child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! These invariants make searching take `O(height)` (where `height` is the longest
//! path from the root `Node` to a leaf `Node`). The tree here does **no**
//! self-balancing, so its height is whatever the insertion order produces: random
//! insertions tend toward `O(lg N)` levels, while inserting already-sorted values
//! degrades the tree into an `O(N)`-deep list. The bundled throughput measurement
//! ([`tree::Tree::measure_insert_throughput`]) and the interactive `bst-demo` binary
//! exist to make exactly that behavior visible.

#![deny(missing_docs)]

pub mod tree;
