//! This crate exposes two small recursive trees, mostly for educational
//! purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a binary tree where, for every node, every value
//! in its left subtree is less than or equal to the node's value and every
//! value in its right subtree is greater than or equal to it. This crate's
//! [`BinarySearchTree`][bst::BinarySearchTree] permits duplicates on either
//! side of an equal node, which is why [`count`][bst::BinarySearchTree::count]
//! looks into both subtrees when it finds a match.
//!
//! Because of the ordering, a lookup only needs to follow one path from the
//! root so it takes `O(height)`. Visiting the left subtree, then the node,
//! then the right subtree yields the values in sorted order without any
//! sorting pass.
//!
//! ## Rose Tree
//!
//! A [`Tree`][rose::Tree] is a node with any number of ordered subtrees and
//! no ordering between values. Its [`swap_down`][rose::Tree::swap_down]
//! performs the sift-down step used to maintain a heap: the root trades
//! places with its largest child until it is no smaller than its children.
//!
//! Neither tree balances itself, supports deletion, or is meant to be shared
//! across threads while it's being mutated.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod bst;
mod error;
pub mod rose;
mod util;

pub use error::Error;
