//! A plain, unbalanced Binary Search Tree that may hold duplicate values.
//!
//! Equal values are allowed on either side of a node as long as everything in
//! the left subtree is `<=` the node and everything in the right subtree is
//! `>=` it. The queries here lean on that property to avoid visiting subtrees
//! that can't hold what they're looking for.
//!
//! # Examples
//!
//! ```
//! use recursive_trees::bst::BinarySearchTree;
//!
//! let tree = BinarySearchTree::with_children(
//!     7,
//!     BinarySearchTree::with_children(3, 2.into(), 5.into())?,
//!     BinarySearchTree::with_children(11, 9.into(), 13.into())?,
//! )?;
//!
//! assert!(tree.contains(&5));
//! assert!(!tree.contains(&6));
//! assert_eq!(tree.maximum(), Some(&13));
//! assert_eq!(tree.items(), [&2, &3, &5, &7, &9, &11, &13]);
//! assert_eq!(tree.smaller(&6), [&2, &3, &5]);
//! # Ok::<(), recursive_trees::Error>(())
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

use tracing::debug;

use crate::util::write_indented;
use crate::Error;

/// A Binary Search Tree. Each non-empty tree is a [`Node`] owning exactly two
/// children, either of which may be [`Empty`][BinarySearchTree::Empty].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BinarySearchTree<T> {
    /// The empty tree. It has no value and no children.
    Empty,
    /// A value with its left and right subtrees.
    Node(Node<T>),
}

/// A value stored in a [`BinarySearchTree`] along with its two subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node<T> {
    value: T,
    left: Box<BinarySearchTree<T>>,
    right: Box<BinarySearchTree<T>>,
}

impl<T> Node<T> {
    fn leaf(value: T) -> Self {
        Self {
            value,
            left: Box::new(BinarySearchTree::Empty),
            right: Box::new(BinarySearchTree::Empty),
        }
    }

    /// The value stored at this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The subtree holding values `<=` this node's value.
    pub fn left(&self) -> &BinarySearchTree<T> {
        &self.left
    }

    /// The subtree holding values `>=` this node's value.
    pub fn right(&self) -> &BinarySearchTree<T> {
        &self.right
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::Empty
    }
}

impl<T> From<T> for BinarySearchTree<T> {
    fn from(value: T) -> Self {
        Self::new(Some(value))
    }
}

impl<T> BinarySearchTree<T> {
    /// Creates a tree holding just `root`, or the empty tree if `root` is
    /// `None`.
    pub fn new(root: Option<T>) -> Self {
        match root {
            None => Self::Empty,
            Some(value) => Self::Node(Node::leaf(value)),
        }
    }

    /// Builds a tree rooted at `value` out of two existing subtrees.
    ///
    /// Returns an error if the result wouldn't be a valid BST: every value in
    /// `left` must be `<=` `value` and every value in `right` must be `>=`
    /// it, recursively.
    ///
    /// # Examples
    ///
    /// ```
    /// use recursive_trees::{bst::BinarySearchTree, Error};
    ///
    /// // Duplicates can sit on either side.
    /// let tree = BinarySearchTree::with_children(3, 3.into(), 3.into()).unwrap();
    /// assert_eq!(tree.count(&3), 3);
    ///
    /// let err = BinarySearchTree::with_children(3, 4.into(), BinarySearchTree::Empty);
    /// assert_eq!(err, Err(Error::LeftOutOfOrder));
    /// ```
    pub fn with_children(value: T, left: Self, right: Self) -> Result<Self, Error>
    where
        T: Ord,
    {
        let tree = Self::Node(Node {
            value,
            left: Box::new(left),
            right: Box::new(right),
        });

        if let Err(e) = tree.check_order() {
            debug!(error = %e, "rejected subtrees");
            return Err(e);
        }
        Ok(tree)
    }

    /// Returns whether this tree holds no values.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The value at the root of this tree, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.value()),
        }
    }

    /// The left subtree, or `None` for the empty tree.
    pub fn left(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.left()),
        }
    }

    /// The right subtree, or `None` for the empty tree.
    pub fn right(&self) -> Option<&Self> {
        match self {
            Self::Empty => None,
            Self::Node(n) => Some(n.right()),
        }
    }

    /// The number of values stored in this tree, duplicates included.
    pub fn len(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Node(n) => 1 + n.left.len() + n.right.len(),
        }
    }

    /// Adds `value` at a new leaf. Values equal to a node go into its left
    /// subtree.
    ///
    /// No rebalancing is done so inserting sorted input builds a list.
    pub fn insert(&mut self, value: T)
    where
        T: Ord,
    {
        match self {
            Self::Empty => *self = Self::new(Some(value)),
            Self::Node(n) => {
                if value <= n.value {
                    n.left.insert(value)
                } else {
                    n.right.insert(value)
                }
            }
        }
    }

    /// Returns whether `item` is stored anywhere in this tree.
    ///
    /// Only one path from the root is followed so this takes `O(height)`.
    pub fn contains(&self, item: &T) -> bool
    where
        T: Ord,
    {
        match self {
            Self::Empty => false,
            Self::Node(n) => match item.cmp(&n.value) {
                Ordering::Less => n.left.contains(item),
                Ordering::Equal => true,
                Ordering::Greater => n.right.contains(item),
            },
        }
    }

    /// Returns the largest value in this tree, or `None` if it is empty.
    ///
    /// ```
    /// use recursive_trees::bst::BinarySearchTree;
    ///
    /// assert_eq!(BinarySearchTree::<i32>::Empty.maximum(), None);
    /// assert_eq!(BinarySearchTree::from(10).maximum(), Some(&10));
    /// ```
    pub fn maximum(&self) -> Option<&T> {
        match self {
            Self::Empty => None,
            Self::Node(n) => n.right.maximum().or(Some(&n.value)),
        }
    }

    /// Returns how many times `item` occurs in this tree.
    ///
    /// A node equal to `item` may have copies in both of its subtrees so both
    /// are searched in that case. Otherwise only the side that can hold
    /// `item` is.
    pub fn count(&self, item: &T) -> usize
    where
        T: Ord,
    {
        match self {
            Self::Empty => 0,
            Self::Node(n) => match n.value.cmp(item) {
                Ordering::Equal => 1 + n.left.count(item) + n.right.count(item),
                Ordering::Greater => n.left.count(item),
                Ordering::Less => n.right.count(item),
            },
        }
    }

    /// Returns every value in this tree in ascending order.
    pub fn items(&self) -> Vec<&T> {
        let mut items = Vec::with_capacity(self.len());
        self.collect_items(&mut items);
        items
    }

    fn collect_items<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Self::Node(n) = self {
            n.left.collect_items(out);
            out.push(&n.value);
            n.right.collect_items(out);
        }
    }

    /// Returns, in ascending order, every value in this tree strictly less
    /// than `item`.
    pub fn smaller(&self, item: &T) -> Vec<&T>
    where
        T: Ord,
    {
        let mut smaller = Vec::new();
        self.collect_smaller(item, &mut smaller);
        smaller
    }

    fn collect_smaller<'a>(&'a self, item: &T, out: &mut Vec<&'a T>)
    where
        T: Ord,
    {
        if let Self::Node(n) = self {
            match item.cmp(&n.value) {
                Ordering::Less | Ordering::Equal => n.left.collect_smaller(item, out),
                Ordering::Greater => {
                    n.left.collect_smaller(item, out);
                    out.push(&n.value);
                    // The right subtree is only bounded below by this node so it
                    // still needs filtering.
                    n.right.collect_smaller(item, out);
                }
            }
        }
    }

    /// Checks that every node in this tree satisfies the BST property.
    pub fn check_order(&self) -> Result<(), Error>
    where
        T: Ord,
    {
        self.check_bounds(None, None)
    }

    /// `lower` is the nearest ancestor this tree is a right descendant of and
    /// `upper` the nearest one it is a left descendant of.
    fn check_bounds(&self, lower: Option<&T>, upper: Option<&T>) -> Result<(), Error>
    where
        T: Ord,
    {
        let n = match self {
            Self::Empty => return Ok(()),
            Self::Node(n) => n,
        };

        if upper.map_or(false, |upper| n.value > *upper) {
            return Err(Error::LeftOutOfOrder);
        }
        if lower.map_or(false, |lower| n.value < *lower) {
            return Err(Error::RightOutOfOrder);
        }

        n.left.check_bounds(lower, Some(&n.value))?;
        n.right.check_bounds(Some(&n.value), upper)
    }

    fn fmt_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result
    where
        T: fmt::Display,
    {
        if let Self::Node(n) = self {
            write_indented(f, depth, &n.value)?;
            n.left.fmt_indented(f, depth + 1)?;
            n.right.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

/// Writes one value per line in pre-order, indented two spaces per level.
/// Empty subtrees produce no output.
impl<T> fmt::Display for BinarySearchTree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_indented(f, 0)
    }
}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::Empty;
        tree.extend(iter);
        tree
    }
}
