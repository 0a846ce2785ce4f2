//! A general (rose) tree where every node owns any number of ordered subtrees.
//!
//! The tree doesn't keep its values in any particular order. The one
//! structural operation, [`Tree::swap_down`], sinks the root value past any
//! larger children the way a heap's sift-down does.
//!
//! # Examples
//!
//! ```
//! use recursive_trees::rose::Tree;
//!
//! let mut tree = Tree::new(1, vec![Tree::leaf(2), Tree::leaf(3)]);
//! tree.swap_down();
//!
//! assert_eq!(tree.to_string(), "3\n  2\n  1");
//! ```

use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::util::write_indented;
use crate::Error;

/// A tree with an optional root value and an ordered list of subtrees.
///
/// A tree without a root value is empty and never has subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Option<T>,
    subtrees: Vec<Tree<T>>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> Tree<T> {
    /// Creates a tree with the given root value and subtrees.
    pub fn new(root: T, subtrees: Vec<Tree<T>>) -> Self {
        Self {
            root: Some(root),
            subtrees,
        }
    }

    /// Creates a tree with a single value and no subtrees.
    pub fn leaf(root: T) -> Self {
        Self::new(root, Vec::new())
    }

    /// Creates the empty tree.
    pub fn empty() -> Self {
        Self {
            root: None,
            subtrees: Vec::new(),
        }
    }

    /// Creates a tree from an optional root. An empty tree can't have
    /// subtrees so passing `None` with a non-empty `subtrees` is an error.
    ///
    /// ```
    /// use recursive_trees::{rose::Tree, Error};
    ///
    /// assert!(Tree::<i32>::try_new(None, vec![]).unwrap().is_empty());
    /// assert_eq!(Tree::try_new(None, vec![Tree::leaf(1)]), Err(Error::EmptyWithSubtrees));
    /// ```
    pub fn try_new(root: Option<T>, subtrees: Vec<Tree<T>>) -> Result<Self, Error> {
        if root.is_none() && !subtrees.is_empty() {
            debug!(subtrees = subtrees.len(), "rejected subtrees for empty tree");
            return Err(Error::EmptyWithSubtrees);
        }
        Ok(Self { root, subtrees })
    }

    /// Returns whether this tree is empty.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The value at the root of this tree.
    pub fn root(&self) -> Option<&T> {
        self.root.as_ref()
    }

    /// Replaces the value at the root of this tree, returning the old one.
    pub fn set_root(&mut self, value: T) -> Option<T> {
        self.root.replace(value)
    }

    /// The subtrees of this tree, in order.
    pub fn subtrees(&self) -> &[Tree<T>] {
        &self.subtrees
    }

    /// Replaces the subtrees of this tree, returning the old ones. Fails if
    /// this tree is empty.
    pub fn set_subtrees(&mut self, subtrees: Vec<Tree<T>>) -> Result<Vec<Tree<T>>, Error> {
        if self.is_empty() {
            debug!(subtrees = subtrees.len(), "rejected subtrees for empty tree");
            return Err(Error::EmptyWithSubtrees);
        }
        Ok(mem::replace(&mut self.subtrees, subtrees))
    }

    /// The number of values in this tree.
    pub fn len(&self) -> usize {
        match self.root {
            None => 0,
            Some(_) => 1 + self.subtrees.iter().map(Tree::len).sum::<usize>(),
        }
    }

    /// Every value in this tree in pre-order: a root before its subtrees,
    /// subtrees left to right.
    pub fn values(&self) -> Vec<&T> {
        let mut values = Vec::with_capacity(self.len());
        self.collect_values(&mut values);
        values
    }

    fn collect_values<'a>(&'a self, out: &mut Vec<&'a T>) {
        if let Some(root) = &self.root {
            out.push(root);
            for subtree in &self.subtrees {
                subtree.collect_values(out);
            }
        }
    }

    /// Swaps the root with the largest of its children's roots, then keeps
    /// sinking the displaced value down that child until it is at least as
    /// large as all of the children where it lands.
    ///
    /// Ties go to the child that comes first. Empty children are ignored. If
    /// the root is already at least as large as every child nothing happens,
    /// and the children themselves are not visited.
    ///
    /// ```
    /// use recursive_trees::rose::Tree;
    ///
    /// let mut tree = Tree::new(
    ///     3,
    ///     vec![
    ///         Tree::new(5, vec![Tree::new(7, vec![Tree::leaf(2), Tree::leaf(1)])]),
    ///         Tree::leaf(4),
    ///     ],
    /// );
    /// tree.swap_down();
    ///
    /// assert_eq!(tree.to_string(), "5\n  7\n    3\n      2\n      1\n  4");
    /// ```
    pub fn swap_down(&mut self)
    where
        T: Ord,
    {
        let index = match self.largest_subtree() {
            Some(index) => index,
            None => return,
        };

        let child = &mut self.subtrees[index];
        match (self.root.as_mut(), child.root.as_mut()) {
            (Some(parent), Some(largest)) if *parent < *largest => mem::swap(parent, largest),
            _ => return,
        }
        trace!(index, "swapped root with subtree");

        child.swap_down();
    }

    /// The index of the first non-empty subtree with the largest root.
    fn largest_subtree(&self) -> Option<usize>
    where
        T: Ord,
    {
        let mut largest: Option<(usize, &T)> = None;
        for (index, subtree) in self.subtrees.iter().enumerate() {
            if let Some(root) = &subtree.root {
                if largest.map_or(true, |(_, max)| root > max) {
                    largest = Some((index, root));
                }
            }
        }
        largest.map(|(index, _)| index)
    }

    fn fmt_indented<W>(&self, out: &mut W, depth: usize) -> fmt::Result
    where
        W: fmt::Write,
        T: fmt::Display,
    {
        if let Some(root) = &self.root {
            write_indented(out, depth, root)?;
            for subtree in &self.subtrees {
                subtree.fmt_indented(out, depth + 1)?;
            }
        }
        Ok(())
    }
}

/// Writes one value per line in pre-order, indented two spaces per level,
/// with surrounding whitespace trimmed.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rendered = String::new();
        self.fmt_indented(&mut rendered, 0)?;
        f.write_str(rendered.trim())
    }
}
