use thiserror::Error;

/// Errors returned by the checked constructors of the trees in this crate.
///
/// None of the query operations fail; these only come up when a tree is
/// assembled from parts that would break one of its invariants.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A left subtree holds a value greater than the value of its parent.
    #[error("left subtree holds a value greater than its parent")]
    LeftOutOfOrder,

    /// A right subtree holds a value less than the value of its parent.
    #[error("right subtree holds a value less than its parent")]
    RightOutOfOrder,

    /// An empty tree was given subtrees.
    #[error("an empty tree cannot have subtrees")]
    EmptyWithSubtrees,
}
