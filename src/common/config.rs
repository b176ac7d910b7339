//! Configuration constants for BranchDB.

/// Smallest allowed minimum branching degree (`t`).
///
/// Every non-root node holds between `t - 1` and `2t - 1` key-value pairs.
/// With `t = 1` a node could legally hold zero entries and a full node would
/// have no median to promote on split, so `t = 2` is the floor. This matches
/// the classic CLRS definition of a B-tree.
///
/// # Node capacity at a glance
/// | t | entries per node | children per internal node |
/// |---|------------------|----------------------------|
/// | 2 | 1..=3            | 2..=4                      |
/// | 3 | 2..=5            | 3..=6                      |
/// | t | t-1..=2t-1       | t..=2t                     |
pub const MIN_BRANCHING_DEGREE: usize = 2;
