use thiserror::Error;

/// A broken red-black tree invariant, as reported by `RedBlackTree::validate`
///
/// Depths are counted in edges from the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvariantError {
    #[error("root node is red")]
    RedRoot,
    #[error("red node at depth {depth} has a red child")]
    ConsecutiveReds { depth: usize },
    #[error("node at depth {depth} is out of order with respect to its ancestors")]
    OutOfOrder { depth: usize },
    #[error("unbalanced blacks below depth {depth}: left {left}, right {right}")]
    UnbalancedBlacks { depth: usize, left: usize, right: usize },
    #[error("tree reports {len} values but {counted} nodes were found")]
    LengthMismatch { len: usize, counted: usize },
}
