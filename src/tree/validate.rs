use crate::InvariantError;

use super::balance::is_red;
use super::Node;

/// Shape statistics gathered while validating a tree
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Stats {
    /// Number of nodes found in the tree
    pub len: usize,
    /// Longest root-to-leaf path, in edges
    pub max_depth: usize,
    /// Number of black nodes on every path from the root to an absent child
    pub black_height: usize,
    /// Number of red nodes in the tree
    pub red_nodes: usize,
}

pub(super) fn validate<T: Ord>(root: Option<&Node<T>>, len: usize) -> Result<Stats, InvariantError> {
    if is_red(root) {
        return Err(InvariantError::RedRoot);
    }

    let mut stats = Stats::default();
    stats.black_height = validate_subtree(root, None, None, false, 0, &mut stats)?;

    if stats.len != len {
        return Err(InvariantError::LengthMismatch {len, counted: stats.len});
    }

    Ok(stats)
}

/// Checks the subtree at `node` and returns its black-height
///
/// Every value in the subtree must lie strictly between `lower` and `upper`, if present.
fn validate_subtree<T: Ord>(
    node: Option<&Node<T>>,
    lower: Option<&T>,
    upper: Option<&T>,
    from_red: bool,
    depth: usize,
    stats: &mut Stats,
) -> Result<usize, InvariantError> {
    let node = match node {
        Some(node) => node,
        None => return Ok(0),
    };

    stats.len += 1;
    stats.max_depth = stats.max_depth.max(depth);

    if node.is_red() {
        if from_red {
            return Err(InvariantError::ConsecutiveReds {depth: depth - 1});
        }
        stats.red_nodes += 1;
    }

    let value = node.value();
    let below_lower = lower.map_or(false, |lower| value <= lower);
    let above_upper = upper.map_or(false, |upper| value >= upper);
    if below_lower || above_upper {
        return Err(InvariantError::OutOfOrder {depth});
    }

    let left = validate_subtree(node.left(), lower, Some(value), node.is_red(), depth + 1, stats)?;
    let right = validate_subtree(node.right(), Some(value), upper, node.is_red(), depth + 1, stats)?;
    if left != right {
        return Err(InvariantError::UnbalancedBlacks {depth, left, right});
    }

    Ok(left + usize::from(node.is_black()))
}
