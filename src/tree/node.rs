use std::fmt;

use super::Color;

/// An exclusively-owned, possibly absent subtree
pub(super) type Link<T> = Option<Box<Node<T>>>;

/// A single node of the red-black tree
///
/// Nodes have no reference to their parent. Whoever owns the link holding a node is the only one
/// able to replace it, which is how rotations propagate back up the tree.
#[derive(Clone, PartialEq, Eq)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) color: Color,
    pub(super) left: Link<T>,
    pub(super) right: Link<T>,
}

impl<T> fmt::Debug for Node<T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("color", &self.color)
            .field("left", &self.left())
            .field("right", &self.right())
            .finish()
    }
}

impl<T> Node<T> {
    /// Every node starts out as a red leaf
    pub(super) fn new(value: T) -> Self {
        Self {
            value,
            color: Color::Red,
            left: None,
            right: None,
        }
    }

    /// Returns the value of this node
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the color of this node
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn is_red(&self) -> bool {
        self.color.is_red()
    }

    pub fn is_black(&self) -> bool {
        self.color.is_black()
    }

    /// Returns true if this node has a left subtree
    pub fn has_left(&self) -> bool {
        self.left.is_some()
    }

    /// Returns true if this node has a right subtree
    pub fn has_right(&self) -> bool {
        self.right.is_some()
    }

    /// Returns the left child node (subtree) of this node, if any
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// Returns the right child node (subtree) of this node, if any
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// Number of nodes in the subtree rooted at this node (including itself)
    pub fn subtree_len(&self) -> usize {
        1 + self.left().map_or(0, Self::subtree_len) + self.right().map_or(0, Self::subtree_len)
    }

    /// Number of edges on the longest path from this node down to a leaf
    pub fn subtree_depth(&self) -> usize {
        let left = self.left().map_or(0, |left| left.subtree_depth() + 1);
        let right = self.right().map_or(0, |right| right.subtree_depth() + 1);
        left.max(right)
    }
}
