use std::cmp::Ordering;
use std::borrow::Borrow;
use std::iter::FromIterator;

mod node;

pub use node::*;

/// A "simple" BST that never rebalances itself
///
/// Used as a baseline to test and benchmark the `rbtree` crate. Values end up wherever the search
/// path stops, so sorted input produces a linked list.
#[derive(Debug, Clone)]
pub struct SimpleBSTSet<T> {
    root: Option<Node<T>>,
    len: usize,
}

impl<T> Default for SimpleBSTSet<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T: Ord> SimpleBSTSet<T> {
    /// Creates an empty `SimpleBSTSet`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    /// let mut set: SimpleBSTSet<&str> = SimpleBSTSet::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the set
    ///
    /// Time complexity: `O(1)`
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the set is empty
    ///
    /// Time complexity: `O(1)`
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Returns `true` if the set contains the specified value.
    ///
    /// The value may be any borrowed form of the set's value type, but the ordering on the borrowed
    /// form must match the ordering on the value type.
    ///
    /// Time complexity: `O(depth)`
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let mut set = SimpleBSTSet::new();
    /// set.add(1);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&2));
    /// ```
    pub fn contains<Q>(&self, value: &Q) -> bool
        where T: Borrow<Q>,
              Q: Ord + ?Sized,
    {
        let mut current = self.root();
        while let Some(node) = current {
            match value.cmp(node.value().borrow()) {
                Ordering::Less => current = node.left(),
                Ordering::Greater => current = node.right(),
                Ordering::Equal => return true,
            }
        }

        false
    }

    /// Adds a value to the set without any rebalancing
    ///
    /// Returns `true` if a new node was created, or `false` if an equal value was already present.
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let mut set = SimpleBSTSet::new();
    /// assert!(set.add(37));
    /// assert!(!set.add(37));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let mut current = match self.root.as_mut() {
            Some(root) => Some(root),
            None => {
                self.root = Some(Node::new(value));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                return true;
            },
        };

        while let Some(node) = current.take() {
            match value.cmp(node.value()) {
                Ordering::Less => {
                    // Value not found, insert where we stopped
                    if !node.has_left() {
                        node.set_left(Node::new(value));
                        self.len += 1;
                        return true;
                    }
                    current = node.left_mut();
                },

                Ordering::Greater => {
                    // Value not found, insert where we stopped
                    if !node.has_right() {
                        node.set_right(Node::new(value));
                        self.len += 1;
                        return true;
                    }
                    current = node.right_mut();
                },

                Ordering::Equal => return false,
            }
        }

        false
    }

    /// Clears the set, removing all values
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the number of edges on the longest path from the root to a leaf
    ///
    /// # Examples
    ///
    /// ```
    /// use simple_bst::SimpleBSTSet;
    ///
    /// let set: SimpleBSTSet<_> = (0..10).collect();
    /// assert_eq!(set.max_depth(), 9);
    /// ```
    pub fn max_depth(&self) -> usize {
        self.root().map_or(0, Node::subtree_depth)
    }

    /// Returns the root node of the tree, or `None` if the set is empty
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_ref()
    }
}

impl<T: Ord> Extend<T> for SimpleBSTSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for SimpleBSTSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
