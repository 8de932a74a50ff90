mod color;
mod node;
mod balance;
mod validate;

pub use color::*;
pub use node::*;
pub use validate::Stats;

use std::fmt;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::iter::FromIterator;

use log::debug;

use crate::InvariantError;

use node::Link;

/// A left-leaning red-black tree
///
/// BST properties: For each node with value `v`:
/// - The value of each node in the left subtree is less than `v`
/// - The value of each node in the right subtree is greater than `v`
///
/// Red-black properties, restored after every insertion:
/// - The root is black
/// - A red node never has a red child
/// - Every path from a node down to an absent child passes through the same number of black nodes
///
/// Duplicate values are not allowed. Adding a value that already exists in the tree does not
/// modify the tree.
///
/// Nodes do not point back to their parents. Each level of an insertion rebalances the subtree it
/// owns and writes the resulting root back into its own link on the way back up.
#[derive(Clone)]
pub struct RedBlackTree<T> {
    root: Link<T>,
    len: usize,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self {
            root: None,
            len: 0,
        }
    }
}

impl<T> fmt::Debug for RedBlackTree<T>
    where T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RedBlackTree")
            .field("len", &self.len)
            .field("root", &self.root())
            .finish()
    }
}

impl<T> RedBlackTree<T> {
    /// Creates an empty `RedBlackTree`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    /// let mut tree: RedBlackTree<&str> = RedBlackTree::new();
    /// ```
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values in the tree
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert_eq!(tree.len(), 0);
    /// tree.add(1);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree is empty
    ///
    /// Time complexity: `O(1)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// tree.add(1);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        debug_assert!(self.len != 0 || self.root.is_none());
        self.len == 0
    }

    /// Clears the tree, removing all values
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(1);
    /// assert!(!tree.is_empty());
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// ```
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Returns the root node of the tree, or `None` if the tree is empty
    ///
    /// The root can be **any** value added to the tree and changes as the tree rebalances itself.
    ///
    /// This is a low-level API meant for walking the shape of the tree, e.g. to render it. Every
    /// node exposes its value, its color and its children.
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::{RedBlackTree, Color};
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(10);
    /// tree.add(20);
    /// tree.add(30);
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(*root.value(), 20);
    /// assert_eq!(root.color(), Color::Black);
    /// assert_eq!(root.left().map(|node| *node.value()), Some(10));
    /// assert_eq!(root.right().map(|node| *node.value()), Some(30));
    /// ```
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Counts the nodes of the tree by walking all of them
    ///
    /// Always equal to `len()`, which should be preferred outside of shape inspection.
    ///
    /// Time complexity: `O(n)`
    pub fn node_count(&self) -> usize {
        self.root().map_or(0, Node::subtree_len)
    }

    /// Returns the number of edges on the longest path from the root to a leaf
    ///
    /// Both an empty tree and a tree with a single value have a depth of 0.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = (0..7).collect();
    /// assert_eq!(tree.max_depth(), 2);
    /// ```
    pub fn max_depth(&self) -> usize {
        self.root().map_or(0, Node::subtree_depth)
    }
}

impl<T: Ord> RedBlackTree<T> {
    /// Adds a value to the tree and rebalances it
    ///
    /// Returns `true` if a new node was created, or `false` if an equal value was already present.
    /// The tree is left completely untouched in the latter case.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// # assert!(tree.is_empty());
    /// assert!(tree.add(37));
    /// assert!(!tree.is_empty());
    ///
    /// assert!(!tree.add(37));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn add(&mut self, value: T) -> bool {
        let root = match self.root.as_mut() {
            Some(root) => root,
            None => {
                let mut node = Node::new(value);
                node.color = Color::Black;
                self.root = Some(Box::new(node));

                debug_assert_eq!(self.len, 0);
                self.len = 1;

                return true;
            },
        };

        if !insert(root, value) {
            return false;
        }
        self.len += 1;

        if let Some(root) = self.root.take() {
            let mut root = balance::rebalance(root);
            root.color = Color::Black;
            self.root = Some(root);
        }

        true
    }

    /// Returns `true` if the tree contains the specified value.
    ///
    /// The value may be any borrowed form of the tree's value type, but the ordering on the
    /// borrowed form must match the ordering on the value type.
    ///
    /// Time complexity: `O(log n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// tree.add(String::from("abc"));
    /// assert!(tree.contains("abc"));
    /// assert!(!tree.contains("def"));
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

    /// Checks every red-black and BST invariant of the tree
    ///
    /// Returns statistics about the shape of the tree if all of them hold.
    ///
    /// Time complexity: `O(n)`
    ///
    /// # Examples
    ///
    /// ```
    /// use rbtree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<_> = (1..=100).collect();
    /// let stats = tree.validate().unwrap();
    /// assert_eq!(stats.len, 100);
    /// assert!(stats.max_depth <= 2 * 7);
    /// ```
    pub fn validate(&self) -> Result<Stats, InvariantError> {
        validate::validate(self.root(), self.len).map_err(|err| {
            debug!("red-black tree failed validation: {}", err);
            err
        })
    }
}

/// Inserts `value` somewhere below `node`
///
/// Every child link that the insertion passed through is rebalanced on the way back up, but `node`
/// itself is left for the owner of its link to rebalance. Returns `false` without touching anything
/// if an equal value is found.
fn insert<T: Ord>(node: &mut Node<T>, value: T) -> bool {
    let link = match value.cmp(&node.value) {
        Ordering::Less => &mut node.left,
        Ordering::Greater => &mut node.right,
        Ordering::Equal => return false,
    };

    match link {
        Some(child) => {
            if !insert(child, value) {
                return false;
            }
        },

        // Value not found, attach it where we stopped
        None => {
            *link = Some(Box::new(Node::new(value)));
            return true;
        },
    }

    if let Some(child) = link.take() {
        *link = Some(balance::rebalance(child));
    }

    true
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}
