use log::trace;

use super::{Color, Node};

/// Returns true if the given node exists and is red. Absent children count as black.
pub(super) fn is_red<T>(node: Option<&Node<T>>) -> bool {
    node.map_or(false, Node::is_red)
}

/// Restores the left-leaning red-black shape of a subtree whose children may have just changed
///
/// The checks are applied in priority order until none of them fires:
///
/// 1. A red right child next to a black (or absent) left child is rotated to the left
/// 2. Two reds stacked on the left are rotated to the right
/// 3. Two red children are split by flipping colors
///
/// Returns the (possibly new) root of the subtree. The caller must write it back into the link
/// the subtree was taken from.
pub(super) fn rebalance<T>(mut parent: Box<Node<T>>) -> Box<Node<T>> {
    loop {
        if is_red(parent.right()) && !is_red(parent.left()) {
            parent = rotate_left(parent);
        } else if is_red(parent.left()) && is_red(parent.left().and_then(Node::left)) {
            parent = rotate_right(parent);
        } else if is_red(parent.left()) && is_red(parent.right()) {
            flip_colors(&mut parent);
        } else {
            return parent;
        }
    }
}

//       parent               right
//       /    \      =>       /    \
//     left   right       parent    rr
//            /   \       /    \
//       between   rr   left  between
//
/// Promotes the right child of `parent` to be the new local root
///
/// The new root takes on the color of `parent`, and `parent` becomes red. Nothing happens if
/// `parent` has no right child.
pub(super) fn rotate_left<T>(mut parent: Box<Node<T>>) -> Box<Node<T>> {
    debug_assert!(parent.has_right(), "bug: rotating left without a right child");
    let mut new_parent = match parent.right.take() {
        Some(right) => right,
        None => return parent,
    };
    trace!("rotating left, new subtree root was a {} right child", new_parent.color);

    parent.right = new_parent.left.take();
    new_parent.color = parent.color;
    parent.color = Color::Red;
    new_parent.left = Some(parent);

    new_parent
}

//          parent           left
//          /    \    =>     /   \
//       left   right      ll   parent
//       /  \                   /    \
//     ll  between          between  right
//
/// Promotes the left child of `parent` to be the new local root
///
/// Mirror image of `rotate_left`.
pub(super) fn rotate_right<T>(mut parent: Box<Node<T>>) -> Box<Node<T>> {
    debug_assert!(parent.has_left(), "bug: rotating right without a left child");
    let mut new_parent = match parent.left.take() {
        Some(left) => left,
        None => return parent,
    };
    trace!("rotating right, new subtree root was a {} left child", new_parent.color);

    parent.left = new_parent.right.take();
    new_parent.color = parent.color;
    parent.color = Color::Red;
    new_parent.right = Some(parent);

    new_parent
}

/// Pushes the red of both children up into `parent`. Never changes the shape of the tree.
pub(super) fn flip_colors<T>(parent: &mut Node<T>) {
    debug_assert!(parent.has_left() && parent.has_right());
    trace!("flipping colors of a {} node and its children", parent.color);

    if let Some(left) = parent.left.as_deref_mut() {
        left.color = Color::Black;
    }
    if let Some(right) = parent.right.as_deref_mut() {
        right.color = Color::Black;
    }
    parent.color = Color::Red;
}
