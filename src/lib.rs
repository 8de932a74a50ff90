pub mod tree;
mod error;

pub use error::InvariantError;
pub use tree::{Color, RedBlackTree, Stats};

#[macro_export(local_inner_macros)]
macro_rules! rbtree {
    ($($value:expr,)+) => { rbtree!($($value),+) };
    ($($value:expr),*) => {
        {
            let mut _tree = $crate::RedBlackTree::new();
            $(
                let _ = _tree.add($value);
            )*
            _tree
        }
    };
}
