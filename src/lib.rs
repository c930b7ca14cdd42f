pub mod avl;
pub mod comparator;
pub mod tree;

pub use avl::{AvlTree, Node};
pub use comparator::{Comparator, Natural, by_sign};
pub use tree::TreeOps;
