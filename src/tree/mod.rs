//! The navigable tree: an arena of fold-aware nodes with pre-order traversal.

mod arena;

pub use arena::{NodeContent, NodeId, TreeArena};
