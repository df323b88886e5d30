//! Tree representation of the mock filesystem.
//!
//! Nodes are either directories holding named children or files holding opaque content.
//! Trees are built from [`Entries`], grown with [`merge`] and read through [`resolve`].

mod builder;
mod entries;
mod file_tree;
mod node;
mod resolver;

pub use builder::{EntriesError, build, merge};
pub use entries::Entries;
pub use file_tree::Tree;
pub use node::{Children, Node};
pub use resolver::resolve;
