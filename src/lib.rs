//! An in-memory stand-in for filesystem probing calls.
//!
//! Code under test asks [`MockFs`] the questions it would otherwise ask the disk: whether a
//! path exists, whether it is a directory or a file, what a directory contains, and what a
//! breadth-first walk from some path looks like. The answers come from a tree built from flat
//! `path -> content` entries or from an already nested description, optionally loaded from a
//! YAML [`Fixture`].
//!
//! ```
//! use mockfs::{Entries, MockFs};
//!
//! let mut fs = MockFs::new(Entries::flat([("/a/b/c", "x")])).unwrap();
//! assert!(fs.is_dir("/a/b"));
//! assert!(fs.is_file("/a/b/c"));
//! assert_eq!(fs.list_dir("/a"), vec!["b".to_string()]);
//!
//! fs.add_entries(Entries::flat([("/a/d", "y")])).unwrap();
//! assert_eq!(fs.walk("/").count(), 3);
//! ```

#![allow(clippy::enum_variant_names)]

pub mod filesystem;
pub mod fixture;
pub mod path;
pub mod tree;

#[cfg(test)]
mod test_support;

pub use filesystem::{MockFs, Walk, WalkEntry};
pub use fixture::{Fixture, FixtureError};
pub use path::{NormalizedPath, ToNormalizedPath, normalize};
pub use tree::{Entries, EntriesError, Node, Tree};
