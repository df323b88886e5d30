//! Filesystem-shaped predicates over the mock tree.

mod mock_fs;
mod walk;

pub use mock_fs::MockFs;
pub use walk::{Walk, WalkEntry};
