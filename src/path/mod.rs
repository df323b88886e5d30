//! Path addressing for the mock tree.
//!
//! Every public operation funnels its path argument through [`normalize`], so callers may pass
//! relative, doubled or trailing-slash forms interchangeably.

mod normalized_path;
mod path_ext;

pub use normalized_path::{NormalizedPath, normalize};
pub use path_ext::ToNormalizedPath;
