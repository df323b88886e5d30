use tracing::debug;

use crate::filesystem::Walk;
use crate::path::ToNormalizedPath;
use crate::tree::{Entries, EntriesError, Node, Tree};

/// In-memory stand-in for filesystem probing calls.
///
/// Every predicate normalizes its argument and answers through the tree alone; a missing path
/// is reported as `false` or an empty listing, never as an error.
#[derive(Debug, Clone)]
pub struct MockFs<T, M = ()> {
    tree: Tree<T>,
    // Reserved for path-to-content lookups. Stored as given; no operation reads it yet.
    path_map: Option<M>,
}

impl<T> MockFs<T> {
    pub fn new(entries: impl Into<Entries<T>>) -> Result<Self, EntriesError> {
        Self::build(entries.into(), None)
    }
}

impl<T, M> MockFs<T, M> {
    pub fn with_path_map(
        entries: impl Into<Entries<T>>,
        path_map: M,
    ) -> Result<Self, EntriesError> {
        Self::build(entries.into(), Some(path_map))
    }

    fn build(entries: Entries<T>, path_map: Option<M>) -> Result<Self, EntriesError> {
        let tree = Tree::build(entries)?;
        debug!("Created mock filesystem");
        Ok(MockFs { tree, path_map })
    }

    /// Merges more entries into the tree. Incoming files replace whatever was at their path.
    pub fn add_entries(&mut self, entries: impl Into<Entries<T>>) -> Result<(), EntriesError> {
        let incoming = Tree::build(entries)?;
        debug!("Adding entries to mock filesystem");
        self.tree.merge(incoming);
        Ok(())
    }

    pub fn tree(&self) -> &Tree<T> {
        &self.tree
    }

    pub fn path_map(&self) -> Option<&M> {
        self.path_map.as_ref()
    }

    pub fn resolve(&self, path: impl ToNormalizedPath) -> Option<&Node<T>> {
        self.tree.resolve(&path.to_normalized_path())
    }

    /// The root always exists; any other path exists when its parent directory lists it.
    pub fn exists(&self, path: impl ToNormalizedPath) -> bool {
        let path = path.to_normalized_path();
        let Some(name) = path.file_name() else {
            return true;
        };
        match self.tree.resolve(&path.parent()) {
            Some(Node::Directory(children)) => children.contains_key(name),
            _ => false,
        }
    }

    pub fn is_dir(&self, path: impl ToNormalizedPath) -> bool {
        self.resolve(path).is_some_and(Node::is_directory)
    }

    pub fn is_file(&self, path: impl ToNormalizedPath) -> bool {
        let path = path.to_normalized_path();
        self.exists(&path) && !self.is_dir(&path)
    }

    /// Always `false`: the tree has no notion of links.
    pub fn is_symlink(&self, path: impl ToNormalizedPath) -> bool {
        let path = path.to_normalized_path();
        debug!("No links in mock filesystem, {} is not one", path);
        false
    }

    /// Child names of a directory in lexicographic order, or nothing for any other path.
    pub fn list_dir(&self, path: impl ToNormalizedPath) -> Vec<String> {
        match self.resolve(path) {
            Some(Node::Directory(children)) => {
                let mut names = children.keys().cloned().collect::<Vec<_>>();
                names.sort();
                names
            }
            _ => Vec::new(),
        }
    }

    /// Breadth-first walk starting at `path`, whether or not it exists.
    pub fn walk(&self, path: impl ToNormalizedPath) -> Walk<'_, T> {
        Walk::new(&self.tree, path.to_normalized_path())
    }
}

impl<T, M> Default for MockFs<T, M> {
    fn default() -> Self {
        MockFs {
            tree: Tree::new(),
            path_map: None,
        }
    }
}
