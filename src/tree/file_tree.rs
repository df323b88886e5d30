use crate::path::NormalizedPath;
use crate::tree::{Children, Entries, EntriesError, Node, build, merge, resolve};

/// The mock directory tree. Its root is always a directory, even when empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Tree<T> {
    pub fn new() -> Self {
        Self::from_root_children(Children::new())
    }

    pub fn build(entries: impl Into<Entries<T>>) -> Result<Self, EntriesError> {
        build(entries.into())
    }

    pub(crate) fn from_root_children(children: Children<T>) -> Self {
        Tree {
            root: Node::Directory(children),
        }
    }

    pub fn root(&self) -> &Node<T> {
        &self.root
    }

    pub fn resolve(&self, path: &NormalizedPath) -> Option<&Node<T>> {
        resolve(&self.root, path)
    }

    /// Merges `incoming` into this tree, incoming entries winning on collision.
    pub fn merge(&mut self, incoming: Tree<T>) {
        merge(incoming.root, &mut self.root)
    }
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}
