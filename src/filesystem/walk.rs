use std::collections::VecDeque;
use std::iter::FusedIterator;

use derive_more::Constructor;
use tracing::trace;

use crate::path::NormalizedPath;
use crate::tree::{Node, Tree};

/// One visited directory: its path, then the names of its subdirectories and files.
#[derive(Debug, Clone, PartialEq, Eq, Constructor)]
pub struct WalkEntry {
    pub path: NormalizedPath,
    pub dirs: Vec<String>,
    pub files: Vec<String>,
}

impl WalkEntry {
    pub fn into_parts(self) -> (NormalizedPath, Vec<String>, Vec<String>) {
        (self.path, self.dirs, self.files)
    }
}

/// Breadth-first walk over a [`Tree`], created by [`MockFs::walk`](crate::MockFs::walk).
///
/// Names in each entry follow the directory's insertion order, not sorted order. A start path
/// that is not a directory still yields a single entry with no names.
#[derive(Debug)]
pub struct Walk<'a, T> {
    tree: &'a Tree<T>,
    frontier: VecDeque<NormalizedPath>,
}

impl<'a, T> Walk<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, start: NormalizedPath) -> Self {
        Walk {
            tree,
            frontier: VecDeque::from([start]),
        }
    }
}

impl<T> Iterator for Walk<'_, T> {
    type Item = WalkEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let path = self.frontier.pop_front()?;
        trace!("Walking {}", path);

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        if let Some(Node::Directory(children)) = self.tree.resolve(&path) {
            for (name, node) in children {
                match node {
                    Node::Directory(_) => dirs.push(name.clone()),
                    Node::File(_) => files.push(name.clone()),
                }
            }
        }

        self.frontier.extend(dirs.iter().map(|name| path.join(name)));

        Some(WalkEntry::new(path, dirs, files))
    }
}

impl<T> FusedIterator for Walk<'_, T> {}
