use derive_more::From;

use crate::tree::Node;

/// Description of paths and their content, fed to [`build`](crate::tree::build).
///
/// `Flat` maps absolute paths to nodes; intermediate directories are created as needed.
/// `Nested` is already shaped like the tree and must have a directory at its top.
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Entries<T> {
    Flat(Vec<(String, Node<T>)>),
    Nested(Node<T>),
}

impl<T> Entries<T> {
    /// Flat entries where every path names a file.
    pub fn flat<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<String>,
    {
        Entries::Flat(
            entries
                .into_iter()
                .map(|(path, content)| (path.into(), Node::File(content)))
                .collect(),
        )
    }

    /// Flat entries where a path may name a whole nested subtree.
    pub fn flat_nodes<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Node<T>)>,
        K: Into<String>,
    {
        Entries::Flat(
            entries
                .into_iter()
                .map(|(path, node)| (path.into(), node))
                .collect(),
        )
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Entries::Flat(entries) => entries.is_empty(),
            Entries::Nested(node) => node.children().is_some_and(|children| children.is_empty()),
        }
    }
}

impl<T> Default for Entries<T> {
    fn default() -> Self {
        Entries::Nested(Node::empty_directory())
    }
}

impl<K: Into<String>, T> FromIterator<(K, T)> for Entries<T> {
    fn from_iter<I: IntoIterator<Item = (K, T)>>(iter: I) -> Self {
        Entries::flat(iter)
    }
}
