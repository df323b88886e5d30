use derive_more::IsVariant;
use hashlink::LinkedHashMap;

/// Children of a directory, keyed by name and kept in insertion order.
pub type Children<T> = LinkedHashMap<String, Node<T>>;

/// A node of the mock tree. A directory owns its children, a file owns opaque content.
#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum Node<T> {
    Directory(Children<T>),
    File(T),
}

impl<T> Node<T> {
    pub fn file(content: T) -> Self {
        Node::File(content)
    }

    pub fn empty_directory() -> Self {
        Node::Directory(Children::new())
    }

    pub fn directory<I, K>(children: I) -> Self
    where
        I: IntoIterator<Item = (K, Node<T>)>,
        K: Into<String>,
    {
        Node::Directory(
            children
                .into_iter()
                .map(|(name, node)| (name.into(), node))
                .collect(),
        )
    }

    pub fn children(&self) -> Option<&Children<T>> {
        match self {
            Node::Directory(children) => Some(children),
            Node::File(_) => None,
        }
    }

    pub fn content(&self) -> Option<&T> {
        match self {
            Node::Directory(_) => None,
            Node::File(content) => Some(content),
        }
    }
}
