use crate::path::NormalizedPath;
use crate::tree::Node;

/// Follows `path` from `root` one segment at a time.
///
/// Returns `None` as soon as a segment is missing or a file is met before the last segment.
/// The root path resolves to `root` itself.
pub fn resolve<'a, T>(root: &'a Node<T>, path: &NormalizedPath) -> Option<&'a Node<T>> {
    path.segments().try_fold(root, |node, segment| match node {
        Node::Directory(children) => children.get(segment),
        Node::File(_) => None,
    })
}
