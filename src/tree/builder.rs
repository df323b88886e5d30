use snafu::{Snafu, ensure};
use tracing::{debug, trace};

use crate::path::{NormalizedPath, normalize};
use crate::tree::{Children, Entries, Node, Tree};

/// Builds a tree from flat or nested entries.
///
/// Flat entries are applied in order. A later entry for the same path replaces an earlier file
/// and merges into an earlier directory; naming one path both a file and a directory within the
/// same entry set is rejected.
pub fn build<T>(entries: Entries<T>) -> Result<Tree<T>, EntriesError> {
    match entries {
        Entries::Nested(node) => {
            debug!("Building tree from nested entries");
            let Node::Directory(children) = node else {
                return RootNotDirectorySnafu.fail();
            };
            validate_children(&children, &NormalizedPath::root())?;
            Ok(Tree::from_root_children(children))
        }
        Entries::Flat(entries) => {
            debug!("Building tree from {} flat entries", entries.len());
            let mut root = Children::new();
            for (path, node) in entries {
                insert_flat_entry(&mut root, normalize(path), node)?;
            }
            Ok(Tree::from_root_children(root))
        }
    }
}

/// Merges `incoming` into `target` in place.
///
/// Directories on both sides are unioned recursively. Anywhere else the incoming node replaces
/// the existing one, so a file collapses an existing directory and vice versa.
pub fn merge<T>(incoming: Node<T>, target: &mut Node<T>) {
    match (incoming, target) {
        (Node::Directory(incoming_children), Node::Directory(target_children)) => {
            merge_children(incoming_children, target_children)
        }
        (incoming, target) => *target = incoming,
    }
}

fn merge_children<T>(incoming: Children<T>, target: &mut Children<T>) {
    for (name, node) in incoming {
        match target.get_mut(&name) {
            Some(existing) => {
                trace!("Merging over existing entry '{}'", name);
                merge(node, existing);
            }
            None => {
                target.insert(name, node);
            }
        }
    }
}

/// Like [`merge`], but a file meeting a directory anywhere below `path` is a conflict.
fn merge_checked<T>(
    incoming: Node<T>,
    target: &mut Node<T>,
    path: &NormalizedPath,
) -> Result<(), EntriesError> {
    match (incoming, target) {
        (Node::Directory(incoming_children), Node::Directory(target_children)) => {
            merge_children_checked(incoming_children, target_children, path)
        }
        (incoming, target) => {
            ensure!(
                incoming.is_file() && target.is_file(),
                PathConflictSnafu { path: path.clone() }
            );
            *target = incoming;
            Ok(())
        }
    }
}

fn merge_children_checked<T>(
    incoming: Children<T>,
    target: &mut Children<T>,
    parent: &NormalizedPath,
) -> Result<(), EntriesError> {
    for (name, node) in incoming {
        match target.get_mut(&name) {
            Some(existing) => merge_checked(node, existing, &parent.join(&name))?,
            None => {
                target.insert(name, node);
            }
        }
    }
    Ok(())
}

fn insert_flat_entry<T>(
    root: &mut Children<T>,
    path: NormalizedPath,
    node: Node<T>,
) -> Result<(), EntriesError> {
    if let Node::Directory(children) = &node {
        validate_children(children, &path)?;
    }

    let Some(name) = path.file_name() else {
        let Node::Directory(children) = node else {
            return RootNotDirectorySnafu.fail();
        };
        return merge_children_checked(children, root, &path);
    };

    let mut current = root;
    let mut walked = NormalizedPath::root();
    for segment in path.parent().segments() {
        walked = walked.join(segment);
        current = match current
            .entry(segment.to_string())
            .or_insert_with(Node::empty_directory)
        {
            Node::Directory(children) => children,
            Node::File(_) => {
                return TraverseFileSnafu {
                    path: path.clone(),
                    file: walked,
                }
                .fail();
            }
        };
    }

    match current.get_mut(name) {
        None => {
            current.insert(name.to_string(), node);
        }
        Some(existing) => merge_checked(node, existing, &path)?,
    }

    Ok(())
}

fn validate_children<T>(
    children: &Children<T>,
    parent: &NormalizedPath,
) -> Result<(), EntriesError> {
    for (name, node) in children {
        ensure!(
            !name.is_empty() && !name.contains('/'),
            InvalidNameSnafu {
                name: name.clone(),
                parent: parent.clone(),
            }
        );
        if let Node::Directory(grandchildren) = node {
            validate_children(grandchildren, &parent.join(name))?;
        }
    }
    Ok(())
}

#[derive(Debug, Snafu)]
pub enum EntriesError {
    #[snafu(display("Cannot place '{}' below file '{}'", path, file))]
    TraverseFileError {
        path: NormalizedPath,
        file: NormalizedPath,
    },
    #[snafu(display("Path '{}' is given both as a file and as a directory", path))]
    PathConflictError { path: NormalizedPath },
    #[snafu(display("The root '/' must be a directory"))]
    RootNotDirectoryError,
    #[snafu(display("Invalid entry name '{}' in '{}'", name, parent))]
    InvalidNameError {
        name: String,
        parent: NormalizedPath,
    },
}
