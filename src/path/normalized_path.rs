use derive_more::{Deref, Display};

const SEPARATOR: char = '/';
const ROOT: &str = "/";

/// Canonical form of a path inside the mock tree.
///
/// Always absolute, never contains an empty segment and never ends with a separator unless it
/// is the root itself. `.` and `..` are kept as ordinary names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Deref)]
pub struct NormalizedPath(String);

/// Collapses runs of separators, strips a trailing separator and ensures a leading one.
pub fn normalize(path: impl AsRef<str>) -> NormalizedPath {
    let segments = path
        .as_ref()
        .split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();

    if segments.is_empty() {
        return NormalizedPath::root();
    }

    NormalizedPath(format!("{ROOT}{}", segments.join(ROOT)))
}

impl NormalizedPath {
    pub fn root() -> Self {
        NormalizedPath(ROOT.to_string())
    }

    pub fn is_root(&self) -> bool {
        self.0 == ROOT
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name segments from the root downwards. The root itself has none.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEPARATOR).filter(|segment| !segment.is_empty())
    }

    /// The containing directory. The root is its own parent.
    pub fn parent(&self) -> NormalizedPath {
        match self.0.rsplit_once(SEPARATOR) {
            Some((parent, _)) if !parent.is_empty() => NormalizedPath(parent.to_string()),
            _ => NormalizedPath::root(),
        }
    }

    /// The final segment, or `None` for the root.
    pub fn file_name(&self) -> Option<&str> {
        self.segments().last()
    }

    pub fn join(&self, name: impl AsRef<str>) -> NormalizedPath {
        normalize(format!("{}{SEPARATOR}{}", self.0, name.as_ref()))
    }
}

impl AsRef<str> for NormalizedPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedPath {
    fn from(path: &str) -> Self {
        normalize(path)
    }
}

impl From<String> for NormalizedPath {
    fn from(path: String) -> Self {
        normalize(path)
    }
}

impl PartialEq<str> for NormalizedPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for NormalizedPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
