use std::path::{Path, PathBuf};

use crate::path::{NormalizedPath, normalize};

/// Anything that can address a node in the mock tree.
pub trait ToNormalizedPath {
    fn to_normalized_path(&self) -> NormalizedPath;
}

impl ToNormalizedPath for NormalizedPath {
    fn to_normalized_path(&self) -> NormalizedPath {
        self.clone()
    }
}

impl ToNormalizedPath for str {
    fn to_normalized_path(&self) -> NormalizedPath {
        normalize(self)
    }
}

impl ToNormalizedPath for String {
    fn to_normalized_path(&self) -> NormalizedPath {
        normalize(self)
    }
}

impl ToNormalizedPath for Path {
    fn to_normalized_path(&self) -> NormalizedPath {
        normalize(self.to_string_lossy())
    }
}

impl ToNormalizedPath for PathBuf {
    fn to_normalized_path(&self) -> NormalizedPath {
        self.as_path().to_normalized_path()
    }
}

impl<P: ToNormalizedPath + ?Sized> ToNormalizedPath for &P {
    fn to_normalized_path(&self) -> NormalizedPath {
        (**self).to_normalized_path()
    }
}
