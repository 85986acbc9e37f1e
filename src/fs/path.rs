//! Remote path values.

use std::fmt;

/// A path on the remote filesystem, e.g. `/user/hadoop/data.csv`.
///
/// The string is carried as given; validation happens when a request is built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Path {
    path: String,
}

impl Path {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether the path starts at the filesystem root.
    pub fn is_absolute(&self) -> bool {
        self.path.starts_with('/')
    }

    /// Append a child name, such as the `pathSuffix` of a listing entry.
    ///
    /// An empty child returns the path unchanged (GETFILESTATUS reports an
    /// empty suffix for the path itself).
    pub fn join(&self, child: &str) -> Path {
        let child = child.trim_start_matches('/');
        if child.is_empty() {
            return self.clone();
        }
        let base = self.path.trim_end_matches('/');
        Path::new(format!("{}/{}", base, child))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}

impl From<&str> for Path {
    fn from(path: &str) -> Self {
        Path::new(path)
    }
}

impl From<String> for Path {
    fn from(path: String) -> Self {
        Path::new(path)
    }
}

impl AsRef<str> for Path {
    fn as_ref(&self) -> &str {
        &self.path
    }
}
