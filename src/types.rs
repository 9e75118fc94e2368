/*!
 * Core data types for srcbundle
 */

use std::path::{Path, PathBuf};

/// An eligible file discovered during traversal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Path used to open the file
    pub path: PathBuf,
    /// Path relative to the root directory
    pub relative_path: PathBuf,
}

impl SourceFile {
    /// Create a source file entry, computing the path relative to `root`
    pub fn new(path: &Path, root: &Path) -> Self {
        let relative_path = path
            .strip_prefix(root)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| path.to_path_buf());

        Self {
            path: path.to_path_buf(),
            relative_path,
        }
    }

    /// Relative path rendered with the platform's separator
    pub fn display_path(&self) -> String {
        self.relative_path.display().to_string()
    }
}
