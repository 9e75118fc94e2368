/*!
 * Directory traversal and file selection
 */

use std::cell::Cell;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use indicatif::ProgressBar;
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::{BundleError, Result};
use crate::types::SourceFile;
use crate::utils::{has_allowed_extension, is_excluded_dir};

/// Scanner for eligible source files
pub struct Scanner {
    /// Scanner configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
    /// Walk errors reported so far
    walk_errors: Cell<usize>,
}

impl Scanner {
    /// Create a new scanner
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self {
            config,
            progress,
            walk_errors: Cell::new(0),
        }
    }

    /// Scanner configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Number of directory walk errors reported by [`Scanner::files`]
    pub fn walk_errors(&self) -> usize {
        self.walk_errors.get()
    }

    /// Walk the root directory depth-first, yielding eligible files in
    /// discovery order
    pub fn files(&self) -> impl Iterator<Item = SourceFile> + '_ {
        let root = self.config.root_dir.as_path();

        WalkDir::new(root)
            .follow_links(false)
            .into_iter()
            .filter_entry(move |entry| !self.is_pruned(entry))
            .filter_map(move |result| match result {
                Ok(entry) => Some(entry),
                Err(e) => {
                    self.walk_errors.set(self.walk_errors.get() + 1);
                    self.progress
                        .suspend(|| log::warn!("Error walking directory: {}", e));
                    None
                }
            })
            .filter(|entry| !entry.file_type().is_dir() && !entry.path().is_dir())
            .filter(move |entry| self.is_eligible(entry.path()))
            .map(move |entry| SourceFile::new(entry.path(), root))
    }

    /// Read a file's full text
    pub fn read_source(&self, file: &SourceFile) -> Result<String> {
        let bytes = fs::read(&file.path).map_err(|source| BundleError::Read {
            path: file.relative_path.clone(),
            source,
        })?;

        String::from_utf8(bytes).map_err(|source| BundleError::Decode {
            path: file.relative_path.clone(),
            source,
        })
    }

    /// Check if a file passes the name exclusion and extension gate
    pub fn is_eligible(&self, path: &Path) -> bool {
        let Some(file_name) = path.file_name() else {
            return false;
        };

        if self
            .config
            .excluded_files
            .contains(&*file_name.to_string_lossy())
        {
            log::debug!("Skipping excluded file {}", path.display());
            return false;
        }

        if !has_allowed_extension(path) {
            return false;
        }

        !self.is_output_file(path)
    }

    /// Check whether `path` is the bundle being written, however it is spelled
    fn is_output_file(&self, path: &Path) -> bool {
        let output = self.config.output_file.as_path();
        if path == output {
            return true;
        }
        if path.file_name() != output.file_name() {
            return false;
        }

        match (fs::canonicalize(path), fs::canonicalize(output)) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }

    /// Excluded directories are cut before descent; the root is never cut
    pub fn is_pruned(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return false;
        }

        let pruned = entry
            .file_name()
            .to_str()
            .map_or(false, is_excluded_dir);
        if pruned {
            log::debug!("Pruning {}", entry.path().display());
        }
        pruned
    }
}
