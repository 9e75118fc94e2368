/*!
 * Utility functions and fixed filter sets for srcbundle
 */

use std::collections::HashSet;
use std::path::Path;

use once_cell::sync::Lazy;
use walkdir::WalkDir;

use crate::scanner::Scanner;

/// Default bundle file name, written into the root directory
pub const DEFAULT_OUTPUT_FILE: &str = "all_project_code.txt";

/// Directory names that are never descended into
pub static EXCLUDED_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Dependencies
        "node_modules",
        // Version Control
        ".git",
        // Build & platform output
        ".expo",
        "android",
        "ios",
        "assets",
        // Bytecode cache
        "__pycache__",
    ])
});

/// File names that are skipped regardless of extension
pub static EXCLUDED_FILES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    HashSet::from([
        // Lockfiles
        "package-lock.json",
        "yarn.lock",
        ".gitignore",
        // The tool and its output
        "srcbundle",
        "srcbundle.exe",
        DEFAULT_OUTPUT_FILE,
    ])
});

/// Extensions (without the dot, lower-case) that gate inclusion
pub static ALLOWED_EXTENSIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| HashSet::from(["js", "jsx", "ts", "tsx", "json"]));

/// Check whether a directory name is pruned from traversal
pub fn is_excluded_dir(name: &str) -> bool {
    EXCLUDED_DIRS.contains(name)
}

/// Check a path's final extension against the allowed set, ignoring case
pub fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| {
            ALLOWED_EXTENSIONS.contains(ext.to_lowercase().as_str())
        })
}

/// Derive the banner label from a directory name: `my-app` becomes `MY_APP`
pub fn project_label(dir_name: &str) -> String {
    dir_name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Count eligible files for progress tracking
///
/// Walk errors are left for the bundling pass to report.
pub fn count_files(scanner: &Scanner) -> u64 {
    let mut count = 0;

    for entry in WalkDir::new(&scanner.config().root_dir)
        .follow_links(false)
        .into_iter()
        .filter_entry(|e| !scanner.is_pruned(e))
        .filter_map(Result::ok)
    {
        if !entry.path().is_dir() && scanner.is_eligible(entry.path()) {
            count += 1;
        }
    }

    count
}

/// Sorted, comma-separated list of the pruned directory names
pub fn excluded_dirs_list() -> String {
    let mut names: Vec<&str> = EXCLUDED_DIRS.iter().copied().collect();
    names.sort_unstable();
    names.join(", ")
}
