/*!
 * Configuration handling for srcbundle
 */

use std::collections::HashSet;
use std::env;
use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::ensure;
use crate::error::{BundleError, Result};
use crate::utils::{project_label, DEFAULT_OUTPUT_FILE, EXCLUDED_FILES};

/// Command-line arguments for srcbundle
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "srcbundle",
    version = env!("CARGO_PKG_VERSION"),
    about = "Concatenate a project's source files into a single text bundle",
    long_about = "Walks a project directory, skips dependency caches, VCS metadata and build output, and writes every JavaScript/TypeScript/JSON source file into one text file with a path header per file."
)]
pub struct Args {
    /// Project root to bundle (defaults to the directory containing this executable)
    pub root: Option<String>,

    /// Bundle file name, resolved against the root when relative
    #[clap(short, long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output: String,

    /// Label written in the bundle banner (defaults to the root directory name)
    #[clap(long)]
    pub project_name: Option<String>,

    /// Exit without waiting for Enter
    #[clap(long)]
    pub no_pause: bool,
}

impl Args {
    /// Whether to wait for acknowledgment before exiting
    ///
    /// Only interactive launches pause; piped or scripted runs never block.
    pub fn should_pause(&self) -> bool {
        !self.no_pause && io::stdin().is_terminal()
    }
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Directory to bundle
    pub root_dir: PathBuf,

    /// Bundle file path
    pub output_file: PathBuf,

    /// Label for the banner
    pub project_name: String,

    /// File names skipped regardless of extension
    pub excluded_files: HashSet<String>,
}

impl Config {
    /// Create a configuration for `root_dir` writing to `output` under it
    pub fn new(root_dir: impl Into<PathBuf>, output: impl AsRef<Path>) -> Self {
        let root_dir = root_dir.into();
        let output_file = resolve_output(&root_dir, output.as_ref());
        let project_name = default_project_name(&root_dir);

        let excluded_files: HashSet<String> =
            EXCLUDED_FILES.iter().map(|name| name.to_string()).collect();

        Self {
            root_dir,
            output_file,
            project_name,
            excluded_files,
        }
    }

    /// Create configuration from command-line arguments
    pub fn from_args(args: Args) -> Result<Self> {
        let root_dir = match args.root {
            Some(root) => PathBuf::from(root),
            None => executable_dir()?,
        };

        let mut config = Self::new(root_dir, &args.output);
        if let Some(name) = args.project_name {
            config.project_name = name;
        }

        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.root_dir.is_dir(),
            Config,
            "Target directory not found: {}",
            self.root_dir.display()
        );

        if let Some(parent) = self.output_file.parent() {
            ensure!(
                parent.as_os_str().is_empty() || parent.is_dir(),
                Config,
                "Output directory not found: {}",
                parent.display()
            );
        }

        Ok(())
    }

    /// Output file name as shown in the summary
    pub fn output_name(&self) -> String {
        self.output_file
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| self.output_file.display().to_string())
    }
}

fn resolve_output(root_dir: &Path, output: &Path) -> PathBuf {
    if output.is_absolute() {
        output.to_path_buf()
    } else {
        root_dir.join(output)
    }
}

fn default_project_name(root_dir: &Path) -> String {
    let name = root_dir
        .canonicalize()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        .or_else(|| {
            root_dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
        })
        .unwrap_or_default();

    project_label(&name)
}

fn executable_dir() -> Result<PathBuf> {
    let exe = env::current_exe()?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| BundleError::Config(format!("Cannot locate directory of {}", exe.display())))
}
