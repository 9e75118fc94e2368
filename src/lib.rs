/*!
 * srcbundle - Concatenate a project's source files into one text bundle
 *
 * This library walks a project directory, prunes dependency, VCS and build
 * folders, and writes every eligible source file into a single delimited text
 * file suitable for code review or as context for Large Language Models.
 */

pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod types;
pub mod utils;
pub mod writer;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{BundleError, Result};
pub use report::{FileReportInfo, ReportFormat, Reporter, ScanReport};
pub use scanner::Scanner;
pub use types::SourceFile;
pub use utils::{count_files, DEFAULT_OUTPUT_FILE};
pub use writer::{BundleStatistics, BundleWriter};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
