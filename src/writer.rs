/*!
 * Bundle writer implementation for srcbundle
 */

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use chrono::{Local, NaiveDateTime};
use indicatif::ProgressBar;

use crate::config::Config;
use crate::error::{BundleError, Result};
use crate::report::FileReportInfo;
use crate::scanner::Scanner;

/// Width of the banner rules
const BANNER_WIDTH: usize = 50;

/// Width of the per-file delimiter rules
const DELIMITER_WIDTH: usize = 80;

/// Banner timestamp layout
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Statistics gathered while writing a bundle
#[derive(Debug, Clone, Default)]
pub struct BundleStatistics {
    /// Number of files written to the bundle
    pub files_included: usize,
    /// Number of eligible files that could not be read
    pub files_failed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each included file, in discovery order
    pub file_details: Vec<(String, FileReportInfo)>,
}

impl BundleStatistics {
    fn record(&mut self, path: String, content: &str) {
        let info = FileReportInfo {
            lines: content.lines().count(),
            chars: content.chars().count(),
        };
        self.files_included += 1;
        self.total_lines += info.lines;
        self.total_chars += info.chars;
        self.file_details.push((path, info));
    }
}

/// Writer for the bundle file
pub struct BundleWriter {
    /// Writer configuration
    config: Config,
}

impl BundleWriter {
    /// Create a new bundle writer
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Write the banner and every eligible file the scanner yields
    ///
    /// Unreadable files are reported and skipped. Failing to create or write
    /// the bundle itself aborts with whatever was already flushed left on disk.
    pub fn write(&self, scanner: &Scanner) -> Result<BundleStatistics> {
        let file =
            File::create(&self.config.output_file).map_err(|source| BundleError::OutputOpen {
                path: self.config.output_file.clone(),
                source,
            })?;
        let mut out = BufWriter::new(file);

        write_banner(
            &mut out,
            &self.config.project_name,
            &Local::now().naive_local(),
        )?;

        let mut stats = BundleStatistics::default();
        let progress = &scanner.progress;

        for source in scanner.files() {
            let display_path = source.display_path();
            progress.set_message(format!("Current file: {}", display_path));

            match scanner.read_source(&source) {
                Ok(content) => {
                    write_file_block(&mut out, &source.relative_path, &content)?;
                    announce(progress, format!("✅ Added: {}", display_path));
                    stats.record(display_path, &content);
                }
                Err(e) if e.is_recoverable() => {
                    progress.suspend(|| {
                        log::warn!("⚠️ Read failed (skipped): {} - {}", display_path, e)
                    });
                    stats.files_failed += 1;
                }
                Err(e) => return Err(e),
            }

            progress.inc(1);
        }

        out.flush()?;
        Ok(stats)
    }
}

// The bar swallows println when hidden, e.g. when stderr is not a terminal
fn announce(progress: &ProgressBar, message: String) {
    if progress.is_hidden() {
        println!("{}", message);
    } else {
        progress.println(message);
    }
}

/// Write the fixed bundle header
pub fn write_banner<W: Write>(
    out: &mut W,
    project_name: &str,
    exported_at: &NaiveDateTime,
) -> io::Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    let title = if project_name.is_empty() {
        "PROJECT SOURCE CODE".to_string()
    } else {
        format!("{} PROJECT SOURCE CODE", project_name)
    };

    writeln!(out, "{}", rule)?;
    writeln!(out, "   {}", title)?;
    writeln!(out, "   Exported at: {}", exported_at.format(TIMESTAMP_FORMAT))?;
    writeln!(out, "{}", rule)?;
    writeln!(out)?;
    Ok(())
}

/// Write one delimited file block: header, raw content, one trailing newline
pub fn write_file_block<W: Write>(
    out: &mut W,
    relative_path: &Path,
    content: &str,
) -> io::Result<()> {
    let rule = "=".repeat(DELIMITER_WIDTH);

    write!(out, "\n{}\n", rule)?;
    writeln!(out, " FILE: {}", relative_path.display())?;
    write!(out, "{}\n\n", rule)?;
    out.write_all(content.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
