/*!
 * Reporting functionality for srcbundle
 *
 * Console banners around a run and the end-of-run summary, rendered with the
 * tabled library.
 */

use std::time::Duration;

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::Config;
use crate::utils::excluded_dirs_list;

/// Rule used around console banners
const CONSOLE_RULE_WIDTH: usize = 50;

/// Above this many files only the largest ones are listed
const FILES_TABLE_LIMIT: usize = 15;

/// Information about a file in the report
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileReportInfo {
    /// Number of lines in the file
    pub lines: usize,
    /// Number of characters in the file
    pub chars: usize,
}

/// Statistics for a bundling run
#[derive(Debug, Clone)]
pub struct ScanReport {
    /// Output file name
    pub output_file: String,
    /// Time taken to walk and write
    pub duration: Duration,
    /// Number of files written to the bundle
    pub files_included: usize,
    /// Number of files skipped after a read failure
    pub files_failed: usize,
    /// Total number of lines
    pub total_lines: usize,
    /// Total number of characters
    pub total_chars: usize,
    /// Details for each file
    pub file_details: Vec<(String, FileReportInfo)>,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for bundling runs
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Format a number with human-readable units
    pub fn format_number(&self, num: usize) -> String {
        if num >= 1_000_000 {
            format!("{:.1}M", num as f64 / 1_000_000.0)
        } else if num >= 1_000 {
            format!("{:.1}K", num as f64 / 1_000.0)
        } else {
            num.to_string()
        }
    }

    /// Print the banner shown before traversal starts
    pub fn print_start_banner(&self, config: &Config) {
        println!("{}", self.start_banner(config));
    }

    /// Banner shown before traversal starts
    pub fn start_banner(&self, config: &Config) -> String {
        let rule = "=".repeat(CONSOLE_RULE_WIDTH);
        format!(
            "{rule}\n📂 Project source bundler\n{rule}\n📍 Root: {}\n🚫 Skipped directories: {}",
            config.root_dir.display(),
            excluded_dirs_list(),
        )
    }

    /// Generate a report string based on run statistics
    pub fn generate_report(&self, report: &ScanReport) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(report),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, report: &ScanReport) {
        println!("\n{}", self.generate_report(report));
    }

    // Shorten long paths from the left, keeping whole trailing segments
    fn format_path(&self, path: &str, max_len: usize) -> String {
        if path.chars().count() <= max_len {
            return path.to_string();
        }

        let separator = std::path::MAIN_SEPARATOR;
        let mut kept: Vec<&str> = Vec::new();
        let mut current_len = 3; // "..."

        for part in path.rsplit(separator) {
            let part_len = part.chars().count() + 1;
            if current_len + part_len > max_len {
                break;
            }
            kept.push(part);
            current_len += part_len;
        }

        if kept.is_empty() {
            let tail: String = path
                .chars()
                .rev()
                .take(max_len.saturating_sub(3))
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            return format!("...{}", tail);
        }

        let mut result = String::from("...");
        for part in kept.iter().rev() {
            result.push(separator);
            result.push_str(part);
        }
        result
    }

    fn styled(mut table: Table) -> String {
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));
        table.to_string()
    }

    fn create_summary_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Metric")]
            key: String,

            #[tabled(rename = "Value")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "📂 Output File".to_string(),
                value: report.output_file.clone(),
            },
            SummaryRow {
                key: "⏱️ Process Time".to_string(),
                value: format!("{:.4?}", report.duration),
            },
            SummaryRow {
                key: "📄 Files Bundled".to_string(),
                value: self.format_number(report.files_included),
            },
        ];

        if report.files_failed > 0 {
            rows.push(SummaryRow {
                key: "⚠️ Files Skipped".to_string(),
                value: self.format_number(report.files_failed),
            });
        }

        rows.push(SummaryRow {
            key: "📝 Total Lines".to_string(),
            value: self.format_number(report.total_lines),
        });
        rows.push(SummaryRow {
            key: "📦 LLM Tokens".to_string(),
            value: format!(
                "{} tokens (estimated)",
                self.format_number(report.total_chars / 4)
            ),
        });

        Self::styled(Table::new(rows))
    }

    fn create_files_table(&self, report: &ScanReport) -> String {
        #[derive(Tabled)]
        struct FileRow {
            #[tabled(rename = "File Path")]
            path: String,

            #[tabled(rename = "Lines")]
            lines: String,

            #[tabled(rename = "Est. Tokens")]
            tokens: String,
        }

        let mut files: Vec<_> = report.file_details.iter().collect();
        if files.len() > FILES_TABLE_LIMIT {
            files.sort_by(|(_, a), (_, b)| b.chars.cmp(&a.chars));
            files.truncate(10);
        }

        let rows: Vec<FileRow> = files
            .iter()
            .map(|(path, info)| FileRow {
                path: self.format_path(path, 60),
                lines: self.format_number(info.lines),
                tokens: self.format_number(info.chars / 4),
            })
            .collect();

        Self::styled(Table::new(rows))
    }

    fn generate_console_report(&self, report: &ScanReport) -> String {
        let files_title = if report.file_details.len() > FILES_TABLE_LIMIT {
            "📋  TOP 10 LARGEST FILES BY CHARACTER COUNT  📋"
        } else {
            "📋  BUNDLED FILES"
        };
        let rule = "=".repeat(CONSOLE_RULE_WIDTH);

        format!(
            "{}\n{}\n\n{}\n\n{rule}\n🎉 Export complete! Bundled {} source files.\n📄 Saved to: {}\n{rule}",
            files_title,
            self.create_files_table(report),
            self.create_summary_table(report),
            report.files_included,
            report.output_file,
        )
    }
}
