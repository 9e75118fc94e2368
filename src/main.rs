/*!
 * Command-line interface for srcbundle
 */

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use clap::Parser;
use env_logger::Env;
use indicatif::{ProgressBar, ProgressStyle};

use srcbundle::config::{Args, Config};
use srcbundle::error::Result;
use srcbundle::report::{ReportFormat, Reporter, ScanReport};
use srcbundle::scanner::Scanner;
use srcbundle::utils::count_files;
use srcbundle::writer::BundleWriter;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    // Parse command line arguments
    let args = Args::parse();
    let pause = args.should_pause();

    let code = match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\n❌ Fatal error: {}", e);
            ExitCode::FAILURE
        }
    };

    if pause {
        wait_for_enter();
    }

    code
}

fn run(args: Args) -> Result<()> {
    let config = Config::from_args(args)?;
    config.validate()?;

    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_start_banner(&config);

    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    progress.enable_steady_tick(Duration::from_millis(100));
    progress.set_prefix("📊 Bundling");

    let scanner = Scanner::new(config.clone(), Arc::new(progress.clone()));
    progress.set_length(count_files(&scanner));

    let writer = BundleWriter::new(config.clone());

    let start_time = Instant::now();
    let result = writer.write(&scanner);
    let duration = start_time.elapsed();

    progress.finish_and_clear();
    let stats = result?;

    let report = ScanReport {
        output_file: config.output_name(),
        duration,
        files_included: stats.files_included,
        files_failed: stats.files_failed,
        total_lines: stats.total_lines,
        total_chars: stats.total_chars,
        file_details: stats.file_details,
    };
    reporter.print_report(&report);

    Ok(())
}

fn wait_for_enter() {
    print!("\n[Press Enter to close this window...]");
    let _ = io::stdout().flush();
    let mut line = String::new();
    let _ = io::stdin().lock().read_line(&mut line);
}
