//! weldfile - weld directory trees into one annotated text file.
//!
//! Usage:
//!   weld SRC [SRC...]            Collect roots into combined_output.txt
//!   weld SRC -o bundle.txt       Choose the destination
//!   weld --manifest weld.toml    Load roots and options from a manifest
//!   weld --help                  Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;

use weldfile_collect::{CollectProgress, Collector};
use weldfile_core::{CollectConfig, CollectReport};

#[derive(Parser)]
#[command(
    name = "weldfile",
    version,
    about = "Weld directory trees into one annotated text file",
    long_about = "weldfile walks each given root directory and concatenates every \
                  file it finds into a single output file, one `--- FILE: <path> ---` \
                  header block per file. Unreadable files are recorded inline and \
                  never abort the run."
)]
struct Cli {
    /// Root directories to collect, in order
    roots: Vec<PathBuf>,

    /// Output file, created or truncated (default: combined_output.txt)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Load roots and options from a TOML manifest; explicit flags override it
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Follow symbolic links while walking
    #[arg(long)]
    follow_symlinks: bool,

    /// Maximum depth to descend (default: unlimited)
    #[arg(long)]
    max_depth: Option<u32>,

    /// Keep OS directory order instead of sorting entries by name
    #[arg(long)]
    no_sort: bool,

    /// Reproduce the historical double header before error placeholders
    #[arg(long)]
    compat_headers: bool,

    /// Suppress per-root progress output
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.quiet);

    let config = build_config(&cli)?;
    let collector = Collector::new();
    let progress = if cli.quiet {
        None
    } else {
        Some(spawn_progress_printer(collector.subscribe()))
    };

    let outcome = collector.run(&config).context("Collection failed");

    // Dropping the collector closes the channel and lets the printer drain.
    drop(collector);
    if let Some(handle) = progress {
        let _ = handle.join();
    }

    print_summary(&outcome?);
    Ok(())
}

/// Render progress updates to stderr until the collector's channel closes.
fn spawn_progress_printer(
    mut rx: broadcast::Receiver<CollectProgress>,
) -> std::thread::JoinHandle<()> {
    std::thread::spawn(move || loop {
        match rx.blocking_recv() {
            Ok(progress) => eprintln!(
                " {} file(s) so far, {} ({:.0} files/s, {}/s)",
                progress.files_written,
                format_size(progress.bytes_out),
                progress.files_per_second(),
                format_size(progress.bytes_per_second() as u64),
            ),
            Err(broadcast::error::RecvError::Lagged(_)) => continue,
            Err(broadcast::error::RecvError::Closed) => break,
        }
    })
}

/// Merge manifest values (if any) with command-line overrides.
fn build_config(cli: &Cli) -> Result<CollectConfig> {
    let mut config = match &cli.manifest {
        Some(path) => CollectConfig::from_toml_file(path)?,
        None => CollectConfig::default(),
    };

    if !cli.roots.is_empty() {
        config.roots = cli.roots.clone();
    }
    if let Some(output) = &cli.output {
        config.output = output.clone();
    }
    if cli.follow_symlinks {
        config.follow_symlinks = true;
    }
    if let Some(depth) = cli.max_depth {
        config.max_depth = Some(depth);
    }
    if cli.no_sort {
        config.sort_entries = false;
    }
    if cli.compat_headers {
        config.compat_headers = true;
    }

    Ok(config)
}

fn init_tracing(quiet: bool) {
    let default_filter = if quiet { "warn" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(report: &CollectReport) {
    println!("\nDone. Output written to: {}", report.output_path.display());
    println!(
        " {} file(s), {} unreadable, {} in {:.2}s",
        report.stats.files_written,
        report.stats.read_errors,
        format_size(report.stats.bytes_out),
        report.duration.as_secs_f64()
    );
    if report.has_warnings() {
        println!(" {} warning(s) during traversal", report.warnings.len());
    }
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
