//! CLI adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, prelude::*};

use crate::domain::{AppError, BatchReport, DeliveryOutcome, DocumentReport};

#[derive(Parser)]
#[command(name = "mdkindle")]
#[command(version)]
#[command(
    about = "Convert Markdown documents to EPUB and deliver them to a Kindle over SMTP",
    long_about = None
)]
struct Cli {
    /// Path to the delivery configuration file
    #[arg(short, long, global = true, default_value = "config.json")]
    config: PathBuf,

    /// Raise log verbosity (-v, -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert and send a single Markdown document
    #[clap(visible_alias = "s")]
    Send {
        /// Path to the document to deliver
        document: PathBuf,
    },
    /// Convert and send every Markdown document under a directory
    #[clap(visible_alias = "sc")]
    Scan {
        /// Directory to scan (defaults to the configured md_directory)
        directory: Option<PathBuf>,
    },
    /// Convert and send the Markdown documents changed since the last commit
    #[clap(visible_alias = "ch")]
    Changed {
        /// Repository directory to query (defaults to the configured md_directory)
        directory: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result: Result<(), AppError> = match cli.command {
        Commands::Send { document } => {
            crate::send_document(&cli.config, &document).map(|report| print_report(&report))
        }
        Commands::Scan { directory } => {
            crate::send_tree(&cli.config, directory.as_deref()).map(|batch| print_batch(&batch))
        }
        Commands::Changed { directory } => {
            crate::send_changed(&cli.config, directory.as_deref()).map(|batch| print_batch(&batch))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Per-document failures are reported on stdout; only startup errors reach
/// the process exit code.
fn print_report(report: &DocumentReport) {
    match &report.outcome {
        DeliveryOutcome::Delivered => {
            println!("  ✅ Sent \"{}\": {}", report.title, report.document.display());
        }
        DeliveryOutcome::RenderFailed(details) => {
            println!(
                "  ❌ Conversion failed for {}: {}",
                report.document.display(),
                details
            );
        }
        DeliveryOutcome::SendFailed(details) => {
            println!(
                "  ❌ Delivery failed for {}: {}",
                report.document.display(),
                details
            );
        }
    }
}

fn print_batch(batch: &BatchReport) {
    if batch.is_empty() {
        println!("No Markdown documents selected; nothing to send.");
        return;
    }
    for report in &batch.reports {
        print_report(report);
    }
    match &batch.revision {
        Some(revision) => println!(
            "Delivered: {}/{} document(s) [Commit: {}]",
            batch.delivered_count(),
            batch.reports.len(),
            revision
        ),
        None => println!(
            "Delivered: {}/{} document(s)",
            batch.delivered_count(),
            batch.reports.len()
        ),
    }
}

fn init_tracing(verbosity: u8) {
    let default_filter = match verbosity {
        0 => "mdkindle=info",
        1 => "mdkindle=debug",
        _ => "mdkindle=trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
