//! migraplan - inventory a directory tree ahead of a document migration.
//!
//! Usage:
//!   migraplan [PATH]               Build the plan for PATH (default: .)
//!   migraplan -o DIR [PATH]        Write the artifacts into DIR
//!   migraplan --help               Show help

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

use migraplan::{MigrationConfig, PlanReport};

#[derive(Parser)]
#[command(
    name = "migraplan",
    version,
    about = "Inventory a local directory tree ahead of a document-store migration",
    long_about = "migraplan walks a directory tree, classifies the files eligible for\n\
                  migration, flags the ones an operator should review first, and writes\n\
                  the plan as plan_migracion.csv and plan_migracion.json."
)]
struct Cli {
    /// Root directory to scan (defaults to the current directory)
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Directory the artifacts are written into
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Number of scan threads (0 = auto-detect)
    #[arg(long, default_value = "0")]
    threads: usize,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let config = MigrationConfig::builder().threads(cli.threads).build()?;

    eprintln!("Scanning {}...", cli.path.display());
    let report = migraplan::run(&cli.path, &config, &cli.output_dir)?;

    print_summary(&cli.path, &report);

    Ok(())
}

/// Print the human-readable completion summary.
fn print_summary(root: &PathBuf, report: &PlanReport) {
    println!();
    println!("{}", "─".repeat(60));
    println!(" Migration plan for {}", root.display());
    println!(
        " {} files scanned, {:.2} MB total",
        report.scanned,
        to_mb(report.total_bytes)
    );
    println!(
        " {} supported for migration ({:.2} MB)",
        report.supported,
        to_mb(report.supported_bytes)
    );
    if report.skipped > 0 {
        println!(" {} unreadable file(s) skipped", report.skipped);
    }
    if report.cancelled {
        println!(" Scan cancelled; the plan covers files gathered so far");
    }

    if report.advisories.has_advisories() {
        println!();
        println!(
            " Review before migrating (over {}):",
            format_size(report.advisories.threshold_bytes)
        );
        for advisory in &report.advisories.advisories {
            println!(
                "   {} ({})",
                advisory.path.display(),
                format_size(advisory.size_bytes)
            );
        }
    }

    println!();
    for artifact in [&report.tabular, &report.structured] {
        match &artifact.result {
            Ok(()) => println!(" Wrote {}", artifact.path.display()),
            Err(err) => println!(" Export failed: {err}"),
        }
    }

    if !report.warnings.is_empty() {
        println!();
        println!(" {} warning(s) during scan", report.warnings.len());
    }
    println!("{}", "─".repeat(60));
}

fn to_mb(bytes: u64) -> f64 {
    bytes as f64 / (1024.0 * 1024.0)
}

/// Format size in human-readable form.
fn format_size(bytes: u64) -> String {
    humansize::format_size(bytes, humansize::BINARY)
}
