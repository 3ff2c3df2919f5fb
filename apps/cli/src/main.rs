//! `lumber` — wipe the application log directory.
//!
//! Prompts for confirmation (unless `--force`), then recursively deletes
//! the configured log directory. Failure is reported through printed
//! diagnostics and the process exit code.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Delete the application log directory",
    long_about = None
)]
struct Args {
    /// Log directory (default: './logs')
    #[arg(long, default_value = "./logs")]
    logdir: PathBuf,

    /// Delete the directory without asking for permission
    #[arg(long, short)]
    force: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();
    tracing::debug!(logdir = %args.logdir.display(), force = args.force, "parsed arguments");

    if !args.force && !confirmed(&args.logdir) {
        println!("Aborting action");
        return ExitCode::FAILURE;
    }

    println!("Cleaning logs...");
    if let Err(error) = clean_logs(&args.logdir) {
        eprintln!("Failed to clean logs: {error:#}");
        return ExitCode::FAILURE;
    }
    println!("Cleaned logs successfully.");
    ExitCode::SUCCESS
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();
}

/// Asks for a yes/no confirmation on stdin. Anything other than a
/// case-insensitive `y` counts as a no.
fn confirmed(logdir: &Path) -> bool {
    println!("Are you sure you want to delete {}? (Y/N)", logdir.display());
    let _ = io::stdout().flush();

    let mut line = String::new();
    match io::stdin().read_line(&mut line) {
        Ok(_) => line.trim().eq_ignore_ascii_case("y"),
        Err(_) => false,
    }
}

/// Recursively deletes `logdir` if it is a directory; prints a diagnostic
/// and leaves the filesystem unchanged otherwise.
fn clean_logs(logdir: &Path) -> Result<()> {
    if !logdir.is_dir() {
        println!("Path does not denote a valid directory...");
        return Ok(());
    }

    // Sweep the contents first so survivors are reported per entry, then
    // drop the emptied root.
    lumber_fs::clear_directory(logdir)
        .with_context(|| format!("clearing {}", logdir.display()))?;
    fs::remove_dir(logdir).with_context(|| format!("removing {}", logdir.display()))?;
    Ok(())
}
