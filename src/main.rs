//! verbump - CLI entry point.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verbump::store::bump_version_file;
use verbump::version::BumpKind;

/// Bump the version stored in a plain-text VERSION file.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump the version stored in a plain-text VERSION file")]
#[command(version)]
struct Cli {
    /// Which field to bump: major, minor, patch, or build
    kind: BumpKind,

    /// Path to the version file
    #[arg(short = 'f', long = "file", default_value = "VERSION")]
    file: PathBuf,

    /// Dry run - print the next version without writing it back
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let next = bump_version_file(&cli.file, cli.kind, cli.dry_run).with_context(|| {
        format!(
            "Failed to bump the {} version in {}",
            cli.kind,
            cli.file.display()
        )
    })?;

    println!("{}", next);

    Ok(())
}

/// Initialize tracing output. RUST_LOG overrides the -v flag when set.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();
}
