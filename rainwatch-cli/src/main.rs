//! Binary crate for the `rainwatch` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging and environment bootstrap
//! - Mapping run outcomes onto the process exit code
//!
//! The job is meant to be fired by an external scheduler (cron or similar):
//! a failed run exits non-zero and the scheduler decides whether to invoke
//! it again. Nothing is persisted between runs.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
