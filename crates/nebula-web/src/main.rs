//! NebulaStack site
//!
//! Serves the marketing page and records contact inquiries in memory.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use nebula_web::cli::Cli;
use nebula_web::{commands, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    commands::run(cli).await?;
    Ok(())
}
