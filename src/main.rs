mod application;
mod cli;
mod data;
mod domain;
mod error;
mod infra;
mod ml;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("lang_detect=info")),
        )
        .init();

    let cli = Cli::parse();
    cli.run()
}
