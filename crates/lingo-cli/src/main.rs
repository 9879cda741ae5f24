//! Main entry point for the `lingo` command.

use anyhow::Result;
use clap::Parser;
use lingo_cli::{run, Cli};
use lingo_common::{init_logging, LoggingConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LoggingConfig {
        level: cli.log_level.clone(),
        json_format: cli.json_logs,
        ..LoggingConfig::default()
    })?;

    let output = run(&cli)?;
    println!("{output}");
    Ok(())
}
