//! barb - LibInsult API client
//!
//! CLI entry point.

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]

use std::process::ExitCode;

use clap::Parser;

use barb::cli::{Cli, insult};
use barb::core::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose {
        logging::LogLevel::Debug
    } else {
        cli.log_level
            .as_deref()
            .and_then(logging::LogLevel::from_arg)
            .or_else(logging::parse_log_level_from_env)
            .unwrap_or_default()
    };
    let log_format = if cli.json_output {
        logging::LogFormat::Json
    } else {
        logging::parse_log_format_from_env().unwrap_or_default()
    };
    logging::init(log_level, log_format);

    match insult::execute(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code() as u8)
        }
    }
}
