//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Logging setup
//! - Turning interrupt signals into cancellation

use std::process::ExitCode;

use clap::Parser;

mod cli;
mod shutdown;
mod telemetry;

#[tokio::main]
async fn main() -> ExitCode {
    let cmd = cli::Cli::parse();
    telemetry::init(cmd.log_format);

    match cmd.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(err = %format!("{err:#}"), "weather exited with an error");
            ExitCode::FAILURE
        }
    }
}
