//! Command-line adapter for ytdld.
//!
//! `main.rs` parses arguments with [`parse_args`], sets up logging, and hands
//! off to [`run_to_exit_code`]; everything else is wired in [`bootstrap`].

#![deny(unsafe_code)]

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use error::CliError;
pub use parser::Cli;

use std::ffi::OsString;

use clap::Parser;
use tracing::{error, info};

/// Parse arguments, or return the exit code to stop with.
///
/// `--help` and `--version` print and yield 0. Any other parse failure is
/// logged at error level and yields 1.
pub fn parse_args<I, T>(args: I) -> Result<Cli, u8>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Cli::try_parse_from(args) {
        Ok(cli) => Ok(cli),
        Err(e) if !e.use_stderr() => match e.print() {
            Ok(()) => Err(0),
            Err(io) => {
                logging::init(false);
                error!(error = %io, "failed to print help");
                Err(1)
            }
        },
        Err(e) => {
            logging::init(false);
            let message = e.render().to_string();
            error!(error = %message.trim_end(), "invalid arguments");
            Err(1)
        }
    }
}

/// Run one download and map the outcome to a process exit code.
pub async fn run_to_exit_code(cli: &Cli) -> u8 {
    match run(cli).await {
        Ok(_) => 0,
        Err(e) => {
            error!(kind = e.kind(), error = %e, "download failed");
            e.exit_code()
        }
    }
}

/// Run one download end-to-end for parsed arguments.
///
/// Logs "completed" whether or not the download succeeded.
pub async fn run(cli: &Cli) -> Result<String, CliError> {
    let result = download(cli).await;
    info!("completed");
    result
}

async fn download(cli: &Cli) -> Result<String, CliError> {
    let args = handlers::download::DownloadArgs::from_cli(cli)?;
    let ctx = bootstrap(CliConfig::from_cli(cli));
    handlers::download::execute(&ctx, args).await
}
