//! CLI entry point.
//!
//! Parses arguments, sets up logging, and runs one download. Every failure
//! is logged at error level and exits with code 1.

use std::process::ExitCode;

use ytdld_cli::{logging, parse_args, run_to_exit_code};

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    // Load environment variables before clap reads its env fallbacks.
    // A missing .env is fine; a malformed one is not.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }

    let cli = match parse_args(std::env::args_os()) {
        Ok(cli) => cli,
        Err(code) => return Ok(ExitCode::from(code)),
    };

    logging::init(cli.verbose);

    Ok(ExitCode::from(run_to_exit_code(&cli).await))
}
