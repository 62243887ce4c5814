//! Download command handler.

use tracing::info;
use ytdld_core::DownloadRequest;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::parser::Cli;

/// Validated positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArgs {
    pub url: String,
    pub output: String,
}

impl DownloadArgs {
    /// Trim both positionals and reject blank ones.
    pub fn from_cli(cli: &Cli) -> Result<Self, CliError> {
        let url = cli.url.trim();
        if url.is_empty() {
            return Err(CliError::Arguments("video url is required".to_string()));
        }
        let output = cli.output.trim();
        if output.is_empty() {
            return Err(CliError::Arguments("output file is required".to_string()));
        }
        Ok(Self {
            url: url.to_string(),
            output: output.to_string(),
        })
    }
}

/// Execute the download and return the saved file path.
pub async fn execute(ctx: &CliContext, args: DownloadArgs) -> Result<String, CliError> {
    info!(url = %args.url, output = %args.output, "downloading...");

    let request = DownloadRequest::new(args.url, args.output);
    let path = ctx
        .downloader()
        .download_video(&request, ctx.cancel_token())
        .await?;

    info!(output = %path, "video downloaded successfully");
    Ok(path)
}
