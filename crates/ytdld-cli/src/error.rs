//! CLI-specific error types and exit code mapping.

use thiserror::Error;
use ytdld_core::DownloadError;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Missing or blank positional argument.
    #[error("{0}")]
    Arguments(String),

    /// The download itself failed.
    #[error("failed to download video: {0}")]
    Download(#[from] DownloadError),
}

impl CliError {
    /// Map error to the process exit code.
    ///
    /// Every failure exits with 1; the log line carries the detail.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) | Self::Download(_) => 1,
        }
    }

    /// Short category for structured logs.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Arguments(_) => "usage",
            Self::Download(err) => err.kind().as_str(),
        }
    }
}
