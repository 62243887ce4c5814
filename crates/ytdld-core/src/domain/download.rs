//! Download request, output template, and helper output parsing.

use std::fmt;

use crate::error::DownloadError;

/// Placeholder yt-dlp replaces with the detected file extension.
pub const EXTENSION_PLACEHOLDER: &str = "%(ext)s";

/// What to download and where to put it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Source URL, passed through to the helper unvalidated.
    pub url: String,
    /// Output path without extension.
    pub output_prefix: String,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, output_prefix: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            output_prefix: output_prefix.into(),
        }
    }

    /// Reject blank fields before any work is done.
    pub fn validate(&self) -> Result<(), DownloadError> {
        if self.url.trim().is_empty() {
            return Err(DownloadError::InvalidRequest(
                "video url is required".to_string(),
            ));
        }
        if self.output_prefix.trim().is_empty() {
            return Err(DownloadError::InvalidRequest(
                "output file is required".to_string(),
            ));
        }
        Ok(())
    }

    pub fn output_template(&self) -> OutputTemplate {
        OutputTemplate::from_prefix(&self.output_prefix)
    }
}

/// Output path handed to the helper: `<prefix>.%(ext)s`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputTemplate(String);

impl OutputTemplate {
    pub fn from_prefix(prefix: &str) -> Self {
        Self(format!("{prefix}.{EXTENSION_PLACEHOLDER}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OutputTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extract the final file path from the helper's stdout.
///
/// The path is the last non-blank line, trimmed at both ends. Whitespace
/// inside the path is kept.
pub fn parse_final_path(stdout: &str) -> Option<String> {
    stdout
        .lines()
        .map(str::trim)
        .rfind(|line| !line.is_empty())
        .map(str::to_string)
}
