//! Orchestrator configuration.

use std::path::PathBuf;

/// Prefix for staging directory names.
pub const STAGING_DIR_PREFIX: &str = "ytdld-";

/// Permission bits for the staged helper.
pub const HELPER_MODE: u32 = 0o755;

/// Tunables for a download run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DownloaderConfig {
    /// Parent for staging directories (system temp dir when `None`).
    pub temp_parent: Option<PathBuf>,
    /// Leave the staged helper on disk after the helper exits.
    pub keep_helper: bool,
}

impl DownloaderConfig {
    #[must_use]
    pub fn with_temp_parent(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_parent = Some(dir.into());
        self
    }

    #[must_use]
    pub const fn with_keep_helper(mut self, keep: bool) -> Self {
        self.keep_helper = keep;
        self
    }
}
