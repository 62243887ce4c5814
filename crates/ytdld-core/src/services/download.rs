//! Download orchestration.
//!
//! Stages the helper, runs it once with the output template, and reads the
//! final file path back from its stdout.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use super::staging::HelperStager;
use crate::config::DownloaderConfig;
use crate::domain::{CommandInvocation, DownloadRequest, StagedHelper, parse_final_path};
use crate::error::DownloadError;
use crate::ports::CommandExecutor;

/// Asks the helper to print the final path after any post-processing move.
pub const PRINT_FINAL_PATH: &str = "after_move:filepath";

/// Video download service.
#[derive(Clone)]
pub struct VideoDownloadService {
    executor: Arc<dyn CommandExecutor>,
    stager: HelperStager,
    config: DownloaderConfig,
}

impl VideoDownloadService {
    pub fn new(
        executor: Arc<dyn CommandExecutor>,
        stager: HelperStager,
        config: DownloaderConfig,
    ) -> Self {
        // A staging parent set on the config wins; otherwise the stager keeps its own.
        let stager = match &config.temp_parent {
            Some(dir) => stager.with_temp_parent(Some(dir.clone())),
            None => stager,
        };
        Self {
            executor,
            stager,
            config,
        }
    }

    /// Download `request.url` to `<request.output_prefix>.<ext>`.
    ///
    /// Returns the path the helper reported, trimmed. The file itself is not
    /// checked. `cancel` terminates the helper if it fires mid-download.
    pub async fn download_video(
        &self,
        request: &DownloadRequest,
        cancel: CancellationToken,
    ) -> Result<String, DownloadError> {
        request.validate()?;

        let staged = self.stager.stage()?;
        let result = self.run_helper(&staged, request, cancel).await;

        if self.config.keep_helper {
            debug!(path = %staged.executable().display(), "Keeping staged helper");
        } else {
            self.stager.discard(&staged);
        }

        let path = result?;
        info!(path = %path, "Helper reported final path");
        Ok(path)
    }

    async fn run_helper(
        &self,
        staged: &StagedHelper,
        request: &DownloadRequest,
        cancel: CancellationToken,
    ) -> Result<String, DownloadError> {
        let template = request.output_template();
        let invocation = build_invocation(staged, request);

        debug!(
            program = %invocation.program_display(),
            args = ?invocation.args,
            "Running helper"
        );

        let output = self.executor.execute(invocation, cancel).await?;

        parse_final_path(&output.stdout).ok_or_else(|| DownloadError::NoOutputPath {
            template: template.to_string(),
        })
    }
}

/// `<helper> -o <template> --print after_move:filepath --no-progress <url>`
fn build_invocation(staged: &StagedHelper, request: &DownloadRequest) -> CommandInvocation {
    CommandInvocation::new(staged.executable()).args([
        "-o",
        request.output_template().as_str(),
        "--print",
        PRINT_FINAL_PATH,
        "--no-progress",
        request.url.as_str(),
    ])
}
