//! CLI bootstrap - the composition root.
//!
//! The only place where the runtime adapters are wired into the core
//! download service. Handlers receive the composed [`CliContext`].

use std::time::Duration;

use tracing::{debug, warn};
use ytdld_core::{CancellationToken, DownloaderConfig, Platform, VideoDownloadService};

use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Staging and cleanup settings for the download service.
    pub downloader: DownloaderConfig,
    /// Abort the download after this long.
    pub timeout: Option<Duration>,
}

impl CliConfig {
    pub fn from_cli(cli: &Cli) -> Self {
        let mut downloader = DownloaderConfig::default().with_keep_helper(cli.keep_helper);
        if let Some(dir) = &cli.temp_dir {
            downloader = downloader.with_temp_parent(dir);
        }
        Self {
            downloader,
            timeout: cli.timeout_secs.map(Duration::from_secs),
        }
    }
}

/// Fully composed context for CLI commands.
pub struct CliContext {
    /// The download service.
    pub downloader: VideoDownloadService,
    /// Cancelled on Ctrl+C or when the timeout elapses.
    pub cancel: CancellationToken,
}

impl CliContext {
    pub const fn new(downloader: VideoDownloadService, cancel: CancellationToken) -> Self {
        Self { downloader, cancel }
    }

    pub const fn downloader(&self) -> &VideoDownloadService {
        &self.downloader
    }

    pub fn cancel_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}

/// Compose the CLI context.
///
/// Must be called from within a tokio runtime: a background task cancels
/// the context's token on Ctrl+C or once `config.timeout` elapses.
pub fn bootstrap(config: CliConfig) -> CliContext {
    let cancel = CancellationToken::new();
    spawn_cancel_watcher(cancel.clone(), config.timeout);

    if Platform::current().is_macos() && !ytdld_runtime::has_embedded_helper() {
        warn!("this build carries no yt-dlp helper; downloads will fail");
    }

    let downloader = ytdld_runtime::default_service(config.downloader);
    CliContext::new(downloader, cancel)
}

fn spawn_cancel_watcher(cancel: CancellationToken, timeout: Option<Duration>) {
    tokio::spawn(async move {
        let deadline = async {
            match timeout {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            () = cancel.cancelled() => return,
            result = tokio::signal::ctrl_c() => match result {
                Ok(()) => warn!("interrupted, cancelling download"),
                Err(e) => {
                    debug!(error = %e, "could not listen for Ctrl+C");
                    return;
                }
            },
            () = deadline => warn!(?timeout, "timed out, cancelling download"),
        }
        cancel.cancel();
    });
}
