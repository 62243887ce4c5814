//! Runtime adapters for ytdld.
//!
//! Concrete implementations of the core ports:
//! - [`TokioCommandExecutor`] runs the helper with `tokio::process`
//! - [`OsFileSystem`] stages it with `std::fs` and `tempfile`
//! - [`embedded_helpers`] exposes the yt-dlp payload bundled at build time
//!
//! [`download_video`] wires them together with default settings.

#![deny(unsafe_code)]

mod embedded;
mod executor;
mod fs;

use std::sync::Arc;

use ytdld_core::{
    CancellationToken, DownloadError, DownloadRequest, DownloaderConfig, HelperStager, Platform,
    VideoDownloadService,
};

pub use embedded::{embedded_helpers, has_embedded_helper};
pub use executor::TokioCommandExecutor;
pub use fs::OsFileSystem;

/// Build a download service for the current platform using the OS adapters.
pub fn default_service(config: DownloaderConfig) -> VideoDownloadService {
    let stager = HelperStager::new(
        Arc::new(OsFileSystem::new()),
        embedded_helpers(),
        Platform::current(),
    );
    VideoDownloadService::new(Arc::new(TokioCommandExecutor::new()), stager, config)
}

/// Download a video from `url` to `<output_prefix>.<ext>`.
///
/// Only macOS is supported. Returns the final path reported by yt-dlp.
pub async fn download_video(
    url: &str,
    output_prefix: &str,
    cancel: CancellationToken,
) -> Result<String, DownloadError> {
    default_service(DownloaderConfig::default())
        .download_video(&DownloadRequest::new(url, output_prefix), cancel)
        .await
}
