//! Core domain for ytdld: downloading a video by running a bundled yt-dlp
//! helper.
//!
//! - `domain` - value types (invocations, outputs, platforms, helpers)
//! - `ports` - traits for process execution and filesystem access
//! - `services` - helper staging and download orchestration
//! - `error` - the error taxonomy shared by every layer

pub mod config;
pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

// Re-export commonly used types for convenience
pub use config::{DownloaderConfig, HELPER_MODE, STAGING_DIR_PREFIX};
pub use domain::{
    CommandInvocation, CommandOutput, DownloadRequest, HelperBinary, HelperSet,
    MACOS_HELPER_FILE_NAME, OutputTemplate, Platform, StagedHelper, parse_final_path,
};
pub use error::{CommandError, DownloadError, DownloadErrorKind, StagingError};
pub use ports::{CommandExecutor, FileSystem};
pub use services::{HelperStager, PRINT_FINAL_PATH, VideoDownloadService};

// Re-exported so adapters share one cancellation type with the ports.
pub use tokio_util::sync::CancellationToken;
