//! Error types for command execution, helper staging, and downloads.
//!
//! Each layer adds its own context and forwards the cause; nothing here is
//! retried. `DownloadError::kind` gives adapters a coarse classification for
//! logs and exit codes.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::domain::command::format_args_list;

/// Errors from launching or waiting on an external program.
///
/// Every variant carries the program and full argument list so a failure
/// can be diagnosed without re-running it.
#[derive(Debug, Error)]
pub enum CommandError {
    /// The process could not be started (missing binary, not executable, ...).
    #[error(
        "error when executing command [{program}] with args {args_list}: failed to start: {source}",
        args_list = format_args_list(.args)
    )]
    Spawn {
        program: String,
        args: Vec<String>,
        source: io::Error,
    },

    /// The process ran and exited unsuccessfully.
    #[error(
        "error when executing command [{program}] with args {args_list}: exit={exit_code:?}: stdout: [{out}] stderr: [{err}]",
        args_list = format_args_list(.args),
        out = .stdout.trim_end(),
        err = .stderr.trim_end()
    )]
    Failed {
        program: String,
        args: Vec<String>,
        exit_code: Option<i32>,
        stdout: String,
        stderr: String,
    },

    /// The caller cancelled while the process was running; it has been killed.
    #[error(
        "error when executing command [{program}] with args {args_list}: cancelled",
        args_list = format_args_list(.args)
    )]
    Cancelled { program: String, args: Vec<String> },

    /// Collecting the process output failed after it started.
    #[error(
        "error when executing command [{program}] with args {args_list}: {source}",
        args_list = format_args_list(.args)
    )]
    Io {
        program: String,
        args: Vec<String>,
        source: io::Error,
    },
}

impl CommandError {
    pub fn program(&self) -> &str {
        match self {
            Self::Spawn { program, .. }
            | Self::Failed { program, .. }
            | Self::Cancelled { program, .. }
            | Self::Io { program, .. } => program,
        }
    }

    pub fn args(&self) -> &[String] {
        match self {
            Self::Spawn { args, .. }
            | Self::Failed { args, .. }
            | Self::Cancelled { args, .. }
            | Self::Io { args, .. } => args,
        }
    }

    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}

/// Errors while writing the helper executable to disk.
#[derive(Debug, Error)]
pub enum StagingError {
    /// No helper exists for this operating system.
    #[error("unsupported OS: {0}")]
    UnsupportedPlatform(String),

    /// This build was compiled without a helper payload.
    #[error("no helper executable bundled for {platform}")]
    HelperNotBundled { platform: String },

    /// The temporary staging directory could not be created.
    #[error("{0}")]
    CreateTempDir(#[source] io::Error),

    /// The helper bytes could not be written; the staging directory was removed.
    #[error("{source}")]
    WriteHelper {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Errors from the download orchestrator.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// Blank URL or output path.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Staging(#[from] StagingError),

    #[error(transparent)]
    Command(#[from] CommandError),

    /// The helper exited cleanly but printed no file path.
    #[error("no output path returned by helper (output template: {template})")]
    NoOutputPath { template: String },
}

impl DownloadError {
    pub const fn kind(&self) -> DownloadErrorKind {
        match self {
            Self::InvalidRequest(_) => DownloadErrorKind::Usage,
            Self::Staging(StagingError::UnsupportedPlatform(_)) => DownloadErrorKind::Platform,
            Self::Staging(_) => DownloadErrorKind::Staging,
            Self::Command(_) => DownloadErrorKind::Execution,
            Self::NoOutputPath { .. } => DownloadErrorKind::Protocol,
        }
    }
}

/// Coarse classification of a download failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadErrorKind {
    Usage,
    Platform,
    Staging,
    Execution,
    Protocol,
}

impl DownloadErrorKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Usage => "usage",
            Self::Platform => "platform",
            Self::Staging => "staging",
            Self::Execution => "execution",
            Self::Protocol => "protocol",
        }
    }
}

impl fmt::Display for DownloadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
