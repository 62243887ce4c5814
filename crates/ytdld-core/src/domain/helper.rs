//! Helper executable payloads and their per-platform selection.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use super::platform::Platform;
use crate::error::StagingError;

/// File name the macOS yt-dlp build is staged under.
pub const MACOS_HELPER_FILE_NAME: &str = "yt-dlp_macos";

/// An executable payload bundled with the program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperBinary {
    file_name: String,
    bytes: Cow<'static, [u8]>,
}

impl HelperBinary {
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Cow<'static, [u8]>>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes: bytes.into(),
        }
    }

    /// Wrap bytes compiled into the binary without copying them.
    pub const fn embedded(file_name: String, bytes: &'static [u8]) -> Self {
        Self {
            file_name,
            bytes: Cow::Borrowed(bytes),
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// A build without a bundled helper carries an empty payload.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Selection table from platform to helper payload.
///
/// This is the single place a platform is checked; supporting another OS
/// means adding a field and a match arm here.
#[derive(Debug, Clone)]
pub struct HelperSet {
    macos: HelperBinary,
}

impl HelperSet {
    pub const fn new(macos: HelperBinary) -> Self {
        Self { macos }
    }

    /// Pick the helper for `platform`.
    pub fn select(&self, platform: &Platform) -> Result<&HelperBinary, StagingError> {
        if platform.is_macos() {
            Ok(&self.macos)
        } else {
            Err(StagingError::UnsupportedPlatform(platform.to_string()))
        }
    }
}

/// A helper written to a fresh temporary directory, ready to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedHelper {
    dir: PathBuf,
    executable: PathBuf,
}

impl StagedHelper {
    pub const fn new(dir: PathBuf, executable: PathBuf) -> Self {
        Self { dir, executable }
    }

    /// The staging directory owned by this helper.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }
}
