//! Helper staging service.
//!
//! Writes the platform's helper executable into a fresh temporary directory
//! so it can be launched by path. Every call stages a new copy; nothing is
//! shared between runs.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::config::{HELPER_MODE, STAGING_DIR_PREFIX};
use crate::domain::{HelperSet, Platform, StagedHelper};
use crate::error::StagingError;
use crate::ports::FileSystem;

/// Stages helper executables through a [`FileSystem`].
#[derive(Clone)]
pub struct HelperStager {
    fs: Arc<dyn FileSystem>,
    helpers: HelperSet,
    platform: Platform,
    temp_parent: Option<PathBuf>,
}

impl HelperStager {
    pub fn new(fs: Arc<dyn FileSystem>, helpers: HelperSet, platform: Platform) -> Self {
        Self {
            fs,
            helpers,
            platform,
            temp_parent: None,
        }
    }

    /// Create staging directories under `dir` instead of the system temp dir.
    #[must_use]
    pub fn with_temp_parent(mut self, dir: Option<PathBuf>) -> Self {
        self.temp_parent = dir;
        self
    }

    /// Write the helper for this platform to a new temporary directory.
    ///
    /// Platform and payload checks happen before any filesystem call. If the
    /// write fails, the new directory is removed once (a removal failure is
    /// logged, not returned) and the write error is surfaced.
    pub fn stage(&self) -> Result<StagedHelper, StagingError> {
        let helper = self.helpers.select(&self.platform)?;
        if helper.is_empty() {
            return Err(StagingError::HelperNotBundled {
                platform: self.platform.to_string(),
            });
        }

        let dir = self
            .fs
            .create_temp_dir(self.temp_parent.clone(), STAGING_DIR_PREFIX)
            .map_err(StagingError::CreateTempDir)?;

        let executable = self.fs.join_path(&dir, helper.file_name());

        if let Err(source) = self.fs.write_file(&executable, helper.bytes(), HELPER_MODE) {
            if let Err(e) = self.fs.remove_all(&dir) {
                warn!(dir = %dir.display(), error = %e, "Failed to remove staging directory");
            }
            return Err(StagingError::WriteHelper {
                path: executable,
                source,
            });
        }

        debug!(
            path = %executable.display(),
            bytes = helper.bytes().len(),
            "Staged helper executable"
        );

        Ok(StagedHelper::new(dir, executable))
    }

    /// Remove a staged helper and its directory. Failures are logged only.
    pub fn discard(&self, staged: &StagedHelper) {
        match self.fs.remove_all(staged.dir()) {
            Ok(()) => debug!(dir = %staged.dir().display(), "Removed staged helper"),
            Err(e) => warn!(
                dir = %staged.dir().display(),
                error = %e,
                "Failed to remove staged helper"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HelperBinary, MACOS_HELPER_FILE_NAME};
    use crate::ports::MockFileSystem;
    use std::io;
    use std::path::Path;

    const HELPER_BYTES: &[u8] = b"#!/bin/sh\necho /tmp/out.mp4\n";

    fn helpers() -> HelperSet {
        HelperSet::new(HelperBinary::new(MACOS_HELPER_FILE_NAME, HELPER_BYTES))
    }

    fn stager(fs: MockFileSystem, platform: &str) -> HelperStager {
        HelperStager::new(Arc::new(fs), helpers(), Platform::from(platform))
    }

    fn expect_temp_dir(fs: &mut MockFileSystem, dir: &'static str) {
        fs.expect_create_temp_dir()
            .withf(|parent: &Option<PathBuf>, prefix: &str| {
                parent.is_none() && prefix == STAGING_DIR_PREFIX
            })
            .times(1)
            .returning(move |_, _| Ok(PathBuf::from(dir)));
    }

    fn expect_join(fs: &mut MockFileSystem) {
        fs.expect_join_path()
            .times(1)
            .returning(|base: &Path, name: &str| base.join(name));
    }

    #[test]
    fn test_stage_writes_executable_helper() {
        let mut fs = MockFileSystem::new();
        expect_temp_dir(&mut fs, "/tmp/ytdld-abc");
        expect_join(&mut fs);
        fs.expect_write_file()
            .withf(|path: &Path, contents: &[u8], mode: &u32| {
                path == Path::new("/tmp/ytdld-abc/yt-dlp_macos")
                    && contents == HELPER_BYTES
                    && *mode == 0o755
            })
            .times(1)
            .returning(|_, _, _| Ok(()));
        fs.expect_remove_all().times(0);

        let staged = stager(fs, "darwin").stage().unwrap();
        assert_eq!(staged.dir(), Path::new("/tmp/ytdld-abc"));
        assert_eq!(
            staged.executable(),
            Path::new("/tmp/ytdld-abc/yt-dlp_macos")
        );
    }

    #[test]
    fn test_stage_uses_configured_parent() {
        let mut fs = MockFileSystem::new();
        fs.expect_create_temp_dir()
            .withf(|parent: &Option<PathBuf>, _prefix: &str| {
                parent.as_deref() == Some(Path::new("/var/tmp/ytdld"))
            })
            .times(1)
            .returning(|_, _| Ok(PathBuf::from("/var/tmp/ytdld/ytdld-1")));
        expect_join(&mut fs);
        fs.expect_write_file().times(1).returning(|_, _, _| Ok(()));

        let staged = stager(fs, "macos")
            .with_temp_parent(Some(PathBuf::from("/var/tmp/ytdld")))
            .stage()
            .unwrap();
        assert_eq!(staged.dir(), Path::new("/var/tmp/ytdld/ytdld-1"));
    }

    #[test]
    fn test_unsupported_platform_touches_nothing() {
        for name in ["linux", "windows", "freebsd", "ios", "android", ""] {
            // No expectations: any filesystem call fails the test.
            let err = stager(MockFileSystem::new(), name).stage().unwrap_err();
            assert!(matches!(err, StagingError::UnsupportedPlatform(_)));
            assert_eq!(err.to_string(), format!("unsupported OS: {name}"));
        }
    }

    #[test]
    fn test_empty_payload_is_not_bundled() {
        let stager = HelperStager::new(
            Arc::new(MockFileSystem::new()),
            HelperSet::new(HelperBinary::new(MACOS_HELPER_FILE_NAME, Vec::new())),
            Platform::from("macos"),
        );
        let err = stager.stage().unwrap_err();
        assert_eq!(err.to_string(), "no helper executable bundled for macos");
    }

    #[test]
    fn test_temp_dir_failure_propagates_without_write() {
        let mut fs = MockFileSystem::new();
        fs.expect_create_temp_dir()
            .times(1)
            .returning(|_, _| Err(io::Error::other("disk full")));
        fs.expect_write_file().times(0);
        fs.expect_remove_all().times(0);

        let err = stager(fs, "darwin").stage().unwrap_err();
        assert!(matches!(err, StagingError::CreateTempDir(_)));
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_write_failure_removes_dir_once_and_returns_write_error() {
        let mut fs = MockFileSystem::new();
        expect_temp_dir(&mut fs, "/tmp/ytdld-xyz");
        expect_join(&mut fs);
        fs.expect_write_file()
            .times(1)
            .returning(|_, _, _| Err(io::Error::other("WriteFile failed")));
        fs.expect_remove_all()
            .withf(|path: &Path| path == Path::new("/tmp/ytdld-xyz"))
            .times(1)
            .returning(|_| Err(io::Error::other("RemoveAll failed")));

        let err = stager(fs, "darwin").stage().unwrap_err();
        assert_eq!(err.to_string(), "WriteFile failed");
        match err {
            StagingError::WriteHelper { path, .. } => {
                assert_eq!(path, PathBuf::from("/tmp/ytdld-xyz/yt-dlp_macos"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_discard_swallows_removal_error() {
        let mut fs = MockFileSystem::new();
        fs.expect_remove_all()
            .times(1)
            .returning(|_| Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied")));

        let staged = StagedHelper::new(
            PathBuf::from("/tmp/ytdld-1"),
            PathBuf::from("/tmp/ytdld-1/yt-dlp_macos"),
        );
        stager(fs, "darwin").discard(&staged);
    }
}
