//! Operating-system filesystem adapter.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use ytdld_core::FileSystem;

/// [`FileSystem`] backed by `std::fs` and `tempfile`.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn create_temp_dir(&self, parent: Option<PathBuf>, prefix: &str) -> io::Result<PathBuf> {
        let parent = parent.unwrap_or_else(std::env::temp_dir);
        let dir = tempfile::Builder::new().prefix(prefix).tempdir_in(parent)?;
        // The caller decides when the directory goes away.
        Ok(dir.keep())
    }

    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()> {
        fs::write(path, contents)?;

        #[cfg(unix)]
        fs::set_permissions(path, fs::Permissions::from_mode(mode))?;

        #[cfg(not(unix))]
        let _ = mode;

        Ok(())
    }

    fn remove_all(&self, path: &Path) -> io::Result<()> {
        fs::remove_dir_all(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_temp_dir_is_unique_and_prefixed() {
        let parent = tempfile::tempdir().unwrap();
        let fs = OsFileSystem::new();

        let first = fs
            .create_temp_dir(Some(parent.path().to_path_buf()), "ytdld-")
            .unwrap();
        let second = fs
            .create_temp_dir(Some(parent.path().to_path_buf()), "ytdld-")
            .unwrap();

        assert_ne!(first, second);
        for dir in [&first, &second] {
            assert!(dir.is_dir());
            assert_eq!(dir.parent(), Some(parent.path()));
            let name = dir.file_name().unwrap().to_string_lossy();
            assert!(name.starts_with("ytdld-"));
        }
    }

    #[test]
    fn test_create_temp_dir_missing_parent_fails() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("does-not-exist");
        let err = OsFileSystem::new()
            .create_temp_dir(Some(missing), "ytdld-")
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_write_file_and_remove_all() {
        let parent = tempfile::tempdir().unwrap();
        let fs = OsFileSystem::new();
        let dir = fs
            .create_temp_dir(Some(parent.path().to_path_buf()), "ytdld-")
            .unwrap();
        let path = fs.join_path(&dir, "yt-dlp_macos");

        fs.write_file(&path, b"payload", 0o755).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"payload");

        #[cfg(unix)]
        {
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o755);
        }

        fs.remove_all(&dir).unwrap();
        assert!(!dir.exists());
    }

    #[test]
    fn test_write_into_missing_dir_fails() {
        let parent = tempfile::tempdir().unwrap();
        let path = parent.path().join("missing").join("yt-dlp_macos");
        assert!(OsFileSystem::new().write_file(&path, b"x", 0o755).is_err());
    }
}
