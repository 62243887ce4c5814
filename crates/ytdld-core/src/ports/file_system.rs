//! Filesystem capability port.
//!
//! Helper staging needs exactly four operations; nothing else in the core
//! touches the filesystem.

use std::io;
use std::path::{Path, PathBuf};

/// Filesystem operations used to stage the helper executable.
#[cfg_attr(test, mockall::automock)]
pub trait FileSystem: Send + Sync {
    /// Create a new, uniquely named directory whose name starts with `prefix`.
    ///
    /// `parent` of `None` means the system temporary directory.
    fn create_temp_dir(&self, parent: Option<PathBuf>, prefix: &str) -> io::Result<PathBuf>;

    /// Write `contents` to `path` and set its permission bits to `mode`.
    fn write_file(&self, path: &Path, contents: &[u8], mode: u32) -> io::Result<()>;

    /// Join a file name onto a directory using platform path rules.
    fn join_path(&self, base: &Path, name: &str) -> PathBuf {
        base.join(name)
    }

    /// Remove `path` and everything below it.
    fn remove_all(&self, path: &Path) -> io::Result<()>;
}
