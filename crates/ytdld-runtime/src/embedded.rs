//! Helper executables compiled into the binary by `build.rs`.

use ytdld_core::{HelperBinary, HelperSet, MACOS_HELPER_FILE_NAME};

static MACOS_HELPER: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/yt-dlp_macos"));

/// The helper table for this build.
pub fn embedded_helpers() -> HelperSet {
    HelperSet::new(HelperBinary::embedded(
        MACOS_HELPER_FILE_NAME.to_string(),
        MACOS_HELPER,
    ))
}

/// Whether this build carries a yt-dlp payload at all.
pub fn has_embedded_helper() -> bool {
    !MACOS_HELPER.is_empty()
}
