//! Build script for ytdld-runtime.
//!
//! Copies the yt-dlp macOS executable into `OUT_DIR` so it can be embedded
//! with `include_bytes!`. The source is `YTDLD_HELPER_BINARY` if set, else
//! `bin/yt-dlp_macos` next to this file. Non-macOS targets, and builds where
//! neither exists, embed an empty payload.

use std::env;
use std::fs;
use std::path::PathBuf;

const HELPER_FILE_NAME: &str = "yt-dlp_macos";

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();

    let source = env::var_os("YTDLD_HELPER_BINARY")
        .map_or_else(|| manifest_dir.join("bin").join(HELPER_FILE_NAME), PathBuf::from);
    let dest = out_dir.join(HELPER_FILE_NAME);

    if target_os == "macos" && source.is_file() {
        fs::copy(&source, &dest).unwrap();
    } else {
        if target_os == "macos" {
            println!(
                "cargo:warning=yt-dlp helper not found at {}; building without a bundled helper",
                source.display()
            );
        }
        fs::write(&dest, b"").unwrap();
    }

    println!("cargo:rerun-if-env-changed=YTDLD_HELPER_BINARY");
    // Cargo also reruns when a watched path that was missing appears.
    println!("cargo:rerun-if-changed={}", source.display());
    println!("cargo:rerun-if-changed=build.rs");
}
