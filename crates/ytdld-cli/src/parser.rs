//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// Download a video with the bundled yt-dlp and print where it was saved.
#[derive(Parser, Debug)]
#[command(name = "ytdld")]
#[command(about = "Download a video with the bundled yt-dlp helper")]
#[command(version)]
pub struct Cli {
    /// URL of the video to download
    #[arg(value_name = "VIDEO_URL")]
    pub url: String,

    /// Output file path without extension (the extension is chosen by yt-dlp)
    #[arg(value_name = "OUTPUT_FILE")]
    pub output: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Keep the staged yt-dlp executable after the download finishes
    #[arg(long = "keep-helper", env = "YTDLD_KEEP_HELPER")]
    pub keep_helper: bool,

    /// Directory to stage the yt-dlp executable in (defaults to the system temp dir)
    #[arg(long = "temp-dir", env = "YTDLD_TEMP_DIR", value_name = "DIR")]
    pub temp_dir: Option<PathBuf>,

    /// Abort the download after this many seconds
    #[arg(long = "timeout", env = "YTDLD_TIMEOUT_SECS", value_name = "SECS")]
    pub timeout_secs: Option<u64>,
}
