//! Domain value types.

pub mod command;
pub mod download;
pub mod helper;
pub mod platform;

pub use command::{CommandInvocation, CommandOutput};
pub use download::{DownloadRequest, EXTENSION_PLACEHOLDER, OutputTemplate, parse_final_path};
pub use helper::{HelperBinary, HelperSet, MACOS_HELPER_FILE_NAME, StagedHelper};
pub use platform::Platform;
