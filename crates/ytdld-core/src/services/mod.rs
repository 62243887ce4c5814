//! Core services.
//!
//! Services depend only on ports; adapters inject the concrete executor and
//! filesystem at the composition root.

pub mod download;
pub mod staging;

pub use download::{PRINT_FINAL_PATH, VideoDownloadService};
pub use staging::HelperStager;
