//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the core expects from infrastructure. They
//! use only domain types; concrete process and filesystem access lives in
//! `ytdld-runtime`.

pub mod command_executor;
pub mod file_system;

pub use command_executor::CommandExecutor;
pub use file_system::FileSystem;

#[cfg(test)]
pub use command_executor::MockCommandExecutor;
#[cfg(test)]
pub use file_system::MockFileSystem;
