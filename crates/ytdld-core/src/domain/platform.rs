//! Operating system identification.

use std::fmt;

/// Identifier of the operating system the helper must run on.
///
/// Wraps the plain identifier (`macos`, `linux`, ...) so callers and tests can
/// inject a platform instead of reading it from the build target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Platform(String);

impl Platform {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The platform this binary was compiled for.
    pub fn current() -> Self {
        Self::new(std::env::consts::OS)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// macOS is reported as `macos` by Rust and `darwin` by its kernel.
    pub fn is_macos(&self) -> bool {
        matches!(self.0.as_str(), "macos" | "darwin")
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Platform {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}
