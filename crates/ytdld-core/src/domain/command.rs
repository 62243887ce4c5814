//! Command invocation and captured output value types.
//!
//! These carry no process handles; an executor turns an invocation into
//! exactly one child process and hands back the captured streams.

use std::path::{Path, PathBuf};

/// A single external program launch: what to run and how.
///
/// Constructed per call and consumed by the executor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandInvocation {
    /// Absolute or resolvable path of the program.
    pub program: PathBuf,
    /// Ordered argument list, passed verbatim.
    pub args: Vec<String>,
    /// Working directory for the child (inherits ours when `None`).
    pub working_dir: Option<PathBuf>,
    /// Extra environment variables layered on top of the inherited environment.
    pub env: Vec<(String, String)>,
}

impl CommandInvocation {
    /// Create an invocation with no arguments.
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            working_dir: None,
            env: Vec::new(),
        }
    }

    /// Append one argument.
    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments in order.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the child in `dir`.
    #[must_use]
    pub fn with_working_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.working_dir = Some(dir.into());
        self
    }

    /// Set an environment variable for the child.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Program path as text, for diagnostics.
    pub fn program_display(&self) -> String {
        self.program.display().to_string()
    }
}

/// Captured result of one finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    /// Exit code, `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
}

impl CommandOutput {
    /// Build from raw stream bytes, decoding lossily as UTF-8.
    pub fn from_raw(stdout: &[u8], stderr: &[u8], exit_code: Option<i32>) -> Self {
        Self {
            stdout: String::from_utf8_lossy(stdout).into_owned(),
            stderr: String::from_utf8_lossy(stderr).into_owned(),
            exit_code,
        }
    }

    pub const fn success(&self) -> bool {
        matches!(self.exit_code, Some(0))
    }
}

/// Render an argument list as `[a b c]` for error messages.
pub(crate) fn format_args_list(args: &[String]) -> String {
    format!("[{}]", args.join(" "))
}
