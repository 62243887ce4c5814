//! Command executor port.
//!
//! Abstracts launching an external program so orchestration can be tested
//! without spawning processes. The runtime crate provides the
//! `tokio::process` implementation.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::domain::{CommandInvocation, CommandOutput};
use crate::error::CommandError;

/// Port for running one external program to completion.
///
/// # Contract
///
/// - One call launches exactly one process; implementations never retry.
/// - stdout and stderr are captured separately.
/// - `Ok` is returned only for a zero exit status. A non-zero exit yields
///   [`CommandError::Failed`] carrying both streams.
/// - When `cancel` fires before the process exits, the process is
///   terminated and [`CommandError::Cancelled`] is returned.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(
        &self,
        invocation: CommandInvocation,
        cancel: CancellationToken,
    ) -> Result<CommandOutput, CommandError>;
}
