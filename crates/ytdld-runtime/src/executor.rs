//! `tokio::process` implementation of the command executor port.

use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use ytdld_core::{CommandError, CommandExecutor, CommandInvocation, CommandOutput};

/// Runs commands as child processes, capturing stdout and stderr separately.
///
/// The child is spawned with `kill_on_drop`, so abandoning the wait on
/// cancellation terminates it.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioCommandExecutor;

impl TokioCommandExecutor {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandExecutor for TokioCommandExecutor {
    async fn execute(
        &self,
        invocation: CommandInvocation,
        cancel: CancellationToken,
    ) -> Result<CommandOutput, CommandError> {
        let program = invocation.program_display();

        if cancel.is_cancelled() {
            return Err(CommandError::Cancelled {
                program,
                args: invocation.args,
            });
        }

        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args)
            .envs(invocation.env.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(dir) = &invocation.working_dir {
            cmd.current_dir(dir);
        }

        let child = match cmd.spawn() {
            Ok(child) => child,
            Err(source) => {
                return Err(CommandError::Spawn {
                    program,
                    args: invocation.args,
                    source,
                });
            }
        };
        debug!(program = %program, pid = ?child.id(), "Spawned process");

        let output = tokio::select! {
            () = cancel.cancelled() => {
                warn!(program = %program, "Cancelled, killing process");
                return Err(CommandError::Cancelled {
                    program,
                    args: invocation.args,
                });
            }
            result = child.wait_with_output() => match result {
                Ok(output) => output,
                Err(source) => {
                    return Err(CommandError::Io {
                        program,
                        args: invocation.args,
                        source,
                    });
                }
            },
        };

        let output = CommandOutput::from_raw(&output.stdout, &output.stderr, output.status.code());
        debug!(program = %program, exit_code = ?output.exit_code, "Process exited");

        if output.success() {
            Ok(output)
        } else {
            Err(CommandError::Failed {
                program,
                args: invocation.args,
                exit_code: output.exit_code,
                stdout: output.stdout,
                stderr: output.stderr,
            })
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn sh(script: &str) -> CommandInvocation {
        CommandInvocation::new("sh").args(["-c", script])
    }

    #[tokio::test]
    async fn test_captures_stdout() {
        let output = TokioCommandExecutor::new()
            .execute(sh("echo hello"), CancellationToken::new())
            .await
            .unwrap();
        assert_eq!(output.stdout, "hello\n");
        assert!(output.stderr.is_empty());
        assert_eq!(output.exit_code, Some(0));
    }

    #[tokio::test]
    async fn test_non_zero_exit_keeps_both_streams() {
        let err = TokioCommandExecutor::new()
            .execute(
                sh("echo partial; echo 'network unreachable' >&2; exit 3"),
                CancellationToken::new(),
            )
            .await
            .unwrap_err();

        match &err {
            CommandError::Failed {
                exit_code,
                stdout,
                stderr,
                ..
            } => {
                assert_eq!(*exit_code, Some(3));
                assert_eq!(stdout, "partial\n");
                assert_eq!(stderr, "network unreachable\n");
            }
            other => panic!("unexpected error: {other:?}"),
        }
        let msg = err.to_string();
        assert!(msg.contains("[sh]"));
        assert!(msg.contains("-c echo partial"));
        assert!(msg.contains("network unreachable"));
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let err = TokioCommandExecutor::new()
            .execute(
                CommandInvocation::new("definitely_not_a_real_command_12345").arg("arg1"),
                CancellationToken::new(),
            )
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Spawn { .. }));
        let msg = err.to_string();
        assert!(msg.contains("[definitely_not_a_real_command_12345]"));
        assert!(msg.contains("with args [arg1]"));
    }

    #[tokio::test]
    async fn test_cancel_kills_running_process() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(100)).await;
            trigger.cancel();
        });

        let started = Instant::now();
        let err = TokioCommandExecutor::new()
            .execute(CommandInvocation::new("sleep").arg("30"), cancel)
            .await
            .unwrap_err();

        assert!(err.is_cancelled());
        assert!(started.elapsed() < Duration::from_secs(10));
    }

    #[tokio::test]
    async fn test_already_cancelled_never_spawns() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        // A missing binary would surface as Spawn if a launch were attempted.
        let err = TokioCommandExecutor::new()
            .execute(
                CommandInvocation::new("definitely_not_a_real_command_12345"),
                cancel,
            )
            .await
            .unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn test_applies_working_dir_and_env() {
        let dir = tempfile::tempdir().unwrap();
        let canonical = dir.path().canonicalize().unwrap();

        let output = TokioCommandExecutor::new()
            .execute(
                sh("pwd -P; echo \"$YTDLD_TEST_VALUE\"")
                    .with_working_dir(dir.path())
                    .with_env("YTDLD_TEST_VALUE", "from-env"),
                CancellationToken::new(),
            )
            .await
            .unwrap();

        let mut lines = output.stdout.lines();
        assert_eq!(lines.next(), Some(canonical.to_str().unwrap()));
        assert_eq!(lines.next(), Some("from-env"));
    }
}
