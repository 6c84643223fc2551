// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Sequential batch execution with a per-command watchdog.

use std::time::Duration;
use thiserror::Error;
use tokio::time;

use crate::cmd::Cmd;
use crate::log::CommandLogger;
use crate::result::{CmdResult, Results};
use crate::target::TargetContainer;
use crate::transport::{OutputBuffer, Transport};

/// Batch timeout knobs.
///
/// With `timeout_minutes <= 0` no in-target guard is added even when
/// `use_timeout_prefix` is set, and the outer watchdog degenerates to its
/// one-minute slack. Callers wanting a meaningful bound supply a positive
/// value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeoutOptions {
    /// Maximum minutes each command may run inside the target.
    pub timeout_minutes: i64,
    /// Wrap each command in an in-target `timeout <N>m` guard in addition to
    /// the outer watchdog.
    pub use_timeout_prefix: bool,
}

impl TimeoutOptions {
    /// Outer watchdog: one minute of slack beyond the in-target budget.
    pub(crate) fn watchdog(&self) -> Duration {
        let minutes = self.timeout_minutes.max(0) as u64 + 1;
        Duration::from_secs(minutes * 60)
    }
}

/// The batch ran out of time mid-command.
///
/// Carries the results of every command that completed strictly before the
/// watchdog fired; the in-flight command has no entry.
#[derive(Debug, Error)]
#[error("remote command batch timed out running {command:?}")]
pub struct BatchTimeout {
    /// The command that was in flight when the watchdog fired.
    pub command: String,
    /// Results accumulated before the timeout.
    pub results: Results,
}

/// Run `commands` in order against `target` over `transport`.
///
/// Commands have sequential dependency: each is attempted only while every
/// predecessor exited zero. A failing command stops the batch but is
/// reported through its [`CmdResult`]; the call still returns `Ok` (soft
/// stop). Only watchdog expiry is promoted to the function-level error,
/// which truncates the batch at the last completed command.
///
/// The watchdog bounds each command at `timeout_minutes + 1` minutes; the
/// losing session future is dropped, cancelling the in-flight exec.
pub async fn exec_commands<T>(
    transport: &T,
    target: &TargetContainer,
    commands: &[Cmd],
    topts: TimeoutOptions,
    log: &CommandLogger,
) -> Result<Results, BatchTimeout>
where
    T: Transport + ?Sized,
{
    let mut results = Results::with_capacity(commands.len());

    for cmd in commands {
        log.before(cmd, target);
        let cmdv = wrap_command(cmd.as_str().trim(), topts);

        let stdout = OutputBuffer::new();
        let stderr = OutputBuffer::new();
        let session = transport.exec(target, cmdv, stdout.clone(), stderr.clone());

        match time::timeout(topts.watchdog(), session).await {
            Ok(outcome) => {
                let mut result = CmdResult {
                    completed: true,
                    output: stdout.contents(),
                    err_output: stderr.contents(),
                    err: None,
                    exit_status: 0,
                };
                match outcome {
                    Ok(()) => log.success(cmd, target, &result.output, &result.err_output),
                    Err(err) => {
                        log.error(cmd, &err, target, &result.output, &result.err_output);
                        // The streaming session does not expose the remote
                        // exit code; any failure is reported as 1.
                        // TODO: recover the real exit code when the transport
                        // can report one (the k8s status frame carries it).
                        result.exit_status = 1;
                        result.err = Some(err);
                    }
                }
                let stop = result.exit_status != 0;
                results.push(result);
                if stop {
                    // Soft stop: the failure lives in the result batch, not
                    // in the function's error return.
                    return Ok(results);
                }
            }
            Err(_) => {
                log.timeout(cmd, target, &stdout.contents(), &stderr.contents());
                return Err(BatchTimeout {
                    command: cmd.as_str().to_string(),
                    results,
                });
            }
        }
    }

    Ok(results)
}

/// Literal invocation vector for one command.
fn wrap_command(command: &str, topts: TimeoutOptions) -> Vec<String> {
    if topts.use_timeout_prefix && topts.timeout_minutes > 0 {
        vec![
            "timeout".to_string(),
            format!("{}m", topts.timeout_minutes),
            "bash".to_string(),
            "-c".to_string(),
            command.to_string(),
        ]
    } else {
        vec![
            "bash".to_string(),
            "-c".to_string(),
            command.to_string(),
        ]
    }
}

#[cfg(test)]
#[path = "exec_tests.rs"]
mod tests;
