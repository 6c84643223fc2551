// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Structured log events around remote command execution.

use crate::cmd::Cmd;
use crate::target::TargetContainer;
use crate::transport::TransportError;

/// Emits the before/success/error/timeout events for each remote command.
///
/// Constructed by the caller and passed by reference into the executor.
/// Every event carries the command text and target description; outcome
/// events add the captured output buffers.
#[derive(Debug, Clone, Default)]
pub struct CommandLogger;

impl CommandLogger {
    pub fn new() -> Self {
        Self
    }

    pub fn before(&self, cmd: &Cmd, target: &TargetContainer) {
        tracing::debug!(command = %cmd, %target, "running remote command");
    }

    pub fn success(&self, cmd: &Cmd, target: &TargetContainer, output: &str, err_output: &str) {
        tracing::debug!(
            command = %cmd,
            %target,
            output,
            err_output,
            "remote command succeeded"
        );
    }

    pub fn error(
        &self,
        cmd: &Cmd,
        err: &TransportError,
        target: &TargetContainer,
        output: &str,
        err_output: &str,
    ) {
        tracing::error!(
            command = %cmd,
            %target,
            error = %err,
            output,
            err_output,
            "remote command failed"
        );
    }

    pub fn timeout(&self, cmd: &Cmd, target: &TargetContainer, output: &str, err_output: &str) {
        tracing::error!(
            command = %cmd,
            %target,
            output,
            err_output,
            "remote command timed out"
        );
    }
}
