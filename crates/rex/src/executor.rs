// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! High-level executor: throttled batches over a single transport.

use crate::cmd::Cmd;
use crate::exec::{exec_commands, BatchTimeout, TimeoutOptions};
use crate::log::CommandLogger;
use crate::result::Results;
use crate::target::TargetContainer;
use crate::throttle::Throttle;
use crate::transport::Transport;

/// Owns a transport plus the batch policy around it: per-target throttling
/// and structured command logging.
pub struct Executor<T> {
    transport: T,
    throttle: Throttle,
    log: CommandLogger,
}

impl<T: Transport> Executor<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            throttle: Throttle::new(),
            log: CommandLogger::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Run a command batch against `target`.
    ///
    /// Batches are serialized per pod: a second batch against the same pod
    /// waits for the first to finish. See [`exec_commands`] for the
    /// soft-stop and timeout contract.
    pub async fn run(
        &self,
        target: &TargetContainer,
        commands: &[Cmd],
        topts: TimeoutOptions,
    ) -> Result<Results, BatchTimeout> {
        let _slot = self.throttle.acquire(&target.pod_name).await;
        exec_commands(&self.transport, target, commands, topts, &self.log).await
    }
}

#[cfg(test)]
#[path = "executor_tests.rs"]
mod tests;
