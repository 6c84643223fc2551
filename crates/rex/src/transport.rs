// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Transport abstraction for streaming exec sessions.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::sync::Arc;
use thiserror::Error;

use crate::target::TargetContainer;

/// Errors surfaced by a transport.
///
/// Per-session failures (`Session`, `Failed`) are recorded on the command's
/// result by the executor and never escape as batch-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The transport was configured with values it cannot use.
    #[error("invalid transport configuration: {0}")]
    Config(String),
    /// The control plane could not be reached at all.
    #[error("unable to connect to the control plane: {0}")]
    Connect(String),
    /// The exec session could not be opened against the target.
    #[error("unable to establish session with {0}")]
    Session(String),
    /// The session ran but ended in failure (non-zero exit or broken stream).
    #[error("remote command failed: {0}")]
    Failed(String),
}

/// Shared, append-only capture buffer for one output stream.
///
/// The executor hands clones to the transport so partial output stays
/// readable after a watchdog cancellation drops the session mid-stream.
#[derive(Debug, Clone, Default)]
pub struct OutputBuffer(Arc<Mutex<Vec<u8>>>);

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn write(&self, chunk: &[u8]) {
        self.0.lock().extend_from_slice(chunk);
    }

    /// Contents captured so far, lossily decoded.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock()).into_owned()
    }
}

/// Opens one streaming exec session per call against an already-connected
/// control plane.
///
/// Implementations return `Ok(())` only when the remote command exited zero;
/// a non-zero exit or a broken stream is an error. The executor treats the
/// transport as an opaque capability and never connects, validates, or
/// retries on the transport's behalf.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn exec(
        &self,
        target: &TargetContainer,
        command: Vec<String>,
        stdout: OutputBuffer,
        stderr: OutputBuffer,
    ) -> Result<(), TransportError>;
}

#[cfg(test)]
#[path = "transport_tests.rs"]
mod tests;
