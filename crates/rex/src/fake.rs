// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scripted transport double for executor tests.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

use crate::target::TargetContainer;
use crate::transport::{OutputBuffer, Transport, TransportError};

/// One scripted session outcome.
#[derive(Debug, Clone, Default)]
pub struct FakeSession {
    pub output: String,
    pub err_output: String,
    pub error: Option<TransportError>,
    /// Time the session takes before resolving (virtual under a paused
    /// runtime). Output is written before the delay, like a command that
    /// prints and then hangs.
    pub delay: Duration,
}

impl FakeSession {
    /// Session that exits zero with the given stdout.
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            ..Self::default()
        }
    }

    /// Session that ends in failure with the given stderr.
    pub fn fail(err_output: impl Into<String>) -> Self {
        let err_output = err_output.into();
        Self {
            error: Some(TransportError::Failed(err_output.clone())),
            err_output,
            ..Self::default()
        }
    }

    /// Session that cannot be opened at all.
    pub fn no_session(pod_name: impl Into<String>) -> Self {
        Self {
            error: Some(TransportError::Session(pod_name.into())),
            ..Self::default()
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

/// Transport that replays scripted sessions in order and records every
/// invocation vector it receives.
///
/// An exhausted script replays empty successful sessions.
#[derive(Debug, Default)]
pub struct FakeTransport {
    script: Mutex<VecDeque<FakeSession>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append scripted sessions, consumed one per `exec` call.
    pub fn script(self, sessions: impl IntoIterator<Item = FakeSession>) -> Self {
        self.script.lock().extend(sessions);
        self
    }

    pub fn push(&self, session: FakeSession) {
        self.script.lock().push_back(session);
    }

    /// Invocation vectors observed so far, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn exec(
        &self,
        _target: &TargetContainer,
        command: Vec<String>,
        stdout: OutputBuffer,
        stderr: OutputBuffer,
    ) -> Result<(), TransportError> {
        self.calls.lock().push(command);
        let session = self.script.lock().pop_front().unwrap_or_default();

        stdout.write(session.output.as_bytes());
        stderr.write(session.err_output.as_bytes());
        if !session.delay.is_zero() {
            tokio::time::sleep(session.delay).await;
        }
        match session.error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}
