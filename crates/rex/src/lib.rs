// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! brix-rex: remote command batches over streaming exec transports
//!
//! Runs ordered shell command batches inside remote containers, one command
//! at a time. A command is attempted only while every predecessor exited
//! zero, each command is bounded by a watchdog, and per-command outcomes are
//! collected into an ordered result batch.
//!
//! [`exec_commands`] is the core contract; [`Executor`] layers per-target
//! throttling on top; [`KubeConn`] is the production transport
//! (exec-over-API-server into pod containers).

pub mod cmd;
pub mod exec;
pub mod executor;
pub mod k8s;
pub mod log;
pub mod result;
pub mod target;
pub mod throttle;
pub mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod fake;

pub use cmd::{cmds, Cmd};
pub use exec::{exec_commands, BatchTimeout, TimeoutOptions};
pub use executor::Executor;
pub use k8s::{KubeConfig, KubeConn};
pub use log::CommandLogger;
pub use result::{CmdResult, Results};
pub use target::TargetContainer;
pub use throttle::Throttle;
pub use transport::{OutputBuffer, Transport, TransportError};
