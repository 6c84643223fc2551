// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Registry errors.

use brix_core::{NodeId, VolumeId};
use thiserror::Error;

/// Errors from registry operations.
///
/// Variants are compared by identity in callers (e.g. handlers mapping
/// not-found to a 404), so the enum derives `PartialEq`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("node {0} not found")]
    NodeNotFound(NodeId),
    #[error("volume {0} not found")]
    VolumeNotFound(VolumeId),
    /// Nodes with devices still attached cannot be removed.
    #[error("node {0} still has devices attached")]
    NodeBusy(NodeId),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
