// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Volume descriptions exchanged with callers.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier for a provisioned volume.
    pub struct VolumeId("vol-");
}

/// Request to provision a volume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeSpec {
    pub name: String,
    /// Requested size in GB.
    pub size: u64,
}

/// A provisioned volume as recorded in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeInfo {
    pub id: VolumeId,
    pub name: String,
    /// Current size in GB.
    pub size: u64,
}

#[cfg(test)]
#[path = "volume_tests.rs"]
mod tests;
