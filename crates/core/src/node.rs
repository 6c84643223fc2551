// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node and device descriptions exchanged with callers.

use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Identifier for a storage node registered with the cluster.
    pub struct NodeId("node-");
}

crate::define_id! {
    /// Identifier for a raw block device attached to a node.
    pub struct DeviceId("dev-");
}

/// Storage values in KB
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageSize {
    pub total: u64,
    pub free: u64,
    pub used: u64,
}

/// Request to register a node with the cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeSpec {
    pub name: String,
    /// Failure domain the node belongs to.
    pub zone: u32,
}

/// Request to attach a raw device to a node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceSpec {
    /// Device path on the node (e.g. "/dev/sdb").
    pub name: String,
}

/// A device as recorded in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceInfo {
    pub id: DeviceId,
    pub name: String,
    pub storage: StorageSize,
}

/// A node as recorded in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeInfo {
    pub id: NodeId,
    pub name: String,
    pub zone: u32,
    pub storage: StorageSize,
    #[serde(default)]
    pub devices: Vec<DeviceInfo>,
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
