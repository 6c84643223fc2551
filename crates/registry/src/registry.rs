// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Repository interface over cluster state.

use brix_core::{
    DeviceInfo, DeviceSpec, NodeId, NodeInfo, NodeSpec, VolumeId, VolumeInfo, VolumeSpec,
};

use crate::error::RegistryError;

/// CRUD surface for nodes and volumes.
///
/// Implementations hand out owned copies and keep their internal
/// representation private. All methods take `&self`; implementations manage
/// their own locking.
pub trait Registry: Send + Sync {
    /// Register a node and return its stored form (with generated id).
    fn node_add(&self, spec: NodeSpec) -> Result<NodeInfo, RegistryError>;

    fn node_info(&self, id: &NodeId) -> Result<NodeInfo, RegistryError>;

    fn node_list(&self) -> Result<Vec<NodeInfo>, RegistryError>;

    /// Remove a node. Fails while devices are still attached.
    fn node_remove(&self, id: &NodeId) -> Result<(), RegistryError>;

    /// Attach a raw device to a node.
    fn node_add_device(&self, id: &NodeId, spec: DeviceSpec)
        -> Result<DeviceInfo, RegistryError>;

    /// Provision a volume and return its stored form (with generated id).
    fn volume_create(&self, spec: VolumeSpec) -> Result<VolumeInfo, RegistryError>;

    fn volume_info(&self, id: &VolumeId) -> Result<VolumeInfo, RegistryError>;

    fn volume_list(&self) -> Result<Vec<VolumeInfo>, RegistryError>;

    /// Grow a volume by `delta_gb` and return its updated form.
    fn volume_expand(&self, id: &VolumeId, delta_gb: u64) -> Result<VolumeInfo, RegistryError>;

    fn volume_delete(&self, id: &VolumeId) -> Result<(), RegistryError>;
}
