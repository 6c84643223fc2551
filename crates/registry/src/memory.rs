// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory registry.

use parking_lot::RwLock;
use std::collections::HashMap;

use brix_core::{
    DeviceId, DeviceInfo, DeviceSpec, NodeId, NodeInfo, NodeSpec, StorageSize, VolumeId,
    VolumeInfo, VolumeSpec,
};

use crate::error::RegistryError;
use crate::registry::Registry;

#[derive(Debug, Default)]
struct Tables {
    nodes: HashMap<NodeId, NodeInfo>,
    volumes: HashMap<VolumeId, VolumeInfo>,
}

/// Single-process registry backed by lock-guarded tables.
///
/// Reads clone entries out; writes hold the lock for the whole mutation.
/// List order is unspecified.
#[derive(Debug, Default)]
pub struct MemoryRegistry {
    tables: RwLock<Tables>,
}

impl MemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Registry for MemoryRegistry {
    fn node_add(&self, spec: NodeSpec) -> Result<NodeInfo, RegistryError> {
        let info = NodeInfo {
            id: NodeId::new(),
            name: spec.name,
            zone: spec.zone,
            storage: StorageSize::default(),
            devices: Vec::new(),
        };
        let mut tables = self.tables.write();
        tables.nodes.insert(info.id.clone(), info.clone());
        tracing::debug!(node = %info.id, name = %info.name, "node registered");
        Ok(info)
    }

    fn node_info(&self, id: &NodeId) -> Result<NodeInfo, RegistryError> {
        self.tables
            .read()
            .nodes
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::NodeNotFound(id.clone()))
    }

    fn node_list(&self) -> Result<Vec<NodeInfo>, RegistryError> {
        Ok(self.tables.read().nodes.values().cloned().collect())
    }

    fn node_remove(&self, id: &NodeId) -> Result<(), RegistryError> {
        let mut tables = self.tables.write();
        let node = tables
            .nodes
            .get(id)
            .ok_or_else(|| RegistryError::NodeNotFound(id.clone()))?;
        if !node.devices.is_empty() {
            return Err(RegistryError::NodeBusy(id.clone()));
        }
        tables.nodes.remove(id);
        tracing::debug!(node = %id, "node removed");
        Ok(())
    }

    fn node_add_device(
        &self,
        id: &NodeId,
        spec: DeviceSpec,
    ) -> Result<DeviceInfo, RegistryError> {
        let mut tables = self.tables.write();
        let node = tables
            .nodes
            .get_mut(id)
            .ok_or_else(|| RegistryError::NodeNotFound(id.clone()))?;
        let device = DeviceInfo {
            id: DeviceId::new(),
            name: spec.name,
            storage: StorageSize::default(),
        };
        node.devices.push(device.clone());
        tracing::debug!(node = %id, device = %device.id, "device attached");
        Ok(device)
    }

    fn volume_create(&self, spec: VolumeSpec) -> Result<VolumeInfo, RegistryError> {
        let info = VolumeInfo {
            id: VolumeId::new(),
            name: spec.name,
            size: spec.size,
        };
        let mut tables = self.tables.write();
        tables.volumes.insert(info.id.clone(), info.clone());
        tracing::debug!(volume = %info.id, size_gb = info.size, "volume created");
        Ok(info)
    }

    fn volume_info(&self, id: &VolumeId) -> Result<VolumeInfo, RegistryError> {
        self.tables
            .read()
            .volumes
            .get(id)
            .cloned()
            .ok_or_else(|| RegistryError::VolumeNotFound(id.clone()))
    }

    fn volume_list(&self) -> Result<Vec<VolumeInfo>, RegistryError> {
        Ok(self.tables.read().volumes.values().cloned().collect())
    }

    fn volume_expand(&self, id: &VolumeId, delta_gb: u64) -> Result<VolumeInfo, RegistryError> {
        let mut tables = self.tables.write();
        let volume = tables
            .volumes
            .get_mut(id)
            .ok_or_else(|| RegistryError::VolumeNotFound(id.clone()))?;
        volume.size += delta_gb;
        tracing::debug!(volume = %id, size_gb = volume.size, "volume expanded");
        Ok(volume.clone())
    }

    fn volume_delete(&self, id: &VolumeId) -> Result<(), RegistryError> {
        let mut tables = self.tables.write();
        if tables.volumes.remove(id).is_none() {
            return Err(RegistryError::VolumeNotFound(id.clone()));
        }
        tracing::debug!(volume = %id, "volume deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
