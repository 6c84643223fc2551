// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Specs for the cluster registry surface.

use std::sync::Arc;

use brix_core::{DeviceSpec, NodeSpec, VolumeSpec};
use brix_registry::{MemoryRegistry, Registry, RegistryError};

/// Callers hold the registry as a trait object, the way a handler layer
/// would receive it.
#[test]
fn registry_works_behind_a_trait_object() {
    let registry: Arc<dyn Registry> = Arc::new(MemoryRegistry::new());

    let node = registry
        .node_add(NodeSpec { name: "storage-0".to_string(), zone: 1 })
        .unwrap();
    registry
        .node_add_device(&node.id, DeviceSpec { name: "/dev/sdb".to_string() })
        .unwrap();
    let volume = registry
        .volume_create(VolumeSpec { name: "vol0".to_string(), size: 100 })
        .unwrap();

    assert_eq!(registry.node_list().unwrap().len(), 1);
    assert_eq!(registry.volume_list().unwrap().len(), 1);
    assert_eq!(
        registry.node_remove(&node.id).unwrap_err(),
        RegistryError::NodeBusy(node.id.clone())
    );
    registry.volume_delete(&volume.id).unwrap();
}

/// Stored entries serialize into the wire shape callers expect.
#[test]
fn node_info_serializes_for_the_wire() {
    let registry = MemoryRegistry::new();
    let node = registry
        .node_add(NodeSpec { name: "storage-0".to_string(), zone: 3 })
        .unwrap();

    let json = serde_json::to_value(&node).unwrap();
    assert_eq!(json["name"], "storage-0");
    assert_eq!(json["zone"], 3);
    assert_eq!(json["storage"]["free"], 0);
    assert!(json["devices"].as_array().unwrap().is_empty());
    assert_eq!(json["id"], node.id.as_str());
}
