// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn node_info_round_trips_through_json() {
    let info = NodeInfo {
        id: NodeId::from_string("node-abc"),
        name: "storage-0".to_string(),
        zone: 2,
        storage: StorageSize { total: 1024, free: 512, used: 512 },
        devices: vec![DeviceInfo {
            id: DeviceId::from_string("dev-xyz"),
            name: "/dev/sdb".to_string(),
            storage: StorageSize::default(),
        }],
    };

    let json = serde_json::to_string(&info).unwrap();
    let back: NodeInfo = serde_json::from_str(&json).unwrap();
    assert_eq!(back, info);
}

#[test]
fn node_info_devices_default_to_empty() {
    let json = r#"{
        "id": "node-abc",
        "name": "storage-0",
        "zone": 0,
        "storage": {"total": 0, "free": 0, "used": 0}
    }"#;
    let info: NodeInfo = serde_json::from_str(json).unwrap();
    assert!(info.devices.is_empty());
}

#[test]
fn storage_size_uses_lowercase_field_names() {
    let json = serde_json::to_value(StorageSize { total: 3, free: 2, used: 1 }).unwrap();
    assert_eq!(json["total"], 3);
    assert_eq!(json["free"], 2);
    assert_eq!(json["used"], 1);
}
