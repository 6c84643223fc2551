// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn same_key_acquisitions_are_serialized() {
    let throttle = Throttle::new();

    let held = throttle.acquire("glusterfs-0").await;

    // A second acquire on the same key must wait for the guard to drop.
    let waited = tokio::time::timeout(Duration::from_secs(1), throttle.acquire("glusterfs-0")).await;
    assert!(waited.is_err());

    drop(held);
    let acquired =
        tokio::time::timeout(Duration::from_secs(1), throttle.acquire("glusterfs-0")).await;
    assert!(acquired.is_ok());
}

#[tokio::test(start_paused = true)]
async fn distinct_keys_do_not_contend() {
    let throttle = Throttle::new();

    let _a = throttle.acquire("glusterfs-0").await;
    let other =
        tokio::time::timeout(Duration::from_secs(1), throttle.acquire("glusterfs-1")).await;
    assert!(other.is_ok());
}
