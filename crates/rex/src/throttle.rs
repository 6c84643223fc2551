// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-target serialization of command batches.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// Hands out one slot per target key so batches against the same endpoint
/// never overlap. Slots for distinct keys are independent.
#[derive(Debug, Default)]
pub struct Throttle {
    slots: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl Throttle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the key's slot. The caller holds it until the guard drops.
    pub async fn acquire(&self, key: &str) -> OwnedMutexGuard<()> {
        let slot = {
            let mut slots = self.slots.lock();
            Arc::clone(slots.entry(key.to_string()).or_default())
        };
        slot.lock_owned().await
    }
}

#[cfg(test)]
#[path = "throttle_tests.rs"]
mod tests;
