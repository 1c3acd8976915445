// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-process `KvStore` used by engine/daemon tests so the suite never
//! needs a live Redis.

use crate::error::KvError;
use crate::kv::KvStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;

pub struct InMemoryKvStore {
    hashes: Mutex<HashMap<String, HashMap<String, String>>>,
    notifier: broadcast::Sender<(String, String)>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        let (notifier, _) = broadcast::channel(1024);
        Self { hashes: Mutex::new(HashMap::new()), notifier }
    }

    /// Subscribe to all published (channel, payload) pairs. Primarily useful
    /// in tests that assert a notification fired.
    pub fn subscribe(&self) -> broadcast::Receiver<(String, String)> {
        self.notifier.subscribe()
    }
}

impl Default for InMemoryKvStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl KvStore for InMemoryKvStore {
    async fn set_hash(&self, key: &str, fields: HashMap<String, String>) -> Result<bool, KvError> {
        let mut hashes = self.hashes.lock().unwrap_or_else(|e| e.into_inner());
        let existed = hashes.insert(key.to_string(), fields).is_some();
        Ok(existed)
    }

    async fn get_hash(&self, key: &str) -> Result<Option<HashMap<String, String>>, KvError> {
        let hashes = self.hashes.lock().unwrap_or_else(|e| e.into_inner());
        Ok(hashes.get(key).cloned())
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<HashMap<String, String>>, KvError> {
        let hashes = self.hashes.lock().unwrap_or_else(|e| e.into_inner());
        Ok(hashes
            .iter()
            .filter(|(k, _)| k.starts_with(prefix))
            .map(|(_, v)| v.clone())
            .collect())
    }

    async fn publish(&self, channel: &str, payload: &str) -> Result<(), KvError> {
        // No subscribers is not an error — matches real pub/sub semantics.
        let _ = self.notifier.send((channel.to_string(), payload.to_string()));
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
