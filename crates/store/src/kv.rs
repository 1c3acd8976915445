// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Abstraction over "a hash-per-key store with pub/sub" (spec.md §6). The
//! store's transport itself is out of scope (spec.md §1); this trait is
//! the seam the core's `OrderStore` depends on, with two implementations:
//! [`crate::redis_store::RedisKvStore`] (real) and
//! [`crate::memory::InMemoryKvStore`] (in-process, for tests).

use crate::error::KvError;
use async_trait::async_trait;
use std::collections::HashMap;

#[async_trait]
pub trait KvStore: Send + Sync {
    /// Upsert a hash record under `key`. Returns `true` if the key already
    /// existed (matches Redis `HSET`-family semantics).
    async fn set_hash(&self, key: &str, fields: HashMap<String, String>) -> Result<bool, KvError>;

    /// Fetch a hash record, or `None` if the key is absent.
    async fn get_hash(&self, key: &str) -> Result<Option<HashMap<String, String>>, KvError>;

    /// Scan all hash records whose key starts with `prefix`.
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<HashMap<String, String>>, KvError>;

    /// Publish `payload` to `channel`. No-op if there are no subscribers.
    async fn publish(&self, channel: &str, payload: &str) -> Result<(), KvError>;
}
