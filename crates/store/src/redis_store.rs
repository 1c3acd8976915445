// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Real `KvStore` backed by Redis hashes + pub/sub, matching
//! `original_source/fleet_gateway`'s Redis-backed `OrderStore`. The wire
//! protocol to Redis itself is out of scope (spec.md §1) — this is a thin
//! adapter, not a reimplementation of the Redis client.

use crate::error::KvError;
use crate::kv::KvStore;
use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::AsyncCommands;
use std::collections::HashMap;

#[derive(Clone)]
pub struct RedisKvStore {
    conn: ConnectionManager,
}

impl RedisKvStore {
    pub async fn connect(host: &str, port: u16) -> Result<Self, KvError> {
        let url = format!("redis://{host}:{port}");
        let client =
            redis::Client::open(url).map_err(|e| KvError::Connection(e.to_string()))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| KvError::Connection(e.to_string()))?;
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisKvStore {
    async fn set_hash(&self, key: &str, fields: HashMap<String, String>) -> Result<bool, KvError> {
        let mut conn = self.conn.clone();
        let existed: bool = conn.exists(key).await.map_err(|e| KvError::Command(e.to_string()))?;
        let pairs: Vec<(String, String)> = fields.into_iter().collect();
        let _: () = conn.hset_multiple(key, &pairs).await.map_err(|e| KvError::Command(e.to_string()))?;
        Ok(existed)
    }

    async fn get_hash(&self, key: &str) -> Result<Option<HashMap<String, String>>, KvError> {
        let mut conn = self.conn.clone();
        let map: HashMap<String, String> =
            conn.hgetall(key).await.map_err(|e| KvError::Command(e.to_string()))?;
        if map.is_empty() {
            Ok(None)
        } else {
            Ok(Some(map))
        }
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<HashMap<String, String>>, KvError> {
        let mut conn = self.conn.clone();
        let pattern = format!("{prefix}*");
        let keys: Vec<String> =
            conn.keys(&pattern).await.map_err(|e| KvError::Command(e.to_string()))?;
        let mut out = Vec::with_capacity(keys.len());
        for key in keys {
            let map: HashMap<String, String> =
                conn.hgetall(&key).await.map_err(|e| KvError::Command(e.to_string()))?;
            if !map.is_empty() {
                out.push(map);
            }
        }
        Ok(out)
    }

    async fn publish(&self, channel: &str, payload: &str) -> Result<(), KvError> {
        let mut conn = self.conn.clone();
        let _: i64 =
            conn.publish(channel, payload).await.map_err(|e| KvError::Command(e.to_string()))?;
        Ok(())
    }
}
