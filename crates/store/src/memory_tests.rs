// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use std::collections::HashMap;

fn fields(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

#[tokio::test]
async fn get_missing_key_returns_none() {
    let store = InMemoryKvStore::new();
    assert!(store.get_hash("job:missing").await.unwrap().is_none());
}

#[tokio::test]
async fn set_then_get_round_trips() {
    let store = InMemoryKvStore::new();
    store.set_hash("job:1", fields(&[("status", "0")])).await.unwrap();
    let got = store.get_hash("job:1").await.unwrap().unwrap();
    assert_eq!(got.get("status"), Some(&"0".to_string()));
}

#[tokio::test]
async fn scan_prefix_filters_by_key() {
    let store = InMemoryKvStore::new();
    store.set_hash("job:1", fields(&[("status", "0")])).await.unwrap();
    store.set_hash("request:1", fields(&[("pickup", "x")])).await.unwrap();
    let jobs = store.scan_prefix("job:").await.unwrap();
    assert_eq!(jobs.len(), 1);
}

#[tokio::test]
async fn publish_without_subscribers_is_not_an_error() {
    let store = InMemoryKvStore::new();
    store.publish("job:1:update", "updated").await.unwrap();
}

#[tokio::test]
async fn subscriber_receives_published_payload() {
    let store = InMemoryKvStore::new();
    let mut rx = store.subscribe();
    store.publish("job:1:update", "updated").await.unwrap();
    let (channel, payload) = rx.recv().await.unwrap();
    assert_eq!(channel, "job:1:update");
    assert_eq!(payload, "updated");
}
