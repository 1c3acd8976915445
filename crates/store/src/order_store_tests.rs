// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::memory::InMemoryKvStore;
use fleet_core::{JobOperation, Node, NodeType};

fn store() -> OrderStore {
    OrderStore::new(Arc::new(InMemoryKvStore::new()))
}

fn shelf_node(id: i64) -> Node {
    Node::builder().id(id).node_type(NodeType::Shelf).build()
}

#[tokio::test]
async fn get_job_returns_none_for_absent_key() {
    let store = store();
    assert!(store.get_job(&JobId::new()).await.unwrap().is_none());
}

#[tokio::test]
async fn set_then_get_job_round_trips() {
    let store = store();
    let job = Job::builder().target_node(shelf_node(7)).build();
    store.set_job(&job).await.unwrap();
    let got = store.get_job(&job.id).await.unwrap().unwrap();
    assert_eq!(got, job);
}

#[tokio::test]
async fn get_jobs_scans_all_persisted_jobs() {
    let store = store();
    let a = Job::builder().target_node(shelf_node(1)).build();
    let b = Job::builder().target_node(shelf_node(2)).build();
    store.set_job(&a).await.unwrap();
    store.set_job(&b).await.unwrap();
    let all = store.get_jobs().await.unwrap();
    assert_eq!(all.len(), 2);
}

#[tokio::test]
async fn request_status_derives_from_s1_happy_path() {
    let store = store();
    let pickup = Job::builder()
        .operation(JobOperation::Pickup)
        .target_node(shelf_node(7))
        .status(OrderStatus::Completed)
        .build();
    let delivery = Job::builder()
        .operation(JobOperation::Delivery)
        .target_node(Node::builder().id(10).node_type(NodeType::Depot).build())
        .status(OrderStatus::Completed)
        .build();
    let request = Request::new(pickup.id, delivery.id, "R1");
    store.set_job(&pickup).await.unwrap();
    store.set_job(&delivery).await.unwrap();
    store.set_request(&request).await.unwrap();

    let status = store.get_request_status(&request).await.unwrap();
    assert_eq!(status, OrderStatus::Completed);
}

#[tokio::test]
async fn request_status_s4_failed_beats_canceled() {
    let store = store();
    let mut pickup = Job::builder().build();
    pickup.status = OrderStatus::Failed;
    let mut delivery = Job::builder().build();
    delivery.status = OrderStatus::Canceled;
    let request = Request::new(pickup.id, delivery.id, "R1");
    store.set_job(&pickup).await.unwrap();
    store.set_job(&delivery).await.unwrap();

    let status = store.get_request_status(&request).await.unwrap();
    assert_eq!(status, OrderStatus::Failed);
}

#[tokio::test]
async fn request_status_missing_job_is_inconsistent_state() {
    let store = store();
    let delivery = Job::builder().build();
    store.set_job(&delivery).await.unwrap();
    let request = Request::new(JobId::new(), delivery.id, "R1");

    let err = store.get_request_status(&request).await.unwrap_err();
    assert!(matches!(err, StoreError::InconsistentState { .. }));
}
