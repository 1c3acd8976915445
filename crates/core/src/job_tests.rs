// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::node::NodeType;

#[test]
fn new_job_starts_queuing() {
    let node = Node::builder().id(7).node_type(NodeType::Shelf).build();
    let job = Job::new(JobOperation::Pickup, node, None, "r1");
    assert_eq!(job.status, OrderStatus::Queuing);
    assert!(!job.is_terminal());
}

#[test]
fn terminal_statuses_are_terminal() {
    let mut job = Job::builder().build();
    job.status = OrderStatus::Completed;
    assert!(job.is_terminal());
}

#[test]
fn only_pickup_allocates_a_cell() {
    assert!(JobOperation::Pickup.allocates_cell());
    assert!(!JobOperation::Delivery.allocates_cell());
    assert!(!JobOperation::Travel.allocates_cell());
}

#[test]
fn operation_code_round_trips() {
    for code in 0..=2 {
        assert_eq!(JobOperation::from_code(code).unwrap().code(), code);
    }
}

#[test]
fn json_round_trip_preserves_request_link() {
    let job = Job::builder().request(RequestId::new()).build();
    let encoded = serde_json::to_string(&job).unwrap();
    let decoded: Job = serde_json::from_str(&encoded).unwrap();
    assert_eq!(job, decoded);
}
