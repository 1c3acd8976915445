// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use fleet_core::NodeType;

#[test]
fn job_round_trips_through_fields() {
    let job = Job::builder()
        .operation(JobOperation::Pickup)
        .target_node(Node::builder().id(7).node_type(NodeType::Shelf).build())
        .request(RequestId::new())
        .build();
    let fields = job_to_fields(&job);
    let decoded = fields_to_job(&fields).unwrap();
    assert_eq!(job, decoded);
}

#[test]
fn job_without_request_round_trips_with_none() {
    let job = Job::builder().build();
    assert!(job.request.is_none());
    let fields = job_to_fields(&job);
    let decoded = fields_to_job(&fields).unwrap();
    assert!(decoded.request.is_none());
}

#[test]
fn incomplete_fields_yield_none_not_a_panic() {
    let fields = HashMap::new();
    assert!(fields_to_job(&fields).is_none());
}

#[test]
fn request_round_trips_through_fields() {
    let request = Request::builder().handling_robot("r9").build();
    let fields = request_to_fields(&request);
    let decoded = fields_to_request(&fields).unwrap();
    assert_eq!(request, decoded);
}
