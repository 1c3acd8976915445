// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn new_request_pairs_given_jobs() {
    let pickup = JobId::new();
    let delivery = JobId::new();
    let req = Request::new(pickup, delivery, "r1");
    assert_eq!(req.pickup, pickup);
    assert_eq!(req.delivery, delivery);
    assert_eq!(req.handling_robot, "r1");
}

#[test]
fn json_round_trip() {
    let req = Request::builder().handling_robot("r2").build();
    let encoded = serde_json::to_string(&req).unwrap();
    let decoded: Request = serde_json::from_str(&encoded).unwrap();
    assert_eq!(req, decoded);
}
