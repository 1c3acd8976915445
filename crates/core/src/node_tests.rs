// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn node_type_code_round_trips() {
    for code in 0..=4 {
        let kind = NodeType::from_code(code).unwrap();
        assert_eq!(kind.code(), code);
    }
}

#[test]
fn unknown_code_is_none() {
    assert!(NodeType::from_code(99).is_none());
}

#[test]
fn shelf_is_not_a_waypoint() {
    let node = Node::builder().id(7).node_type(NodeType::Shelf).build();
    assert!(!node.is_waypoint());
}

#[test]
fn json_round_trip_preserves_optional_fields() {
    let node = Node::builder().id(10).node_type(NodeType::Depot).alias("dock-1").build();
    let encoded = serde_json::to_string(&node).unwrap();
    let decoded: Node = serde_json::from_str(&encoded).unwrap();
    assert_eq!(node, decoded);
}
