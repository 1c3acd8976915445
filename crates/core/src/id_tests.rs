// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

crate::define_id! {
    pub struct ScratchId;
}

#[test]
fn new_ids_are_unique() {
    assert_ne!(ScratchId::new(), ScratchId::new());
}

#[test]
fn round_trips_through_string() {
    let id = ScratchId::new();
    let parsed = ScratchId::from_string(id.to_string()).unwrap();
    assert_eq!(id, parsed);
}

#[test]
fn rejects_malformed_string() {
    assert!(ScratchId::from_string("not-a-uuid").is_err());
}
