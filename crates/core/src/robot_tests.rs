// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn ready_statuses_match_spec() {
    assert!(RobotActionStatus::Idle.is_ready());
    assert!(RobotActionStatus::Canceled.is_ready());
    assert!(RobotActionStatus::Succeeded.is_ready());
    assert!(!RobotActionStatus::Operating.is_ready());
    assert!(!RobotActionStatus::Error.is_ready());
}

#[test]
fn fresh_cell_is_free() {
    let cell = RobotCell::new(1.2);
    assert!(cell.is_free());
}

#[test]
fn holding_cell_is_not_free() {
    let mut cell = RobotCell::new(1.2);
    cell.holding = Some(JobId::new());
    assert!(!cell.is_free());
}
