// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared error taxonomy (spec.md §7). Each kind is raised by exactly one
//! layer; higher layers wrap it rather than re-deriving their own variant.

use thiserror::Error;

/// Raised by `WarehouseController.accept_*` when an order fails admission
/// validation. Nothing is persisted when this is returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("unknown node: {0}")]
    UnknownNode(String),
    #[error("unknown robot: {0}")]
    UnknownRobot(String),
    #[error("TRAVEL target {0} is not a WAYPOINT")]
    TravelTargetNotWaypoint(i64),
    #[error("node {node} claimed by more than one robot assignment")]
    AmbiguousNodeAssignment { node: i64 },
    #[error("pickup node {pickup} and delivery node {delivery} are assigned to different robots")]
    CrossRobotRequest { pickup: i64, delivery: i64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_offending_node() {
        let err = ValidationError::UnknownNode("42".to_string());
        assert!(err.to_string().contains("42"));
    }
}
