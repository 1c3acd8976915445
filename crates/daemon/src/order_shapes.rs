// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The three order shapes `WarehouseController` accepts (spec.md §4.4).

use fleet_core::JobOperation;

/// A node reference as given by a caller: either a stable id or a human
/// alias, resolved through the `RouteOracle` (spec.md §4.4).
#[derive(Debug, Clone, PartialEq)]
pub enum NodeRef {
    Id(i64),
    Alias(String),
}

impl From<i64> for NodeRef {
    fn from(id: i64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for NodeRef {
    fn from(alias: &str) -> Self {
        Self::Alias(alias.to_string())
    }
}

/// {robot_name, operation, target node id or alias}. One job.
#[derive(Debug, Clone)]
pub struct JobOrder {
    pub robot_name: String,
    pub operation: JobOperation,
    pub target: NodeRef,
}

/// {robot_name, pickup node id|alias, delivery node id|alias}. Two jobs
/// bound by one request, enqueued pickup then delivery.
#[derive(Debug, Clone)]
pub struct RequestOrder {
    pub robot_name: String,
    pub pickup: NodeRef,
    pub delivery: NodeRef,
}

/// One request within a `WarehouseOrder`: a pickup/delivery node pair with
/// no robot named directly — the robot is derived from whichever
/// assignment's route contains both nodes (spec.md §4.4 step 4a).
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub pickup: NodeRef,
    pub delivery: NodeRef,
}

/// One robot's ordered route within a `WarehouseOrder`.
#[derive(Debug, Clone)]
pub struct RouteAssignment {
    pub robot_name: String,
    pub route: Vec<NodeRef>,
}

/// {requests:[...], assignments:[{robot_name, route}]}. Multiple requests
/// routed across multiple robots.
#[derive(Debug, Clone)]
pub struct WarehouseOrder {
    pub requests: Vec<RequestSpec>,
    pub assignments: Vec<RouteAssignment>,
}
