// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Warehouse path-graph nodes, as resolved by the `RouteOracle`.

use serde::{Deserialize, Serialize};

/// Kind of a node in the warehouse path graph.
///
/// Wire encoding is the frozen integer code from spec.md §6
/// (`WAYPOINT=0, CONVEYOR=1, SHELF=2, CELL=3, DEPOT=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum NodeType {
    Waypoint = 0,
    Conveyor = 1,
    Shelf = 2,
    Cell = 3,
    Depot = 4,
}

impl NodeType {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Waypoint),
            1 => Some(Self::Conveyor),
            2 => Some(Self::Shelf),
            3 => Some(Self::Cell),
            4 => Some(Self::Depot),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }
}

crate::simple_display! {
    NodeType {
        Waypoint => "waypoint",
        Conveyor => "conveyor",
        Shelf => "shelf",
        Cell => "cell",
        Depot => "depot",
    }
}

/// A point in the warehouse path graph, immutable and supplied by the
/// `RouteOracle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag_id: Option<String>,
    pub x: f64,
    pub y: f64,
    pub height: f64,
    pub node_type: NodeType,
}

impl Node {
    /// Whether this node is a valid TRAVEL target per spec.md §3:
    /// "A TRAVEL job's target must be a WAYPOINT".
    pub fn is_waypoint(&self) -> bool {
        matches!(self.node_type, NodeType::Waypoint)
    }
}

crate::builder! {
    pub struct NodeBuilder => Node {
        set {
            id: i64 = 1,
            x: f64 = 0.0,
            y: f64 = 0.0,
            height: f64 = 0.0,
            node_type: NodeType = NodeType::Waypoint,
        }
        option {
            alias: String = None,
            tag_id: String = None,
        }
    }
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
