// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `RobotTransport` — the action-client boundary to a robot's onboard
//! navigation stack (spec.md §1, §4.3). Out of scope per spec.md §1: the
//! core only depends on this trait and the [`TransportEvent`] stream it
//! produces after a goal is sent. No real network client ships here; see
//! `fake_robot_transport` for the in-memory double used across the
//! workspace's tests.

use async_trait::async_trait;
use fleet_core::{JobOperation, Node};
use thiserror::Error;
use tokio::sync::mpsc;

/// Cell index sentinel for goals that don't allocate a cell (spec.md §4.2:
/// DELIVERY and TRAVEL use the sentinel unused).
pub const NO_CELL: i32 = -1;

/// spec.md §6: "Robot transport goal payload: `{nodes: [Node…], operation:
/// int, robot_cell: int}`" — the full hydrated `Node` records, not bare ids.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub nodes: Vec<Node>,
    pub operation: JobOperation,
    pub robot_cell: i32,
}

impl Goal {
    pub fn new(nodes: Vec<Node>, operation: JobOperation) -> Self {
        Self { nodes, operation, robot_cell: NO_CELL }
    }

    pub fn with_cell(mut self, cell: i32) -> Self {
        self.robot_cell = cell;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalResult {
    Succeeded,
    Canceled,
    Aborted,
    Other,
}

#[derive(Debug, Clone)]
pub enum TransportEvent {
    Feedback { current_node: i64 },
    Result(GoalResult),
    Error(String),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("transport request failed: {0}")]
    Request(String),
    #[error("robot is not connected")]
    NotConnected,
}

/// A live goal dispatch. Dropping the handle does not cancel the goal;
/// callers that want cancellation must call [`RobotTransport::cancel`]
/// explicitly.
pub struct GoalHandle {
    pub events: mpsc::Receiver<TransportEvent>,
}

#[async_trait]
pub trait RobotTransport: Send + Sync {
    async fn send_goal(&self, robot: &str, goal: Goal) -> Result<GoalHandle, TransportError>;
    async fn cancel(&self, robot: &str) -> Result<(), TransportError>;
}
