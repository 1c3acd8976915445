// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job identifier, operation, and record (spec.md §3).

use crate::node::Node;
use crate::request::RequestId;
use crate::status::OrderStatus;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a Job.
    pub struct JobId;
}

/// What a Job asks a robot to do at its target node (spec.md §3, §6).
///
/// Wire encoding is the frozen integer code `TRAVEL=0, PICKUP=1, DELIVERY=2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum JobOperation {
    Travel = 0,
    Pickup = 1,
    Delivery = 2,
}

impl JobOperation {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Travel),
            1 => Some(Self::Pickup),
            2 => Some(Self::Delivery),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Whether this operation allocates a robot cell at dispatch time
    /// (spec.md §4.2: "DELIVERY and TRAVEL use the sentinel unused and do
    /// not touch cells at start").
    pub fn allocates_cell(&self) -> bool {
        matches!(self, Self::Pickup)
    }
}

crate::simple_display! {
    JobOperation {
        Travel => "travel",
        Pickup => "pickup",
        Delivery => "delivery",
    }
}

/// A single robot task: move to a node and optionally pick up or deliver
/// there (spec.md §3). Created on admission, mutated only by the owning
/// robot's handler.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    pub status: OrderStatus,
    pub operation: JobOperation,
    pub target_node: Node,
    pub request: Option<RequestId>,
    pub handling_robot: String,
}

impl Job {
    pub fn new(
        operation: JobOperation,
        target_node: Node,
        request: Option<RequestId>,
        handling_robot: impl Into<String>,
    ) -> Self {
        Self {
            id: JobId::new(),
            status: OrderStatus::Queuing,
            operation,
            target_node,
            request,
            handling_robot: handling_robot.into(),
        }
    }

    /// Once a Job enters a terminal status it never leaves it (spec.md §3).
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

crate::builder! {
    pub struct JobBuilder => Job {
        set {
            id: JobId = JobId::new(),
            status: OrderStatus = OrderStatus::Queuing,
            operation: JobOperation = JobOperation::Travel,
            target_node: Node = Node::builder().build(),
        }
        into {
            handling_robot: String = "r1",
        }
        option {
            request: RequestId = None,
        }
    }
}

#[cfg(test)]
#[path = "job_tests.rs"]
mod tests;
