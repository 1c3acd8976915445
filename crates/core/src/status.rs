// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Order status shared by Jobs and (derived) Requests.

use serde::{Deserialize, Serialize};

/// Status of a Job, or the derived status of a Request (spec.md §3, §4.1).
///
/// Wire encoding is the frozen integer code from spec.md §6
/// (`QUEUING=0, IN_PROGRESS=1, FAILED=2, CANCELED=3, COMPLETED=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum OrderStatus {
    Queuing = 0,
    InProgress = 1,
    Failed = 2,
    Canceled = 3,
    Completed = 4,
}

impl OrderStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Queuing),
            1 => Some(Self::InProgress),
            2 => Some(Self::Failed),
            3 => Some(Self::Canceled),
            4 => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Terminal set = {FAILED, CANCELED, COMPLETED} (spec.md §3).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Failed | Self::Canceled | Self::Completed)
    }
}

crate::simple_display! {
    OrderStatus {
        Queuing => "queuing",
        InProgress => "in_progress",
        Failed => "failed",
        Canceled => "canceled",
        Completed => "completed",
    }
}

/// Derive a Request's status from its two member Jobs' statuses, per the
/// precedence table in spec.md §4.1 (first match wins).
pub fn derive_request_status(pickup: OrderStatus, delivery: OrderStatus) -> OrderStatus {
    if pickup == OrderStatus::Failed || delivery == OrderStatus::Failed {
        return OrderStatus::Failed;
    }
    if pickup == OrderStatus::Canceled || delivery == OrderStatus::Canceled {
        return OrderStatus::Canceled;
    }
    if pickup == OrderStatus::Completed && delivery == OrderStatus::Completed {
        return OrderStatus::Completed;
    }
    if pickup == OrderStatus::InProgress || delivery == OrderStatus::InProgress {
        return OrderStatus::InProgress;
    }
    OrderStatus::Queuing
}

#[cfg(test)]
#[path = "status_tests.rs"]
mod tests;
