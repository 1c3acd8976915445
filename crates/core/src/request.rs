// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request identifier and record (spec.md §3).
//!
//! A Request binds one pickup Job and one delivery Job to a single robot.
//! Its status is never stored — it is always derived from its two Jobs
//! (see [`crate::status::derive_request_status`] and spec.md §4.1).

use crate::job::JobId;
use serde::{Deserialize, Serialize};

crate::define_id! {
    /// Unique identifier for a Request.
    pub struct RequestId;
}

/// A pickup-and-delivery pair bound to one robot. Immutable after creation
/// except through its two jobs (spec.md §3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    pub id: RequestId,
    pub pickup: JobId,
    pub delivery: JobId,
    pub handling_robot: String,
}

impl Request {
    pub fn new(pickup: JobId, delivery: JobId, handling_robot: impl Into<String>) -> Self {
        Self { id: RequestId::new(), pickup, delivery, handling_robot: handling_robot.into() }
    }
}

crate::builder! {
    pub struct RequestBuilder => Request {
        set {
            id: RequestId = RequestId::new(),
            pickup: JobId = JobId::new(),
            delivery: JobId = JobId::new(),
        }
        into {
            handling_robot: String = "r1",
        }
    }
}

#[cfg(test)]
#[path = "request_tests.rs"]
mod tests;
