// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Flat-dict (de)serialization for Jobs and Requests (spec.md §4.1, §6).
//!
//! Each record is a flat map of strings; nested values (the target Node)
//! are encoded as JSON text, enums as their integer code, and UUIDs as
//! their string form. The id itself is carried as a field (not just
//! implied by the key) so that `scan_prefix` results can be reconstructed
//! without a round-trip to the key name — mirroring
//! `original_source/fleet_gateway`'s `job_to_dict`, which embeds `uuid`.
//! Deserializers tolerate missing optional fields and return `None` on an
//! incomplete record rather than erroring.

use fleet_core::{Job, JobId, JobOperation, Node, OrderStatus, Request, RequestId};
use std::collections::HashMap;

pub fn job_to_fields(job: &Job) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    fields.insert("id".to_string(), job.id.to_string());
    fields.insert("status".to_string(), job.status.code().to_string());
    fields.insert("operation".to_string(), job.operation.code().to_string());
    fields.insert(
        "target_node".to_string(),
        serde_json::to_string(&job.target_node).unwrap_or_default(),
    );
    fields.insert(
        "request".to_string(),
        job.request.map(|r| r.to_string()).unwrap_or_default(),
    );
    fields.insert("handling_robot".to_string(), job.handling_robot.clone());
    fields
}

pub fn fields_to_job(fields: &HashMap<String, String>) -> Option<Job> {
    let id = JobId::from_string(fields.get("id")?).ok()?;
    let status = OrderStatus::from_code(fields.get("status")?.parse().ok()?)?;
    let operation = JobOperation::from_code(fields.get("operation")?.parse().ok()?)?;
    let target_node: Node = serde_json::from_str(fields.get("target_node")?).ok()?;
    let request = fields
        .get("request")
        .filter(|s| !s.is_empty())
        .and_then(|s| RequestId::from_string(s).ok());
    let handling_robot = fields.get("handling_robot")?.clone();
    Some(Job { id, status, operation, target_node, request, handling_robot })
}

pub fn request_to_fields(request: &Request) -> HashMap<String, String> {
    let mut fields = HashMap::new();
    fields.insert("id".to_string(), request.id.to_string());
    fields.insert("pickup".to_string(), request.pickup.to_string());
    fields.insert("delivery".to_string(), request.delivery.to_string());
    fields.insert("handling_robot".to_string(), request.handling_robot.clone());
    fields
}

pub fn fields_to_request(fields: &HashMap<String, String>) -> Option<Request> {
    let id = RequestId::from_string(fields.get("id")?).ok()?;
    let pickup = JobId::from_string(fields.get("pickup")?).ok()?;
    let delivery = JobId::from_string(fields.get("delivery")?).ok()?;
    let handling_robot = fields.get("handling_robot")?.clone();
    Some(Request { id, pickup, delivery, handling_robot })
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
