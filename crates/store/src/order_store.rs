// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Authoritative persistence of Jobs and Requests (spec.md §4.1).
//!
//! The store has no internal locking; concurrent writers of the same key
//! race (last-writer-wins). Callers must serialize writes for a given id
//! through the owning `RobotHandler` (spec.md §4.1, §5).

use crate::error::StoreError;
use crate::kv::KvStore;
use crate::record::{fields_to_job, fields_to_request, job_to_fields, request_to_fields};
use fleet_core::{derive_request_status, Job, JobId, OrderStatus, Request, RequestId};
use std::sync::Arc;

fn job_key(id: &JobId) -> String {
    format!("job:{id}")
}

fn job_channel(id: &JobId) -> String {
    format!("job:{id}:update")
}

fn request_key(id: &RequestId) -> String {
    format!("request:{id}")
}

fn request_channel(id: &RequestId) -> String {
    format!("request:{id}:update")
}

const UPDATE_PAYLOAD: &str = "updated";

pub struct OrderStore {
    kv: Arc<dyn KvStore>,
}

impl OrderStore {
    pub fn new(kv: Arc<dyn KvStore>) -> Self {
        Self { kv }
    }

    /// Serialize and upsert under `job:{id}`; publish `job:{id}:update`.
    pub async fn set_job(&self, job: &Job) -> Result<(), StoreError> {
        self.kv
            .set_hash(&job_key(&job.id), job_to_fields(job))
            .await
            .map_err(|source| StoreError::WriteFailed {
                kind: "job",
                id: job.id.to_string(),
                source,
            })?;
        self.kv.publish(&job_channel(&job.id), UPDATE_PAYLOAD).await?;
        Ok(())
    }

    /// Serialize and upsert under `request:{id}`; publish
    /// `request:{id}:update`.
    pub async fn set_request(&self, request: &Request) -> Result<(), StoreError> {
        self.kv
            .set_hash(&request_key(&request.id), request_to_fields(request))
            .await
            .map_err(|source| StoreError::WriteFailed {
                kind: "request",
                id: request.id.to_string(),
                source,
            })?;
        self.kv.publish(&request_channel(&request.id), UPDATE_PAYLOAD).await?;
        Ok(())
    }

    pub async fn get_job(&self, id: &JobId) -> Result<Option<Job>, StoreError> {
        let fields = self.kv.get_hash(&job_key(id)).await?;
        Ok(fields.and_then(|f| fields_to_job(&f)))
    }

    pub async fn get_request(&self, id: &RequestId) -> Result<Option<Request>, StoreError> {
        let fields = self.kv.get_hash(&request_key(id)).await?;
        Ok(fields.and_then(|f| fields_to_request(&f)))
    }

    /// Scan by prefix; missing/unparseable records are skipped, not
    /// errored (spec.md §4.1).
    pub async fn get_jobs(&self) -> Result<Vec<Job>, StoreError> {
        let rows = self.kv.scan_prefix("job:").await?;
        Ok(rows.iter().filter_map(fields_to_job).collect())
    }

    pub async fn get_requests(&self) -> Result<Vec<Request>, StoreError> {
        let rows = self.kv.scan_prefix("request:").await?;
        Ok(rows.iter().filter_map(fields_to_request).collect())
    }

    /// Derived per the precedence table in spec.md §4.1. Fails with
    /// `InconsistentState` if either referenced job is absent.
    pub async fn get_request_status(&self, request: &Request) -> Result<OrderStatus, StoreError> {
        let pickup = self.get_job(&request.pickup).await?.ok_or_else(|| {
            StoreError::InconsistentState {
                request: request.id.to_string(),
                job: request.pickup.to_string(),
            }
        })?;
        let delivery = self.get_job(&request.delivery).await?.ok_or_else(|| {
            StoreError::InconsistentState {
                request: request.id.to_string(),
                job: request.delivery.to_string(),
            }
        })?;
        Ok(derive_request_status(pickup.status, delivery.status))
    }
}

#[cfg(test)]
#[path = "order_store_tests.rs"]
mod tests;
