// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `WarehouseController` error taxonomy (spec.md §7). Validation failures
//! never persist anything; store failures may leave partial writes, which
//! `OrderStore::get_request_status` later surfaces as `InconsistentState`
//! rather than the controller repairing them.

use fleet_core::ValidationError;
use fleet_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("store write failed: {0}")]
    Store(#[from] StoreError),
    #[error("route oracle request failed: {0}")]
    Oracle(#[from] fleet_adapters::OracleError),
    #[error("unknown job id '{0}'")]
    UnknownJob(String),
    #[error("unknown request id '{0}'")]
    UnknownRequest(String),
}
