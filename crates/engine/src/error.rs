// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Handler-local error taxonomy (spec.md §7): failures here never escape
//! to the caller of `assign`/`trigger` — they are absorbed into
//! `action_status = ERROR` and a FAILED job status instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("no free cell on robot '{robot}'")]
    NoFreeCell { robot: String },
    #[error("robot '{robot}' has no known start tag")]
    UnknownStartTag { robot: String },
    #[error("no path found from current position to target node {target}")]
    NoPathFound { target: i64 },
    #[error("route oracle request failed: {0}")]
    Oracle(#[from] fleet_adapters::OracleError),
    #[error("transport request failed: {0}")]
    Transport(#[from] fleet_adapters::TransportError),
}
