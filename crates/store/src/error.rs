// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Store-level errors (spec.md §7).

use thiserror::Error;

/// Transport-level failure from the underlying kv store.
#[derive(Debug, Error)]
pub enum KvError {
    #[error("kv store connection failed: {0}")]
    Connection(String),
    #[error("kv store command failed: {0}")]
    Command(String),
}

/// Raised by `OrderStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A `set_*` call failed. Partial writes may already exist; derived
    /// status will surface `InconsistentState` on subsequent reads
    /// (spec.md §7).
    #[error("failed to write {kind} {id}: {source}")]
    WriteFailed { kind: &'static str, id: String, #[source] source: KvError },

    /// `get_request_status` could not find a referenced job (spec.md §4.1,
    /// §7).
    #[error("request {request} references missing job {job}")]
    InconsistentState { request: String, job: String },

    #[error(transparent)]
    Kv(#[from] KvError),
}
