// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Logging setup (spec.md §1 ambient concern, out of scope as a *feature*
//! but carried as infrastructure). `RUST_LOG` controls verbosity; defaults
//! to `info` for this crate and its dependents.

use tracing_subscriber::EnvFilter;

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
