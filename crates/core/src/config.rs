// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Typed configuration (ambient stack, SPEC_FULL.md §2a). Replaces the
//! source's environment-read dicts with a single record enumerating the
//! recognized keys: store connection, route-oracle endpoint, and the
//! robots map.

use crate::robot::RobotConfig;
use std::collections::HashMap;

/// Top-level configuration consumed at startup (spec.md §6).
#[derive(Debug, Clone)]
pub struct FleetConfig {
    pub store: StoreConfig,
    pub route_oracle: RouteOracleConfig,
    pub robots: HashMap<String, RobotConfig>,
}

#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct RouteOracleConfig {
    pub endpoint: String,
    pub credentials: Option<String>,
    pub default_graph_id: String,
}
