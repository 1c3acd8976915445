// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `RouteOracle` — a remote graph service that resolves node ids/aliases/
//! tag ids to node records and returns shortest paths (spec.md §1, §4.5).
//! Out of scope per spec.md §1: the core treats every call as a simple
//! fallible query. No real network client ships here; see
//! `fake_route_oracle` for the in-memory double used across the workspace's
//! tests.

use async_trait::async_trait;
use fleet_core::Node;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle request failed: {0}")]
    Request(String),
    #[error("no graph id given and no default graph id configured")]
    NoDefaultGraph,
}

/// Pure, synchronous from the core's point of view (spec.md §4.5): each
/// call may block on a network round trip but is otherwise a plain
/// fallible query against a graph keyed by an optional graph id.
#[async_trait]
pub trait RouteOracle: Send + Sync {
    async fn get_node_by_id(&self, id: i64, graph: Option<&str>) -> Result<Option<Node>, OracleError>;
    async fn get_node_by_alias(
        &self,
        alias: &str,
        graph: Option<&str>,
    ) -> Result<Option<Node>, OracleError>;
    async fn get_node_by_tag_id(
        &self,
        tag: &str,
        graph: Option<&str>,
    ) -> Result<Option<Node>, OracleError>;
    async fn get_nodes_by_ids(&self, ids: &[i64], graph: Option<&str>) -> Result<Vec<Node>, OracleError>;
    /// Empty result means no path (spec.md §4.5).
    async fn get_shortest_path_by_id(
        &self,
        start_id: i64,
        end_id: i64,
        graph: Option<&str>,
    ) -> Result<Vec<i64>, OracleError>;
    async fn get_shortest_path_by_alias(
        &self,
        start_alias: &str,
        end_alias: &str,
        graph: Option<&str>,
    ) -> Result<Vec<i64>, OracleError>;
}
