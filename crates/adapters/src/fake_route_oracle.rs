// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory `RouteOracle` double. Used by `fleet-engine` and
//! `fleet-daemon` tests, and exported under the `test-support` feature for
//! downstream crates' fixtures (spec.md §8 scenarios S1-S6).

use crate::route_oracle::{OracleError, RouteOracle};
use async_trait::async_trait;
use fleet_core::Node;
use parking_lot::RwLock;
use std::collections::HashMap;

#[derive(Default)]
struct Graph {
    nodes_by_id: HashMap<i64, Node>,
    nodes_by_alias: HashMap<String, i64>,
    nodes_by_tag: HashMap<String, i64>,
    /// (start_id, end_id) -> path of node ids, exclusive of `start_id`.
    paths: HashMap<(i64, i64), Vec<i64>>,
}

pub struct FakeRouteOracle {
    default_graph_id: String,
    graphs: RwLock<HashMap<String, Graph>>,
}

impl FakeRouteOracle {
    pub fn new(default_graph_id: impl Into<String>) -> Self {
        let default_graph_id = default_graph_id.into();
        let mut graphs = HashMap::new();
        graphs.insert(default_graph_id.clone(), Graph::default());
        Self { default_graph_id, graphs: RwLock::new(graphs) }
    }

    pub fn add_node(&self, node: Node) {
        self.add_node_to(&self.default_graph_id.clone(), node);
    }

    pub fn add_node_to(&self, graph_id: &str, node: Node) {
        let mut graphs = self.graphs.write();
        let graph = graphs.entry(graph_id.to_string()).or_default();
        if let Some(alias) = &node.alias {
            graph.nodes_by_alias.insert(alias.clone(), node.id);
        }
        if let Some(tag) = &node.tag_id {
            graph.nodes_by_tag.insert(tag.clone(), node.id);
        }
        graph.nodes_by_id.insert(node.id, node);
    }

    pub fn add_path(&self, start_id: i64, end_id: i64, path: Vec<i64>) {
        self.add_path_to(&self.default_graph_id.clone(), start_id, end_id, path);
    }

    pub fn add_path_to(&self, graph_id: &str, start_id: i64, end_id: i64, path: Vec<i64>) {
        let mut graphs = self.graphs.write();
        let graph = graphs.entry(graph_id.to_string()).or_default();
        graph.paths.insert((start_id, end_id), path);
    }

    fn resolve_graph(&self, graph: Option<&str>) -> Result<String, OracleError> {
        match graph {
            Some(g) => Ok(g.to_string()),
            None if !self.default_graph_id.is_empty() => Ok(self.default_graph_id.clone()),
            None => Err(OracleError::NoDefaultGraph),
        }
    }
}

#[async_trait]
impl RouteOracle for FakeRouteOracle {
    async fn get_node_by_id(&self, id: i64, graph: Option<&str>) -> Result<Option<Node>, OracleError> {
        let graph_id = self.resolve_graph(graph)?;
        let graphs = self.graphs.read();
        Ok(graphs.get(&graph_id).and_then(|g| g.nodes_by_id.get(&id)).cloned())
    }

    async fn get_node_by_alias(
        &self,
        alias: &str,
        graph: Option<&str>,
    ) -> Result<Option<Node>, OracleError> {
        let graph_id = self.resolve_graph(graph)?;
        let graphs = self.graphs.read();
        Ok(graphs.get(&graph_id).and_then(|g| {
            g.nodes_by_alias.get(alias).and_then(|id| g.nodes_by_id.get(id)).cloned()
        }))
    }

    async fn get_node_by_tag_id(
        &self,
        tag: &str,
        graph: Option<&str>,
    ) -> Result<Option<Node>, OracleError> {
        let graph_id = self.resolve_graph(graph)?;
        let graphs = self.graphs.read();
        Ok(graphs
            .get(&graph_id)
            .and_then(|g| g.nodes_by_tag.get(tag).and_then(|id| g.nodes_by_id.get(id)).cloned()))
    }

    async fn get_nodes_by_ids(&self, ids: &[i64], graph: Option<&str>) -> Result<Vec<Node>, OracleError> {
        let graph_id = self.resolve_graph(graph)?;
        let graphs = self.graphs.read();
        let Some(g) = graphs.get(&graph_id) else { return Ok(Vec::new()) };
        Ok(ids.iter().filter_map(|id| g.nodes_by_id.get(id).cloned()).collect())
    }

    async fn get_shortest_path_by_id(
        &self,
        start_id: i64,
        end_id: i64,
        graph: Option<&str>,
    ) -> Result<Vec<i64>, OracleError> {
        let graph_id = self.resolve_graph(graph)?;
        let graphs = self.graphs.read();
        Ok(graphs
            .get(&graph_id)
            .and_then(|g| g.paths.get(&(start_id, end_id)))
            .cloned()
            .unwrap_or_default())
    }

    async fn get_shortest_path_by_alias(
        &self,
        start_alias: &str,
        end_alias: &str,
        graph: Option<&str>,
    ) -> Result<Vec<i64>, OracleError> {
        let start = self.get_node_by_alias(start_alias, graph).await?;
        let end = self.get_node_by_alias(end_alias, graph).await?;
        match (start, end) {
            (Some(start), Some(end)) => self.get_shortest_path_by_id(start.id, end.id, graph).await,
            _ => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
#[path = "fake_route_oracle_tests.rs"]
mod tests;
