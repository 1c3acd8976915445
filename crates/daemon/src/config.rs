// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Environment-variable configuration loading (spec.md §6, §9: "replace
//! [the dynamic config dict] with a typed configuration record").
//! Recognized variables mirror the recognized keys enumerated in
//! `fleet_core::config`.

use fleet_core::{FleetConfig, RobotConfig, RouteOracleConfig, StoreConfig};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable '{0}'")]
    Missing(&'static str),
    #[error("invalid value for environment variable '{name}': {value}")]
    Invalid { name: &'static str, value: String },
    #[error("FLEET_ROBOTS entry '{0}' is malformed, expected 'name:host:port:h1,h2,...[:tag]'")]
    MalformedRobot(String),
}

fn env_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::Missing(name))
}

fn env_var_or(name: &'static str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

fn parse_port(name: &'static str, value: &str) -> Result<u16, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Invalid { name, value: value.to_string() })
}

/// Parses `FLEET_ROBOTS` as a `;`-separated list of
/// `name:host:port:height,height,...[:tag]` entries. The trailing tag is
/// optional and seeds `RobotConfig::initial_tag`.
fn parse_robots(raw: &str) -> Result<HashMap<String, RobotConfig>, ConfigError> {
    let mut robots = HashMap::new();
    for entry in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let parts: Vec<&str> = entry.split(':').collect();
        let (name, host, port, heights, initial_tag) = match parts.as_slice() {
            [name, host, port, heights] => (*name, *host, *port, *heights, None),
            [name, host, port, heights, tag] => (*name, *host, *port, *heights, Some(tag.to_string())),
            _ => return Err(ConfigError::MalformedRobot(entry.to_string())),
        };
        let port: u16 = port.parse().map_err(|_| ConfigError::MalformedRobot(entry.to_string()))?;
        let cell_heights: Vec<f64> = heights
            .split(',')
            .filter(|s| !s.is_empty())
            .map(|h| h.parse::<f64>().map_err(|_| ConfigError::MalformedRobot(entry.to_string())))
            .collect::<Result<_, _>>()?;
        robots.insert(
            name.to_string(),
            RobotConfig { host: host.to_string(), port, cell_heights, initial_tag },
        );
    }
    Ok(robots)
}

/// Load the fleet's configuration from environment variables:
/// `FLEET_STORE_HOST`, `FLEET_STORE_PORT`, `FLEET_ORACLE_ENDPOINT`,
/// `FLEET_ORACLE_CREDENTIALS` (optional), `FLEET_ORACLE_DEFAULT_GRAPH`,
/// `FLEET_ROBOTS`.
pub fn load_config() -> Result<FleetConfig, ConfigError> {
    let store = StoreConfig {
        host: env_var_or("FLEET_STORE_HOST", "127.0.0.1"),
        port: parse_port("FLEET_STORE_PORT", &env_var_or("FLEET_STORE_PORT", "6379"))?,
    };
    let route_oracle = RouteOracleConfig {
        endpoint: env_var("FLEET_ORACLE_ENDPOINT")?,
        credentials: std::env::var("FLEET_ORACLE_CREDENTIALS").ok(),
        default_graph_id: env_var_or("FLEET_ORACLE_DEFAULT_GRAPH", "warehouse"),
    };
    let robots = parse_robots(&env_var_or("FLEET_ROBOTS", ""))?;
    Ok(FleetConfig { store, route_oracle, robots })
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
