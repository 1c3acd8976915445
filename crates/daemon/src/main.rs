// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `fleetd` — the warehouse fleet orchestrator process. Wires the typed
//! configuration (spec.md §6), the Redis-backed `OrderStore`, the
//! `RouteOracle`/`RobotTransport` collaborators, and the
//! `WarehouseController` together, then blocks until an operator shutdown
//! signal arrives.
//!
//! `RouteOracle` and `RobotTransport` have no real network client in this
//! repo (spec.md §1: both are external collaborators, specified only by
//! the interface the core consumes). Build with `--features dev-fakes` to
//! run against the in-memory fakes instead, e.g. for local smoke-testing
//! against a real or in-memory `OrderStore`.

use fleet_core::RobotConfig;
use fleet_daemon::{load_config, WarehouseController};
use fleet_engine::{status_channel, FleetHandler};
use fleet_store::{OrderStore, RedisKvStore};
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error)]
enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] fleet_daemon::ConfigError),
    #[error("failed to connect to the order store: {0}")]
    Store(#[from] fleet_store::KvError),
    #[cfg(not(feature = "dev-fakes"))]
    #[error(
        "no RouteOracle/RobotTransport client is built into this binary; \
         rebuild with --features dev-fakes to run against the in-memory fakes"
    )]
    NoAdapters,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fleet_daemon::logging::init();

    if let Err(err) = run().await {
        tracing::error!(error = %err, "fleetd exited with an error");
        return Err(err.into());
    }
    Ok(())
}

async fn run() -> Result<(), StartupError> {
    let config = load_config()?;
    tracing::info!(robots = config.robots.len(), "loaded configuration");

    let kv = RedisKvStore::connect(&config.store.host, config.store.port).await?;
    let store = Arc::new(OrderStore::new(Arc::new(kv)));

    let (oracle, transport) = build_adapters(&config.robots)?;

    let (status_tx, status_rx) = status_channel();
    let fleet = Arc::new(FleetHandler::new(&config.robots, oracle.clone(), transport, status_tx));
    let controller = WarehouseController::new(store, oracle, fleet, status_rx);

    tracing::info!("fleetd up, awaiting shutdown signal");
    tokio::signal::ctrl_c().await.ok();
    tracing::info!("shutdown signal received, tearing down fleet");
    controller.shutdown().await;
    Ok(())
}

#[cfg(feature = "dev-fakes")]
fn build_adapters(
    robots: &HashMap<String, RobotConfig>,
) -> Result<(Arc<dyn fleet_adapters::RouteOracle>, Arc<dyn fleet_adapters::RobotTransport>), StartupError> {
    let oracle = Arc::new(fleet_adapters::FakeRouteOracle::new("warehouse"));
    for (name, config) in robots {
        tracing::warn!(robot = %name, "dev-fakes build: RobotTransport goals are not actually dispatched anywhere");
        let _ = config;
    }
    let transport = Arc::new(fleet_adapters::FakeRobotTransport::new());
    Ok((oracle, transport))
}

#[cfg(not(feature = "dev-fakes"))]
fn build_adapters(
    _robots: &HashMap<String, RobotConfig>,
) -> Result<(Arc<dyn fleet_adapters::RouteOracle>, Arc<dyn fleet_adapters::RobotTransport>), StartupError> {
    Err(StartupError::NoAdapters)
}
