// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fleet-wide routing façade (spec.md §4.3): a name-keyed map of
//! `RobotHandler`s. All operations are no-ops / return `None`/`false` for
//! an unknown robot name rather than erroring — the caller (the
//! `WarehouseController`) is responsible for rejecting unknown robots
//! before this layer is reached.

use crate::robot_handler::{RobotHandler, RobotSnapshot};
use crate::status_channel::StatusSender;
use fleet_adapters::{RobotTransport, RouteOracle};
use fleet_core::{Job, JobId, RobotCell, RobotConfig};
use std::collections::HashMap;
use std::sync::Arc;

pub struct FleetHandler {
    robots: HashMap<String, Arc<RobotHandler>>,
}

impl FleetHandler {
    /// Build one `RobotHandler` per entry in the robots configuration
    /// (spec.md §4.3: "constructed from a robots configuration (name ->
    /// host, port, cell heights)"). `host`/`port` are consumed by the
    /// caller's transport construction, not stored here.
    pub fn new(
        configs: &HashMap<String, RobotConfig>,
        oracle: Arc<dyn RouteOracle>,
        transport: Arc<dyn RobotTransport>,
        status_tx: StatusSender,
    ) -> Self {
        let robots = configs
            .iter()
            .map(|(name, config)| {
                let handler = RobotHandler::new(
                    name.clone(),
                    &config.cell_heights,
                    config.initial_tag.clone(),
                    Arc::clone(&oracle),
                    Arc::clone(&transport),
                    status_tx.clone(),
                );
                (name.clone(), handler)
            })
            .collect();
        Self { robots }
    }

    pub fn get_robot(&self, name: &str) -> Option<Arc<RobotHandler>> {
        self.robots.get(name).cloned()
    }

    pub fn get_robots(&self) -> Vec<RobotSnapshot> {
        self.robots.values().map(|r| r.to_snapshot()).collect()
    }

    pub async fn assign_job(&self, robot_name: &str, job: Job) {
        if let Some(robot) = self.robots.get(robot_name) {
            robot.assign(job).await;
        }
    }

    pub fn get_robot_cells(&self, robot_name: &str) -> Option<Vec<RobotCell>> {
        self.robots.get(robot_name).map(|r| r.cells())
    }

    pub fn get_current_job(&self, robot_name: &str) -> Option<Job> {
        self.robots.get(robot_name).and_then(|r| r.current_job())
    }

    pub fn get_job_queue(&self, robot_name: &str) -> Option<Vec<Job>> {
        self.robots.get(robot_name).map(|r| r.queue())
    }

    pub fn remove_queued_job(&self, robot_name: &str, job_id: &JobId) -> bool {
        self.robots.get(robot_name).map(|r| r.remove_queued_job(job_id)).unwrap_or(false)
    }

    pub fn free_cell(&self, robot_name: &str, cell_index: usize) {
        if let Some(robot) = self.robots.get(robot_name) {
            robot.free_cell(cell_index);
        }
    }

    /// Mark every robot inactive, blocking future dispatch. In-flight
    /// jobs settle in whatever terminal status the transport reports
    /// (spec.md §5: "Operator shutdown").
    pub fn shutdown(&self) {
        for robot in self.robots.values() {
            robot.set_active(false);
        }
    }
}

#[cfg(test)]
#[path = "fleet_handler_tests.rs"]
mod tests;
