// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Robot operational state shared between `fleet-engine` and its callers:
//! connection/action status enums, cells, and static configuration
//! (spec.md §3, §6).

use crate::job::JobId;
use serde::{Deserialize, Serialize};

/// Derived from transport health (spec.md §3).
///
/// Wire encoding: `OFFLINE=0, ONLINE=1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum RobotConnectionStatus {
    Offline = 0,
    Online = 1,
}

crate::simple_display! {
    RobotConnectionStatus {
        Offline => "offline",
        Online => "online",
    }
}

/// Local FSM for a robot's current dispatch activity (spec.md §4.2).
///
/// Wire encoding: `IDLE=0, OPERATING=1, ERROR=2, CANCELED=3, SUCCEEDED=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum RobotActionStatus {
    Idle = 0,
    Operating = 1,
    Error = 2,
    Canceled = 3,
    Succeeded = 4,
}

impl RobotActionStatus {
    /// Statuses from which `trigger` may dispatch (spec.md §4.2, Glossary).
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Idle | Self::Canceled | Self::Succeeded)
    }
}

crate::simple_display! {
    RobotActionStatus {
        Idle => "idle",
        Operating => "operating",
        Error => "error",
        Canceled => "canceled",
        Succeeded => "succeeded",
    }
}

/// A vertical storage slot on a robot. Holds at most one item at a time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RobotCell {
    pub height: f64,
    pub holding: Option<JobId>,
}

impl RobotCell {
    pub fn new(height: f64) -> Self {
        Self { height, holding: None }
    }

    pub fn is_free(&self) -> bool {
        self.holding.is_none()
    }
}

/// Static per-robot configuration (spec.md §6: `robots: { name: { host,
/// port, cell_heights } } }`). Replaces the source's dynamic config dict
/// with a typed record enumerating the only recognized keys.
///
/// `initial_tag` is the fiducial the robot reports at its home/dock
/// position when the process starts (spec.md §8 S1: "Robots: {R1:
/// cells=[...], tag=\"T1\"}"); it seeds `RobotHandler`'s last known tag
/// until a subsequent pose report overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RobotConfig {
    pub host: String,
    pub port: u16,
    pub cell_heights: Vec<f64>,
    pub initial_tag: Option<String>,
}

#[cfg(test)]
#[path = "robot_tests.rs"]
mod tests;
