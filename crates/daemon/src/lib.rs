// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fleet-daemon: `WarehouseController` (spec.md §4.4), the status-update
//! drainer it owns, environment configuration loading, and logging setup
//! for the `fleetd` binary.

pub mod config;
pub mod controller;
pub mod error;
pub mod logging;
pub mod order_shapes;

pub use config::{load_config, ConfigError};
pub use controller::{RequestDescription, WarehouseController};
pub use error::ControllerError;
pub use order_shapes::{JobOrder, NodeRef, RequestOrder, RequestSpec, RouteAssignment, WarehouseOrder};
