// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fleet-adapters: the external-collaborator boundary (spec.md §1) — a
//! graph/route service and a per-robot navigation action client. Neither
//! has a real network implementation here; `fleet-engine` and
//! `fleet-daemon` depend only on the [`RouteOracle`] and [`RobotTransport`]
//! traits, and the `test-support` feature exposes in-memory doubles of
//! both for the rest of the workspace's test suites.

pub mod robot_transport;
pub mod route_oracle;

#[cfg(any(test, feature = "test-support"))]
pub mod fake_robot_transport;
#[cfg(any(test, feature = "test-support"))]
pub mod fake_route_oracle;

pub use robot_transport::{Goal, GoalHandle, GoalResult, RobotTransport, TransportError, TransportEvent, NO_CELL};
pub use route_oracle::{OracleError, RouteOracle};

#[cfg(any(test, feature = "test-support"))]
pub use fake_robot_transport::FakeRobotTransport;
#[cfg(any(test, feature = "test-support"))]
pub use fake_route_oracle::FakeRouteOracle;
