// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fleet-engine: the per-robot finite state machine (spec.md §4.2) and the
//! fleet-wide routing façade over it (spec.md §4.3). This is the
//! concurrently-driven half of the system — mutated by both API-context
//! calls and transport callbacks (spec.md §5) — so each [`RobotHandler`]'s
//! state lives behind its own lock.

pub mod error;
pub mod fleet_handler;
pub mod robot_handler;
pub mod status_channel;

pub use error::HandlerError;
pub use fleet_handler::FleetHandler;
pub use robot_handler::{RobotHandler, RobotSnapshot};
pub use status_channel::{status_channel, StatusReceiver, StatusSender, StatusUpdate};
