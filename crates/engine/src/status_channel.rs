// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The shared status-update channel (spec.md §4.5, §5): multi-producer
//! (every `RobotHandler`), single-consumer (the controller's drainer).
//! Bounded so producers exert backpressure instead of dropping updates.

use fleet_core::Job;
use tokio::sync::mpsc;

/// A job whose status changed and needs to be persisted.
#[derive(Debug, Clone)]
pub struct StatusUpdate(pub Job);

pub type StatusSender = mpsc::Sender<StatusUpdate>;
pub type StatusReceiver = mpsc::Receiver<StatusUpdate>;

/// Default bound chosen to absorb a burst across every robot without
/// letting a stalled drainer grow memory unbounded.
pub const DEFAULT_CAPACITY: usize = 256;

pub fn status_channel() -> (StatusSender, StatusReceiver) {
    mpsc::channel(DEFAULT_CAPACITY)
}

#[cfg(test)]
#[path = "status_channel_tests.rs"]
mod tests;
