// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Controllable in-memory [`RobotTransport`] double. Tests drive a robot's
//! simulated navigation stack by calling `push_feedback`/`push_result`/
//! `push_error` after inspecting the goal `send_goal` was last given.

use crate::robot_transport::{Goal, GoalHandle, RobotTransport, TransportError, TransportEvent};
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;
use tokio::sync::mpsc;

#[derive(Default)]
pub struct FakeRobotTransport {
    senders: Mutex<HashMap<String, mpsc::Sender<TransportEvent>>>,
    goals: Mutex<HashMap<String, Goal>>,
}

impl FakeRobotTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_goal(&self, robot: &str) -> Option<Goal> {
        self.goals.lock().get(robot).cloned()
    }

    pub fn is_dispatched(&self, robot: &str) -> bool {
        self.senders.lock().contains_key(robot)
    }

    async fn emit(&self, robot: &str, event: TransportEvent) {
        let sender = self.senders.lock().get(robot).cloned();
        if let Some(sender) = sender {
            let _ = sender.send(event).await;
        }
    }

    pub async fn push_feedback(&self, robot: &str, current_node: i64) {
        self.emit(robot, TransportEvent::Feedback { current_node }).await;
    }

    pub async fn push_result(&self, robot: &str, result: crate::robot_transport::GoalResult) {
        self.emit(robot, TransportEvent::Result(result)).await;
        self.senders.lock().remove(robot);
    }

    pub async fn push_error(&self, robot: &str, message: impl Into<String>) {
        self.emit(robot, TransportEvent::Error(message.into())).await;
        self.senders.lock().remove(robot);
    }
}

#[async_trait]
impl RobotTransport for FakeRobotTransport {
    async fn send_goal(&self, robot: &str, goal: Goal) -> Result<GoalHandle, TransportError> {
        let (tx, rx) = mpsc::channel(16);
        self.senders.lock().insert(robot.to_string(), tx);
        self.goals.lock().insert(robot.to_string(), goal);
        Ok(GoalHandle { events: rx })
    }

    async fn cancel(&self, robot: &str) -> Result<(), TransportError> {
        self.emit(robot, TransportEvent::Result(crate::robot_transport::GoalResult::Canceled)).await;
        self.senders.lock().remove(robot);
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_robot_transport_tests.rs"]
mod tests;
