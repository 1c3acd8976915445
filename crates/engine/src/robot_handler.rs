// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-robot finite state machine (spec.md §4.2). `RobotHandler` owns one
//! robot's live connection, job queue, and cells. Its mutable state is
//! mutated from both the API context (`assign`, `set_active`, `free_cell`)
//! and transport callbacks (spec.md §5), so it is guarded by a single
//! `parking_lot::Mutex` rather than composed of `Arc<Mutex<Field>>` per
//! field — one of the two concurrency strategies the design notes allow
//! (spec.md §9 option (b): "a mutex around the per-handler mutable
//! state").

use crate::error::HandlerError;
use crate::status_channel::{StatusSender, StatusUpdate};
use fleet_adapters::{Goal, GoalResult, RobotTransport, RouteOracle, TransportEvent, NO_CELL};
use fleet_core::{Job, JobOperation, OrderStatus, RobotActionStatus, RobotCell, RobotConnectionStatus};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use tracing::Instrument;

/// Read-only view for the query layer (spec.md §4.2 `to_snapshot`).
#[derive(Debug, Clone)]
pub struct RobotSnapshot {
    pub name: String,
    pub active: bool,
    pub connection_status: RobotConnectionStatus,
    pub action_status: RobotActionStatus,
    pub last_known_tag: Option<String>,
    pub cells: Vec<RobotCell>,
    pub current_job: Option<Job>,
    pub queue: Vec<Job>,
}

struct State {
    active: bool,
    connection_status: RobotConnectionStatus,
    action_status: RobotActionStatus,
    last_known_tag: Option<String>,
    cells: Vec<RobotCell>,
    current_job: Option<Job>,
    current_cell: Option<usize>,
    queue: VecDeque<Job>,
}

pub struct RobotHandler {
    name: String,
    state: Mutex<State>,
    oracle: Arc<dyn RouteOracle>,
    transport: Arc<dyn RobotTransport>,
    status_tx: StatusSender,
}

impl RobotHandler {
    pub fn new(
        name: impl Into<String>,
        cell_heights: &[f64],
        last_known_tag: Option<String>,
        oracle: Arc<dyn RouteOracle>,
        transport: Arc<dyn RobotTransport>,
        status_tx: StatusSender,
    ) -> Arc<Self> {
        Arc::new(Self {
            name: name.into(),
            state: Mutex::new(State {
                active: true,
                connection_status: RobotConnectionStatus::Online,
                action_status: RobotActionStatus::Idle,
                last_known_tag,
                cells: cell_heights.iter().copied().map(RobotCell::new).collect(),
                current_job: None,
                current_cell: None,
                queue: VecDeque::new(),
            }),
            oracle,
            transport,
            status_tx,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn to_snapshot(&self) -> RobotSnapshot {
        let state = self.state.lock();
        RobotSnapshot {
            name: self.name.clone(),
            active: state.active,
            connection_status: state.connection_status,
            action_status: state.action_status,
            last_known_tag: state.last_known_tag.clone(),
            cells: state.cells.clone(),
            current_job: state.current_job.clone(),
            queue: state.queue.iter().cloned().collect(),
        }
    }

    pub fn cells(&self) -> Vec<RobotCell> {
        self.state.lock().cells.clone()
    }

    pub fn current_job(&self) -> Option<Job> {
        self.state.lock().current_job.clone()
    }

    pub fn queue(&self) -> Vec<Job> {
        self.state.lock().queue.iter().cloned().collect()
    }

    /// Append to the queue, then attempt to dispatch (spec.md §4.2 `assign`).
    pub async fn assign(self: &Arc<Self>, job: Job) {
        self.state.lock().queue.push_back(job);
        self.trigger().await;
    }

    /// If `action_status == ERROR`, escape to IDLE and retry dispatch;
    /// otherwise a no-op (spec.md §4.2 `clear_error`). ERROR is sticky:
    /// this is the only way out of it.
    pub async fn clear_error(self: &Arc<Self>) -> bool {
        let cleared = {
            let mut state = self.state.lock();
            if state.action_status == RobotActionStatus::Error {
                state.action_status = RobotActionStatus::Idle;
                true
            } else {
                false
            }
        };
        if cleared {
            self.trigger().await;
        }
        cleared
    }

    /// Mark the robot available/unavailable. Disabling a robot with a
    /// current job does NOT cancel it; it only blocks future `trigger`s
    /// (spec.md §4.2, §5).
    pub fn set_active(&self, active: bool) {
        self.state.lock().active = active;
    }

    pub fn set_connection_status(&self, status: RobotConnectionStatus) {
        self.state.lock().connection_status = status;
    }

    /// Record a fresh pose/tag report (spec.md Glossary: "last known
    /// mobile-base pose/tag"). Independent of goal feedback, since a robot
    /// may report its fiducial while idle between jobs.
    pub fn set_last_known_tag(&self, tag: impl Into<String>) {
        self.state.lock().last_known_tag = Some(tag.into());
    }

    /// Clear `cells[index].holding` (spec.md §4.2 `free_cell`). Cells are
    /// freed only by this explicit action, never automatically on
    /// DELIVERY completion (spec.md §9).
    pub fn free_cell(&self, index: usize) {
        let mut state = self.state.lock();
        if let Some(cell) = state.cells.get_mut(index) {
            cell.holding = None;
        }
    }

    /// Remove a waiting job by id. MUST NOT touch `current_job` (spec.md
    /// §4.3 `remove_queued_job`).
    pub fn remove_queued_job(&self, job_id: &fleet_core::JobId) -> bool {
        let mut state = self.state.lock();
        let before = state.queue.len();
        state.queue.retain(|j| &j.id != job_id);
        state.queue.len() != before
    }

    /// The admission gate (spec.md §4.2). Runs synchronously up to the
    /// point of popping the queue head; dispatch itself suspends on the
    /// oracle and transport.
    pub async fn trigger(self: &Arc<Self>) {
        let dispatch = {
            let mut state = self.state.lock();
            let can_dispatch = state.active
                && state.connection_status == RobotConnectionStatus::Online
                && state.current_job.is_none()
                && !state.queue.is_empty()
                && state.action_status.is_ready();
            if !can_dispatch {
                return;
            }
            let Some(job) = state.queue.pop_front() else {
                return;
            };
            let cell = if job.operation.allocates_cell() {
                match first_free_cell(&state.cells) {
                    Some(index) => Some(index),
                    None => {
                        state.current_job = None;
                        drop(state);
                        self.fail_dispatch(job, HandlerError::NoFreeCell { robot: self.name.clone() })
                            .await;
                        return;
                    }
                }
            } else {
                None
            };
            state.current_job = Some(job.clone());
            state.current_cell = cell;
            (job, cell)
        };

        let (job, cell) = dispatch;
        let span = tracing::info_span!("send_job", robot = %self.name, job_id = %job.id, operation = %job.operation);
        if let Err(err) = self.send_job(job.clone(), cell).instrument(span).await {
            {
                let mut state = self.state.lock();
                state.current_job = None;
                state.current_cell = None;
            }
            self.fail_dispatch(job, err).await;
        }
    }

    /// Resolve the robot's position, ask the oracle for a path, hydrate
    /// it, and hand the transport a goal (spec.md §4.2 `send_job`).
    async fn send_job(self: &Arc<Self>, job: Job, cell: Option<usize>) -> Result<(), HandlerError> {
        let tag = self
            .state
            .lock()
            .last_known_tag
            .clone()
            .ok_or_else(|| HandlerError::UnknownStartTag { robot: self.name.clone() })?;

        let start = self.oracle.get_node_by_tag_id(&tag, None).await?;
        let start = start.ok_or_else(|| HandlerError::UnknownStartTag { robot: self.name.clone() })?;

        let path_ids = self.oracle.get_shortest_path_by_id(start.id, job.target_node.id, None).await?;
        if path_ids.is_empty() {
            return Err(HandlerError::NoPathFound { target: job.target_node.id });
        }

        let nodes = self.oracle.get_nodes_by_ids(&path_ids, None).await?;
        let goal = Goal {
            nodes,
            operation: job.operation,
            robot_cell: cell.map(|c| c as i32).unwrap_or(NO_CELL),
        };

        let mut handle = self.transport.send_goal(&self.name, goal).await?;

        {
            let mut state = self.state.lock();
            state.action_status = RobotActionStatus::Operating;
        }
        let mut job = job;
        job.status = OrderStatus::InProgress;
        self.publish(job.clone()).await;

        let this = Arc::clone(self);
        tokio::spawn(async move {
            while let Some(event) = handle.events.recv().await {
                match event {
                    TransportEvent::Feedback { current_node } => {
                        this.on_feedback(current_node);
                    }
                    TransportEvent::Result(result) => {
                        this.on_result(job.clone(), result).await;
                        break;
                    }
                    TransportEvent::Error(message) => {
                        this.on_transport_error(job.clone(), message).await;
                        break;
                    }
                }
            }
        });

        Ok(())
    }

    fn on_feedback(&self, current_node: i64) {
        tracing::debug!(robot = %self.name, node = current_node, "transport feedback");
    }

    /// Transport terminal callback (spec.md §4.2 result table). Fires on
    /// the transport's context, not the API context.
    async fn on_result(self: &Arc<Self>, mut job: Job, result: GoalResult) {
        let (action_status, order_status) = match result {
            GoalResult::Succeeded => (RobotActionStatus::Succeeded, OrderStatus::Completed),
            GoalResult::Canceled => (RobotActionStatus::Canceled, OrderStatus::Canceled),
            GoalResult::Aborted | GoalResult::Other => (RobotActionStatus::Error, OrderStatus::Failed),
        };
        job.status = order_status;
        self.finish_job(job, action_status).await;
    }

    async fn on_transport_error(self: &Arc<Self>, mut job: Job, message: String) {
        tracing::warn!(robot = %self.name, job_id = %job.id, error = %message, "transport fault");
        job.status = OrderStatus::Failed;
        self.finish_job(job, RobotActionStatus::Error).await;
    }

    /// Shared tail of every terminal transition: pickup-completion cell
    /// write, clearing `current_job`/`current_cell`, publishing, and
    /// re-triggering (spec.md §4.2).
    async fn finish_job(self: &Arc<Self>, job: Job, action_status: RobotActionStatus) {
        {
            let mut state = self.state.lock();
            state.action_status = action_status;
            if job.status == OrderStatus::Completed {
                if job.operation == JobOperation::Pickup {
                    if let Some(index) = state.current_cell {
                        if let Some(cell) = state.cells.get_mut(index) {
                            cell.holding = Some(job.id);
                        }
                    }
                }
                if let Some(tag) = job.target_node.tag_id.clone() {
                    state.last_known_tag = Some(tag);
                }
            }
            state.current_cell = None;
            state.current_job = None;
        }
        self.publish(job).await;
        self.trigger().await;
    }

    async fn fail_dispatch(self: &Arc<Self>, mut job: Job, err: HandlerError) {
        tracing::warn!(robot = %self.name, job_id = %job.id, error = %err, "dispatch failed");
        self.state.lock().action_status = RobotActionStatus::Error;
        job.status = OrderStatus::Failed;
        self.publish(job).await;
    }

    async fn publish(&self, job: Job) {
        if self.status_tx.send(StatusUpdate(job)).await.is_err() {
            tracing::error!(robot = %self.name, "status channel closed, update dropped");
        }
    }
}

/// First cell with `holding = None`, walked in index order (spec.md §4.2:
/// explicitly NOT nearest-height allocation).
fn first_free_cell(cells: &[RobotCell]) -> Option<usize> {
    cells.iter().position(RobotCell::is_free)
}

impl std::fmt::Debug for RobotHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RobotHandler").field("name", &self.name).finish()
    }
}

#[cfg(test)]
#[path = "robot_handler_tests.rs"]
mod tests;
