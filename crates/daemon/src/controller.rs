// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `WarehouseController` (spec.md §4.4): admission and decomposition of
//! orders into jobs, plus the status-update drainer that feeds terminal
//! and in-progress job states back into the `OrderStore`.

use crate::error::ControllerError;
use crate::order_shapes::{JobOrder, NodeRef, RequestOrder, RequestSpec, RouteAssignment, WarehouseOrder};
use fleet_adapters::RouteOracle;
use fleet_core::{Job, JobId, JobOperation, Node, OrderStatus, Request, RequestId, ValidationError};
use fleet_engine::{FleetHandler, StatusReceiver, StatusUpdate};
use fleet_store::OrderStore;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::task::JoinHandle;

/// A request paired with its derived status (SPEC_FULL.md §4.4 read-only
/// query supplement).
#[derive(Debug, Clone)]
pub struct RequestDescription {
    pub request: Request,
    pub status: OrderStatus,
}

pub struct WarehouseController {
    store: Arc<OrderStore>,
    oracle: Arc<dyn RouteOracle>,
    fleet: Arc<FleetHandler>,
    drainer: JoinHandle<()>,
}

impl WarehouseController {
    /// Binds the status-update drainer (spec.md §4.4): a long-lived
    /// background worker consuming `status_rx` and writing each update to
    /// the store, logging and continuing on failure. The `JoinHandle` is
    /// held by `self` for the controller's lifetime so the task is never
    /// silently dropped while suspended on `recv` (spec.md §9).
    pub fn new(
        store: Arc<OrderStore>,
        oracle: Arc<dyn RouteOracle>,
        fleet: Arc<FleetHandler>,
        status_rx: StatusReceiver,
    ) -> Self {
        let drainer_store = Arc::clone(&store);
        let drainer = tokio::spawn(Self::drain(drainer_store, status_rx));
        Self { store, oracle, fleet, drainer }
    }

    async fn drain(store: Arc<OrderStore>, mut rx: StatusReceiver) {
        while let Some(StatusUpdate(job)) = rx.recv().await {
            if let Err(err) = store.set_job(&job).await {
                tracing::error!(job_id = %job.id, error = %err, "failed to persist status update");
            }
        }
    }

    /// Tears down the fleet and stops the drainer. In-flight jobs settle
    /// in whatever terminal status the transport reports (spec.md §5).
    pub async fn shutdown(self) {
        self.fleet.shutdown();
        self.drainer.abort();
        let _ = self.drainer.await;
    }

    async fn resolve_node(&self, node_ref: &NodeRef) -> Result<Node, ControllerError> {
        let resolved = match node_ref {
            NodeRef::Id(id) => self.oracle.get_node_by_id(*id, None).await?,
            NodeRef::Alias(alias) => self.oracle.get_node_by_alias(alias, None).await?,
        };
        resolved.ok_or_else(|| ValidationError::UnknownNode(describe_node_ref(node_ref)).into())
    }

    fn require_robot(&self, robot_name: &str) -> Result<(), ControllerError> {
        if self.fleet.get_robot(robot_name).is_some() {
            Ok(())
        } else {
            Err(ValidationError::UnknownRobot(robot_name.to_string()).into())
        }
    }

    /// spec.md §4.4 `accept_job_order`.
    pub async fn accept_job_order(&self, order: JobOrder) -> Result<Job, ControllerError> {
        let target = self.resolve_node(&order.target).await?;
        self.require_robot(&order.robot_name)?;
        if order.operation == JobOperation::Travel && !target.is_waypoint() {
            return Err(ValidationError::TravelTargetNotWaypoint(target.id).into());
        }

        let job = Job::new(order.operation, target, None, order.robot_name.clone());
        self.store.set_job(&job).await?;
        self.fleet.assign_job(&order.robot_name, job.clone()).await;
        Ok(job)
    }

    /// spec.md §4.4 `accept_request_order`.
    pub async fn accept_request_order(&self, order: RequestOrder) -> Result<Request, ControllerError> {
        let pickup_node = self.resolve_node(&order.pickup).await?;
        let delivery_node = self.resolve_node(&order.delivery).await?;
        self.require_robot(&order.robot_name)?;

        let (pickup_job, delivery_job, request) =
            build_request(pickup_node, delivery_node, order.robot_name.clone());

        self.store.set_job(&pickup_job).await?;
        self.store.set_job(&delivery_job).await?;
        self.store.set_request(&request).await?;

        self.fleet.assign_job(&order.robot_name, pickup_job).await;
        self.fleet.assign_job(&order.robot_name, delivery_job).await;
        Ok(request)
    }

    /// spec.md §4.4 `accept_warehouse_order`, the hardest of the three.
    pub async fn accept_warehouse_order(
        &self,
        order: WarehouseOrder,
    ) -> Result<Vec<Request>, ControllerError> {
        // Steps 1+2: node -> (robot, route position), rejecting nodes
        // claimed by more than one assignment.
        let mut node_index: HashMap<i64, (String, usize)> = HashMap::new();
        let mut route_lens: HashMap<String, usize> = HashMap::new();
        for assignment in &order.assignments {
            self.require_robot(&assignment.robot_name)?;
            self.index_route(assignment, &mut node_index).await?;
            route_lens.insert(assignment.robot_name.clone(), assignment.route.len());
        }

        // Step 3: pre-allocate per-robot job-route slots.
        let mut robot_job_route: HashMap<String, Vec<Option<Job>>> =
            route_lens.iter().map(|(robot, len)| (robot.clone(), vec![None; *len])).collect();

        // Step 4: place each request.
        let mut requests = Vec::with_capacity(order.requests.len());
        for spec in &order.requests {
            let (pickup_job, delivery_job, request) =
                self.place_request(spec, &node_index).await?;

            let (_, pickup_robot, pickup_pos) = locate(&node_index, &pickup_job.target_node)?;
            let (_, _, delivery_pos) = locate(&node_index, &delivery_job.target_node)?;

            self.store.set_job(&pickup_job).await?;
            self.store.set_job(&delivery_job).await?;
            self.store.set_request(&request).await?;

            if let Some(slots) = robot_job_route.get_mut(&pickup_robot) {
                if let Some(slot) = slots.get_mut(pickup_pos) {
                    *slot = Some(pickup_job);
                }
                if let Some(slot) = slots.get_mut(delivery_pos) {
                    *slot = Some(delivery_job);
                }
            }
            requests.push(request);
        }

        // Step 5: dispatch in route order; unfilled slots are untaken
        // TRAVEL waypoints and are skipped (spec.md §9).
        for (robot, slots) in robot_job_route {
            for job in slots.into_iter().flatten() {
                self.fleet.assign_job(&robot, job).await;
            }
        }

        Ok(requests)
    }

    async fn index_route(
        &self,
        assignment: &RouteAssignment,
        node_index: &mut HashMap<i64, (String, usize)>,
    ) -> Result<(), ControllerError> {
        for (position, node_ref) in assignment.route.iter().enumerate() {
            let node = self.resolve_node(node_ref).await?;
            if node_index.insert(node.id, (assignment.robot_name.clone(), position)).is_some() {
                return Err(ValidationError::AmbiguousNodeAssignment { node: node.id }.into());
            }
        }
        Ok(())
    }

    async fn place_request(
        &self,
        spec: &RequestSpec,
        node_index: &HashMap<i64, (String, usize)>,
    ) -> Result<(Job, Job, Request), ControllerError> {
        let pickup_node = self.resolve_node(&spec.pickup).await?;
        let delivery_node = self.resolve_node(&spec.delivery).await?;

        let (pickup_robot, _) = node_index
            .get(&pickup_node.id)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownNode(pickup_node.id.to_string()))?;
        let (delivery_robot, _) = node_index
            .get(&delivery_node.id)
            .cloned()
            .ok_or_else(|| ValidationError::UnknownNode(delivery_node.id.to_string()))?;
        if pickup_robot != delivery_robot {
            return Err(ValidationError::CrossRobotRequest {
                pickup: pickup_node.id,
                delivery: delivery_node.id,
            }
            .into());
        }

        Ok(build_request(pickup_node, delivery_node, pickup_robot))
    }

    /// spec.md §4.4 `cancel_job_order`. Only a job still sitting in its
    /// robot's queue is actually cancellable here; if it has already been
    /// promoted to `current_job` (`remove_queued_job` returns `false`),
    /// cancelling it is out of scope (spec.md §9) and this is a no-op —
    /// writing CANCELED anyway would race the transport's real terminal
    /// result and could clobber it after the fact, violating the
    /// once-terminal-never-changes invariant (spec.md §8 property 1).
    pub async fn cancel_job_order(&self, job_id: &JobId) -> Result<Job, ControllerError> {
        let mut job = self
            .store
            .get_job(job_id)
            .await?
            .ok_or_else(|| ControllerError::UnknownJob(job_id.to_string()))?;
        if job.is_terminal() {
            return Ok(job);
        }
        if !self.fleet.remove_queued_job(&job.handling_robot, &job.id) {
            return Ok(job);
        }
        job.status = OrderStatus::Canceled;
        self.store.set_job(&job).await?;
        Ok(job)
    }

    /// spec.md §4.4 `cancel_job_orders`: skips ids that fail to cancel.
    pub async fn cancel_job_orders(&self, ids: &[JobId]) -> Vec<Job> {
        let mut canceled = Vec::with_capacity(ids.len());
        for id in ids {
            if let Ok(job) = self.cancel_job_order(id).await {
                canceled.push(job);
            }
        }
        canceled
    }

    /// spec.md §4.4 `cancel_request_order`.
    pub async fn cancel_request_order(&self, request_id: &RequestId) -> Result<Request, ControllerError> {
        let request = self
            .store
            .get_request(request_id)
            .await?
            .ok_or_else(|| ControllerError::UnknownRequest(request_id.to_string()))?;
        self.cancel_job_order(&request.pickup).await?;
        self.cancel_job_order(&request.delivery).await?;
        Ok(request)
    }

    /// Read-only job lookup (SPEC_FULL.md §4.4 supplement).
    pub async fn describe_job(&self, job_id: &JobId) -> Result<Option<Job>, ControllerError> {
        Ok(self.store.get_job(job_id).await?)
    }

    /// Read-only request lookup with derived status (SPEC_FULL.md §4.4
    /// supplement).
    pub async fn describe_request(
        &self,
        request_id: &RequestId,
    ) -> Result<Option<RequestDescription>, ControllerError> {
        let Some(request) = self.store.get_request(request_id).await? else {
            return Ok(None);
        };
        let status = self.store.get_request_status(&request).await?;
        Ok(Some(RequestDescription { request, status }))
    }
}

fn build_request(pickup_node: Node, delivery_node: Node, robot_name: String) -> (Job, Job, Request) {
    let mut pickup_job = Job::new(JobOperation::Pickup, pickup_node, None, robot_name.clone());
    let mut delivery_job = Job::new(JobOperation::Delivery, delivery_node, None, robot_name.clone());
    let request = Request::new(pickup_job.id, delivery_job.id, robot_name);
    pickup_job.request = Some(request.id);
    delivery_job.request = Some(request.id);
    (pickup_job, delivery_job, request)
}

fn locate(
    node_index: &HashMap<i64, (String, usize)>,
    node: &Node,
) -> Result<(i64, String, usize), ControllerError> {
    let (robot, position) = node_index
        .get(&node.id)
        .cloned()
        .ok_or_else(|| ValidationError::UnknownNode(node.id.to_string()))?;
    Ok((node.id, robot, position))
}

fn describe_node_ref(node_ref: &NodeRef) -> String {
    match node_ref {
        NodeRef::Id(id) => id.to_string(),
        NodeRef::Alias(alias) => alias.clone(),
    }
}

#[cfg(test)]
#[path = "controller_tests.rs"]
mod tests;
