use super::*;
use crate::robot_transport::{Goal, GoalResult};
use fleet_core::{JobOperation, Node};

fn node(id: i64) -> Node {
    Node::builder().id(id).build()
}

#[tokio::test]
async fn send_goal_records_dispatch_and_is_retrievable() {
    let transport = FakeRobotTransport::new();
    let goal = Goal::new(vec![node(1), node(2), node(3)], JobOperation::Travel);
    let _handle = transport.send_goal("R1", goal.clone()).await.unwrap();

    assert!(transport.is_dispatched("R1"));
    assert_eq!(transport.last_goal("R1"), Some(goal));
}

#[tokio::test]
async fn pushed_feedback_is_observed_by_handle() {
    let transport = FakeRobotTransport::new();
    let mut handle =
        transport.send_goal("R1", Goal::new(vec![node(1)], JobOperation::Pickup)).await.unwrap();
    transport.push_feedback("R1", 1).await;

    match handle.events.recv().await.unwrap() {
        TransportEvent::Feedback { current_node } => assert_eq!(current_node, 1),
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn result_clears_dispatch_state() {
    let transport = FakeRobotTransport::new();
    let mut handle =
        transport.send_goal("R1", Goal::new(vec![node(1)], JobOperation::Delivery)).await.unwrap();
    transport.push_result("R1", GoalResult::Succeeded).await;

    assert!(!transport.is_dispatched("R1"));
    match handle.events.recv().await.unwrap() {
        TransportEvent::Result(GoalResult::Succeeded) => {}
        other => panic!("unexpected event: {other:?}"),
    }
}

#[tokio::test]
async fn cancel_emits_canceled_result() {
    let transport = FakeRobotTransport::new();
    let mut handle =
        transport.send_goal("R1", Goal::new(vec![node(1)], JobOperation::Travel)).await.unwrap();
    transport.cancel("R1").await.unwrap();

    match handle.events.recv().await.unwrap() {
        TransportEvent::Result(GoalResult::Canceled) => {}
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(!transport.is_dispatched("R1"));
}

#[tokio::test]
async fn push_error_is_observed_and_clears_dispatch() {
    let transport = FakeRobotTransport::new();
    let mut handle =
        transport.send_goal("R1", Goal::new(vec![node(1)], JobOperation::Travel)).await.unwrap();
    transport.push_error("R1", "lost localization").await;

    match handle.events.recv().await.unwrap() {
        TransportEvent::Error(message) => assert_eq!(message, "lost localization"),
        other => panic!("unexpected event: {other:?}"),
    }
    assert!(!transport.is_dispatched("R1"));
}
