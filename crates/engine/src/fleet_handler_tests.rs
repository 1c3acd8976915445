use super::*;
use crate::status_channel::status_channel;
use fleet_adapters::{FakeRobotTransport, FakeRouteOracle};
use fleet_core::{Job, JobOperation, Node, NodeType, RobotConfig};

fn configs() -> HashMap<String, RobotConfig> {
    let mut map = HashMap::new();
    map.insert(
        "R1".to_string(),
        RobotConfig {
            host: "r1.local".into(),
            port: 9000,
            cell_heights: vec![0.5, 1.0],
            initial_tag: None,
        },
    );
    map.insert(
        "R2".to_string(),
        RobotConfig { host: "r2.local".into(), port: 9001, cell_heights: vec![0.5], initial_tag: None },
    );
    map
}

fn fleet() -> FleetHandler {
    let oracle = Arc::new(FakeRouteOracle::new("warehouse"));
    let transport = Arc::new(FakeRobotTransport::new());
    let (tx, _rx) = status_channel();
    FleetHandler::new(&configs(), oracle, transport, tx)
}

#[test]
fn unknown_robot_name_yields_none_everywhere() {
    let f = fleet();
    assert!(f.get_robot("ghost").is_none());
    assert!(f.get_robot_cells("ghost").is_none());
    assert!(f.get_current_job("ghost").is_none());
    assert!(f.get_job_queue("ghost").is_none());
    assert!(!f.remove_queued_job("ghost", &fleet_core::JobId::new()));
}

#[test]
fn known_robots_are_constructed_with_configured_cells() {
    let f = fleet();
    assert_eq!(f.get_robot_cells("R1").unwrap().len(), 2);
    assert_eq!(f.get_robot_cells("R2").unwrap().len(), 1);
}

#[tokio::test]
async fn assign_job_on_unknown_robot_is_a_silent_no_op() {
    let f = fleet();
    let job = Job::builder().operation(JobOperation::Travel).target_node(
        Node::builder().id(1).node_type(NodeType::Waypoint).build()
    ).build();
    f.assign_job("ghost", job).await;
    assert_eq!(f.get_robots().len(), 2);
}

#[test]
fn shutdown_marks_every_robot_inactive() {
    let f = fleet();
    f.shutdown();
    for snapshot in f.get_robots() {
        assert!(!snapshot.active);
    }
}

#[test]
fn free_cell_on_unknown_robot_does_not_panic() {
    let f = fleet();
    f.free_cell("ghost", 0);
}
