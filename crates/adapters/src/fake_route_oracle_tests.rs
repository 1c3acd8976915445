use super::*;
use fleet_core::NodeType;

fn node(id: i64, node_type: NodeType) -> Node {
    Node::builder().id(id).node_type(node_type).build()
}

#[tokio::test]
async fn unknown_node_id_is_none() {
    let oracle = FakeRouteOracle::new("g1");
    assert!(oracle.get_node_by_id(99, None).await.unwrap().is_none());
}

#[tokio::test]
async fn node_resolves_by_alias_and_tag() {
    let oracle = FakeRouteOracle::new("g1");
    let mut shelf = node(7, NodeType::Shelf);
    shelf.alias = Some("SHELF-7".into());
    shelf.tag_id = Some("TAG-7".into());
    oracle.add_node(shelf.clone());

    assert_eq!(oracle.get_node_by_alias("SHELF-7", None).await.unwrap(), Some(shelf.clone()));
    assert_eq!(oracle.get_node_by_tag_id("TAG-7", None).await.unwrap(), Some(shelf));
}

#[tokio::test]
async fn missing_graph_id_without_default_errors() {
    let oracle = FakeRouteOracle::new("");
    let err = oracle.get_node_by_id(1, None).await.unwrap_err();
    assert!(matches!(err, OracleError::NoDefaultGraph));
}

#[tokio::test]
async fn shortest_path_by_id_falls_back_to_empty_when_absent() {
    let oracle = FakeRouteOracle::new("g1");
    assert!(oracle.get_shortest_path_by_id(1, 2, None).await.unwrap().is_empty());
}

#[tokio::test]
async fn shortest_path_s1_fixture() {
    // spec.md §8 S1: path T1 -> shelf(7) = [7], path 7 -> depot(10) = [10].
    let oracle = FakeRouteOracle::new("warehouse");
    let mut t1 = node(1, NodeType::Waypoint);
    t1.alias = Some("T1".into());
    oracle.add_node(t1);
    oracle.add_node(node(7, NodeType::Shelf));
    oracle.add_node(node(10, NodeType::Depot));
    oracle.add_path(1, 7, vec![7]);
    oracle.add_path(7, 10, vec![10]);

    assert_eq!(oracle.get_shortest_path_by_id(1, 7, None).await.unwrap(), vec![7]);
    assert_eq!(oracle.get_shortest_path_by_id(7, 10, None).await.unwrap(), vec![10]);
}

#[tokio::test]
async fn shortest_path_by_alias_resolves_through_nodes() {
    let oracle = FakeRouteOracle::new("warehouse");
    let mut start = node(1, NodeType::Waypoint);
    start.alias = Some("T1".into());
    let mut end = node(7, NodeType::Shelf);
    end.alias = Some("SHELF-7".into());
    oracle.add_node(start);
    oracle.add_node(end);
    oracle.add_path(1, 7, vec![7]);

    let path = oracle.get_shortest_path_by_alias("T1", "SHELF-7", None).await.unwrap();
    assert_eq!(path, vec![7]);
}

#[tokio::test]
async fn get_nodes_by_ids_filters_unknown() {
    let oracle = FakeRouteOracle::new("g1");
    oracle.add_node(node(1, NodeType::Waypoint));
    let nodes = oracle.get_nodes_by_ids(&[1, 2], None).await.unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].id, 1);
}
