//! Grid topology tests

use std::collections::HashSet;

use grid_traffic::simulation::{
    ConfigError, Coordinate, GridDimensions, GridTopology, LayoutConstants, Node,
};

#[test]
fn test_grid_produces_one_distinct_coordinate_per_node() {
    for columns in 1..=6 {
        for rows in 1..=6 {
            let topology =
                GridTopology::new(GridDimensions::new(columns, rows), LayoutConstants::default())
                    .unwrap();

            assert_eq!(topology.node_count(), (columns * rows) as usize);

            let distinct: HashSet<(u64, u64)> = topology
                .node_coordinates()
                .values()
                .map(|c| (c.x.to_bits(), c.y.to_bits()))
                .collect();
            assert_eq!(distinct.len(), (columns * rows) as usize);
        }
    }
}

#[test]
fn test_grid_coordinates_follow_layout_spacing() {
    let topology = GridTopology::new(GridDimensions::new(4, 3), LayoutConstants::default()).unwrap();

    // 100 gap + half of the 110 road
    assert_eq!(topology.coordinate(Node::new(1, 1)), Some(Coordinate::new(155.0, 155.0)));
    // Columns step by road width + 150, rows by road width + 100
    assert_eq!(topology.coordinate(Node::new(2, 1)), Some(Coordinate::new(415.0, 155.0)));
    assert_eq!(topology.coordinate(Node::new(1, 2)), Some(Coordinate::new(155.0, 365.0)));
    assert_eq!(topology.coordinate(Node::new(4, 3)), Some(Coordinate::new(935.0, 575.0)));
    assert_eq!(topology.coordinate(Node::new(5, 1)), None);
}

#[test]
fn test_grid_mapping_is_total() {
    let topology = GridTopology::new(GridDimensions::new(4, 3), LayoutConstants::default()).unwrap();

    for col in 1..=4 {
        for row in 1..=3 {
            let node = Node::new(col, row);
            assert!(topology.contains(node));
            assert!(topology.coordinate(node).is_some(), "{} has no coordinate", node);
        }
    }
    assert!(!topology.contains(Node::new(0, 1)));
    assert!(!topology.contains(Node::new(1, 4)));
}

#[test]
fn test_grid_neighbors_are_in_bounds_and_adjacent() {
    let topology = GridTopology::new(GridDimensions::new(4, 3), LayoutConstants::default()).unwrap();

    let corner: Vec<Node> = topology.neighbors(Node::new(1, 1)).collect();
    assert_eq!(corner, vec![Node::new(2, 1), Node::new(1, 2)]);

    let middle: Vec<Node> = topology.neighbors(Node::new(2, 2)).collect();
    assert_eq!(
        middle,
        vec![Node::new(1, 2), Node::new(3, 2), Node::new(2, 1), Node::new(2, 3)]
    );

    for node in topology.nodes() {
        for neighbor in topology.neighbors(node) {
            assert!(node.is_adjacent(&neighbor));
            assert!(topology.contains(neighbor));
        }
    }
}

#[test]
fn test_grid_rejects_empty_dimensions() {
    let result = GridTopology::new(GridDimensions::new(0, 3), LayoutConstants::default());
    assert_eq!(
        result.unwrap_err(),
        ConfigError::InvalidGridDimensions { columns: 0, rows: 3 }
    );

    let result = GridTopology::new(GridDimensions::new(4, 0), LayoutConstants::default());
    assert!(matches!(
        result,
        Err(ConfigError::InvalidGridDimensions { columns: 4, rows: 0 })
    ));
}

#[test]
fn test_grid_rejects_invalid_layout() {
    let layout = LayoutConstants {
        road_width: 0.0,
        ..LayoutConstants::default()
    };
    let result = GridTopology::new(GridDimensions::new(4, 3), layout);
    assert!(matches!(result, Err(ConfigError::InvalidLayout(_))));

    let layout = LayoutConstants {
        vertical_road_gap: -5.0,
        ..LayoutConstants::default()
    };
    let result = GridTopology::new(GridDimensions::new(4, 3), layout);
    assert!(matches!(result, Err(ConfigError::InvalidLayout(_))));
}
