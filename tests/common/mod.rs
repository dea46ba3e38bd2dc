//! Helpers shared by the integration tests

use std::collections::HashSet;

use grid_traffic::simulation::{GridTopology, Node, RoadNetwork};

/// Cheapest cost over every simple path from `start` to `destination`,
/// found by exhaustive depth-first enumeration
pub fn brute_force_min_cost(
    topology: &GridTopology,
    network: &RoadNetwork,
    start: Node,
    destination: Node,
) -> f64 {
    let mut visited = HashSet::new();
    visited.insert(start);
    let mut best = f64::INFINITY;
    explore(topology, network, start, destination, 0.0, &mut visited, &mut best);
    best
}

fn explore(
    topology: &GridTopology,
    network: &RoadNetwork,
    node: Node,
    destination: Node,
    cost: f64,
    visited: &mut HashSet<Node>,
    best: &mut f64,
) {
    if node == destination {
        if cost < *best {
            *best = cost;
        }
        return;
    }

    let neighbors: Vec<Node> = topology.neighbors(node).collect();
    for neighbor in neighbors {
        if !visited.insert(neighbor) {
            continue;
        }
        let next_cost = cost + network.edge_weight(node, neighbor);
        explore(topology, network, neighbor, destination, next_cost, visited, best);
        visited.remove(&neighbor);
    }
}
