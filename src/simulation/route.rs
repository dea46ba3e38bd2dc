//! Shortest path search over the road network
//!
//! Classic single-source Dijkstra. The frontier is a min-heap keyed on
//! tentative distance, with ties broken by insertion order so results do not
//! depend on heap internals.

use log::debug;
use ordered_float::OrderedFloat;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

use super::road_network::RoadNetwork;
use super::types::Node;

/// A frontier entry; `Ord` is reversed so `BinaryHeap` pops the nearest first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    distance: OrderedFloat<f64>,
    sequence: u64,
    node: Node,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        Reverse((self.distance, self.sequence)).cmp(&Reverse((other.distance, other.sequence)))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances and parent pointers from a single start node
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    start: Node,
    distances: HashMap<Node, f64>,
    parents: HashMap<Node, Node>,
}

impl ShortestPathTree {
    /// Runs Dijkstra from `start` until the frontier is empty
    pub fn solve(network: &RoadNetwork, start: Node) -> Self {
        let mut distances = HashMap::with_capacity(network.intersection_count());
        let mut parents = HashMap::with_capacity(network.intersection_count());
        let mut frontier = BinaryHeap::new();
        let mut sequence = 0u64;
        let mut pops = 0usize;

        if network.contains(start) {
            distances.insert(start, 0.0);
            frontier.push(FrontierEntry {
                distance: OrderedFloat(0.0),
                sequence,
                node: start,
            });
        }

        while let Some(FrontierEntry { distance, node, .. }) = frontier.pop() {
            pops += 1;
            let best = distances.get(&node).copied().unwrap_or(f64::INFINITY);
            if distance.into_inner() > best {
                // Superseded by a cheaper entry
                continue;
            }

            for (neighbor, weight) in network.edges_from(node) {
                let candidate = best + weight;
                let current = distances.get(&neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < current {
                    distances.insert(neighbor, candidate);
                    parents.insert(neighbor, node);
                    sequence += 1;
                    frontier.push(FrontierEntry {
                        distance: OrderedFloat(candidate),
                        sequence,
                        node: neighbor,
                    });
                }
            }
        }

        debug!(
            "Shortest path tree from {}: {} nodes reached, {} frontier pops, {} pushes",
            start,
            distances.len(),
            pops,
            sequence + 1
        );

        Self {
            start,
            distances,
            parents,
        }
    }

    pub fn start(&self) -> Node {
        self.start
    }

    /// Best distance to `node`; infinite when unreachable
    pub fn distance(&self, node: Node) -> f64 {
        self.distances.get(&node).copied().unwrap_or(f64::INFINITY)
    }

    pub fn parent(&self, node: Node) -> Option<Node> {
        self.parents.get(&node).copied()
    }

    pub fn reached(&self) -> usize {
        self.distances.len()
    }

    /// Walks parent pointers back from `destination` and reverses them
    pub fn route_to(&self, destination: Node) -> Option<Route> {
        let cost = *self.distances.get(&destination)?;

        let mut nodes = vec![destination];
        let mut current = destination;
        while current != self.start {
            current = self.parent(current)?;
            nodes.push(current);
            // Parent pointers form a tree, a longer walk means corruption
            if nodes.len() > self.distances.len() {
                return None;
            }
        }
        nodes.reverse();

        Some(Route { nodes, cost })
    }
}

/// The minimum-weight sequence of nodes from start to destination
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    nodes: Vec<Node>,
    cost: f64,
}

impl Route {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Sum of edge weights along the route
    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn start(&self) -> Node {
        self.nodes[0]
    }

    pub fn destination(&self) -> Node {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of edges travelled
    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive node pairs
    pub fn edges(&self) -> impl Iterator<Item = (Node, Node)> + '_ {
        self.nodes.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// True when no node appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.nodes.len());
        self.nodes.iter().all(|node| seen.insert(*node))
    }
}
