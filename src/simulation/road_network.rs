//! Road network graph for routing
//!
//! One directed edge per ordered pair of adjacent intersections, weighted
//! from the [`WeightTable`].

use petgraph::graphmap::DiGraphMap;

use super::grid::GridTopology;
use super::types::{Node, DEFAULT_EDGE_WEIGHT};
use super::weights::WeightTable;

/// Weighted directed graph over the grid intersections
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    graph: DiGraphMap<Node, f64>,
}

impl RoadNetwork {
    /// Connects every node to each in-grid neighbor
    ///
    /// Edges missing from the table get [`DEFAULT_EDGE_WEIGHT`].
    pub fn from_grid(topology: &GridTopology, weights: &WeightTable) -> Self {
        let mut graph = DiGraphMap::with_capacity(topology.node_count(), 4 * topology.node_count());

        for node in topology.nodes() {
            graph.add_node(node);
        }

        for node in topology.nodes() {
            for neighbor in topology.neighbors(node) {
                graph.add_edge(node, neighbor, weights.weight(node, neighbor));
            }
        }

        Self { graph }
    }

    pub fn contains(&self, node: Node) -> bool {
        self.graph.contains_node(node)
    }

    /// Outgoing edges of `node` as `(neighbor, weight)` pairs
    pub fn edges_from(&self, node: Node) -> impl Iterator<Item = (Node, f64)> + '_ {
        self.graph
            .edges(node)
            .map(|(_, to, weight)| (to, *weight))
    }

    pub fn edge_weight(&self, from: Node, to: Node) -> f64 {
        self.graph
            .edge_weight(from, to)
            .copied()
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    /// Total weight of walking `path` node by node
    pub fn path_cost(&self, path: &[Node]) -> f64 {
        path.windows(2)
            .map(|pair| self.edge_weight(pair[0], pair[1]))
            .sum()
    }

    pub fn intersection_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn road_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The underlying graph, for use with `petgraph::algo`
    pub fn graph(&self) -> &DiGraphMap<Node, f64> {
        &self.graph
    }
}
