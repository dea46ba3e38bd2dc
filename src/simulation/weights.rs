//! Edge weights drawn from the vehicle speed pool
//!
//! Weights are sampled with replacement from a pool of speeds using a seeded
//! generator. Given the same pool and seed the table is identical every run.

use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;

use super::error::{ConfigError, Result};
use super::grid::GridTopology;
use super::types::{Node, DEFAULT_EDGE_WEIGHT};

/// An ordered connection between two adjacent intersections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirectedEdge {
    pub from: Node,
    pub to: Node,
}

impl DirectedEdge {
    pub fn new(from: Node, to: Node) -> Self {
        Self { from, to }
    }
}

/// Offsets drawn per node, in draw order: south, north, east, west
const DRAW_ORDER: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

fn validate_weight(weight: f64) -> Result<f64> {
    if weight.is_finite() && weight > 0.0 {
        Ok(weight)
    } else {
        Err(ConfigError::InvalidWeight(weight))
    }
}

/// Builds the canonical ascending speed pool `[step, 2*step, ..., count*step]`
pub fn speed_pool(vehicle_count: usize, speed_step: f64) -> Result<Vec<f64>> {
    if !(speed_step.is_finite() && speed_step > 0.0) {
        return Err(ConfigError::InvalidSpeed(speed_step));
    }
    if vehicle_count == 0 {
        return Err(ConfigError::EmptySpeedPool);
    }

    Ok((1..=vehicle_count).map(|i| i as f64 * speed_step).collect())
}

/// Traversal cost of every in-grid directed edge
#[derive(Debug, Clone, Default)]
pub struct WeightTable {
    weights: HashMap<DirectedEdge, f64>,
}

impl WeightTable {
    /// Draws one weight per possible outgoing edge of every node
    ///
    /// Nodes are visited column-major. An off-grid edge still consumes its
    /// draw but is not stored.
    pub fn generate(topology: &GridTopology, pool: &[f64], seed: u64) -> Result<Self> {
        if pool.is_empty() {
            return Err(ConfigError::EmptySpeedPool);
        }
        if let Some(&speed) = pool.iter().find(|s| !(s.is_finite() && **s > 0.0)) {
            return Err(ConfigError::InvalidSpeed(speed));
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut weights = HashMap::with_capacity(4 * topology.node_count());

        for node in topology.nodes() {
            for (d_col, d_row) in DRAW_ORDER {
                let weight = pool[rng.random_range(0..pool.len())];
                let Some(neighbor) = node.offset(d_col, d_row) else {
                    continue;
                };
                if topology.contains(neighbor) {
                    weights.insert(DirectedEdge::new(node, neighbor), weight);
                }
            }
        }

        debug!(
            "Generated {} edge weights with seed {} from a pool of {}",
            weights.len(),
            seed,
            pool.len()
        );

        Ok(Self { weights })
    }

    /// Every in-grid edge gets the same weight
    pub fn uniform(topology: &GridTopology, weight: f64) -> Result<Self> {
        let weight = validate_weight(weight)?;
        let weights = topology
            .nodes()
            .flat_map(|node| {
                topology
                    .neighbors(node)
                    .map(move |neighbor| (DirectedEdge::new(node, neighbor), weight))
            })
            .collect();
        Ok(Self { weights })
    }

    /// Weight of the edge, or [`DEFAULT_EDGE_WEIGHT`] when none is stored
    pub fn weight(&self, from: Node, to: Node) -> f64 {
        self.get(&DirectedEdge::new(from, to))
            .unwrap_or(DEFAULT_EDGE_WEIGHT)
    }

    pub fn get(&self, edge: &DirectedEdge) -> Option<f64> {
        self.weights.get(edge).copied()
    }

    /// Sets the weight of one edge; weights must be finite and positive
    pub fn insert(&mut self, edge: DirectedEdge, weight: f64) -> Result<()> {
        self.weights.insert(edge, validate_weight(weight)?);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&DirectedEdge, &f64)> {
        self.weights.iter()
    }
}
