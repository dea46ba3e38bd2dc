//! Lane assignment and initial placement of vehicles
//!
//! Every (orientation, direction) pair draws lanes from its own FIFO pool, so
//! no two vehicles start on the same lane slot.

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::VecDeque;

use super::error::{ConfigError, Result};
use super::grid::GridTopology;
use super::kinematics::Vehicle;
use super::types::{Coordinate, Orientation, SceneBounds, TravelDirection, VehicleId};

/// The four lane pools
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LanePool {
    /// Horizontal, negative direction
    LeftBound,
    /// Horizontal, positive direction
    RightBound,
    /// Vertical, negative direction
    UpBound,
    /// Vertical, positive direction
    DownBound,
}

impl LanePool {
    pub const ALL: [LanePool; 4] = [
        LanePool::LeftBound,
        LanePool::RightBound,
        LanePool::UpBound,
        LanePool::DownBound,
    ];

    pub fn for_vehicle(orientation: Orientation, direction: TravelDirection) -> Self {
        match (orientation, direction) {
            (Orientation::Horizontal, TravelDirection::Negative) => LanePool::LeftBound,
            (Orientation::Horizontal, TravelDirection::Positive) => LanePool::RightBound,
            (Orientation::Vertical, TravelDirection::Negative) => LanePool::UpBound,
            (Orientation::Vertical, TravelDirection::Positive) => LanePool::DownBound,
        }
    }
}

/// Orientation and direction of every vehicle, in id order
#[derive(Debug, Clone, PartialEq)]
pub struct FleetPlan {
    entries: Vec<(Orientation, TravelDirection)>,
}

impl FleetPlan {
    /// The first `vertical_count` vehicles are vertical, the rest horizontal.
    /// Odd-numbered vehicles (counting from 1) travel in the positive direction.
    pub fn new(vehicle_count: usize, vertical_count: usize) -> Result<Self> {
        if vehicle_count == 0 {
            return Err(ConfigError::EmptyFleet);
        }
        if vertical_count > vehicle_count {
            return Err(ConfigError::InvalidVehicleMix {
                vertical: vertical_count,
                total: vehicle_count,
            });
        }

        let entries = (1..=vehicle_count)
            .map(|number| {
                let orientation = if number <= vertical_count {
                    Orientation::Vertical
                } else {
                    Orientation::Horizontal
                };
                (orientation, TravelDirection::from(number % 2 != 0))
            })
            .collect();

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Orientation, TravelDirection)> {
        self.entries.iter()
    }

    /// How many vehicles will draw from `pool`
    pub fn demand(&self, pool: LanePool) -> usize {
        self.entries
            .iter()
            .filter(|(orientation, direction)| LanePool::for_vehicle(*orientation, *direction) == pool)
            .count()
    }
}

/// Pre-computed lane coordinates, consumed front to back
#[derive(Debug, Clone, Default)]
pub struct LanePools {
    left_bound: VecDeque<f64>,
    right_bound: VecDeque<f64>,
    up_bound: VecDeque<f64>,
    down_bound: VecDeque<f64>,
}

impl LanePools {
    /// One lane per road per direction, `lane_offset` either side of the centre line
    pub fn from_topology(topology: &GridTopology, lane_offset: f64) -> Self {
        let layout = topology.layout();
        let dimensions = topology.dimensions();

        let rows = (1..=dimensions.rows).map(|row| layout.row_centre(row));
        let columns = (1..=dimensions.columns).map(|col| layout.column_centre(col));

        Self {
            left_bound: rows.clone().map(|y| y - lane_offset).collect(),
            right_bound: rows.map(|y| y + lane_offset).collect(),
            up_bound: columns.clone().map(|x| x - lane_offset).collect(),
            down_bound: columns.map(|x| x + lane_offset).collect(),
        }
    }

    fn queue_mut(&mut self, pool: LanePool) -> &mut VecDeque<f64> {
        match pool {
            LanePool::LeftBound => &mut self.left_bound,
            LanePool::RightBound => &mut self.right_bound,
            LanePool::UpBound => &mut self.up_bound,
            LanePool::DownBound => &mut self.down_bound,
        }
    }

    pub fn remaining(&self, pool: LanePool) -> usize {
        match pool {
            LanePool::LeftBound => self.left_bound.len(),
            LanePool::RightBound => self.right_bound.len(),
            LanePool::UpBound => self.up_bound.len(),
            LanePool::DownBound => self.down_bound.len(),
        }
    }

    /// Takes the next lane from `pool`
    pub fn take(&mut self, pool: LanePool) -> Option<f64> {
        self.queue_mut(pool).pop_front()
    }
}

/// Places the fleet on its lanes
pub struct LaneAssigner {
    pools: LanePools,
    scene: SceneBounds,
}

impl LaneAssigner {
    pub fn new(pools: LanePools, scene: SceneBounds) -> Self {
        Self { pools, scene }
    }

    /// Creates one vehicle per plan entry
    ///
    /// Speeds are shuffled from `speeds` (one per vehicle). The start position
    /// along the free axis is uniform over the scene extent on that axis.
    pub fn assign<R: Rng>(
        mut self,
        plan: &FleetPlan,
        speeds: &[f64],
        rng: &mut R,
    ) -> Result<Vec<Vehicle>> {
        if speeds.len() < plan.len() {
            return Err(ConfigError::InsufficientSpeeds {
                needed: plan.len(),
                got: speeds.len(),
            });
        }

        let mut shuffled = speeds.to_vec();
        shuffled.shuffle(rng);

        for pool in LanePool::ALL {
            let capacity = self.pools.remaining(pool);
            if plan.demand(pool) > capacity {
                return Err(ConfigError::LanePoolExhausted { pool, capacity });
            }
        }

        let mut vehicles = Vec::with_capacity(plan.len());
        for (index, &(orientation, direction)) in plan.iter().enumerate() {
            let pool = LanePool::for_vehicle(orientation, direction);
            let lane = self
                .pools
                .take(pool)
                .ok_or(ConfigError::LanePoolExhausted { pool, capacity: 0 })?;

            let extent = self.scene.extent(orientation);
            let free = if extent > 0.0 {
                rng.random_range(0.0..extent)
            } else {
                0.0
            };
            let position = match orientation {
                Orientation::Horizontal => Coordinate::new(free, lane),
                Orientation::Vertical => Coordinate::new(lane, free),
            };

            vehicles.push(Vehicle::new(
                VehicleId(index),
                orientation,
                direction,
                position,
                shuffled[index],
            ));
        }

        debug!("Assigned lanes to {} vehicles", vehicles.len());

        Ok(vehicles)
    }
}
