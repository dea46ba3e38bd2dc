//! Simulation controller that owns all state and drives the tick loop
//!
//! This is the only writer of simulation state. Renderers and input layers
//! talk to it through `tick`, `pause`, `resume` and `snapshot`.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::BTreeMap;

use super::error::{ConfigError, Result};
use super::grid::{GridDimensions, GridTopology, LayoutConstants};
use super::kinematics::{Kinematics, Marquee, Vehicle};
use super::lanes::{FleetPlan, LaneAssigner, LanePools};
use super::road_network::RoadNetwork;
use super::route::{Route, ShortestPathTree};
use super::types::{
    Coordinate, Node, Orientation, SceneBounds, TravelDirection, VehicleId, LANE_OFFSET,
};
use super::weights::{speed_pool, WeightTable};

/// Everything needed to build a simulation
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Seed for edge weight generation
    pub seed: u64,
    /// Seed for lane jitter and speed shuffling; entropy when `None`
    pub placement_seed: Option<u64>,
    pub vehicle_count: usize,
    /// How many of the vehicles travel vertically
    pub vertical_count: usize,
    pub grid: GridDimensions,
    pub layout: LayoutConstants,
    pub scene: SceneBounds,
    /// Speed increment between consecutive entries of the speed pool
    pub speed_step: f64,
    pub lane_offset: f64,
    pub start: Node,
    /// Route destination; the far grid corner when `None`
    pub destination: Option<Node>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            placement_seed: None,
            vehicle_count: 14,
            vertical_count: 8,
            grid: GridDimensions::default(),
            layout: LayoutConstants::default(),
            scene: SceneBounds::default(),
            speed_step: 0.5,
            lane_offset: LANE_OFFSET,
            start: Node::new(1, 1),
            destination: None,
        }
    }
}

/// A vehicle as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VehicleView {
    pub id: VehicleId,
    pub orientation: Orientation,
    pub direction: TravelDirection,
    pub x: f64,
    pub y: f64,
}

impl From<&Vehicle> for VehicleView {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id,
            orientation: vehicle.orientation,
            direction: vehicle.direction,
            x: vehicle.position.x,
            y: vehicle.position.y,
        }
    }
}

/// Read-only view of the simulation for one frame
#[derive(Debug, Clone)]
pub struct Snapshot<'a> {
    pub frame: u64,
    pub paused: bool,
    pub marquee_offset: f64,
    pub vehicles: Vec<VehicleView>,
    pub route: &'a Route,
    pub node_coordinates: &'a BTreeMap<Node, Coordinate>,
}

/// State owned exclusively by the controller
#[derive(Debug, Clone)]
struct SimulationState {
    vehicles: Vec<Vehicle>,
    weights: WeightTable,
    network: RoadNetwork,
    route: Route,
    paused: bool,
    frame: u64,
    marquee: Marquee,
}

/// Owns the simulation and mediates every access to it
#[derive(Debug, Clone)]
pub struct SimulationController {
    config: SimConfig,
    topology: GridTopology,
    kinematics: Kinematics,
    state: SimulationState,
}

impl SimulationController {
    /// Builds the grid, weights and route, then places the fleet
    pub fn initialize(config: SimConfig) -> Result<Self> {
        let topology = GridTopology::new(config.grid, config.layout)?;

        let start = config.start;
        let destination = config.destination.unwrap_or_else(|| topology.far_corner());
        for endpoint in [start, destination] {
            if !topology.contains(endpoint) {
                return Err(ConfigError::EndpointOutsideGrid(endpoint));
            }
        }

        let pool = speed_pool(config.vehicle_count, config.speed_step)?;
        let weights = WeightTable::generate(&topology, &pool, config.seed)?;
        let network = RoadNetwork::from_grid(&topology, &weights);

        let route = ShortestPathTree::solve(&network, start)
            .route_to(destination)
            .ok_or(ConfigError::Unreachable { start, destination })?;

        let plan = FleetPlan::new(config.vehicle_count, config.vertical_count)?;
        let assigner = LaneAssigner::new(
            LanePools::from_topology(&topology, config.lane_offset),
            config.scene,
        );
        let vehicles = match config.placement_seed {
            Some(seed) => assigner.assign(&plan, &pool, &mut StdRng::seed_from_u64(seed))?,
            None => assigner.assign(&plan, &pool, &mut rand::rng())?,
        };

        info!(
            "Initialized {}x{} grid with weight seed {}: {} roads, {} vehicles",
            topology.dimensions().columns,
            topology.dimensions().rows,
            config.seed,
            network.road_count(),
            vehicles.len()
        );
        info!(
            "Route {} -> {}: {} hops, cost {:.3}",
            route.start(),
            route.destination(),
            route.hops(),
            route.cost()
        );

        let kinematics = Kinematics::new(config.scene);

        Ok(Self {
            config,
            topology,
            kinematics,
            state: SimulationState {
                vehicles,
                weights,
                network,
                route,
                paused: false,
                frame: 0,
                marquee: Marquee::default(),
            },
        })
    }

    /// Advances the simulation by one frame
    pub fn tick(&mut self) {
        let state = &mut self.state;
        state.frame += 1;
        state.marquee.advance(self.kinematics.scene().width);
        self.kinematics.advance(&mut state.vehicles, state.paused);
    }

    pub fn pause(&mut self) {
        if self.state.paused {
            debug!("Pause requested while already paused");
        }
        self.state.paused = true;
    }

    pub fn resume(&mut self) {
        if !self.state.paused {
            debug!("Resume requested while already running");
        }
        self.state.paused = false;
    }

    pub fn is_paused(&self) -> bool {
        self.state.paused
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            frame: self.state.frame,
            paused: self.state.paused,
            marquee_offset: self.state.marquee.offset(),
            vehicles: self.state.vehicles.iter().map(VehicleView::from).collect(),
            route: &self.state.route,
            node_coordinates: self.topology.node_coordinates(),
        }
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn topology(&self) -> &GridTopology {
        &self.topology
    }

    pub fn weights(&self) -> &WeightTable {
        &self.state.weights
    }

    pub fn network(&self) -> &RoadNetwork {
        &self.state.network
    }

    pub fn route(&self) -> &Route {
        &self.state.route
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.state.vehicles
    }

    pub fn frame(&self) -> u64 {
        self.state.frame
    }

    /// Log a summary of the simulation state
    pub fn log_summary(&self) {
        info!("=== Grid Traffic Summary ===");
        info!(
            "Frame: {}{}",
            self.state.frame,
            if self.state.paused { " (paused)" } else { "" }
        );
        info!(
            "Total intersections: {}",
            self.state.network.intersection_count()
        );
        info!("Total roads: {}", self.state.network.road_count());
        let route: Vec<String> = self.state.route.nodes().iter().map(Node::to_string).collect();
        info!("Route: {}", route.join(" -> "));
        info!("Route cost: {:.3}", self.state.route.cost());
        for vehicle in &self.state.vehicles {
            debug!(
                "  Vehicle {}: {:?} {:?} speed={:.3} position=({:.1}, {:.1})",
                vehicle.id.0,
                vehicle.orientation,
                vehicle.direction,
                vehicle.speed(),
                vehicle.position.x,
                vehicle.position.y
            );
        }
    }
}
