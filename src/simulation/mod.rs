//! Grid traffic simulation core
//!
//! Routing over a weighted grid of intersections and tick-based vehicle
//! motion. Nothing here depends on a rendering or windowing layer.

mod controller;
mod error;
mod grid;
mod kinematics;
mod lanes;
mod road_network;
mod route;
mod types;
mod weights;

pub use controller::{SimConfig, SimulationController, Snapshot, VehicleView};
pub use error::{ConfigError, Result};
pub use grid::{GridDimensions, GridTopology, LayoutConstants};
pub use kinematics::{Kinematics, Marquee, Vehicle};
pub use lanes::{FleetPlan, LaneAssigner, LanePool, LanePools};
pub use road_network::RoadNetwork;
pub use route::{Route, ShortestPathTree};
pub use types::{
    Coordinate, Node, Orientation, SceneBounds, TravelDirection, VehicleId, DEFAULT_EDGE_WEIGHT,
    LANE_OFFSET, SCENE_HEIGHT, SCENE_WIDTH, WRAP_MARGIN,
};
pub use weights::{speed_pool, DirectedEdge, WeightTable};
