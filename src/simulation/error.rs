use thiserror::Error;

use super::lanes::LanePool;
use super::types::Node;

/// Fatal problems detected while building a simulation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid grid dimensions: {columns}x{rows} (both must be at least 1)")]
    InvalidGridDimensions { columns: u32, rows: u32 },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Invalid speed: {0} (must be finite and positive)")]
    InvalidSpeed(f64),

    #[error("Speed pool is empty; at least one vehicle is required")]
    EmptySpeedPool,

    #[error("Invalid edge weight: {0} (must be finite and positive)")]
    InvalidWeight(f64),

    #[error("Fleet is empty; at least one vehicle is required")]
    EmptyFleet,

    #[error("Not enough speeds: {needed} vehicles but {got} speeds")]
    InsufficientSpeeds { needed: usize, got: usize },

    #[error("Invalid vehicle mix: {vertical} vertical out of {total} vehicles")]
    InvalidVehicleMix { vertical: usize, total: usize },

    #[error("Lane pool {pool:?} exhausted after {capacity} vehicles")]
    LanePoolExhausted { pool: LanePool, capacity: usize },

    #[error("Route endpoint {0} lies outside the grid")]
    EndpointOutsideGrid(Node),

    #[error("No route from {start} to {destination}")]
    Unreachable { start: Node, destination: Node },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
