//! Core types for the grid traffic simulation

use std::fmt;

/// An intersection in the routing grid
///
/// Columns and rows are 1-based. Ordering is column-major, which is also the
/// order nodes are visited when edge weights are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub col: u32,
    pub row: u32,
}

impl Node {
    pub const fn new(col: u32, row: u32) -> Self {
        Self { col, row }
    }

    /// Neighbor at the given signed offset, if it stays in positive coordinates
    pub fn offset(&self, d_col: i64, d_row: i64) -> Option<Node> {
        let col = u32::try_from(self.col as i64 + d_col).ok()?;
        let row = u32::try_from(self.row as i64 + d_row).ok()?;
        Some(Node::new(col, row))
    }

    /// Grid adjacency (4-neighbors only, no diagonals)
    pub fn is_adjacent(&self, other: &Node) -> bool {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row) == 1
    }

    pub fn manhattan_distance(&self, other: &Node) -> u32 {
        self.col.abs_diff(other.col) + self.row.abs_diff(other.row)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A point on the rendering plane
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A unique identifier for vehicles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub usize);

/// Axis a vehicle travels along
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Moves along x, lane fixed in y
    Horizontal,
    /// Moves along y, lane fixed in x
    Vertical,
}

/// Sign of travel along the vehicle's axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TravelDirection {
    /// Coordinate increases every tick
    Positive,
    /// Coordinate decreases every tick
    Negative,
}

impl TravelDirection {
    pub fn sign(self) -> f64 {
        match self {
            TravelDirection::Positive => 1.0,
            TravelDirection::Negative => -1.0,
        }
    }
}

impl From<bool> for TravelDirection {
    fn from(forward: bool) -> Self {
        if forward {
            TravelDirection::Positive
        } else {
            TravelDirection::Negative
        }
    }
}

/// Size of the visible scene in plane units
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneBounds {
    pub width: f64,
    pub height: f64,
}

impl SceneBounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Extent of the scene along the axis a vehicle of this orientation moves on
    pub fn extent(&self, orientation: Orientation) -> f64 {
        match orientation {
            Orientation::Horizontal => self.width,
            Orientation::Vertical => self.height,
        }
    }
}

impl Default for SceneBounds {
    fn default() -> Self {
        Self {
            width: SCENE_WIDTH,
            height: SCENE_HEIGHT,
        }
    }
}

/// Default scene width
pub const SCENE_WIDTH: f64 = 1250.0;

/// Default scene height
pub const SCENE_HEIGHT: f64 = 700.0;

/// Distance past a scene edge a vehicle may travel before it wraps
pub const WRAP_MARGIN: f64 = 100.0;

/// Weight used for any edge the weight table has no entry for
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Distance of a lane from its road's centre line
pub const LANE_OFFSET: f64 = 10.0;
