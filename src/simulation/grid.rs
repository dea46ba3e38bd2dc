//! Grid topology: intersections and their positions on the plane

use std::collections::BTreeMap;

use super::error::{ConfigError, Result};
use super::types::{Coordinate, Node};

/// Number of columns (M) and rows (N) of intersections
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridDimensions {
    pub columns: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub fn new(columns: u32, rows: u32) -> Self {
        Self { columns, rows }
    }
}

impl Default for GridDimensions {
    fn default() -> Self {
        Self { columns: 4, rows: 3 }
    }
}

/// Spacing constants for laying roads out on the plane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConstants {
    pub road_width: f64,
    /// Space between neighbouring vertical roads
    pub horizontal_road_gap: f64,
    /// Space between neighbouring horizontal roads
    pub vertical_road_gap: f64,
    /// Space left of the first vertical road
    pub horizontal_gap: f64,
    /// Space above the first horizontal road
    pub vertical_gap: f64,
}

impl Default for LayoutConstants {
    fn default() -> Self {
        Self {
            road_width: 110.0,
            horizontal_road_gap: 150.0,
            vertical_road_gap: 100.0,
            horizontal_gap: 100.0,
            vertical_gap: 100.0,
        }
    }
}

impl LayoutConstants {
    fn validate(&self) -> Result<()> {
        if !(self.road_width.is_finite() && self.road_width > 0.0) {
            return Err(ConfigError::InvalidLayout(format!(
                "road width must be positive, got {}",
                self.road_width
            )));
        }

        let gaps = [
            ("horizontal road gap", self.horizontal_road_gap),
            ("vertical road gap", self.vertical_road_gap),
            ("horizontal gap", self.horizontal_gap),
            ("vertical gap", self.vertical_gap),
        ];
        for (name, value) in gaps {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidLayout(format!(
                    "{} must be non-negative, got {}",
                    name, value
                )));
            }
        }

        Ok(())
    }

    /// X coordinate of the centre line of column `col`
    pub fn column_centre(&self, col: u32) -> f64 {
        self.horizontal_gap
            + 0.5 * self.road_width
            + (col as f64 - 1.0) * (self.road_width + self.horizontal_road_gap)
    }

    /// Y coordinate of the centre line of row `row`
    pub fn row_centre(&self, row: u32) -> f64 {
        self.vertical_gap
            + 0.5 * self.road_width
            + (row as f64 - 1.0) * (self.road_width + self.vertical_road_gap)
    }
}

/// The M×N grid of intersections with a total Node → Coordinate mapping
#[derive(Debug, Clone)]
pub struct GridTopology {
    dimensions: GridDimensions,
    layout: LayoutConstants,
    coordinates: BTreeMap<Node, Coordinate>,
}

impl GridTopology {
    pub fn new(dimensions: GridDimensions, layout: LayoutConstants) -> Result<Self> {
        if dimensions.columns == 0 || dimensions.rows == 0 {
            return Err(ConfigError::InvalidGridDimensions {
                columns: dimensions.columns,
                rows: dimensions.rows,
            });
        }
        layout.validate()?;

        let mut coordinates = BTreeMap::new();
        for col in 1..=dimensions.columns {
            let x = layout.column_centre(col);
            for row in 1..=dimensions.rows {
                let y = layout.row_centre(row);
                coordinates.insert(Node::new(col, row), Coordinate::new(x, y));
            }
        }

        Ok(Self {
            dimensions,
            layout,
            coordinates,
        })
    }

    pub fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    pub fn layout(&self) -> &LayoutConstants {
        &self.layout
    }

    pub fn contains(&self, node: Node) -> bool {
        (1..=self.dimensions.columns).contains(&node.col)
            && (1..=self.dimensions.rows).contains(&node.row)
    }

    pub fn coordinate(&self, node: Node) -> Option<Coordinate> {
        self.coordinates.get(&node).copied()
    }

    pub fn node_coordinates(&self) -> &BTreeMap<Node, Coordinate> {
        &self.coordinates
    }

    /// All nodes in column-major order
    pub fn nodes(&self) -> impl Iterator<Item = Node> + '_ {
        self.coordinates.keys().copied()
    }

    pub fn node_count(&self) -> usize {
        self.coordinates.len()
    }

    /// In-grid 4-neighbors of `node`: west, east, north, south
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        const OFFSETS: [(i64, i64); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
        OFFSETS
            .into_iter()
            .filter_map(move |(d_col, d_row)| node.offset(d_col, d_row))
            .filter(move |neighbor| self.contains(*neighbor))
    }

    /// The bottom-right corner, the default route destination
    pub fn far_corner(&self) -> Node {
        Node::new(self.dimensions.columns, self.dimensions.rows)
    }
}
