//! Vehicle movement for the grid simulation
//!
//! Vehicles travel straight along one axis at a fixed speed and wrap around
//! the scene instead of leaving it.

use super::types::{Coordinate, Orientation, SceneBounds, TravelDirection, VehicleId, WRAP_MARGIN};

/// A vehicle moving along a single lane
#[derive(Debug, Clone, PartialEq)]
pub struct Vehicle {
    pub id: VehicleId,
    pub orientation: Orientation,
    pub direction: TravelDirection,
    pub position: Coordinate,
    speed: f64,
}

impl Vehicle {
    pub fn new(
        id: VehicleId,
        orientation: Orientation,
        direction: TravelDirection,
        position: Coordinate,
        speed: f64,
    ) -> Self {
        Self {
            id,
            orientation,
            direction,
            position,
            speed,
        }
    }

    /// Distance covered per tick; fixed for the vehicle's lifetime
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Coordinate on the axis the vehicle does not move along
    pub fn lane_offset(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.position.y,
            Orientation::Vertical => self.position.x,
        }
    }

    /// Coordinate on the axis the vehicle moves along
    pub fn travel_position(&self) -> f64 {
        match self.orientation {
            Orientation::Horizontal => self.position.x,
            Orientation::Vertical => self.position.y,
        }
    }

    fn travel_position_mut(&mut self) -> &mut f64 {
        match self.orientation {
            Orientation::Horizontal => &mut self.position.x,
            Orientation::Vertical => &mut self.position.y,
        }
    }

    /// Moves one tick and wraps if the vehicle left the scene
    pub fn update(&mut self, scene: &SceneBounds) {
        let extent = scene.extent(self.orientation);
        let direction = self.direction;
        let step = direction.sign() * self.speed;
        let position = self.travel_position_mut();

        *position += step;

        match direction {
            TravelDirection::Positive if *position > extent + WRAP_MARGIN => {
                *position = -WRAP_MARGIN;
            }
            TravelDirection::Negative if *position < -WRAP_MARGIN => {
                *position = extent;
            }
            _ => {}
        }
    }
}

/// Decorative strip offset that keeps scrolling while vehicles are paused
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Marquee {
    offset: f64,
}

impl Marquee {
    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn advance(&mut self, width: f64) {
        self.offset += 1.0;
        if self.offset >= width {
            self.offset = 0.0;
        }
    }
}

/// Per-tick motion for the whole fleet
#[derive(Debug, Clone)]
pub struct Kinematics {
    scene: SceneBounds,
}

impl Kinematics {
    pub fn new(scene: SceneBounds) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &SceneBounds {
        &self.scene
    }

    /// Advances every vehicle one tick unless `paused`
    pub fn advance(&self, vehicles: &mut [Vehicle], paused: bool) {
        if paused {
            return;
        }
        for vehicle in vehicles.iter_mut() {
            vehicle.update(&self.scene);
        }
    }
}
