use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Point;

pub mod analyzer;
pub mod classifier;
pub mod fov;

pub use analyzer::*;
pub use classifier::*;
pub use fov::*;

#[derive(Debug, Error)]
pub enum VisionError {
    #[error("observer fov must be in (0, 360] degrees, got {0}")]
    InvalidFov(f64),
    #[error("vehicle dimensions must be positive, got {width} x {length}")]
    InvalidVehicleDimensions { width: f64, length: f64 },
}

/// Which way along the road axis the observer looks.
///
/// The feed encodes this as 1 (toward increasing y) or -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i8", into = "i8")]
pub enum Direction {
    Forward,
    Backward,
}

impl From<Direction> for i8 {
    fn from(direction: Direction) -> i8 {
        match direction {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

impl TryFrom<i8> for Direction {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Direction::Forward),
            -1 => Ok(Direction::Backward),
            other => Err(format!("direction must be 1 or -1, got {}", other)),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Observer {
    #[serde(with = "point_xy")]
    pub position: Point,
    pub width: f64,
    pub length: f64,
    /// Field of view in degrees, (0, 360].
    pub fov: f64,
    pub direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Rectangle center.
    #[serde(with = "point_xy")]
    pub position: Point,
    pub width: f64,
    pub length: f64,
    pub speed: f64,
}

impl Vehicle {
    /// The four axis-aligned rectangle corners, in ring order.
    pub fn corners(&self) -> [Point; 4] {
        let hw = self.width / 2.0;
        let hl = self.length / 2.0;
        let (x, y) = (self.position.x, self.position.y);
        [
            Point::new(x - hw, y - hl),
            Point::new(x + hw, y - hl),
            Point::new(x + hw, y + hl),
            Point::new(x - hw, y + hl),
        ]
    }

    pub fn footprint_area(&self) -> f64 {
        self.width * self.length
    }
}

/// One complete replacement value from the live road feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadSnapshot {
    pub observer: Observer,
    pub vehicles: Vec<Vehicle>,
    /// Road length. Accepted for future FOV truncation at road bounds.
    pub length: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisionStatus {
    FullyVisible,
    PartiallyVisible,
    FullyHidden,
}

#[derive(Debug, Clone)]
pub struct AnalyzedVehicle {
    /// Positional label, "vehicle-<index>" in snapshot order.
    pub id: String,
    pub vehicle: Vehicle,
    pub vision_status: VisionStatus,
    /// Fraction of the vehicle's footprint inside the FOV wedge, in [0, 1].
    pub visibility_ratio: f64,
    pub distance_to_observer: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

/// The two FOV boundary rays, for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovLines {
    pub left: Segment,
    pub right: Segment,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub fully_visible: usize,
    pub partially_visible: usize,
    pub fully_hidden: usize,
}

#[derive(Debug, Clone)]
pub struct VisionAnalysis {
    pub observer: Observer,
    /// Input order preserved.
    pub vehicles: Vec<AnalyzedVehicle>,
    pub fov_lines: FovLines,
}

impl VisionAnalysis {
    pub fn status_counts(&self) -> StatusCounts {
        let mut counts = StatusCounts::default();
        for vehicle in &self.vehicles {
            match vehicle.vision_status {
                VisionStatus::FullyVisible => counts.fully_visible += 1,
                VisionStatus::PartiallyVisible => counts.partially_visible += 1,
                VisionStatus::FullyHidden => counts.fully_hidden += 1,
            }
        }
        counts
    }
}

/// Serialize positions as {"x": .., "y": ..} objects, matching the feed payload.
mod point_xy {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::geometry::Point;

    #[derive(Serialize, Deserialize)]
    struct Xy {
        x: f64,
        y: f64,
    }

    pub fn serialize<S: Serializer>(point: &Point, serializer: S) -> Result<S::Ok, S::Error> {
        Xy {
            x: point.x,
            y: point.y,
        }
        .serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Point, D::Error> {
        let xy = Xy::deserialize(deserializer)?;
        Ok(Point::new(xy.x, xy.y))
    }
}
