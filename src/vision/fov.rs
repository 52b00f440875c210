use std::f64::consts::FRAC_PI_2;

use super::{Direction, FovLines, Observer, Segment, VisionError};
use crate::geometry::{angle_difference, angle_of, Point};

/// The observer's angular field of view, derived once per snapshot.
///
/// The heading is strictly parallel to the road axis: looking Forward means
/// +PI/2 (toward increasing y) under the convention where 0 points along
/// increasing x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FovWedge {
    pub origin: Point,
    pub forward_angle: f64,
    pub half_fov: f64,
    pub left_angle: f64,
    pub right_angle: f64,
}

impl FovWedge {
    pub fn from_observer(observer: &Observer) -> Result<Self, VisionError> {
        if !(observer.fov > 0.0 && observer.fov <= 360.0) {
            return Err(VisionError::InvalidFov(observer.fov));
        }

        let forward_angle = match observer.direction {
            Direction::Forward => FRAC_PI_2,
            Direction::Backward => -FRAC_PI_2,
        };
        let half_fov = observer.fov.to_radians() / 2.0;

        Ok(Self {
            origin: observer.position,
            forward_angle,
            half_fov,
            left_angle: forward_angle - half_fov,
            right_angle: forward_angle + half_fov,
        })
    }

    /// Whether `point` lies inside the wedge.
    pub fn contains(&self, point: &Point) -> bool {
        let angle_to_point = angle_of(&self.origin, point);
        angle_difference(angle_to_point, self.forward_angle).abs() <= self.half_fov
    }

    /// Endpoint of a ray cast from the origin at `angle`.
    pub fn ray_end(&self, angle: f64, length: f64) -> Point {
        Point::new(
            self.origin.x + angle.cos() * length,
            self.origin.y + angle.sin() * length,
        )
    }

    /// The two boundary rays, extended `ray_length` units for rendering.
    pub fn boundary_rays(&self, ray_length: f64) -> FovLines {
        FovLines {
            left: Segment {
                start: self.origin,
                end: self.ray_end(self.left_angle, ray_length),
            },
            right: Segment {
                start: self.origin,
                end: self.ray_end(self.right_angle, ray_length),
            },
        }
    }
}
