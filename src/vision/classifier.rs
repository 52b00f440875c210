use super::{Direction, FovWedge, Observer, Vehicle, VisionError, VisionStatus};
use crate::geometry::{
    angle_of, distance, polygon_area, segment_intersection, Point, DEDUP_EPSILON,
};

/// Classify one vehicle against the observer's FOV wedge.
///
/// Returns the tri-state status and the visible-area ratio: exactly 1 when
/// fully visible, exactly 0 when fully hidden, otherwise the clipped fraction.
pub fn classify_vehicle(
    vehicle: &Vehicle,
    observer: &Observer,
    wedge: &FovWedge,
    clip_ray_length: f64,
) -> Result<(VisionStatus, f64), VisionError> {
    if vehicle.width <= 0.0 || vehicle.length <= 0.0 {
        return Err(VisionError::InvalidVehicleDimensions {
            width: vehicle.width,
            length: vehicle.length,
        });
    }

    // Cheap rejection exploiting the road's 1D topology: anything behind the
    // observer is outside the wedge, no angular test needed.
    let rel_y = vehicle.position.y - wedge.origin.y;
    let behind = match observer.direction {
        Direction::Forward => rel_y <= 0.0,
        Direction::Backward => rel_y >= 0.0,
    };
    if behind {
        return Ok((VisionStatus::FullyHidden, 0.0));
    }

    let corners = vehicle.corners();
    let inside = corners.iter().filter(|c| wedge.contains(c)).count();

    match inside {
        4 => Ok((VisionStatus::FullyVisible, 1.0)),
        0 => Ok((VisionStatus::FullyHidden, 0.0)),
        _ => {
            let ratio = partial_visibility_ratio(vehicle, wedge, clip_ray_length);
            Ok((VisionStatus::PartiallyVisible, ratio))
        }
    }
}

/// Exact visible fraction for a rectangle straddling the wedge boundary.
///
/// Clips the rectangle against both boundary rays: corners inside the wedge
/// plus every edge/ray intersection, sorted by angle around the wedge origin
/// into a consistent winding, then measured with the Shoelace formula. Exact
/// for a convex wedge against a convex rectangle.
fn partial_visibility_ratio(vehicle: &Vehicle, wedge: &FovWedge, clip_ray_length: f64) -> f64 {
    let corners = vehicle.corners();

    // Boundary rays extended far beyond the vehicle at road-scene scale.
    let left_end = wedge.ray_end(wedge.left_angle, clip_ray_length);
    let right_end = wedge.ray_end(wedge.right_angle, clip_ray_length);

    let mut points: Vec<Point> = corners
        .iter()
        .copied()
        .filter(|corner| wedge.contains(corner))
        .collect();

    for i in 0..4 {
        let j = (i + 1) % 4;
        if let Some(p) = segment_intersection(&wedge.origin, &left_end, &corners[i], &corners[j]) {
            points.push(p);
        }
        if let Some(p) = segment_intersection(&wedge.origin, &right_end, &corners[i], &corners[j]) {
            points.push(p);
        }
    }

    // Degenerate/tangential contact.
    if points.len() < 3 {
        return 0.0;
    }

    points.sort_by(|a, b| {
        let angle_a = angle_of(&wedge.origin, a);
        let angle_b = angle_of(&wedge.origin, b);
        angle_a.total_cmp(&angle_b)
    });

    // Drop points coincident with their immediate predecessor in sorted order.
    let mut ring: Vec<Point> = Vec::with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        if i == 0 || distance(&points[i - 1], point) > DEDUP_EPSILON {
            ring.push(*point);
        }
    }

    let visible_area = polygon_area(&ring);
    (visible_area / vehicle.footprint_area()).clamp(0.0, 1.0)
}
