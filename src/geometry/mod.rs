use nalgebra::{Point2, Vector2};
use std::f64::consts::PI;

pub type Point = Point2<f64>;
pub type Vec2 = Vector2<f64>;

/// Segments whose determinant magnitude falls below this are treated as parallel.
pub const PARALLEL_EPSILON: f64 = 1e-10;

/// Points closer than this are merged when assembling a clip polygon.
pub const DEDUP_EPSILON: f64 = 1e-6;

pub fn distance(p1: &Point, p2: &Point) -> f64 {
    (p2 - p1).magnitude()
}

/// Angle of the ray from `from` to `to`, in (-PI, PI].
pub fn angle_of(from: &Point, to: &Point) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}

/// Signed minimal angular difference a - b, normalized into [-PI, PI].
pub fn angle_difference(a: f64, b: f64) -> f64 {
    let mut diff = a - b;
    while diff > PI {
        diff -= 2.0 * PI;
    }
    while diff < -PI {
        diff += 2.0 * PI;
    }
    diff
}

/// Intersection of segments p1-p2 and p3-p4, if any.
///
/// Parametric line intersection; None for (near-)parallel segments or when
/// the intersection falls outside either segment.
pub fn segment_intersection(p1: &Point, p2: &Point, p3: &Point, p4: &Point) -> Option<Point> {
    let denom = (p1.x - p2.x) * (p3.y - p4.y) - (p1.y - p2.y) * (p3.x - p4.x);
    if denom.abs() < PARALLEL_EPSILON {
        return None;
    }

    let t = ((p1.x - p3.x) * (p3.y - p4.y) - (p1.y - p3.y) * (p3.x - p4.x)) / denom;
    let u = -((p1.x - p2.x) * (p1.y - p3.y) - (p1.y - p2.y) * (p1.x - p3.x)) / denom;

    if (0.0..=1.0).contains(&t) && (0.0..=1.0).contains(&u) {
        Some(Point::new(
            p1.x + t * (p2.x - p1.x),
            p1.y + t * (p2.y - p1.y),
        ))
    } else {
        None
    }
}

/// Area of an ordered polygon ring via the Shoelace formula.
///
/// Always non-negative; zero for fewer than 3 points. Both winding
/// directions yield the same result.
pub fn polygon_area(points: &[Point]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..points.len() {
        let j = (i + 1) % points.len();
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    area.abs() / 2.0
}
