use std::f64::consts::PI;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// Rotation applied so that angle 0 points at 12 o'clock.
pub const ARC_ROTATION_DEG: f64 = -90.0;

const FULL_CIRCLE_DEG: f64 = 360.0;

/// Converts a chart angle (degrees, 0 at 12 o'clock, clockwise on screen)
/// into a pixel position on a circle.
#[must_use]
pub fn polar_to_cartesian(center: Point, radius: f64, angle_deg: f64) -> Point {
    let radians = (angle_deg + ARC_ROTATION_DEG) * PI / 180.0;
    Point::new(
        center.x + radius * radians.cos(),
        center.y + radius * radians.sin(),
    )
}

/// Sweep in degrees for a percentage. Negative or non-finite input, or a
/// sweep that is not representable, sweeps nothing.
#[must_use]
pub fn percentage_to_sweep(percentage: f64) -> f64 {
    if !percentage.is_finite() || percentage <= 0.0 {
        return 0.0;
    }
    let sweep = percentage * FULL_CIRCLE_DEG / 100.0;
    if sweep.is_finite() {
        return sweep;
    }
    let sweep = percentage / 100.0 * FULL_CIRCLE_DEG;
    if sweep.is_finite() { sweep } else { 0.0 }
}

/// Stroke-drawn circular arc of a donut chart.
///
/// `start` is the point at `end_angle_deg` and `end` the point at
/// `start_angle_deg`: segments are stroked from their end angle back to their
/// start angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegmentGeometry {
    pub center: Point,
    pub radius: f64,
    pub start_angle_deg: f64,
    pub end_angle_deg: f64,
    pub sweep_deg: f64,
    pub stroke_width: f64,
    pub start: Point,
    pub end: Point,
    pub large_arc: bool,
}

impl ArcSegmentGeometry {
    /// Serializes the arc as an SVG `d` attribute.
    ///
    /// A full circle has identical endpoints, which SVG arcs cannot draw, so
    /// it is emitted as two half arcs.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        let r = self.radius;
        let _ = write!(data, "M {:.2} {:.2}", self.start.x, self.start.y);
        if self.sweep_deg >= FULL_CIRCLE_DEG {
            let middle = polar_to_cartesian(
                self.center,
                r,
                self.start_angle_deg + self.sweep_deg * 0.5,
            );
            let _ = write!(
                data,
                " A {r:.2} {r:.2} 0 0 0 {:.2} {:.2} A {r:.2} {r:.2} 0 0 0 {:.2} {:.2}",
                middle.x, middle.y, self.end.x, self.end.y
            );
        } else {
            let _ = write!(
                data,
                " A {r:.2} {r:.2} 0 {} 0 {:.2} {:.2}",
                u8::from(self.large_arc),
                self.end.x,
                self.end.y
            );
        }
        data
    }
}

/// Turns percentages into consecutive arc segments starting at 12 o'clock.
///
/// Percentages are used as given: a set that does not sum to 100 leaves a
/// gap or wraps past the starting point.
#[must_use]
pub fn build_arc_segments(
    percentages: &[f64],
    center: Point,
    radius: f64,
    stroke_width: f64,
) -> Vec<ArcSegmentGeometry> {
    let mut segments = Vec::with_capacity(percentages.len());
    let mut start_angle_deg = 0.0;

    for percentage in percentages {
        let mut sweep_deg = percentage_to_sweep(*percentage);
        let mut end_angle_deg = start_angle_deg + sweep_deg;
        if !end_angle_deg.is_finite() {
            sweep_deg = 0.0;
            end_angle_deg = start_angle_deg;
        }
        segments.push(ArcSegmentGeometry {
            center,
            radius,
            start_angle_deg,
            end_angle_deg,
            sweep_deg,
            stroke_width,
            start: polar_to_cartesian(center, radius, end_angle_deg),
            end: polar_to_cartesian(center, radius, start_angle_deg),
            large_arc: sweep_deg > 180.0,
        });
        start_angle_deg = end_angle_deg;
    }

    segments
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn zero_degrees_points_up() {
        let top = polar_to_cartesian(Point::new(100.0, 100.0), 50.0, 0.0);
        assert_abs_diff_eq!(top.x, 100.0, epsilon = 1e-9);
        assert_abs_diff_eq!(top.y, 50.0, epsilon = 1e-9);

        let right = polar_to_cartesian(Point::new(100.0, 100.0), 50.0, 90.0);
        assert_abs_diff_eq!(right.x, 150.0, epsilon = 1e-9);
        assert_abs_diff_eq!(right.y, 100.0, epsilon = 1e-9);
    }

    #[test]
    fn large_arc_flag_follows_span() {
        let segments = build_arc_segments(&[32.0, 68.0], Point::new(0.0, 0.0), 10.0, 4.0);
        assert!(!segments[0].large_arc);
        assert!(segments[1].large_arc);
    }

    #[test]
    fn full_circle_svg_uses_two_arcs() {
        let segments = build_arc_segments(&[100.0], Point::new(50.0, 50.0), 20.0, 4.0);
        let data = segments[0].to_svg_path_data();
        assert_eq!(data.matches(" A ").count(), 2);
    }

    #[test]
    fn negative_percentage_sweeps_nothing() {
        let segments = build_arc_segments(&[-5.0, f64::NAN, 50.0], Point::new(0.0, 0.0), 1.0, 1.0);
        assert_eq!(segments[0].sweep_deg, 0.0);
        assert_eq!(segments[1].sweep_deg, 0.0);
        assert_eq!(segments[2].start_angle_deg, 0.0);
        assert_eq!(segments[2].end_angle_deg, 180.0);
    }

    #[test]
    fn huge_percentage_keeps_a_finite_sweep() {
        let sweep = percentage_to_sweep(f64::MAX);
        assert!(sweep.is_finite());
        assert!(sweep > 0.0);
    }

    #[test]
    fn accumulated_overflow_stops_the_running_angle() {
        let percentages = vec![f64::MAX; 40];
        let segments = build_arc_segments(&percentages, Point::new(0.0, 0.0), 10.0, 2.0);
        assert!(segments.iter().all(|segment| {
            segment.end_angle_deg.is_finite() && segment.start.is_finite() && segment.end.is_finite()
        }));
    }
}
