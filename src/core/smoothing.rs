use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::core::types::Point;

/// One drawing instruction of a smoothed path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum PathSegment {
    MoveTo { to: Point },
    QuadTo { control: Point, to: Point },
}

impl PathSegment {
    #[must_use]
    pub fn anchor(self) -> Point {
        match self {
            Self::MoveTo { to } | Self::QuadTo { to, .. } => to,
        }
    }
}

/// Anchor and control points of a smoothed trend line, in drawing order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathGeometry {
    pub segments: Vec<PathSegment>,
}

impl PathGeometry {
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    #[must_use]
    pub fn anchor_points(&self) -> Vec<Point> {
        self.segments.iter().map(|segment| segment.anchor()).collect()
    }

    #[must_use]
    pub fn control_points(&self) -> Vec<Point> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::QuadTo { control, .. } => Some(*control),
                PathSegment::MoveTo { .. } => None,
            })
            .collect()
    }

    /// Serializes the path as an SVG `d` attribute.
    #[must_use]
    pub fn to_svg_path_data(&self) -> String {
        let mut data = String::new();
        for segment in &self.segments {
            if !data.is_empty() {
                data.push(' ');
            }
            // Writing into a String cannot fail.
            let _ = match segment {
                PathSegment::MoveTo { to } => write!(data, "M {:.2} {:.2}", to.x, to.y),
                PathSegment::QuadTo { control, to } => write!(
                    data,
                    "Q {:.2} {:.2} {:.2} {:.2}",
                    control.x, control.y, to.x, to.y
                ),
            };
        }
        data
    }
}

/// Builds a smoothed path through `points`.
///
/// The path starts at the first point; every following point is reached by a
/// quadratic curve whose control point is the midpoint between it and its
/// predecessor. Fewer than two points yield a degenerate (one point) or empty
/// path.
#[must_use]
pub fn build_smoothed_path(points: &[Point]) -> PathGeometry {
    let Some((first, rest)) = points.split_first() else {
        return PathGeometry::empty();
    };

    let mut segments = Vec::with_capacity(points.len());
    segments.push(PathSegment::MoveTo { to: *first });

    let mut previous = *first;
    for point in rest {
        segments.push(PathSegment::QuadTo {
            control: previous.midpoint(*point),
            to: *point,
        });
        previous = *point;
    }

    PathGeometry { segments }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_point_sits_between_anchors() {
        let path = build_smoothed_path(&[Point::new(0.0, 100.0), Point::new(50.0, 20.0)]);
        assert_eq!(path.anchor_points().len(), 2);
        assert_eq!(path.control_points(), vec![Point::new(25.0, 60.0)]);
    }

    #[test]
    fn svg_data_lists_commands_in_order() {
        let path = build_smoothed_path(&[Point::new(0.0, 10.0), Point::new(10.0, 0.0)]);
        assert_eq!(
            path.to_svg_path_data(),
            "M 0.00 10.00 Q 5.00 5.00 10.00 0.00"
        );
        assert_eq!(PathGeometry::empty().to_svg_path_data(), "");
    }
}
