use std::f64::consts::FRAC_PI_2;

use kurbo::{CubicBez, Line, ParamCurve, ParamCurveArclen, ParamCurveExtrema, PathSeg, QuadBez};

use crate::foundation::core::{Point, Rect};
use crate::path::command::{Path, PathCommand};

/// Accuracy used for kurbo arc-length queries, in path units.
const ARCLEN_ACCURACY: f64 = 1e-4;

/// Epsilon offset (in arc length) used to estimate tangents by sampling two
/// nearby points.
const TANGENT_EPSILON: f64 = 0.1;

/// Arc-length parameterization over a path's drawing commands.
///
/// A pure value type with no environment-bound path state: curves are
/// evaluated through their true parameterization (kurbo's Bezier arc-length
/// inversion), not by chord approximation, so
/// [`point_at_length`](Self::point_at_length) is consistent with the curve.
#[derive(Clone, Debug)]
pub struct PathGeometry {
    segments: Vec<PathSeg>,
    // cumulative[i] is the arc length at the start of segments[i];
    // cumulative[len] is the total length.
    cumulative: Vec<f64>,
    start: Point,
}

impl PathGeometry {
    /// Flatten a command sequence into measurable segments.
    pub fn new(path: &Path) -> Self {
        let mut segments = Vec::new();
        let mut current = Point::ZERO;
        let mut subpath_start = Point::ZERO;
        let mut start = None;

        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    current = p;
                    subpath_start = p;
                    start.get_or_insert(p);
                }
                PathCommand::LineTo(p) => {
                    start.get_or_insert(current);
                    segments.push(PathSeg::Line(Line::new(current, p)));
                    current = p;
                }
                PathCommand::QuadTo { ctrl, to } => {
                    segments.push(PathSeg::Quad(QuadBez::new(current, ctrl, to)));
                    current = to;
                }
                PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                    segments.push(PathSeg::Cubic(CubicBez::new(current, ctrl1, ctrl2, to)));
                    current = to;
                }
                PathCommand::Close => {
                    if current != subpath_start {
                        segments.push(PathSeg::Line(Line::new(current, subpath_start)));
                    }
                    current = subpath_start;
                }
            }
        }

        let mut cumulative = Vec::with_capacity(segments.len() + 1);
        let mut total = 0.0;
        cumulative.push(0.0);
        for seg in &segments {
            total += seg.arclen(ARCLEN_ACCURACY);
            cumulative.push(total);
        }

        Self {
            segments,
            cumulative,
            start: start.unwrap_or(current),
        }
    }

    /// Total arc length of the path.
    pub fn total_length(&self) -> f64 {
        *self.cumulative.last().unwrap_or(&0.0)
    }

    /// Point at arc-length distance `d` from the path start.
    ///
    /// `d` is clamped to `[0, total_length]`. A degenerate path (zero total
    /// length, or no segments at all) answers every query with its single
    /// available point; no error is raised.
    pub fn point_at_length(&self, d: f64) -> Point {
        let total = self.total_length();
        if self.segments.is_empty() || total <= 0.0 {
            return self.start;
        }
        let d = d.clamp(0.0, total);

        // Index of the segment whose arc-length span contains d.
        let idx = match self.cumulative[1..].partition_point(|&end| end < d) {
            i if i >= self.segments.len() => self.segments.len() - 1,
            i => i,
        };
        let seg = self.segments[idx];
        let span = self.cumulative[idx + 1] - self.cumulative[idx];
        if span <= 0.0 {
            return seg.eval(1.0);
        }
        let local = d - self.cumulative[idx];
        let t = seg.inv_arclen(local, ARCLEN_ACCURACY);
        seg.eval(t)
    }

    /// Tangent direction at arc length `d`, estimated from two points a small
    /// epsilon apart, as `atan2(dy, dx)` in radians.
    pub fn tangent_angle_at(&self, d: f64) -> f64 {
        let total = self.total_length();
        let before = self.point_at_length((d - TANGENT_EPSILON).max(0.0));
        let after = self.point_at_length((d + TANGENT_EPSILON).min(total));
        (after.y - before.y).atan2(after.x - before.x)
    }

    /// Normal direction at arc length `d`: the tangent rotated by +90 degrees.
    pub fn normal_angle_at(&self, d: f64) -> f64 {
        self.tangent_angle_at(d) + FRAC_PI_2
    }

    /// Exact bounding rectangle of the path geometry.
    ///
    /// Degenerate paths give a zero-area rect at the single available point.
    pub fn bounding_rect(&self) -> Rect {
        let mut segs = self.segments.iter();
        let Some(first) = segs.next() else {
            return Rect::from_points(self.start, self.start);
        };
        segs.fold(first.bounding_box(), |acc, seg| acc.union(seg.bounding_box()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/geometry.rs"]
mod tests;
