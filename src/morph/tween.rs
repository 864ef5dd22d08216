use std::fmt::Write as _;

use crate::foundation::core::Point;
use crate::foundation::error::{BrushError, BrushResult};
use crate::path::command::Path;
use crate::path::geometry::PathGeometry;

/// Per-frame interpolator between two arbitrary paths, built by uniform
/// arc-length resampling.
///
/// Works for paths of unrelated, even mismatched, topology: both shapes are
/// sampled at matching fractional arc-length positions and each sample pair
/// is lerped per frame. During the transition the shape is an approximate
/// polyline; at progress `1` the exact target string is returned verbatim so
/// no residual sampling error remains at the endpoint.
#[derive(Clone, Debug)]
pub struct PathTween {
    pairs: Vec<(Point, Point)>,
    target_d: String,
}

impl PathTween {
    /// Sample `start_d` and `target_d` at a uniform arc-length step of
    /// `precision` render units (relative to the longer of the two paths).
    pub fn new(start_d: &str, target_d: &str, precision: f64) -> BrushResult<Self> {
        if !(precision > 0.0) {
            return Err(BrushError::validation("tween precision must be > 0"));
        }
        let start = PathGeometry::new(&Path::parse(start_d)?);
        let target = PathGeometry::new(&Path::parse(target_d)?);

        let n0 = start.total_length();
        let n1 = target.total_length();
        let longest = n0.max(n1);

        // Fractional positions 0, dt, 2dt, ... plus the exact endpoint.
        let mut distances = vec![0.0];
        if longest > 0.0 {
            let dt = precision / longest;
            let mut t = dt;
            while t < 1.0 {
                distances.push(t);
                t += dt;
            }
        }
        distances.push(1.0);

        let pairs = distances
            .iter()
            .map(|&t| (start.point_at_length(t * n0), target.point_at_length(t * n1)))
            .collect();

        Ok(Self {
            pairs,
            target_d: target_d.to_string(),
        })
    }

    /// Path string at animation progress `u` in `[0, 1]`.
    ///
    /// Below `1` the sampled point pairs are lerped and joined with straight
    /// segments; at (or above) `1` the exact target string is returned.
    pub fn frame(&self, u: f64) -> String {
        if u >= 1.0 {
            return self.target_d.clone();
        }
        let mut d = String::from("M");
        for (idx, (p0, p1)) in self.pairs.iter().enumerate() {
            let p = p0.lerp(*p1, u);
            if idx > 0 {
                d.push('L');
            }
            let _ = write!(d, "{},{}", p.x, p.y);
        }
        d
    }

    /// Number of sampled point pairs backing this tween.
    pub fn sample_count(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/morph/tween.rs"]
mod tests;
