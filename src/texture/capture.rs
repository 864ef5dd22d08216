use rayon::prelude::*;

use crate::foundation::core::{ColumnSet, PixelColumn, Raster};
use crate::foundation::error::{BrushError, BrushResult};
use crate::path::geometry::PathGeometry;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Controls for perpendicular texture capture.
pub struct SampleOptions {
    /// Arc-length step between captured columns, in source units.
    pub sample_distance: f64,
    /// Number of offsets either side of the path point; must be even. The
    /// captured column height is `normal_length + 1`.
    pub normal_length: usize,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            sample_distance: 1.0,
            normal_length: 8,
        }
    }
}

impl SampleOptions {
    /// Reject option combinations the sampler cannot honor.
    pub fn validate(&self) -> BrushResult<()> {
        if !(self.sample_distance > 0.0) {
            return Err(BrushError::validation("sample_distance must be > 0"));
        }
        if self.normal_length == 0 || self.normal_length % 2 != 0 {
            return Err(BrushError::validation(
                "normal_length must be even and non-zero",
            ));
        }
        Ok(())
    }
}

/// Walk a path at fixed arc-length steps and capture the perpendicular pixel
/// column at each step from the source raster.
///
/// Each column reads `normal_length + 1` nearest-integer pixels centered on
/// the path point along the normal direction; coordinates outside the raster
/// read as transparent black. Columns depend only on the read-only raster and
/// the path geometry, so steps are computed in parallel.
///
/// Fails with [`BrushError::Validation`] when the options do not pass
/// [`SampleOptions::validate`].
pub fn sample_path_columns(
    raster: &Raster,
    geometry: &PathGeometry,
    options: &SampleOptions,
) -> BrushResult<ColumnSet> {
    options.validate()?;
    let total = geometry.total_length();
    if total <= 0.0 {
        return Ok(ColumnSet::default());
    }

    // Steps at d = 0, step, 2*step, ... strictly below the total length.
    let steps = (total / options.sample_distance).ceil() as usize;
    let columns = (0..steps)
        .into_par_iter()
        .map(|i| column_at(raster, geometry, i as f64 * options.sample_distance, options))
        .collect();
    Ok(ColumnSet::new(columns))
}

fn column_at(
    raster: &Raster,
    geometry: &PathGeometry,
    d: f64,
    options: &SampleOptions,
) -> PixelColumn {
    let pt = geometry.point_at_length(d);
    let (ny, nx) = geometry.normal_angle_at(d).sin_cos();

    let half = (options.normal_length / 2) as i64;
    (-half..=half)
        .map(|offset| {
            let sx = (pt.x + offset as f64 * nx).round() as i64;
            let sy = (pt.y + offset as f64 * ny).round() as i64;
            raster.pixel_at(sx, sy)
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/texture/capture.rs"]
mod tests;
