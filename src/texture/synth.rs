use rayon::prelude::*;

use crate::foundation::core::{BoundingBox, ColumnSet, PixelColumn, Raster, Vec2};
use crate::foundation::error::{BrushError, BrushResult};
use crate::path::geometry::PathGeometry;
use crate::texture::resample::{resample_column, resample_column_set};

/// Fixed expansion applied around the destination path when estimating the
/// output bounding box, in path units.
const BBOX_PADDING: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Controls for stroke resynthesis along a destination path.
pub struct SynthesisOptions {
    /// Arc-length step between synthesized columns, in path units.
    pub step: f64,
    /// Scale applied to column heights when resampling for output.
    pub render_ratio: f64,
    /// Scale applied to path coordinates when writing pixels (and to the
    /// reported bounding box).
    pub scale: f64,
    /// Extra translation applied to every written pixel.
    pub offset: Vec2,
}

impl Default for SynthesisOptions {
    fn default() -> Self {
        Self {
            step: 1.0,
            render_ratio: 1.0,
            scale: 1.0,
            offset: Vec2::ZERO,
        }
    }
}

impl SynthesisOptions {
    fn validate(&self) -> BrushResult<()> {
        if !(self.step > 0.0) {
            return Err(BrushError::validation("synthesis step must be > 0"));
        }
        if !(self.render_ratio > 0.0) {
            return Err(BrushError::validation("render_ratio must be > 0"));
        }
        Ok(())
    }
}

/// Estimate the output bounding box for a destination path: the exact path
/// bbox expanded by a fixed padding, scaled to render space.
pub fn estimate_path_bbox(geometry: &PathGeometry, ratio: f64) -> BoundingBox {
    let r = geometry.bounding_rect();
    BoundingBox {
        x: (r.x0 - BBOX_PADDING) * ratio,
        y: (r.y0 - BBOX_PADDING) * ratio,
        width: (r.x1 - r.x0 + 2.0 * BBOX_PADDING) * ratio,
        height: (r.y1 - r.y0 + 2.0 * BBOX_PADDING) * ratio,
    }
}

/// Re-render a brush sample list along a destination path, cycling through
/// the columns when the path is longer than the capture.
///
/// Columns are resampled to a render-scaled height, then each pixel is
/// written at `point * scale + offset + normal * pixel_offset` with plain
/// overwrite semantics (no blending).
pub fn stroke_with_brush(
    output: &mut Raster,
    geometry: &PathGeometry,
    brush: &ColumnSet,
    options: &SynthesisOptions,
) -> BrushResult<BoundingBox> {
    options.validate()?;
    if brush.is_empty() {
        return Err(BrushError::validation("brush column set is empty"));
    }

    let steps = step_count(geometry, options.step);
    let prepared: Vec<PixelColumn> = (0..steps)
        .into_par_iter()
        .map(|i| {
            let column = &brush.columns()[i % brush.len()];
            let render_len = (column.len() as f64 * options.render_ratio).round() as usize;
            resample_column(column, render_len)
        })
        .collect();

    write_columns(output, geometry, &prepared, options);
    Ok(estimate_path_bbox(geometry, options.scale))
}

/// Re-render a captured column set along a destination path, stretching it to
/// exactly the number of steps so the texture spreads proportionally across
/// the whole destination length instead of repeating.
pub fn stroke_with_column_set(
    output: &mut Raster,
    geometry: &PathGeometry,
    columns: &ColumnSet,
    options: &SynthesisOptions,
) -> BrushResult<BoundingBox> {
    options.validate()?;
    if columns.is_empty() {
        return Err(BrushError::validation("captured column set is empty"));
    }

    let steps = step_count(geometry, options.step);
    let stretched = resample_column_set(columns, steps);
    let render_height = (columns.column_height() as f64 * options.render_ratio).round() as usize;

    let prepared: Vec<PixelColumn> = stretched
        .columns()
        .par_iter()
        .map(|column| resample_column(column, render_height))
        .collect();

    write_columns(output, geometry, &prepared, options);
    Ok(estimate_path_bbox(geometry, options.scale))
}

fn step_count(geometry: &PathGeometry, step: f64) -> usize {
    let total = geometry.total_length();
    if total <= 0.0 {
        return 0;
    }
    (total / step).ceil() as usize
}

/// Sequential write pass: synthesized columns overlap along their normal
/// halo, so pixel writes stay on one thread.
fn write_columns(
    output: &mut Raster,
    geometry: &PathGeometry,
    prepared: &[PixelColumn],
    options: &SynthesisOptions,
) {
    for (i, column) in prepared.iter().enumerate() {
        let d = i as f64 * options.step;
        let pt = geometry.point_at_length(d);
        let (ny, nx) = geometry.normal_angle_at(d).sin_cos();

        // Floor division keeps the written column centered exactly like the
        // captured one (offsets -len/2 ..= +len/2), so an identity
        // capture/synthesize round trip lands on the same pixels.
        let center = (column.len() / 2) as i64;
        for (idx, &pixel) in column.iter().enumerate() {
            let offset = idx as i64 - center;
            let dx = nx * offset as f64;
            let dy = ny * offset as f64;
            let x = (pt.x * options.scale + dx + options.offset.x).round() as i64;
            let y = (pt.y * options.scale + dy + options.offset.y).round() as i64;
            output.put_pixel(x, y, pixel);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/synth.rs"]
mod tests;
