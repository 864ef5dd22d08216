//! Pathbrush is a path-normal texture sampling and resynthesis engine.
//!
//! It powers diagram editors that morph a tree visualization between two
//! incompatible layout geometries and paint textured brush strokes along
//! arbitrary vector paths, using a source raster as a texture donor.
//!
//! # Pipeline overview
//!
//! 1. **Parse**: a drawing-command string becomes a [`Path`]
//! 2. **Measure**: [`PathGeometry`] gives arc length, points and normals
//! 3. **Capture**: [`sample_path_columns`] walks a path over the source
//!    raster and extracts perpendicular pixel columns (a [`ColumnSet`])
//! 4. **Resample**: [`resample_column`] / [`resample_column_set`] stretch
//!    columns to new heights and counts
//! 5. **Synthesize**: [`stroke_with_column_set`] re-renders the captured
//!    texture along a destination path into an output [`Raster`]
//!
//! For shape morphing, [`PathTween`] interpolates two arbitrary paths by
//! uniform arc-length resampling, and
//! [`insert_matching_control_points`] reconciles control-point topologies
//! between two layout families so point-to-point interpolation is
//! meaningful.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Pure geometry**: no environment-bound path state; every query runs
//!   over parsed command data.
//! - **Float-through resampling**: pixel channels stay fractional until the
//!   final raster write, so chained resampling does not accumulate rounding
//!   error.
//! - **No IO in the core**: rasters come in as byte buffers; decoding lives
//!   in [`decode_raster`] at the edge.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod engine;
mod foundation;
mod morph;
mod path;
mod texture;

pub use assets::decode::{decode_raster, scaled_size};
pub use engine::{BrushEngine, EngineOptions, SynthesizeOptions};
pub use foundation::core::{BoundingBox, ColumnSet, PixelColumn, Point, Raster, Rect, Rgba, Vec2};
pub use foundation::error::{BrushError, BrushResult};
pub use morph::links::{elbow_path, trim_path_endpoints};
pub use morph::matcher::{insert_matching_control_points, unify_close_numbers};
pub use morph::tween::PathTween;
pub use path::command::{Path, PathCommand};
pub use path::geometry::PathGeometry;
pub use texture::capture::{SampleOptions, sample_path_columns};
pub use texture::resample::{linear_interpolate_series, resample_column, resample_column_set};
pub use texture::synth::{
    SynthesisOptions, estimate_path_bbox, stroke_with_brush, stroke_with_column_set,
};
