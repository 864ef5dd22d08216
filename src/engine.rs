use std::collections::HashMap;

use tracing::debug;

use crate::foundation::core::{BoundingBox, ColumnSet, Raster, Vec2};
use crate::foundation::error::{BrushError, BrushResult};
use crate::path::command::Path;
use crate::path::geometry::PathGeometry;
use crate::texture::capture::{SampleOptions, sample_path_columns};
use crate::texture::synth::{SynthesisOptions, stroke_with_column_set};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Construction-time configuration for a [`BrushEngine`].
pub struct EngineOptions {
    /// Width of the output raster in render units.
    pub render_width: u32,
    /// Device pixel ratio multiplier applied to the output raster size.
    pub device_pixel_ratio: f64,
    /// Capture controls used by [`BrushEngine::capture`].
    pub sample: SampleOptions,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            render_width: 800,
            device_pixel_ratio: 1.0,
            sample: SampleOptions::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Per-call configuration for [`BrushEngine::synthesize`].
pub struct SynthesizeOptions {
    /// Arc-length step along the destination path.
    pub step: f64,
    /// `true` when the destination path is already in render-space
    /// coordinates; `false` scales it from source space by the engine ratio.
    pub is_resized: bool,
}

impl Default for SynthesizeOptions {
    fn default() -> Self {
        Self {
            step: 1.0,
            is_resized: false,
        }
    }
}

/// Capture/synthesis facade over one source raster and one output raster.
///
/// Owns the captured [`ColumnSet`]s keyed by opaque path id, the shared
/// output raster, and the bounding box of the most recent synthesis. All
/// state is explicit; nothing is process-wide.
#[derive(Debug)]
pub struct BrushEngine {
    source: Raster,
    output: Raster,
    ratio: f64,
    sample_options: SampleOptions,
    captured: HashMap<String, ColumnSet>,
    output_bbox: Option<BoundingBox>,
}

impl BrushEngine {
    /// Build an engine around a source raster.
    ///
    /// The output raster is sized `render_width * dpr` wide with the source
    /// aspect ratio preserved; the render ratio is
    /// `render_width / source_width`.
    pub fn new(source: Raster, options: EngineOptions) -> BrushResult<Self> {
        if source.width() == 0 || source.height() == 0 {
            return Err(BrushError::validation("source raster must be non-empty"));
        }
        if options.render_width == 0 {
            return Err(BrushError::validation("render_width must be > 0"));
        }
        if !(options.device_pixel_ratio > 0.0) {
            return Err(BrushError::validation("device_pixel_ratio must be > 0"));
        }
        options.sample.validate()?;

        let ratio = f64::from(options.render_width) / f64::from(source.width());
        let dpr = options.device_pixel_ratio;
        let out_w = (f64::from(options.render_width) * dpr).round() as u32;
        let out_h = (ratio * f64::from(source.height()) * dpr).round() as u32;

        Ok(Self {
            source,
            output: Raster::new(out_w, out_h),
            ratio,
            sample_options: options.sample,
            captured: HashMap::new(),
            output_bbox: None,
        })
    }

    /// Capture the perpendicular pixel columns along `d` from the source
    /// raster and store them under `path_id`.
    ///
    /// Re-capturing an id overwrites the previous column set.
    #[tracing::instrument(skip(self, d))]
    pub fn capture(&mut self, path_id: &str, d: &str) -> BrushResult<()> {
        let path = Path::parse(d)?;
        let geometry = PathGeometry::new(&path);
        let columns = sample_path_columns(&self.source, &geometry, &self.sample_options)?;
        debug!(
            columns = columns.len(),
            height = columns.column_height(),
            "captured path texture"
        );
        self.captured.insert(path_id.to_string(), columns);
        Ok(())
    }

    /// Re-render the columns captured under `path_id` along the destination
    /// path `d`, writing into the shared output raster and updating the
    /// stored bounding box.
    ///
    /// The captured texture is stretched to the destination length
    /// (proportional spread, no cyclic repetition). Fails with
    /// [`BrushError::UnknownPathId`] when `path_id` has no capture.
    #[tracing::instrument(skip(self, d, options))]
    pub fn synthesize(
        &mut self,
        path_id: &str,
        d: &str,
        options: &SynthesizeOptions,
    ) -> BrushResult<()> {
        let columns = self
            .captured
            .get(path_id)
            .ok_or_else(|| BrushError::unknown_path_id(path_id))?;
        let path = Path::parse(d)?;
        let geometry = PathGeometry::new(&path);

        let scale = if options.is_resized { 1.0 } else { self.ratio };
        let synth = SynthesisOptions {
            step: options.step,
            render_ratio: self.ratio,
            scale,
            offset: Vec2::ZERO,
        };
        let bbox = stroke_with_column_set(&mut self.output, &geometry, columns, &synth)?;
        debug!(?bbox, "synthesized stroke");
        self.output_bbox = Some(bbox);
        Ok(())
    }

    /// Reset the output raster to fully transparent.
    pub fn clear_output(&mut self) {
        self.output.clear();
        self.output_bbox = None;
    }

    /// The shared output raster.
    pub fn output(&self) -> &Raster {
        &self.output
    }

    /// Bounding box of the most recent synthesis, if any.
    pub fn output_bbox(&self) -> Option<BoundingBox> {
        self.output_bbox
    }

    /// Columns captured under `path_id`, if any.
    pub fn column_set(&self, path_id: &str) -> Option<&ColumnSet> {
        self.captured.get(path_id)
    }

    /// Render ratio (`render_width / source_width`).
    pub fn ratio(&self) -> f64 {
        self.ratio
    }

    /// The source raster.
    pub fn source(&self) -> &Raster {
        &self.source
    }
}
