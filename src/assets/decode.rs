use anyhow::Context;

use crate::foundation::core::Raster;
use crate::foundation::error::BrushResult;

/// Decode encoded image bytes into an RGBA8 [`Raster`].
///
/// Alpha stays straight (non-premultiplied): the synthesis pipeline overwrites
/// pixels rather than blending them, so no premultiply step is wanted.
pub fn decode_raster(bytes: &[u8]) -> BrushResult<Raster> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    Raster::from_rgba8(width, height, rgba.into_raw())
}

/// Negotiate an aspect-preserving size from an optional target width or
/// height.
///
/// When both targets are given, the width wins. With neither, the original
/// size is returned. Results are rounded to whole pixels.
pub fn scaled_size(
    width: u32,
    height: u32,
    target_width: Option<u32>,
    target_height: Option<u32>,
) -> (u32, u32) {
    match (target_width, target_height) {
        (Some(tw), _) => {
            let th = (f64::from(height) / f64::from(width) * f64::from(tw)).round() as u32;
            (tw, th)
        }
        (None, Some(th)) => {
            let tw = (f64::from(width) / f64::from(height) * f64::from(th)).round() as u32;
            (tw, th)
        }
        (None, None) => (width, height),
    }
}
