use crate::foundation::core::{ColumnSet, PixelColumn, Rgba};

/// Linearly resample a discrete series to `new_len` values.
///
/// Uses the uniform re-indexing `i -> i * (len - 1) / (new_len - 1)`, which
/// preserves the first and last element. Edge cases: an empty source or
/// `new_len == 0` gives an empty result; `new_len == 1` gives the first
/// element; matching lengths copy the source unchanged.
pub fn linear_interpolate_series(source: &[f64], new_len: usize) -> Vec<f64> {
    if source.is_empty() || new_len == 0 {
        return Vec::new();
    }
    if new_len == source.len() {
        return source.to_vec();
    }
    if new_len == 1 {
        return vec![source[0]];
    }

    let ratio = (source.len() - 1) as f64 / (new_len - 1) as f64;
    (0..new_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(source.len() - 1);
            let w = pos - lo as f64;
            source[lo] * (1.0 - w) + source[hi] * w
        })
        .collect()
}

/// Resample a pixel column to `new_len` pixels, interpolating each RGBA
/// channel independently.
///
/// All arithmetic stays floating point; nothing is rounded here, so chained
/// resampling does not accumulate quantization error. Same edge-case handling
/// as [`linear_interpolate_series`].
pub fn resample_column(source: &PixelColumn, new_len: usize) -> PixelColumn {
    if source.is_empty() || new_len == 0 {
        return Vec::new();
    }
    if new_len == source.len() {
        return source.clone();
    }
    if new_len == 1 {
        return vec![source[0]];
    }

    let ratio = (source.len() - 1) as f64 / (new_len - 1) as f64;
    (0..new_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(source.len() - 1);
            let w = pos - lo as f64;
            lerp_rgba(source[lo], source[hi], w)
        })
        .collect()
}

/// Resample a column set across the column axis to `new_count` columns.
///
/// Each output column blends two adjacent source columns row by row with the
/// same endpoint-preserving scheme as [`linear_interpolate_series`]. Output
/// height is the first column's height; rows missing from a shorter source
/// column read as transparent black.
pub fn resample_column_set(source: &ColumnSet, new_count: usize) -> ColumnSet {
    if source.is_empty() || new_count == 0 {
        return ColumnSet::default();
    }
    if new_count == source.len() {
        return source.clone();
    }

    let columns = source.columns();
    let height = source.column_height();
    if new_count == 1 {
        return ColumnSet::new(vec![columns[0].clone()]);
    }

    let ratio = (columns.len() - 1) as f64 / (new_count - 1) as f64;
    let out = (0..new_count)
        .map(|i| {
            let pos = i as f64 * ratio;
            let lo = pos.floor() as usize;
            let hi = (lo + 1).min(columns.len() - 1);
            let w = pos - lo as f64;
            (0..height)
                .map(|row| {
                    let a = pixel_or_transparent(&columns[lo], row);
                    let b = pixel_or_transparent(&columns[hi], row);
                    lerp_rgba(a, b, w)
                })
                .collect()
        })
        .collect();
    ColumnSet::new(out)
}

fn pixel_or_transparent(column: &PixelColumn, row: usize) -> Rgba {
    column.get(row).copied().unwrap_or(Rgba::TRANSPARENT)
}

fn lerp_rgba(a: Rgba, b: Rgba, w: f64) -> Rgba {
    let lerp = |x: f64, y: f64| x * (1.0 - w) + y * w;
    Rgba {
        r: lerp(a.r, b.r),
        g: lerp(a.g, b.g),
        b: lerp(a.b, b.b),
        a: lerp(a.a, b.a),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/resample.rs"]
mod tests;
