pub use kurbo::{Point, Rect, Vec2};

/// One RGBA pixel with float channels in `0.0..=255.0`.
///
/// Channels stay fractional through the whole resampling pipeline and are
/// rounded to integers only when written into a [`Raster`], so chained
/// resampling does not accumulate rounding error.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: f64,
    /// Green channel.
    pub g: f64,
    /// Blue channel.
    pub b: f64,
    /// Alpha channel.
    pub a: f64,
}

impl Rgba {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
        a: 0.0,
    };

    /// Construct from integer RGBA8 channels.
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self {
            r: f64::from(r),
            g: f64::from(g),
            b: f64::from(b),
            a: f64::from(a),
        }
    }

    /// Round and clamp back to integer RGBA8 channels.
    pub fn to_rgba8(self) -> [u8; 4] {
        fn q(v: f64) -> u8 {
            v.round().clamp(0.0, 255.0) as u8
        }
        [q(self.r), q(self.g), q(self.b), q(self.a)]
    }

    /// Channels as a `[r, g, b, a]` array.
    pub fn channels(self) -> [f64; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Construct from a `[r, g, b, a]` array.
    pub fn from_channels(c: [f64; 4]) -> Self {
        Self {
            r: c[0],
            g: c[1],
            b: c[2],
            a: c[3],
        }
    }
}

/// One perpendicular cross-section of a texture: a fixed-length run of pixels
/// sampled along a path normal.
pub type PixelColumn = Vec<Rgba>;

#[derive(Clone, Debug, Default, PartialEq)]
/// The full captured texture for one source path: an ordered sequence of
/// [`PixelColumn`]s, one per arc-length step.
///
/// Created once per capture, consumed read-only by every later synthesis
/// call; never mutated in place.
pub struct ColumnSet {
    columns: Vec<PixelColumn>,
}

impl ColumnSet {
    /// Wrap an ordered sequence of columns.
    pub fn new(columns: Vec<PixelColumn>) -> Self {
        Self { columns }
    }

    /// Number of columns (arc-length steps captured).
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// `true` when no columns were captured.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Height of the columns, taken from the first one.
    ///
    /// All columns in one set share a height by construction.
    pub fn column_height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Column at `idx`, if present.
    pub fn get(&self, idx: usize) -> Option<&PixelColumn> {
        self.columns.get(idx)
    }

    /// All columns in capture order.
    pub fn columns(&self) -> &[PixelColumn] {
        &self.columns
    }
}

#[derive(Clone, Debug, PartialEq)]
/// A plain RGBA8 raster: row-major pixel bytes with straight (non-premultiplied)
/// alpha.
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Raster {
    /// Create a fully transparent raster.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize * 4],
        }
    }

    /// Wrap an existing RGBA8 buffer, validating its length.
    pub fn from_rgba8(
        width: u32,
        height: u32,
        pixels: Vec<u8>,
    ) -> crate::foundation::error::BrushResult<Self> {
        let expected = width as usize * height as usize * 4;
        if pixels.len() != expected {
            return Err(crate::foundation::error::BrushError::validation(format!(
                "raster buffer length {} does not match {width}x{height} RGBA8 ({expected})",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major RGBA8 bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Read the pixel at `(x, y)`.
    ///
    /// Coordinates outside the raster read as transparent black rather than
    /// failing, so a long walk over one bad coordinate keeps going.
    pub fn pixel_at(&self, x: i64, y: i64) -> Rgba {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return Rgba::TRANSPARENT;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        Rgba::from_rgba8(
            self.pixels[idx],
            self.pixels[idx + 1],
            self.pixels[idx + 2],
            self.pixels[idx + 3],
        )
    }

    /// Overwrite the pixel at `(x, y)`, rounding channels to RGBA8.
    ///
    /// No blending: the target pixel is replaced. Out-of-bounds writes are
    /// silently dropped.
    pub fn put_pixel(&mut self, x: i64, y: i64, color: Rgba) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_rgba8());
    }

    /// Reset every pixel to transparent black.
    pub fn clear(&mut self) {
        self.pixels.fill(0);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Axis-aligned bounding box in render-space units.
///
/// Recomputed per synthesis call, never cached across shape changes.
pub struct BoundingBox {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}
