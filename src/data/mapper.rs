//! Pixel ↔ grid coordinate mapping and the scale state it is parameterized by.
//!
//! Pixel space has its origin at the surface's top-left corner with y growing
//! downwards. Grid space is centred on the snapped axis origin with y growing
//! upwards, and one grid unit spans `pixels_per_unit` pixels.

/// Scale used at startup and restored by the reset-scale action.
pub const DEFAULT_SCALE: f64 = 20.0;
/// Smallest allowed number of pixels per grid unit.
pub const MIN_SCALE: f64 = 8.0;
/// Largest allowed number of pixels per grid unit.
pub const MAX_SCALE: f64 = 70.0;
/// Scales up to (and including) this value are drawn with a thin stroke.
pub const THIN_STROKE_MAX_SCALE: f64 = 15.0;

const THIN_STROKE_WIDTH: u32 = 1;
const THICK_STROKE_WIDTH: u32 = 4;

/// A point in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridPoint {
    pub x: f64,
    pub y: f64,
}

impl GridPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A position in pixel space, relative to the surface's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelPos {
    pub x: f64,
    pub y: f64,
}

impl PixelPos {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Current zoom level together with the pixel position of both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleState {
    /// Pixels per grid unit; always within `[MIN_SCALE, MAX_SCALE]`.
    pub pixels_per_unit: f64,
    /// Pixel x of the vertical axis.
    pub axis_origin_x: f64,
    /// Pixel y of the horizontal axis.
    pub axis_origin_y: f64,
    /// Line width used for every stroke drawn at this scale.
    pub stroke_width: u32,
}

impl ScaleState {
    /// Build a state for `scale` (clamped) with the given axis origins.
    pub fn new(scale: f64, axis_origin_x: f64, axis_origin_y: f64) -> Self {
        let pixels_per_unit = Self::clamp_scale(scale);
        Self {
            pixels_per_unit,
            axis_origin_x,
            axis_origin_y,
            stroke_width: Self::stroke_width_for(pixels_per_unit),
        }
    }

    /// Clamp a requested scale into `[MIN_SCALE, MAX_SCALE]`.
    ///
    /// A NaN request resolves to `MIN_SCALE`.
    pub fn clamp_scale(scale: f64) -> f64 {
        scale.max(MIN_SCALE).min(MAX_SCALE)
    }

    pub fn stroke_width_for(scale: f64) -> u32 {
        if scale <= THIN_STROKE_MAX_SCALE {
            THIN_STROKE_WIDTH
        } else {
            THICK_STROKE_WIDTH
        }
    }

    pub fn mapper(&self) -> CoordinateMapper {
        CoordinateMapper {
            scale: self.pixels_per_unit,
            origin_x: self.axis_origin_x,
            origin_y: self.axis_origin_y,
        }
    }
}

/// Stateless transform between pixel space and grid space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    scale: f64,
    origin_x: f64,
    origin_y: f64,
}

impl CoordinateMapper {
    pub fn new(scale: f64, origin_x: f64, origin_y: f64) -> Self {
        Self {
            scale,
            origin_x,
            origin_y,
        }
    }

    pub fn to_grid(&self, pixel: PixelPos) -> GridPoint {
        GridPoint {
            x: (pixel.x - self.origin_x) / self.scale,
            y: (self.origin_y - pixel.y) / self.scale,
        }
    }

    pub fn to_pixel(&self, point: GridPoint) -> PixelPos {
        PixelPos {
            x: self.scale * point.x + self.origin_x,
            y: self.origin_y - self.scale * point.y,
        }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }
}
