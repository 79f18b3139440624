/// Squared-distance threshold under which a vertex may be skipped.
///
/// Both forms resolve to the same `f32` threshold: `Flatness(f)` and
/// `PixelsSquared(f * f)` make identical skip decisions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tolerance {
    /// Maximum deviation in output units; squared before use.
    Flatness(f64),
    /// Already-squared deviation, used as is.
    PixelsSquared(f32),
}

impl Tolerance {
    /// Tolerance for a shape drawn at `scale` output pixels per shape unit,
    /// allowing `pixels` of on-screen deviation.
    ///
    /// The result is measured in shape units, so it grows as the view zooms
    /// out and more detail can be dropped.
    ///
    /// A non-positive or NaN `pixels` disables skipping. Otherwise a
    /// non-positive or NaN `scale` (the shape shrinks to nothing on screen)
    /// gives an infinite tolerance, which keeps only ring starts and ends.
    #[must_use]
    pub fn from_pixels(pixels: f64, scale: f64) -> Self {
        if pixels.is_nan() || pixels <= 0.0 {
            Self::Flatness(0.0)
        } else if scale.is_nan() || scale <= 0.0 {
            Self::Flatness(f64::INFINITY)
        } else {
            Self::Flatness(pixels / scale)
        }
    }

    /// The squared threshold compared against vertex distances.
    #[must_use]
    pub fn threshold(self) -> f32 {
        match self {
            #[allow(clippy::cast_possible_truncation)]
            Self::Flatness(flatness) => (flatness * flatness) as f32,
            Self::PixelsSquared(pixelsq) => pixelsq,
        }
    }
}

/// Per-frame rendering settings.
#[derive(Debug, Clone, Copy)]
pub struct RenderParams {
    /// Output pixels per shape unit (the zoom level).
    pub scale: f64,
    /// Allowed on-screen deviation, in pixels.
    pub pixel_tolerance: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            scale: 1.0,
            pixel_tolerance: 1.0,
        }
    }
}

impl RenderParams {
    /// Tolerance in shape units for these settings.
    #[must_use]
    pub fn tolerance(&self) -> Tolerance {
        Tolerance::from_pixels(self.pixel_tolerance, self.scale)
    }
}
