//! Viewport geometry and the plot-space ↔ pixel-space coordinate mapping.
//!
//! Plot-space is the abstract sinusoid coordinate system (Y up); pixel-space
//! is the canvas raster (Y down). The mapping is a pure function of the
//! viewport alone — it never depends on the curve parameters — and does no
//! rounding; snapping to device pixels is the painter's concern.

/// Fixed plot scale: one plot unit spans this many logical pixels.
///
/// Deliberately a constant rather than derived from the viewport size:
/// resizing pans the view (the origin moves), it never zooms.
pub const PIXELS_PER_UNIT: f64 = 100.0;

/// Logical fallback size used when the container reports a zero or
/// unmeasured dimension, so the renderer never divides by zero or draws a
/// degenerate frame.
pub const FALLBACK_SIZE: (f64, f64) = (800.0, 600.0);

// ─────────────────────────────────────────────────────────────────────────────
// Viewport
// ─────────────────────────────────────────────────────────────────────────────

/// Pixel geometry of the canvas: logical dimensions, device pixel ratio,
/// plot scale, and the pixel-space location of the plot origin.
///
/// Rebuilt from the measured container every frame, so a resize is atomic
/// relative to the next frame's read. Invariant: `scale > 0` and both
/// dimensions are positive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Canvas width in logical pixels.
    pub width: f64,
    /// Canvas height in logical pixels.
    pub height: f64,
    /// Backing-buffer pixels per logical pixel.
    pub device_pixel_ratio: f64,
    /// Pixels per plot unit. Always [`PIXELS_PER_UNIT`].
    pub scale: f64,
    /// Pixel-space position of plot-space (0, 0): quarter width, half
    /// height. Off-center on purpose — the positive-x side, where the wave
    /// is most observed, gets three quarters of the horizontal room.
    pub origin: (f64, f64),
}

impl Viewport {
    /// Build a viewport from measured container dimensions (logical pixels)
    /// and a device pixel ratio.
    ///
    /// Zero, negative, or non-finite dimensions fall back to
    /// [`FALLBACK_SIZE`]; a non-positive or non-finite `dpr` falls back
    /// to 1.
    ///
    /// ```
    /// # use sinescope::viewport::Viewport;
    /// let vp = Viewport::from_container(0.0, 0.0, 2.0);
    /// assert_eq!((vp.width, vp.height), (800.0, 600.0));
    /// assert_eq!(vp.origin, (200.0, 300.0));
    /// ```
    pub fn from_container(width: f64, height: f64, device_pixel_ratio: f64) -> Self {
        let width = if width.is_finite() && width > 0.0 {
            width
        } else {
            FALLBACK_SIZE.0
        };
        let height = if height.is_finite() && height > 0.0 {
            height
        } else {
            FALLBACK_SIZE.1
        };
        let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Self {
            width,
            height,
            device_pixel_ratio: dpr,
            scale: PIXELS_PER_UNIT,
            origin: (width / 4.0, height / 2.0),
        }
    }

    /// Backing-buffer width in device pixels.
    pub fn pixel_width(&self) -> f64 {
        self.width * self.device_pixel_ratio
    }

    /// Backing-buffer height in device pixels.
    pub fn pixel_height(&self) -> f64 {
        self.height * self.device_pixel_ratio
    }

    // ── Coordinate mapping ───────────────────────────────────────────────────

    /// Map a plot-space point to pixel-space.
    ///
    /// Y is inverted: pixel rows grow downward while plot Y grows upward.
    pub fn to_pixel(&self, x_plot: f64, y_plot: f64) -> (f64, f64) {
        (
            self.origin.0 + x_plot * self.scale,
            self.origin.1 - y_plot * self.scale,
        )
    }

    /// Map a pixel column back to its plot-space X.
    ///
    /// Inverse of the X half of [`to_pixel`](Self::to_pixel); used when
    /// sampling the curve one plot-x per pixel column. No Y inverse exists —
    /// curve drawing only ever goes plot → pixel.
    pub fn to_plot_x(&self, px: f64) -> f64 {
        (px - self.origin.0) / self.scale
    }
}
