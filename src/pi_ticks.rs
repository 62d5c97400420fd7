//! Symbolic tick labels for the X axis at multiples of π/2.
//!
//! The axis is labeled in exact π fractions rather than decimals, so the
//! curve's landmarks (zero crossings, peaks of the unit sine) land on
//! labeled gridlines. Tick index `i` stands for the plot-space position
//! `i·π/2`.

use std::f64::consts::FRAC_PI_2;

use crate::viewport::Viewport;

/// Plot-space spacing between adjacent X ticks: π/2.
pub const TICK_STEP: f64 = FRAC_PI_2;

/// Render the symbolic label for tick index `i` (position `i·π/2`).
///
/// Returns `None` for `i = 0` — the origin is the axis crossing and gets no
/// label. The coefficient `1` is always omitted (`π`, not `1π`; `π/2`, not
/// `1π/2`).
///
/// ```
/// # use sinescope::pi_ticks::half_pi_label;
/// assert_eq!(half_pi_label(0), None);
/// assert_eq!(half_pi_label(1).unwrap(), "π/2");
/// assert_eq!(half_pi_label(2).unwrap(), "π");
/// assert_eq!(half_pi_label(3).unwrap(), "3π/2");
/// assert_eq!(half_pi_label(-2).unwrap(), "-π");
/// ```
pub fn half_pi_label(i: i64) -> Option<String> {
    if i == 0 {
        return None;
    }
    let sign = if i < 0 { "-" } else { "" };
    let mag = i.unsigned_abs();
    let label = if i % 2 == 0 {
        // Even index: a whole multiple of π.
        let coeff = mag / 2;
        if coeff == 1 {
            format!("{sign}π")
        } else {
            format!("{sign}{coeff}π")
        }
    } else if mag == 1 {
        format!("{sign}π/2")
    } else {
        format!("{sign}{mag}π/2")
    };
    Some(label)
}

/// Inclusive range of tick indices whose pixel position lies within
/// `[0, width]` of the given viewport.
///
/// Ticks outside the canvas are skipped entirely — no wraparound and no
/// partially-clipped marks.
pub fn visible_tick_indices(viewport: &Viewport) -> std::ops::RangeInclusive<i64> {
    let lo = (viewport.to_plot_x(0.0) / TICK_STEP).ceil() as i64;
    let hi = (viewport.to_plot_x(viewport.width) / TICK_STEP).floor() as i64;
    lo..=hi
}

/// Pixel-space X of tick index `i`.
pub fn tick_pixel_x(viewport: &Viewport, i: i64) -> f64 {
    viewport.to_pixel(i as f64 * TICK_STEP, 0.0).0
}
