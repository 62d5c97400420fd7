//! Background grid, axes, and X-axis tick marks with symbolic π labels.

use egui::{pos2, Align2, FontId, Painter, Stroke, Vec2};

use crate::config::FeatureFlags;
use crate::pi_ticks;
use crate::theme::WaveTheme;
use crate::viewport::Viewport;

/// Fixed logical-pixel spacing of the horizontal gridlines.
///
/// Vertical gridlines instead follow the π/2 tick grid so they coincide
/// with the X-axis labels.
pub const HORIZONTAL_GRID_STEP: f64 = 50.0;

/// Half-height of an X-axis tick mark, in logical pixels.
const TICK_HALF_LEN: f64 = 5.0;

/// One labeled tick mark on the X axis.
#[derive(Debug, Clone, PartialEq)]
pub struct TickMark {
    /// Pixel-space X of the mark.
    pub x: f64,
    /// Symbolic label, e.g. `"3π/2"`.
    pub label: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// GridLayout
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry of the grid pass, computed without touching the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct GridLayout {
    /// Pixel-space X of each vertical gridline (every visible π/2 multiple,
    /// the origin included).
    pub vertical_lines: Vec<f64>,
    /// Pixel-space Y of each horizontal gridline (fixed 50 px step, phased
    /// through the origin).
    pub horizontal_lines: Vec<f64>,
    /// Y of the X axis (the origin row).
    pub x_axis_y: f64,
    /// X of the Y axis (the origin column).
    pub y_axis_x: f64,
    /// Labeled tick marks along X. The origin (`i = 0`) carries no tick.
    pub ticks: Vec<TickMark>,
    /// Canvas size the layout was computed for.
    pub size: (f64, f64),
}

impl GridLayout {
    /// Compute the grid geometry for `viewport`.
    pub fn compute(viewport: &Viewport) -> Self {
        let indices = pi_ticks::visible_tick_indices(viewport);

        let vertical_lines = indices
            .clone()
            .map(|i| pi_ticks::tick_pixel_x(viewport, i))
            .collect();

        let mut horizontal_lines = Vec::new();
        let mut y = viewport.origin.1 % HORIZONTAL_GRID_STEP;
        while y < viewport.height {
            horizontal_lines.push(y);
            y += HORIZONTAL_GRID_STEP;
        }

        let ticks = indices
            .filter_map(|i| {
                let label = pi_ticks::half_pi_label(i)?;
                Some(TickMark {
                    x: pi_ticks::tick_pixel_x(viewport, i),
                    label,
                })
            })
            .collect();

        Self {
            vertical_lines,
            horizontal_lines,
            x_axis_y: viewport.origin.1,
            y_axis_x: viewport.origin.0,
            ticks,
            size: (viewport.width, viewport.height),
        }
    }

    /// Paint the layout. `offset` is the canvas rect's top-left corner in
    /// screen coordinates.
    pub fn paint(
        &self,
        painter: &Painter,
        offset: Vec2,
        theme: &WaveTheme,
        features: &FeatureFlags,
    ) {
        let (w, h) = self.size;
        let at = |x: f64, y: f64| pos2(x as f32, y as f32) + offset;

        if features.grid {
            let stroke = Stroke::new(1.0, theme.grid);
            for &x in &self.vertical_lines {
                painter.line_segment([at(x, 0.0), at(x, h)], stroke);
            }
            for &y in &self.horizontal_lines {
                painter.line_segment([at(0.0, y), at(w, y)], stroke);
            }
        }

        // Axes sit on top of the grid.
        let axis_stroke = Stroke::new(2.0, theme.axis);
        painter.line_segment([at(0.0, self.x_axis_y), at(w, self.x_axis_y)], axis_stroke);
        painter.line_segment([at(self.y_axis_x, 0.0), at(self.y_axis_x, h)], axis_stroke);

        if features.tick_labels {
            let tick_stroke = Stroke::new(1.0, theme.tick_label);
            for tick in &self.ticks {
                painter.line_segment(
                    [
                        at(tick.x, self.x_axis_y - TICK_HALF_LEN),
                        at(tick.x, self.x_axis_y + TICK_HALF_LEN),
                    ],
                    tick_stroke,
                );
                painter.text(
                    at(tick.x, self.x_axis_y + TICK_HALF_LEN + 3.0),
                    Align2::CENTER_TOP,
                    &tick.label,
                    FontId::monospace(12.0),
                    theme.tick_label,
                );
            }
        }
    }
}
