//! The reference curve, the parametrized curve, its center line, and the
//! amplitude annotation.
//!
//! Both curves are sampled at one plot-x per integer pixel column and drawn
//! as connected polylines, so the sampling resolution follows the canvas
//! width rather than any fixed sample count.

use std::f64::consts::FRAC_PI_2;

use egui::{pos2, Align2, FontId, Painter, Pos2, Shape, Stroke, Vec2};

use crate::config::FeatureFlags;
use crate::params::SineParams;
use crate::theme::WaveTheme;
use crate::viewport::Viewport;

/// Amplitudes below this are not annotated; the marker segment would be
/// visually meaningless.
pub const MIN_ANNOTATED_AMPLITUDE: f64 = 0.1;

/// The vertical amplitude marker drawn at the nearest visible peak.
#[derive(Debug, Clone, PartialEq)]
pub struct AmplitudeAnnotation {
    /// Pixel-space X of the peak.
    pub x: f64,
    /// Pixel-space Y of the center line (`y = B`), the segment's base.
    pub base_y: f64,
    /// Pixel-space Y of the peak (`y = A + B`), the segment's tip.
    pub top_y: f64,
    /// Readout text, e.g. `"A = 2.0"`.
    pub label: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// CurveLayout
// ─────────────────────────────────────────────────────────────────────────────

/// Geometry of the curve pass, computed without touching the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveLayout {
    /// Polyline of the fixed `y = sin(x)` reference curve, one point per
    /// pixel column.
    pub reference: Vec<Pos2>,
    /// Polyline of `y = A·sin(ω·x + φ) + B`, one point per pixel column.
    pub curve: Vec<Pos2>,
    /// Pixel-space Y of the curve's own axis of oscillation (`y = B`).
    pub center_line_y: f64,
    /// Amplitude marker, when the peak is visible and well-defined.
    pub annotation: Option<AmplitudeAnnotation>,
    /// Canvas size the layout was computed for.
    pub size: (f64, f64),
}

impl CurveLayout {
    /// Sample both curves across the visible width and locate the peak
    /// marker for the given parameter snapshot.
    pub fn compute(params: &SineParams, viewport: &Viewport) -> Self {
        let columns = viewport.width.floor().max(0.0) as usize;
        let mut reference = Vec::with_capacity(columns);
        let mut curve = Vec::with_capacity(columns);

        for px in 0..columns {
            let x = viewport.to_plot_x(px as f64);
            let (rx, ry) = viewport.to_pixel(x, x.sin());
            reference.push(pos2(rx as f32, ry as f32));
            let (cx, cy) = viewport.to_pixel(x, params.eval(x));
            curve.push(pos2(cx as f32, cy as f32));
        }

        Self {
            reference,
            curve,
            center_line_y: viewport.to_pixel(0.0, params.b).1,
            annotation: Self::annotation(params, viewport),
            size: (viewport.width, viewport.height),
        }
    }

    /// Locate the amplitude marker at the peak nearest the origin.
    ///
    /// Skipped when `ω = 0` (the peak location `(π/2 − φ)/ω` is undefined),
    /// when `|A|` is effectively zero, or when the peak falls outside the
    /// visible width.
    fn annotation(params: &SineParams, viewport: &Viewport) -> Option<AmplitudeAnnotation> {
        if params.omega == 0.0 || params.a.abs() < MIN_ANNOTATED_AMPLITUDE {
            return None;
        }
        let x_peak = (FRAC_PI_2 - params.phi) / params.omega;
        let (px, top_y) = viewport.to_pixel(x_peak, params.a + params.b);
        if px < 0.0 || px >= viewport.width {
            return None;
        }
        Some(AmplitudeAnnotation {
            x: px,
            base_y: viewport.to_pixel(0.0, params.b).1,
            top_y,
            label: format!("A = {:.1}", params.a),
        })
    }

    /// Paint the layout. `offset` is the canvas rect's top-left corner in
    /// screen coordinates. Draw order: reference curve, center line, main
    /// curve, annotation.
    pub fn paint(
        &self,
        painter: &Painter,
        offset: Vec2,
        theme: &WaveTheme,
        features: &FeatureFlags,
    ) {
        let shift = |points: &[Pos2]| points.iter().map(|p| *p + offset).collect::<Vec<_>>();

        if features.reference_curve && self.reference.len() >= 2 {
            painter.extend(Shape::dashed_line(
                &shift(&self.reference),
                Stroke::new(1.5, theme.reference),
                6.0,
                4.0,
            ));
        }

        if features.center_line {
            let y = self.center_line_y as f32 + offset.y;
            painter.extend(Shape::dashed_line(
                &[
                    pos2(offset.x, y),
                    pos2(offset.x + self.size.0 as f32, y),
                ],
                Stroke::new(1.0, theme.center_line),
                5.0,
                5.0,
            ));
        }

        if self.curve.len() >= 2 {
            painter.add(Shape::line(
                shift(&self.curve),
                Stroke::new(2.5, theme.curve),
            ));
        }

        if features.amplitude_annotation {
            if let Some(marker) = &self.annotation {
                let x = marker.x as f32 + offset.x;
                let base = pos2(x, marker.base_y as f32 + offset.y);
                let top = pos2(x, marker.top_y as f32 + offset.y);
                painter.line_segment([base, top], Stroke::new(1.0, theme.annotation));
                painter.text(
                    pos2(x + 5.0, (base.y + top.y) / 2.0),
                    Align2::LEFT_CENTER,
                    &marker.label,
                    FontId::monospace(12.0),
                    theme.annotation,
                );
            }
        }
    }
}
