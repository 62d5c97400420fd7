//! Per-frame update logic for [`SineScopeApp`].
//!
//! Each frame: drain external controller requests, render the controls
//! side panel, then draw the canvas against a single parameter snapshot,
//! and finally schedule the next repaint unconditionally. There is no
//! dirty-flag optimization on purpose — draw cost is proportional to the
//! canvas width whether or not anything changed, and the perpetual poll
//! keeps the view consistent under continuous external mutation.

use std::time::Duration;

use eframe::egui;

use crate::render::{CurveLayout, GridLayout};
use crate::viewport::Viewport;

use super::SineScopeApp;

impl eframe::App for SineScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_controller();

        if self.features.controls {
            egui::SidePanel::left("sinescope_controls")
                .default_width(280.0)
                .show(ctx, |ui| self.controls_ui(ui));
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| self.canvas_ui(ui));

        ctx.request_repaint_after(Duration::from_millis(16));
    }
}

impl SineScopeApp {
    /// Draw the plot canvas into the available rect.
    ///
    /// A zero-size rect (transient before first layout) draws nothing this
    /// frame; the unconditional repaint tick retries once the container is
    /// measured.
    pub(super) fn canvas_ui(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size_before_wrap();
        if size.x < 1.0 || size.y < 1.0 {
            return;
        }
        let (rect, _response) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, egui::CornerRadius::ZERO, self.theme.background);

        let viewport = Viewport::from_container(
            rect.width() as f64,
            rect.height() as f64,
            ui.ctx().pixels_per_point() as f64,
        );
        // One snapshot per frame: mid-draw mutations affect the next frame.
        let params = self.params;
        let offset = rect.min.to_vec2();

        GridLayout::compute(&viewport).paint(&painter, offset, &self.theme, &self.features);
        CurveLayout::compute(&params, &viewport).paint(&painter, offset, &self.theme, &self.features);
    }
}
