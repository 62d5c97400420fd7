//! The parameter control panel: sliders, reset, formula readout, and the
//! per-parameter observation note.

use std::f64::consts::PI;

use eframe::egui;
use egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE;

use crate::formula::format_equation;
use crate::params::ParamField;

use super::SineScopeApp;

/// Slider ranges, in the unit each control exposes (phase in multiples of π).
const AMPLITUDE_RANGE: std::ops::RangeInclusive<f64> = -3.0..=3.0;
const FREQUENCY_RANGE: std::ops::RangeInclusive<f64> = 0.0..=5.0;
const PHASE_PI_RANGE: std::ops::RangeInclusive<f64> = -2.0..=2.0;
const OFFSET_RANGE: std::ops::RangeInclusive<f64> = -2.0..=2.0;

impl SineScopeApp {
    /// Render the side panel. Sliders are bound to the live state, so a
    /// reset (from the button or a controller) echoes straight back into
    /// the displayed positions.
    pub(super) fn controls_ui(&mut self, ui: &mut egui::Ui) {
        if let Some(headline) = self.headline.clone() {
            ui.heading(headline);
            ui.separator();
        }

        for field in ParamField::all() {
            self.param_slider(ui, field);
        }

        ui.separator();
        if ui
            .button(format!("{ARROW_COUNTER_CLOCKWISE} Reset"))
            .clicked()
        {
            self.params.reset();
            self.last_changed = None;
        }

        if self.features.formula {
            ui.separator();
            ui.label(
                egui::RichText::new(format_equation(&self.params))
                    .monospace()
                    .strong(),
            );
        }

        if self.features.observations {
            ui.separator();
            let note = match self.last_changed {
                Some(field) => field.observation_note(),
                None => "Adjust a slider to observe how the curve changes.",
            };
            ui.label(egui::RichText::new(note).weak());
        }
    }

    /// One labeled slider. The phase control exposes multiples of π and
    /// converts to radians at this boundary; state stays in radians.
    fn param_slider(&mut self, ui: &mut egui::Ui, field: ParamField) {
        let (mut value, range) = match field {
            ParamField::Amplitude => (self.params.a, AMPLITUDE_RANGE),
            ParamField::Frequency => (self.params.omega, FREQUENCY_RANGE),
            ParamField::Phase => (self.params.phi / PI, PHASE_PI_RANGE),
            ParamField::Offset => (self.params.b, OFFSET_RANGE),
        };
        let response = ui.add(
            egui::Slider::new(&mut value, range)
                .text(field.label())
                .fixed_decimals(1),
        );
        if response.changed() {
            let stored = if field == ParamField::Phase {
                value * PI
            } else {
                value
            };
            if self.params.update(field, stored) {
                self.last_changed = Some(field);
            }
        }
    }
}
