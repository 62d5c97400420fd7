//! Configuration for the SineScope application.

use crate::theme::WaveTheme;

// ─────────────────────────────────────────────────────────────────────────────
// Feature flags
// ─────────────────────────────────────────────────────────────────────────────

/// Toggle individual view features on or off.
///
/// All features default to `true`. Disabling any subset still animates the
/// parametrized curve itself — a partial UI degrades one visual feature at
/// a time, never the whole view.
#[derive(Clone, Copy, Debug)]
pub struct FeatureFlags {
    /// Faint background gridlines.
    pub grid: bool,
    /// Symbolic π/2 tick marks and labels on the X axis.
    pub tick_labels: bool,
    /// The fixed `y = sin(x)` reference curve.
    pub reference_curve: bool,
    /// Dashed center line at `y = B`.
    pub center_line: bool,
    /// Amplitude annotation at the nearest visible peak.
    pub amplitude_annotation: bool,
    /// The formatted equation readout.
    pub formula: bool,
    /// Per-parameter observation notes under the sliders.
    pub observations: bool,
    /// The whole controls side panel.
    pub controls: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            grid: true,
            tick_labels: true,
            reference_curve: true,
            center_line: true,
            amplitude_annotation: true,
            formula: true,
            observations: true,
            controls: true,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// SineScopeConfig
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level configuration for the SineScope view.
pub struct SineScopeConfig {
    /// Native window title.
    pub title: String,
    /// Optional headline rendered above the controls.
    pub headline: Option<String>,
    /// Toggle individual view features on/off.
    pub features: FeatureFlags,
    /// Canvas colors.
    pub theme: WaveTheme,
    /// Optional eframe native-window options.
    pub native_options: Option<eframe::NativeOptions>,
}

impl Default for SineScopeConfig {
    fn default() -> Self {
        Self {
            title: "SineScope".to_string(),
            headline: None,
            features: FeatureFlags::default(),
            theme: WaveTheme::default(),
            native_options: None,
        }
    }
}
