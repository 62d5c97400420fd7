//! Color definitions for the SineScope canvas.
//!
//! A single small palette struct rather than a scheme registry: the view
//! has one background and a handful of stroke/label colors.

use egui::Color32;

/// Colors used by the grid and curve painters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveTheme {
    /// Canvas fill behind everything.
    pub background: Color32,
    /// Faint background gridlines.
    pub grid: Color32,
    /// Bold X/Y axis strokes.
    pub axis: Color32,
    /// Tick marks and their labels.
    pub tick_label: Color32,
    /// The parametrized curve.
    pub curve: Color32,
    /// The fixed `y = sin(x)` reference curve.
    pub reference: Color32,
    /// The dashed center line at `y = B`.
    pub center_line: Color32,
    /// The amplitude annotation segment and label.
    pub annotation: Color32,
}

impl Default for WaveTheme {
    /// The dark palette: sky-blue curve on near-black, white-alpha chrome.
    fn default() -> Self {
        Self {
            background: Color32::from_rgb(15, 23, 42),
            grid: Color32::from_white_alpha(38),
            axis: Color32::from_white_alpha(153),
            tick_label: Color32::from_white_alpha(204),
            curve: Color32::from_rgb(56, 189, 248),
            reference: Color32::from_rgb(148, 163, 184),
            center_line: Color32::from_white_alpha(102),
            annotation: Color32::from_white_alpha(204),
        }
    }
}

impl WaveTheme {
    /// Light alternative for bright host UIs.
    pub fn light() -> Self {
        Self {
            background: Color32::from_rgb(248, 250, 252),
            grid: Color32::from_black_alpha(25),
            axis: Color32::from_black_alpha(140),
            tick_label: Color32::from_black_alpha(200),
            curve: Color32::from_rgb(2, 132, 199),
            reference: Color32::from_rgb(100, 116, 139),
            center_line: Color32::from_black_alpha(90),
            annotation: Color32::from_black_alpha(200),
        }
    }
}
