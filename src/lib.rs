//! SineScope crate root: re-exports and module wiring.
//!
//! This crate provides an interactive, continuously-animated view of the
//! parametric sinusoid `y = A·sin(ω·x + φ) + B`, built on egui/eframe.
//!
//! The implementation is split into cohesive modules:
//! - `params`: the four-parameter state and its keyed-update contract
//! - `viewport`: pixel geometry and the plot-space ↔ pixel-space mapping
//! - `pi_ticks`: symbolic π/2 tick labels for the X axis
//! - `formula`: the displayed equation string
//! - `render`: grid/axes and curve layout + painting
//! - `theme` / `config`: appearance and feature toggles
//! - `controllers`: programmatic parameter control from non-UI code
//! - `app`: the eframe application shell and `run_sinescope` entry point

pub mod app;
pub mod config;
pub mod controllers;
pub mod formula;
pub mod params;
pub mod pi_ticks;
pub mod render;
pub mod theme;
pub mod viewport;

// Public re-exports for a compact external API
pub use app::{run_sinescope, run_sinescope_with_controller, SineScopeApp};
pub use config::{FeatureFlags, SineScopeConfig};
pub use controllers::ParamsController;
pub use formula::format_equation;
pub use params::{ParamField, SineParams};
pub use theme::WaveTheme;
pub use viewport::{Viewport, PIXELS_PER_UNIT};
