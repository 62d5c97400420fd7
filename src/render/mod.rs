//! Canvas rendering, split per concern:
//!
//! | Sub-module | Responsibility |
//! | ---------- | -------------- |
//! | [`grid`]   | Background grid, axes, and symbolic tick marks/labels |
//! | [`curve`]  | Reference curve, parametrized curve, center line, amplitude annotation |
//!
//! Each renderer separates a pure `*Layout::compute` step (geometry and
//! label strings, testable without a UI context) from a thin `paint` step
//! that emits egui shapes. Draw order is grid first, curve second, so the
//! curve always sits on top of the chrome.

pub mod curve;
pub mod grid;

pub use curve::{AmplitudeAnnotation, CurveLayout};
pub use grid::{GridLayout, TickMark};
