//! Application shell for SineScope.
//!
//! Split into focused sub-modules:
//!
//! | Sub-module   | Responsibility |
//! | ------------ | -------------- |
//! | [`update`]   | Per-frame pass: controller drain, parameter snapshot, canvas drawing, repaint tick |
//! | [`controls`] | The parameter slider panel, reset, formula readout, observation note |
//! | [`run`]      | Top-level `run_sinescope()` entry points |

mod controls;
mod run;
mod update;

pub use run::{run_sinescope, run_sinescope_with_controller};

use crate::config::{FeatureFlags, SineScopeConfig};
use crate::controllers::{ParamRequest, ParamsController};
use crate::params::{ParamField, SineParams};
use crate::theme::WaveTheme;

/// The SineScope eframe application.
///
/// Owns the parameter state and the view configuration; all rendering state
/// (viewport, layouts) is rebuilt from the measured canvas every frame.
pub struct SineScopeApp {
    /// Current sinusoid parameters. Snapshotted once per frame.
    pub(crate) params: SineParams,
    /// Which parameter the user touched last; selects the observation note.
    pub(crate) last_changed: Option<ParamField>,
    /// View feature toggles.
    pub(crate) features: FeatureFlags,
    /// Canvas colors.
    pub(crate) theme: WaveTheme,
    /// Optional headline above the controls.
    pub(crate) headline: Option<String>,
    /// Optional external parameter controller, drained once per frame.
    pub(crate) controller: Option<ParamsController>,
}

impl SineScopeApp {
    /// Create an app from a configuration, without an external controller.
    pub fn new(config: &SineScopeConfig) -> Self {
        Self {
            params: SineParams::default(),
            last_changed: None,
            features: config.features,
            theme: config.theme,
            headline: config.headline.clone(),
            controller: None,
        }
    }

    /// Create an app that additionally drains `controller` each frame.
    pub fn with_controller(config: &SineScopeConfig, controller: ParamsController) -> Self {
        Self {
            controller: Some(controller),
            ..Self::new(config)
        }
    }

    /// Apply all pending controller requests, in order.
    ///
    /// Runs at the top of each frame, before the parameter snapshot, so a
    /// frame never renders a half-applied batch.
    pub(crate) fn apply_controller(&mut self) {
        let Some(ctrl) = &self.controller else {
            return;
        };
        for req in ctrl.drain() {
            match req {
                ParamRequest::Set(field, value) => {
                    if self.params.update(field, value) {
                        self.last_changed = Some(field);
                    }
                }
                ParamRequest::Reset => {
                    self.params.reset();
                    self.last_changed = None;
                }
            }
        }
    }
}
