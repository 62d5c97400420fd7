//! Top-level entry points for running SineScope as a native window.

use eframe::egui;

use crate::config::SineScopeConfig;
use crate::controllers::ParamsController;

use super::SineScopeApp;

/// Launch SineScope in a native window.
///
/// Blocks until the window is closed. The animation loop never terminates
/// on its own; teardown is simply the window closing.
pub fn run_sinescope(config: SineScopeConfig) -> eframe::Result<()> {
    run_impl(config, None)
}

/// Launch SineScope with an external [`ParamsController`].
///
/// Clone the controller before calling; the retained clone can then drive
/// the parameters from any thread while the UI runs.
pub fn run_sinescope_with_controller(
    config: SineScopeConfig,
    controller: ParamsController,
) -> eframe::Result<()> {
    run_impl(config, Some(controller))
}

fn run_impl(mut config: SineScopeConfig, controller: Option<ParamsController>) -> eframe::Result<()> {
    let title = config.title.clone();
    let mut opts = config
        .native_options
        .take()
        .unwrap_or_default();

    // Default window size when the config does not provide one.
    if opts.viewport.inner_size.is_none() {
        opts.viewport = opts
            .viewport
            .clone()
            .with_inner_size(egui::vec2(1200.0, 800.0));
    }

    let app = match controller {
        Some(ctrl) => SineScopeApp::with_controller(&config, ctrl),
        None => SineScopeApp::new(&config),
    };

    eframe::run_native(
        &title,
        opts,
        Box::new(|cc| {
            // Install Phosphor icon font before creating the app.
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(app))
        }),
    )
}
