//! Runnable demo: the default SineScope window.

use sinescope::{run_sinescope, SineScopeConfig};

fn main() -> eframe::Result<()> {
    let config = SineScopeConfig {
        headline: Some("y = A sin(ωx + φ) + B".to_string()),
        ..SineScopeConfig::default()
    };
    run_sinescope(config)
}
