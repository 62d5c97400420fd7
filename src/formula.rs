//! The displayed equation string for the current parameters.
//!
//! Renders `y = A sin(ωx + φ) + B` with all coefficients to one decimal
//! place, the phase shown as a coefficient of π, and sign terms omitted
//! entirely when the corresponding value is exactly zero — `y = 1.0 sin(1.0x)`
//! rather than `y = 1.0 sin(1.0x + 0.0π) + 0.0`.

use std::f64::consts::PI;

use crate::params::SineParams;

/// Format the equation for display.
///
/// ```
/// # use sinescope::{format_equation, SineParams};
/// assert_eq!(format_equation(&SineParams::default()), "y = 1.0 sin(1.0x)");
/// ```
pub fn format_equation(params: &SineParams) -> String {
    let mut out = format!("y = {:.1} sin({:.1}x", params.a, params.omega);

    // Phase as a coefficient of π; omitted when exactly zero, not merely small.
    if params.phi != 0.0 {
        let coeff = params.phi / PI;
        if coeff >= 0.0 {
            out.push_str(&format!(" + {:.1}π", coeff));
        } else {
            out.push_str(&format!(" - {:.1}π", coeff.abs()));
        }
    }
    out.push(')');

    if params.b != 0.0 {
        if params.b >= 0.0 {
            out.push_str(&format!(" + {:.1}", params.b));
        } else {
            out.push_str(&format!(" - {:.1}", params.b.abs()));
        }
    }
    out
}
