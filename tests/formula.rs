use std::f64::consts::PI;

use sinescope::{format_equation, SineParams};

fn params(a: f64, omega: f64, phi: f64, b: f64) -> SineParams {
    SineParams { a, omega, phi, b }
}

#[test]
fn defaults_render_minimal_form() {
    assert_eq!(format_equation(&SineParams::default()), "y = 1.0 sin(1.0x)");
}

#[test]
fn zero_phase_and_offset_terms_are_omitted() {
    let s = format_equation(&params(2.0, 3.0, 0.0, 0.0));
    assert_eq!(s, "y = 2.0 sin(3.0x)");
    assert!(!s.contains('π'));
}

#[test]
fn positive_phase_and_negative_offset() {
    let s = format_equation(&params(2.0, 1.0, PI, -3.0));
    assert!(s.contains("+ 1.0π"), "got: {}", s);
    assert!(s.contains("- 3.0"), "got: {}", s);
    assert_eq!(s, "y = 2.0 sin(1.0x + 1.0π) - 3.0");
}

#[test]
fn negative_phase_renders_with_minus_sign() {
    let s = format_equation(&params(1.0, 2.0, -PI / 2.0, 0.0));
    assert_eq!(s, "y = 1.0 sin(2.0x - 0.5π)");
}

#[test]
fn positive_offset_renders_with_plus_sign() {
    let s = format_equation(&params(1.0, 1.0, 0.0, 2.0));
    assert_eq!(s, "y = 1.0 sin(1.0x) + 2.0");
}

#[test]
fn small_but_nonzero_terms_are_kept() {
    // Omission is for exact zeros only.
    let s = format_equation(&params(1.0, 1.0, 0.01, 0.04));
    assert!(s.contains('π'), "got: {}", s);
    assert!(s.contains("+ 0.0"), "got: {}", s);
}

#[test]
fn negative_amplitude_is_shown_as_is() {
    let s = format_equation(&params(-1.5, 1.0, 0.0, 0.0));
    assert_eq!(s, "y = -1.5 sin(1.0x)");
}
