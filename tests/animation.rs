//! Drives the per-frame layout pipeline through an arbitrary interleaving of
//! parameter mutations, controller requests, and resizes — including the
//! degenerate sizes a real container reports before layout — and checks the
//! frame computation always succeeds.

use sinescope::controllers::{ParamRequest, ParamsController};
use sinescope::render::{CurveLayout, GridLayout};
use sinescope::viewport::Viewport;
use sinescope::{ParamField, SineParams};

/// Apply queued controller requests the way the app does at frame start.
fn apply(params: &mut SineParams, ctrl: &ParamsController) {
    for req in ctrl.drain() {
        match req {
            ParamRequest::Set(field, value) => {
                params.update(field, value);
            }
            ParamRequest::Reset => params.reset(),
        }
    }
}

#[test]
fn frames_survive_interleaved_mutations_and_resizes() {
    let mut params = SineParams::default();
    let ctrl = ParamsController::new();

    let sizes = [
        (800.0, 600.0),
        (0.0, 0.0),
        (1.0, 1.0),
        (f64::NAN, 300.0),
        (2560.0, 1440.0),
        (120.0, 0.0),
        (333.3, 217.9),
    ];
    let mutations: [(ParamField, f64); 7] = [
        (ParamField::Amplitude, 3.0),
        (ParamField::Frequency, 0.0),
        (ParamField::Phase, -7.5),
        (ParamField::Amplitude, f64::NAN),
        (ParamField::Offset, 2.0),
        (ParamField::Frequency, 4.9),
        (ParamField::Phase, f64::INFINITY),
    ];

    for frame in 0..256usize {
        // Mutations land between frames, like slider input would.
        let (field, value) = mutations[frame % mutations.len()];
        params.update(field, value);
        if frame % 11 == 0 {
            ctrl.set(field, value + 0.5);
        }
        if frame % 37 == 0 {
            ctrl.reset();
        }
        apply(&mut params, &ctrl);

        let (w, h) = sizes[frame % sizes.len()];
        let vp = Viewport::from_container(w, h, 1.0 + (frame % 3) as f64);

        // The whole frame computation: grid pass, then curve pass.
        let grid = GridLayout::compute(&vp);
        let curve = CurveLayout::compute(&params, &vp);

        assert!(vp.width > 0.0 && vp.height > 0.0);
        assert_eq!(curve.curve.len(), vp.width.floor() as usize);
        assert!(curve.curve.iter().all(|p| p.y.is_finite()));
        assert!(grid.ticks.iter().all(|t| !t.label.is_empty()));
    }
}

#[test]
fn controller_requests_cross_threads() {
    let ctrl = ParamsController::new();
    let remote = ctrl.clone();
    let handle = std::thread::spawn(move || {
        remote.set(ParamField::Amplitude, 2.0);
        remote.set_phase_pi_units(0.5);
        remote.reset();
        remote.set(ParamField::Offset, -1.0);
    });
    handle.join().unwrap();

    let mut params = SineParams::default();
    apply(&mut params, &ctrl);
    // Requests apply in order: the reset wipes the first two, the final
    // offset write survives.
    assert_eq!(params.a, 1.0);
    assert_eq!(params.phi, 0.0);
    assert_eq!(params.b, -1.0);

    // Drained queue stays empty.
    assert!(ctrl.drain().is_empty());
}

#[test]
fn phase_controller_converts_pi_units_at_the_boundary() {
    let ctrl = ParamsController::new();
    ctrl.set_phase_pi_units(1.0);
    let mut params = SineParams::default();
    apply(&mut params, &ctrl);
    assert!((params.phi - std::f64::consts::PI).abs() < 1e-12);
}
