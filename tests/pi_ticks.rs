use sinescope::pi_ticks::{half_pi_label, tick_pixel_x, visible_tick_indices, TICK_STEP};
use sinescope::viewport::Viewport;

#[test]
fn origin_tick_has_no_label() {
    assert_eq!(half_pi_label(0), None);
}

#[test]
fn odd_indices_are_half_pi_fractions() {
    assert_eq!(half_pi_label(1).unwrap(), "π/2");
    assert_eq!(half_pi_label(3).unwrap(), "3π/2");
    assert_eq!(half_pi_label(5).unwrap(), "5π/2");
    assert_eq!(half_pi_label(-1).unwrap(), "-π/2");
    assert_eq!(half_pi_label(-3).unwrap(), "-3π/2");
}

#[test]
fn even_indices_are_whole_pi_multiples() {
    assert_eq!(half_pi_label(2).unwrap(), "π");
    assert_eq!(half_pi_label(4).unwrap(), "2π");
    assert_eq!(half_pi_label(6).unwrap(), "3π");
    assert_eq!(half_pi_label(-2).unwrap(), "-π");
    assert_eq!(half_pi_label(-4).unwrap(), "-2π");
}

#[test]
fn unit_coefficient_is_omitted() {
    // Never "1π" or "1π/2".
    for i in [-2i64, -1, 1, 2] {
        let label = half_pi_label(i).unwrap();
        assert!(
            !label.contains('1'),
            "coefficient 1 must be omitted, got: {}",
            label
        );
    }
}

#[test]
fn visible_indices_stay_inside_the_canvas() {
    let vp = Viewport::from_container(800.0, 600.0, 1.0);
    let indices = visible_tick_indices(&vp);
    // Origin at x = 200, scale 100: π/2 ticks land every ~157 px.
    assert_eq!(indices, -1..=3);
    for i in indices {
        let x = tick_pixel_x(&vp, i);
        assert!(
            (0.0..=vp.width).contains(&x),
            "tick {} at {} px escapes [0, {}]",
            i,
            x,
            vp.width
        );
    }
}

#[test]
fn tick_positions_follow_the_plot_scale() {
    let vp = Viewport::from_container(800.0, 600.0, 1.0);
    let x = tick_pixel_x(&vp, 2);
    let expected = vp.origin.0 + 2.0 * TICK_STEP * vp.scale;
    assert!((x - expected).abs() < 1e-9);
}

#[test]
fn narrow_canvas_can_have_no_labeled_ticks() {
    // 100 px wide: origin at 25, only the i = 0 tick fits.
    let vp = Viewport::from_container(100.0, 600.0, 1.0);
    let labeled: Vec<_> = visible_tick_indices(&vp)
        .filter_map(half_pi_label)
        .collect();
    assert!(labeled.is_empty(), "unexpected labels: {:?}", labeled);
}
