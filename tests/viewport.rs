use sinescope::viewport::{Viewport, FALLBACK_SIZE, PIXELS_PER_UNIT};

#[test]
fn origin_sits_at_quarter_width_half_height() {
    let vp = Viewport::from_container(1000.0, 400.0, 1.0);
    assert_eq!(vp.origin, (250.0, 200.0));
}

#[test]
fn scale_is_the_fixed_plot_constant() {
    for (w, h) in [(100.0, 100.0), (800.0, 600.0), (3840.0, 2160.0)] {
        let vp = Viewport::from_container(w, h, 2.0);
        assert_eq!(vp.scale, PIXELS_PER_UNIT);
        assert!(vp.scale > 0.0);
    }
}

#[test]
fn zero_size_container_falls_back_to_default() {
    let vp = Viewport::from_container(0.0, 0.0, 1.0);
    assert_eq!((vp.width, vp.height), FALLBACK_SIZE);
}

#[test]
fn invalid_dimensions_fall_back_per_axis() {
    let vp = Viewport::from_container(f64::NAN, 500.0, 1.0);
    assert_eq!((vp.width, vp.height), (FALLBACK_SIZE.0, 500.0));

    let vp = Viewport::from_container(-20.0, f64::INFINITY, 1.0);
    assert_eq!((vp.width, vp.height), FALLBACK_SIZE);
}

#[test]
fn invalid_dpr_falls_back_to_one() {
    for dpr in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let vp = Viewport::from_container(800.0, 600.0, dpr);
        assert_eq!(vp.device_pixel_ratio, 1.0, "dpr {} should fall back", dpr);
    }
}

#[test]
fn backing_buffer_scales_with_dpr() {
    let vp = Viewport::from_container(800.0, 600.0, 2.0);
    assert_eq!(vp.pixel_width(), 1600.0);
    assert_eq!(vp.pixel_height(), 1200.0);
}

#[test]
fn y_axis_is_inverted() {
    let vp = Viewport::from_container(800.0, 600.0, 1.0);
    let (_, py_up) = vp.to_pixel(0.0, 1.0);
    let (_, py_down) = vp.to_pixel(0.0, -1.0);
    // Plot Y up means pixel Y down.
    assert!(py_up < vp.origin.1 && vp.origin.1 < py_down);
    assert_eq!(py_up, vp.origin.1 - PIXELS_PER_UNIT);
}

#[test]
fn pixel_column_round_trips_through_plot_space() {
    let vp = Viewport::from_container(800.0, 600.0, 1.0);
    for px in 0..800 {
        let x_plot = vp.to_plot_x(px as f64);
        let (back, _) = vp.to_pixel(x_plot, x_plot.sin());
        assert!(
            (back - px as f64).abs() < 1e-9,
            "column {} came back as {}",
            px,
            back
        );
    }
}

#[test]
fn round_trip_holds_for_odd_viewports() {
    for (w, h, dpr) in [(333.0, 217.0, 1.25), (1.0, 1.0, 3.0), (2560.0, 160.0, 2.0)] {
        let vp = Viewport::from_container(w, h, dpr);
        for px in [0.0, w / 3.0, w - 1.0] {
            let back = vp.to_pixel(vp.to_plot_x(px), 0.0).0;
            assert!((back - px).abs() < 1e-9);
        }
    }
}
