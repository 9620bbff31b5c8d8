// File: crates/chart-core/tests/dimensions.rs
// Purpose: Chart size and bounded area follow the viewport width exactly.

use chart_core::types::Insets;
use chart_core::{ChartOptions, Dimensions};

#[test]
fn bounded_area_subtracts_margins() {
    for w in [320.0, 1000.0, 1366.0, 1920.0] {
        let d = Dimensions::from_viewport(w, 500.0, Insets::default());
        assert_eq!(d.width, 0.9 * w);
        assert_eq!(d.height, 500.0);
        assert_eq!(d.bounded_width, 0.9 * w - 105.0);
        assert_eq!(d.bounded_height, 425.0);
    }
}

#[test]
fn default_margins() {
    assert_eq!(Insets::default(), Insets::new(90, 15, 15, 60));
    assert_eq!(Insets::default().hsum(), 105);
    assert_eq!(Insets::default().vsum(), 75);
}

#[test]
fn options_drive_dimensions() {
    let opts = ChartOptions { viewport_width: 1000.0, ..ChartOptions::default() };
    let d = opts.dimensions();
    assert_eq!(d.width, 900.0);
    assert_eq!(d.bounded_width, 795.0);
    assert_eq!(d.bounded_height, 425.0);
    assert_eq!(d, Dimensions::from_viewport(1000.0, 500.0, Insets::default()));
}

#[test]
fn custom_margins_and_height() {
    let opts = ChartOptions {
        viewport_width: 800.0,
        height: 300.0,
        margin: Insets::new(40, 10, 20, 30),
        ..ChartOptions::default()
    };
    let d = opts.dimensions();
    assert_eq!(d.width, 720.0);
    assert_eq!(d.bounded_width, 670.0);
    assert_eq!(d.bounded_height, 250.0);
}
