// File: crates/chart-core/tests/axes.rs
// Purpose: Axis tick formatting, placement and hand-placed titles.

use chart_core::{ChartOptions, ChartRenderer, Orient, Point, Record, TickFormat};

fn dataset() -> Vec<Record> {
    (1994..=2015)
        .map(|y| {
            let minutes = 36 + (y - 1994) % 4;
            Record::new(y, format!("{minutes}:10"), "")
        })
        .collect()
}

#[test]
fn integer_format_has_no_separators() {
    assert_eq!(TickFormat::Integer.format(1998.0), "1998");
    assert_eq!(TickFormat::Integer.format(12345.0), "12345");
    assert_eq!(TickFormat::Integer.format(2003.6), "2004");
    assert_eq!(TickFormat::Integer.format(f64::NAN), "NaN");
}

#[test]
fn bottom_axis_ticks_are_years() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(dataset());
    let axis = &chart.scene.x_axis;
    assert_eq!(axis.id, "x-axis");
    assert_eq!(axis.orient, Orient::Bottom);
    assert_eq!(axis.origin, Point::new(0.0, chart.context.dimensions.bounded_height));

    let labels: Vec<&str> = axis.ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels.first(), Some(&"1994"));
    assert_eq!(labels.last(), Some(&"2016"));
    assert!(labels.iter().all(|l| l.len() == 4 && l.chars().all(|c| c.is_ascii_digit())));
}

#[test]
fn left_axis_ticks_are_minutes_seconds() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(dataset());
    let axis = &chart.scene.y_axis;
    assert_eq!(axis.id, "y-axis");
    assert_eq!(axis.orient, Orient::Left);
    assert!(!axis.ticks.is_empty());
    for tick in &axis.ticks {
        let (mm, ss) = tick.label.split_once(':').expect("MM:SS label");
        assert_eq!(mm.len(), 2);
        assert_eq!(ss.len(), 2);
        assert!(tick.offset >= 0.0 && tick.offset <= 425.0);
    }
    // 36:36 .. 39:39 picks 15 second steps
    assert_eq!(axis.ticks[0].label, "36:45");
}

#[test]
fn titles_are_placed_by_fixed_offsets() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(dataset());
    let dims = chart.context.dimensions;

    let y = &chart.scene.y_axis.title;
    assert_eq!(y.text, "YEAR");
    assert_eq!(y.rotate, -90.0);
    assert_eq!(y.x, -dims.bounded_height / 2.0);
    assert_eq!(y.y, -0.09 * dims.height);

    let x = &chart.scene.x_axis.title;
    assert_eq!(x.text, "TIME");
    assert_eq!(x.rotate, 0.0);
    assert_eq!(x.x, dims.bounded_width / 2.0);
    assert_eq!(x.y, 0.07 * dims.height);
}

#[test]
fn titles_are_configurable() {
    let opts = ChartOptions {
        y_axis_title: "TIME".into(),
        x_axis_title: "YEAR".into(),
        ..ChartOptions::default()
    };
    let chart = ChartRenderer::new(opts).render(dataset());
    assert_eq!(chart.scene.y_axis.title.text, "TIME");
    assert_eq!(chart.scene.x_axis.title.text, "YEAR");
}

#[test]
fn tick_geometry_points_outward() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(dataset());
    let left = &chart.scene.y_axis;
    let (start, end, label) = left.tick_geometry(&left.ticks[0]);
    assert_eq!(start.x, 0.0);
    assert_eq!(end.x, -6.0);
    assert_eq!(label.x, -9.0);

    let bottom = &chart.scene.x_axis;
    let (_, end, label) = bottom.tick_geometry(&bottom.ticks[0]);
    assert_eq!(end.y, 6.0);
    assert_eq!(label.y, 9.0);
}
