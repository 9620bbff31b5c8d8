// File: crates/chart-core/tests/scales.rs
// Purpose: Scale domains, mappings and tick generation.

use chart_core::scale::{extent, nice_ticks};
use chart_core::{ChartOptions, ChartRenderer, LinearScale, Record, ScaleTransform, TimeScale};

fn years(range: std::ops::RangeInclusive<i32>) -> Vec<Record> {
    range.map(|y| Record::new(y, "37:00", "")).collect()
}

#[test]
fn extent_skips_nan() {
    assert_eq!(extent([3.0, f64::NAN, -1.0, 2.0]), Some((-1.0, 3.0)));
    assert_eq!(extent(std::iter::empty()), None);
    assert_eq!(extent([f64::NAN]), None);
}

#[test]
fn x_domain_pads_one_year_each_side() {
    let records = vec![
        Record::new(2003, "39:00", ""),
        Record::new(1994, "36:15", ""),
        Record::new(2015, "37:10", "x"),
    ];
    let chart = ChartRenderer::new(ChartOptions::default()).render(records);
    let x = chart.context.x_scale;
    assert_eq!(x.domain(), (1993.0, 2016.0));
    assert_eq!(x.range(), (0.0, chart.context.dimensions.bounded_width));
}

#[test]
fn y_range_is_inverted() {
    let records = vec![Record::new(2000, "36:15", ""), Record::new(2001, "39:50", "")];
    let chart = ChartRenderer::new(ChartOptions::default()).render(records);
    let y = chart.context.y_scale;
    assert_eq!(y.range(), (chart.context.dimensions.bounded_height, 0.0));
    let (lo, hi) = y.domain();
    assert_eq!(y.to_px(lo), 425.0);
    assert_eq!(y.to_px(hi), 0.0);
}

#[test]
fn linear_maps_and_inverts() {
    let s = LinearScale::new((1993.0, 2016.0), (0.0, 230.0));
    assert_eq!(s.to_px(1993.0), 0.0);
    assert_eq!(s.to_px(2016.0), 230.0);
    assert!((s.to_px(2004.5) - 115.0).abs() < 1e-9);
    assert!((s.from_px(115.0) - 2004.5).abs() < 1e-9);
}

#[test]
fn collapsed_domain_maps_to_midpoint() {
    let s = LinearScale::new((5.0, 5.0), (0.0, 100.0));
    assert_eq!(s.to_px(5.0), 50.0);
    assert_eq!(s.to_px(123.0), 50.0);
}

#[test]
fn undefined_domain_maps_to_nan() {
    let s = LinearScale::undefined((0.0, 100.0));
    assert!(s.to_px(1.0).is_nan());
    assert!(s.ticks(10).is_empty());
    assert!(TimeScale::undefined((0.0, 1.0)).ticks(10).is_empty());
}

#[test]
fn linear_ticks_use_round_steps() {
    let ticks = nice_ticks(1993.0, 2016.0, 10);
    let want: Vec<f64> = (0..12).map(|i| 1994.0 + 2.0 * i as f64).collect();
    assert_eq!(ticks, want);

    assert_eq!(nice_ticks(0.0, 1.0, 5), vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0]);
    assert_eq!(nice_ticks(10.0, 0.0, 2), vec![0.0, 5.0, 10.0]);
}

#[test]
fn time_ticks_pick_nearest_interval() {
    assert_eq!(TimeScale::tick_interval(183_000.0, 10), Some(15_000.0));
    assert_eq!(TimeScale::tick_interval(600_000.0, 10), Some(60_000.0));
    assert_eq!(TimeScale::tick_interval(500.0, 10), None);

    let s = TimeScale::new((2_196_000.0, 2_379_000.0), (425.0, 0.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks.first(), Some(&2_205_000.0));
    assert_eq!(ticks.last(), Some(&2_370_000.0));
    assert!(ticks.windows(2).all(|w| w[1] - w[0] == 15_000.0));
}

#[test]
fn time_ticks_stay_bounded_for_huge_spans() {
    const DAY: f64 = 86_400_000.0;
    assert_eq!(TimeScale::tick_interval(30.0 * DAY, 10), Some(2.0 * DAY));

    // one outlier with an enormous minute field spans thousands of days
    let records = vec![Record::new(2000, "36:15", ""), Record::new(2001, "9000000:00", "")];
    let chart = ChartRenderer::new(ChartOptions::default()).render(records);
    let ticks = &chart.scene.y_axis.ticks;
    assert!(ticks.len() >= 2 && ticks.len() <= 20, "got {} ticks", ticks.len());

    let s = TimeScale::new((0.0, 1.0e15), (425.0, 0.0));
    let values = s.ticks(10);
    assert!(values.len() <= 20, "got {} ticks", values.len());
    assert!(values.iter().all(|v| v % DAY == 0.0));
}

#[test]
fn marker_x_increases_with_year() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(years(1994..=2015));
    let xs: Vec<f64> = chart.scene.markers.iter().map(|m| m.center.x).collect();
    assert!(xs.windows(2).all(|w| w[0] < w[1]));
    for (m, r) in chart.scene.markers.iter().zip(&chart.records) {
        assert_eq!(m.center.x, chart.context.x_scale.to_px(r.year));
    }
}
