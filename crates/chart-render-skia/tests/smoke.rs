// File: crates/chart-render-skia/tests/smoke.rs
// Purpose: Basic end-to-end render smoke test writing a PNG, with and without a tooltip.

use chart_core::{ChartOptions, ChartRenderer, Record, Tooltip};
use chart_render_skia::{RasterOptions, SkiaRenderer};

fn chart() -> chart_core::RenderedChart {
    let records = vec![
        Record::new(1994, "36:15", ""),
        Record::new(1998, "37:01", "Alleged"),
        Record::new(2006, "38:40", ""),
        Record::new(2015, "39:12", "Positive test"),
    ];
    ChartRenderer::new(ChartOptions { viewport_width: 800.0, ..ChartOptions::default() }).render(records)
}

#[test]
fn render_smoke_png() {
    let chart = chart();
    let renderer = SkiaRenderer::new();
    let opts = RasterOptions::default();

    let out = std::path::PathBuf::from("target/test_out/smoke.png");
    renderer.render_to_png(&chart, None, &opts, &out).expect("render should succeed");
    let meta = std::fs::metadata(&out).expect("output exists");
    assert!(meta.len() > 0, "png should be non-empty");

    let mut tooltip = Tooltip::default();
    chart.hover_handler().on_pointer_enter(&mut tooltip, &chart.records[1]);
    let bytes = renderer.render_to_png_bytes(&chart, Some(&tooltip), &opts).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}

#[test]
fn empty_dataset_still_rasterizes() {
    let chart = ChartRenderer::new(ChartOptions::default()).render(Vec::new());
    let bytes = SkiaRenderer::new()
        .render_to_png_bytes(&chart, None, &RasterOptions { draw_title: false, draw_labels: false })
        .expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]));
}
