// File: crates/chart-render-skia/tests/rgba.rs
// Purpose: Validate RGBA buffer shape, background and marker pixels.

use chart_core::{ChartOptions, ChartRenderer, Record, Theme};
use chart_render_skia::{RasterOptions, SkiaRenderer};

fn pixel(img: &chart_render_skia::RgbaImage, x: u32, y: u32) -> [u8; 4] {
    let i = y as usize * img.stride + x as usize * 4;
    [img.pixels[i], img.pixels[i + 1], img.pixels[i + 2], img.pixels[i + 3]]
}

#[test]
fn render_rgba8_buffer() {
    let records = vec![Record::new(2000, "38:20", "Alleged"), Record::new(2002, "36:15", "")];
    let chart = ChartRenderer::new(ChartOptions { viewport_width: 600.0, ..ChartOptions::default() }).render(records);

    let opts = RasterOptions { draw_title: false, draw_labels: false }; // avoid font variance
    let img = SkiaRenderer::new().render_to_rgba8(&chart, None, &opts).expect("rgba render");
    assert_eq!(img.width, 540);
    assert_eq!(img.height, 500);
    assert_eq!(img.width as usize * img.height as usize * 4, img.pixels.len());
    assert_eq!(img.stride, img.width as usize * 4);

    // top-left is background
    let bg = Theme::dark().background;
    assert_eq!(pixel(&img, 0, 0), [bg.r, bg.g, bg.b, 255]);

    // the slowest record sits at the top edge, clear of the axes
    assert_eq!(chart.scene.markers[0].center.y, 0.0);

    // center of the first marker is the highlight color
    let m = &chart.scene.markers[0];
    let x = (chart.scene.bounds_origin.x + m.center.x).round() as u32;
    let y = (chart.scene.bounds_origin.y + m.center.y).round() as u32;
    let gold = Theme::dark().highlight;
    assert_eq!(pixel(&img, x, y), [gold.r, gold.g, gold.b, 255]);
}
