// File: crates/chart-render-skia/src/lib.rs
// Summary: Skia raster backend for rendered charts: PNG files, PNG bytes and RGBA buffers.

use skia_safe as skia;

use chart_core::axis::{Axis, Orient};
use chart_core::geometry::clamp;
use chart_core::{ChartError, RenderedChart, Result, Rgba, Scene, Tooltip};

pub mod text;

pub use text::{Align, TextShaper, TextSpec};

/// Height of the band holding the page title when it is drawn.
pub const TITLE_BAND: f32 = 56.0;

const TICK_FONT: f32 = 10.0;
const AXIS_TITLE_FONT: f32 = 16.0;
const LEGEND_TITLE_FONT: f32 = 14.0;
const LEGEND_FONT: f32 = 12.0;
const TOOLTIP_FONT: f32 = 13.0;
const TOOLTIP_PADDING: f32 = 8.0;

#[derive(Clone, Copy, Debug)]
pub struct RasterOptions {
    /// Paint the title above the chart, as the page does.
    pub draw_title: bool,
    /// Text is skipped when false (deterministic snapshots).
    pub draw_labels: bool,
}

impl Default for RasterOptions {
    fn default() -> Self {
        Self { draw_title: true, draw_labels: true }
    }
}

impl RasterOptions {
    fn top(&self) -> f32 {
        if self.draw_title { TITLE_BAND } else { 0.0 }
    }
}

/// RGBA8 pixels with their size and row stride.
pub struct RgbaImage {
    pub pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
    pub stride: usize,
}

#[inline]
fn color(c: Rgba) -> skia::Color {
    skia::Color::from_argb(c.a, c.r, c.g, c.b)
}

#[inline]
fn faded(c: Rgba, opacity: f64) -> skia::Color {
    let a = (c.a as f64 * clamp(opacity, 0.0, 1.0)).round() as u8;
    skia::Color::from_argb(a, c.r, c.g, c.b)
}

fn stroke_paint(c: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint.set_color(c);
    paint
}

fn fill_paint(c: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint.set_color(c);
    paint
}

pub struct SkiaRenderer {
    text: TextShaper,
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { text: TextShaper::new() }
    }

    /// Pixel size of the surface for `chart`.
    pub fn surface_size(chart: &RenderedChart, opts: &RasterOptions) -> (i32, i32) {
        let w = chart.scene.width.ceil().max(1.0) as i32;
        let h = (chart.scene.height as f32 + opts.top()).ceil().max(1.0) as i32;
        (w, h)
    }

    fn render_surface(
        &self,
        chart: &RenderedChart,
        tooltip: Option<&Tooltip>,
        opts: &RasterOptions,
    ) -> Result<skia::Surface> {
        let (w, h) = Self::surface_size(chart, opts);
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| ChartError::Raster(format!("failed to create {w}x{h} raster surface")))?;
        self.draw(surface.canvas(), chart, tooltip, opts);
        Ok(surface)
    }

    /// Paint the chart onto `canvas`; the tooltip is painted only when visible.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        chart: &RenderedChart,
        tooltip: Option<&Tooltip>,
        opts: &RasterOptions,
    ) {
        let scene = &chart.scene;
        canvas.clear(color(scene.theme.background));

        if opts.draw_title && opts.draw_labels {
            let spec = TextSpec::new(28.0, color(scene.theme.title));
            self.text.draw(canvas, &scene.title, scene.width as f32 / 2.0, TITLE_BAND - 16.0, &spec, Align::Center);
        }

        canvas.save();
        canvas.translate((0.0, opts.top()));

        canvas.save();
        canvas.translate((scene.bounds_origin.x as f32, scene.bounds_origin.y as f32));
        self.draw_markers(canvas, scene);
        self.draw_axis(canvas, scene, &scene.y_axis, opts);
        self.draw_axis(canvas, scene, &scene.x_axis, opts);
        canvas.restore();

        self.draw_legend(canvas, scene, opts);

        if let Some(t) = tooltip.filter(|t| t.is_visible()) {
            self.draw_tooltip(canvas, scene, t, opts);
        }
        canvas.restore();
    }

    fn draw_markers(&self, canvas: &skia::Canvas, scene: &Scene) {
        let stroke = stroke_paint(color(scene.theme.marker_stroke), 1.0);
        for m in &scene.markers {
            if !m.center.x.is_finite() || !m.center.y.is_finite() {
                continue;
            }
            let center = (m.center.x as f32, m.center.y as f32);
            canvas.draw_circle(center, m.radius as f32, &fill_paint(color(m.fill)));
            canvas.draw_circle(center, m.radius as f32, &stroke);
        }
    }

    fn draw_axis(&self, canvas: &skia::Canvas, scene: &Scene, axis: &Axis, opts: &RasterOptions) {
        let theme = &scene.theme;
        let line = stroke_paint(color(theme.axis_line), 1.0);

        canvas.save();
        canvas.translate((axis.origin.x as f32, axis.origin.y as f32));

        // domain line with outer ticks
        let (r0, r1) = (axis.range.0 as f32, axis.range.1 as f32);
        let size = axis.tick_size as f32;
        let mut path = skia::Path::new();
        match axis.orient {
            Orient::Left => {
                path.move_to((-size, r0));
                path.line_to((0.0, r0));
                path.line_to((0.0, r1));
                path.line_to((-size, r1));
            }
            Orient::Bottom => {
                path.move_to((r0, size));
                path.line_to((r0, 0.0));
                path.line_to((r1, 0.0));
                path.line_to((r1, size));
            }
        }
        canvas.draw_path(&path, &line);

        let tick_spec = TextSpec::new(TICK_FONT, color(theme.tick_label)).numeric();
        for tick in &axis.ticks {
            let (start, end, label_at) = axis.tick_geometry(tick);
            canvas.draw_line((start.x as f32, start.y as f32), (end.x as f32, end.y as f32), &line);
            if !opts.draw_labels {
                continue;
            }
            let (x, y) = (label_at.x as f32, label_at.y as f32);
            match axis.orient {
                Orient::Left => self.text.draw(canvas, &tick.label, x, y + 0.32 * TICK_FONT, &tick_spec, Align::Right),
                Orient::Bottom => self.text.draw(canvas, &tick.label, x, y + 0.71 * TICK_FONT, &tick_spec, Align::Center),
            }
        }

        if opts.draw_labels {
            let title = &axis.title;
            let spec = TextSpec::new(AXIS_TITLE_FONT, color(theme.axis_title)).spaced(2.0);
            canvas.save();
            canvas.rotate(title.rotate as f32, None);
            self.text.draw(canvas, &title.text, title.x as f32, title.y as f32, &spec, Align::Left);
            canvas.restore();
        }
        canvas.restore();
    }

    fn draw_legend(&self, canvas: &skia::Canvas, scene: &Scene, opts: &RasterOptions) {
        let legend = &scene.legend;
        canvas.save();
        canvas.translate((legend.origin.x as f32, legend.origin.y as f32));
        let size = chart_core::legend::SWATCH_SIZE as f32;
        for cell in &legend.cells {
            let rect = skia::Rect::from_xywh(cell.swatch.x as f32, cell.swatch.y as f32, size, size);
            canvas.draw_rect(rect, &fill_paint(color(cell.color)));
        }
        if opts.draw_labels {
            let fill = color(legend.text_fill);
            self.text.draw(canvas, &legend.title, 0.0, 0.0, &TextSpec::new(LEGEND_TITLE_FONT, fill), Align::Left);
            let spec = TextSpec::new(LEGEND_FONT, fill);
            for cell in &legend.cells {
                self.text.draw(canvas, &cell.label, cell.label_at.x as f32, cell.label_at.y as f32, &spec, Align::Left);
            }
        }
        canvas.restore();
    }

    fn draw_tooltip(&self, canvas: &skia::Canvas, scene: &Scene, tooltip: &Tooltip, opts: &RasterOptions) {
        let theme = &scene.theme;
        let spec = TextSpec::new(TOOLTIP_FONT, faded(theme.tooltip_text, tooltip.opacity));
        let lines = [format!("Year: {}", tooltip.year), format!("Time: {}", tooltip.time)];
        let text_w = lines
            .iter()
            .map(|l| if opts.draw_labels { self.text.measure_width(l, &spec) } else { 0.0 })
            .fold(72.0_f32, f32::max);
        let line_h = TOOLTIP_FONT * 1.4;
        let box_w = text_w + 2.0 * TOOLTIP_PADDING;
        let box_h = line_h * lines.len() as f32 + 2.0 * TOOLTIP_PADDING;

        // keep the box on the canvas
        let x = clamp(tooltip.position.x as f32, 0.0, (scene.width as f32 - box_w).max(0.0));
        let y = clamp(tooltip.position.y as f32, 0.0, (scene.height as f32 - box_h).max(0.0));

        let rect = skia::Rect::from_xywh(x, y, box_w, box_h);
        canvas.draw_round_rect(rect, 4.0, 4.0, &fill_paint(faded(theme.tooltip_background, tooltip.opacity)));
        if opts.draw_labels {
            for (i, line) in lines.iter().enumerate() {
                let baseline = y + TOOLTIP_PADDING + line_h * i as f32 + TOOLTIP_FONT;
                self.text.draw(canvas, line, x + TOOLTIP_PADDING, baseline, &spec, Align::Left);
            }
        }
    }

    /// Encode the chart as PNG bytes.
    pub fn render_to_png_bytes(
        &self,
        chart: &RenderedChart,
        tooltip: Option<&Tooltip>,
        opts: &RasterOptions,
    ) -> Result<Vec<u8>> {
        let mut surface = self.render_surface(chart, tooltip, opts)?;
        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| ChartError::Raster("encode PNG failed".to_string()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(
        &self,
        chart: &RenderedChart,
        tooltip: Option<&Tooltip>,
        opts: &RasterOptions,
        output_png_path: impl AsRef<std::path::Path>,
    ) -> Result<()> {
        let bytes = self.render_to_png_bytes(chart, tooltip, opts)?;
        chart_core::svg::write_output(output_png_path.as_ref(), &bytes)
    }

    /// Unpremultiplied RGBA8 pixels, row-major.
    pub fn render_to_rgba8(
        &self,
        chart: &RenderedChart,
        tooltip: Option<&Tooltip>,
        opts: &RasterOptions,
    ) -> Result<RgbaImage> {
        let mut surface = self.render_surface(chart, tooltip, opts)?;
        let (w, h) = Self::surface_size(chart, opts);
        let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
        let stride = w as usize * 4;
        let mut pixels = vec![0u8; stride * h as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(ChartError::Raster("read_pixels failed".to_string()));
        }
        tracing::trace!(w, h, "rasterized chart");
        Ok(RgbaImage { pixels, width: w as u32, height: h as u32, stride })
    }
}
