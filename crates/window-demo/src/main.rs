// File: crates/window-demo/src/main.rs
// Summary: Windowed host that renders the chart via RGBA blit (CPU) using winit + softbuffer and drives the tooltip from the pointer.

use anyhow::{anyhow, Context, Result};
use chart_core::{
    draw_chart, theme, ChartOptions, ChartRenderer, DatasetSource, HoverTracker, Point, RenderedChart,
    TimeParsing, Tooltip, DATASET_URL,
};
use chart_render_skia::{RasterOptions, SkiaRenderer, TITLE_BAND};
use clap::Parser;
use std::num::NonZeroU32;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use winit::event::{Event, WindowEvent};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive doping-in-cycling scatter plot", long_about = None)]
struct Args {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, env = "DOPING_CHART_URL", default_value = DATASET_URL)]
    url: String,

    /// Local JSON dataset to use instead of the URL
    #[arg(long, env = "DOPING_CHART_INPUT")]
    input: Option<std::path::PathBuf>,

    /// Color theme (dark, light)
    #[arg(long, env = "DOPING_CHART_THEME", default_value = "dark")]
    theme: String,

    /// How race times are read: faithful (published chart) or corrected
    #[arg(long, env = "DOPING_CHART_TIME_PARSING", default_value = "faithful")]
    time_parsing: TimeParsing,
}

fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry().with(env_filter).with(fmt::layer()).init();
}

/// Pack RGBA8 into softbuffer's 0RGB words; pixels outside the image get `fill`.
fn blit(frame: &mut [u32], frame_w: usize, frame_h: usize, img: &chart_render_skia::RgbaImage, fill: u32) {
    let img_w = img.width as usize;
    let img_h = img.height as usize;
    for y in 0..frame_h {
        let row = &mut frame[y * frame_w..(y + 1) * frame_w];
        for (x, px) in row.iter_mut().enumerate() {
            *px = if x < img_w && y < img_h {
                let i = y * img.stride + x * 4;
                let (r, g, b) = (img.pixels[i] as u32, img.pixels[i + 1] as u32, img.pixels[i + 2] as u32);
                (r << 16) | (g << 8) | b
            } else {
                fill
            };
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let source = match &args.input {
        Some(path) => DatasetSource::File(path.clone()),
        None => DatasetSource::Url(args.url.clone()),
    };
    let mut options = ChartOptions {
        time_parsing: args.time_parsing,
        theme: theme::find(&args.theme),
        ..ChartOptions::default()
    };

    // Fetch once before the event loop takes over the main thread.
    let runtime = tokio::runtime::Runtime::new().context("starting tokio runtime")?;
    let mut chart: RenderedChart = runtime
        .block_on(draw_chart(&source, options.clone()))
        .with_context(|| format!("failed to draw chart from {source}"))?;
    drop(runtime);
    info!(markers = chart.scene.markers.len(), "chart built");

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title(chart.scene.title.clone())
        .with_inner_size(winit::dpi::LogicalSize::new(
            options.viewport_width,
            options.height + TITLE_BAND as f64,
        ))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }.map_err(|e| anyhow!("softbuffer context: {e}"))?;
    let mut surface =
        unsafe { softbuffer::Surface::new(&context, &window) }.map_err(|e| anyhow!("softbuffer surface: {e}"))?;

    let renderer = SkiaRenderer::new();
    let raster = RasterOptions::default();
    let mut tooltip = Tooltip::default();
    let mut tracker = HoverTracker::default();
    let mut size = window.inner_size();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *cf = ControlFlow::Exit,
                WindowEvent::Resized(new_size) => {
                    size = new_size;
                    // Re-size the chart to the new viewport; records stay as fetched.
                    options.viewport_width = size.width.max(1) as f64;
                    let records = std::mem::take(&mut chart.records);
                    chart = ChartRenderer::new(options.clone()).render(records);
                    tracker = HoverTracker::default();
                    chart.hover_handler().on_pointer_leave(&mut tooltip);
                    window.request_redraw();
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let at = Point::new(position.x, position.y - TITLE_BAND as f64);
                    let events = tracker.update(chart.marker_at(at));
                    if !events.is_empty() {
                        debug!(?events, "hover");
                        HoverTracker::dispatch(&chart.hover_handler(), &mut tooltip, &chart.records, &events);
                        window.request_redraw();
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    let events = tracker.update(None);
                    if !events.is_empty() {
                        HoverTracker::dispatch(&chart.hover_handler(), &mut tooltip, &chart.records, &events);
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::RedrawRequested(_) => {
                let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
                    return;
                };
                if let Err(e) = surface.resize(w, h) {
                    error!("resize error: {e}");
                    return;
                }
                let img = match renderer.render_to_rgba8(&chart, Some(&tooltip), &raster) {
                    Ok(img) => img,
                    Err(e) => {
                        error!("render error: {e}");
                        return;
                    }
                };
                let bg = chart.scene.theme.background;
                let fill = ((bg.r as u32) << 16) | ((bg.g as u32) << 8) | bg.b as u32;
                let mut frame = match surface.buffer_mut() {
                    Ok(frame) => frame,
                    Err(e) => {
                        error!("frame error: {e}");
                        return;
                    }
                };
                blit(&mut frame, w.get() as usize, h.get() as usize, &img, fill);
                if let Err(e) = frame.present() {
                    error!("present error: {e}");
                }
            }
            _ => {}
        }
    });
}
