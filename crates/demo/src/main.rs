// File: crates/demo/src/main.rs
// Summary: Fetches the cyclist dataset once and writes the chart to SVG, HTML and PNG.

use anyhow::{Context, Result};
use chart_core::{draw_chart, theme, ChartOptions, DatasetSource, TimeParsing, DATASET_URL};
use chart_render_skia::{RasterOptions, SkiaRenderer};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about = "Render the doping-in-cycling scatter plot", long_about = None)]
struct Args {
    /// Dataset URL (ignored when --input is given)
    #[arg(long, env = "DOPING_CHART_URL", default_value = DATASET_URL)]
    url: String,

    /// Local JSON dataset to use instead of the URL
    #[arg(long, env = "DOPING_CHART_INPUT")]
    input: Option<PathBuf>,

    /// Viewport width the chart is sized against
    #[arg(long, env = "DOPING_CHART_VIEWPORT_WIDTH", default_value_t = chart_core::types::VIEWPORT_WIDTH)]
    viewport_width: f64,

    /// Chart height in pixels
    #[arg(long, env = "DOPING_CHART_HEIGHT", default_value_t = chart_core::types::HEIGHT)]
    height: f64,

    /// Output directory
    #[arg(long, env = "DOPING_CHART_OUT_DIR", default_value = "target/out")]
    out_dir: PathBuf,

    /// Color theme (dark, light)
    #[arg(long, env = "DOPING_CHART_THEME", default_value = "dark")]
    theme: String,

    /// How race times are read: faithful (published chart) or corrected
    #[arg(long, env = "DOPING_CHART_TIME_PARSING", default_value = "faithful")]
    time_parsing: TimeParsing,

    /// Skip the PNG
    #[arg(long, env = "DOPING_CHART_NO_PNG")]
    no_png: bool,
}

fn init_logging() {
    // Default to `info` if RUST_LOG is not set.
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

impl Args {
    fn source(&self) -> DatasetSource {
        match &self.input {
            Some(path) => DatasetSource::File(path.clone()),
            None => DatasetSource::Url(self.url.clone()),
        }
    }

    fn options(&self) -> ChartOptions {
        ChartOptions {
            viewport_width: self.viewport_width,
            height: self.height,
            time_parsing: self.time_parsing,
            theme: theme::find(&self.theme),
            ..ChartOptions::default()
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging();

    let source = args.source();
    info!(%source, "loading dataset");
    let chart = draw_chart(&source, args.options())
        .await
        .with_context(|| format!("failed to draw chart from {source}"))?;
    info!(markers = chart.scene.markers.len(), "chart built");

    let svg = args.out_dir.join("chart.svg");
    chart.render_to_svg(&svg).with_context(|| format!("writing {}", svg.display()))?;
    let html = args.out_dir.join("chart.html");
    chart.render_to_html(&html).with_context(|| format!("writing {}", html.display()))?;

    if !args.no_png {
        let png = args.out_dir.join("chart.png");
        SkiaRenderer::new()
            .render_to_png(&chart, None, &RasterOptions::default(), &png)
            .with_context(|| format!("writing {}", png.display()))?;
    }

    println!("Wrote chart to {}", args.out_dir.display());
    Ok(())
}
