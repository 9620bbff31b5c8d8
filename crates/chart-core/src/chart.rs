// File: crates/chart-core/src/chart.rs
// Summary: Chart renderer: dimensions, scales and scene construction from a dataset.

use crate::axis::{Axis, TickFormat};
use crate::dimensions::Dimensions;
use crate::error::Result;
use crate::geometry::Point;
use crate::interaction::HoverHandler;
use crate::legend::Legend;
use crate::record::{DatasetSource, Record};
use crate::scale::{extent, Category, ColorScale, LinearScale, ScaleTransform, TimeScale};
use crate::scene::{Marker, Scene};
use crate::theme::{Rgba, Theme};
use crate::time::{parse_race_time, TimeParsing};
use crate::types::{
    Insets, HEIGHT, LEGEND_OFFSET, LEGEND_TITLE, MARKER_RADIUS, TITLE, TOOLTIP_PAD, VIEWPORT_WIDTH,
    X_AXIS_TITLE, Y_AXIS_TITLE,
};

#[derive(Clone, Debug, PartialEq)]
pub struct ChartOptions {
    /// Viewport width the chart is sized against; read once per render.
    pub viewport_width: f64,
    pub height: f64,
    pub margin: Insets,
    pub marker_radius: f64,
    pub tooltip_pad: f64,
    pub legend_offset: f64,
    pub title: String,
    pub y_axis_title: String,
    pub x_axis_title: String,
    pub time_parsing: TimeParsing,
    pub theme: Theme,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            viewport_width: VIEWPORT_WIDTH,
            height: HEIGHT,
            margin: Insets::default(),
            marker_radius: MARKER_RADIUS,
            tooltip_pad: TOOLTIP_PAD,
            legend_offset: LEGEND_OFFSET,
            title: TITLE.to_string(),
            y_axis_title: Y_AXIS_TITLE.to_string(),
            x_axis_title: X_AXIS_TITLE.to_string(),
            time_parsing: TimeParsing::default(),
            theme: Theme::default(),
        }
    }
}

impl ChartOptions {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::from_viewport(self.viewport_width, self.height, self.margin)
    }
}

/// State the hover handlers read: sizes, scales and accessors.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartContext {
    pub dimensions: Dimensions,
    pub x_scale: LinearScale,
    pub y_scale: TimeScale,
    pub colors: ColorScale,
    pub time_parsing: TimeParsing,
    pub tooltip_pad: f64,
}

impl ChartContext {
    pub fn new(records: &[Record], opts: &ChartOptions) -> Self {
        let dimensions = opts.dimensions();
        let time_parsing = opts.time_parsing;

        let y_range = (dimensions.bounded_height, 0.0);
        let y_scale = match extent(records.iter().map(|r| y_value(r, time_parsing))) {
            Some(domain) => TimeScale::new(domain, y_range),
            None => TimeScale::undefined(y_range),
        };

        let x_range = (0.0, dimensions.bounded_width);
        let x_scale = match extent(records.iter().map(x_value)) {
            Some((min, max)) => LinearScale::new((min - 1.0, max + 1.0), x_range),
            None => LinearScale::undefined(x_range),
        };

        tracing::debug!(
            records = records.len(),
            x_domain = ?x_scale.domain(),
            y_domain = ?y_scale.domain(),
            "built scales"
        );

        Self {
            dimensions,
            x_scale,
            y_scale,
            colors: ColorScale::new(opts.theme.highlight, opts.theme.neutral),
            time_parsing,
            tooltip_pad: opts.tooltip_pad,
        }
    }

    pub fn x_value(&self, record: &Record) -> f64 {
        x_value(record)
    }

    pub fn y_value(&self, record: &Record) -> f64 {
        y_value(record, self.time_parsing)
    }

    /// Marker center inside the bounds.
    pub fn position(&self, record: &Record) -> Point {
        Point::new(
            self.x_scale.to_px(self.x_value(record)),
            self.y_scale.to_px(self.y_value(record)),
        )
    }

    pub fn category(&self, record: &Record) -> Category {
        Category::of(record.has_allegation())
    }

    pub fn fill(&self, record: &Record) -> Rgba {
        self.colors.color(self.category(record))
    }
}

/// Year accessor.
pub fn x_value(record: &Record) -> f64 {
    record.year
}

/// Time accessor: milliseconds of the synthetic instant.
pub fn y_value(record: &Record, mode: TimeParsing) -> f64 {
    parse_race_time(&record.time, mode)
}

/// Output of one render: the records, the context the handlers need, and the scene.
#[derive(Clone, Debug)]
pub struct RenderedChart {
    pub records: Vec<Record>,
    pub context: ChartContext,
    pub scene: Scene,
}

impl RenderedChart {
    pub fn hover_handler(&self) -> HoverHandler<'_> {
        HoverHandler::new(&self.context)
    }

    /// Index of the record whose marker is under `p` (SVG coordinates).
    pub fn marker_at(&self, p: Point) -> Option<usize> {
        self.scene.marker_at(p).map(|m| m.index)
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }
}

pub struct ChartRenderer {
    pub options: ChartOptions,
}

impl ChartRenderer {
    pub fn new(options: ChartOptions) -> Self {
        Self { options }
    }

    /// Build the scene for `records`. Never fails: malformed records end up
    /// at NaN positions and an empty dataset yields no markers.
    pub fn render(&self, records: Vec<Record>) -> RenderedChart {
        let opts = &self.options;
        let context = ChartContext::new(&records, opts);
        let dims = context.dimensions;

        let unparsed = records.iter().filter(|r| context.y_value(r).is_nan()).count();
        if unparsed > 0 {
            tracing::warn!(unparsed, "records with unparseable times are placed at NaN");
        }

        let markers = records
            .iter()
            .enumerate()
            .map(|(index, record)| Marker {
                index,
                center: context.position(record),
                radius: opts.marker_radius,
                fill: context.fill(record),
                category: context.category(record),
                x_value: record.year,
                y_value: context.y_value(record),
            })
            .collect();

        let legend = Legend::new(
            LEGEND_TITLE,
            Point::new(dims.bounded_width - opts.legend_offset, dims.bounded_height / 2.0),
            &context.colors,
            opts.theme.legend_text,
        );

        let y_axis = Axis::left(
            &context.y_scale,
            TickFormat::MinutesSeconds,
            opts.y_axis_title.clone(),
            dims.bounded_height,
            dims.height,
        );
        let x_axis = Axis::bottom(
            &context.x_scale,
            TickFormat::Integer,
            opts.x_axis_title.clone(),
            dims.bounded_width,
            dims.bounded_height,
            dims.height,
        );

        let scene = Scene {
            title: opts.title.clone(),
            width: dims.width,
            height: dims.height,
            bounds_origin: Point::new(dims.margin_left(), dims.margin_top()),
            theme: opts.theme,
            legend,
            y_axis,
            x_axis,
            markers,
        };

        RenderedChart { records, context, scene }
    }
}

/// Load the dataset once and render it. A failed fetch or decode is returned
/// as-is; nothing is retried.
pub async fn draw_chart(source: &DatasetSource, options: ChartOptions) -> Result<RenderedChart> {
    let records = source.load().await?;
    tracing::info!(%source, count = records.len(), "dataset loaded");
    Ok(ChartRenderer::new(options).render(records))
}
