// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the dataset model, chart renderer, hover handling and SVG output.

pub mod axis;
pub mod chart;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod legend;
pub mod record;
pub mod scale;
pub mod scene;
pub mod svg;
pub mod theme;
pub mod time;
pub mod types;

pub use axis::{Axis, Orient, TickFormat};
pub use chart::{draw_chart, ChartContext, ChartOptions, ChartRenderer, RenderedChart};
pub use dimensions::Dimensions;
pub use error::{ChartError, Result};
pub use geometry::Point;
pub use interaction::{HoverEvent, HoverHandler, HoverTracker, Tooltip, TooltipTarget};
pub use record::{DatasetSource, Record, DATASET_URL};
pub use scale::{Category, ColorScale, LinearScale, ScaleTransform, TimeScale};
pub use scene::{Marker, Scene};
pub use theme::{Rgba, Theme};
pub use time::TimeParsing;
