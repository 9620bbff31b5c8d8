// File: crates/chart-core/src/legend.rs
// Summary: Color legend layout (title plus one swatch row per category).

use crate::geometry::Point;
use crate::scale::{Category, ColorScale};
use crate::theme::Rgba;

pub const SWATCH_SIZE: f64 = 15.0;
pub const SWATCH_PADDING: f64 = 2.0;
pub const LABEL_OFFSET: f64 = 10.0;
/// Vertical gap from the legend origin to the first swatch row.
pub const TITLE_HEIGHT: f64 = 24.0;

#[derive(Clone, Debug, PartialEq)]
pub struct LegendCell {
    pub category: Category,
    pub color: Rgba,
    pub label: String,
    /// Top-left of the swatch, relative to the legend origin.
    pub swatch: Point,
    /// Label baseline start, relative to the legend origin.
    pub label_at: Point,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Legend {
    pub title: String,
    /// Translation inside the SVG (not the bounds).
    pub origin: Point,
    pub text_fill: Rgba,
    pub cells: Vec<LegendCell>,
}

impl Legend {
    pub fn new(title: impl Into<String>, origin: Point, scale: &ColorScale, text_fill: Rgba) -> Self {
        let cells = scale
            .entries()
            .iter()
            .enumerate()
            .map(|(i, &(category, color))| {
                let top = TITLE_HEIGHT + i as f64 * (SWATCH_SIZE + SWATCH_PADDING);
                LegendCell {
                    category,
                    color,
                    label: category.label().to_string(),
                    swatch: Point::new(0.0, top),
                    // roughly centers 12px text on the swatch
                    label_at: Point::new(SWATCH_SIZE + LABEL_OFFSET, top + SWATCH_SIZE / 2.0 + 4.0),
                }
            })
            .collect();
        Self { title: title.into(), origin, text_fill, cells }
    }
}
