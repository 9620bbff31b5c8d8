// File: crates/chart-core/src/scene.rs
// Summary: Renderer-agnostic scene graph produced by the chart renderer.

use crate::axis::Axis;
use crate::geometry::{circle_contains, Point};
use crate::legend::Legend;
use crate::scale::Category;
use crate::theme::{Rgba, Theme};
use crate::time::format_instant;

/// One circle per record.
#[derive(Clone, Debug, PartialEq)]
pub struct Marker {
    /// Index of the record in the dataset.
    pub index: usize,
    /// Center inside the bounds group.
    pub center: Point,
    pub radius: f64,
    pub fill: Rgba,
    pub category: Category,
    /// Year, NaN when the record had none.
    pub x_value: f64,
    /// Milliseconds since the epoch, NaN when the time did not parse.
    pub y_value: f64,
}

impl Marker {
    pub fn data_xvalue(&self) -> String {
        self.x_value.to_string()
    }

    pub fn data_yvalue(&self) -> String {
        format_instant(self.y_value)
    }
}

/// Everything a backend needs to draw the chart. Coordinates of axes and
/// markers are relative to `bounds_origin`; the legend carries its own origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub bounds_origin: Point,
    pub theme: Theme,
    pub legend: Legend,
    pub y_axis: Axis,
    pub x_axis: Axis,
    pub markers: Vec<Marker>,
}

impl Scene {
    /// Marker under `p` (SVG coordinates). Later markers are drawn on top,
    /// so they win on overlap.
    pub fn marker_at(&self, p: Point) -> Option<&Marker> {
        let local = p.offset(-self.bounds_origin.x, -self.bounds_origin.y);
        self.markers.iter().rev().find(|m| circle_contains(m.center, m.radius, local))
    }
}
