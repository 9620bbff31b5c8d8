// File: crates/chart-core/src/dimensions.rs
// Summary: Chart size, margins and bounded plotting area derived from the viewport width.

use crate::types::{Insets, WIDTH_RATIO};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub margin: Insets,
    pub bounded_width: f64,
    pub bounded_height: f64,
}

impl Dimensions {
    /// The chart takes a fixed share of the viewport width.
    pub fn from_viewport(viewport_width: f64, height: f64, margin: Insets) -> Self {
        Self::new(viewport_width * WIDTH_RATIO, height, margin)
    }

    /// Bounded area is what remains after subtracting the margins. It may be
    /// negative for very small viewports; nothing clamps it.
    pub fn new(width: f64, height: f64, margin: Insets) -> Self {
        Self {
            width,
            height,
            margin,
            bounded_width: width - f64::from(margin.hsum()),
            bounded_height: height - f64::from(margin.vsum()),
        }
    }

    pub fn margin_left(&self) -> f64 { self.margin.left as f64 }
    pub fn margin_top(&self) -> f64 { self.margin.top as f64 }
}
