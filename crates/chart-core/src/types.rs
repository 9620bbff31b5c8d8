// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, margins, fixed chart text).

/// Default viewport width in pixels, used when the host does not supply one.
pub const VIEWPORT_WIDTH: f64 = 1024.0;
/// Fixed chart height in pixels.
pub const HEIGHT: f64 = 500.0;
/// Share of the viewport width the chart occupies.
pub const WIDTH_RATIO: f64 = 0.9;

/// Marker circle radius.
pub const MARKER_RADIUS: f64 = 7.0;
/// Horizontal pad between a marker and its tooltip, on top of the left margin.
pub const TOOLTIP_PAD: f64 = 35.0;
/// Legend distance from the right edge of the bounded area.
pub const LEGEND_OFFSET: f64 = 100.0;

pub const TITLE: &str = "Doping In Professional Bike Races";
pub const Y_AXIS_TITLE: &str = "YEAR";
pub const X_AXIS_TITLE: &str = "TIME";
pub const LEGEND_TITLE: &str = "Legend";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(90, 15, 15, 60)
    }
}
