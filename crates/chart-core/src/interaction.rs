// File: crates/chart-core/src/interaction.rs
// Summary: Tooltip target abstraction, hover handlers and a pointer hover tracker.

use crate::chart::ChartContext;
use crate::geometry::Point;
use crate::record::Record;
use crate::time::{format_instant, format_minutes_seconds};

/// The host's tooltip element: an opacity, two text slots (`#year`, `#time`),
/// a position and free-form data attributes.
pub trait TooltipTarget {
    fn set_opacity(&mut self, opacity: f64);
    fn set_year(&mut self, text: &str);
    fn set_time(&mut self, text: &str);
    /// Translation of the tooltip relative to the chart container.
    fn set_position(&mut self, at: Point);
    fn set_data(&mut self, key: &str, value: &str);
}

/// In-memory tooltip state. Content is kept when hidden.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    pub opacity: f64,
    pub year: String,
    pub time: String,
    pub position: Point,
    pub data_year: String,
    pub data_time: String,
}

impl Tooltip {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}

impl TooltipTarget for Tooltip {
    fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity;
    }

    fn set_year(&mut self, text: &str) {
        self.year = text.to_string();
    }

    fn set_time(&mut self, text: &str) {
        self.time = text.to_string();
    }

    fn set_position(&mut self, at: Point) {
        self.position = at;
    }

    fn set_data(&mut self, key: &str, value: &str) {
        match key {
            "year" => self.data_year = value.to_string(),
            "time" => self.data_time = value.to_string(),
            _ => tracing::trace!(key, "ignoring unknown tooltip attribute"),
        }
    }
}

/// Pointer-enter / pointer-leave behavior for markers, driven by an explicit
/// chart context instead of captured state.
#[derive(Clone, Copy, Debug)]
pub struct HoverHandler<'a> {
    ctx: &'a ChartContext,
}

impl<'a> HoverHandler<'a> {
    pub fn new(ctx: &'a ChartContext) -> Self {
        Self { ctx }
    }

    /// Tooltip position for `record`: beside its marker, shifted by the
    /// margins and the fixed pad.
    pub fn tooltip_position(&self, record: &Record) -> Point {
        let dims = &self.ctx.dimensions;
        let at = self.ctx.position(record);
        Point::new(at.x + dims.margin_left() + self.ctx.tooltip_pad, at.y + dims.margin_top())
    }

    pub fn on_pointer_enter<T: TooltipTarget + ?Sized>(&self, tooltip: &mut T, record: &Record) {
        let y = self.ctx.y_value(record);
        tooltip.set_opacity(1.0);
        tooltip.set_year(&record.year.to_string());
        tooltip.set_time(&format_minutes_seconds(y));
        tooltip.set_position(self.tooltip_position(record));
        tooltip.set_data("time", &format_instant(y));
        tooltip.set_data("year", &record.year.to_string());
    }

    pub fn on_pointer_leave<T: TooltipTarget + ?Sized>(&self, tooltip: &mut T) {
        tooltip.set_opacity(0.0);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverEvent {
    Enter(usize),
    Leave(usize),
}

/// Turns a stream of hit-test results into enter/leave events.
#[derive(Clone, Copy, Debug, Default)]
pub struct HoverTracker {
    current: Option<usize>,
}

impl HoverTracker {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Record the marker now under the pointer. Moving straight from one
    /// marker to another yields a leave followed by an enter.
    pub fn update(&mut self, hit: Option<usize>) -> Vec<HoverEvent> {
        if hit == self.current {
            return Vec::new();
        }
        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.current {
            events.push(HoverEvent::Leave(prev));
        }
        if let Some(next) = hit {
            events.push(HoverEvent::Enter(next));
        }
        self.current = hit;
        events
    }

    /// Apply `events` to `tooltip` using `records` for content.
    pub fn dispatch<T: TooltipTarget + ?Sized>(
        handler: &HoverHandler<'_>,
        tooltip: &mut T,
        records: &[Record],
        events: &[HoverEvent],
    ) {
        for event in events {
            match *event {
                HoverEvent::Enter(i) => {
                    if let Some(record) = records.get(i) {
                        handler.on_pointer_enter(tooltip, record);
                    }
                }
                HoverEvent::Leave(_) => handler.on_pointer_leave(tooltip),
            }
        }
    }
}
