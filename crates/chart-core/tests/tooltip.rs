// File: crates/chart-core/tests/tooltip.rs
// Purpose: Hover handlers populate, place and hide the tooltip; tracker emits enter/leave.

use chart_core::{
    ChartOptions, ChartRenderer, HoverEvent, HoverTracker, Point, Record, TimeParsing, Tooltip,
};

fn chart(mode: TimeParsing) -> chart_core::RenderedChart {
    let records = vec![
        Record::new(1998, "37:01", "Alleged"),
        Record::new(2001, "39:20", ""),
        Record::new(1995, "36:50", ""),
    ];
    ChartRenderer::new(ChartOptions { time_parsing: mode, ..ChartOptions::default() }).render(records)
}

#[test]
fn enter_shows_year_and_time() {
    let chart = chart(TimeParsing::Faithful);
    let handler = chart.hover_handler();
    let mut tooltip = Tooltip::default();
    assert!(!tooltip.is_visible());

    handler.on_pointer_enter(&mut tooltip, &chart.records[0]);
    assert_eq!(tooltip.opacity, 1.0);
    assert_eq!(tooltip.year, "1998");
    assert_eq!(tooltip.time, "37:37");
    assert_eq!(tooltip.data_year, "1998");
    assert_eq!(tooltip.data_time, "1970-01-01T00:37:37.000Z");
}

#[test]
fn corrected_parsing_shows_real_seconds() {
    let chart = chart(TimeParsing::Corrected);
    let mut tooltip = Tooltip::default();
    chart.hover_handler().on_pointer_enter(&mut tooltip, &chart.records[0]);
    assert_eq!(tooltip.time, "37:01");
}

#[test]
fn tooltip_sits_beside_marker() {
    let chart = chart(TimeParsing::Faithful);
    let mut tooltip = Tooltip::default();
    chart.hover_handler().on_pointer_enter(&mut tooltip, &chart.records[1]);

    let c = chart.scene.markers[1].center;
    assert_eq!(tooltip.position, Point::new(c.x + 90.0 + 35.0, c.y + 15.0));
}

#[test]
fn leave_hides_but_keeps_content() {
    let chart = chart(TimeParsing::Faithful);
    let handler = chart.hover_handler();
    let mut tooltip = Tooltip::default();
    handler.on_pointer_enter(&mut tooltip, &chart.records[2]);
    handler.on_pointer_leave(&mut tooltip);
    assert_eq!(tooltip.opacity, 0.0);
    assert_eq!(tooltip.year, "1995");
}

#[test]
fn tracker_emits_transitions() {
    let mut tracker = HoverTracker::default();
    assert!(tracker.update(None).is_empty());
    assert_eq!(tracker.update(Some(0)), vec![HoverEvent::Enter(0)]);
    assert!(tracker.update(Some(0)).is_empty());
    assert_eq!(tracker.update(Some(2)), vec![HoverEvent::Leave(0), HoverEvent::Enter(2)]);
    assert_eq!(tracker.current(), Some(2));
    assert_eq!(tracker.update(None), vec![HoverEvent::Leave(2)]);
    assert_eq!(tracker.current(), None);
}

#[test]
fn dispatch_applies_events() {
    let chart = chart(TimeParsing::Faithful);
    let handler = chart.hover_handler();
    let mut tooltip = Tooltip::default();
    let mut tracker = HoverTracker::default();

    let events = tracker.update(Some(1));
    HoverTracker::dispatch(&handler, &mut tooltip, &chart.records, &events);
    assert!(tooltip.is_visible());
    assert_eq!(tooltip.year, "2001");

    let events = tracker.update(None);
    HoverTracker::dispatch(&handler, &mut tooltip, &chart.records, &events);
    assert!(!tooltip.is_visible());
}
