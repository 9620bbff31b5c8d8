// File: crates/chart-core/tests/time_parsing.rs
// Purpose: Race time parsing modes and minute:second formatting.

use chart_core::time::{format_instant, format_minutes_seconds, parse_race_time, TimeParsing};

#[test]
fn faithful_reads_first_segment_twice() {
    let ms = parse_race_time("36:15", TimeParsing::Faithful);
    assert_eq!(ms, ((36 * 60 + 36) * 1000) as f64);
    assert_eq!(format_minutes_seconds(ms), "36:36");
}

#[test]
fn corrected_reads_both_segments() {
    let ms = parse_race_time("36:15", TimeParsing::Corrected);
    assert_eq!(format_minutes_seconds(ms), "36:15");
    assert_eq!(format_instant(ms), "1970-01-01T00:36:15.000Z");
}

#[test]
fn malformed_time_is_nan() {
    assert!(parse_race_time("abc", TimeParsing::Faithful).is_nan());
    assert!(parse_race_time("37", TimeParsing::Corrected).is_nan());
    assert_eq!(format_minutes_seconds(f64::NAN), "NaN:NaN");
    assert_eq!(format_instant(f64::NAN), "NaN");
}

#[test]
fn minutes_past_the_hour_wrap() {
    let ms = parse_race_time("61:05", TimeParsing::Corrected);
    assert_eq!(format_minutes_seconds(ms), "01:05");
    assert_eq!(format_instant(ms), "1970-01-01T01:01:05.000Z");
}

#[test]
fn parses_mode_names() {
    assert_eq!("Corrected".parse::<TimeParsing>(), Ok(TimeParsing::Corrected));
    assert!("sideways".parse::<TimeParsing>().is_err());
}
