// File: crates/chart-core/src/time.rs
// Summary: Race time parsing into synthetic UTC instants and minute:second formatting.

use chrono::{DateTime, SecondsFormat, Utc};

const MS_PER_SECOND: f64 = 1_000.0;
const INVALID: &str = "NaN";

/// How a `"M:SS"` string becomes an instant.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeParsing {
    /// Minute and second are both read from the first segment ("36:15" -> 36:36).
    /// Matches the published chart.
    #[default]
    Faithful,
    /// Minute from the first segment, second from the second ("36:15" -> 36:15).
    Corrected,
}

impl std::str::FromStr for TimeParsing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "faithful" => Ok(Self::Faithful),
            "corrected" => Ok(Self::Corrected),
            other => Err(format!("unknown time parsing mode `{other}` (expected faithful|corrected)")),
        }
    }
}

/// Milliseconds since the epoch of 1970-01-01T00:MM:SSZ built from `time`.
/// Unparseable input yields NaN rather than an error.
pub fn parse_race_time(time: &str, mode: TimeParsing) -> f64 {
    let mut parts = time.split(':');
    let first = parts.next().map(component).unwrap_or(f64::NAN);
    let (minutes, seconds) = match mode {
        TimeParsing::Faithful => (first, first),
        TimeParsing::Corrected => (first, parts.next().map(component).unwrap_or(f64::NAN)),
    };
    (minutes * 60.0 + seconds) * MS_PER_SECOND
}

// Numeric coercion of one segment: surrounding whitespace ignored, blank is zero,
// fractions truncated toward zero.
fn component(s: &str) -> f64 {
    let s = s.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse::<f64>().map(f64::trunc).unwrap_or(f64::NAN)
}

fn to_datetime(ms: f64) -> Option<DateTime<Utc>> {
    if !ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(ms as i64)
}

/// `MM:SS` rendering of an instant; minutes wrap at the hour.
pub fn format_minutes_seconds(ms: f64) -> String {
    match to_datetime(ms) {
        Some(dt) => dt.format("%M:%S").to_string(),
        None => format!("{INVALID}:{INVALID}"),
    }
}

/// ISO-8601 UTC rendering used for inspectable attributes.
pub fn format_instant(ms: f64) -> String {
    match to_datetime(ms) {
        Some(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        None => INVALID.to_string(),
    }
}
