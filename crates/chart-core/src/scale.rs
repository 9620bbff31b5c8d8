// File: crates/chart-core/src/scale.rs
// Summary: Linear (X), time (Y) and categorical color scales, plus extent and tick helpers.

use crate::theme::Rgba;

/// Domain value to pixel transform and back.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
    fn domain(&self) -> (f64, f64);
    fn range(&self) -> (f64, f64);
    /// Roughly `count` readable tick values inside the domain.
    fn ticks(&self, count: usize) -> Vec<f64>;
}

/// `[min, max]` of the finite values in `values`; `None` when there are none.
pub fn extent<I>(values: I) -> Option<(f64, f64)>
where
    I: IntoIterator<Item = f64>,
{
    values.into_iter().filter(|v| !v.is_nan()).fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Continuous linear mapping from `domain` onto `range`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub d0: f64,
    pub d1: f64,
    pub r0: f64,
    pub r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    /// Scale over a missing extent: every input maps to NaN.
    pub fn undefined(range: (f64, f64)) -> Self {
        Self::new((f64::NAN, f64::NAN), range)
    }

    #[inline]
    fn normalize(&self, v: f64) -> f64 {
        let span = self.d1 - self.d0;
        if span.is_nan() {
            f64::NAN
        } else if span == 0.0 {
            // collapsed domain lands in the middle of the range
            0.5
        } else {
            (v - self.d0) / span
        }
    }
}

impl ScaleTransform for LinearScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        self.r0 + self.normalize(v) * (self.r1 - self.r0)
    }

    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        let span = self.r1 - self.r0;
        if span == 0.0 {
            return self.d0;
        }
        self.d0 + (px - self.r0) / span * (self.d1 - self.d0)
    }

    fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    fn ticks(&self, count: usize) -> Vec<f64> {
        nice_ticks(self.d0, self.d1, count)
    }
}

const SECOND: f64 = 1_000.0;
const MINUTE: f64 = 60.0 * SECOND;
const HOUR: f64 = 60.0 * MINUTE;
const DAY: f64 = 24.0 * HOUR;
const WEEK: f64 = 7.0 * DAY;

/// Candidate tick intervals for time scales, in milliseconds.
const TIME_INTERVALS: [f64; 15] = [
    SECOND,
    5.0 * SECOND,
    15.0 * SECOND,
    30.0 * SECOND,
    MINUTE,
    5.0 * MINUTE,
    15.0 * MINUTE,
    30.0 * MINUTE,
    HOUR,
    3.0 * HOUR,
    6.0 * HOUR,
    12.0 * HOUR,
    DAY,
    2.0 * DAY,
    WEEK,
];

/// Linear mapping over milliseconds since the epoch, with calendar-friendly ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TimeScale {
    pub linear: LinearScale,
}

impl TimeScale {
    pub fn new(domain_ms: (f64, f64), range: (f64, f64)) -> Self {
        Self { linear: LinearScale::new(domain_ms, range) }
    }

    pub fn undefined(range: (f64, f64)) -> Self {
        Self { linear: LinearScale::undefined(range) }
    }

    /// Interval whose size is closest (by ratio) to `span / count`. `None`
    /// below one second; capped at a week.
    pub fn tick_interval(span_ms: f64, count: usize) -> Option<f64> {
        let target = span_ms / count.max(1) as f64;
        let i = TIME_INTERVALS.partition_point(|&d| d <= target);
        match i {
            0 => None,
            i if i == TIME_INTERVALS.len() => Some(WEEK),
            i => {
                let (prev, next) = (TIME_INTERVALS[i - 1], TIME_INTERVALS[i]);
                Some(if target / prev < next / target { prev } else { next })
            }
        }
    }
}

impl ScaleTransform for TimeScale {
    fn to_px(&self, ms: f64) -> f64 { self.linear.to_px(ms) }
    fn from_px(&self, px: f64) -> f64 { self.linear.from_px(px) }
    fn domain(&self) -> (f64, f64) { self.linear.domain() }
    fn range(&self) -> (f64, f64) { self.linear.range() }

    fn ticks(&self, count: usize) -> Vec<f64> {
        let (mut lo, mut hi) = self.linear.domain();
        if !lo.is_finite() || !hi.is_finite() || count == 0 {
            return Vec::new();
        }
        if hi < lo {
            std::mem::swap(&mut lo, &mut hi);
        }
        // past weekly steps: 1/2/5 multiples of a day
        if (hi - lo) / count as f64 > WEEK {
            return nice_ticks(lo / DAY, hi / DAY, count).into_iter().map(|d| d * DAY).collect();
        }
        match Self::tick_interval(hi - lo, count) {
            // sub-second spans: plain numeric ticks over milliseconds
            None => nice_ticks(lo, hi, count),
            Some(step) => {
                let first = (lo / step).ceil() as i64;
                let last = (hi / step).floor() as i64;
                (first..=last).map(|k| k as f64 * step).collect()
            }
        }
    }
}

/// Step between ticks as (first index, last index, increment); a negative
/// increment means "divide by its magnitude".
fn tick_spec(start: f64, stop: f64, count: usize) -> (i64, i64, f64) {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    if power < 0.0 {
        let inc = 10f64.powf(-power) / factor;
        let mut i1 = (start * inc).round() as i64;
        let mut i2 = (stop * inc).round() as i64;
        if (i1 as f64) / inc < start { i1 += 1; }
        if (i2 as f64) / inc > stop { i2 -= 1; }
        (i1, i2, -inc)
    } else {
        let inc = 10f64.powf(power) * factor;
        let mut i1 = (start / inc).round() as i64;
        let mut i2 = (stop / inc).round() as i64;
        if (i1 as f64) * inc < start { i1 += 1; }
        if (i2 as f64) * inc > stop { i2 -= 1; }
        (i1, i2, inc)
    }
}

/// Ticks at 1, 2 or 5 times a power of ten, ascending, inside `[start, stop]`
/// (either order).
pub fn nice_ticks(start: f64, stop: f64, count: usize) -> Vec<f64> {
    if !start.is_finite() || !stop.is_finite() || count == 0 {
        return Vec::new();
    }
    if start == stop {
        return vec![start];
    }
    let (lo, hi) = if start < stop { (start, stop) } else { (stop, start) };
    let (i1, i2, inc) = tick_spec(lo, hi, count);
    if i2 < i1 {
        return Vec::new();
    }
    (i1..=i2)
        .map(|i| if inc < 0.0 { i as f64 / -inc } else { i as f64 * inc })
        .collect()
}

/// Fixed two-way categorical mapping from allegation status to a color.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorScale {
    entries: Vec<(Category, Rgba)>,
}

/// Legend categories, in legend order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Category {
    DopingAllegations,
    NoDopingAllegations,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Self::DopingAllegations => "Doping Allegations",
            Self::NoDopingAllegations => "No Doping Allegations",
        }
    }

    pub fn of(has_allegation: bool) -> Self {
        if has_allegation { Self::DopingAllegations } else { Self::NoDopingAllegations }
    }
}

impl ColorScale {
    pub fn new(highlight: Rgba, neutral: Rgba) -> Self {
        Self {
            entries: vec![
                (Category::DopingAllegations, highlight),
                (Category::NoDopingAllegations, neutral),
            ],
        }
    }

    pub fn color(&self, category: Category) -> Rgba {
        self.entries
            .iter()
            .find(|(c, _)| *c == category)
            .map(|(_, color)| *color)
            .unwrap_or(Rgba::TRANSPARENT)
    }

    /// Domain/range pairs in legend order.
    pub fn entries(&self) -> &[(Category, Rgba)] {
        &self.entries
    }
}
