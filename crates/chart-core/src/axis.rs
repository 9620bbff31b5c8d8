// File: crates/chart-core/src/axis.rs
// Summary: Axis layout (tick positions, labels, hand-placed title) for left and bottom axes.

use crate::geometry::Point;
use crate::scale::ScaleTransform;
use crate::time::format_minutes_seconds;

/// Target tick count handed to the scale.
pub const TICK_COUNT: usize = 10;
pub const TICK_SIZE: f64 = 6.0;
pub const TICK_PADDING: f64 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    Left,
    Bottom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFormat {
    /// `MM:SS` of an instant in milliseconds.
    MinutesSeconds,
    /// Rounded integer, no grouping separators.
    Integer,
}

impl TickFormat {
    pub fn format(&self, v: f64) -> String {
        match self {
            Self::MinutesSeconds => format_minutes_seconds(v),
            Self::Integer if v.is_finite() => format!("{}", v.round() as i64),
            Self::Integer => "NaN".to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel position along the axis.
    pub offset: f64,
    pub label: String,
}

/// Axis title placed by fixed offsets relative to the axis group.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTitle {
    pub text: String,
    pub x: f64,
    pub y: f64,
    /// Degrees, applied before `x`/`y`.
    pub rotate: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub id: &'static str,
    pub orient: Orient,
    /// Translation of the axis group inside the bounds.
    pub origin: Point,
    /// Pixel extent of the axis line.
    pub range: (f64, f64),
    pub ticks: Vec<Tick>,
    pub tick_size: f64,
    pub tick_padding: f64,
    pub title: AxisTitle,
}

impl Axis {
    fn build<S: ScaleTransform>(
        id: &'static str,
        orient: Orient,
        origin: Point,
        scale: &S,
        format: TickFormat,
        title: AxisTitle,
    ) -> Self {
        let ticks = scale
            .ticks(TICK_COUNT)
            .into_iter()
            .map(|value| Tick { value, offset: scale.to_px(value), label: format.format(value) })
            .collect();
        Self {
            id,
            orient,
            origin,
            range: scale.range(),
            ticks,
            tick_size: TICK_SIZE,
            tick_padding: TICK_PADDING,
            title,
        }
    }

    /// Left axis at the bounds origin. The title is rotated -90 degrees, so
    /// `x` runs down the axis and `y` away from it.
    pub fn left<S: ScaleTransform>(
        scale: &S,
        format: TickFormat,
        title: impl Into<String>,
        bounded_height: f64,
        chart_height: f64,
    ) -> Self {
        let title = AxisTitle {
            text: title.into(),
            x: -(bounded_height / 2.0),
            y: -0.09 * chart_height,
            rotate: -90.0,
        };
        Self::build("y-axis", Orient::Left, Point::new(0.0, 0.0), scale, format, title)
    }

    /// Bottom axis along the lower edge of the bounds.
    pub fn bottom<S: ScaleTransform>(
        scale: &S,
        format: TickFormat,
        title: impl Into<String>,
        bounded_width: f64,
        bounded_height: f64,
        chart_height: f64,
    ) -> Self {
        let title = AxisTitle {
            text: title.into(),
            x: bounded_width / 2.0,
            y: 0.07 * chart_height,
            rotate: 0.0,
        };
        Self::build("x-axis", Orient::Bottom, Point::new(0.0, bounded_height), scale, format, title)
    }

    /// Tick mark end point and label anchor, relative to the axis group.
    pub fn tick_geometry(&self, tick: &Tick) -> (Point, Point, Point) {
        match self.orient {
            Orient::Left => (
                Point::new(0.0, tick.offset),
                Point::new(-self.tick_size, tick.offset),
                Point::new(-(self.tick_size + self.tick_padding), tick.offset),
            ),
            Orient::Bottom => (
                Point::new(tick.offset, 0.0),
                Point::new(tick.offset, self.tick_size),
                Point::new(tick.offset, self.tick_size + self.tick_padding),
            ),
        }
    }
}
