// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math and hit testing.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn offset(&self, dx: f64, dy: f64) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }

    pub fn distance_sq(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

/// True when `p` lies inside (or on) the circle at `center` with radius `r`.
/// NaN centers never contain anything.
#[inline]
pub fn circle_contains(center: Point, r: f64, p: Point) -> bool {
    center.distance_sq(p) <= r * r
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}
