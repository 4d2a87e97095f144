//! Monotone cubic interpolation along x, and path measurement.
//!
//! The curve passes through every point and never overshoots between two
//! neighbours, so a run of rising temperatures draws as a rising line.
//! Tangents use the Fritsch-Carlson limiter; each span becomes one cubic
//! Bézier segment.

use std::fmt::Write;

/// Samples per cubic segment when measuring arc length.
const LENGTH_SAMPLES: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn distance(self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Segment {
    Line(Point),
    Cubic { c1: Point, c2: Point, to: Point },
}

/// A path made of one move-to followed by line or cubic segments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonotonePath {
    start: Option<Point>,
    segments: Vec<Segment>,
}

impl MonotonePath {
    /// Interpolate through `points` in the order given.
    pub fn through(points: &[Point]) -> Self {
        let Some(&start) = points.first() else {
            return Self::default();
        };
        let segments = match points.len() {
            1 => Vec::new(),
            2 => vec![Segment::Line(points[1])],
            n => {
                let mut tangents = vec![0.0; n];
                for i in 1..n - 1 {
                    tangents[i] = interior_slope(points[i - 1], points[i], points[i + 1]);
                }
                tangents[0] = end_slope(points[0], points[1], tangents[1]);
                tangents[n - 1] = end_slope(points[n - 2], points[n - 1], tangents[n - 2]);

                points
                    .windows(2)
                    .zip(tangents.windows(2))
                    .map(|(p, t)| bezier(p[0], p[1], t[0], t[1]))
                    .collect()
            }
        };
        Self {
            start: Some(start),
            segments,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// SVG path data, e.g. `M0,150C33.33,140,66.67,120,100,110`.
    pub fn to_svg(&self) -> String {
        let Some(start) = self.start else {
            return String::new();
        };
        let mut d = String::new();
        let _ = write!(d, "M{},{}", num(start.x), num(start.y));
        for segment in &self.segments {
            let _ = match segment {
                Segment::Line(to) => write!(d, "L{},{}", num(to.x), num(to.y)),
                Segment::Cubic { c1, c2, to } => write!(
                    d,
                    "C{},{},{},{},{},{}",
                    num(c1.x),
                    num(c1.y),
                    num(c2.x),
                    num(c2.y),
                    num(to.x),
                    num(to.y)
                ),
            };
        }
        d
    }

    /// Total arc length in pixels. Cubic segments are measured by sampling,
    /// which slightly undershoots, so the result is rounded up.
    pub fn length(&self) -> f64 {
        let Some(mut cursor) = self.start else {
            return 0.0;
        };
        let mut total = 0.0;
        for segment in &self.segments {
            match *segment {
                Segment::Line(to) => {
                    total += cursor.distance(to);
                    cursor = to;
                }
                Segment::Cubic { c1, c2, to } => {
                    let mut prev = cursor;
                    for step in 1..=LENGTH_SAMPLES {
                        let t = step as f64 / LENGTH_SAMPLES as f64;
                        let p = cubic_at(cursor, c1, c2, to, t);
                        total += prev.distance(p);
                        prev = p;
                    }
                    cursor = to;
                }
            }
        }
        total.ceil()
    }
}

/// Tangent at `p1` from the secants on either side, limited so the
/// interpolant stays monotone. Coincident x positions give a flat tangent.
fn interior_slope(p0: Point, p1: Point, p2: Point) -> f64 {
    let h0 = p1.x - p0.x;
    let h1 = p2.x - p1.x;
    if h0 == 0.0 || h1 == 0.0 || h0 + h1 == 0.0 {
        return 0.0;
    }
    let s0 = (p1.y - p0.y) / h0;
    let s1 = (p2.y - p1.y) / h1;
    let p = (s0 * h1 + s1 * h0) / (h0 + h1);
    let slope = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
    if slope.is_finite() {
        slope
    } else {
        0.0
    }
}

/// Tangent at an end point, from the one-sided three-point estimate.
fn end_slope(p0: Point, p1: Point, t: f64) -> f64 {
    let h = p1.x - p0.x;
    if h == 0.0 {
        t
    } else {
        (3.0 * (p1.y - p0.y) / h - t) / 2.0
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 {
        -1.0
    } else {
        1.0
    }
}

fn bezier(p0: Point, p1: Point, t0: f64, t1: f64) -> Segment {
    let dx = (p1.x - p0.x) / 3.0;
    Segment::Cubic {
        c1: Point::new(p0.x + dx, p0.y + dx * t0),
        c2: Point::new(p1.x - dx, p1.y - dx * t1),
        to: p1,
    }
}

fn cubic_at(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let u = 1.0 - t;
    let (a, b, c, d) = (u * u * u, 3.0 * u * u * t, 3.0 * u * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p1.x,
        a * p0.y + b * c1.y + c * c2.y + d * p1.y,
    )
}

/// Two decimals, trailing zeros trimmed.
fn num(v: f64) -> String {
    let s = format!("{:.2}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}
