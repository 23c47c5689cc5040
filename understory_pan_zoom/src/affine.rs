// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scale-and-translate transforms derived from bounding-box changes.
//!
//! A gesture leg is described by two boxes: the box spanned by the pointers
//! when the leg started and the box they span now. Per axis, the change is a
//! 1D affine map `current = k * initial + t`. Pixel ranges are then pushed
//! through the *inverse* of that map: when the pointers spread apart (`k > 1`)
//! the range edges move inwards in snapshot space and the visible domain
//! shrinks.

use kurbo::{Point, Rect};

/// Divisor used in place of a zero-width initial span, and floor for `k`.
pub const DEGENERATE_EPSILON: f64 = 1e-8;

/// 1D affine map `current = k * initial + t`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisTransform {
    /// Scale factor.
    pub k: f64,
    /// Translation, in the units of `current`.
    pub t: f64,
}

impl AxisTransform {
    /// The identity map.
    pub const IDENTITY: Self = Self { k: 1.0, t: 0.0 };

    /// Solves for the map taking `[init_min, init_max]` onto `[cur_min, cur_max]`.
    ///
    /// Both endpoint pairs satisfy `cur = k * init + t`. When the initial span
    /// is zero (a single pointer, or pointers sharing a coordinate) both spans
    /// are widened by [`DEGENERATE_EPSILON`], so a pure translation keeps
    /// `k == 1` and a pinch out of a point yields a large but finite `k`.
    ///
    /// ```rust
    /// use understory_pan_zoom::AxisTransform;
    ///
    /// let kt = AxisTransform::between(0.0, 10.0, 20.0, 40.0);
    /// assert_eq!((kt.k, kt.t), (2.0, 20.0));
    ///
    /// let point = AxisTransform::between(1.0, 1.0, 2.0, 2.0);
    /// assert_eq!((point.k, point.t), (1.0, 1.0));
    /// ```
    #[must_use]
    pub fn between(init_min: f64, init_max: f64, cur_min: f64, cur_max: f64) -> Self {
        let init_span = init_max - init_min;
        let cur_span = cur_max - cur_min;
        let k = if init_span == 0.0 {
            (cur_span + DEGENERATE_EPSILON) / DEGENERATE_EPSILON
        } else {
            cur_span / init_span
        };
        let k = k.max(DEGENERATE_EPSILON);
        Self {
            k,
            t: cur_min - k * init_min,
        }
    }

    /// Applies the map to a value.
    #[must_use]
    #[inline]
    pub fn apply(self, value: f64) -> f64 {
        self.k * value + self.t
    }

    /// Applies the inverse map, `(r - t) / k`, to both ends of a range.
    ///
    /// ```rust
    /// use understory_pan_zoom::AxisTransform;
    ///
    /// let kt = AxisTransform { k: 2.0, t: 50.0 };
    /// assert_eq!(kt.invert_range([-100.0, 100.0]), [-75.0, 25.0]);
    /// ```
    #[must_use]
    pub fn invert_range(self, range: [f64; 2]) -> [f64; 2] {
        range.map(|r| (r - self.t) / self.k)
    }
}

/// Per-axis transforms between two bounding boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxTransform {
    /// Horizontal component.
    pub x: AxisTransform,
    /// Vertical component.
    pub y: AxisTransform,
}

impl BoxTransform {
    /// Solves both axes of the change from `initial` to `current`.
    #[must_use]
    pub fn between(initial: Rect, current: Rect) -> Self {
        Self {
            x: AxisTransform::between(initial.x0, initial.x1, current.x0, current.x1),
            y: AxisTransform::between(initial.y0, initial.y1, current.y0, current.y1),
        }
    }
}

/// A non-vertical line `y = m * x + b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    /// Slope.
    pub m: f64,
    /// Intercept.
    pub b: f64,
}

impl Line {
    /// Evaluates the line at `x`.
    #[must_use]
    #[inline]
    pub fn at(self, x: f64) -> f64 {
        self.m * x + self.b
    }
}

/// Fits the line through two points.
///
/// Returns `None` when both points share an x coordinate, since no finite
/// slope exists.
#[must_use]
pub fn line_through(p1: Point, p2: Point) -> Option<Line> {
    let dx = p2.x - p1.x;
    if dx == 0.0 {
        return None;
    }
    let m = (p2.y - p1.y) / dx;
    Some(Line { m, b: p1.y - m * p1.x })
}
