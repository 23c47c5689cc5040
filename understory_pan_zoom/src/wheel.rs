// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Discrete zoom steps from wheel input.
//!
//! Unlike pointer gestures, a wheel step is a single event: it is computed
//! directly against the live scales without any origin snapshot.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_pan_zoom::{
//!     PanZoomOptions, WheelDeltaMode, normalize_wheel_delta, wheel_zoom_ratio, zoom_scales,
//! };
//! use understory_scale::{LinearScale, Scale};
//!
//! let mut x = LinearScale::new([0.0, 100.0], [0.0, 1000.0]);
//! let mut y = LinearScale::new([0.0, 100.0], [1000.0, 0.0]);
//!
//! // One notch "up" in line mode zooms in a little.
//! let step = normalize_wheel_delta(-3.0, WheelDeltaMode::Line, 1.0);
//! let ratio = wheel_zoom_ratio(step);
//! assert!(ratio > 1.0);
//!
//! let cursor = Point::new(250.0, 500.0);
//! assert!(zoom_scales(&mut x, &mut y, cursor, ratio, &PanZoomOptions::default()));
//! // The value under the cursor did not move.
//! assert!((x.apply(25.0) - 250.0).abs() < 1e-9);
//! ```

use kurbo::Point;
use understory_scale::Scale;

use crate::affine::DEGENERATE_EPSILON;
use crate::constrain::constrain;
use crate::options::{Axis, PanZoomOptions};
use crate::span::{clamp_to_max_span, clamp_to_min_span};

/// Zoom step per pixel of wheel delta.
pub const PIXEL_DELTA_FACTOR: f64 = 0.002;

/// Zoom step per line (or page) of wheel delta.
pub const LINE_DELTA_FACTOR: f64 = 0.05;

/// Unit of a raw wheel delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WheelDeltaMode {
    /// Delta in pixels (trackpads, most browsers).
    #[default]
    Pixel,
    /// Delta in lines (classic notched wheels).
    Line,
    /// Delta in pages.
    Page,
}

impl WheelDeltaMode {
    /// Maps a DOM `WheelEvent.deltaMode` value. Unknown values count as pixels.
    #[must_use]
    pub fn from_dom(mode: u32) -> Self {
        match mode {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

/// Maps a raw wheel delta to a dimensionless zoom step.
///
/// Positive deltas (wheel down / pull) give negative steps, i.e. zoom out.
/// `multiplier` lets hosts speed up zooming, for example while a modifier key
/// is held; pass `1.0` otherwise.
#[must_use]
pub fn normalize_wheel_delta(delta: f64, mode: WheelDeltaMode, multiplier: f64) -> f64 {
    let factor = match mode {
        WheelDeltaMode::Pixel => PIXEL_DELTA_FACTOR,
        WheelDeltaMode::Line | WheelDeltaMode::Page => LINE_DELTA_FACTOR,
    };
    -delta * factor * multiplier
}

/// Turns a normalized zoom step into a zoom ratio, `2^step`.
#[must_use]
pub fn wheel_zoom_ratio(step: f64) -> f64 {
    libm::exp2(step)
}

/// Zooms both scales by `zoom_ratio` about `center` (in pixels).
///
/// `zoom_ratio > 1` zooms in. Each pixel range changes its span by
/// `(1 - zoom_ratio) * span`, split between the two edges by where `center`
/// sits in the range, so the new span is `span * (2 - zoom_ratio)`. Ratios
/// of `2` or more would collapse or invert the range; the factor is floored
/// at [`DEGENERATE_EPSILON`] instead.
///
/// The domain values under `center` stay under it unless a span limit or the
/// fence has to move them. Span limits are
/// anchored to the previous domain so that the cursor stays the zoom focus
/// even when clamped.
///
/// Returns `false` without touching the scales when the ratio is `1` or is
/// not a finite positive number.
pub fn zoom_scales<S: Scale>(
    x_scale: &mut S,
    y_scale: &mut S,
    center: Point,
    zoom_ratio: f64,
    options: &PanZoomOptions,
) -> bool {
    if zoom_ratio == 1.0 {
        return false;
    }
    if !(zoom_ratio.is_finite() && zoom_ratio > 0.0) {
        log::debug!("ignoring wheel zoom with ratio {zoom_ratio}");
        return false;
    }

    let x_domain = zoom_axis(x_scale, center.x, zoom_ratio, Axis::X, options);
    let y_domain = zoom_axis(y_scale, center.y, zoom_ratio, Axis::Y, options);
    let (x_domain, y_domain) = constrain(x_domain, y_domain, &options.constraint, x_scale, y_scale);

    log::trace!("wheel zoom x{zoom_ratio:.4} at {center:?}: x={x_domain:?} y={y_domain:?}");

    if !options.lock_x_axis {
        x_scale.set_domain(x_domain);
    }
    if !options.lock_y_axis {
        y_scale.set_domain(y_domain);
    }
    true
}

fn zoom_axis<S: Scale>(
    scale: &S,
    center: f64,
    zoom_ratio: f64,
    axis: Axis,
    options: &PanZoomOptions,
) -> [f64; 2] {
    let previous = scale.domain();
    let factor = (2.0 - zoom_ratio).max(DEGENERATE_EPSILON);
    let range = scale.range().map(|r| center + (r - center) * factor);
    let domain = range.map(|r| scale.invert(r));
    let domain = match options.min_zoom.span(axis) {
        Some(max_span) => clamp_to_max_span(max_span, previous, domain),
        None => domain,
    };
    match options.max_zoom.span(axis) {
        Some(min_span) => clamp_to_min_span(min_span, previous, domain),
        None => domain,
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;
    use understory_scale::{LinearScale, Scale};

    use super::{WheelDeltaMode, normalize_wheel_delta, wheel_zoom_ratio, zoom_scales};
    use crate::options::{Fence, PanZoomOptions, SpanLimits};

    fn scales() -> (LinearScale, LinearScale) {
        (
            LinearScale::new([0.0, 100.0], [0.0, 1000.0]),
            LinearScale::new([0.0, 100.0], [1000.0, 0.0]),
        )
    }

    fn assert_domain(actual: [f64; 2], expected: [f64; 2]) {
        assert!(
            (actual[0] - expected[0]).abs() < 1e-9 && (actual[1] - expected[1]).abs() < 1e-9,
            "{actual:?} != {expected:?}"
        );
    }

    #[test]
    fn zoom_in_about_cursor() {
        let (mut x, mut y) = scales();
        let applied = zoom_scales(
            &mut x,
            &mut y,
            Point::new(250.0, 500.0),
            1.5,
            &PanZoomOptions::default(),
        );
        assert!(applied);
        assert_domain(x.domain(), [12.5, 62.5]);
        assert_domain(y.domain(), [25.0, 75.0]);
        assert!((x.apply(25.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn one_pixel_step_scales_span_by_two_minus_ratio() {
        let (mut x, mut y) = scales();
        let ratio = wheel_zoom_ratio(normalize_wheel_delta(-100.0, WheelDeltaMode::Pixel, 1.0));
        zoom_scales(&mut x, &mut y, Point::new(250.0, 500.0), ratio, &PanZoomOptions::default());
        let [x0, x1] = x.domain();
        let expected = 100.0 * (2.0 - libm::exp2(0.2));
        assert!((x1 - x0 - expected).abs() < 1e-9, "span {}", x1 - x0);
        assert!((x.apply(25.0) - 250.0).abs() < 1e-9);
    }

    #[test]
    fn large_ratios_stay_finite_and_ordered() {
        for ratio in [2.0, 3.0, 1e6] {
            let (mut x, mut y) = scales();
            let options = PanZoomOptions::default();
            assert!(zoom_scales(&mut x, &mut y, Point::new(250.0, 500.0), ratio, &options));
            let [x0, x1] = x.domain();
            assert!(x0.is_finite() && x1.is_finite());
            assert!(x0 < x1, "{x0} >= {x1}");
            assert!((x0 - 25.0).abs() < 1e-6 && (x1 - 25.0).abs() < 1e-6);
        }
    }

    #[test]
    fn unit_and_invalid_ratios_are_ignored() {
        let (mut x, mut y) = scales();
        let options = PanZoomOptions::default();
        let center = Point::new(10.0, 10.0);
        assert!(!zoom_scales(&mut x, &mut y, center, 1.0, &options));
        assert!(!zoom_scales(&mut x, &mut y, center, 0.0, &options));
        assert!(!zoom_scales(&mut x, &mut y, center, f64::NAN, &options));
        assert!(!zoom_scales(&mut x, &mut y, center, f64::INFINITY, &options));
        assert_eq!(x.domain(), [0.0, 100.0]);
        assert_eq!(y.domain(), [0.0, 100.0]);
    }

    #[test]
    fn zoomed_in_limit_keeps_cursor_focus() {
        let (mut x, mut y) = scales();
        let options = PanZoomOptions::default().with_max_zoom(SpanLimits {
            x_span: Some(80.0),
            y_span: None,
        });
        zoom_scales(&mut x, &mut y, Point::new(250.0, 500.0), 1.5, &options);
        assert_domain(x.domain(), [5.0, 85.0]);
        assert_domain(y.domain(), [25.0, 75.0]);
    }

    #[test]
    fn zoomed_out_limit_keeps_cursor_focus() {
        let (mut x, mut y) = scales();
        let options = PanZoomOptions::default().with_min_zoom(SpanLimits::new(150.0, 150.0));
        zoom_scales(&mut x, &mut y, Point::new(250.0, 500.0), 0.25, &options);
        assert_domain(x.domain(), [-12.5, 137.5]);
        assert_domain(y.domain(), [-25.0, 125.0]);
    }

    #[test]
    fn inverted_span_limits_let_the_smallest_span_win() {
        let (mut x, mut y) = scales();
        // Smallest allowed span 80, largest allowed span 50.
        let options = PanZoomOptions::default()
            .with_max_zoom(SpanLimits::new(80.0, 80.0))
            .with_min_zoom(SpanLimits::new(50.0, 50.0));
        zoom_scales(&mut x, &mut y, Point::new(500.0, 500.0), 1.5, &options);
        assert_domain(x.domain(), [10.0, 90.0]);
    }

    #[test]
    fn zoom_out_stops_at_fence() {
        let (mut x, mut y) = scales();
        let options = PanZoomOptions::default().with_constraint(Fence::x(0.0, 100.0));
        zoom_scales(&mut x, &mut y, Point::new(250.0, 500.0), 0.5, &options);
        assert_eq!(x.domain(), [0.0, 100.0]);
        assert_domain(y.domain(), [-25.0, 125.0]);
    }

    #[test]
    fn locked_axis_is_not_zoomed() {
        let (mut x, mut y) = scales();
        let options = PanZoomOptions::default().with_axis_locks(false, true);
        zoom_scales(&mut x, &mut y, Point::new(500.0, 500.0), 1.75, &options);
        assert_domain(x.domain(), [37.5, 62.5]);
        assert_eq!(y.domain(), [0.0, 100.0]);
    }

    #[test]
    fn wheel_delta_normalization() {
        assert!((normalize_wheel_delta(100.0, WheelDeltaMode::Pixel, 1.0) + 0.2).abs() < 1e-12);
        assert!((normalize_wheel_delta(3.0, WheelDeltaMode::Line, 1.0) + 0.15).abs() < 1e-12);
        assert!((normalize_wheel_delta(-1.0, WheelDeltaMode::Page, 2.0) - 0.1).abs() < 1e-12);
        assert!((wheel_zoom_ratio(1.0) - 2.0).abs() < 1e-12);
        assert_eq!(wheel_zoom_ratio(0.0), 1.0);
        assert!(wheel_zoom_ratio(normalize_wheel_delta(120.0, WheelDeltaMode::Pixel, 1.0)) < 1.0);
    }

    #[test]
    fn dom_delta_modes() {
        assert_eq!(WheelDeltaMode::from_dom(0), WheelDeltaMode::Pixel);
        assert_eq!(WheelDeltaMode::from_dom(1), WheelDeltaMode::Line);
        assert_eq!(WheelDeltaMode::from_dom(2), WheelDeltaMode::Page);
        assert_eq!(WheelDeltaMode::from_dom(9), WheelDeltaMode::Pixel);
    }
}
