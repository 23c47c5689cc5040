// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fence clamping.
//!
//! A [`Fence`] is given in domain units but enforced in pixel space: the
//! proposed domain is pushed through the live (pre-update) scale, corrected
//! against the fence's pixel extent, then inverted back. Pixel space is where
//! the fence is linear, whatever the scale's shape.
//!
//! Per axis the rules are:
//!
//! 1. A proposal at least as wide as a two-sided fence snaps to the fence.
//! 2. A zoom (the pixel span changed) that protrudes past one edge slides back
//!    against that edge and keeps its new span.
//! 3. A pan that protrudes slides back against that edge and keeps the
//!    *previous* span, so a pan never resizes the domain.
//!
//! With the span narrower than the fence only one edge can protrude at a time.

use understory_scale::Scale;

use crate::options::{Axis, Fence};

/// Relative tolerance under which two pixel spans count as equal.
pub const SPAN_TOLERANCE: f64 = 1e-9;

/// Clamps both proposed domains against `fence`.
///
/// `x_scale` and `y_scale` must still hold the domains the proposals are
/// replacing; the previous pixel span is derived from them.
///
/// ```rust
/// use understory_pan_zoom::{Fence, constrain};
/// use understory_scale::LinearScale;
///
/// let x = LinearScale::new([0.0, 100.0], [0.0, 1000.0]);
/// let y = LinearScale::new([0.0, 100.0], [500.0, 0.0]);
/// let fence = Fence::x(0.0, 100.0);
///
/// // Panning 10 units past the left edge slides back against it.
/// let (x_domain, y_domain) = constrain([-10.0, 90.0], [5.0, 105.0], &fence, &x, &y);
/// assert_eq!(x_domain, [0.0, 100.0]);
/// assert_eq!(y_domain, [5.0, 105.0]);
/// ```
#[must_use]
pub fn constrain<S: Scale>(
    x_domain: [f64; 2],
    y_domain: [f64; 2],
    fence: &Fence,
    x_scale: &S,
    y_scale: &S,
) -> ([f64; 2], [f64; 2]) {
    (
        constrain_axis(x_domain, fence.bounds(Axis::X), x_scale),
        constrain_axis(y_domain, fence.bounds(Axis::Y), y_scale),
    )
}

/// Clamps one proposed domain against `(min, max)` domain bounds.
///
/// Returns `domain` untouched when no bound is set or nothing protrudes.
#[must_use]
pub fn constrain_axis<S: Scale>(
    domain: [f64; 2],
    bounds: (Option<f64>, Option<f64>),
    scale: &S,
) -> [f64; 2] {
    let (min, max) = bounds;
    if min.is_none() && max.is_none() {
        return domain;
    }

    let current = scale.domain();
    let [r0, r1] = scale.range();
    let previous = current.map(|d| scale.apply(d));
    let proposed = domain.map(|d| scale.apply(d));

    let min_px = min.map(|v| scale.apply(v));
    let max_px = max.map(|v| scale.apply(v));
    let (fence_lo, fence_hi) = match (min_px, max_px) {
        (Some(a), Some(b)) => (Some(a.min(b)), Some(a.max(b))),
        _ if (r1 - r0) * (current[1] - current[0]) >= 0.0 => (min_px, max_px),
        _ => (max_px, min_px),
    };

    let lo = proposed[0].min(proposed[1]);
    let hi = proposed[0].max(proposed[1]);
    let span = hi - lo;
    let previous_span = (previous[1] - previous[0]).abs();

    let clamped = match (fence_lo, fence_hi) {
        (Some(flo), Some(fhi)) if span >= fhi - flo => Some((flo, fhi)),
        _ => {
            let zoomed = (span - previous_span).abs() > SPAN_TOLERANCE * previous_span.max(1.0);
            let mut width = if zoomed { span } else { previous_span };
            if let (Some(flo), Some(fhi)) = (fence_lo, fence_hi) {
                width = width.min(fhi - flo);
            }
            match (fence_lo, fence_hi) {
                (Some(flo), _) if lo < flo => Some((flo, flo + width)),
                (_, Some(fhi)) if hi > fhi => Some((fhi - width, fhi)),
                _ => None,
            }
        }
    };

    let Some((lo, hi)) = clamped else {
        return domain;
    };
    let (start, end) = if proposed[0] <= proposed[1] {
        (lo, hi)
    } else {
        (hi, lo)
    };
    [scale.invert(start), scale.invert(end)]
}
