// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Domain span limits.
//!
//! Two flavors exist. The symmetric clamps ([`increase_to_span`],
//! [`decrease_to_span`]) grow or shrink a domain about its center and are used
//! while pointers are down. The anchored clamps ([`clamp_to_min_span`],
//! [`clamp_to_max_span`]) are used for wheel zoom: each edge is extrapolated
//! along the path it took from the previous domain, so the point under the
//! cursor stays put when a limit kicks in.
//!
//! Domains may be decreasing; widths are measured as absolute values and
//! orientation is preserved.

use kurbo::Point;

use crate::affine::line_through;

#[inline]
fn width(domain: [f64; 2]) -> f64 {
    (domain[1] - domain[0]).abs()
}

#[inline]
fn pad(domain: [f64; 2], half: f64) -> [f64; 2] {
    let [d0, d1] = domain;
    if d1 >= d0 {
        [d0 - half, d1 + half]
    } else {
        [d0 + half, d1 - half]
    }
}

/// Widens `domain` symmetrically until it spans at least `min_span`.
#[must_use]
pub fn increase_to_span(min_span: f64, domain: [f64; 2]) -> [f64; 2] {
    let w = width(domain);
    if w < min_span {
        pad(domain, (min_span - w) / 2.0)
    } else {
        domain
    }
}

/// Narrows `domain` symmetrically until it spans at most `max_span`.
#[must_use]
pub fn decrease_to_span(max_span: f64, domain: [f64; 2]) -> [f64; 2] {
    let w = width(domain);
    if w > max_span {
        pad(domain, -(w - max_span) / 2.0)
    } else {
        domain
    }
}

/// Moves each edge of `domain` along its line from `previous` to the point
/// where the domain spans exactly `span`.
///
/// Falls back to `symmetric` when the two domains have the same width, since
/// no line through them exists.
fn extrapolate_to_span(
    span: f64,
    previous: [f64; 2],
    domain: [f64; 2],
    symmetric: fn(f64, [f64; 2]) -> [f64; 2],
) -> [f64; 2] {
    let (w_prev, w) = (width(previous), width(domain));
    let start = line_through(Point::new(w_prev, previous[0]), Point::new(w, domain[0]));
    let end = line_through(Point::new(w_prev, previous[1]), Point::new(w, domain[1]));
    match (start, end) {
        (Some(start), Some(end)) => [start.at(span), end.at(span)],
        _ => symmetric(span, domain),
    }
}

/// Widens `domain` to `min_span`, keeping the zoom focus implied by `previous`.
#[must_use]
pub fn clamp_to_min_span(min_span: f64, previous: [f64; 2], domain: [f64; 2]) -> [f64; 2] {
    if width(domain) < min_span {
        extrapolate_to_span(min_span, previous, domain, increase_to_span)
    } else {
        domain
    }
}

/// Narrows `domain` to `max_span`, keeping the zoom focus implied by `previous`.
#[must_use]
pub fn clamp_to_max_span(max_span: f64, previous: [f64; 2], domain: [f64; 2]) -> [f64; 2] {
    if width(domain) > max_span {
        extrapolate_to_span(max_span, previous, domain, decrease_to_span)
    } else {
        domain
    }
}
