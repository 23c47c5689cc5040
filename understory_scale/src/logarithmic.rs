// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Logarithmic scale.

use crate::{Scale, lerp, normalize};

/// Logarithmic scale: linear in `ln(domain)`.
///
/// The domain must be strictly positive; non-positive values map to `NaN`.
/// Pixel-space operations on top of this scale (fences, zoom about a point)
/// remain linear in pixels even though the domain is not.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LogScale {
    /// Creates a logarithmic scale mapping `domain` onto `range`.
    #[must_use]
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Replaces the range.
    pub fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }
}

impl Scale for LogScale {
    fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = normalize(libm::log(value), libm::log(d0), libm::log(d1));
        lerp(r0, r1, t)
    }

    fn invert(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        let t = normalize(value, r0, r1);
        // exp(ln(x)) is not always x; keep the endpoints exact.
        if t == 0.0 {
            d0
        } else if t == 1.0 {
            d1
        } else {
            libm::exp(lerp(libm::log(d0), libm::log(d1), t))
        }
    }

    fn domain(&self) -> [f64; 2] {
        self.domain
    }

    fn set_domain(&mut self, domain: [f64; 2]) {
        self.domain = domain;
    }

    fn range(&self) -> [f64; 2] {
        self.range
    }
}
