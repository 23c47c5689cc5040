// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear scale.

use crate::{Scale, lerp, normalize};

/// Linear scale: `range = a * domain + b`.
///
/// Both endpoints of the domain map exactly onto the endpoints of the range
/// (and back), so committing an unchanged domain through [`Scale::invert`] is
/// lossless.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearScale {
    domain: [f64; 2],
    range: [f64; 2],
}

impl LinearScale {
    /// Creates a linear scale mapping `domain` onto `range`.
    #[must_use]
    pub fn new(domain: [f64; 2], range: [f64; 2]) -> Self {
        Self { domain, range }
    }

    /// Replaces the range, for example after the plot area was resized.
    pub fn set_range(&mut self, range: [f64; 2]) {
        self.range = range;
    }
}

impl Default for LinearScale {
    /// The unit scale `[0, 1] -> [0, 1]`.
    fn default() -> Self {
        Self::new([0.0, 1.0], [0.0, 1.0])
    }
}

impl Scale for LinearScale {
    #[inline]
    fn apply(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        lerp(r0, r1, normalize(value, d0, d1))
    }

    #[inline]
    fn invert(&self, value: f64) -> f64 {
        let [d0, d1] = self.domain;
        let [r0, r1] = self.range;
        lerp(d0, d1, normalize(value, r0, r1))
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
