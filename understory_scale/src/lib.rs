// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scale --heading-base-level=0

//! Understory Scale: a headless numeric scale capability.
//!
//! A *scale* maps a movable numeric **domain** (data units) onto a fixed
//! **range** (typically device pixels) and back. Interaction layers such as
//! `understory_pan_zoom` only ever talk to the [`Scale`] trait: they read the
//! range, invert pixel positions into data values, and write new domains.
//! Charting code is free to bring its own scale types; this crate also ships
//! two small reference implementations:
//!
//! - [`LinearScale`]: `range = a * domain + b`.
//! - [`LogScale`]: linear in `ln(domain)`, for strictly positive domains.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_scale::{LinearScale, Scale};
//!
//! // 0..100 data units across an 800px wide plot.
//! let mut x = LinearScale::new([0.0, 100.0], [0.0, 800.0]);
//! assert_eq!(x.apply(50.0), 400.0);
//! assert_eq!(x.invert(200.0), 25.0);
//!
//! // Snapshots are plain clones and do not follow later edits.
//! let snapshot = x.clone();
//! x.set_domain([10.0, 20.0]);
//! assert_eq!(snapshot.domain(), [0.0, 100.0]);
//! ```
//!
//! ## Degenerate inputs
//!
//! A scale whose domain (or range) endpoints coincide cannot be inverted
//! meaningfully. The reference scales map every input to the midpoint of the
//! output interval in that case instead of producing `NaN` or infinities.
//!
//! This crate is `no_std`.

#![no_std]

mod linear;
mod logarithmic;

pub use linear::LinearScale;
pub use logarithmic::LogScale;

/// A bidirectional numeric mapping from a mutable domain onto a range.
///
/// Implementations must be cheap to [`Clone`], and a clone must be fully
/// independent of the original: interaction code snapshots scales at the
/// start of a gesture and keeps inverting through the snapshot while the live
/// scale's domain is rewritten underneath it.
///
/// Domains and ranges are `[start, end]` pairs. Either may be decreasing (for
/// example a Y range of `[height, 0.0]` so that larger values plot higher).
pub trait Scale: Clone {
    /// Maps a domain value into range space.
    fn apply(&self, value: f64) -> f64;

    /// Maps a range value back into domain space.
    fn invert(&self, value: f64) -> f64;

    /// Returns the current domain.
    fn domain(&self) -> [f64; 2];

    /// Replaces the domain.
    fn set_domain(&mut self, domain: [f64; 2]);

    /// Returns the current range.
    fn range(&self) -> [f64; 2];
}

/// Position of `value` within `[start, end]`, or `0.5` when the interval is empty.
#[inline]
pub(crate) fn normalize(value: f64, start: f64, end: f64) -> f64 {
    let span = end - start;
    if span == 0.0 { 0.5 } else { (value - start) / span }
}

/// Interpolates between `start` and `end`; exact at `t == 0` and `t == 1`.
#[inline]
pub(crate) fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}
