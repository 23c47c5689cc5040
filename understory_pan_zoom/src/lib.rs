// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: a headless multi-pointer pan/zoom gesture engine.
//!
//! This crate turns raw pointer and wheel input into new **domains** for a
//! pair of 1D scales (see [`understory_scale::Scale`]). It focuses on:
//! - Pan, pinch-zoom and mixed gestures with any number of pointers, driven
//!   by the bounding box of the active pointers.
//! - Single-axis behavior for nearly colinear pointers.
//! - Wheel zoom anchored at the cursor.
//! - Span limits (how far in and out one may zoom) and a fence keeping the
//!   view inside a data extent.
//! - Coalescing any number of updates into one notification per frame.
//!
//! It does **not** own an event loop, a window or any rendering. Callers are
//! expected to:
//! - Forward pointer and wheel events, in plot-local pixels, to [`PanZoom`].
//! - Implement [`GestureHost`] to schedule frames and receive new domains.
//! - Keep their scales' ranges in sync with the plot size through
//!   [`PanZoom::scales_mut`].
//!
//! The lower-level pieces ([`calc_bbox`], [`AxisTransform`], the span
//! helpers, [`constrain`], [`Gesture`], [`zoom_scales`]) are public for
//! callers that want to assemble their own controller.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use understory_pan_zoom::{GestureHost, PanZoom, PanZoomOptions};
//! use understory_scale::{LinearScale, Scale};
//!
//! #[derive(Default)]
//! struct Plot {
//!     frame_requested: bool,
//!     x_domain: [f64; 2],
//! }
//!
//! impl GestureHost for Plot {
//!     fn request_frame(&mut self) {
//!         self.frame_requested = true;
//!     }
//!     fn domains_changed(&mut self, x_domain: [f64; 2], _y_domain: [f64; 2]) {
//!         self.x_domain = x_domain;
//!     }
//! }
//!
//! let x = LinearScale::new([0.0, 100.0], [0.0, 800.0]);
//! let y = LinearScale::new([0.0, 100.0], [600.0, 0.0]);
//! let mut pz = PanZoom::new(x, y, Plot::default(), PanZoomOptions::default());
//!
//! // Drag one finger 80px to the left: the view pans 10 units to the right.
//! pz.on_pointer_down(0_u64, Point::new(400.0, 300.0));
//! pz.on_pointer_move(&0, Point::new(320.0, 300.0));
//! pz.on_pointer_up(&0);
//!
//! // The host is notified once, on the next frame.
//! assert!(pz.host().frame_requested);
//! pz.on_frame();
//! let [x0, x1] = pz.host().x_domain;
//! assert!((x0 - 10.0).abs() < 1e-9 && (x1 - 110.0).abs() < 1e-9);
//! ```
//!
//! ## Constraints
//!
//! ```rust
//! use kurbo::Point;
//! use understory_pan_zoom::{Fence, PanZoomOptions, SpanLimits, zoom_scales};
//! use understory_scale::{LinearScale, Scale};
//!
//! let options = PanZoomOptions::default()
//!     // Never show more than 0..100 horizontally.
//!     .with_constraint(Fence::x(0.0, 100.0))
//!     // Never zoom in closer than 10 units.
//!     .with_max_zoom(SpanLimits::new(10.0, 10.0));
//!
//! let mut x = LinearScale::new([0.0, 100.0], [0.0, 800.0]);
//! let mut y = LinearScale::new([0.0, 100.0], [600.0, 0.0]);
//! zoom_scales(&mut x, &mut y, Point::new(0.0, 300.0), 1.95, &options);
//! let [x0, x1] = x.domain();
//! assert!((x1 - x0 - 10.0).abs() < 1e-9);
//! assert!(x0 >= 0.0);
//! ```
//!
//! ## Design notes
//!
//! - Each gesture *leg* (a stretch with a fixed pointer set) recomputes the
//!   domain from a snapshot taken when the leg started, so numeric error does
//!   not accumulate across moves.
//! - Adding or removing a pointer commits the current leg before starting a
//!   new one, so the view never jumps.
//! - Everything is computed in `f64` with epsilon substitution for degenerate
//!   geometry; the numeric paths do not fail.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(test)]
extern crate alloc;

mod affine;
mod bbox;
mod constrain;
mod engine;
mod error;
mod frame;
mod gesture;
mod host;
mod options;
mod span;
mod wheel;

pub use affine::{AxisTransform, BoxTransform, DEGENERATE_EPSILON, Line, line_through};
pub use bbox::{calc_bbox, squareify};
pub use constrain::{SPAN_TOLERANCE, constrain, constrain_axis};
pub use engine::{PanZoom, PanZoomDebugInfo};
pub use error::PanZoomError;
pub use frame::FrameLatch;
pub use gesture::{
    ASPECT_RATIO_HIGH, ASPECT_RATIO_LOW, Gesture, GestureOrigin, SINGLE_AXIS_THRESHOLD,
    detect_single_axis, update_scales,
};
pub use host::GestureHost;
pub use options::{Axis, Fence, PanZoomOptions, SpanLimits};
pub use span::{clamp_to_max_span, clamp_to_min_span, decrease_to_span, increase_to_span};
pub use wheel::{
    LINE_DELTA_FACTOR, PIXEL_DELTA_FACTOR, WheelDeltaMode, normalize_wheel_delta,
    wheel_zoom_ratio, zoom_scales,
};
