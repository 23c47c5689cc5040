// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer gesture state: active pointers, per-leg origin snapshots, and the
//! commit that turns a bounding-box change into new domains.
//!
//! A *leg* is the stretch of a gesture during which the set of pointers does
//! not change. Every time a pointer is added or removed the gesture is reset:
//! the live scales are cloned into a fresh [`GestureOrigin`] together with the
//! pointers' bounding box. Each move then recomputes the domain from that
//! origin rather than from the previous frame, so error never accumulates
//! across moves.

use kurbo::{Point, Rect};
use smallvec::SmallVec;
use understory_scale::Scale;

use crate::affine::{AxisTransform, BoxTransform};
use crate::bbox::{calc_bbox, squareify};
use crate::constrain::constrain;
use crate::options::{Axis, PanZoomOptions};
use crate::span::{decrease_to_span, increase_to_span};

/// Bounding-box extent (in pixels) below which an axis counts as narrow.
pub const SINGLE_AXIS_THRESHOLD: f64 = 100.0;

/// Width/height ratio above which a box with two narrow sides is horizontal.
pub const ASPECT_RATIO_HIGH: f64 = 1.2;

/// Width/height ratio below which a box with two narrow sides is vertical.
pub const ASPECT_RATIO_LOW: f64 = 0.8;

/// Inline pointer capacity; more simultaneous touches spill to the heap.
const INLINE_POINTERS: usize = 4;

/// Snapshot taken at the start of a gesture leg.
#[derive(Clone, Debug)]
pub struct GestureOrigin<S> {
    /// Clone of the live X scale when the leg started.
    pub x_scale: S,
    /// Clone of the live Y scale when the leg started.
    pub y_scale: S,
    /// Bounding box of the pointers when the leg started.
    pub bbox: Rect,
}

/// Decides which axis, if any, stays live for a multi-pointer leg.
///
/// Pointers that are nearly colinear give a tiny extent on one axis, where a
/// few pixels of jitter are a huge relative change. That axis is frozen and
/// only the returned axis is updated for the rest of the leg.
///
/// When both extents are narrow the width/height ratio decides: above
/// [`ASPECT_RATIO_HIGH`] only Y stays live, below [`ASPECT_RATIO_LOW`] only X
/// does, and a roughly square cluster leaves both axes live.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_pan_zoom::{Axis, detect_single_axis};
///
/// // Two fingers side by side: only X follows them.
/// assert_eq!(detect_single_axis(Rect::new(0.0, 0.0, 300.0, 20.0)), Some(Axis::X));
/// assert_eq!(detect_single_axis(Rect::new(0.0, 0.0, 300.0, 300.0)), None);
/// // A small cluster wider than tall.
/// assert_eq!(detect_single_axis(Rect::new(0.0, 0.0, 90.0, 10.0)), Some(Axis::Y));
/// ```
#[must_use]
pub fn detect_single_axis(bbox: Rect) -> Option<Axis> {
    let (width, height) = (bbox.width(), bbox.height());
    let narrow_x = width < SINGLE_AXIS_THRESHOLD;
    let narrow_y = height < SINGLE_AXIS_THRESHOLD;
    match (narrow_x, narrow_y) {
        (true, true) => {
            let ratio = width / height;
            if ratio > ASPECT_RATIO_HIGH {
                Some(Axis::Y)
            } else if ratio < ASPECT_RATIO_LOW {
                Some(Axis::X)
            } else {
                None
            }
        }
        (true, false) => Some(Axis::Y),
        (false, true) => Some(Axis::X),
        (false, false) => None,
    }
}

/// Writes the domains implied by moving the pointers from `origin.bbox` to
/// `current` into the live scales.
///
/// Per axis: the live range is pushed through the inverse of the box
/// transform, inverted through the origin snapshot, limited to the configured
/// spans, clamped against the fence, and written unless the axis is locked or
/// frozen by `single_axis`.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_pan_zoom::{GestureOrigin, PanZoomOptions, update_scales};
/// use understory_scale::{LinearScale, Scale};
///
/// let mut x = LinearScale::new([0.0, 100.0], [0.0, 1000.0]);
/// let mut y = LinearScale::new([0.0, 100.0], [0.0, 1000.0]);
/// let origin = GestureOrigin {
///     x_scale: x,
///     y_scale: y,
///     bbox: Rect::new(500.0, 400.0, 700.0, 600.0),
/// };
///
/// // Spread the fingers 100px on each side horizontally.
/// let current = Rect::new(400.0, 400.0, 800.0, 600.0);
/// update_scales(&origin, current, &mut x, &mut y, None, &PanZoomOptions::default());
///
/// assert!((x.domain()[0] - 30.0).abs() < 1e-9);
/// assert!((x.domain()[1] - 80.0).abs() < 1e-9);
/// assert!((x.apply(60.0) - 600.0).abs() < 1e-9);
/// ```
pub fn update_scales<S: Scale>(
    origin: &GestureOrigin<S>,
    current: Rect,
    x_scale: &mut S,
    y_scale: &mut S,
    single_axis: Option<Axis>,
    options: &PanZoomOptions,
) {
    let (initial, current) = if options.preserve_aspect_ratio {
        (squareify(origin.bbox), squareify(current))
    } else {
        (origin.bbox, current)
    };
    let transform = BoxTransform::between(initial, current);

    let x_domain = proposed_domain(&origin.x_scale, x_scale.range(), transform.x);
    let y_domain = proposed_domain(&origin.y_scale, y_scale.range(), transform.y);
    let x_domain = limit_span(x_domain, Axis::X, options);
    let y_domain = limit_span(y_domain, Axis::Y, options);
    let (x_domain, y_domain) = constrain(x_domain, y_domain, &options.constraint, x_scale, y_scale);

    log::trace!(
        "commit: k=({:.4}, {:.4}) t=({:.2}, {:.2}) x={x_domain:?} y={y_domain:?}",
        transform.x.k,
        transform.y.k,
        transform.x.t,
        transform.y.t,
    );

    if writes_axis(Axis::X, single_axis, options) {
        x_scale.set_domain(x_domain);
    }
    if writes_axis(Axis::Y, single_axis, options) {
        y_scale.set_domain(y_domain);
    }
}

fn proposed_domain<S: Scale>(origin: &S, live_range: [f64; 2], transform: AxisTransform) -> [f64; 2] {
    transform.invert_range(live_range).map(|r| origin.invert(r))
}

fn limit_span(domain: [f64; 2], axis: Axis, options: &PanZoomOptions) -> [f64; 2] {
    let domain = match options.max_zoom.span(axis) {
        Some(min_span) => increase_to_span(min_span, domain),
        None => domain,
    };
    match options.min_zoom.span(axis) {
        Some(max_span) => decrease_to_span(max_span, domain),
        None => domain,
    }
}

fn writes_axis(axis: Axis, single_axis: Option<Axis>, options: &PanZoomOptions) -> bool {
    !options.is_locked(axis) && single_axis.is_none_or(|live| live == axis)
}

/// Mutable state of the pointer gesture.
///
/// `K` identifies pointers (touch identifiers, a mouse button, ...); it only
/// needs equality. `S` is the scale type whose snapshots are kept per leg.
#[derive(Clone, Debug)]
pub struct Gesture<K, S> {
    pointers: SmallVec<[(K, Point); INLINE_POINTERS]>,
    in_progress: bool,
    origin: Option<GestureOrigin<S>>,
    current_bbox: Option<Rect>,
    single_axis: Option<Axis>,
}

impl<K, S> Default for Gesture<K, S> {
    fn default() -> Self {
        Self {
            pointers: SmallVec::new(),
            in_progress: false,
            origin: None,
            current_bbox: None,
            single_axis: None,
        }
    }
}

impl<K: PartialEq, S: Scale> Gesture<K, S> {
    /// Creates an idle gesture.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` between the first pointer down and the last pointer up.
    #[must_use]
    pub fn in_progress(&self) -> bool {
        self.in_progress
    }

    /// Active pointers and their latest positions.
    pub fn pointers(&self) -> impl ExactSizeIterator<Item = (&K, Point)> + '_ {
        self.pointers.iter().map(|(id, pt)| (id, *pt))
    }

    /// Number of active pointers.
    #[must_use]
    pub fn pointer_count(&self) -> usize {
        self.pointers.len()
    }

    /// Latest position of pointer `id`, if it is down.
    #[must_use]
    pub fn pointer(&self, id: &K) -> Option<Point> {
        self.pointers.iter().find(|(k, _)| k == id).map(|(_, pt)| *pt)
    }

    /// Snapshot taken at the start of the current leg.
    #[must_use]
    pub fn origin(&self) -> Option<&GestureOrigin<S>> {
        self.origin.as_ref()
    }

    /// Bounding box of the pointers when the current leg started.
    #[must_use]
    pub fn initial_bbox(&self) -> Option<Rect> {
        self.origin.as_ref().map(|o| o.bbox)
    }

    /// Bounding box of the pointers now.
    #[must_use]
    pub fn current_bbox(&self) -> Option<Rect> {
        self.current_bbox
    }

    /// The only axis updated during the current leg, if one was singled out.
    #[must_use]
    pub fn single_axis(&self) -> Option<Axis> {
        self.single_axis
    }

    /// Adds a pointer (or moves it if `id` is already down).
    ///
    /// Marks the gesture as in progress. Does not reset the leg.
    pub fn insert(&mut self, id: K, pos: Point) {
        match self.pointers.iter_mut().find(|(k, _)| *k == id) {
            Some((_, pt)) => *pt = pos,
            None => self.pointers.push((id, pos)),
        }
        self.in_progress = true;
    }

    /// Moves pointer `id` and refreshes the current bounding box.
    ///
    /// Returns `false` (and changes nothing) if `id` is not down.
    pub fn update(&mut self, id: &K, pos: Point) -> bool {
        let Some((_, pt)) = self.pointers.iter_mut().find(|(k, _)| k == id) else {
            return false;
        };
        *pt = pos;
        self.current_bbox = calc_bbox(self.pointers.iter().map(|(_, pt)| *pt)).ok();
        true
    }

    /// Removes pointer `id`. Does not reset the leg.
    ///
    /// Returns `false` if `id` was not down.
    pub fn remove(&mut self, id: &K) -> bool {
        let Some(index) = self.pointers.iter().position(|(k, _)| k == id) else {
            return false;
        };
        self.pointers.remove(index);
        true
    }

    /// Starts a new leg from the current pointer set.
    ///
    /// Snapshots both scales and the bounding box, and re-evaluates
    /// single-axis detection. With no pointers left the gesture goes idle.
    pub fn reset(&mut self, x_scale: &S, y_scale: &S) {
        match calc_bbox(self.pointers.iter().map(|(_, pt)| *pt)) {
            Ok(bbox) => {
                self.origin = Some(GestureOrigin {
                    x_scale: x_scale.clone(),
                    y_scale: y_scale.clone(),
                    bbox,
                });
                self.current_bbox = Some(bbox);
                self.single_axis = if self.pointers.len() >= 2 {
                    detect_single_axis(bbox)
                } else {
                    None
                };
                log::debug!(
                    "gesture leg reset: {} pointer(s), bbox {bbox:?}, single axis {:?}",
                    self.pointers.len(),
                    self.single_axis,
                );
            }
            Err(_) => {
                self.clear();
                log::debug!("gesture ended");
            }
        }
    }

    /// Applies the current leg's transform to the live scales.
    ///
    /// Does nothing while idle.
    pub fn commit(&self, x_scale: &mut S, y_scale: &mut S, options: &PanZoomOptions) {
        if let (Some(origin), Some(current)) = (&self.origin, self.current_bbox) {
            update_scales(origin, current, x_scale, y_scale, self.single_axis, options);
        }
    }

    /// Drops all pointers and leg state without touching any scale.
    pub fn clear(&mut self) {
        self.pointers.clear();
        self.in_progress = false;
        self.origin = None;
        self.current_bbox = None;
        self.single_axis = None;
    }
}
