// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom engine: pointer and wheel events in, domains out.

use kurbo::{Point, Rect};
use understory_scale::Scale;

use crate::frame::FrameLatch;
use crate::gesture::Gesture;
use crate::host::GestureHost;
use crate::options::{Axis, Fence, PanZoomOptions, SpanLimits};
use crate::wheel::zoom_scales;

/// Pan/zoom engine driving an X and a Y scale from pointer and wheel input.
///
/// The engine owns the two scales handed to it at construction and rewrites
/// their domains in place; their ranges are left to the caller (see
/// [`PanZoom::scales_mut`]) and are re-read on every commit, so resizing the
/// plot between events is fine.
///
/// Pointer handling follows a commit-then-reset rule on every change to the
/// set of pointers: the in-flight leg is committed with the old pointer set
/// before a new leg is started from the new one. Moves only commit.
///
/// Every commit or wheel step schedules a notification through the host; see
/// [`GestureHost`] and [`PanZoom::on_frame`].
#[derive(Clone, Debug)]
pub struct PanZoom<K, S, H> {
    x_scale: S,
    y_scale: S,
    host: H,
    options: PanZoomOptions,
    gesture: Gesture<K, S>,
    frame: FrameLatch,
}

impl<K: PartialEq, S: Scale, H: GestureHost> PanZoom<K, S, H> {
    /// Creates an idle engine over the caller's scales.
    #[must_use]
    pub fn new(x_scale: S, y_scale: S, host: H, options: PanZoomOptions) -> Self {
        Self {
            x_scale,
            y_scale,
            host,
            options,
            gesture: Gesture::new(),
            frame: FrameLatch::default(),
        }
    }

    /// A pointer went down at `pos` (pixels, relative to the plot surface).
    pub fn on_pointer_down(&mut self, id: K, pos: Point) {
        if self.gesture.in_progress() {
            self.commit();
            self.gesture.insert(id, pos);
            self.reset();
        } else {
            self.gesture.insert(id, pos);
            self.host.install_move_listener();
            self.reset();
            self.commit();
        }
    }

    /// Pointer `id` moved to `pos`.
    ///
    /// Returns `false` and does nothing if `id` is not down, so hosts may
    /// forward hover moves unfiltered.
    pub fn on_pointer_move(&mut self, id: &K, pos: Point) -> bool {
        if !self.gesture.update(id, pos) {
            return false;
        }
        self.commit();
        true
    }

    /// Pointer `id` was released.
    ///
    /// Returns `false` and does nothing if `id` is not down.
    pub fn on_pointer_up(&mut self, id: &K) -> bool {
        if self.gesture.pointer(id).is_none() {
            return false;
        }
        self.commit();
        self.gesture.remove(id);
        self.reset();
        if !self.gesture.in_progress() {
            self.host.remove_move_listener();
        }
        true
    }

    /// Pointer `id` was cancelled by the platform; handled like a release.
    pub fn on_pointer_cancel(&mut self, id: &K) -> bool {
        self.on_pointer_up(id)
    }

    /// Abandons the current gesture without committing it.
    ///
    /// Domains keep whatever the last commit wrote. Useful when the surface
    /// loses focus and no more pointer-up events will arrive.
    pub fn cancel_gesture(&mut self) {
        if self.gesture.in_progress() {
            self.gesture.clear();
            self.host.remove_move_listener();
            log::debug!("gesture cancelled");
        }
    }

    /// Zooms by `zoom_ratio` about `center` (pixels); `> 1` zooms in.
    ///
    /// Ignored while a pointer gesture is in progress, and for a ratio of
    /// exactly `1`. Returns whether the scales were updated.
    pub fn on_wheel_zoom(&mut self, center: Point, zoom_ratio: f64) -> bool {
        if self.gesture.in_progress() {
            log::debug!("ignoring wheel zoom during a pointer gesture");
            return false;
        }
        let applied = zoom_scales(
            &mut self.x_scale,
            &mut self.y_scale,
            center,
            zoom_ratio,
            &self.options,
        );
        if applied {
            self.schedule_update();
        }
        applied
    }

    /// Delivers a pending update to the host.
    ///
    /// Call this from the frame callback requested through
    /// [`GestureHost::request_frame`]. Returns whether an update was pending.
    pub fn on_frame(&mut self) -> bool {
        if !self.frame.take() {
            return false;
        }
        let (x_domain, y_domain) = (self.x_scale.domain(), self.y_scale.domain());
        log::trace!("frame: x={x_domain:?} y={y_domain:?}");
        self.host.domains_changed(x_domain, y_domain);
        true
    }

    /// Current gesture state, for drawing affordances such as the pointer box.
    #[must_use]
    pub fn gesture(&self) -> &Gesture<K, S> {
        &self.gesture
    }

    /// Current interaction settings.
    #[must_use]
    pub fn options(&self) -> &PanZoomOptions {
        &self.options
    }

    /// Replaces all interaction settings; applies from the next commit.
    pub fn set_options(&mut self, options: PanZoomOptions) {
        self.options = options;
    }

    /// Replaces the fence.
    pub fn set_constraint(&mut self, constraint: Fence) {
        self.options.constraint = constraint;
    }

    /// Replaces the zoomed-out (`min_zoom`) and zoomed-in (`max_zoom`) span limits.
    pub fn set_zoom_limits(&mut self, min_zoom: SpanLimits, max_zoom: SpanLimits) {
        self.options.min_zoom = min_zoom;
        self.options.max_zoom = max_zoom;
    }

    /// Locks or unlocks each axis.
    pub fn set_axis_locks(&mut self, lock_x_axis: bool, lock_y_axis: bool) {
        self.options.lock_x_axis = lock_x_axis;
        self.options.lock_y_axis = lock_y_axis;
    }

    /// Toggles aspect-ratio preservation for pointer gestures.
    pub fn set_preserve_aspect_ratio(&mut self, preserve: bool) {
        self.options.preserve_aspect_ratio = preserve;
    }

    /// The live X scale.
    #[must_use]
    pub fn x_scale(&self) -> &S {
        &self.x_scale
    }

    /// The live Y scale.
    #[must_use]
    pub fn y_scale(&self) -> &S {
        &self.y_scale
    }

    /// Mutable access to both live scales, typically to update their ranges.
    ///
    /// Domains written here while a gesture is in progress are overwritten
    /// by the next commit.
    pub fn scales_mut(&mut self) -> (&mut S, &mut S) {
        (&mut self.x_scale, &mut self.y_scale)
    }

    /// The host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the engine, returning the scales and the host.
    pub fn into_parts(self) -> (S, S, H) {
        (self.x_scale, self.y_scale, self.host)
    }

    /// Snapshot of the engine state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> PanZoomDebugInfo {
        PanZoomDebugInfo {
            in_progress: self.gesture.in_progress(),
            pointer_count: self.gesture.pointer_count(),
            initial_bbox: self.gesture.initial_bbox(),
            current_bbox: self.gesture.current_bbox(),
            single_axis: self.gesture.single_axis(),
            x_domain: self.x_scale.domain(),
            y_domain: self.y_scale.domain(),
            x_range: self.x_scale.range(),
            y_range: self.y_scale.range(),
            frame_pending: self.frame.is_pending(),
            options: self.options,
        }
    }

    fn commit(&mut self) {
        self.gesture
            .commit(&mut self.x_scale, &mut self.y_scale, &self.options);
        self.schedule_update();
    }

    fn reset(&mut self) {
        self.gesture.reset(&self.x_scale, &self.y_scale);
    }

    fn schedule_update(&mut self) {
        if self.frame.schedule() {
            self.host.request_frame();
        }
    }
}

/// Debug snapshot of a [`PanZoom`] engine.
#[derive(Clone, Copy, Debug)]
pub struct PanZoomDebugInfo {
    /// Whether a pointer gesture is active.
    pub in_progress: bool,
    /// Number of pointers down.
    pub pointer_count: usize,
    /// Pointer bounding box at the start of the current leg.
    pub initial_bbox: Option<Rect>,
    /// Pointer bounding box now.
    pub current_bbox: Option<Rect>,
    /// The only live axis of the current leg, if singled out.
    pub single_axis: Option<Axis>,
    /// Live X domain.
    pub x_domain: [f64; 2],
    /// Live Y domain.
    pub y_domain: [f64; 2],
    /// Live X range.
    pub x_range: [f64; 2],
    /// Live Y range.
    pub y_range: [f64; 2],
    /// Whether an update is waiting for the next frame.
    pub frame_pending: bool,
    /// Interaction settings.
    pub options: PanZoomOptions,
}
