// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interaction settings: fence, span limits, and axis locks.

/// One of the two plot axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
}

/// Optional hard bounds on the visible domain, in domain units.
///
/// Any edge may be left unbounded, either as `None` or as a non-finite value.
/// The fence is applied in pixel space (see [`crate::constrain`]), so it stays
/// exact for non-linear scales.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Fence {
    /// Lower X bound.
    pub x_min: Option<f64>,
    /// Upper X bound.
    pub x_max: Option<f64>,
    /// Lower Y bound.
    pub y_min: Option<f64>,
    /// Upper Y bound.
    pub y_max: Option<f64>,
}

impl Fence {
    /// A fence with no bounds at all.
    pub const UNBOUNDED: Self = Self {
        x_min: None,
        x_max: None,
        y_min: None,
        y_max: None,
    };

    /// Fence on the X axis only.
    #[must_use]
    pub fn x(min: f64, max: f64) -> Self {
        Self::UNBOUNDED.with_x(min, max)
    }

    /// Fence on the Y axis only.
    #[must_use]
    pub fn y(min: f64, max: f64) -> Self {
        Self::UNBOUNDED.with_y(min, max)
    }

    /// Returns a copy with both X edges set.
    #[must_use]
    pub fn with_x(mut self, min: f64, max: f64) -> Self {
        self.x_min = Some(min);
        self.x_max = Some(max);
        self
    }

    /// Returns a copy with both Y edges set.
    #[must_use]
    pub fn with_y(mut self, min: f64, max: f64) -> Self {
        self.y_min = Some(min);
        self.y_max = Some(max);
        self
    }

    /// Returns the finite `(min, max)` bounds for `axis`.
    #[must_use]
    pub fn bounds(&self, axis: Axis) -> (Option<f64>, Option<f64>) {
        let (min, max) = match axis {
            Axis::X => (self.x_min, self.x_max),
            Axis::Y => (self.y_min, self.y_max),
        };
        (min.filter(|v| v.is_finite()), max.filter(|v| v.is_finite()))
    }

    /// Returns `true` if no edge is bounded.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        self.bounds(Axis::X) == (None, None) && self.bounds(Axis::Y) == (None, None)
    }
}

/// Optional per-axis domain span limits.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpanLimits {
    /// Span limit on the X axis, in domain units.
    pub x_span: Option<f64>,
    /// Span limit on the Y axis, in domain units.
    pub y_span: Option<f64>,
}

impl SpanLimits {
    /// No limit on either axis.
    pub const NONE: Self = Self {
        x_span: None,
        y_span: None,
    };

    /// Limits on both axes.
    #[must_use]
    pub fn new(x_span: f64, y_span: f64) -> Self {
        Self {
            x_span: Some(x_span),
            y_span: Some(y_span),
        }
    }

    /// Returns the limit for `axis`, if any.
    #[must_use]
    pub fn span(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x_span,
            Axis::Y => self.y_span,
        }
    }
}

/// Interaction settings for a [`crate::PanZoom`] engine.
///
/// `min_zoom` and `max_zoom` follow zoom-level naming: `min_zoom` is the most
/// zoomed-out state and therefore caps the *largest* visible span, while
/// `max_zoom` is the most zoomed-in state and floors the *smallest* one.
///
/// ```rust
/// use understory_pan_zoom::{Fence, PanZoomOptions, SpanLimits};
///
/// let options = PanZoomOptions::default()
///     .with_constraint(Fence::x(0.0, 100.0))
///     .with_max_zoom(SpanLimits { x_span: Some(1.0), y_span: None })
///     .with_preserve_aspect_ratio(true);
/// assert!(options.preserve_aspect_ratio);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PanZoomOptions {
    /// Hard bounds on the visible domain.
    pub constraint: Fence,
    /// Largest allowed domain span per axis.
    pub min_zoom: SpanLimits,
    /// Smallest allowed domain span per axis.
    pub max_zoom: SpanLimits,
    /// Never write the X domain.
    pub lock_x_axis: bool,
    /// Never write the Y domain.
    pub lock_y_axis: bool,
    /// Use the same scale factor on both axes during pointer gestures.
    pub preserve_aspect_ratio: bool,
}

impl PanZoomOptions {
    /// Returns a copy with the given fence.
    #[must_use]
    pub fn with_constraint(mut self, constraint: Fence) -> Self {
        self.constraint = constraint;
        self
    }

    /// Returns a copy with the given zoomed-out limit.
    #[must_use]
    pub fn with_min_zoom(mut self, min_zoom: SpanLimits) -> Self {
        self.min_zoom = min_zoom;
        self
    }

    /// Returns a copy with the given zoomed-in limit.
    #[must_use]
    pub fn with_max_zoom(mut self, max_zoom: SpanLimits) -> Self {
        self.max_zoom = max_zoom;
        self
    }

    /// Returns a copy with the given axis locks.
    #[must_use]
    pub fn with_axis_locks(mut self, lock_x_axis: bool, lock_y_axis: bool) -> Self {
        self.lock_x_axis = lock_x_axis;
        self.lock_y_axis = lock_y_axis;
        self
    }

    /// Returns a copy with aspect-ratio preservation toggled.
    #[must_use]
    pub fn with_preserve_aspect_ratio(mut self, preserve: bool) -> Self {
        self.preserve_aspect_ratio = preserve;
        self
    }

    /// Returns `true` if `axis` is locked.
    #[must_use]
    pub fn is_locked(&self, axis: Axis) -> bool {
        match axis {
            Axis::X => self.lock_x_axis,
            Axis::Y => self.lock_y_axis,
        }
    }
}
