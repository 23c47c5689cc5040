// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type.

/// Errors reported by the pan/zoom primitives.
///
/// The numeric paths never fail: degenerate geometry is handled with epsilon
/// substitution. The only error is asking for gesture geometry when there is
/// nothing to measure, which signals a caller bug.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PanZoomError {
    /// A bounding box was requested over zero pointers.
    #[error("cannot compute a bounding box over an empty pointer set")]
    EmptyPointerSet,
}
