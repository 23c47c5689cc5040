// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-frame update coalescing.

/// Coalesces update requests into at most one per animation frame.
///
/// This is a dirty flag, not a queue: any number of [`FrameLatch::schedule`]
/// calls before the frame fires collapse into one, and the frame observes
/// whatever state is current when it runs.
///
/// ```rust
/// use understory_pan_zoom::FrameLatch;
///
/// let mut latch = FrameLatch::default();
/// assert!(latch.schedule()); // first request: ask the host for a frame
/// assert!(!latch.schedule()); // already pending
/// assert!(latch.take()); // frame fired
/// assert!(!latch.take()); // nothing left to deliver
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameLatch {
    pending: bool,
}

impl FrameLatch {
    /// Marks an update as pending.
    ///
    /// Returns `true` only on the transition from idle to pending, i.e. when
    /// the caller should request a frame from its host.
    pub fn schedule(&mut self) -> bool {
        !core::mem::replace(&mut self.pending, true)
    }

    /// Clears the pending flag, returning whether an update was pending.
    pub fn take(&mut self) -> bool {
        core::mem::take(&mut self.pending)
    }

    /// Returns `true` if an update is waiting for the next frame.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
