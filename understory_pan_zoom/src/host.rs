// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the engine borrows from its embedder.

/// The embedding side of a [`crate::PanZoom`] engine.
///
/// The engine never touches a windowing system or event loop. Instead it asks
/// its host for the few things it needs:
///
/// - one animation frame whenever domains changed ([`GestureHost::request_frame`]),
///   after which the host calls [`crate::PanZoom::on_frame`];
/// - delivery of the final domains on that frame ([`GestureHost::domains_changed`]);
/// - routing of pointer moves only while a gesture is active
///   ([`GestureHost::install_move_listener`] / [`GestureHost::remove_move_listener`]).
///   Hosts that always forward moves can ignore these.
pub trait GestureHost {
    /// Requests a single call to [`crate::PanZoom::on_frame`] on the next frame.
    ///
    /// Only called when no frame is already pending.
    fn request_frame(&mut self);

    /// Called from [`crate::PanZoom::on_frame`] with the latest domains.
    fn domains_changed(&mut self, x_domain: [f64; 2], y_domain: [f64; 2]);

    /// A gesture started; start forwarding pointer moves.
    fn install_move_listener(&mut self) {}

    /// The gesture ended; pointer moves are no longer needed.
    ///
    /// A frame requested before this call is still expected to fire.
    fn remove_move_listener(&mut self) {}
}

impl<H: GestureHost + ?Sized> GestureHost for &mut H {
    fn request_frame(&mut self) {
        (**self).request_frame();
    }

    fn domains_changed(&mut self, x_domain: [f64; 2], y_domain: [f64; 2]) {
        (**self).domains_changed(x_domain, y_domain);
    }

    fn install_move_listener(&mut self) {
        (**self).install_move_listener();
    }

    fn remove_move_listener(&mut self) {
        (**self).remove_move_listener();
    }
}
