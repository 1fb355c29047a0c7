// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host contract for platform integrations.
//!
//! The clip controller never touches a UI toolkit directly. Each platform
//! provides a [`ClipHost`] that supplies four pieces:
//!
//! - **Measurement**: the current laid-out size of a target element.
//! - **Observation**: a size-change subscription for one target. The host
//!   forwards each notification to
//!   [`ClipController::notify_resize`](crate::controller::ClipController::notify_resize)
//!   with the [`BindingId`] it was given, on the UI thread.
//! - **Disconnection**: cancelling a subscription. After this returns, the
//!   host must not deliver further notifications for it; any that were
//!   already queued are rejected by the controller as stale.
//! - **Application**: writing a [`ClipStyle`] to the target.
//!
//! # Crate boundaries
//!
//! `squircle_core` owns the geometry, the style model, and the binding
//! lifecycle. Backend crates (e.g. `squircle_backend_web`) implement this
//! trait and wire notification delivery back into the controller.
//!
//! ```rust,ignore
//! let mut controller = ClipController::new(host, CornerParams::new(26.0));
//! let id = controller.attach(element);   // measure, compute, apply, observe
//! // ...platform resize callback for `id`:
//! controller.notify_resize(id);          // re-measure, recompute, re-apply
//! controller.detach();                   // disconnect
//! ```

use kurbo::Size;

use crate::controller::BindingId;
use crate::style::ClipStyle;

/// Platform glue driven by a [`ClipController`](crate::controller::ClipController).
///
/// Implemented by the DOM host and by test doubles.
pub trait ClipHost {
    /// The element being clipped.
    type Target;

    /// A live size-observation handle.
    type Subscription;

    /// Returns the target's current laid-out size in device-independent
    /// pixels. A zero size is valid and yields the fallback style.
    fn measure(&self, target: &Self::Target) -> Size;

    /// Starts observing `target`, tagging notifications with `binding`.
    fn observe(&mut self, target: &Self::Target, binding: BindingId) -> Self::Subscription;

    /// Cancels a subscription returned by [`observe`](Self::observe).
    fn disconnect(&mut self, subscription: Self::Subscription);

    /// Writes `style` to `target`.
    fn apply(&mut self, target: &Self::Target, style: &ClipStyle);
}
