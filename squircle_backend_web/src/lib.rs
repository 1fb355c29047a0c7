// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Web backend for squircle.
//!
//! This crate binds [`ClipController`] to browser elements:
//!
//! - [`DomClipHost`]: `ResizeObserver` subscriptions, `offsetWidth` /
//!   `offsetHeight` measurement, and inline `clip-path` / `border-radius`
//!   writes.
//! - [`WebSquircle`]: an owning handle that keeps one element clipped.
//!
//! ```rust,ignore
//! let squircle = WebSquircle::preset(SurfacePreset::Card);
//! squircle.attach(card_element);
//! // ...later, when the card unmounts:
//! squircle.detach();
//! ```

#![no_std]

extern crate alloc;

mod host;

pub use host::{DomClipHost, ResizeSubscription};

use alloc::boxed::Box;
use alloc::rc::Rc;
use core::cell::RefCell;

use squircle_core::config::PathConfig;
use squircle_core::controller::{BindingId, ClipController};
use squircle_core::path::CornerParams;
use squircle_core::preset::SurfacePreset;
use squircle_core::style::ClipStyle;
use squircle_core::trace::TraceSink;
use web_sys::HtmlElement;

use host::SharedController;

/// Keeps one [`HtmlElement`] at a time clipped to a squircle.
///
/// Resize callbacks reach the controller through a weak reference; dropping
/// the handle disconnects the observer.
pub struct WebSquircle {
    inner: Rc<SharedController>,
}

impl core::fmt::Debug for WebSquircle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self.inner.try_borrow() {
            Ok(controller) => f
                .debug_struct("WebSquircle")
                .field("controller", &*controller)
                .finish(),
            Err(_) => f.debug_struct("WebSquircle").finish_non_exhaustive(),
        }
    }
}

impl WebSquircle {
    /// Creates an unbound handle.
    #[must_use]
    pub fn new(params: CornerParams) -> Self {
        Self::with_config(params, PathConfig::DEFAULT)
    }

    /// Creates an unbound handle for a named surface.
    #[must_use]
    pub fn preset(preset: SurfacePreset) -> Self {
        Self::new(preset.params())
    }

    /// Creates an unbound handle with a custom generator configuration.
    #[must_use]
    pub fn with_config(params: CornerParams, config: PathConfig) -> Self {
        let inner = Rc::new_cyclic(|weak| {
            RefCell::new(ClipController::with_config(
                DomClipHost::new(weak.clone()),
                params,
                config,
            ))
        });
        Self { inner }
    }

    /// Attaches `element`, replacing (and disconnecting) any previous one.
    ///
    /// The element is measured and styled before this returns.
    pub fn attach(&self, element: HtmlElement) -> BindingId {
        self.inner.borrow_mut().attach(element)
    }

    /// Detaches the current element, if any, and returns it.
    pub fn detach(&self) -> Option<HtmlElement> {
        self.inner.borrow_mut().detach()
    }

    /// Replaces the corner parameters; used from the next recompute on.
    pub fn set_params(&self, params: CornerParams) {
        self.inner.borrow_mut().set_params(params);
    }

    /// Re-measures the attached element now. Returns `false` when unbound.
    pub fn refresh(&self) -> bool {
        self.inner.borrow_mut().refresh()
    }

    /// A copy of the latest published style.
    #[must_use]
    pub fn style(&self) -> ClipStyle {
        self.inner.borrow().style().clone()
    }

    /// Current corner parameters.
    #[must_use]
    pub fn params(&self) -> CornerParams {
        self.inner.borrow().params()
    }

    /// Returns `true` if an element is attached.
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.inner.borrow().is_bound()
    }

    /// Installs a trace sink on the underlying controller.
    pub fn set_trace_sink(&self, sink: Box<dyn TraceSink>) {
        self.inner.borrow_mut().set_trace_sink(sink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_handle_is_unbound_with_fallback() {
        let squircle = WebSquircle::preset(SurfacePreset::Modal);
        assert!(!squircle.is_bound());
        assert_eq!(squircle.style(), ClipStyle::fallback(32.0));
        assert!(!squircle.refresh());
        assert!(squircle.detach().is_none());
    }

    #[test]
    fn set_params_updates_fallback_radius() {
        let squircle = WebSquircle::new(CornerParams::new(12.0));
        squircle.set_params(CornerParams::new(18.0).with_smoothing(0.2));
        assert_eq!(squircle.params(), CornerParams::new(18.0).with_smoothing(0.2));
        assert_eq!(squircle.style().border_radius(), 18.0);
    }

    #[test]
    fn resize_callbacks_do_not_keep_the_controller_alive() {
        let squircle = WebSquircle::preset(SurfacePreset::Card);
        let weak = Rc::downgrade(&squircle.inner);
        drop(squircle);
        assert!(weak.upgrade().is_none());
    }
}
