// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! DOM host.
//!
//! [`DomClipHost`] implements [`ClipHost`] for [`HtmlElement`] targets:
//! sizes come from `offsetWidth` / `offsetHeight`, observation uses a
//! [`ResizeObserver`][mdn], and styles are written to the element's inline
//! style.
//!
//! [mdn]: https://developer.mozilla.org/en-US/docs/Web/API/ResizeObserver

use alloc::boxed::Box;
use alloc::rc::Weak;
use core::cell::RefCell;

use kurbo::Size;
use squircle_core::backend::ClipHost;
use squircle_core::controller::{BindingId, ClipController};
use squircle_core::style::{ClipStyle, StyleDeclaration};
use wasm_bindgen::JsCast as _;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{HtmlElement, ResizeObserver};

/// The controller type shared between a handle and its resize callbacks.
pub(crate) type SharedController = RefCell<ClipController<DomClipHost>>;

type ResizeClosure = Closure<dyn FnMut(JsValue)>;

/// Measures, observes, and styles DOM elements for a [`ClipController`].
///
/// Resize callbacks hold only a weak reference to the owning controller, so
/// they never keep it alive.
pub struct DomClipHost {
    controller: Weak<SharedController>,
}

impl core::fmt::Debug for DomClipHost {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DomClipHost")
            .field("controller_alive", &(self.controller.strong_count() > 0))
            .finish()
    }
}

impl DomClipHost {
    /// Creates a host that routes resize notifications to `controller`.
    pub(crate) fn new(controller: Weak<SharedController>) -> Self {
        Self { controller }
    }
}

/// A live `ResizeObserver` and the JS closure it calls.
///
/// `observer` is `None` when the browser has no `ResizeObserver`; the
/// element then keeps the style from its initial measurement.
pub struct ResizeSubscription {
    observer: Option<ResizeObserver>,
    /// Kept alive for as long as the observer may call it.
    _closure: ResizeClosure,
}

impl core::fmt::Debug for ResizeSubscription {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ResizeSubscription")
            .field("observing", &self.observer.is_some())
            .finish_non_exhaustive()
    }
}

impl ClipHost for DomClipHost {
    type Target = HtmlElement;
    type Subscription = ResizeSubscription;

    fn measure(&self, target: &HtmlElement) -> Size {
        Size::new(
            f64::from(target.offset_width()),
            f64::from(target.offset_height()),
        )
    }

    fn observe(&mut self, target: &HtmlElement, binding: BindingId) -> ResizeSubscription {
        let controller = self.controller.clone();
        let closure = Closure::wrap(Box::new(move |_entries: JsValue| {
            let Some(controller) = controller.upgrade() else {
                return;
            };
            // A callback that lands while the controller is borrowed is
            // skipped; the next notification re-measures anyway.
            if let Ok(mut controller) = controller.try_borrow_mut() {
                controller.notify_resize(binding);
            }
        }) as Box<dyn FnMut(JsValue)>);

        let observer = ResizeObserver::new(closure.as_ref().unchecked_ref()).ok();
        if let Some(observer) = &observer {
            observer.observe(target);
        }
        ResizeSubscription {
            observer,
            _closure: closure,
        }
    }

    fn disconnect(&mut self, subscription: ResizeSubscription) {
        if let Some(observer) = &subscription.observer {
            observer.disconnect();
        }
        // Dropping the subscription releases the JS closure.
    }

    fn apply(&mut self, target: &HtmlElement, style: &ClipStyle) {
        let s = target.style();
        for decl in style.declarations() {
            match decl {
                StyleDeclaration::Set { property, value } => {
                    let _ = s.set_property(property, &value);
                }
                StyleDeclaration::Remove { property } => {
                    let _ = s.remove_property(property);
                }
            }
        }
    }
}
