// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize-driven clip controller.
//!
//! A [`ClipController`] binds the pure generator to one live element at a
//! time and keeps its [`ClipStyle`] current:
//!
//! ```text
//!   attach(target) ──► measure ──► generate ──► apply ──► observe
//!                         ▲                                  │
//!                         └──────── notify_resize(id) ◄──────┘
//!   detach() / drop ──► disconnect
//! ```
//!
//! # Binding lifecycle
//!
//! The controller is either [`Unbound`](BindingState::Unbound) or
//! [`Bound`](BindingState::Bound) to exactly one target with exactly one live
//! subscription. Attaching while bound disconnects the previous subscription
//! before the new one starts. Detaching, or dropping the controller,
//! disconnects unconditionally.
//!
//! Each attach mints a fresh [`BindingId`]. Notifications naming any other id
//! (an orphaned element that resizes after detach, or a callback queued
//! before a re-attach) are dropped without recomputing.
//!
//! Parameters set with [`set_params`](ClipController::set_params) are read on
//! every recompute, so they take effect at the next resize without a rebind.

use alloc::boxed::Box;
use core::fmt;

use kurbo::Size;

use crate::backend::ClipHost;
use crate::config::PathConfig;
use crate::path::{CornerParams, SquirclePath, generate_with};
use crate::style::ClipStyle;
use crate::trace::{
    AttachEvent, DetachEvent, DetachReason, RecomputeEvent, StaleResizeEvent, TraceSink, Tracer,
};

/// A handle to one attach of a [`ClipController`].
///
/// Generations increase with every attach, so a handle from an earlier
/// binding never matches the live one.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BindingId {
    generation: u32,
}

impl BindingId {
    /// Rebuilds a handle from its raw generation (for trace replay).
    #[inline]
    #[must_use]
    pub const fn from_raw(generation: u32) -> Self {
        Self { generation }
    }

    /// Returns the generation counter.
    #[inline]
    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

impl fmt::Debug for BindingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BindingId(gen{})", self.generation)
    }
}

/// Whether a controller currently observes an element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BindingState {
    /// No element attached; the style is the fallback.
    Unbound,
    /// An element is attached under this binding.
    Bound(BindingId),
}

struct Binding<H: ClipHost> {
    id: BindingId,
    target: H::Target,
    subscription: Option<H::Subscription>,
    /// The style last written to this target, if any.
    applied: Option<ClipStyle>,
}

/// Keeps one element's clip style in sync with its size.
pub struct ClipController<H: ClipHost> {
    host: H,
    params: CornerParams,
    config: PathConfig,
    binding: Option<Binding<H>>,
    generation: u32,
    style: ClipStyle,
    path: SquirclePath,
    recomputes: u64,
    seq: u64,
    sink: Option<Box<dyn TraceSink>>,
}

impl<H: ClipHost> fmt::Debug for ClipController<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClipController")
            .field("state", &self.state())
            .field("params", &self.params)
            .field("config", &self.config)
            .field("style", &self.style)
            .field("recomputes", &self.recomputes)
            .finish_non_exhaustive()
    }
}

impl<H: ClipHost> ClipController<H> {
    /// Creates an unbound controller with the reference [`PathConfig`].
    #[must_use]
    pub fn new(host: H, params: CornerParams) -> Self {
        Self::with_config(host, params, PathConfig::DEFAULT)
    }

    /// Creates an unbound controller with a custom generator configuration.
    #[must_use]
    pub fn with_config(host: H, params: CornerParams, config: PathConfig) -> Self {
        Self {
            host,
            params,
            config,
            binding: None,
            generation: 0,
            style: ClipStyle::fallback(params.radius),
            path: SquirclePath::empty(Size::ZERO, config.precision),
            recomputes: 0,
            seq: 0,
            sink: None,
        }
    }

    /// Attaches `target`, replacing any current binding.
    ///
    /// The previous subscription (if any) is disconnected first. The target
    /// is then measured and styled synchronously, and only after that is its
    /// observation started.
    pub fn attach(&mut self, target: H::Target) -> BindingId {
        let replaced = self.unbind(DetachReason::Replaced).map(|(id, _)| id);

        self.generation = self.generation.wrapping_add(1);
        let id = BindingId {
            generation: self.generation,
        };
        self.binding = Some(Binding {
            id,
            target,
            subscription: None,
            applied: None,
        });

        let seq = self.next_seq();
        self.tracer().attach(&AttachEvent {
            seq,
            binding: id,
            replaced,
        });

        self.recompute();

        if let Some(binding) = self.binding.as_mut() {
            binding.subscription = Some(self.host.observe(&binding.target, id));
        }
        id
    }

    /// Detaches the current target and returns it.
    ///
    /// The observation is disconnected and the published style returns to
    /// the fallback. Nothing is written to the departing target.
    pub fn detach(&mut self) -> Option<H::Target> {
        let (_, target) = self.unbind(DetachReason::Detached)?;
        self.reset_published();
        Some(target)
    }

    /// Handles a size-change notification from the host.
    ///
    /// Returns `true` if `binding` is live and a recompute ran. Stale
    /// notifications are dropped and return `false`.
    pub fn notify_resize(&mut self, binding: BindingId) -> bool {
        if self.binding_id() == Some(binding) {
            return self.recompute();
        }
        let seq = self.next_seq();
        let current = self.binding_id();
        self.tracer().stale_resize(&StaleResizeEvent {
            seq,
            binding,
            current,
        });
        false
    }

    /// Re-measures and recomputes the live binding on demand.
    ///
    /// Returns `false` when unbound.
    pub fn refresh(&mut self) -> bool {
        self.recompute()
    }

    /// Replaces the corner parameters.
    ///
    /// Takes effect at the next recompute; the binding is left untouched.
    pub fn set_params(&mut self, params: CornerParams) {
        self.params = params;
        self.style.set_corner_radius_fallback(params.radius);
    }

    /// Current corner parameters.
    #[inline]
    #[must_use]
    pub fn params(&self) -> CornerParams {
        self.params
    }

    /// Generator configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &PathConfig {
        &self.config
    }

    /// Latest published style.
    #[inline]
    #[must_use]
    pub fn style(&self) -> &ClipStyle {
        &self.style
    }

    /// Latest generated path (empty while unbound or degenerate).
    #[inline]
    #[must_use]
    pub fn path(&self) -> &SquirclePath {
        &self.path
    }

    /// Current binding state.
    #[must_use]
    pub fn state(&self) -> BindingState {
        match self.binding_id() {
            Some(id) => BindingState::Bound(id),
            None => BindingState::Unbound,
        }
    }

    /// The live binding, if any.
    #[inline]
    #[must_use]
    pub fn binding_id(&self) -> Option<BindingId> {
        self.binding.as_ref().map(|b| b.id)
    }

    /// Returns `true` if an element is attached.
    #[inline]
    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// The attached element, if any.
    #[must_use]
    pub fn target(&self) -> Option<&H::Target> {
        self.binding.as_ref().map(|b| &b.target)
    }

    /// Number of recomputes performed over the controller's lifetime.
    #[inline]
    #[must_use]
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// The host.
    #[inline]
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// The host, mutably.
    #[inline]
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Installs a trace sink. Events are only emitted with the `trace`
    /// feature enabled.
    pub fn set_trace_sink(&mut self, sink: Box<dyn TraceSink>) {
        self.sink = Some(sink);
    }

    /// Removes and returns the trace sink.
    pub fn take_trace_sink(&mut self) -> Option<Box<dyn TraceSink>> {
        self.sink.take()
    }

    // -- internals ----------------------------------------------------------

    /// Measure → generate → apply for the live binding.
    fn recompute(&mut self) -> bool {
        let Some(binding) = self.binding.as_mut() else {
            return false;
        };
        let id = binding.id;
        let size = self.host.measure(&binding.target);
        let path = generate_with(size, self.params, &self.config);
        let style = ClipStyle::from_path(&path, self.params.radius);
        if binding.applied.as_ref() != Some(&style) {
            self.host.apply(&binding.target, &style);
            binding.applied = Some(style.clone());
        }

        self.recomputes += 1;
        let seq = self.next_seq();
        let event = RecomputeEvent {
            seq,
            binding: id,
            size,
            params: self.params,
            effective_extent: path.extent().map(|e| e.effective),
            points: u32::try_from(path.len()).unwrap_or(u32::MAX),
            clipped: style.is_clipped(),
        };
        self.tracer().recompute(&event);

        self.path = path;
        self.style = style;
        true
    }

    /// Disconnects and removes the live binding, if any.
    fn unbind(&mut self, reason: DetachReason) -> Option<(BindingId, H::Target)> {
        let binding = self.binding.take()?;
        debug_assert!(
            binding.subscription.is_some(),
            "bound controller without a live subscription"
        );
        if let Some(subscription) = binding.subscription {
            self.host.disconnect(subscription);
        }
        let seq = self.next_seq();
        self.tracer().detach(&DetachEvent {
            seq,
            binding: binding.id,
            reason,
        });
        Some((binding.id, binding.target))
    }

    fn reset_published(&mut self) {
        self.style = ClipStyle::fallback(self.params.radius);
        self.path = SquirclePath::empty(Size::ZERO, self.config.precision);
    }

    fn next_seq(&mut self) -> u64 {
        let seq = self.seq;
        self.seq += 1;
        seq
    }

    fn tracer(&mut self) -> Tracer<'_> {
        Tracer::from_option(self.sink.as_deref_mut().map(|s| s as &mut dyn TraceSink))
    }
}

impl<H: ClipHost> Drop for ClipController<H> {
    fn drop(&mut self) {
        self.unbind(DetachReason::Teardown);
    }
}
