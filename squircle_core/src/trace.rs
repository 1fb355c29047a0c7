// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracing and diagnostics for the clip controller.
//!
//! This module provides a [`TraceSink`] trait with per-event methods that the
//! controller calls at each lifecycle step. All method bodies default to
//! no-ops, so implementing only the events you care about is fine.
//!
//! [`Tracer`] wraps an optional `&mut dyn TraceSink`. When the `trace` feature
//! is **off**, every `Tracer` method compiles to nothing (zero overhead). When
//! **on**, each method performs a single `Option` branch before dispatching.
//!
//! Every event carries `seq`, a per-controller counter that increases by one
//! for each emitted event.
//!
//! # Crate features
//!
//! - `trace`: enables the `Tracer` method bodies (one branch per call).

use kurbo::Size;

use crate::controller::BindingId;
use crate::path::CornerParams;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Why an observation ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetachReason {
    /// The consumer detached the element.
    Detached,
    /// A new element was attached to the same controller.
    Replaced,
    /// The controller itself was dropped.
    Teardown,
}

// ---------------------------------------------------------------------------
// Event structs
// ---------------------------------------------------------------------------

/// Emitted when an element is attached and its observation starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AttachEvent {
    /// Event sequence number.
    pub seq: u64,
    /// The new binding.
    pub binding: BindingId,
    /// The binding torn down to make room for this one, if any.
    pub replaced: Option<BindingId>,
}

/// Emitted when an observation is disconnected.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetachEvent {
    /// Event sequence number.
    pub seq: u64,
    /// The binding that ended.
    pub binding: BindingId,
    /// What ended it.
    pub reason: DetachReason,
}

/// Emitted after every measure → generate → apply pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RecomputeEvent {
    /// Event sequence number.
    pub seq: u64,
    /// The binding that was recomputed.
    pub binding: BindingId,
    /// Measured size.
    pub size: Size,
    /// Parameters in effect for this pass.
    pub params: CornerParams,
    /// Effective corner extent, or `None` for a degenerate size.
    pub effective_extent: Option<f64>,
    /// Number of path points (0 when degenerate).
    pub points: u32,
    /// Whether a clip path was published.
    pub clipped: bool,
}

/// Emitted when a resize notification arrives for a binding that is no
/// longer live, and is dropped.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaleResizeEvent {
    /// Event sequence number.
    pub seq: u64,
    /// The binding named by the notification.
    pub binding: BindingId,
    /// The live binding at that moment, if any.
    pub current: Option<BindingId>,
}

// ---------------------------------------------------------------------------
// TraceSink trait
// ---------------------------------------------------------------------------

/// Receives trace events from a clip controller.
///
/// All methods have default no-op implementations, so you only need to
/// override the events you care about.
pub trait TraceSink {
    /// Called when an element is attached.
    fn on_attach(&mut self, e: &AttachEvent) {
        _ = e;
    }

    /// Called when an observation is disconnected.
    fn on_detach(&mut self, e: &DetachEvent) {
        _ = e;
    }

    /// Called after each recompute.
    fn on_recompute(&mut self, e: &RecomputeEvent) {
        _ = e;
    }

    /// Called when a stale resize notification is dropped.
    fn on_stale_resize(&mut self, e: &StaleResizeEvent) {
        _ = e;
    }
}

// ---------------------------------------------------------------------------
// NoopSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopSink;

impl TraceSink for NoopSink {}

// ---------------------------------------------------------------------------
// Tracer wrapper
// ---------------------------------------------------------------------------

/// Thin wrapper around an optional [`TraceSink`].
///
/// When the `trace` feature is **off**, every method compiles to nothing. When
/// **on**, each method checks the inner `Option` (one branch) before
/// dispatching to the sink.
pub struct Tracer<'a> {
    #[cfg(feature = "trace")]
    sink: Option<&'a mut dyn TraceSink>,
    #[cfg(not(feature = "trace"))]
    _marker: core::marker::PhantomData<&'a mut dyn TraceSink>,
}

impl core::fmt::Debug for Tracer<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Tracer").finish_non_exhaustive()
    }
}

impl<'a> Tracer<'a> {
    /// Creates a tracer that dispatches to the given sink.
    #[inline]
    #[must_use]
    pub fn new(sink: &'a mut dyn TraceSink) -> Self {
        Self::from_option(Some(sink))
    }

    /// Creates a tracer that discards all events.
    #[inline]
    #[must_use]
    pub fn none() -> Self {
        Self::from_option(None)
    }

    /// Creates a tracer from an optional sink.
    #[inline]
    #[must_use]
    pub fn from_option(sink: Option<&'a mut dyn TraceSink>) -> Self {
        #[cfg(feature = "trace")]
        {
            Self { sink }
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = sink;
            Self {
                _marker: core::marker::PhantomData,
            }
        }
    }

    /// Emits an [`AttachEvent`].
    #[inline]
    pub fn attach(&mut self, e: &AttachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_attach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`DetachEvent`].
    #[inline]
    pub fn detach(&mut self, e: &DetachEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_detach(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`RecomputeEvent`].
    #[inline]
    pub fn recompute(&mut self, e: &RecomputeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_recompute(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }

    /// Emits a [`StaleResizeEvent`].
    #[inline]
    pub fn stale_resize(&mut self, e: &StaleResizeEvent) {
        #[cfg(feature = "trace")]
        if let Some(s) = &mut self.sink {
            s.on_stale_resize(e);
        }
        #[cfg(not(feature = "trace"))]
        {
            _ = e;
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recompute() -> RecomputeEvent {
        RecomputeEvent {
            seq: 3,
            binding: BindingId::from_raw(1),
            size: Size::new(200.0, 100.0),
            params: CornerParams::new(20.0),
            effective_extent: Some(26.336),
            points: 74,
            clipped: true,
        }
    }

    #[test]
    fn noop_sink_compiles() {
        let mut sink = NoopSink;
        sink.on_attach(&AttachEvent {
            seq: 0,
            binding: BindingId::from_raw(1),
            replaced: None,
        });
        sink.on_recompute(&sample_recompute());
        sink.on_detach(&DetachEvent {
            seq: 4,
            binding: BindingId::from_raw(1),
            reason: DetachReason::Teardown,
        });
    }

    #[test]
    fn tracer_none_does_nothing() {
        let mut tracer = Tracer::none();
        tracer.recompute(&sample_recompute());
        tracer.stale_resize(&StaleResizeEvent {
            seq: 5,
            binding: BindingId::from_raw(1),
            current: None,
        });
    }

    #[cfg(feature = "trace")]
    #[test]
    fn tracer_dispatches_to_sink() {
        use alloc::vec::Vec;

        struct RecordingSink {
            seqs: Vec<u64>,
        }
        impl TraceSink for RecordingSink {
            fn on_recompute(&mut self, e: &RecomputeEvent) {
                self.seqs.push(e.seq);
            }
        }

        let mut sink = RecordingSink { seqs: Vec::new() };
        let mut tracer = Tracer::new(&mut sink);
        tracer.recompute(&sample_recompute());
        // Access sink after tracer is dropped.
        drop(tracer);
        assert_eq!(sink.seqs, &[3]);
    }
}
