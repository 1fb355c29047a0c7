// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Human-readable trace output.
//!
//! [`PrettyPrintSink`] implements [`TraceSink`] and writes one line per event
//! to a [`Write`](std::io::Write) destination (default: stderr).

use std::io::Write;

use squircle_core::controller::BindingId;
use squircle_core::trace::{
    AttachEvent, DetachEvent, DetachReason, RecomputeEvent, StaleResizeEvent, TraceSink,
};

/// Writes human-readable trace lines to a [`Write`](std::io::Write) destination.
pub struct PrettyPrintSink<W: Write = Box<dyn Write>> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for PrettyPrintSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PrettyPrintSink").finish_non_exhaustive()
    }
}

impl PrettyPrintSink {
    /// Creates a sink that writes to stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            writer: Box::new(std::io::stderr()),
        }
    }

    /// Creates a sink that writes to a boxed writer.
    #[must_use]
    pub fn new(writer: Box<dyn Write>) -> Self {
        Self { writer }
    }
}

impl<W: Write> PrettyPrintSink<W> {
    /// Creates a sink that writes to the given destination.
    #[must_use]
    pub fn with_writer(writer: W) -> Self {
        Self { writer }
    }

    /// Consumes the sink and returns its writer.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }
}

fn reason_name(reason: DetachReason) -> &'static str {
    match reason {
        DetachReason::Detached => "detached",
        DetachReason::Replaced => "replaced",
        DetachReason::Teardown => "teardown",
    }
}

fn binding_name(binding: Option<BindingId>) -> String {
    binding.map_or_else(|| "-".into(), |b| b.generation().to_string())
}

impl<W: Write> TraceSink for PrettyPrintSink<W> {
    fn on_attach(&mut self, e: &AttachEvent) {
        let _ = writeln!(
            self.writer,
            "[attach] seq={} binding={} replaced={}",
            e.seq,
            e.binding.generation(),
            binding_name(e.replaced),
        );
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        let _ = writeln!(
            self.writer,
            "[detach] seq={} binding={} reason={}",
            e.seq,
            e.binding.generation(),
            reason_name(e.reason),
        );
    }

    fn on_recompute(&mut self, e: &RecomputeEvent) {
        let clip = if e.clipped { "clip" } else { "fallback" };
        let extent = e
            .effective_extent
            .map_or_else(|| "-".into(), |a| format!("{a:.3}"));
        let _ = writeln!(
            self.writer,
            "[recompute] seq={} binding={} size={:.1}x{:.1} radius={:.1} \
             smoothing={:.2} extent={extent} points={} {clip}",
            e.seq,
            e.binding.generation(),
            e.size.width,
            e.size.height,
            e.params.radius,
            e.params.smoothing,
            e.points,
        );
    }

    fn on_stale_resize(&mut self, e: &StaleResizeEvent) {
        let _ = writeln!(
            self.writer,
            "[stale] seq={} binding={} current={}",
            e.seq,
            e.binding.generation(),
            binding_name(e.current),
        );
    }
}
