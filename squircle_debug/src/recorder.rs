// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Compact binary event recording and decoding.
//!
//! [`RecorderSink`] implements [`TraceSink`] and encodes events into a
//! `Vec<u8>` as fixed-size little-endian records. [`decode`] reads them back
//! as an iterator of [`RecordedEvent`].
//!
//! Binding ids are stored as their raw generation, with `0` meaning "none"
//! (live bindings start at generation 1).

use kurbo::Size;
use squircle_core::controller::BindingId;
use squircle_core::path::CornerParams;
use squircle_core::trace::{
    AttachEvent, DetachEvent, DetachReason, RecomputeEvent, StaleResizeEvent, TraceSink,
};

// ---------------------------------------------------------------------------
// Event type discriminants
// ---------------------------------------------------------------------------

const TAG_ATTACH: u8 = 1;
const TAG_DETACH: u8 = 2;
const TAG_RECOMPUTE: u8 = 3;
const TAG_STALE_RESIZE: u8 = 4;

// ---------------------------------------------------------------------------
// RecorderSink
// ---------------------------------------------------------------------------

/// A [`TraceSink`] that encodes events into a compact binary buffer.
#[derive(Debug, Default)]
pub struct RecorderSink {
    buf: Vec<u8>,
}

impl RecorderSink {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a view of the recorded bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the recorder and returns the recorded bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    // -- encoding helpers --------------------------------------------------

    fn write_u8(&mut self, v: u8) {
        self.buf.push(v);
    }

    fn write_u32(&mut self, v: u32) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_f64(&mut self, v: f64) {
        self.buf.extend_from_slice(&v.to_le_bytes());
    }

    fn write_binding(&mut self, b: Option<BindingId>) {
        self.write_u32(b.map_or(0, BindingId::generation));
    }

    fn write_option_f64(&mut self, v: Option<f64>) {
        match v {
            Some(val) => {
                self.write_u8(1);
                self.write_f64(val);
            }
            None => {
                self.write_u8(0);
                self.write_f64(0.0);
            }
        }
    }

    fn write_reason(&mut self, r: DetachReason) {
        self.write_u8(match r {
            DetachReason::Detached => 0,
            DetachReason::Replaced => 1,
            DetachReason::Teardown => 2,
        });
    }
}

impl TraceSink for RecorderSink {
    fn on_attach(&mut self, e: &AttachEvent) {
        self.write_u8(TAG_ATTACH);
        self.write_u64(e.seq);
        self.write_binding(Some(e.binding));
        self.write_binding(e.replaced);
    }

    fn on_detach(&mut self, e: &DetachEvent) {
        self.write_u8(TAG_DETACH);
        self.write_u64(e.seq);
        self.write_binding(Some(e.binding));
        self.write_reason(e.reason);
    }

    fn on_recompute(&mut self, e: &RecomputeEvent) {
        self.write_u8(TAG_RECOMPUTE);
        self.write_u64(e.seq);
        self.write_binding(Some(e.binding));
        self.write_f64(e.size.width);
        self.write_f64(e.size.height);
        self.write_f64(e.params.radius);
        self.write_f64(e.params.smoothing);
        self.write_option_f64(e.effective_extent);
        self.write_u32(e.points);
        self.write_u8(u8::from(e.clipped));
    }

    fn on_stale_resize(&mut self, e: &StaleResizeEvent) {
        self.write_u8(TAG_STALE_RESIZE);
        self.write_u64(e.seq);
        self.write_binding(Some(e.binding));
        self.write_binding(e.current);
    }
}

// ---------------------------------------------------------------------------
// Decoder
// ---------------------------------------------------------------------------

/// A decoded event from a binary recording.
#[derive(Clone, Debug, PartialEq)]
pub enum RecordedEvent {
    /// An [`AttachEvent`].
    Attach(AttachEvent),
    /// A [`DetachEvent`].
    Detach(DetachEvent),
    /// A [`RecomputeEvent`].
    Recompute(RecomputeEvent),
    /// A [`StaleResizeEvent`].
    StaleResize(StaleResizeEvent),
}

impl RecordedEvent {
    /// Sequence number of the wrapped event.
    #[must_use]
    pub fn seq(&self) -> u64 {
        match self {
            Self::Attach(e) => e.seq,
            Self::Detach(e) => e.seq,
            Self::Recompute(e) => e.seq,
            Self::StaleResize(e) => e.seq,
        }
    }
}

/// Decodes a byte slice produced by [`RecorderSink`] into an iterator of
/// [`RecordedEvent`].
pub fn decode(bytes: &[u8]) -> DecodeIter<'_> {
    DecodeIter {
        data: bytes,
        pos: 0,
    }
}

/// Iterator over decoded events.
///
/// Stops at the first unknown tag or truncated record.
#[derive(Debug)]
pub struct DecodeIter<'a> {
    data: &'a [u8],
    pos: usize,
}

impl DecodeIter<'_> {
    fn take<const N: usize>(&mut self) -> Option<[u8; N]> {
        let bytes = self.data.get(self.pos..self.pos + N)?;
        self.pos += N;
        bytes.try_into().ok()
    }

    fn read_u8(&mut self) -> Option<u8> {
        self.take::<1>().map(|[v]| v)
    }

    fn read_u32(&mut self) -> Option<u32> {
        self.take().map(u32::from_le_bytes)
    }

    fn read_u64(&mut self) -> Option<u64> {
        self.take().map(u64::from_le_bytes)
    }

    fn read_f64(&mut self) -> Option<f64> {
        self.take().map(f64::from_le_bytes)
    }

    fn read_binding(&mut self) -> Option<Option<BindingId>> {
        let raw = self.read_u32()?;
        Some((raw != 0).then(|| BindingId::from_raw(raw)))
    }

    fn read_live_binding(&mut self) -> Option<BindingId> {
        self.read_binding()?
    }

    fn read_option_f64(&mut self) -> Option<Option<f64>> {
        let present = self.read_u8()?;
        let val = self.read_f64()?;
        Some((present != 0).then_some(val))
    }

    fn read_reason(&mut self) -> Option<DetachReason> {
        match self.read_u8()? {
            0 => Some(DetachReason::Detached),
            1 => Some(DetachReason::Replaced),
            2 => Some(DetachReason::Teardown),
            _ => None,
        }
    }

    fn decode_attach(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Attach(AttachEvent {
            seq: self.read_u64()?,
            binding: self.read_live_binding()?,
            replaced: self.read_binding()?,
        }))
    }

    fn decode_detach(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Detach(DetachEvent {
            seq: self.read_u64()?,
            binding: self.read_live_binding()?,
            reason: self.read_reason()?,
        }))
    }

    fn decode_recompute(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::Recompute(RecomputeEvent {
            seq: self.read_u64()?,
            binding: self.read_live_binding()?,
            size: Size::new(self.read_f64()?, self.read_f64()?),
            params: CornerParams::new(self.read_f64()?).with_smoothing(self.read_f64()?),
            effective_extent: self.read_option_f64()?,
            points: self.read_u32()?,
            clipped: self.read_u8()? != 0,
        }))
    }

    fn decode_stale_resize(&mut self) -> Option<RecordedEvent> {
        Some(RecordedEvent::StaleResize(StaleResizeEvent {
            seq: self.read_u64()?,
            binding: self.read_live_binding()?,
            current: self.read_binding()?,
        }))
    }
}

impl Iterator for DecodeIter<'_> {
    type Item = RecordedEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let tag = self.read_u8()?;
        match tag {
            TAG_ATTACH => self.decode_attach(),
            TAG_DETACH => self.decode_detach(),
            TAG_RECOMPUTE => self.decode_recompute(),
            TAG_STALE_RESIZE => self.decode_stale_resize(),
            _ => None, // unknown tag → stop iteration
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
