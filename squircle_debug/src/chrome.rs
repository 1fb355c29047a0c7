// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chrome Trace Event Format exporter.
//!
//! [`export`] reads recorded bytes from a [`RecorderSink`](super::recorder::RecorderSink)
//! and writes [Chrome Trace Event Format][format] JSON to the given writer.
//!
//! Controller events carry no wall-clock time, so the event sequence number
//! is used as the timestamp (one microsecond per event). Each binding gets
//! its own thread track: attach opens a duration slice, detach closes it,
//! and recomputes and stale resizes appear as instants inside it.
//!
//! [format]: https://docs.google.com/document/d/1CvAClvFfyA5R-PhYUmn5OOQtYMH4h6I0nSsKchNAySU

use std::io::{self, Write};

use serde_json::{Value, json};

use crate::recorder::{RecordedEvent, decode};

/// Exports recorded events as Chrome Trace Event Format JSON.
///
/// The output is a complete JSON array of trace event objects, suitable for
/// loading into `chrome://tracing` or [Perfetto](https://ui.perfetto.dev/).
pub fn export(bytes: &[u8], writer: &mut dyn Write) -> io::Result<()> {
    let mut events: Vec<Value> = Vec::new();

    for recorded in decode(bytes) {
        match recorded {
            RecordedEvent::Attach(e) => {
                events.push(json!({
                    "ph": "B",
                    "name": format!("binding {}", e.binding.generation()),
                    "cat": "Binding",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": e.binding.generation(),
                    "args": {
                        "replaced": e.replaced.map(|b| b.generation()),
                    }
                }));
            }
            RecordedEvent::Detach(e) => {
                events.push(json!({
                    "ph": "E",
                    "name": format!("binding {}", e.binding.generation()),
                    "cat": "Binding",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": e.binding.generation(),
                    "args": {
                        "reason": format!("{:?}", e.reason),
                    }
                }));
            }
            RecordedEvent::Recompute(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "Recompute",
                    "cat": "Clip",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": e.binding.generation(),
                    "s": "t",
                    "args": {
                        "width": e.size.width,
                        "height": e.size.height,
                        "radius": e.params.radius,
                        "smoothing": e.params.smoothing,
                        "effective_extent": e.effective_extent,
                        "points": e.points,
                        "clipped": e.clipped,
                    }
                }));
            }
            RecordedEvent::StaleResize(e) => {
                events.push(json!({
                    "ph": "i",
                    "name": "StaleResize",
                    "cat": "Clip",
                    "ts": e.seq,
                    "pid": 0,
                    "tid": e.binding.generation(),
                    "s": "t",
                    "args": {
                        "current": e.current.map(|b| b.generation()),
                    }
                }));
            }
        }
    }

    serde_json::to_writer_pretty(writer, &events)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::RecorderSink;
    use kurbo::Size;
    use squircle_core::controller::BindingId;
    use squircle_core::path::CornerParams;
    use squircle_core::trace::{
        AttachEvent, DetachEvent, DetachReason, RecomputeEvent, StaleResizeEvent, TraceSink,
    };

    #[test]
    fn export_produces_valid_json() {
        let mut rec = RecorderSink::new();
        rec.on_attach(&AttachEvent {
            seq: 0,
            binding: BindingId::from_raw(1),
            replaced: None,
        });
        rec.on_recompute(&RecomputeEvent {
            seq: 1,
            binding: BindingId::from_raw(1),
            size: Size::new(200.0, 100.0),
            params: CornerParams::new(20.0),
            effective_extent: Some(26.336),
            points: 74,
            clipped: true,
        });
        rec.on_stale_resize(&StaleResizeEvent {
            seq: 2,
            binding: BindingId::from_raw(3),
            current: Some(BindingId::from_raw(1)),
        });
        rec.on_detach(&DetachEvent {
            seq: 3,
            binding: BindingId::from_raw(1),
            reason: DetachReason::Detached,
        });

        let mut out = Vec::new();
        export(rec.as_bytes(), &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();

        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert_eq!(parsed.len(), 4);

        assert_eq!(parsed[0]["ph"], "B");
        assert_eq!(parsed[0]["name"], "binding 1");
        assert_eq!(parsed[0]["args"]["replaced"], Value::Null);

        assert_eq!(parsed[1]["ph"], "i");
        assert_eq!(parsed[1]["name"], "Recompute");
        assert_eq!(parsed[1]["tid"], 1);
        assert_eq!(parsed[1]["args"]["points"], 74);
        assert_eq!(parsed[1]["args"]["clipped"], true);

        assert_eq!(parsed[2]["name"], "StaleResize");
        assert_eq!(parsed[2]["tid"], 3);
        assert_eq!(parsed[2]["args"]["current"], 1);

        assert_eq!(parsed[3]["ph"], "E");
        assert_eq!(parsed[3]["ts"], 3);
        assert_eq!(parsed[3]["args"]["reason"], "Detached");
    }

    #[test]
    fn export_empty_recording() {
        let mut out = Vec::new();
        export(&[], &mut out).unwrap();
        let json_str = String::from_utf8(out).unwrap();
        let parsed: Vec<Value> = serde_json::from_str(&json_str).unwrap();
        assert!(parsed.is_empty());
    }
}
