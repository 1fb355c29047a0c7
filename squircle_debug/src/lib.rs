// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording, pretty-printing, and Chrome trace export for squircle
//! diagnostics.
//!
//! This crate provides [`TraceSink`](squircle_core::trace::TraceSink)
//! implementations for watching a clip controller during development:
//!
//! - [`pretty::PrettyPrintSink`]: one human-readable line per event.
//! - [`recorder::RecorderSink`]: compact binary recording, read back with
//!   [`recorder::decode`].
//! - [`chrome::export`]: writes Chrome Trace Event Format JSON from recorded
//!   bytes.

pub mod chrome;
pub mod pretty;
pub mod recorder;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::io::{self, Write};
    use std::rc::Rc;

    use kurbo::Size;
    use squircle_core::backend::ClipHost;
    use squircle_core::controller::{BindingId, ClipController};
    use squircle_core::path::CornerParams;
    use squircle_core::style::ClipStyle;

    use crate::pretty::PrettyPrintSink;

    #[derive(Clone, Default)]
    struct SharedBuf(Rc<RefCell<Vec<u8>>>);

    impl Write for SharedBuf {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.borrow_mut().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Targets are their own sizes.
    struct SizeHost;

    impl ClipHost for SizeHost {
        type Target = Size;
        type Subscription = ();

        fn measure(&self, target: &Size) -> Size {
            *target
        }

        fn observe(&mut self, _target: &Size, _binding: BindingId) {}

        fn disconnect(&mut self, _subscription: ()) {}

        fn apply(&mut self, _target: &Size, _style: &ClipStyle) {}
    }

    #[test]
    fn controller_lifecycle_pretty_prints() {
        let buf = SharedBuf::default();
        let mut controller = ClipController::new(SizeHost, CornerParams::new(20.0));
        controller.set_trace_sink(Box::new(PrettyPrintSink::with_writer(buf.clone())));

        let first = controller.attach(Size::new(200.0, 100.0));
        controller.attach(Size::ZERO);
        assert!(!controller.notify_resize(first));
        drop(controller);

        let output = String::from_utf8(buf.0.borrow().clone()).unwrap();
        let tags: Vec<_> = output
            .lines()
            .map(|line| line.split(' ').next().unwrap_or_default())
            .collect();
        assert_eq!(
            tags,
            [
                "[attach]",
                "[recompute]",
                "[detach]",
                "[attach]",
                "[recompute]",
                "[stale]",
                "[detach]",
            ]
        );
        assert!(output.contains("extent=26.336 points=74 clip"), "got: {output}");
        assert!(output.contains("reason=replaced"), "got: {output}");
        assert!(output.ends_with("reason=teardown\n"), "got: {output}");
    }
}
