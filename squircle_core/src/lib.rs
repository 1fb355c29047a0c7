// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Continuous-curvature corner paths and a resize-driven clip controller.
//!
//! `squircle_core` turns a rectangle into an iOS-style "squircle" outline
//! and keeps that outline in sync with a live, resizable element. It is
//! `no_std` compatible (with `alloc`) and knows nothing about any particular
//! UI toolkit.
//!
//! # Architecture
//!
//! ```text
//!   host element mounts
//!       │
//!       ▼
//!   ClipController::attach() ──► ClipHost::measure() ──► generate()
//!                                                           │
//!                 ┌─────────────────────────────────────────┘
//!                 ▼
//!   ClipStyle::from_path() ──► ClipHost::apply() ──► ClipHost::observe()
//!                                                           │
//!   ClipController::notify_resize(id) ◄── resize callback ──┘
//! ```
//!
//! **[`path`]**: Pure superellipse outline generator with the two-stage
//! radius clamp, producing a closed [`SquirclePath`](path::SquirclePath)
//! that renders as SVG path data, a CSS `path()` clip, or a `kurbo::BezPath`.
//!
//! **[`style`]**: [`ClipStyle`](style::ClipStyle): a clip path plus the
//! conventional corner radius used as a fallback before measurement.
//!
//! **[`controller`]**: [`ClipController`](controller::ClipController):
//! attach/detach lifecycle, generational binding handles, stale-notification
//! rejection, and teardown on drop.
//!
//! **[`backend`]**: The [`ClipHost`](backend::ClipHost) trait that platform
//! backends implement.
//!
//! **[`config`]**: Shape constants (step count, exponent, smoothing reach,
//! text precision).
//!
//! **[`preset`]**: Named radii for the component library's surfaces.
//!
//! **[`trace`]**: [`TraceSink`](trace::TraceSink) trait and controller
//! events, with a zero-overhead [`Tracer`](trace::Tracer) wrapper.
//!
//! # Crate features
//!
//! - `std` (disabled by default): Enables `std` support in dependencies.
//! - `trace` (disabled by default): Enables `Tracer` method bodies (one branch
//!   per call site).

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

extern crate alloc;

pub mod backend;
pub mod config;
pub mod controller;
pub mod path;
pub mod preset;
pub mod style;
pub mod trace;

pub use controller::{BindingId, BindingState, ClipController};
pub use path::{CornerParams, SquirclePath, generate};
pub use style::ClipStyle;
