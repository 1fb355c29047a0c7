// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The style a host applies to a clipped element.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use crate::path::SquirclePath;

/// Published clip state for one element.
///
/// While [`clip_path`](Self::clip_path) is `None` (before the first
/// measurement, after a detach, or for a degenerate size) hosts fall back to
/// ordinary corner rounding with [`corner_radius_fallback`](Self::corner_radius_fallback).
/// Once a path is available the conventional radius is zeroed so the path
/// alone shapes the corners.
#[derive(Clone, Debug, PartialEq)]
pub struct ClipStyle {
    clip_path: Option<String>,
    corner_radius_fallback: f64,
}

/// One inline style write performed by a host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StyleDeclaration {
    /// Set `property` to `value`.
    Set {
        /// CSS property name.
        property: &'static str,
        /// CSS value.
        value: String,
    },
    /// Remove `property` from the inline style.
    Remove {
        /// CSS property name.
        property: &'static str,
    },
}

impl ClipStyle {
    /// Unclipped style relying on ordinary rounding of `radius` pixels.
    #[must_use]
    pub const fn fallback(radius: f64) -> Self {
        Self {
            clip_path: None,
            corner_radius_fallback: radius,
        }
    }

    /// Style for a generated path; an empty path yields [`fallback`](Self::fallback).
    #[must_use]
    pub fn from_path(path: &SquirclePath, radius: f64) -> Self {
        Self {
            clip_path: path.css_clip_path(),
            corner_radius_fallback: radius,
        }
    }

    /// The CSS `clip-path` value, if clipped.
    #[inline]
    #[must_use]
    pub fn clip_path(&self) -> Option<&str> {
        self.clip_path.as_deref()
    }

    /// Returns `true` if a clip path is set.
    #[inline]
    #[must_use]
    pub fn is_clipped(&self) -> bool {
        self.clip_path.is_some()
    }

    /// Radius for ordinary rounding while unclipped.
    #[inline]
    #[must_use]
    pub fn corner_radius_fallback(&self) -> f64 {
        self.corner_radius_fallback
    }

    /// The conventional corner radius to apply: `0` while clipped.
    #[inline]
    #[must_use]
    pub fn border_radius(&self) -> f64 {
        if self.is_clipped() {
            0.0
        } else {
            self.corner_radius_fallback
        }
    }

    /// Replaces the fallback radius, keeping the clip path.
    pub(crate) fn set_corner_radius_fallback(&mut self, radius: f64) {
        self.corner_radius_fallback = radius;
    }

    /// The inline style writes that realize this style.
    #[must_use]
    pub fn declarations(&self) -> Vec<StyleDeclaration> {
        let mut out = Vec::with_capacity(3);
        match &self.clip_path {
            Some(path) => {
                out.push(StyleDeclaration::Set {
                    property: "clip-path",
                    value: path.clone(),
                });
                out.push(StyleDeclaration::Set {
                    property: "-webkit-clip-path",
                    value: path.clone(),
                });
            }
            None => {
                out.push(StyleDeclaration::Remove {
                    property: "clip-path",
                });
                out.push(StyleDeclaration::Remove {
                    property: "-webkit-clip-path",
                });
            }
        }
        out.push(StyleDeclaration::Set {
            property: "border-radius",
            value: px(self.border_radius()),
        });
        out
    }

    /// Renders the set declarations as an inline `style` attribute value.
    #[must_use]
    pub fn css_text(&self) -> String {
        let mut text = String::new();
        for decl in self.declarations() {
            if let StyleDeclaration::Set { property, value } = decl {
                if !text.is_empty() {
                    text.push(' ');
                }
                text.push_str(property);
                text.push_str(": ");
                text.push_str(&value);
                text.push(';');
            }
        }
        text
    }
}

impl Default for ClipStyle {
    fn default() -> Self {
        Self::fallback(crate::preset::SurfacePreset::Card.radius())
    }
}

fn px(v: f64) -> String {
    if v == 0.0 {
        String::from("0")
    } else {
        format!("{v}px")
    }
}
