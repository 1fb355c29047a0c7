// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Named corner radii for the component library's surfaces.

use crate::path::CornerParams;

/// A surface kind with its conventional corner radius.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfacePreset {
    /// Tooltips and small popovers (12 px).
    Tooltip,
    /// Path and text inputs (18 px).
    Input,
    /// Empty states and top-bar menus (20 px).
    Compact,
    /// Playground showcase cards (24 px).
    Showcase,
    /// Cards (26 px). The default.
    #[default]
    Card,
    /// Playground panels (28 px).
    Panel,
    /// Modal dialogs (32 px).
    Modal,
}

impl SurfacePreset {
    /// Every preset, smallest radius first.
    pub const ALL: [Self; 7] = [
        Self::Tooltip,
        Self::Input,
        Self::Compact,
        Self::Showcase,
        Self::Card,
        Self::Panel,
        Self::Modal,
    ];

    /// Nominal corner radius in pixels.
    #[must_use]
    pub const fn radius(self) -> f64 {
        match self {
            Self::Tooltip => 12.0,
            Self::Input => 18.0,
            Self::Compact => 20.0,
            Self::Showcase => 24.0,
            Self::Card => 26.0,
            Self::Panel => 28.0,
            Self::Modal => 32.0,
        }
    }

    /// Corner parameters with the default smoothing.
    #[must_use]
    pub const fn params(self) -> CornerParams {
        CornerParams::new(self.radius())
    }

    /// Short lowercase label.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Tooltip => "tooltip",
            Self::Input => "input",
            Self::Compact => "compact",
            Self::Showcase => "showcase",
            Self::Card => "card",
            Self::Panel => "panel",
            Self::Modal => "modal",
        }
    }
}

impl Default for CornerParams {
    fn default() -> Self {
        SurfacePreset::Card.params()
    }
}
