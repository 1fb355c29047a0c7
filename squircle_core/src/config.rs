// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generator configuration.
//!
//! [`PathConfig`] bundles the fixed shape constants of the superellipse
//! generator. They are not per-call inputs: a controller is created with one
//! configuration and keeps it, while [`CornerParams`](crate::path::CornerParams)
//! may change between recomputes.

/// Samples traced across each corner's quarter-turn (reference density).
pub const DEFAULT_STEPS: u32 = 16;

/// Superellipse exponent `n` in `|x/a|^n + |y/a|^n = 1`.
pub const DEFAULT_EXPONENT: f64 = 3.0;

/// Default smoothing factor, tuned to approximate Apple's corner continuity.
pub const DEFAULT_SMOOTHING: f64 = 0.6;

/// How far full smoothing (1.0) extends the corner beyond the nominal radius,
/// as a fraction of that radius.
pub const SMOOTHING_REACH: f64 = 0.528;

/// Decimal digits written per coordinate in path text.
pub const DEFAULT_PRECISION: usize = 1;

/// Shape constants for [`generate_with`](crate::path::generate_with).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathConfig {
    /// Samples per corner quarter-turn. `0` is treated as `1`.
    pub steps: u32,
    /// Superellipse exponent.
    pub exponent: f64,
    /// Corner reach gained per unit of smoothing.
    pub smoothing_reach: f64,
    /// Decimal digits per coordinate in SVG / CSS path text.
    pub precision: usize,
}

impl PathConfig {
    /// The reference configuration: 16 steps, `n = 3`, reach 0.528, one
    /// decimal digit.
    pub const DEFAULT: Self = Self {
        steps: DEFAULT_STEPS,
        exponent: DEFAULT_EXPONENT,
        smoothing_reach: SMOOTHING_REACH,
        precision: DEFAULT_PRECISION,
    };

    /// Returns a copy with a different corner sampling density.
    #[must_use]
    pub const fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Returns a copy with a different superellipse exponent.
    #[must_use]
    pub const fn with_exponent(mut self, exponent: f64) -> Self {
        self.exponent = exponent;
        self
    }

    /// Returns a copy with a different smoothing reach.
    #[must_use]
    pub const fn with_smoothing_reach(mut self, reach: f64) -> Self {
        self.smoothing_reach = reach;
        self
    }

    /// Returns a copy with a different path text precision.
    #[must_use]
    pub const fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Effective number of samples per corner, never below 1.
    #[inline]
    #[must_use]
    pub const fn corner_steps(&self) -> u32 {
        if self.steps == 0 { 1 } else { self.steps }
    }

    /// Exponent applied to `|cos t|` and `|sin t|` in the parametric form
    /// (`2 / n`).
    #[inline]
    #[must_use]
    pub fn parametric_power(&self) -> f64 {
        2.0 / self.exponent
    }
}

impl Default for PathConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
