// Copyright 2026 the Squircle Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Superellipse ("squircle") outline generation.
//!
//! [`generate`] maps a rectangle size and [`CornerParams`] to a closed
//! [`SquirclePath`]: four straight edges joined by corners traced on the
//! parametric superellipse
//!
//! ```text
//! x(t) = cx + a · sign(cos t) · |cos t|^(2/n)
//! y(t) = cy + a · sign(sin t) · |sin t|^(2/n)
//! ```
//!
//! with `n = 3`, where `a` is the effective corner extent (see
//! [`corner_extent`]) and `(cx, cy)` is the corner's inset center.
//!
//! Coordinates are in the rectangle's local space with the origin at the
//! top-left and `y` growing downward. The winding is clockwise on screen:
//! top edge left to right, right edge top to bottom, bottom edge right to
//! left, left edge bottom to top.

use alloc::vec::Vec;
use core::f64::consts::{FRAC_PI_2, PI};
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{BezPath, Point, Rect, Size};

use crate::config::{DEFAULT_SMOOTHING, PathConfig};

/// Caller-supplied corner shape for one usage site.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerParams {
    /// Nominal corner radius in pixels.
    pub radius: f64,
    /// Unitless smoothing factor. `0.0` is a pure superellipse; values near
    /// `1.0` extend the corner up to ~53% beyond `radius`. Values outside
    /// `[0, 1]` are accepted as-is.
    pub smoothing: f64,
}

impl CornerParams {
    /// Creates parameters with the default smoothing of `0.6`.
    #[inline]
    #[must_use]
    pub const fn new(radius: f64) -> Self {
        Self {
            radius,
            smoothing: DEFAULT_SMOOTHING,
        }
    }

    /// Returns a copy with a different smoothing factor.
    #[inline]
    #[must_use]
    pub const fn with_smoothing(mut self, smoothing: f64) -> Self {
        self.smoothing = smoothing;
        self
    }
}

/// The two clamped radii derived for a given rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CornerExtent {
    /// `min(radius, width / 2, height / 2)`.
    ///
    /// Reported for diagnostics only. Corner construction uses
    /// [`effective`](Self::effective), which is derived from the unclamped
    /// radius.
    pub nominal: f64,
    /// `min(radius · (1 + smoothing · reach), min(width, height) / 2)`.
    ///
    /// This is the `a` used for the corner arcs and the edge insets.
    pub effective: f64,
}

/// Returns `true` when `size` can carry a path (both sides finite and > 0).
#[inline]
#[must_use]
pub fn is_drawable(size: Size) -> bool {
    size.width.is_finite() && size.height.is_finite() && size.width > 0.0 && size.height > 0.0
}

/// Computes the corner extent for `size`, or `None` if `size` is degenerate.
///
/// Both clamps are kept: the nominal radius is clamped to half of each side,
/// but the effective extent is computed from the caller's radius and only
/// then capped at half the shorter side. With non-negative smoothing the two
/// orders agree; with negative smoothing the effective extent can differ
/// from one computed on the clamped radius.
#[must_use]
pub fn corner_extent(size: Size, params: CornerParams, config: &PathConfig) -> Option<CornerExtent> {
    if !is_drawable(size) {
        return None;
    }
    let half_min = size.width.min(size.height) / 2.0;
    let nominal = params.radius.min(size.width / 2.0).min(size.height / 2.0);
    let effective =
        (params.radius * (1.0 + params.smoothing * config.smoothing_reach)).min(half_min);
    Some(CornerExtent { nominal, effective })
}

/// Generates a squircle outline with the reference [`PathConfig`].
#[must_use]
pub fn generate(size: Size, params: CornerParams) -> SquirclePath {
    generate_with(size, params, &PathConfig::DEFAULT)
}

/// Generates a squircle outline for `size`.
///
/// Returns an empty path when `size` is degenerate (either side zero,
/// negative, or non-finite). Otherwise the path is closed: its last point is
/// an exact copy of its first.
#[must_use]
pub fn generate_with(size: Size, params: CornerParams, config: &PathConfig) -> SquirclePath {
    let Some(extent) = corner_extent(size, params, config) else {
        return SquirclePath::empty(size, config.precision);
    };

    let (w, h) = (size.width, size.height);
    let a = extent.effective;
    let steps = config.corner_steps();
    let power = config.parametric_power();

    let mut points = Vec::with_capacity(4 * (steps as usize + 2) + 2);
    points.push(Point::new(a, 0.0));

    points.push(Point::new(w - a, 0.0));
    trace_corner(&mut points, Point::new(w - a, a), a, -FRAC_PI_2, steps, power);

    points.push(Point::new(w, h - a));
    trace_corner(&mut points, Point::new(w - a, h - a), a, 0.0, steps, power);

    points.push(Point::new(a, h));
    trace_corner(&mut points, Point::new(a, h - a), a, FRAC_PI_2, steps, power);

    points.push(Point::new(0.0, a));
    trace_corner(&mut points, Point::new(a, a), a, PI, steps, power);

    points.push(points[0]);

    SquirclePath {
        points,
        size,
        extent: Some(extent),
        precision: config.precision,
    }
}

/// Appends `steps + 1` samples of the quarter-turn starting at `from`.
fn trace_corner(out: &mut Vec<Point>, center: Point, a: f64, from: f64, steps: u32, power: f64) {
    let step = FRAC_PI_2 / f64::from(steps);
    for i in 0..=steps {
        let t = from + f64::from(i) * step;
        let x = center.x + a * signed_pow(t.cos(), power);
        let y = center.y + a * signed_pow(t.sin(), power);
        out.push(Point::new(x, y));
    }
}

/// `sign(v) · |v|^p`.
#[inline]
fn signed_pow(v: f64, p: f64) -> f64 {
    let m = v.abs().powf(p);
    if v < 0.0 { -m } else { m }
}

/// A closed squircle outline as an ordered point list.
///
/// Consecutive points are joined by straight segments. A non-empty path
/// repeats its first point at the end.
#[derive(Clone, Debug, PartialEq)]
pub struct SquirclePath {
    points: Vec<Point>,
    size: Size,
    extent: Option<CornerExtent>,
    precision: usize,
}

impl SquirclePath {
    /// An empty path for a degenerate `size`.
    #[must_use]
    pub fn empty(size: Size, precision: usize) -> Self {
        Self {
            points: Vec::new(),
            size,
            extent: None,
            precision,
        }
    }

    /// Returns `true` if the path has no points.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of points, including the closing copy of the start point.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// The ordered points.
    #[inline]
    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// The rectangle size this path was generated for.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// The corner extent used, or `None` for an empty path.
    #[inline]
    #[must_use]
    pub fn extent(&self) -> Option<CornerExtent> {
        self.extent
    }

    /// Returns `true` if the path is non-empty and ends where it starts.
    #[must_use]
    pub fn is_closed(&self) -> bool {
        match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => self.points.len() > 1 && first == last,
            _ => false,
        }
    }

    /// Smallest rectangle containing every point, or `None` if empty.
    #[must_use]
    pub fn bounding_box(&self) -> Option<Rect> {
        let (first, rest) = self.points.split_first()?;
        let start = Rect::from_points(*first, *first);
        Some(rest.iter().fold(start, |r, p| r.union_pt(*p)))
    }

    /// Converts to a [`BezPath`] of one `MoveTo`, straight `LineTo`s, and a
    /// `ClosePath`.
    #[must_use]
    pub fn to_bez_path(&self) -> BezPath {
        let mut bez = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return bez;
        };
        bez.move_to(*first);
        // The closing copy is expressed by `ClosePath`.
        for p in &rest[..rest.len().saturating_sub(1)] {
            bez.line_to(*p);
        }
        bez.close_path();
        bez
    }

    /// SVG path data (`M x,y L x,y … Z`), or an empty string.
    #[must_use]
    pub fn svg_data(&self) -> alloc::string::String {
        alloc::format!("{self}")
    }

    /// The CSS `clip-path` value `path('…')`, or `None` for an empty path.
    #[must_use]
    pub fn css_clip_path(&self) -> Option<alloc::string::String> {
        if self.is_empty() {
            None
        } else {
            Some(alloc::format!("path('{self}')"))
        }
    }
}

impl fmt::Display for SquirclePath {
    /// Writes SVG path data with [`PathConfig::precision`] decimal digits.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some((first, rest)) = self.points.split_first() else {
            return Ok(());
        };
        let prec = self.precision;
        write!(f, "M{:.prec$},{:.prec$}", unsigned_zero(first.x), unsigned_zero(first.y))?;
        for p in &rest[..rest.len().saturating_sub(1)] {
            write!(f, " L{:.prec$},{:.prec$}", unsigned_zero(p.x), unsigned_zero(p.y))?;
        }
        f.write_str(" Z")
    }
}

/// Maps `-0.0` to `0.0` so it is not printed with a sign.
#[inline]
fn unsigned_zero(v: f64) -> f64 {
    v + 0.0
}

#[cfg(test)]
mod tests {
    #[cfg(not(feature = "std"))]
    use kurbo::common::FloatFuncs as _;

    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn reference_rectangle() {
        let path = generate(Size::new(200.0, 100.0), CornerParams::new(20.0));
        assert!(!path.is_empty());
        assert!(path.is_closed());
        assert_eq!(path.len(), 74, "4 × (17 samples + 1 edge end) + start + close");

        let extent = path.extent().unwrap();
        assert!(approx(extent.effective, 20.0 * 1.3168, 1e-12), "a = {}", extent.effective);
        assert_eq!(extent.nominal, 20.0);

        let bbox = path.bounding_box().unwrap();
        assert!(approx(bbox.x0, 0.0, EPS), "{bbox:?}");
        assert!(approx(bbox.y0, 0.0, EPS), "{bbox:?}");
        assert!(approx(bbox.x1, 200.0, EPS), "{bbox:?}");
        assert!(approx(bbox.y1, 100.0, EPS), "{bbox:?}");
    }

    #[test]
    fn edge_midpoints_touch_the_bounds() {
        let path = generate(Size::new(200.0, 100.0), CornerParams::new(20.0));
        let pts = path.points();
        let a = path.extent().unwrap().effective;
        // Straight-edge endpoints sit exactly on the rectangle sides.
        assert_eq!(pts[0], Point::new(a, 0.0));
        assert_eq!(pts[1], Point::new(200.0 - a, 0.0));
        assert_eq!(pts[19], Point::new(200.0, 100.0 - a));
        assert_eq!(pts[37], Point::new(a, 100.0));
        assert_eq!(pts[55], Point::new(0.0, a));
    }

    #[test]
    fn degenerate_sizes_produce_empty_paths() {
        for size in [
            Size::new(0.0, 100.0),
            Size::new(100.0, 0.0),
            Size::new(0.0, 0.0),
            Size::new(-5.0, 100.0),
            Size::new(100.0, -1.0),
            Size::new(f64::NAN, 100.0),
            Size::new(f64::INFINITY, 100.0),
        ] {
            let path = generate(size, CornerParams::new(20.0));
            assert!(path.is_empty(), "expected empty path for {size:?}");
            assert!(!path.is_closed());
            assert_eq!(path.svg_data(), "");
            assert_eq!(path.css_clip_path(), None);
            assert!(path.bounding_box().is_none());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let size = Size::new(317.5, 141.25);
        let params = CornerParams::new(26.0).with_smoothing(0.8);
        let a = generate(size, params);
        let b = generate(size, params);
        assert_eq!(a, b);
        assert_eq!(a.svg_data(), b.svg_data());
    }

    #[test]
    fn huge_radius_is_clamped_to_half_the_shorter_side() {
        let size = Size::new(40.0, 40.0);
        let path = generate(size, CornerParams::new(10_000.0));
        let extent = path.extent().unwrap();
        assert_eq!(extent.effective, 20.0);
        assert_eq!(extent.nominal, 20.0);
        for p in path.points() {
            assert!(
                p.x >= -EPS && p.x <= 40.0 + EPS && p.y >= -EPS && p.y <= 40.0 + EPS,
                "point {p:?} escapes the rectangle"
            );
        }
    }

    #[test]
    fn smoothing_never_shrinks_the_extent() {
        let size = Size::new(120.0, 60.0);
        let config = PathConfig::DEFAULT;
        let mut prev = f64::NEG_INFINITY;
        for i in 0..=20 {
            let smoothing = f64::from(i) / 20.0;
            let params = CornerParams::new(24.0).with_smoothing(smoothing);
            let a = corner_extent(size, params, &config).unwrap().effective;
            assert!(a >= prev, "extent shrank at smoothing {smoothing}: {a} < {prev}");
            assert!(a <= 30.0, "extent {a} exceeds half the shorter side");
            prev = a;
        }
        // 24 · 1.528 = 36.7 is capped at 30.
        assert_eq!(prev, 30.0);
    }

    #[test]
    fn zero_smoothing_uses_the_nominal_radius() {
        let params = CornerParams::new(12.0).with_smoothing(0.0);
        let extent = corner_extent(Size::new(100.0, 100.0), params, &PathConfig::DEFAULT).unwrap();
        assert_eq!(extent.effective, 12.0);
    }

    #[test]
    fn negative_smoothing_uses_the_unclamped_radius() {
        // nominal = 10, but effective comes from radius 100: 100 · (1 - 0.528) = 47.2,
        // capped at 10.
        let params = CornerParams::new(100.0).with_smoothing(-1.0);
        let extent = corner_extent(Size::new(20.0, 40.0), params, &PathConfig::DEFAULT).unwrap();
        assert_eq!(extent.nominal, 10.0);
        assert_eq!(extent.effective, 10.0);

        let params = CornerParams::new(30.0).with_smoothing(-1.0);
        let extent = corner_extent(Size::new(40.0, 200.0), params, &PathConfig::DEFAULT).unwrap();
        assert_eq!(extent.nominal, 20.0);
        assert!(approx(extent.effective, 30.0 * 0.472, 1e-12), "{extent:?}");
    }

    #[test]
    fn square_is_symmetric_under_quarter_turn() {
        let side = 90.0;
        let path = generate(Size::new(side, side), CornerParams::new(18.0));
        let pts = path.points();
        // The start point repeats as the last top-left sample and as the
        // closing copy; skipping both leaves 72 points, 18 per side.
        let cycle = &pts[1..pts.len() - 1];
        let n = cycle.len();
        let per_side = n / 4;
        assert_eq!((n, per_side), (72, 18));
        let c = side / 2.0;
        for (i, p) in cycle.iter().enumerate() {
            // Rotate 90° clockwise on screen about the center.
            let rotated = Point::new(c - (p.y - c), c + (p.x - c));
            let expected = cycle[(i + per_side) % n];
            assert!(
                approx(rotated.x, expected.x, 1e-6) && approx(rotated.y, expected.y, 1e-6),
                "point {i}: rotated {rotated:?} != {expected:?}"
            );
        }
    }

    #[test]
    fn svg_data_uses_fixed_precision() {
        let path = generate(Size::new(200.0, 100.0), CornerParams::new(20.0));
        let d = path.svg_data();
        assert!(d.starts_with("M26.3,0.0 L173.7,0.0 L173.7,0.0"), "got: {d}");
        assert!(d.contains(" L200.0,73.7"), "got: {d}");
        assert!(d.ends_with(" Z"), "got: {d}");
        assert!(!d.contains("-0.0"), "negative zero leaked: {d}");
        // One `M`, one `L` per remaining point except the closing copy.
        assert_eq!(d.matches('L').count(), path.len() - 2);
    }

    #[test]
    fn css_clip_path_wraps_svg_data() {
        let path = generate(Size::new(64.0, 64.0), CornerParams::new(12.0));
        let css = path.css_clip_path().unwrap();
        assert_eq!(css, alloc::format!("path('{}')", path.svg_data()));
    }

    #[test]
    fn precision_is_configurable() {
        let config = PathConfig::DEFAULT.with_precision(3);
        let path = generate_with(Size::new(200.0, 100.0), CornerParams::new(20.0), &config);
        assert!(path.svg_data().starts_with("M26.336,0.000"), "got: {}", path.svg_data());
    }

    #[test]
    fn step_count_controls_density() {
        let config = PathConfig::DEFAULT.with_steps(4);
        let path = generate_with(Size::new(50.0, 50.0), CornerParams::new(10.0), &config);
        assert_eq!(path.len(), 4 * (5 + 1) + 2);
        assert!(path.is_closed());
    }

    #[test]
    fn bez_path_is_a_single_closed_subpath() {
        use kurbo::PathEl;

        let path = generate(Size::new(80.0, 40.0), CornerParams::new(10.0));
        let bez = path.to_bez_path();
        let els = bez.elements();
        assert_eq!(els.len(), path.len(), "MoveTo + LineTos + ClosePath");
        assert!(matches!(els[0], PathEl::MoveTo(_)));
        assert!(matches!(els[els.len() - 1], PathEl::ClosePath));
        assert_eq!(
            els.iter().filter(|el| matches!(el, PathEl::MoveTo(_))).count(),
            1,
            "exactly one subpath"
        );
        assert!(generate(Size::ZERO, CornerParams::new(10.0)).to_bez_path().elements().is_empty());
    }
}
