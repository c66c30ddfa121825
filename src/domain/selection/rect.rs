// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection/rect.rs
//
// Selection rectangle constrained to a bounded surface.

use std::fmt;
use std::str::FromStr;

use anyhow::{anyhow, Context};

use super::handle::{Axis, Handle, HitZone};
use crate::constant::{
    BORDER_THICKNESS, DEFAULT_RATIO_HEIGHT, DEFAULT_RATIO_WIDTH, MIN_SELECTION_SIZE,
};

/// Slack for float comparisons against the surface bounds.
const BOUNDS_EPSILON: f64 = 1e-9;

// =============================================================================
// Ratio
// =============================================================================

/// Aspect ratio as a pair of positive integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ratio {
    width: u32,
    height: u32,
}

impl Ratio {
    /// Returns `None` if either component is zero.
    pub fn new(width: u32, height: u32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Ratio component along `axis`.
    pub fn along(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => f64::from(self.width),
            Axis::Vertical => f64::from(self.height),
        }
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Self {
            width: DEFAULT_RATIO_WIDTH,
            height: DEFAULT_RATIO_HEIGHT,
        }
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.width, self.height)
    }
}

impl FromStr for Ratio {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s
            .split_once(':')
            .ok_or_else(|| anyhow!("ratio must look like W:H, got '{s}'"))?;
        let w: u32 = w.trim().parse().context("invalid ratio width")?;
        let h: u32 = h.trim().parse().context("invalid ratio height")?;
        Ratio::new(w, h).ok_or_else(|| anyhow!("ratio components must be positive, got '{s}'"))
    }
}

// =============================================================================
// Rect / Span
// =============================================================================

/// Plain rectangle snapshot handed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn as_tuple(&self) -> (f64, f64, f64, f64) {
        (self.x, self.y, self.width, self.height)
    }
}

/// Position and length of the rectangle along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub start: f64,
    pub len: f64,
}

impl Span {
    pub fn new(start: f64, len: f64) -> Self {
        Self { start, len }
    }

    pub fn end(&self) -> f64 {
        self.start + self.len
    }
}

// =============================================================================
// BoundedRect
// =============================================================================

/// The selection rectangle.
///
/// Every mutation keeps the rectangle inside `(0, 0)..(max_width, max_height)`,
/// at least `min_size` on both axes and, when the ratio is locked, at the
/// configured aspect ratio. Requests that would break one of these are
/// dropped and leave the rectangle as it was.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundedRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    max_width: f64,
    max_height: f64,
    min_size: f64,
    ratio: Ratio,
    ratio_locked: bool,
}

impl BoundedRect {
    /// Create a selector for a surface of `max_width` x `max_height`.
    ///
    /// The selector starts at the origin with half the surface size,
    /// adjusted to the ratio when it is locked.
    pub fn new(max_width: f64, max_height: f64, ratio: Ratio, ratio_locked: bool) -> Self {
        let mut rect = Self {
            x: 0.0,
            y: 0.0,
            width: MIN_SELECTION_SIZE.min(max_width),
            height: MIN_SELECTION_SIZE.min(max_height),
            max_width,
            max_height,
            min_size: MIN_SELECTION_SIZE,
            ratio,
            ratio_locked,
        };
        rect.set_width(max_width / 2.0);
        rect.set_height(max_height / 2.0);
        // On a thin surface both half-size requests can fail; reshape the
        // placeholder square from whichever side still fits.
        if ratio_locked {
            rect.check_ratio();
        }
        rect
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn bounds(&self) -> (f64, f64) {
        (self.max_width, self.max_height)
    }

    pub fn min_size(&self) -> f64 {
        self.min_size
    }

    pub fn ratio(&self) -> Ratio {
        self.ratio
    }

    pub fn is_ratio_locked(&self) -> bool {
        self.ratio_locked
    }

    pub fn span(&self, axis: Axis) -> Span {
        match axis {
            Axis::Horizontal => Span::new(self.x, self.width),
            Axis::Vertical => Span::new(self.y, self.height),
        }
    }

    /// Surface extent along `axis`.
    pub fn limit(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.max_width,
            Axis::Vertical => self.max_height,
        }
    }

    /// Inclusive point-in-rectangle test.
    pub fn contains(&self, px: f64, py: f64) -> bool {
        let rect = self.rect();
        px >= rect.x && px <= rect.right() && py >= rect.y && py <= rect.bottom()
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    /// Store a new ratio. Does not resize; follow with [`Self::check_ratio`].
    pub fn set_ratio(&mut self, width: u32, height: u32) {
        match Ratio::new(width, height) {
            Some(ratio) => self.ratio = ratio,
            None => log::warn!("Ignoring invalid selection ratio {width}:{height}"),
        }
    }

    pub fn set_ratio_locked(&mut self, locked: bool) {
        self.ratio_locked = locked;
    }

    pub fn set_bounds(&mut self, max_width: f64, max_height: f64) {
        self.max_width = max_width;
        self.max_height = max_height;
    }

    pub fn set_min_size(&mut self, size: f64) {
        self.min_size = size;
    }

    // -------------------------------------------------------------------------
    // Mutations
    // -------------------------------------------------------------------------

    /// Request a new width. Returns whether the request was applied.
    pub fn set_width(&mut self, width: f64) -> bool {
        self.set_length(Axis::Horizontal, width)
    }

    /// Request a new height. Returns whether the request was applied.
    pub fn set_height(&mut self, height: f64) -> bool {
        self.set_length(Axis::Vertical, height)
    }

    fn set_length(&mut self, axis: Axis, len: f64) -> bool {
        let span = self.span(axis);
        let len = len.max(1.0).min(self.limit(axis) - span.start);

        let cross = axis.perpendicular();
        let cross_len = if self.ratio_locked {
            len * self.ratio.along(cross) / self.ratio.along(axis)
        } else {
            self.span(cross).len
        };

        let (width, height) = match axis {
            Axis::Horizontal => (len, cross_len),
            Axis::Vertical => (cross_len, len),
        };
        self.place(self.x, self.y, width, height)
    }

    /// Move the top-left corner, clamping so the rectangle stays in bounds.
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.x = x.min(self.max_width - self.width).max(0.0);
        self.y = y.min(self.max_height - self.height).max(0.0);
    }

    /// Re-derive a consistent size after the ratio changed: first from the
    /// current width, then from the current height.
    pub fn check_ratio(&mut self) {
        self.set_width(self.width);
        self.set_height(self.height);
    }

    /// Commit a complete rectangle if it satisfies the bounds and minimum
    /// size. Returns whether it was applied.
    pub fn place(&mut self, x: f64, y: f64, width: f64, height: f64) -> bool {
        if !self.fits(x, y, width, height) {
            log::trace!("Rejected selection {x},{y} {width}x{height}");
            return false;
        }
        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;
        true
    }

    /// Commit a rectangle given as one span per axis.
    pub fn place_spans(&mut self, horizontal: Span, vertical: Span) -> bool {
        self.place(horizontal.start, vertical.start, horizontal.len, vertical.len)
    }

    fn fits(&self, x: f64, y: f64, width: f64, height: f64) -> bool {
        x >= 0.0
            && y >= 0.0
            && width >= self.min_size
            && height >= self.min_size
            && x + width <= self.max_width + BOUNDS_EPSILON
            && y + height <= self.max_height + BOUNDS_EPSILON
    }

    // -------------------------------------------------------------------------
    // Hit testing
    // -------------------------------------------------------------------------

    /// Classify a surface point against the selector.
    ///
    /// Points within [`BORDER_THICKNESS`] of an edge map to that edge's
    /// handle; where two edges meet, the corner wins.
    pub fn hit_test(&self, px: f64, py: f64) -> HitZone {
        if !self.contains(px, py) {
            return HitZone::Outside;
        }

        let rect = self.rect();
        let left = px <= rect.x + BORDER_THICKNESS;
        let right = px >= rect.right() - BORDER_THICKNESS;
        let top = py <= rect.y + BORDER_THICKNESS;
        let bottom = py >= rect.bottom() - BORDER_THICKNESS;

        let handle = if top && left {
            Handle::TopLeft
        } else if top && right {
            Handle::TopRight
        } else if bottom && left {
            Handle::BottomLeft
        } else if bottom && right {
            Handle::BottomRight
        } else if left {
            Handle::Left
        } else if right {
            Handle::Right
        } else if top {
            Handle::Top
        } else if bottom {
            Handle::Bottom
        } else {
            return HitZone::Inside;
        };
        HitZone::Handle(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn free_rect(max_w: f64, max_h: f64) -> BoundedRect {
        BoundedRect::new(max_w, max_h, Ratio::default(), false)
    }

    #[test]
    fn starts_at_half_surface() {
        let rect = free_rect(800.0, 600.0);
        assert_eq!(rect.rect(), Rect::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn starts_at_locked_ratio() {
        let rect = BoundedRect::new(800.0, 600.0, Ratio::default(), true);
        let (w, h) = rect.size();
        assert!((w / h - 16.0 / 9.0).abs() < 1e-9);
        assert_eq!(h, 300.0);
    }

    #[test]
    fn thin_surface_starts_at_locked_ratio() {
        let rect = BoundedRect::new(800.0, 30.0, Ratio::new(16, 9).unwrap(), true);
        let (w, h) = rect.size();
        assert_eq!(h, 20.0);
        assert!((h * 16.0 / 9.0 - w).abs() <= 1.0, "{w}x{h}");
    }

    #[test]
    fn width_is_clamped_to_surface() {
        let mut rect = free_rect(800.0, 600.0);
        assert!(rect.set_width(100.0));
        rect.move_to(600.0, 0.0);
        assert!(rect.set_width(1000.0));
        assert_eq!(rect.size().0, 200.0);
    }

    #[test]
    fn zero_width_is_rejected() {
        let mut rect = free_rect(800.0, 600.0);
        let before = rect.clone();
        assert!(!rect.set_width(0.0));
        assert_eq!(rect, before);
    }

    #[test]
    fn locked_width_rejected_when_height_overflows() {
        let mut rect = BoundedRect::new(800.0, 100.0, Ratio::new(1, 1).unwrap(), true);
        let before = rect.clone();
        // The surface is 800 wide, but a square of 400 cannot fit in 100.
        assert!(!rect.set_width(400.0));
        assert_eq!(rect, before);
    }

    #[test]
    fn bounds_and_min_size_apply_to_later_requests() {
        let mut rect = free_rect(800.0, 600.0);
        assert!(rect.set_width(900.0));
        assert_eq!(rect.size().0, 800.0);

        rect.set_bounds(1000.0, 800.0);
        assert!(rect.set_width(900.0));
        assert_eq!(rect.size().0, 900.0);

        rect.set_min_size(50.0);
        assert!(!rect.set_height(40.0));
        assert!(rect.set_height(50.0));
        assert_eq!(rect.size(), (900.0, 50.0));
    }

    #[test]
    fn set_ratio_rejects_zero() {
        let mut rect = free_rect(800.0, 600.0);
        rect.set_ratio(0, 3);
        assert_eq!(rect.ratio(), Ratio::default());
        rect.set_ratio(4, 3);
        assert_eq!(rect.ratio(), Ratio::new(4, 3).unwrap());
    }

    #[test]
    fn check_ratio_reshapes_from_width() {
        let mut rect = free_rect(800.0, 600.0);
        rect.set_ratio(1, 1);
        rect.set_ratio_locked(true);
        rect.check_ratio();
        assert_eq!(rect.size(), (400.0, 400.0));
    }

    #[test]
    fn check_ratio_falls_back_to_height() {
        let mut rect = free_rect(800.0, 600.0);
        assert!(rect.place(0.0, 0.0, 700.0, 100.0));
        rect.set_ratio(1, 1);
        rect.set_ratio_locked(true);
        // 700x700 overflows the surface, so the height drives the reshape.
        rect.check_ratio();
        assert_eq!(rect.size(), (100.0, 100.0));
    }

    #[test]
    fn move_clamps_negative() {
        let mut rect = free_rect(800.0, 600.0);
        rect.move_to(-50.0, -1.0);
        assert_eq!(rect.position(), (0.0, 0.0));
    }

    #[test]
    fn place_rejects_out_of_bounds() {
        let mut rect = free_rect(800.0, 600.0);
        assert!(!rect.place(700.0, 0.0, 200.0, 100.0));
        assert!(!rect.place(0.0, 0.0, 10.0, 100.0));
        assert!(rect.place(100.0, 50.0, 200.0, 100.0));
        assert_eq!(rect.rect(), Rect::new(100.0, 50.0, 200.0, 100.0));
    }

    #[test]
    fn hit_test_zones() {
        let mut rect = free_rect(800.0, 600.0);
        assert!(rect.place(100.0, 100.0, 200.0, 200.0));

        assert_eq!(rect.hit_test(50.0, 50.0), HitZone::Outside);
        assert_eq!(rect.hit_test(200.0, 200.0), HitZone::Inside);
        assert_eq!(rect.hit_test(200.0, 103.0), HitZone::Handle(Handle::Top));
        assert_eq!(rect.hit_test(200.0, 297.0), HitZone::Handle(Handle::Bottom));
        assert_eq!(rect.hit_test(101.0, 200.0), HitZone::Handle(Handle::Left));
        assert_eq!(rect.hit_test(300.0, 200.0), HitZone::Handle(Handle::Right));
        assert_eq!(rect.hit_test(298.0, 102.0), HitZone::Handle(Handle::TopRight));
        assert_eq!(rect.hit_test(102.0, 298.0), HitZone::Handle(Handle::BottomLeft));
        assert_eq!(rect.hit_test(300.0, 300.0), HitZone::Handle(Handle::BottomRight));
    }

    #[test]
    fn ratio_parses_and_displays() {
        let ratio: Ratio = "4:3".parse().unwrap();
        assert_eq!(ratio, Ratio::new(4, 3).unwrap());
        assert_eq!(ratio.to_string(), "4:3");
        assert!("4x3".parse::<Ratio>().is_err());
        assert!("0:3".parse::<Ratio>().is_err());
    }
}
