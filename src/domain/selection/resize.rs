// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection/resize.rs
//
// Handle-driven resize of the selection rectangle.
//
// Every handle is described by the side it drags on each axis (see
// `Handle::side`). The opposite edges stay fixed. Corner handles fit the
// dragged area to the ratio; edge handles derive the cross axis from the
// ratio and grow it around its centre.

use super::handle::{Axis, Handle, Side};
use super::rect::{BoundedRect, Span};
use crate::constant::RESIZE_CORRECTION;

/// Resize `rect` by dragging `handle` to the surface point `(px, py)`.
///
/// Returns whether the rectangle changed. Results that would violate the
/// rectangle's constraints are dropped.
pub fn resize(rect: &mut BoundedRect, handle: Handle, px: f64, py: f64) -> bool {
    match (handle.side(Axis::Horizontal), handle.side(Axis::Vertical)) {
        (Some(h_side), Some(v_side)) => resize_corner(rect, h_side, v_side, px, py),
        (Some(side), None) => resize_edge(rect, Axis::Horizontal, side, px),
        (None, Some(side)) => resize_edge(rect, Axis::Vertical, side, py),
        (None, None) => false,
    }
}

fn resize_corner(rect: &mut BoundedRect, h_side: Side, v_side: Side, px: f64, py: f64) -> bool {
    let area_x = drag_edge(rect, Axis::Horizontal, h_side, px);
    let area_y = drag_edge(rect, Axis::Vertical, v_side, py);

    let (width, height) = fit_to_area(rect, area_x.len, area_y.len);

    rect.place_spans(
        anchor(area_x, h_side, width),
        anchor(area_y, v_side, height),
    )
}

fn resize_edge(rect: &mut BoundedRect, axis: Axis, side: Side, pointer: f64) -> bool {
    let pointer = match side {
        Side::Start => pointer - RESIZE_CORRECTION,
        Side::End => pointer + RESIZE_CORRECTION,
    };
    let dragged = drag_edge(rect, axis, side, pointer);
    let cross = axis.perpendicular();

    let (dragged, cross_span) = if rect.is_ratio_locked() {
        let ratio = rect.ratio();
        let cross_len = (dragged.len * ratio.along(cross) / ratio.along(axis)).trunc();
        let cross_span = grow_from_center(rect.span(cross), cross_len, rect.limit(cross));
        let len = (cross_span.len * ratio.along(axis) / ratio.along(cross)).trunc();
        (anchor(dragged, side, len), cross_span)
    } else {
        (dragged, rect.span(cross))
    };

    match axis {
        Axis::Horizontal => rect.place_spans(dragged, cross_span),
        Axis::Vertical => rect.place_spans(cross_span, dragged),
    }
}

/// Move the `side` edge of `rect` on `axis` to `pointer`, keeping the other
/// edge fixed, at least `min_size` away from it and inside the surface.
fn drag_edge(rect: &BoundedRect, axis: Axis, side: Side, pointer: f64) -> Span {
    let span = rect.span(axis);
    let min = rect.min_size();
    match side {
        Side::Start => {
            let end = span.end();
            let start = pointer.max(0.0).min(end - min);
            Span::new(start, end - start)
        }
        Side::End => {
            let end = pointer.max(span.start + min).min(rect.limit(axis));
            Span::new(span.start, end - span.start)
        }
    }
}

/// Shrink `area` to `len`, keeping the edge opposite to `side` in place.
fn anchor(area: Span, side: Side, len: f64) -> Span {
    match side {
        Side::Start => Span::new(area.end() - len, len),
        Side::End => Span::new(area.start, len),
    }
}

/// Largest ratio-conforming size inside `area_width` x `area_height`.
/// Without a ratio lock the area is returned unchanged.
fn fit_to_area(rect: &BoundedRect, area_width: f64, area_height: f64) -> (f64, f64) {
    if !rect.is_ratio_locked() {
        return (area_width, area_height);
    }

    let ratio = rect.ratio();
    let (rw, rh) = (ratio.along(Axis::Horizontal), ratio.along(Axis::Vertical));
    if area_height / rh < area_width / rw {
        let width = (area_height * rw / rh).trunc();
        (width, area_height)
    } else {
        let height = (area_width * rh / rw).trunc();
        (area_width, height)
    }
}

/// Resize `current` to `len` around its centre, sliding it back inside
/// `0..limit` if it would overflow on one side.
fn grow_from_center(current: Span, len: f64, limit: f64) -> Span {
    if len > limit {
        return Span::new(0.0, limit);
    }

    let start = current.start - ((len - current.len) / 2.0).trunc();
    if start < 0.0 {
        Span::new(0.0, len)
    } else if start + len > limit {
        Span::new(limit - len, len)
    } else {
        Span::new(start, len)
    }
}
