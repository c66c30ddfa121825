// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/overlay.rs
//
// Crop overlay presentation: selector quads and cursor lookup.

use crate::constant::{BORDER_SIZE, FILL_ALPHA, FILL_LIGHTEN};
use crate::domain::selection::{Handle, HitZone, Rect};

/// RGBA colour, channels in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub fn from_rgb([r, g, b]: [f32; 3]) -> Self {
        Self { r, g, b, a: 1.0 }
    }
}

/// Filled rectangle to draw on top of the image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub bounds: Rect,
    pub color: Color,
}

/// Cursor the host should show for the current pointer zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorKind {
    Default,
    Move,
    TopSide,
    BottomSide,
    LeftSide,
    RightSide,
    TopLeftCorner,
    TopRightCorner,
    BottomLeftCorner,
    BottomRightCorner,
}

pub fn cursor_for(zone: HitZone, dragging: bool) -> CursorKind {
    if dragging {
        return CursorKind::Move;
    }
    match zone {
        HitZone::Outside | HitZone::Inside => CursorKind::Default,
        HitZone::Handle(Handle::Top) => CursorKind::TopSide,
        HitZone::Handle(Handle::Bottom) => CursorKind::BottomSide,
        HitZone::Handle(Handle::Left) => CursorKind::LeftSide,
        HitZone::Handle(Handle::Right) => CursorKind::RightSide,
        HitZone::Handle(Handle::TopLeft) => CursorKind::TopLeftCorner,
        HitZone::Handle(Handle::TopRight) => CursorKind::TopRightCorner,
        HitZone::Handle(Handle::BottomLeft) => CursorKind::BottomLeftCorner,
        HitZone::Handle(Handle::BottomRight) => CursorKind::BottomRightCorner,
    }
}

/// Quads for the selector: four border strips in `colour` and a
/// translucent, lightened fill between them.
pub fn selector_quads(selection: Rect, colour: [f32; 3]) -> Vec<Quad> {
    let border = Color::from_rgb(colour);
    let fill = Color {
        r: (colour[0] + FILL_LIGHTEN).min(1.0),
        g: (colour[1] + FILL_LIGHTEN).min(1.0),
        b: (colour[2] + FILL_LIGHTEN).min(1.0),
        a: FILL_ALPHA,
    };

    let Rect {
        x,
        y,
        width: w,
        height: h,
    } = selection;

    let mut quads = vec![
        // top
        Quad {
            bounds: Rect::new(x, y, w, BORDER_SIZE),
            color: border,
        },
        // right
        Quad {
            bounds: Rect::new(x + w - BORDER_SIZE, y, BORDER_SIZE, h),
            color: border,
        },
        // bottom
        Quad {
            bounds: Rect::new(x, y + h - BORDER_SIZE, w, BORDER_SIZE),
            color: border,
        },
        // left
        Quad {
            bounds: Rect::new(x, y, BORDER_SIZE, h),
            color: border,
        },
    ];

    let inner_w = w - 2.0 * BORDER_SIZE;
    let inner_h = h - 2.0 * BORDER_SIZE;
    if inner_w > 0.0 && inner_h > 0.0 {
        quads.push(Quad {
            bounds: Rect::new(x + BORDER_SIZE, y + BORDER_SIZE, inner_w, inner_h),
            color: fill,
        });
    }

    quads
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_lookup() {
        assert_eq!(cursor_for(HitZone::Outside, false), CursorKind::Default);
        assert_eq!(cursor_for(HitZone::Inside, false), CursorKind::Default);
        assert_eq!(cursor_for(HitZone::Inside, true), CursorKind::Move);
        assert_eq!(
            cursor_for(HitZone::Handle(Handle::BottomLeft), false),
            CursorKind::BottomLeftCorner
        );
    }

    #[test]
    fn quads_cover_border_and_fill() {
        let quads = selector_quads(Rect::new(10.0, 20.0, 100.0, 50.0), [0.9, 0.0, 0.5]);
        assert_eq!(quads.len(), 5);
        assert_eq!(quads[1].bounds, Rect::new(106.0, 20.0, 4.0, 50.0));

        let fill = quads[4];
        assert_eq!(fill.bounds, Rect::new(14.0, 24.0, 92.0, 42.0));
        assert_eq!(fill.color.r, 1.0);
        assert!((fill.color.b - 0.7).abs() < 1e-6);
        assert_eq!(fill.color.a, FILL_ALPHA);
    }
}
