// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection/handle.rs
//
// Resize handles, hit zones and the edge description each handle drags.

/// One of the eight resize handles on the selector border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    Top,
    Bottom,
    Left,
    Right,
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

/// Axis of the selection surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn perpendicular(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Which edge of an axis is being dragged.
///
/// `Start` is the left or top edge, `End` the right or bottom edge. The
/// opposite edge stays fixed during the resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Start,
    End,
}

impl Handle {
    pub const ALL: [Handle; 8] = [
        Handle::Top,
        Handle::Bottom,
        Handle::Left,
        Handle::Right,
        Handle::TopLeft,
        Handle::TopRight,
        Handle::BottomLeft,
        Handle::BottomRight,
    ];

    /// Free side on the horizontal axis, `None` if the handle does not move
    /// a vertical edge.
    pub fn horizontal(self) -> Option<Side> {
        match self {
            Handle::Left | Handle::TopLeft | Handle::BottomLeft => Some(Side::Start),
            Handle::Right | Handle::TopRight | Handle::BottomRight => Some(Side::End),
            Handle::Top | Handle::Bottom => None,
        }
    }

    /// Free side on the vertical axis, `None` if the handle does not move
    /// a horizontal edge.
    pub fn vertical(self) -> Option<Side> {
        match self {
            Handle::Top | Handle::TopLeft | Handle::TopRight => Some(Side::Start),
            Handle::Bottom | Handle::BottomLeft | Handle::BottomRight => Some(Side::End),
            Handle::Left | Handle::Right => None,
        }
    }

    pub fn side(self, axis: Axis) -> Option<Side> {
        match axis {
            Axis::Horizontal => self.horizontal(),
            Axis::Vertical => self.vertical(),
        }
    }

    pub fn is_corner(self) -> bool {
        self.horizontal().is_some() && self.vertical().is_some()
    }

    /// Compass abbreviation (`N`, `SE`, ...), used in log output.
    pub fn compass(self) -> &'static str {
        match self {
            Handle::Top => "N",
            Handle::Bottom => "S",
            Handle::Left => "W",
            Handle::Right => "E",
            Handle::TopLeft => "NW",
            Handle::TopRight => "NE",
            Handle::BottomLeft => "SW",
            Handle::BottomRight => "SE",
        }
    }
}

/// Classification of a pointer position relative to the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitZone {
    #[default]
    Outside,
    Inside,
    Handle(Handle),
}

impl HitZone {
    pub fn handle(self) -> Option<Handle> {
        match self {
            HitZone::Handle(handle) => Some(handle),
            _ => None,
        }
    }
}
