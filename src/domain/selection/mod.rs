// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/selection/mod.rs
//
// Selection geometry: bounded rectangle, handles and resize.

pub mod handle;
pub mod rect;
pub mod resize;

pub use handle::{Axis, Handle, HitZone, Side};
pub use rect::{BoundedRect, Ratio, Rect, Span};
pub use resize::resize;
