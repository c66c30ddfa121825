// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/crop/mod.rs
//
// Crop selection module: selection controller and overlay presentation.

mod overlay;
mod selection;

pub use overlay::{cursor_for, selector_quads, Color, CursorKind, Quad};
pub use selection::{DragMode, SelectionController};
