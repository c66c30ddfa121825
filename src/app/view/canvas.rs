// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/canvas.rs
//
// Compose the center canvas: displayed image, selector quads, cursor.

use image::DynamicImage;

use super::crop::{cursor_for, selector_quads, CursorKind, DragMode, Quad};
use crate::app::AppModel;

/// Everything a host needs to redraw the canvas after an update.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene<'a> {
    /// Displayed (possibly downscaled) image; its size is the surface size.
    pub image: &'a DynamicImage,
    /// Selector quads in surface coordinates, drawn over the image.
    pub quads: Vec<Quad>,
    pub cursor: CursorKind,
}

impl Scene<'_> {
    pub fn surface(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Build the canvas scene, or `None` when there is nothing to show.
pub fn view(model: &AppModel) -> Option<Scene<'_>> {
    let doc = model.document.as_ref()?;
    let controller = model.controller.as_ref()?;
    if model.load_failed {
        return None;
    }

    let dragging = controller.mode() == DragMode::Dragging;
    Some(Scene {
        image: doc.display_image(),
        quads: selector_quads(controller.rect(), model.config.selector_colour),
        cursor: cursor_for(controller.hover_zone(), dragging),
    })
}
