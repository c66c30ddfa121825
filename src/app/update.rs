// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/update.rs
//
// Message dispatch: apply an AppMessage to the model.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use super::message::AppMessage;
use super::model::AppModel;
use super::view::crop::SelectionController;

/// What the host should do after an update.
#[derive(Debug, Clone, PartialEq)]
pub enum UpdateResult {
    None,
    Redraw,
    Saved(PathBuf),
}

pub fn update(model: &mut AppModel, message: AppMessage) -> UpdateResult {
    match message {
        AppMessage::PointerPressed { x, y } => {
            let offset = model.header_offset;
            let Some(controller) = interactive_controller(model) else {
                return UpdateResult::None;
            };
            if y < offset {
                return UpdateResult::None;
            }
            controller.pointer_down(x, y - offset);
            UpdateResult::Redraw
        }

        AppMessage::PointerMoved { x, y } => {
            let offset = model.header_offset;
            let Some(controller) = interactive_controller(model) else {
                return UpdateResult::None;
            };
            if y <= offset {
                // Over the header: only the cursor hint resets.
                controller.clear_hover();
            } else {
                controller.pointer_move(x, y - offset);
            }
            UpdateResult::Redraw
        }

        AppMessage::PointerReleased { x, y } => {
            let offset = model.header_offset;
            let Some(controller) = interactive_controller(model) else {
                return UpdateResult::None;
            };
            controller.pointer_up(x, y - offset);
            UpdateResult::Redraw
        }

        AppMessage::PointerLeft => {
            let Some(controller) = interactive_controller(model) else {
                return UpdateResult::None;
            };
            controller.pointer_leave();
            UpdateResult::Redraw
        }

        AppMessage::SetRatio(ratio) => {
            model.config.set_ratio(ratio);
            if let Some(controller) = interactive_controller(model) {
                controller.set_ratio(ratio);
            }
            UpdateResult::Redraw
        }

        AppMessage::SetFixRatio(locked) => {
            model.config.fix_ratio = locked;
            if let Some(controller) = interactive_controller(model) {
                controller.set_ratio_locked(locked);
            }
            UpdateResult::Redraw
        }

        AppMessage::SetSelectorColour(colour) => {
            model.config.selector_colour = colour;
            UpdateResult::Redraw
        }

        AppMessage::Select {
            x,
            y,
            width,
            height,
        } => {
            let Some(controller) = interactive_controller(model) else {
                return UpdateResult::None;
            };
            if !controller.bounded_rect_mut().place(x, y, width, height) {
                log::warn!("Selection {x},{y} {width}x{height} does not fit the image, ignored");
                return UpdateResult::None;
            }
            UpdateResult::Redraw
        }

        AppMessage::Save => match save(model) {
            Ok(path) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_default();
                model.clear_error();
                model.set_info(format!("Image saved as {name}"));
                UpdateResult::Saved(path)
            }
            Err(e) => {
                log::error!("Failed to save crop: {e:#}");
                model.set_error(format!("Failed to save: {e}"));
                UpdateResult::Redraw
            }
        },

        AppMessage::DismissInfo => {
            model.info = None;
            UpdateResult::Redraw
        }
    }
}

fn interactive_controller(model: &mut AppModel) -> Option<&mut SelectionController> {
    if model.load_failed {
        return None;
    }
    model.controller.as_mut()
}

fn save(model: &AppModel) -> Result<PathBuf> {
    if !model.is_interactive() {
        return Err(anyhow!("no image loaded"));
    }
    let region = model.crop_region()?;
    let doc = model
        .document
        .as_ref()
        .ok_or_else(|| anyhow!("no image loaded"))?;
    doc.save_crop(region)
}
