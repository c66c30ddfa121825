// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/message.rs
//
// Application messages: pointer events, user actions, and internal signals.

use crate::domain::selection::Ratio;

#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    // Pointer (window coordinates; the header offset is removed in update).
    PointerPressed { x: f64, y: f64 },
    PointerMoved { x: f64, y: f64 },
    PointerReleased { x: f64, y: f64 },
    PointerLeft,

    // Selector settings.
    SetRatio(Ratio),
    SetFixRatio(bool),
    SetSelectorColour([f32; 3]),

    // Place the selector directly (surface coordinates).
    Select {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },

    // Save operations.
    Save,

    // Info banner.
    DismissInfo,
}
