// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/view/mod.rs
//
// View layer: canvas composition and crop selection.

pub mod canvas;
pub mod crop;

pub use canvas::{view, Scene};
