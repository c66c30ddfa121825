// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/mod.rs
//
// Pure document operations (no I/O beyond existence checks).

pub mod crop;
pub mod output;

pub use crop::CropRegion;
pub use output::next_output_path;
