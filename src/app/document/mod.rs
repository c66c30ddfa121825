// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/mod.rs
//
// Document module root: loading the image a session works on.

pub mod raster;

use std::path::Path;

use image::ImageFormat;

pub use self::raster::{fit_scale_factor, RasterDocument};

/// Whether `path` has an extension the image decoder knows.
///
/// Only used for early diagnostics; decoding still sniffs the content.
pub fn is_supported(path: &Path) -> bool {
    ImageFormat::from_path(path).is_ok_and(|format| format.reading_enabled())
}

/// Open the document at `path`.
pub fn open(path: &Path) -> image::ImageResult<RasterDocument> {
    if !is_supported(path) {
        log::warn!("Unrecognised image extension: {}", path.display());
    }
    RasterDocument::open(path)
}
