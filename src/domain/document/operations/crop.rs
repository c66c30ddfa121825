// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/crop.rs
//
// Crop operation domain model.

use anyhow::{bail, Result};

use crate::domain::selection::Rect;

/// Crop box in source pixel coordinates.
///
/// `right` and `bottom` are exclusive, matching the usual
/// `(left, top, right, bottom)` crop box convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CropRegion {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Map a selection on the display surface back to source pixels.
    ///
    /// `scale_factor` is display size divided by source size. Each of the
    /// position and size is divided by it before the box edges are
    /// truncated to whole pixels.
    pub fn from_selection(selection: Rect, scale_factor: f64) -> Result<Self> {
        if !scale_factor.is_finite() || scale_factor <= 0.0 {
            bail!("invalid scale factor {scale_factor}");
        }

        let x = selection.x / scale_factor;
        let y = selection.y / scale_factor;
        let width = selection.width / scale_factor;
        let height = selection.height / scale_factor;

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let region = Self::new(
            x.trunc() as u32,
            y.trunc() as u32,
            (x + width).trunc() as u32,
            (y + height).trunc() as u32,
        );
        Ok(region)
    }

    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    pub fn as_box(&self) -> (u32, u32, u32, u32) {
        (self.left, self.top, self.right, self.bottom)
    }

    /// Restrict the box to an image of `width` x `height`.
    pub fn clamp_to(&self, width: u32, height: u32) -> Self {
        Self::new(
            self.left.min(width),
            self.top.min(height),
            self.right.min(width),
            self.bottom.min(height),
        )
    }

    /// Check if region has valid dimensions.
    pub fn is_valid(&self) -> bool {
        self.width() > 0 && self.height() > 0
    }
}
