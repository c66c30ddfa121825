// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/document/raster.rs

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::{imageops::FilterType, DynamicImage, GenericImageView, ImageFormat, ImageReader};

use crate::constant::{DISPLAY_MAX_HEIGHT, DISPLAY_MAX_WIDTH};
use crate::domain::document::operations::{next_output_path, CropRegion};

/// Scale factor that fits `width` x `height` into the display budget.
/// Images are only ever shrunk, never enlarged.
pub fn fit_scale_factor(width: u32, height: u32) -> f64 {
    if width == 0 || height == 0 {
        return 1.0;
    }
    let factor_w = f64::from(DISPLAY_MAX_WIDTH) / f64::from(width);
    let factor_h = f64::from(DISPLAY_MAX_HEIGHT) / f64::from(height);
    factor_w.min(factor_h).min(1.0)
}

/// Represents a raster image document (PNG, JPEG, WebP, ...).
pub struct RasterDocument {
    /// Path the document was loaded from.
    path: PathBuf,
    /// The decoded source image.
    document: DynamicImage,
    /// Downscaled copy shown on the selection surface.
    display: DynamicImage,
    /// Display size divided by source size.
    scale_factor: f64,
}

impl RasterDocument {
    /// Load a raster document from disk.
    pub fn open(path: &Path) -> image::ImageResult<Self> {
        let document = ImageReader::open(path)?.with_guessed_format()?.decode()?;
        Ok(Self::from_image(path, document))
    }

    /// Wrap an already decoded image that belongs to `path`.
    pub fn from_image(path: &Path, document: DynamicImage) -> Self {
        let (width, height) = document.dimensions();
        let scale_factor = fit_scale_factor(width, height);

        let display = if scale_factor < 1.0 {
            let (dw, dh) = scaled_size(width, height, scale_factor);
            document.resize_exact(dw, dh, FilterType::Triangle)
        } else {
            document.clone()
        };

        log::debug!(
            "Loaded {} ({width}x{height}, display scale {scale_factor:.4})",
            path.display()
        );

        Self {
            path: path.to_path_buf(),
            document,
            display,
            scale_factor,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the native pixel dimensions (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        self.document.dimensions()
    }

    /// Size of the selection surface (the displayed image).
    pub fn display_size(&self) -> (u32, u32) {
        self.display.dimensions()
    }

    pub fn display_image(&self) -> &DynamicImage {
        &self.display
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }

    /// Cut `region` out of the source image.
    pub fn crop(&self, region: CropRegion) -> Result<DynamicImage> {
        let (width, height) = self.dimensions();
        let region = region.clamp_to(width, height);
        if !region.is_valid() {
            bail!("crop region {:?} is empty", region.as_box());
        }
        Ok(self
            .document
            .crop_imm(region.left, region.top, region.width(), region.height()))
    }

    /// Crop `region` and write it as PNG next to the source.
    ///
    /// Returns the path that was written.
    pub fn save_crop(&self, region: CropRegion) -> Result<PathBuf> {
        let cropped = self.crop(region)?;
        let output = next_output_path(&self.path, Path::exists);
        cropped
            .save_with_format(&output, ImageFormat::Png)
            .with_context(|| format!("failed to write {}", output.display()))?;
        log::info!("Saved crop {:?} to {}", region.as_box(), output.display());
        Ok(output)
    }
}

fn scaled_size(width: u32, height: u32, factor: f64) -> (u32, u32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let scaled = (
        ((f64::from(width) * factor) as u32).max(1),
        ((f64::from(height) * factor) as u32).max(1),
    );
    scaled
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_fits_display_budget() {
        assert_eq!(fit_scale_factor(1600, 1200), 0.5);
        assert_eq!(fit_scale_factor(1600, 600), 0.5);
        assert_eq!(fit_scale_factor(800, 1200), 0.5);
        assert_eq!(fit_scale_factor(400, 300), 1.0);
        assert_eq!(fit_scale_factor(0, 300), 1.0);
    }

    #[test]
    fn display_copy_is_downscaled() {
        let doc = RasterDocument::from_image(
            Path::new("big.png"),
            DynamicImage::new_rgb8(1600, 1200),
        );
        assert_eq!(doc.display_size(), (800, 600));
        assert_eq!(doc.dimensions(), (1600, 1200));
        assert_eq!(doc.scale_factor(), 0.5);
    }

    #[test]
    fn crop_clamps_to_image() {
        let doc = RasterDocument::from_image(Path::new("small.png"), DynamicImage::new_rgb8(100, 50));
        let cropped = doc.crop(CropRegion::new(80, 40, 200, 200)).unwrap();
        assert_eq!(cropped.dimensions(), (20, 10));
        assert!(doc.crop(CropRegion::new(100, 0, 120, 10)).is_err());
    }
}
