// SPDX-License-Identifier: GPL-3.0-or-later
// src/app/model.rs
//
// Application state.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::app::document::{self, RasterDocument};
use crate::app::view::crop::SelectionController;
use crate::config::AppConfig;
use crate::domain::document::operations::CropRegion;
use crate::domain::selection::BoundedRect;

// =============================================================================
// Model
// =============================================================================

pub struct AppModel {
    // Document.
    pub document: Option<RasterDocument>,
    pub current_path: Option<PathBuf>,
    /// Set when the last open failed; the selector is disabled then.
    pub load_failed: bool,

    // Selection.
    pub controller: Option<SelectionController>,
    /// Height of any header/toolbar above the image, in window units.
    pub header_offset: f64,

    // Preferences.
    pub config: AppConfig,

    // UI state.
    pub info: Option<String>,
    pub error: Option<String>,
}

impl AppModel {
    pub fn new(config: AppConfig) -> Self {
        Self {
            document: None,
            current_path: None,
            load_failed: false,
            controller: None,
            header_offset: 0.0,
            config,
            info: None,
            error: None,
        }
    }

    /// Load `path` and set up a selector over its displayed size.
    pub fn open(&mut self, path: &Path) {
        self.current_path = Some(path.to_path_buf());
        self.clear_error();

        match document::open(path) {
            Ok(doc) => {
                self.install(doc);
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", path.display(), e);
                self.document = None;
                self.controller = None;
                self.load_failed = true;
                self.set_error(format!("Error loading image: {e}"));
            }
        }
    }

    /// Use an already loaded document.
    pub fn install(&mut self, doc: RasterDocument) {
        let (width, height) = doc.display_size();
        let rect = BoundedRect::new(
            f64::from(width),
            f64::from(height),
            self.config.ratio(),
            self.config.fix_ratio,
        );

        self.current_path = Some(doc.path().to_path_buf());
        self.controller = Some(SelectionController::new(rect));
        self.document = Some(doc);
        self.load_failed = false;
    }

    /// Whether pointer input should reach the selector.
    pub fn is_interactive(&self) -> bool {
        !self.load_failed && self.document.is_some() && self.controller.is_some()
    }

    /// Map the current selection to a source pixel box.
    pub fn crop_region(&self) -> Result<CropRegion> {
        let doc = self
            .document
            .as_ref()
            .ok_or_else(|| anyhow!("no document loaded"))?;
        let controller = self
            .controller
            .as_ref()
            .ok_or_else(|| anyhow!("no selection"))?;
        CropRegion::from_selection(controller.rect(), doc.scale_factor())
    }

    /// Copy the live selector preferences back into the config.
    pub fn sync_config(&mut self) {
        if let Some(controller) = &self.controller {
            let rect = controller.bounded_rect();
            self.config.set_ratio(rect.ratio());
            self.config.fix_ratio = rect.is_ratio_locked();
        }
    }

    pub fn set_info<S: Into<String>>(&mut self, msg: S) {
        self.info = Some(msg.into());
    }

    pub fn set_error<S: Into<String>>(&mut self, msg: S) {
        self.error = Some(msg.into());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }
}
