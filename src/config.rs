// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Persisted selector preferences (TOML in the user config directory).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constant::{
    CONFIG_DIR, CONFIG_FILE, DEFAULT_RATIO_HEIGHT, DEFAULT_RATIO_WIDTH, DEFAULT_SELECTOR_COLOUR,
};
use crate::domain::selection::Ratio;

/// Selector preferences, read at session start and written at session end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Width component of the aspect ratio.
    pub ratio_width: u32,
    /// Height component of the aspect ratio.
    pub ratio_height: u32,
    /// Whether the selector is locked to the ratio.
    pub fix_ratio: bool,
    /// Selector border colour (RGB, 0.0..=1.0).
    pub selector_colour: [f32; 3],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ratio_width: DEFAULT_RATIO_WIDTH,
            ratio_height: DEFAULT_RATIO_HEIGHT,
            fix_ratio: true,
            selector_colour: DEFAULT_SELECTOR_COLOUR,
        }
    }
}

impl AppConfig {
    /// `<config dir>/imc-image-crop/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    /// Write to `path`, creating the parent directory if needed.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("failed to serialize config")?;
        fs::write(path, text).with_context(|| format!("failed to write config {}", path.display()))
    }

    /// Configured ratio; falls back to the default for zero components.
    pub fn ratio(&self) -> Ratio {
        Ratio::new(self.ratio_width, self.ratio_height).unwrap_or_else(|| {
            log::warn!(
                "Invalid ratio {}:{} in config, using default",
                self.ratio_width,
                self.ratio_height
            );
            Ratio::default()
        })
    }

    pub fn set_ratio(&mut self, ratio: Ratio) {
        self.ratio_width = ratio.width();
        self.ratio_height = ratio.height();
    }
}
