// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Width of the pointer-sensitive strip along each selector edge.
pub const BORDER_THICKNESS: f64 = 8.0;

/// Width of the drawn selector border.
pub const BORDER_SIZE: f64 = 4.0;

/// Offset applied to the pointer while dragging a single edge, so the edge
/// follows the border strip instead of the exact pointer position.
pub const RESIZE_CORRECTION: f64 = 4.0;

/// Minimum selector width and height in surface units.
pub const MIN_SELECTION_SIZE: f64 = 20.0;

/// Display budget: images larger than this are downscaled to fit.
pub const DISPLAY_MAX_WIDTH: u32 = 800;
pub const DISPLAY_MAX_HEIGHT: u32 = 600;

/// Default aspect ratio (width:height).
pub const DEFAULT_RATIO_WIDTH: u32 = 16;
pub const DEFAULT_RATIO_HEIGHT: u32 = 9;

/// Default selector colour (RGB, 0.0..=1.0).
pub const DEFAULT_SELECTOR_COLOUR: [f32; 3] = [0.533, 0.03, 0.576];

/// Amount added to each channel of the selector colour for the inner fill.
pub const FILL_LIGHTEN: f32 = 0.2;

/// Alpha of the selector inner fill.
pub const FILL_ALPHA: f32 = 0.3;

/// Config directory name (below the platform config dir).
pub const CONFIG_DIR: &str = "imc-image-crop";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Marker inserted between the source stem and the extension of exports.
pub const OUTPUT_MARKER: &str = "resized";

/// Exports are always written as PNG.
pub const OUTPUT_EXT: &str = "png";
