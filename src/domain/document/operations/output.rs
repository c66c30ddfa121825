// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/document/operations/output.rs
//
// Output file naming for exported crops.

use std::path::{Path, PathBuf};

use crate::constant::{OUTPUT_EXT, OUTPUT_MARKER};

/// Pick the path for an export of `source`.
///
/// The export sits next to the source as `<stem>.resized.png`. If that is
/// taken, `<stem>.resized-1.png`, `<stem>.resized-2.png`, ... are tried until
/// `exists` reports a free name.
pub fn next_output_path(source: &Path, exists: impl Fn(&Path) -> bool) -> PathBuf {
    let dir = source.parent().unwrap_or_else(|| Path::new(""));
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let mut candidate = dir.join(format!("{stem}.{OUTPUT_MARKER}.{OUTPUT_EXT}"));
    let mut index = 1u32;
    while exists(&candidate) {
        candidate = dir.join(format!("{stem}.{OUTPUT_MARKER}-{index}.{OUTPUT_EXT}"));
        index += 1;
    }
    candidate
}
