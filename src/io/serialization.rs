// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Sidecar annotation files.
//!
//! Each image gets one JSON document next to it, sharing its base name
//! with the data extension swapped in.

use crate::models::annotation::AnnotationRecord;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Path of the sidecar file for `image_path`.
pub fn sidecar_path(image_path: &Path, data_extension: &str) -> PathBuf {
    image_path.with_extension(data_extension.trim_start_matches('.'))
}

/// Write `record` to `path`, replacing any existing file.
pub fn write_record(record: &AnnotationRecord, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(record)?;
    std::fs::write(path, json)
        .with_context(|| format!("Failed to write annotation file {}", path.display()))?;
    Ok(())
}

/// Read a sidecar file back.
pub fn read_record(path: &Path) -> Result<AnnotationRecord> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read annotation file {}", path.display()))?;
    let record = serde_json::from_str(&json)
        .with_context(|| format!("Malformed annotation file {}", path.display()))?;
    Ok(record)
}
