// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The ordered set of images a session walks through.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Ordered image paths, fixed once discovered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageSet {
    paths: Vec<PathBuf>,
}

impl ImageSet {
    /// Build a set from paths in the given order.
    pub fn from_paths(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }

    /// Scan `dir` (non-recursively) for files whose extension matches
    /// `extension`, ignoring ASCII case.
    ///
    /// Directory-listing order is kept. An empty result is not an error.
    pub fn discover(dir: &Path, extension: &str) -> Result<Self> {
        let extension = extension.trim_start_matches('.');
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read image folder {}", dir.display()))?;

        let paths: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && has_extension(path, extension))
            .collect();
        let set = Self::from_paths(paths);

        log::info!(
            "Found {} .{} images in {}",
            set.len(),
            extension,
            dir.display()
        );

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Path> {
        self.paths.get(index).map(PathBuf::as_path)
    }

    #[cfg(test)]
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(extension))
        .unwrap_or(false)
}
