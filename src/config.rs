// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Application configuration.
//!
//! Settings are read from an optional YAML file in the working directory.
//! Every field has a default, so a partial file only overrides what it
//! names and a missing file means "all defaults".

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File looked up in the working directory at start-up.
pub const CONFIG_FILE: &str = "seglabel.yaml";

/// User-tunable settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Folder scanned for images when none is given on the command line
    pub image_dir: PathBuf,
    /// Extension of the images to annotate
    pub image_extension: String,
    /// Extension of the sidecar annotation files
    pub data_extension: String,
    /// Label used when the label field is blank
    pub default_label: String,
    /// Radius of the point markers in screen pixels
    pub marker_radius: f32,
    /// Initial window size (width, height)
    pub window_size: [f32; 2],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            image_dir: PathBuf::from("."),
            image_extension: "jpg".to_string(),
            data_extension: "dat".to_string(),
            default_label: "default_class".to_string(),
            marker_radius: 2.0,
            window_size: [800.0, 700.0],
        }
    }
}

impl AppConfig {
    /// Parse a config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let yaml = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_yaml::from_str(&yaml)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` if it exists, falling back to defaults on absence or error.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Self::default();
        }

        match Self::from_file(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("{:#}; using defaults", e);
                Self::default()
            }
        }
    }

    /// The label to use for a label-field value. Whitespace-only counts as
    /// blank; any other text is kept exactly as typed.
    pub fn label_or_default(&self, field: &str) -> String {
        if field.trim().is_empty() {
            self.default_label.clone()
        } else {
            field.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("seglabel-config-{}-{}.yaml", name, std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.image_extension, "jpg");
        assert_eq!(config.data_extension, "dat");
        assert_eq!(config.default_label, "default_class");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let path = temp_file("partial", "image_dir: /tmp/shots\nimage_extension: png\n");
        let config = AppConfig::from_file(&path).unwrap();

        assert_eq!(config.image_dir, PathBuf::from("/tmp/shots"));
        assert_eq!(config.image_extension, "png");
        assert_eq!(config.data_extension, "dat");
        assert_eq!(config.marker_radius, 2.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_invalid_file_falls_back() {
        let path = temp_file("invalid", "marker_radius: [not, a, number]\n");
        assert!(AppConfig::from_file(&path).is_err());
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_missing_file_is_default() {
        let path = std::env::temp_dir().join("seglabel-config-does-not-exist.yaml");
        assert_eq!(AppConfig::load_or_default(&path), AppConfig::default());
    }

    #[test]
    fn test_label_or_default() {
        let config = AppConfig::default();
        assert_eq!(config.label_or_default(""), "default_class");
        assert_eq!(config.label_or_default("   "), "default_class");
        assert_eq!(config.label_or_default("car"), "car");
        assert_eq!(config.label_or_default(" car "), " car ");
    }
}
