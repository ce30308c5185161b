// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! seglabel - Segmentation Labeling Tool
//!
//! A desktop application for clicking polygon outlines onto a folder of
//! images, one image at a time, saving each outline to a sidecar file.

mod app;
mod config;
mod io;
mod models;
mod session;
mod ui;
mod util;

use anyhow::Result;
use app::SegLabelApp;
use config::{AppConfig, CONFIG_FILE};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let mut config = AppConfig::load_or_default(Path::new(CONFIG_FILE));

    // An explicit folder argument wins over the config file
    if let Some(dir) = std::env::args_os().nth(1) {
        config.image_dir = PathBuf::from(dir);
    }
    log::info!("Annotating .{} images in {}", config.image_extension, config.image_dir.display());

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_min_inner_size([400.0, 300.0])
            .with_title("Segmentation Labeling Tool"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "seglabel",
        options,
        Box::new(|cc| Ok(Box::new(SegLabelApp::new(&cc.egui_ctx, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
