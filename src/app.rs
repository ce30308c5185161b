// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module owns the annotation session and translates egui input
//! (buttons, arrow keys, canvas clicks, the folder menu) into session
//! commands. All work happens synchronously inside `update`.

use crate::config::AppConfig;
use crate::models::image_set::ImageSet;
use crate::session::{Command, Session};
use crate::ui::canvas::{self, CanvasAction, EguiSurface};
use crate::ui::surface::{Notice, Surface};
use crate::ui::{status, toolbar};
use std::path::Path;

/// Main application state.
pub struct SegLabelApp {
    config: AppConfig,

    /// Session over the currently opened folder
    session: Session<EguiSurface>,

    /// Contents of the label text field
    label_field: String,
}

impl SegLabelApp {
    /// Create the application and open `config.image_dir`.
    pub fn new(ctx: &egui::Context, config: AppConfig) -> Self {
        let session = open_session(ctx, &config, &config.image_dir);
        Self {
            config,
            session,
            label_field: String::new(),
        }
    }

    /// Ask for a folder and start a fresh session on it.
    fn open_folder(&mut self, ctx: &egui::Context) {
        if let Some(dir) = rfd::FileDialog::new()
            .set_directory(&self.config.image_dir)
            .pick_folder()
        {
            self.session = open_session(ctx, &self.config, &dir);
        }
    }

    /// Arrow-key navigation, unless the label field is being edited.
    fn keyboard_command(&self, ctx: &egui::Context) -> Option<Command> {
        if ctx.wants_keyboard_input() {
            return None;
        }
        ctx.input(|i| {
            if i.key_pressed(egui::Key::ArrowRight) {
                Some(Command::Next)
            } else if i.key_pressed(egui::Key::ArrowLeft) {
                Some(Command::Previous)
            } else {
                None
            }
        })
    }
}

/// Discover images in `dir` and build a session showing the first one.
fn open_session(ctx: &egui::Context, config: &AppConfig, dir: &Path) -> Session<EguiSurface> {
    let mut surface = EguiSurface::new(ctx.clone());

    let images = match ImageSet::discover(dir, &config.image_extension) {
        Ok(images) => {
            if images.is_empty() {
                log::warn!("No .{} images in {}", config.image_extension, dir.display());
                surface.notify(Notice::error(format!(
                    "No .{} images found in {}",
                    config.image_extension,
                    dir.display()
                )));
            }
            images
        }
        Err(e) => {
            log::error!("{:#}", e);
            surface.notify(Notice::error(format!("{:#}", e)));
            ImageSet::default()
        }
    };

    let mut session = Session::new(images, config.clone(), surface);
    session.load_current();
    session
}

impl eframe::App for SegLabelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut commands = Vec::new();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Folder...").clicked() {
                        self.open_folder(ctx);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Toolbar
        let has_image = self.session.current_path().is_some();
        let toolbar_command = egui::TopBottomPanel::top("toolbar")
            .show(ctx, |ui| {
                toolbar::show(ui, &mut self.label_field, &self.config.default_label, has_image)
            })
            .inner;
        commands.extend(toolbar_command);

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            status::show(ui, &self.session);
        });

        commands.extend(self.keyboard_command(ctx));

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                canvas::show(ui, self.session.surface(), self.config.marker_radius)
            })
            .inner;
        if let CanvasAction::AddPoint(point) = canvas_action {
            commands.push(Command::RecordPoint(point));
        }

        for command in commands {
            self.session.apply(command, &self.label_field);
        }
    }
}
