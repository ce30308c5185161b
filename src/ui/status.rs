// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Status bar below the canvas.
//!
//! Shows where the user is in the image set, which label a save would
//! use, how many points are pending and the latest session message.

use crate::session::{SavedSummary, Session};
use crate::ui::canvas::EguiSurface;

/// Display the status bar for `session`.
pub fn show(ui: &mut egui::Ui, session: &Session<EguiSurface>) {
    ui.horizontal(|ui| {
        ui.label(position_text(session.cursor(), session.images().len()));

        if let Some(path) = session.current_path() {
            ui.separator();
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            ui.label(name);
        }

        ui.separator();
        ui.label(format!("Label: {}", session.label()));

        ui.separator();
        ui.label(format!("Points: {}", session.points().len()));

        ui.separator();
        ui.label(saved_text(session.saved_summary()));

        if let Some(notice) = session.surface().notice() {
            ui.separator();
            let text = egui::RichText::new(&notice.message);
            if notice.is_error() {
                ui.label(text.color(egui::Color32::RED));
            } else {
                ui.label(text.weak());
            }
        }
    });
}

/// One-based "current / total" position.
pub fn position_text(cursor: usize, len: usize) -> String {
    if len == 0 {
        "No images".to_string()
    } else {
        format!("{} / {}", cursor + 1, len)
    }
}

pub fn saved_text(saved: Option<&SavedSummary>) -> String {
    match saved {
        Some(summary) => format!(
            "Saved: {} points as \"{}\"",
            summary.point_count, summary.class_name
        ),
        None => "Not saved".to_string(),
    }
}
