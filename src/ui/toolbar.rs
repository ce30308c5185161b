// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar with the session buttons and the label field.

use crate::session::Command;

/// Arrow keys navigate only while the class field is not being edited.
pub const ARROW_KEY_HINT: &str = "Arrow keys navigate when the class field is not focused";

/// Display the toolbar. Returns the command of the clicked button, if any.
pub fn show(
    ui: &mut egui::Ui,
    label_field: &mut String,
    default_label: &str,
    has_image: bool,
) -> Option<Command> {
    let mut command = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        if ui.add_enabled(has_image, egui::Button::new("Clear")).clicked() {
            command = Some(Command::Clear);
        }
        if ui.add_enabled(has_image, egui::Button::new("Save")).clicked() {
            command = Some(Command::Save);
        }

        ui.separator();

        if ui
            .button("⬅ Previous Image (Left Arrow)")
            .on_hover_text(ARROW_KEY_HINT)
            .clicked()
        {
            command = Some(Command::Previous);
        }
        if ui
            .button("Next Image (Right Arrow) ➡")
            .on_hover_text(ARROW_KEY_HINT)
            .clicked()
        {
            command = Some(Command::Next);
        }

        ui.separator();

        ui.label("Class:");
        ui.add(
            egui::TextEdit::singleline(label_field)
                .desired_width(160.0)
                .hint_text(default_label),
        );

        ui.label(
            egui::RichText::new("Applies from the next image switch")
                .italics()
                .weak(),
        );
    });

    command
}
