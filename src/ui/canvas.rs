// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Drawing canvas for image display and point annotation.
//!
//! This module provides the egui implementation of the display surface
//! and the central canvas where the user clicks polygon points onto the
//! current image.

use crate::io::media::LoadedImage;
use crate::models::annotation::Point;
use crate::ui::surface::{Notice, Surface};
use crate::util::geometry;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    AddPoint(Point),
}

/// Display surface backed by an egui texture and a marker list.
pub struct EguiSurface {
    ctx: egui::Context,
    texture: Option<egui::TextureHandle>,
    markers: Vec<Point>,
    notice: Option<Notice>,
}

impl EguiSurface {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            texture: None,
            markers: Vec::new(),
            notice: None,
        }
    }

    pub fn texture(&self) -> Option<&egui::TextureHandle> {
        self.texture.as_ref()
    }

    pub fn markers(&self) -> &[Point] {
        &self.markers
    }

    /// Latest message reported by the session.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}

impl Surface for EguiSurface {
    fn show_image(&mut self, image: &LoadedImage) {
        let color_image = egui::ColorImage::from_rgba_unmultiplied(image.size(), &image.pixels);
        // Native resolution, so keep pixels crisp
        let texture = self
            .ctx
            .load_texture("current_image", color_image, egui::TextureOptions::NEAREST);
        self.texture = Some(texture);
        self.ctx.request_repaint();
    }

    fn clear_image(&mut self) {
        self.texture = None;
        self.ctx.request_repaint();
    }

    fn draw_marker(&mut self, point: Point) {
        self.markers.push(point);
        self.ctx.request_repaint();
    }

    fn clear_markers(&mut self) {
        self.markers.clear();
        self.ctx.request_repaint();
    }

    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
        self.ctx.request_repaint();
    }
}

/// Display the main canvas area and handle mouse clicks.
pub fn show(ui: &mut egui::Ui, surface: &EguiSurface, marker_radius: f32) -> CanvasAction {
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::WHITE;

    egui::Frame::canvas(ui.style())
        .show(ui, |ui| {
            let Some(texture) = surface.texture() else {
                ui.centered_and_justified(|ui| {
                    ui.label(
                        egui::RichText::new("No image to display")
                            .color(egui::Color32::from_gray(120)),
                    );
                });
                return CanvasAction::None;
            };

            egui::ScrollArea::both()
                .auto_shrink([false, false])
                .show(ui, |ui| draw_image(ui, texture, surface.markers(), marker_radius))
                .inner
        })
        .inner
}

/// Draw the image anchored top-left with its markers; report clicks.
fn draw_image(
    ui: &mut egui::Ui,
    texture: &egui::TextureHandle,
    markers: &[Point],
    marker_radius: f32,
) -> CanvasAction {
    let image_size = texture.size_vec2();
    let canvas_size = image_size.max(ui.available_size());
    let (rect, response) = ui.allocate_exact_size(canvas_size, egui::Sense::click());
    let origin = (rect.min.x, rect.min.y);

    let painter = ui.painter_at(rect);
    painter.image(
        texture.id(),
        egui::Rect::from_min_size(rect.min, image_size),
        egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
        egui::Color32::WHITE,
    );

    for point in markers {
        let (x, y) = geometry::pixel_to_screen(*point, origin);
        painter.circle_filled(egui::pos2(x, y), marker_radius, egui::Color32::RED);
    }

    if response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            return CanvasAction::AddPoint(geometry::screen_to_pixel((pos.x, pos.y), origin));
        }
    }

    CanvasAction::None
}
