// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Platform-neutral display surface.
//!
//! The annotation session renders through this trait and never touches
//! a GUI toolkit directly. The egui implementation lives in
//! [`crate::ui::canvas`].

use crate::io::media::LoadedImage;
use crate::models::annotation::Point;

/// Severity of a user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// Output side of the display: what the session can ask to be shown.
pub trait Surface {
    /// Replace the displayed image.
    fn show_image(&mut self, image: &LoadedImage);

    /// Remove the displayed image, e.g. after a failed load.
    fn clear_image(&mut self);

    /// Draw a point marker at image pixel coordinates.
    fn draw_marker(&mut self, point: Point);

    /// Erase every marker.
    fn clear_markers(&mut self);

    /// Report a message to the user.
    fn notify(&mut self, notice: Notice);
}
