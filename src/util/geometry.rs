// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Geometric utility functions.
//!
//! This module converts between screen positions and image pixel
//! coordinates. Images are drawn at native resolution, so the mapping is
//! a pure translation by the image's on-screen origin.

use crate::models::annotation::Point;

/// Convert a screen position to integer pixel coordinates relative to
/// `origin`, the screen position of the image's top-left corner.
pub fn screen_to_pixel(screen: (f32, f32), origin: (f32, f32)) -> Point {
    Point::new(
        (screen.0 - origin.0).floor() as i32,
        (screen.1 - origin.1).floor() as i32,
    )
}

/// Screen position of a pixel coordinate.
pub fn pixel_to_screen(point: Point, origin: (f32, f32)) -> (f32, f32) {
    (origin.0 + point.x as f32, origin.1 + point.y as f32)
}
