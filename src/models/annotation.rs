// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Annotation data structures.
//!
//! This module defines the clicked point type and the on-disk record
//! written next to each annotated image.

use serde::{Deserialize, Serialize};

/// Display color stored with every polygon.
pub const POLYGON_COLOR: &str = "#e27c80";

/// Shape marker identifying a polygon entry.
pub const POLYGON_CURSOR: &str = "isPolygon";

/// Sentinel meaning "no count requested".
pub const NO_COUNT: i32 = -1;

/// Class ids fall in `0..CLASS_ID_RANGE`.
pub const CLASS_ID_RANGE: u32 = 100_000;

/// A clicked position in integer pixel coordinates, relative to the
/// image's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Derive the numeric class id for a label.
///
/// 32-bit FNV-1a over the UTF-8 bytes, reduced into `0..CLASS_ID_RANGE`.
/// Stable across runs and platforms.
pub fn class_id(label: &str) -> u32 {
    const OFFSET_BASIS: u32 = 0x811c_9dc5;
    const PRIME: u32 = 0x0100_0193;

    let hash = label
        .bytes()
        .fold(OFFSET_BASIS, |acc, b| (acc ^ b as u32).wrapping_mul(PRIME));
    hash % CLASS_ID_RANGE
}

/// One labeled polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolygonEntry {
    pub class_id: String,
    pub class_name: String,
    pub color: String,
    pub cursor: String,
    pub need_count: i32,
    pub position: Vec<Point>,
    pub show_tf: bool,
}

/// Complete annotation for one image, as written to its sidecar file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationRecord {
    pub polygon_data: Vec<PolygonEntry>,
    /// Brush strokes are never produced; always empty.
    pub brush_data: Vec<serde_json::Value>,
    pub total_class: Vec<String>,
}

impl AnnotationRecord {
    /// Build the record for a single polygon of class `label`.
    pub fn polygon(label: &str, points: &[Point]) -> Self {
        let entry = PolygonEntry {
            class_id: class_id(label).to_string(),
            class_name: label.to_string(),
            color: POLYGON_COLOR.to_string(),
            cursor: POLYGON_CURSOR.to_string(),
            need_count: NO_COUNT,
            position: points.to_vec(),
            show_tf: true,
        };

        Self {
            polygon_data: vec![entry],
            brush_data: Vec::new(),
            total_class: vec![label.to_string()],
        }
    }
}
