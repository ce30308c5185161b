// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Data model: clicked points, sidecar records and the image set.

pub mod annotation;
pub mod image_set;
