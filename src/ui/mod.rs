// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! UI components for the labeling tool.

pub mod canvas;
pub mod status;
pub mod surface;
pub mod toolbar;
