// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Storyboard data model.

pub mod patch;
pub mod path;
pub mod project;
pub mod storyboard;

/// JSON members a model type does not know about, kept verbatim.
pub type Extra = serde_json::Map<String, serde_json::Value>;
