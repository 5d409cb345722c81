// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Story Shotlist Manager
//!
//! Editing model for video storyboards: a video made of chapters, scenes
//! and image-generation prompts, each prompt carrying up to two generated
//! image variants. Projects are loaded from JSON (or YAML), edited through
//! a reducer over immutable snapshots, and exported to JSON or to the
//! prompt CSV consumed by batch image generators.

pub mod config;
pub mod controls;
pub mod error;
pub mod io;
pub mod models;
pub mod state;
pub mod util;

pub use config::EditorConfig;
pub use controls::{Clipboard, MemoryClipboard, ProjectControls};
pub use error::{Error, ParseError};
pub use models::project::Project;
pub use state::{reduce, Action, ProjectState, ProjectStore};
