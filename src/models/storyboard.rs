// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Chapter, scene and prompt data structures.
//!
//! Field names follow the JSON layout used by the shot list files.
//! Child sequences hold `Arc`s so that successive editor states share
//! every node an edit did not touch.

use super::path::PromptPath;
use super::Extra;
use crate::config::PromptDefaults;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Number;
use std::fmt;
use std::sync::Arc;

/// A generated image variant and whether a human approved it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    pub path: String,
    #[serde(default)]
    pub approved: bool,
}

impl ImageData {
    /// A freshly attached, not yet approved image.
    pub fn pending(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            approved: false,
        }
    }
}

/// Which of the two image variants of a prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageSlot {
    A,
    B,
}

impl ImageSlot {
    pub const ALL: [ImageSlot; 2] = [ImageSlot::A, ImageSlot::B];

    /// JSON member name of the slot.
    pub fn key(self) -> &'static str {
        match self {
            ImageSlot::A => "image_a",
            ImageSlot::B => "image_b",
        }
    }
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One image-generation prompt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prompt {
    #[serde(default)]
    pub prompt_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aspect_ratio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_status: Option<i64>,
    #[serde(default)]
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_a: Option<ImageData>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_b: Option<ImageData>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Prompt {
    pub fn new(prompt_text: impl Into<String>, file_name: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            image_size: None,
            aspect_ratio: None,
            seed: None,
            approval_status: None,
            file_name: file_name.into(),
            created_at: None,
            image_a: None,
            image_b: None,
            extra: Extra::new(),
        }
    }

    /// The prompt added by "Add Prompt" at `path`, which must be the
    /// position it will occupy (one past the current last prompt).
    pub fn placeholder(path: PromptPath, defaults: &PromptDefaults, created_on: NaiveDate) -> Self {
        let file_name = format!(
            "{}-{}-{}-new-prompt",
            path.chapter + 1,
            path.scene + 1,
            path.prompt + 1
        );
        Self {
            image_size: Some(defaults.image_size.clone()),
            aspect_ratio: Some(defaults.aspect_ratio.clone()),
            approval_status: Some(defaults.approval_status),
            created_at: Some(created_on.format("%Y-%m-%d").to_string()),
            ..Self::new(defaults.prompt_text.clone(), file_name)
        }
    }

    pub fn image(&self, slot: ImageSlot) -> Option<&ImageData> {
        match slot {
            ImageSlot::A => self.image_a.as_ref(),
            ImageSlot::B => self.image_b.as_ref(),
        }
    }

    /// Attached image variants, A before B.
    pub fn images(&self) -> impl Iterator<Item = &ImageData> {
        ImageSlot::ALL.into_iter().filter_map(move |slot| self.image(slot))
    }
}

fn unnumbered() -> Number {
    Number::from(0)
}

/// A scene and its prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    /// Display label; users may edit it, so it is not a key and need not
    /// be a whole number.
    #[serde(default = "unnumbered")]
    pub scene_number: Number,
    #[serde(default)]
    pub scene_description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub prompts: Vec<Arc<Prompt>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Scene {
    pub fn new(scene_number: impl Into<Number>, scene_description: impl Into<String>) -> Self {
        Self {
            scene_number: scene_number.into(),
            scene_description: scene_description.into(),
            style: None,
            prompts: Vec::new(),
            extra: Extra::new(),
        }
    }

    /// The scene added by "Add Scene" as the `number`-th scene of a chapter
    /// with the given style.
    pub fn placeholder(number: u32, chapter_style: Option<&str>) -> Self {
        Self {
            style: Some(chapter_style.unwrap_or_default().to_string()),
            ..Self::new(number, format!("Scene {}", number))
        }
    }

    pub fn prompt(&self, index: usize) -> Option<&Prompt> {
        self.prompts.get(index).map(Arc::as_ref)
    }
}

/// A chapter and its scenes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    #[serde(default)]
    pub chapter_title: String,
    /// Slug derived from the title, prefixed with the chapter number.
    #[serde(default)]
    pub chapter_file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default)]
    pub scenes: Vec<Arc<Scene>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Chapter {
    pub fn new(chapter_title: impl Into<String>, chapter_file_name: impl Into<String>) -> Self {
        Self {
            chapter_title: chapter_title.into(),
            chapter_file_name: chapter_file_name.into(),
            style: None,
            scenes: Vec::new(),
            extra: Extra::new(),
        }
    }

    /// The chapter added by "Add Chapter" as the `number`-th chapter of a
    /// video with the given style.
    pub fn placeholder(number: usize, video_style: Option<&str>) -> Self {
        Self {
            style: Some(video_style.unwrap_or_default().to_string()),
            ..Self::new(format!("Chapter {}", number), format!("{}-new-chapter", number))
        }
    }

    pub fn scene(&self, index: usize) -> Option<&Scene> {
        self.scenes.get(index).map(Arc::as_ref)
    }

    /// All prompts of the chapter in scene order.
    pub fn prompts(&self) -> impl Iterator<Item = &Prompt> {
        self.scenes
            .iter()
            .flat_map(|scene| scene.prompts.iter().map(Arc::as_ref))
    }
}
