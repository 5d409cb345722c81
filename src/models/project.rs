// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project and video data.
//!
//! A project is the root document: it owns exactly one video, which owns
//! the ordered chapters of the storyboard.

use super::path::{PromptPath, ScenePath};
use super::storyboard::{Chapter, Prompt, Scene};
use super::Extra;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Source texts the storyboard was written from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcriptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storyboard: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(flatten)]
    pub extra: Extra,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Video {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_image_size: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transcriptions: Option<Transcriptions>,
    pub chapters: Vec<Arc<Chapter>>,
    #[serde(flatten)]
    pub extra: Extra,
}

impl Video {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
            style: None,
            default_image_size: None,
            transcriptions: None,
            chapters: Vec::new(),
            extra: Extra::new(),
        }
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index).map(Arc::as_ref)
    }
}

/// Complete project data for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub video: Video,
    #[serde(flatten)]
    pub extra: Extra,
}

/// Node counts of a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSummary {
    pub chapters: usize,
    pub scenes: usize,
    pub prompts: usize,
    pub images: usize,
    pub approved_images: usize,
}

impl Project {
    /// Create a project around the given video.
    pub fn new(video: Video) -> Self {
        Self {
            video,
            extra: Extra::new(),
        }
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.video.chapter(index)
    }

    pub fn scene(&self, path: ScenePath) -> Option<&Scene> {
        self.chapter(path.chapter)?.scene(path.scene)
    }

    pub fn prompt(&self, path: PromptPath) -> Option<&Prompt> {
        self.scene(path.scene_path())?.prompt(path.prompt)
    }

    /// Count chapters, scenes, prompts and attached/approved images.
    pub fn summary(&self) -> ProjectSummary {
        let mut summary = ProjectSummary {
            chapters: self.video.chapters.len(),
            ..Default::default()
        };
        for chapter in &self.video.chapters {
            summary.scenes += chapter.scenes.len();
            for prompt in chapter.prompts() {
                summary.prompts += 1;
                for image in prompt.images() {
                    summary.images += 1;
                    if image.approved {
                        summary.approved_images += 1;
                    }
                }
            }
        }
        summary
    }
}
