// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Partial updates for videos, chapters, scenes and prompts.
//!
//! A patch lists the fields to overwrite; applying it is a shallow merge
//! onto a copy of the target. Fields that are optional on the target take
//! an `Option<Option<T>>` here: `None` leaves the field alone,
//! `Some(None)` clears it and `Some(Some(v))` sets it.

use super::project::{Transcriptions, Video};
use super::storyboard::{Chapter, ImageData, ImageSlot, Prompt, Scene};
use crate::util::slug;
use serde_json::Number;
use std::sync::Arc;

fn trimmed(text: &str) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VideoPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub style: Option<Option<String>>,
    pub default_image_size: Option<Option<String>>,
    pub transcriptions: Option<Option<Transcriptions>>,
    pub chapters: Option<Vec<Arc<Chapter>>>,
}

impl VideoPatch {
    /// Rename the video. A blank title is not an edit.
    pub fn retitle(title: &str) -> Option<Self> {
        Some(Self {
            title: Some(trimmed(title)?),
            ..Default::default()
        })
    }

    /// Merge onto a copy of `video`. A blank title is skipped, since a
    /// video without a title no longer loads.
    pub fn apply_to(self, video: &Video) -> Video {
        let mut next = video.clone();
        if let Some(title) = self.title.filter(|t| !t.trim().is_empty()) {
            next.title = title;
        }
        if let Some(description) = self.description {
            next.description = description;
        }
        if let Some(style) = self.style {
            next.style = style;
        }
        if let Some(size) = self.default_image_size {
            next.default_image_size = size;
        }
        if let Some(transcriptions) = self.transcriptions {
            next.transcriptions = transcriptions;
        }
        if let Some(chapters) = self.chapters {
            next.chapters = chapters;
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChapterPatch {
    pub chapter_title: Option<String>,
    pub chapter_file_name: Option<String>,
    pub style: Option<Option<String>>,
    pub scenes: Option<Vec<Arc<Scene>>>,
}

impl ChapterPatch {
    /// Rename the chapter at `index` and regenerate its file name from the
    /// new title. A blank title is not an edit.
    pub fn retitle(index: usize, title: &str) -> Option<Self> {
        let title = trimmed(title)?;
        Some(Self {
            chapter_file_name: Some(slug::chapter_file_name(index, &title)),
            chapter_title: Some(title),
            ..Default::default()
        })
    }

    pub fn apply_to(self, chapter: &Chapter) -> Chapter {
        let mut next = chapter.clone();
        if let Some(title) = self.chapter_title {
            next.chapter_title = title;
        }
        if let Some(file_name) = self.chapter_file_name {
            next.chapter_file_name = file_name;
        }
        if let Some(style) = self.style {
            next.style = style;
        }
        if let Some(scenes) = self.scenes {
            next.scenes = scenes;
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenePatch {
    pub scene_number: Option<Number>,
    pub scene_description: Option<String>,
    pub style: Option<Option<String>>,
    pub prompts: Option<Vec<Arc<Prompt>>>,
}

impl ScenePatch {
    /// Replace the scene description. A blank description is not an edit.
    pub fn redescribe(description: &str) -> Option<Self> {
        Some(Self {
            scene_description: Some(trimmed(description)?),
            ..Default::default()
        })
    }

    pub fn apply_to(self, scene: &Scene) -> Scene {
        let mut next = scene.clone();
        if let Some(number) = self.scene_number {
            next.scene_number = number;
        }
        if let Some(description) = self.scene_description {
            next.scene_description = description;
        }
        if let Some(style) = self.style {
            next.style = style;
        }
        if let Some(prompts) = self.prompts {
            next.prompts = prompts;
        }
        next
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PromptPatch {
    pub prompt_text: Option<String>,
    pub image_size: Option<Option<String>>,
    pub aspect_ratio: Option<Option<String>>,
    pub seed: Option<Option<i64>>,
    pub approval_status: Option<Option<i64>>,
    pub file_name: Option<String>,
    pub created_at: Option<Option<String>>,
    pub image_a: Option<Option<ImageData>>,
    pub image_b: Option<Option<ImageData>>,
}

impl PromptPatch {
    /// Replace the generation text. Blank text is not an edit.
    pub fn retext(text: &str) -> Option<Self> {
        Some(Self {
            prompt_text: Some(trimmed(text)?),
            ..Default::default()
        })
    }

    /// Set or clear one image variant.
    pub fn image(slot: ImageSlot, image: Option<ImageData>) -> Self {
        let mut patch = Self::default();
        match slot {
            ImageSlot::A => patch.image_a = Some(image),
            ImageSlot::B => patch.image_b = Some(image),
        }
        patch
    }

    /// Attach an uploaded file as an unapproved variant under `upload_dir`.
    pub fn attach_image(slot: ImageSlot, upload_dir: &str, file_name: &str) -> Self {
        let path = format!("{}/{}", upload_dir.trim_end_matches('/'), file_name);
        Self::image(slot, Some(ImageData::pending(path)))
    }

    /// Change the approval flag of an existing variant. Returns `None` when
    /// the prompt has no image in that slot.
    pub fn approve_image(prompt: &Prompt, slot: ImageSlot, approved: bool) -> Option<Self> {
        let image = ImageData {
            approved,
            ..prompt.image(slot)?.clone()
        };
        Some(Self::image(slot, Some(image)))
    }

    pub fn apply_to(self, prompt: &Prompt) -> Prompt {
        let mut next = prompt.clone();
        if let Some(text) = self.prompt_text {
            next.prompt_text = text;
        }
        if let Some(size) = self.image_size {
            next.image_size = size;
        }
        if let Some(ratio) = self.aspect_ratio {
            next.aspect_ratio = ratio;
        }
        if let Some(seed) = self.seed {
            next.seed = seed;
        }
        if let Some(status) = self.approval_status {
            next.approval_status = status;
        }
        if let Some(file_name) = self.file_name {
            next.file_name = file_name;
        }
        if let Some(created_at) = self.created_at {
            next.created_at = created_at;
        }
        if let Some(image) = self.image_a {
            next.image_a = image;
        }
        if let Some(image) = self.image_b {
            next.image_b = image;
        }
        next
    }
}
