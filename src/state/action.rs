// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Edits that can be applied to the editor state.

use crate::models::patch::{ChapterPatch, PromptPatch, ScenePatch, VideoPatch};
use crate::models::path::{PromptPath, ScenePath};
use crate::models::project::Project;
use crate::models::storyboard::{Chapter, Prompt, Scene};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the whole state with this project.
    LoadProject(Project),
    UpdateVideo(VideoPatch),
    /// Append a chapter to the video.
    AddChapter(Chapter),
    UpdateChapter { index: usize, patch: ChapterPatch },
    DeleteChapter(usize),
    /// Append a scene to the chapter at `chapter`.
    AddScene { chapter: usize, scene: Scene },
    UpdateScene { path: ScenePath, patch: ScenePatch },
    DeleteScene(ScenePath),
    /// Append a prompt to the scene at `scene`.
    AddPrompt { scene: ScenePath, prompt: Prompt },
    UpdatePrompt { path: PromptPath, patch: PromptPatch },
    DeletePrompt(PromptPath),
}

impl Action {
    /// Short name used in log messages.
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadProject(_) => "LoadProject",
            Action::UpdateVideo(_) => "UpdateVideo",
            Action::AddChapter(_) => "AddChapter",
            Action::UpdateChapter { .. } => "UpdateChapter",
            Action::DeleteChapter(_) => "DeleteChapter",
            Action::AddScene { .. } => "AddScene",
            Action::UpdateScene { .. } => "UpdateScene",
            Action::DeleteScene(_) => "DeleteScene",
            Action::AddPrompt { .. } => "AddPrompt",
            Action::UpdatePrompt { .. } => "UpdatePrompt",
            Action::DeletePrompt(_) => "DeletePrompt",
        }
    }
}
