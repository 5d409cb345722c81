// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Index paths into the chapter/scene/prompt hierarchy.
//!
//! Nodes have no identity apart from their position, so every edit is
//! addressed by the chain of sibling indices leading to it. Inserting or
//! deleting a node shifts the indices of every later sibling.

use std::fmt;

/// Position of a scene: `chapters[chapter].scenes[scene]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScenePath {
    pub chapter: usize,
    pub scene: usize,
}

/// Position of a prompt: `chapters[chapter].scenes[scene].prompts[prompt]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PromptPath {
    pub chapter: usize,
    pub scene: usize,
    pub prompt: usize,
}

impl ScenePath {
    pub fn new(chapter: usize, scene: usize) -> Self {
        Self { chapter, scene }
    }

    /// Path of the prompt at `prompt` inside this scene.
    pub fn prompt(self, prompt: usize) -> PromptPath {
        PromptPath {
            chapter: self.chapter,
            scene: self.scene,
            prompt,
        }
    }
}

impl PromptPath {
    pub fn new(chapter: usize, scene: usize, prompt: usize) -> Self {
        Self {
            chapter,
            scene,
            prompt,
        }
    }

    /// Path of the scene containing this prompt.
    pub fn scene_path(self) -> ScenePath {
        ScenePath {
            chapter: self.chapter,
            scene: self.scene,
        }
    }
}

impl fmt::Display for ScenePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chapter {} / scene {}", self.chapter, self.scene)
    }
}

impl fmt::Display for PromptPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "chapter {} / scene {} / prompt {}",
            self.chapter, self.scene, self.prompt
        )
    }
}
