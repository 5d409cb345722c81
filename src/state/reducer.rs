// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The state reducer.
//!
//! `reduce` maps a state and an action to the next state. An edit copies
//! only the nodes on the path from the root to the edited node; every other
//! chapter, scene and prompt is shared with the previous state through its
//! `Arc`. When an action cannot apply (no project, or an index past the end
//! of its sequence) the input state itself is returned.

use super::{Action, ProjectState};
use crate::models::path::{PromptPath, ScenePath};
use crate::models::project::Project;
use crate::models::storyboard::{Chapter, Scene};
use std::sync::Arc;

/// Compute the state that results from applying `action` to `state`.
pub fn reduce(state: &ProjectState, action: Action) -> ProjectState {
    if let Action::LoadProject(project) = action {
        return ProjectState::loaded(project);
    }

    let Some(project) = state.project() else {
        log::debug!("Ignoring {}: no project loaded", action.name());
        return state.clone();
    };

    let name = action.name();
    match apply(project, action) {
        Some(next) => ProjectState {
            project: Some(Arc::new(next)),
        },
        None => {
            log::debug!("Ignoring {}: index out of range", name);
            state.clone()
        }
    }
}

fn apply(project: &Project, action: Action) -> Option<Project> {
    match action {
        Action::LoadProject(project) => Some(project),
        Action::UpdateVideo(patch) => Some(Project {
            video: patch.apply_to(&project.video),
            extra: project.extra.clone(),
        }),
        Action::AddChapter(chapter) => {
            let mut next = project.clone();
            next.video.chapters.push(Arc::new(chapter));
            Some(next)
        }
        Action::UpdateChapter { index, patch } => {
            edit_chapter(project, index, |chapter| Some(patch.apply_to(chapter)))
        }
        Action::DeleteChapter(index) => {
            if index >= project.video.chapters.len() {
                return None;
            }
            let mut next = project.clone();
            next.video.chapters.remove(index);
            Some(next)
        }
        Action::AddScene { chapter, scene } => edit_chapter(project, chapter, |current| {
            let mut next = current.clone();
            next.scenes.push(Arc::new(scene));
            Some(next)
        }),
        Action::UpdateScene { path, patch } => {
            edit_scene(project, path, |scene| Some(patch.apply_to(scene)))
        }
        Action::DeleteScene(path) => edit_chapter(project, path.chapter, |chapter| {
            if path.scene >= chapter.scenes.len() {
                return None;
            }
            let mut next = chapter.clone();
            next.scenes.remove(path.scene);
            Some(next)
        }),
        Action::AddPrompt { scene, prompt } => edit_scene(project, scene, |current| {
            let mut next = current.clone();
            next.prompts.push(Arc::new(prompt));
            Some(next)
        }),
        Action::UpdatePrompt { path, patch } => {
            edit_scene(project, path.scene_path(), |scene| {
                let prompt = scene.prompts.get(path.prompt)?;
                let mut next = scene.clone();
                next.prompts[path.prompt] = Arc::new(patch.apply_to(prompt));
                Some(next)
            })
        }
        Action::DeletePrompt(path) => delete_prompt(project, path),
    }
}

/// Rebuild the project with `chapters[index]` replaced by `edit`'s result.
fn edit_chapter<F>(project: &Project, index: usize, edit: F) -> Option<Project>
where
    F: FnOnce(&Chapter) -> Option<Chapter>,
{
    let updated = edit(project.video.chapters.get(index)?)?;
    let mut next = project.clone();
    next.video.chapters[index] = Arc::new(updated);
    Some(next)
}

/// Rebuild the project with the scene at `path` replaced by `edit`'s result.
fn edit_scene<F>(project: &Project, path: ScenePath, edit: F) -> Option<Project>
where
    F: FnOnce(&Scene) -> Option<Scene>,
{
    edit_chapter(project, path.chapter, |chapter| {
        let updated = edit(chapter.scenes.get(path.scene)?)?;
        let mut next = chapter.clone();
        next.scenes[path.scene] = Arc::new(updated);
        Some(next)
    })
}

fn delete_prompt(project: &Project, path: PromptPath) -> Option<Project> {
    edit_scene(project, path.scene_path(), |scene| {
        if path.prompt >= scene.prompts.len() {
            return None;
        }
        let mut next = scene.clone();
        next.prompts.remove(path.prompt);
        Some(next)
    })
}
