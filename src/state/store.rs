// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! The state container.
//!
//! `ProjectStore` owns the current [`ProjectState`] and swaps it for the
//! reducer's output on every dispatch. The helper methods build the
//! matching [`Action`] so callers never assemble index paths by hand.

use super::{reduce, Action, ProjectState};
use crate::config::EditorConfig;
use crate::models::patch::{ChapterPatch, PromptPatch, ScenePatch, VideoPatch};
use crate::models::path::{PromptPath, ScenePath};
use crate::models::project::{Project, Video};
use crate::models::storyboard::{Chapter, ImageSlot, Prompt, Scene};

#[derive(Debug, Default)]
pub struct ProjectStore {
    state: ProjectState,
    config: EditorConfig,
}

impl ProjectStore {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            state: ProjectState::empty(),
            config,
        }
    }

    pub fn state(&self) -> &ProjectState {
        &self.state
    }

    pub fn project(&self) -> Option<&Project> {
        self.state.project()
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Run `action` through the reducer and keep the result.
    pub fn dispatch(&mut self, action: Action) {
        self.state = reduce(&self.state, action);
    }

    pub fn load_project(&mut self, project: Project) {
        log::info!(
            "Loaded project \"{}\" with {} chapters",
            project.video.title,
            project.video.chapters.len()
        );
        self.dispatch(Action::LoadProject(project));
    }

    pub fn update_video(&mut self, patch: VideoPatch) {
        self.dispatch(Action::UpdateVideo(patch));
    }

    pub fn add_chapter(&mut self, chapter: Chapter) {
        self.dispatch(Action::AddChapter(chapter));
    }

    pub fn update_chapter(&mut self, index: usize, patch: ChapterPatch) {
        self.dispatch(Action::UpdateChapter { index, patch });
    }

    pub fn delete_chapter(&mut self, index: usize) {
        self.dispatch(Action::DeleteChapter(index));
    }

    pub fn add_scene(&mut self, chapter: usize, scene: Scene) {
        self.dispatch(Action::AddScene { chapter, scene });
    }

    pub fn update_scene(&mut self, path: ScenePath, patch: ScenePatch) {
        self.dispatch(Action::UpdateScene { path, patch });
    }

    pub fn delete_scene(&mut self, path: ScenePath) {
        self.dispatch(Action::DeleteScene(path));
    }

    pub fn add_prompt(&mut self, scene: ScenePath, prompt: Prompt) {
        self.dispatch(Action::AddPrompt { scene, prompt });
    }

    pub fn update_prompt(&mut self, path: PromptPath, patch: PromptPatch) {
        self.dispatch(Action::UpdatePrompt { path, patch });
    }

    pub fn delete_prompt(&mut self, path: PromptPath) {
        self.dispatch(Action::DeletePrompt(path));
    }

    /// Append a placeholder chapter numbered after the existing ones.
    pub fn add_new_chapter(&mut self) {
        let Some(video) = self.project().map(|p| &p.video) else {
            return;
        };
        let chapter = Chapter::placeholder(video.chapters.len() + 1, video.style.as_deref());
        self.add_chapter(chapter);
    }

    /// Append a placeholder scene to the chapter at `chapter`.
    pub fn add_new_scene(&mut self, chapter: usize) {
        let Some(current) = self.project().and_then(|p| p.chapter(chapter)) else {
            return;
        };
        let scene = Scene::placeholder(current.scenes.len() as u32 + 1, current.style.as_deref());
        self.add_scene(chapter, scene);
    }

    /// Append a placeholder prompt to the scene at `scene`, dated today.
    pub fn add_new_prompt(&mut self, scene: ScenePath) {
        let Some(current) = self.project().and_then(|p| p.scene(scene)) else {
            return;
        };
        let today = chrono::Utc::now().date_naive();
        let prompt = Prompt::placeholder(
            scene.prompt(current.prompts.len()),
            &self.config.new_prompt,
            today,
        );
        self.add_prompt(scene, prompt);
    }

    /// Rename the video; blank titles are ignored.
    pub fn rename_video(&mut self, title: &str) {
        if let Some(patch) = VideoPatch::retitle(title) {
            self.update_video(patch);
        }
    }

    /// Rename a chapter and regenerate its file name; blank titles are ignored.
    pub fn rename_chapter(&mut self, index: usize, title: &str) {
        if let Some(patch) = ChapterPatch::retitle(index, title) {
            self.update_chapter(index, patch);
        }
    }

    /// Replace a scene description; blank text is ignored.
    pub fn describe_scene(&mut self, path: ScenePath, description: &str) {
        if let Some(patch) = ScenePatch::redescribe(description) {
            self.update_scene(path, patch);
        }
    }

    /// Replace a prompt's generation text; blank text is ignored.
    pub fn edit_prompt_text(&mut self, path: PromptPath, text: &str) {
        if let Some(patch) = PromptPatch::retext(text) {
            self.update_prompt(path, patch);
        }
    }

    /// Attach an uploaded file to one image slot of a prompt.
    pub fn attach_image(&mut self, path: PromptPath, slot: ImageSlot, file_name: &str) {
        let patch = PromptPatch::attach_image(slot, &self.config.upload_dir, file_name);
        self.update_prompt(path, patch);
    }

    /// Set the approval flag of an attached image. Does nothing if the slot
    /// is empty.
    pub fn set_image_approval(&mut self, path: PromptPath, slot: ImageSlot, approved: bool) {
        let patch = self
            .project()
            .and_then(|p| p.prompt(path))
            .and_then(|prompt| PromptPatch::approve_image(prompt, slot, approved));
        if let Some(patch) = patch {
            self.update_prompt(path, patch);
        }
    }

    pub fn remove_image(&mut self, path: PromptPath, slot: ImageSlot) {
        self.update_prompt(path, PromptPatch::image(slot, None));
    }

    /// Start a fresh project with an empty video.
    pub fn new_project(&mut self, title: &str) {
        self.load_project(Project::new(Video::new(title)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn storyboard() -> Project {
        let mut scene = Scene::new(1, "Opening");
        scene.prompts = vec![
            Arc::new(Prompt::new("first", "1-1-1-first")),
            Arc::new(Prompt::new("second", "1-1-2-second")),
        ];
        let mut chapter = Chapter::new("Intro", "1-intro");
        chapter.style = Some("ink".to_string());
        chapter.scenes = vec![Arc::new(scene)];
        let mut video = Video::new("Short Film");
        video.style = Some("cinematic".to_string());
        video.chapters = vec![Arc::new(chapter)];
        Project::new(video)
    }

    fn prompt_texts(store: &ProjectStore, path: ScenePath) -> Vec<String> {
        store
            .project()
            .unwrap()
            .scene(path)
            .unwrap()
            .prompts
            .iter()
            .map(|p| p.prompt_text.clone())
            .collect()
    }

    #[test]
    fn test_helpers_without_project_do_nothing() {
        let mut store = ProjectStore::default();
        store.add_new_chapter();
        store.add_new_scene(0);
        store.add_new_prompt(ScenePath::new(0, 0));
        store.rename_video("Anything");
        assert!(store.project().is_none());
    }

    #[test]
    fn test_add_and_delete_prompt_end_to_end() {
        let mut store = ProjectStore::default();
        store.load_project(storyboard());
        let scene = ScenePath::new(0, 0);

        store.add_new_prompt(scene);
        let texts = prompt_texts(&store, scene);
        assert_eq!(texts.len(), 3);
        assert_eq!(texts[2], "New prompt description...");
        let added = store.project().unwrap().prompt(scene.prompt(2)).unwrap();
        assert_eq!(added.file_name, "1-1-3-new-prompt");
        assert_eq!(added.created_at.as_ref().map(|d| d.len()), Some(10));

        store.delete_prompt(scene.prompt(0));
        let texts = prompt_texts(&store, scene);
        assert_eq!(texts, ["second", "New prompt description..."]);
    }

    #[test]
    fn test_placeholders_inherit_styles() {
        let mut store = ProjectStore::default();
        store.load_project(storyboard());

        store.add_new_chapter();
        let project = store.project().unwrap();
        let chapter = project.chapter(1).unwrap();
        assert_eq!(chapter.chapter_title, "Chapter 2");
        assert_eq!(chapter.chapter_file_name, "2-new-chapter");
        assert_eq!(chapter.style.as_deref(), Some("cinematic"));

        store.add_new_scene(0);
        let scene = store.project().unwrap().scene(ScenePath::new(0, 1)).unwrap();
        assert_eq!(scene.scene_number, serde_json::Number::from(2));
        assert_eq!(scene.scene_description, "Scene 2");
        assert_eq!(scene.style.as_deref(), Some("ink"));
    }

    #[test]
    fn test_new_prompt_uses_configured_defaults() {
        let mut config = EditorConfig::default();
        config.new_prompt.image_size = "1792x1024".to_string();
        config.new_prompt.aspect_ratio = "16:9".to_string();
        let mut store = ProjectStore::new(config);
        store.load_project(storyboard());

        store.add_new_prompt(ScenePath::new(0, 0));
        let prompt = store.project().unwrap().prompt(PromptPath::new(0, 0, 2)).unwrap();
        assert_eq!(prompt.image_size.as_deref(), Some("1792x1024"));
        assert_eq!(prompt.aspect_ratio.as_deref(), Some("16:9"));
    }

    #[test]
    fn test_rename_helpers() {
        let mut store = ProjectStore::default();
        store.load_project(storyboard());

        store.rename_video("  Feature Film ");
        store.rename_chapter(0, "A New Hope");
        store.rename_chapter(0, "   ");
        store.describe_scene(ScenePath::new(0, 0), "Sunrise over the bay");
        store.edit_prompt_text(PromptPath::new(0, 0, 1), "  edited ");

        let project = store.project().unwrap();
        assert_eq!(project.video.title, "Feature Film");
        assert_eq!(project.chapter(0).unwrap().chapter_title, "A New Hope");
        assert_eq!(project.chapter(0).unwrap().chapter_file_name, "1-a-new-hope");
        assert_eq!(
            project.scene(ScenePath::new(0, 0)).unwrap().scene_description,
            "Sunrise over the bay"
        );
        assert_eq!(project.prompt(PromptPath::new(0, 0, 1)).unwrap().prompt_text, "edited");
    }

    #[test]
    fn test_image_helpers() {
        let mut store = ProjectStore::default();
        store.load_project(storyboard());
        let path = PromptPath::new(0, 0, 0);

        // approving an empty slot is not an edit
        let before = store.state().clone();
        store.set_image_approval(path, ImageSlot::B, true);
        assert!(store.state().ptr_eq(&before));

        store.attach_image(path, ImageSlot::B, "take2.png");
        store.set_image_approval(path, ImageSlot::B, true);
        let prompt = store.project().unwrap().prompt(path).unwrap();
        let image = prompt.image(ImageSlot::B).unwrap();
        assert_eq!(image.path, "uploads/take2.png");
        assert!(image.approved);
        assert!(prompt.image_a.is_none());

        store.remove_image(path, ImageSlot::B);
        assert!(store.project().unwrap().prompt(path).unwrap().image_b.is_none());
    }

    #[test]
    fn test_delete_chapter_then_read_next() {
        let mut store = ProjectStore::default();
        store.new_project("Blank");
        store.add_chapter(Chapter::new("a", "1-a"));
        store.add_chapter(Chapter::new("b", "2-b"));
        store.add_chapter(Chapter::new("c", "3-c"));

        store.delete_chapter(1);
        let project = store.project().unwrap();
        assert_eq!(project.chapter(1).unwrap().chapter_title, "c");
        assert_eq!(project.video.chapters.len(), 2);

        store.delete_chapter(1);
        assert!(store.project().unwrap().chapter(1).is_none());
    }
}
