// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project load/export controls.
//!
//! `ProjectControls` is the single entry point for getting a project into
//! the editor and getting it back out: loading pasted JSON, downloading
//! JSON or CSV files and copying JSON to the clipboard. Each operation
//! leaves a short status message behind; failures never touch the state.

use crate::config::EditorConfig;
use crate::error::{Error, Result};
use crate::io::serialization::{parse_json_project, to_json};
use crate::io::ExportFormat;
use crate::models::project::Project;
use crate::state::ProjectStore;
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Destination for "Copy JSON".
pub trait Clipboard {
    fn set_text(&mut self, text: String) -> anyhow::Result<()>;
}

/// Clipboard that keeps the last copied text in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> anyhow::Result<()> {
        self.contents = Some(text);
        Ok(())
    }
}

/// A status message that disappears after a while.
#[derive(Debug, Clone)]
struct Message {
    text: String,
    shown_at: Instant,
}

pub struct ProjectControls<C: Clipboard> {
    store: ProjectStore,
    clipboard: C,
    export_dir: PathBuf,
    message_ttl: Duration,
    message: Option<Message>,
}

impl<C: Clipboard> ProjectControls<C> {
    pub fn new(config: EditorConfig, clipboard: C) -> Self {
        Self {
            export_dir: config.export_dir.clone(),
            message_ttl: config.message_ttl(),
            store: ProjectStore::new(config),
            clipboard,
            message: None,
        }
    }

    pub fn store(&self) -> &ProjectStore {
        &self.store
    }

    /// Mutable access for editing the loaded project.
    pub fn store_mut(&mut self) -> &mut ProjectStore {
        &mut self.store
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// The current status message, if it has not expired yet.
    pub fn message(&self) -> Option<&str> {
        self.message
            .as_ref()
            .filter(|m| m.shown_at.elapsed() < self.message_ttl)
            .map(|m| m.text.as_str())
    }

    /// Load a project from pasted JSON text.
    pub fn load_from_text(&mut self, text: &str) -> Result<()> {
        let result = self.try_load(text);
        self.report(&result, "Project loaded successfully!");
        result
    }

    /// Load an already parsed project, e.g. one read from disk.
    pub fn load_project(&mut self, project: Project) {
        self.store.load_project(project);
        self.notify("Project loaded successfully!");
    }

    /// Write the project as JSON into the export directory.
    pub fn download_json(&mut self) -> Result<PathBuf> {
        let result = self.download(ExportFormat::Json);
        self.report(&result, "JSON downloaded successfully!");
        result
    }

    /// Write the project as YAML into the export directory.
    pub fn download_yaml(&mut self) -> Result<PathBuf> {
        let result = self.download(ExportFormat::Yaml);
        self.report(&result, "YAML downloaded successfully!");
        result
    }

    /// Write the prompt CSV into the export directory.
    pub fn download_csv(&mut self) -> Result<PathBuf> {
        let result = self.download(ExportFormat::Csv);
        self.report(&result, "CSV downloaded successfully!");
        result
    }

    /// Copy the project JSON to the clipboard.
    pub fn copy_json(&mut self) -> Result<()> {
        let result = self.try_copy();
        self.report(&result, "JSON copied to clipboard!");
        result
    }

    fn try_load(&mut self, text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        let project = parse_json_project(text)?;
        self.store.load_project(project);
        Ok(())
    }

    fn download(&self, format: ExportFormat) -> Result<PathBuf> {
        let project = self.store.project().ok_or(Error::ExportPrecondition)?;
        let path = self.export_dir.join(format.file_name(project));
        format.export(project, &path).map_err(|e| Error::Io {
            path: path.clone(),
            message: format!("{:#}", e),
        })?;
        log::info!("Exported {:?} to {}", format, path.display());
        Ok(path)
    }

    fn try_copy(&mut self) -> Result<()> {
        let project = self.store.project().ok_or(Error::ExportPrecondition)?;
        let json = to_json(project).map_err(|e| Error::Io {
            path: PathBuf::from("<clipboard>"),
            message: e.to_string(),
        })?;
        self.clipboard
            .set_text(json)
            .map_err(|e| Error::ClipboardUnavailable(e.to_string()))
    }

    fn report<T>(&mut self, result: &Result<T>, success: &str) {
        match result {
            Ok(_) => self.notify(success),
            Err(e) => {
                log::error!("{}", e);
                self.notify(e.user_message());
            }
        }
    }

    fn notify(&mut self, text: &str) {
        self.message = Some(Message {
            text: text.to_string(),
            shown_at: Instant::now(),
        });
    }
}
