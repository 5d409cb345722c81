// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! I/O operations for project files.

pub mod csv;
pub mod serialization;

use crate::models::project::Project;
use crate::util::slug;
use anyhow::Result;
use std::path::Path;

/// Formats a project can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

impl ExportFormat {
    /// Download file name for `project`, derived from the video title.
    pub fn file_name(self, project: &Project) -> String {
        let stem = slug::file_stem(&project.video.title);
        match self {
            ExportFormat::Json => format!("{}.json", stem),
            ExportFormat::Yaml => format!("{}.yaml", stem),
            ExportFormat::Csv => format!("{}-prompts.csv", stem),
        }
    }

    /// Render `project` as text in this format.
    pub fn render(self, project: &Project) -> Result<String> {
        let text = match self {
            ExportFormat::Json => serialization::to_json(project)?,
            ExportFormat::Yaml => serialization::to_yaml(project)?,
            ExportFormat::Csv => csv::to_csv(project),
        };
        Ok(text)
    }

    /// Write `project` to `path` in this format.
    pub fn export(self, project: &Project, path: &Path) -> Result<()> {
        match self {
            ExportFormat::Json => serialization::export_json(project, path),
            ExportFormat::Yaml => serialization::export_yaml(project, path),
            ExportFormat::Csv => csv::export_csv(project, path),
        }
    }
}
