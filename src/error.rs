// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Error types for importing and exporting projects.

use std::path::PathBuf;

/// Why a piece of text could not be loaded as a project.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed input: {0}")]
    Malformed(String),

    #[error("Invalid project format: {0}")]
    InvalidFormat(String),
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        ParseError::Malformed(err.to_string())
    }
}

/// Failures reported by the project controls.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Nothing to load: the input is empty")]
    EmptyInput,

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("No project loaded")]
    ExportPrecondition,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Failed to write {}: {}", .path.display(), .message)]
    Io { path: PathBuf, message: String },
}

impl Error {
    /// Short text shown to the user for this failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Error::EmptyInput => "Please paste JSON content first",
            Error::Parse(_) => "Invalid JSON format. Please check your input.",
            Error::ExportPrecondition => "No project to export",
            Error::ClipboardUnavailable(_) => "Failed to copy to clipboard",
            Error::Io { .. } => "Export failed",
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
