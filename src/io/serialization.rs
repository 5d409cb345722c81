// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Project data serialization and deserialization.
//!
//! This module handles exporting and importing project data in JSON and
//! YAML formats. Imported text must have a `video` object with a non-empty
//! `title` and a `chapters` sequence; anything deeper is taken as-is.

use crate::error::ParseError;
use crate::models::project::Project;
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

/// Serialize a project to JSON indented by two spaces.
pub fn to_json(project: &Project) -> serde_json::Result<String> {
    serde_json::to_string_pretty(project)
}

/// Serialize a project to YAML.
pub fn to_yaml(project: &Project) -> serde_yaml::Result<String> {
    serde_yaml::to_string(project)
}

/// Parse and check project JSON text.
pub fn parse_json_project(text: &str) -> Result<Project, ParseError> {
    let value: Value = serde_json::from_str(text)?;
    project_from_value(value)
}

/// Parse and check project YAML text, with the same rules as JSON.
pub fn parse_yaml_project(text: &str) -> Result<Project, ParseError> {
    let value: Value = serde_yaml::from_str(text)?;
    project_from_value(value)
}

fn project_from_value(value: Value) -> Result<Project, ParseError> {
    check_structure(&value)?;
    serde_json::from_value(value).map_err(|e| ParseError::InvalidFormat(e.to_string()))
}

fn check_structure(value: &Value) -> Result<(), ParseError> {
    let invalid = |reason: &str| Err(ParseError::InvalidFormat(reason.to_string()));

    let Some(video) = value.get("video").filter(|v| v.is_object()) else {
        return invalid("missing `video` object");
    };
    match video.get("title") {
        Some(Value::String(title)) if !title.is_empty() => {}
        _ => return invalid("`video.title` must be a non-empty string"),
    }
    if !video.get("chapters").is_some_and(Value::is_array) {
        return invalid("`video.chapters` must be a list");
    }
    Ok(())
}

/// Export project data to YAML format.
pub fn export_yaml(data: &Project, path: &Path) -> Result<()> {
    let yaml = to_yaml(data)?;
    std::fs::write(path, yaml).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

/// Export project data to JSON format.
pub fn export_json(data: &Project, path: &Path) -> Result<()> {
    let json = to_json(data)?;
    std::fs::write(path, json).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

/// Import project data from YAML format.
pub fn import_yaml(path: &Path) -> Result<Project> {
    let yaml = std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let data = parse_yaml_project(&yaml).with_context(|| format!("Loading {}", path.display()))?;
    Ok(data)
}

/// Import project data from JSON format.
pub fn import_json(path: &Path) -> Result<Project> {
    let json = std::fs::read_to_string(path).with_context(|| format!("Reading {}", path.display()))?;
    let data = parse_json_project(&json).with_context(|| format!("Loading {}", path.display()))?;
    Ok(data)
}

/// Import a project, picking the format from the file extension.
pub fn import_project(path: &Path) -> Result<Project> {
    let extension = path.extension().and_then(|s| s.to_str());
    match extension {
        Some("yaml") | Some("yml") => import_yaml(path),
        Some("json") => import_json(path),
        _ => anyhow::bail!("Unsupported file extension: {:?}", extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = r#"{
  "video": {
    "title": "The Woman and the Cat",
    "description": "A short story",
    "style": "soft watercolour",
    "default_image_size": "1024x1024",
    "transcriptions": {
      "storyboard": "board text",
      "narrative": "narration"
    },
    "chapters": [
      {
        "chapter_title": "Morning",
        "chapter_file_name": "1-morning",
        "style": "warm",
        "scenes": [
          {
            "scene_number": 1,
            "scene_description": "She wakes up",
            "prompts": [
              {
                "prompt_text": "A woman waking up, a cat on the bed",
                "image_size": "1024x1024",
                "aspect_ratio": "1:1",
                "seed": 1234,
                "approval_status": 1,
                "file_name": "1-1-1-wake",
                "created_at": "2025-01-02",
                "image_a": {
                  "path": "uploads/wake-a.png",
                  "approved": true
                },
                "image_b": {
                  "path": "uploads/wake-b.png",
                  "approved": false
                }
              }
            ]
          }
        ]
      }
    ]
  }
}"#;

    #[test]
    fn test_json_round_trip_is_faithful() {
        let project = parse_json_project(SAMPLE).unwrap();
        let json = to_json(&project).unwrap();
        assert_eq!(json, SAMPLE);

        let again = to_json(&parse_json_project(&json).unwrap()).unwrap();
        assert_eq!(again, json);
    }

    #[test]
    fn test_unknown_members_survive_round_trip() {
        let text = r#"{"video":{"title":"T","chapters":[],"music":"piano"},"version":2}"#;
        let project = parse_json_project(text).unwrap();
        let json = to_json(&project).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["version"], 2);
        assert_eq!(value["video"]["music"], "piano");
    }

    #[test]
    fn test_malformed_json() {
        let err = parse_json_project("{ not json").unwrap_err();
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn test_structure_checks() {
        let cases = [
            r#"{}"#,
            r#"[]"#,
            r#"{"video": "nope"}"#,
            r#"{"video": {"chapters": []}}"#,
            r#"{"video": {"title": "", "chapters": []}}"#,
            r#"{"video": {"title": 7, "chapters": []}}"#,
            r#"{"video": {"title": "T"}}"#,
            r#"{"video": {"title": "T", "chapters": {}}}"#,
        ];
        for case in cases {
            let err = parse_json_project(case).unwrap_err();
            assert!(
                matches!(err, ParseError::InvalidFormat(_)),
                "{} gave {:?}",
                case,
                err
            );
        }
    }

    #[test]
    fn test_minimal_project_parses() {
        let project = parse_json_project(r#"{"video":{"title":"T","chapters":[]}}"#).unwrap();
        assert_eq!(project.video.title, "T");
        assert!(project.video.chapters.is_empty());
        assert!(project.video.transcriptions.is_none());
    }

    #[test]
    fn test_negative_seed_and_fractional_scene_number() {
        let text = r#"{"video":{"title":"T","chapters":[{"chapter_title":"C","chapter_file_name":"1-c","scenes":[{"scene_number":1.5,"scene_description":"insert","prompts":[{"prompt_text":"p","seed":-1,"approval_status":-1,"file_name":"f"}]}]}]}}"#;
        let project = parse_json_project(text).unwrap();
        let scene = &project.video.chapters[0].scenes[0];
        assert_eq!(scene.scene_number.as_f64(), Some(1.5));
        assert_eq!(scene.prompts[0].seed, Some(-1));
        assert_eq!(scene.prompts[0].approval_status, Some(-1));

        let value: Value = serde_json::from_str(&to_json(&project).unwrap()).unwrap();
        let original: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value, original);
    }

    #[test]
    fn test_yaml_round_trip() {
        let project = parse_json_project(SAMPLE).unwrap();
        let yaml = to_yaml(&project).unwrap();
        let back = parse_yaml_project(&yaml).unwrap();
        assert_eq!(back, project);
    }

    #[test]
    fn test_yaml_uses_same_checks() {
        let err = parse_yaml_project("video:\n  title: T\n").unwrap_err();
        assert!(matches!(err, ParseError::InvalidFormat(_)));
    }

    #[test]
    fn test_file_export_import() {
        let dir = tempfile::tempdir().unwrap();
        let project = parse_json_project(SAMPLE).unwrap();

        let json_path = dir.path().join("story.json");
        export_json(&project, &json_path).unwrap();
        assert_eq!(import_project(&json_path).unwrap(), project);

        let yaml_path = dir.path().join("story.yml");
        export_yaml(&project, &yaml_path).unwrap();
        assert_eq!(import_project(&yaml_path).unwrap(), project);

        assert!(import_project(&dir.path().join("story.txt")).is_err());
    }
}
