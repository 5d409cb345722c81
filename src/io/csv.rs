// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Flattening a project into the prompt CSV used by batch image generators.
//!
//! One row per prompt, walking chapters, scenes and prompts in order.

use crate::models::project::Project;
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::path::Path;

pub const HEADER: [&str; 8] = ["a", "category", "filename", "prompt", "style", "size", "seed", "n"];

/// Image size that selects the "vivid" style.
const VIVID_SIZE: &str = "1024x1024";

/// One CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvRow {
    /// Approval status; 1 when unset or zero.
    pub a: i64,
    pub category: String,
    pub filename: String,
    pub prompt: String,
    pub style: &'static str,
    pub size: Option<String>,
    pub seed: Option<i64>,
    pub n: u32,
}

/// Build one row per prompt in document order.
pub fn convert_to_csv(project: &Project) -> Vec<CsvRow> {
    let mut rows = Vec::new();
    for chapter in &project.video.chapters {
        for scene in &chapter.scenes {
            for prompt in &scene.prompts {
                let size = prompt.image_size.as_deref();
                rows.push(CsvRow {
                    a: prompt.approval_status.filter(|s| *s != 0).unwrap_or(1),
                    category: chapter.chapter_file_name.clone(),
                    filename: prompt.file_name.clone(),
                    prompt: prompt.prompt_text.clone(),
                    style: if size == Some(VIVID_SIZE) { "vivid" } else { "natural" },
                    size: size.map(str::to_string),
                    seed: prompt.seed,
                    n: 1,
                });
            }
        }
    }
    rows
}

/// Render the prompt CSV: header plus one line per prompt, `\n` separated,
/// without a trailing newline.
pub fn to_csv(project: &Project) -> String {
    let mut lines = vec![HEADER.join(",")];
    for row in convert_to_csv(project) {
        let seed = match row.seed {
            Some(seed) if seed != 0 => seed.to_string(),
            _ => String::new(),
        };
        let fields = [
            Cow::Owned(row.a.to_string()),
            escape(&row.category),
            escape(&row.filename),
            Cow::Owned(quote(&row.prompt)),
            Cow::Borrowed(row.style),
            escape(row.size.as_deref().unwrap_or_default()),
            Cow::Owned(seed),
            Cow::Owned(row.n.to_string()),
        ];
        lines.push(fields.join(","));
    }
    lines.join("\n")
}

/// Export the prompt CSV to a file.
pub fn export_csv(data: &Project, path: &Path) -> Result<()> {
    std::fs::write(path, to_csv(data)).with_context(|| format!("Writing {}", path.display()))?;
    Ok(())
}

/// Wrap a field in quotes, doubling any quote inside it.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Quote a field only when it holds a delimiter, quote or line break.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains(&[',', '"', '\n', '\r'][..]) {
        Cow::Owned(quote(field))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::project::Video;
    use crate::models::storyboard::{Chapter, Prompt, Scene};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn project(prompts: Vec<Prompt>) -> Project {
        let mut scene = Scene::new(1, "s");
        scene.prompts = prompts.into_iter().map(Arc::new).collect();
        let mut chapter = Chapter::new("Opening", "1-opening");
        chapter.scenes = vec![Arc::new(scene)];
        let mut video = Video::new("T");
        video.chapters = vec![Arc::new(chapter)];
        Project::new(video)
    }

    #[test]
    fn test_header_only_for_empty_project() {
        assert_eq!(to_csv(&Project::new(Video::new("T"))), "a,category,filename,prompt,style,size,seed,n");
    }

    #[test]
    fn test_rows() {
        let mut square = Prompt::new("a cat on a bed", "1-1-1-cat");
        square.image_size = Some("1024x1024".to_string());
        square.seed = Some(42);
        square.approval_status = Some(2);

        let mut wide = Prompt::new("a harbour", "1-1-2-harbour");
        wide.image_size = Some("1792x1024".to_string());

        let bare = Prompt::new("nothing set", "1-1-3-bare");

        let csv = to_csv(&project(vec![square, wide, bare]));
        assert_eq!(
            csv,
            "a,category,filename,prompt,style,size,seed,n\n\
             2,1-opening,1-1-1-cat,\"a cat on a bed\",vivid,1024x1024,42,1\n\
             1,1-opening,1-1-2-harbour,\"a harbour\",natural,1792x1024,,1\n\
             1,1-opening,1-1-3-bare,\"nothing set\",natural,,,1"
        );
    }

    #[test]
    fn test_zero_status_and_seed_fall_back() {
        let mut prompt = Prompt::new("p", "f");
        prompt.approval_status = Some(0);
        prompt.seed = Some(0);

        let rows = convert_to_csv(&project(vec![prompt.clone()]));
        assert_eq!(rows[0].a, 1);
        assert_eq!(rows[0].seed, Some(0));
        assert!(to_csv(&project(vec![prompt])).ends_with("1,1-opening,f,\"p\",natural,,,1"));
    }

    #[test]
    fn test_negative_numbers_are_written() {
        let mut prompt = Prompt::new("p", "f");
        prompt.approval_status = Some(-1);
        prompt.seed = Some(-1);

        let csv = to_csv(&project(vec![prompt]));
        assert_eq!(csv.lines().nth(1), Some("-1,1-opening,f,\"p\",natural,,-1,1"));
    }

    #[test]
    fn test_quotes_are_doubled() {
        let prompt = Prompt::new(r#"a sign reading "OPEN", lit"#, "1-1-1-sign");
        let csv = to_csv(&project(vec![prompt]));
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#"1,1-opening,1-1-1-sign,"a sign reading ""OPEN"", lit",natural,,,1"#);
    }

    #[test]
    fn test_other_text_fields_escaped_when_needed() {
        let mut prompt = Prompt::new("p", "shot, take \"2\"");
        prompt.image_size = Some("1024x1024".to_string());
        let csv = to_csv(&project(vec![prompt]));
        let row = csv.lines().nth(1).unwrap();
        assert_eq!(row, r#"1,1-opening,"shot, take ""2""","p",vivid,1024x1024,,1"#);
    }

    #[test]
    fn test_rows_follow_document_order() {
        let mut first = Scene::new(1, "a");
        first.prompts = vec![Arc::new(Prompt::new("p1", "f1")), Arc::new(Prompt::new("p2", "f2"))];
        let mut second = Scene::new(2, "b");
        second.prompts = vec![Arc::new(Prompt::new("p3", "f3"))];
        let mut one = Chapter::new("One", "1-one");
        one.scenes = vec![Arc::new(first)];
        let mut two = Chapter::new("Two", "2-two");
        two.scenes = vec![Arc::new(second)];
        let mut video = Video::new("T");
        video.chapters = vec![Arc::new(one), Arc::new(two)];

        let rows = convert_to_csv(&Project::new(video));
        let order: Vec<_> = rows.iter().map(|r| (r.category.as_str(), r.filename.as_str())).collect();
        assert_eq!(order, [("1-one", "f1"), ("1-one", "f2"), ("2-two", "f3")]);
    }
}
