// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! File-name helpers derived from titles.

/// Characters that cannot appear in a single file-name component.
const RESERVED: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// Lowercase `title` and replace every run of whitespace with a single `-`.
///
/// Used for export file names. Path separators, reserved and control
/// characters become `-` and leading dots are dropped, so the result is
/// always one plain component inside the export directory.
pub fn file_stem(title: &str) -> String {
    let stem: String = join_words(&title.to_lowercase())
        .chars()
        .map(|c| if RESERVED.contains(&c) || c.is_control() { '-' } else { c })
        .collect();
    match stem.trim_start_matches('.') {
        "" => "project".to_string(),
        stem => stem.to_string(),
    }
}

/// Build the slug part of a chapter file name: lowercase, whitespace runs
/// become `-`, and anything outside `[a-z0-9-]` is dropped.
pub fn slugify(title: &str) -> String {
    join_words(&title.trim().to_lowercase())
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
        .collect()
}

/// `{position}-{slug}` where `position` is the 1-based chapter number.
pub fn chapter_file_name(index: usize, title: &str) -> String {
    format!("{}-{}", index + 1, slugify(title))
}

fn join_words(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_space = false;
    for c in text.chars() {
        if c.is_whitespace() {
            if !in_space {
                out.push('-');
                in_space = true;
            }
        } else {
            out.push(c);
            in_space = false;
        }
    }
    out
}
