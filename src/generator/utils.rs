use std::{borrow::Borrow, cmp::Ordering};

use crate::metadata::PostRecord;

const EXCERPT_CHARS: usize = 300;

/// Descending by `date`, compared as plain strings.
pub(super) fn sort_post<T: Borrow<PostRecord>>(a: &T, b: &T) -> Ordering {
    b.borrow().date.cmp(&a.borrow().date)
}

pub(super) fn strip_quotes(s: &str) -> &str {
    s.trim_matches(|c| c == '\'' || c == '"')
}

pub(super) fn parse_tags(value: &str) -> Vec<String> {
    value
        .trim_matches(|c| c == '[' || c == ']')
        .split(',')
        .map(|t| strip_quotes(t.trim()))
        .filter(|t| !t.is_empty())
        .map(|t| t.to_string())
        .collect()
}

pub(super) fn make_excerpt(body: &str) -> String {
    match body.char_indices().nth(EXCERPT_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// `.md` suffix to `.html`, applied to the file name only.
pub(super) fn html_url(file_name: &str) -> String {
    match file_name.strip_suffix(".md") {
        Some(stem) => format!("{stem}.html"),
        None => file_name.to_string(),
    }
}
