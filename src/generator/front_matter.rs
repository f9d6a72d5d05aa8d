use std::path::Path;

use anyhow::{anyhow, Context};

use crate::metadata::PostRecord;

use super::utils::{html_url, make_excerpt, parse_tags, strip_quotes};

const DELIMITER: &str = "---";

pub(super) fn read_post(path: &Path, today: &str) -> anyhow::Result<PostRecord> {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .ok_or_else(|| anyhow!("no file name in {path:?}"))?;
    let content =
        std::fs::read_to_string(path).with_context(|| format!("while reading {path:?}"))?;

    Ok(parse_post(&file_name, &content, today))
}

pub(super) fn parse_post(file_name: &str, content: &str, today: &str) -> PostRecord {
    let mut post = PostRecord {
        title: "Untitled".to_string(),
        date: today.to_string(),
        tags: vec![],
        category: "Uncategorized".to_string(),
        url: html_url(file_name),
        excerpt: "".to_string(),
    };

    // same line splitting as a text-mode read
    let content = content.replace("\r\n", "\n").replace('\r', "\n");
    let lines: Vec<&str> = content.split('\n').collect();

    if lines[0].trim() == DELIMITER {
        let header = lines[1..]
            .iter()
            .take_while(|line| line.trim() != DELIMITER);
        for line in header {
            let Some((key, value)) = line.split_once(':') else {
                continue;
            };
            let key = key.trim().to_lowercase();
            let value = strip_quotes(value.trim());
            match key.as_str() {
                "title" => post.title = value.to_string(),
                "date" => post.date = value.to_string(),
                "tags" => post.tags = parse_tags(value),
                "category" => post.category = value.to_string(),
                _ => {}
            }
        }
    }

    // header lines other than the delimiters end up here as well
    let body: Vec<&str> = lines
        .into_iter()
        .filter(|line| !line.starts_with(DELIMITER))
        .collect();
    post.excerpt = make_excerpt(&body.join(" "));

    post
}
