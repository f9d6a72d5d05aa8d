use log::debug;

use crate::{context::SeedSource, index::load_index, metadata::PostRecord};

fn demo_post(
    title: &str,
    date: &str,
    category: &str,
    tags: &[&str],
    url: &str,
    excerpt: &str,
) -> PostRecord {
    PostRecord {
        title: title.to_string(),
        date: date.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        category: category.to_string(),
        url: url.to_string(),
        excerpt: excerpt.to_string(),
    }
}

pub(super) fn demo_posts() -> Vec<PostRecord> {
    vec![
        demo_post(
            "Getting Started with Mandl KB",
            "2024-01-20",
            "Guide",
            &["guide", "introduction", "getting started"],
            "getting-started.html",
            "Welcome to Mandl KB! This is your personal knowledge base search engine. Learn how to effectively search and navigate through the content.",
        ),
        demo_post(
            "Python Tips and Best Practices",
            "2024-01-21",
            "Programming",
            &["python", "programming", "tips", "best practices"],
            "python-tips.html",
            "Essential Python tips and best practices every developer should know, including virtual environments, PEP 8, and documentation.",
        ),
        demo_post(
            "Git Workflow Guide",
            "2024-01-22",
            "Development",
            &["git", "version control", "workflow"],
            "git-workflow.html",
            "A practical guide to using Git effectively in your development workflow, covering basic commands and best practices.",
        ),
    ]
}

pub(super) fn load_seeds(source: &SeedSource) -> anyhow::Result<Vec<PostRecord>> {
    let seeds = match source {
        SeedSource::Builtin => demo_posts(),
        SeedSource::File(path) => load_index(path)?,
        SeedSource::Empty => vec![],
    };
    debug!("{} seed records from {source:?}", seeds.len());

    Ok(seeds)
}
