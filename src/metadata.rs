use serde::{Deserialize, Serialize};

/// One entry of the search index.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct PostRecord {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    pub category: String,
    pub url: String,
    pub excerpt: String,
}
