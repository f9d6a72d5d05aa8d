use regex::RegexBuilder;

use crate::metadata::PostRecord;

/// Records whose title, category or any tag contains `query`, ignoring case.
pub(crate) fn search<'a>(
    records: &'a [PostRecord],
    query: &str,
) -> anyhow::Result<Vec<&'a PostRecord>> {
    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()?;

    Ok(records
        .iter()
        .filter(|r| {
            pattern.is_match(&r.title)
                || pattern.is_match(&r.category)
                || r.tags.iter().any(|t| pattern.is_match(t))
        })
        .collect())
}
