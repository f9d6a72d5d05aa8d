use anyhow::Context as _;
use log::{debug, info, warn};

use crate::{context::Context, index::save_index, metadata::PostRecord};

mod front_matter;
mod seed;
mod utils;

/// Seed records followed by every parsable `.md` file directly under `posts_dir`.
fn collect(ctx: &Context) -> anyhow::Result<Vec<PostRecord>> {
    let mut posts = seed::load_seeds(&ctx.seeds)?;

    let entries = std::fs::read_dir(&ctx.posts_dir)
        .with_context(|| format!("while listing {:?}", ctx.posts_dir))?;
    for entry in entries {
        let entry = entry?;
        let file_name = entry.file_name().to_string_lossy().to_string();
        if !file_name.ends_with(".md") {
            continue;
        }

        match front_matter::read_post(&entry.path(), &ctx.today) {
            Ok(post) => {
                debug!("parsed {file_name}: {:?} ({})", post.title, post.date);
                posts.push(post);
            }
            Err(e) => warn!("Error parsing {file_name}: {e:#}"),
        }
    }

    Ok(posts)
}

pub(crate) fn generate(ctx: &Context) -> anyhow::Result<Vec<PostRecord>> {
    let mut posts = collect(ctx)?;
    info!("{} records collected", posts.len());

    posts.sort_by(utils::sort_post);

    save_index(&ctx.out_file, &posts)
        .with_context(|| format!("while writing {:?}", ctx.out_file))?;
    info!("{} records written to {:?}", posts.len(), ctx.out_file);

    Ok(posts)
}
