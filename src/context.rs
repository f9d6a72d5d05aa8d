use std::path::PathBuf;

/// Where the records that are always part of the index come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SeedSource {
    /// the bundled demo posts
    Builtin,
    /// a JSON array in the same shape as the generated index
    File(PathBuf),
    Empty,
}

#[derive(Debug)]
pub(crate) struct Context {
    pub posts_dir: PathBuf,
    pub out_file: PathBuf,
    pub seeds: SeedSource,

    // default `date` of posts without one
    pub today: String,
}

impl Context {
    pub fn new(posts_dir: PathBuf, out_file: PathBuf, seeds: SeedSource) -> Self {
        Self {
            posts_dir,
            out_file,
            seeds,
            today: chrono::Local::now().format("%Y-%m-%d").to_string(),
        }
    }
}
