use std::{
    io::{self, Write},
    path::PathBuf,
};

use anyhow::bail;
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use context::{Context, SeedSource};
use generator::generate;
use metadata::PostRecord;

mod context;
mod generator;
mod index;
mod metadata;
mod search;

fn cli() -> Command {
    command!()
        .args_conflicts_with_subcommands(true)
        .args(&[
            Arg::new("posts_dir")
                .help(concat!(
                    "Directory of markdown posts. Only its direct entries are read. ",
                    "A directory named `search` must be given as `./search`."
                ))
                .value_parser(value_parser!(PathBuf))
                .default_value("posts"),
            Arg::new("out_file")
                .help("Path of the generated JSON index. Existing file will be overwritten.")
                .value_parser(value_parser!(PathBuf))
                .default_value("posts.json"),
            Arg::new("seeds")
                .long("seeds")
                .value_name("FILE")
                .help("JSON array of records always included, instead of the bundled demo posts")
                .value_parser(value_parser!(PathBuf))
                .conflicts_with("no_seeds"),
            Arg::new("no_seeds")
                .long("no-seeds")
                .help("Index only the posts found in posts_dir")
                .action(ArgAction::SetTrue),
        ])
        .subcommand(
            Command::new("search")
                .about("Search a generated index by title, tag or category")
                .args(&[
                    Arg::new("query").help("Case-insensitive text to look for").required(true),
                    Arg::new("index")
                        .short('i')
                        .long("index")
                        .help("Index file to search")
                        .value_parser(value_parser!(PathBuf))
                        .default_value("posts.json"),
                ]),
        )
}

fn context_from(matches: &ArgMatches) -> anyhow::Result<Context> {
    let posts_dir: &PathBuf = matches.get_one("posts_dir").unwrap();
    if !posts_dir.is_dir() {
        bail!("posts_dir must be a directory.");
    }
    let out_file: &PathBuf = matches.get_one("out_file").unwrap();
    if out_file.is_dir() {
        bail!("if out_file exists, it must not be a directory.");
    }

    let seeds = if matches.get_flag("no_seeds") {
        SeedSource::Empty
    } else if let Some(path) = matches.get_one::<PathBuf>("seeds") {
        SeedSource::File(path.to_owned())
    } else {
        SeedSource::Builtin
    };

    Ok(Context::new(posts_dir.to_owned(), out_file.to_owned(), seeds))
}

fn run_generate(matches: &ArgMatches) -> anyhow::Result<()> {
    let ctx = context_from(matches)?;
    generate(&ctx)?;

    println!("Posts JSON generated at {}", ctx.out_file.display());
    Ok(())
}

fn write_found<W: Write>(mut out: W, found: &[&PostRecord]) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, found)?;
    writeln!(out)?;
    out.flush()?;

    Ok(())
}

fn run_search(matches: &ArgMatches) -> anyhow::Result<()> {
    let index_file: &PathBuf = matches.get_one("index").unwrap();
    let query: &String = matches.get_one("query").unwrap();

    let records = index::load_index(index_file)?;
    let found = search::search(&records, query)?;
    write_found(io::stdout().lock(), &found)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let matches = cli().get_matches();
    match matches.subcommand() {
        Some(("search", sub_matches)) => run_search(sub_matches),
        _ => run_generate(&matches),
    }
}

#[cfg(test)]
mod tests {
    use clap::error::ErrorKind;
    use tempfile::TempDir;

    use super::*;

    fn matches(args: &[&str]) -> ArgMatches {
        cli().try_get_matches_from(args.iter().copied()).unwrap()
    }

    #[test]
    fn test_cli_definition() {
        cli().debug_assert();
    }

    #[test]
    fn test_posts_dir_must_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("posts.json");
        let missing = dir.path().join("missing");
        let file = dir.path().join("post.md");
        std::fs::write(&file, "not a directory").unwrap();

        for posts_dir in [&missing, &file] {
            let m = matches(&["postindex", posts_dir.to_str().unwrap(), out.to_str().unwrap()]);
            assert!(context_from(&m).is_err());
            assert!(!out.exists());
        }
    }

    #[test]
    fn test_out_file_must_not_be_a_directory() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().join("posts");
        std::fs::create_dir(&posts).unwrap();
        let m = matches(&["postindex", posts.to_str().unwrap(), dir.path().to_str().unwrap()]);
        assert!(context_from(&m).is_err());
    }

    #[test]
    fn test_seed_flags() {
        let dir = TempDir::new().unwrap();
        let posts = dir.path().to_str().unwrap();
        let out = dir.path().join("posts.json");
        let out = out.to_str().unwrap();

        let ctx = context_from(&matches(&["postindex", posts, out])).unwrap();
        assert_eq!(ctx.seeds, SeedSource::Builtin);
        assert_eq!(ctx.posts_dir, dir.path());

        let ctx = context_from(&matches(&["postindex", posts, out, "--seeds", "seeds.json"])).unwrap();
        assert_eq!(ctx.seeds, SeedSource::File(PathBuf::from("seeds.json")));

        let ctx = context_from(&matches(&["postindex", posts, out, "--no-seeds"])).unwrap();
        assert_eq!(ctx.seeds, SeedSource::Empty);

        let err = cli()
            .try_get_matches_from(["postindex", "--seeds", "x", "--no-seeds"])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_search_subcommand() {
        let m = matches(&["postindex", "search", "rust", "--index", "out.json"]);
        let Some(("search", sub)) = m.subcommand() else {
            panic!("search subcommand not matched");
        };
        assert_eq!(sub.get_one::<String>("query").unwrap(), "rust");
        assert_eq!(sub.get_one::<PathBuf>("index").unwrap(), &PathBuf::from("out.json"));

        let err = cli().try_get_matches_from(["postindex", "search"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_dot_prefixed_search_is_a_posts_dir() {
        let m = matches(&["postindex", "./search"]);
        assert!(m.subcommand().is_none());
        assert_eq!(m.get_one::<PathBuf>("posts_dir").unwrap(), &PathBuf::from("./search"));
    }

    #[test]
    fn test_no_hits_prints_empty_array() {
        let mut out = Vec::new();
        write_found(&mut out, &[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
