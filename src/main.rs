//! CLI entry point for deepwalk

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use deepwalk::filters::{All, DirsOnly, FilesOnly, NameContains, SkipDirs, SkipNamed};
use deepwalk::WalkError;

/// Which kinds of entry to print
#[derive(Debug, Clone, Copy, ValueEnum)]
enum Only {
    /// Files only
    Files,
    /// Directories only
    Dirs,
}

#[derive(Parser, Debug)]
#[command(name = "deepwalk")]
#[command(about = "Walk a directory tree depth-first, deleting the first file of every directory visited")]
#[command(version)]
struct Args {
    /// Directory to walk (defaults to the current directory)
    path: Option<PathBuf>,

    /// Print only files or only directories
    #[arg(long = "only", value_name = "KIND")]
    only: Option<Only>,

    /// Print only entries whose name contains this text (case-insensitive)
    #[arg(short = 'n', long = "name", value_name = "TEXT")]
    name: Option<String>,

    /// Do not descend into directories whose name starts with a dot
    #[arg(long = "skip-hidden")]
    skip_hidden: bool,

    /// Do not descend into directories with this name (can be used multiple times)
    #[arg(short = 's', long = "skip", value_name = "NAME")]
    skip: Vec<String>,

    /// Print walk statistics to stderr when done
    #[arg(long = "stats")]
    stats: bool,

    /// Log each directory visited (-v), and each deletion (-vv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG, when set, wins
    if std::env::var_os("RUST_LOG").is_some() {
        builder.parse_default_env();
    }
    builder.init();
}

fn run(args: Args) -> Result<(), WalkError> {
    let mut include = All::new();
    match args.only {
        Some(Only::Files) => include = include.and(FilesOnly),
        Some(Only::Dirs) => include = include.and(DirsOnly),
        None => {}
    }
    if let Some(text) = args.name {
        include = include.and(NameContains::new(text));
    }

    let descend = SkipDirs {
        hidden: args.skip_hidden,
        named: SkipNamed::new(args.skip),
    };

    let mut builder = deepwalk::walk().include(include).descend_into(descend);
    if let Some(path) = args.path {
        builder = builder.root(path);
    }

    let found = builder.run()?;

    for path in found.paths() {
        println!("{}", path.display());
    }

    if args.stats {
        let s = &found.stats;
        eprintln!(
            "{} files, {} dirs, {} visited, {} deleted, {} shown in {:.3}s",
            s.files,
            s.dirs,
            s.visited,
            s.deleted,
            s.matched,
            s.duration.as_secs_f64()
        );
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Err(e) = run(args) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
