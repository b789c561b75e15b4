//! CLI entry point for pathls

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;
use std::time::{Duration, SystemTime};

use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, ValueEnum};
use pathls::walk::compile_patterns;
use pathls::{
    ConfigError, DelimitedFormatter, ListConfig, OutputConfig, SortKey, StatField, Terminator,
    Walker, print_json, read_lists, sort_entries,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for options that cannot be honoured.
const EXIT_USAGE: i32 = 2;

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable (https://no-color.org/)
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            io::stdout().is_terminal()
        }
    }
}

/// Sort order names accepted by `--sort`
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortWord {
    /// Discovery order
    None,
    /// Path bytes, ascending
    Name,
    /// Largest first
    Size,
    /// Most recently accessed first
    Atime,
    /// Most recently changed first
    Ctime,
    /// Most recently modified first
    Mtime,
}

impl From<SortWord> for SortKey {
    fn from(word: SortWord) -> Self {
        match word {
            SortWord::None => SortKey::None,
            SortWord::Name => SortKey::Name,
            SortWord::Size => SortKey::Numeric(StatField::Size),
            SortWord::Atime => SortKey::Numeric(StatField::Accessed),
            SortWord::Ctime => SortKey::Numeric(StatField::Changed),
            SortWord::Mtime => SortKey::Numeric(StatField::Modified),
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "pathls")]
#[command(about = "List paths for machines: filtered, sorted, one per record")]
#[command(version)]
struct Args {
    /// Paths to list (default: current directory)
    paths: Vec<PathBuf>,

    /// Show all dotfiles, including . and ..
    #[arg(short, long)]
    all: bool,

    /// Show dotfiles except . and ..
    #[arg(short = 'A', long = "almost-all")]
    almost_all: bool,

    /// List directories themselves, not their contents
    #[arg(short = 'd', long = "directory")]
    directory: bool,

    /// List subdirectories recursively
    #[arg(short = 'R', long = "recursive")]
    recursive: bool,

    /// Only print entries without visible children
    #[arg(short = 'l', long = "leaves")]
    leaves: bool,

    /// Sort by WORD
    #[arg(long = "sort", value_name = "WORD")]
    sort: Option<SortWord>,

    /// Do not sort; list in discovery order
    #[arg(short = 'U')]
    unsorted: bool,

    /// Sort by size, largest first
    #[arg(short = 'S')]
    by_size: bool,

    /// Sort by modification time, newest first
    #[arg(short = 't')]
    by_mtime: bool,

    /// Reverse the sort order
    #[arg(short, long)]
    reverse: bool,

    /// Also list paths read from FILE (- for stdin; can be used multiple times)
    #[arg(short = 'T', long = "files-from", value_name = "FILE")]
    files_from: Vec<PathBuf>,

    /// Terminate output records (and split list files) with NUL
    #[arg(short = '0', long = "null")]
    null: bool,

    /// Do not escape control characters in newline-terminated output
    #[arg(long = "raw")]
    raw: bool,

    /// Output in JSON format
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Ignore entries matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Only show files modified more recently than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "newer", value_name = "DURATION")]
    newer: Option<String>,

    /// Only show files modified longer than DURATION ago
    /// Duration format: 30s, 5m, 1h, 7d, 2w, 3M, 1y
    #[arg(long = "older", value_name = "DURATION")]
    older: Option<String>,

    /// Log walker progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

/// Parse a duration string like "1h", "7d", "2w" into a Duration.
fn parse_duration_string(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s.trim()).map_err(|e| e.to_string())
}

/// Turn `--newer`/`--older` into an absolute cut-off time.
fn cutoff(flag: &'static str, value: Option<&str>) -> Result<Option<SystemTime>, ConfigError> {
    let Some(value) = value else {
        return Ok(None);
    };
    let duration = parse_duration_string(value).map_err(|reason| ConfigError::InvalidDuration {
        flag,
        value: value.to_string(),
        reason,
    })?;
    Ok(Some(
        SystemTime::now()
            .checked_sub(duration)
            .unwrap_or(SystemTime::UNIX_EPOCH),
    ))
}

/// Pick the sort key: the last shorthand on the command line wins,
/// then `--sort`, then name order.
fn sort_key(args: &Args, matches: &ArgMatches) -> SortKey {
    let shorthands = [
        ("unsorted", args.unsorted, SortKey::None),
        ("by_size", args.by_size, SortKey::Numeric(StatField::Size)),
        ("by_mtime", args.by_mtime, SortKey::Numeric(StatField::Modified)),
    ];

    shorthands
        .iter()
        .filter(|(_, set, _)| *set)
        .filter_map(|(id, _, key)| matches.index_of(id).map(|index| (index, *key)))
        .max_by_key(|(index, _)| *index)
        .map(|(_, key)| key)
        .or_else(|| args.sort.map(SortKey::from))
        .unwrap_or_default()
}

fn build_configs(
    args: &Args,
    matches: &ArgMatches,
) -> Result<(ListConfig, OutputConfig), ConfigError> {
    let sort = sort_key(args, matches);
    if sort == SortKey::None && args.reverse {
        return Err(ConfigError::ReverseUnsorted);
    }
    if args.json && args.null {
        return Err(ConfigError::JsonWithNull);
    }

    let list_config = ListConfig {
        show_all: args.all,
        show_almost_all: args.almost_all,
        opaque_dirs: args.directory,
        recurse: args.recursive,
        leaf_only: args.leaves,
        sort,
        reverse: args.reverse,
        ignore_patterns: compile_patterns(&args.ignore)?,
        newer_than: cutoff("--newer", args.newer.as_deref())?,
        older_than: cutoff("--older", args.older.as_deref())?,
    };

    let output_config = OutputConfig {
        use_color: !args.json && should_use_color(args.color),
        terminator: if args.null {
            Terminator::Nul
        } else {
            Terminator::Newline
        },
        escape: !args.raw,
        leaf_only: args.leaves,
    };

    Ok((list_config, output_config))
}

fn setup_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("pathls=debug,warn")
        } else {
            EnvFilter::new("pathls=warn")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();
}

fn main() {
    let matches = Args::command().get_matches();
    let args = Args::from_arg_matches(&matches).unwrap_or_else(|e| {
        eprintln!("pathls: argument parsing error: {}", e);
        process::exit(EXIT_USAGE);
    });

    setup_logging(args.verbose);

    let (list_config, output_config) = build_configs(&args, &matches).unwrap_or_else(|e| {
        eprintln!("pathls: {}", e);
        process::exit(EXIT_USAGE);
    });

    let delimiter = output_config.terminator.byte();
    let (listed, mut failures) = read_lists(&args.files_from, delimiter);

    let paths = if args.paths.is_empty() && args.files_from.is_empty() {
        vec![PathBuf::from(".")]
    } else {
        args.paths.clone()
    };
    debug!(args = paths.len(), listed = listed.len(), "starting walk");

    let listing = Walker::new(&list_config).walk(&paths, &listed);
    let order = sort_entries(&listing.entries, list_config.sort, list_config.reverse);

    let result = if !listing.any_visible {
        Ok(())
    } else if args.json {
        print_json(&listing, &order, list_config.leaf_only)
    } else {
        let mut formatter = DelimitedFormatter::stdout(output_config);
        match formatter.write_listing(&listing, &order) {
            Ok(written) => {
                debug!(written, "output complete");
                formatter.finish().map(|_| ())
            }
            Err(e) => Err(e),
        }
    };

    failures.extend(listing.failures);
    for failure in &failures {
        eprintln!("pathls: {}", failure);
    }

    if let Err(e) = result {
        if e.kind() != io::ErrorKind::BrokenPipe {
            eprintln!("pathls: error writing output: {}", e);
        }
        process::exit(1);
    }

    if !failures.is_empty() {
        process::exit(1);
    }
}
