//! CLI entry point for regionscrub

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use regionscrub::{
    ConsoleReporter, DEFAULT_FOLDER, JsonReporter, KeyPolicy, RunSummary, ScrubConfig, ScrubError,
    Scrubber,
};
use tracing_subscriber::{EnvFilter, fmt};

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
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "regionscrub")]
#[command(about = "Strip sensitive and unlisted fields from region JSON documents in place")]
#[command(version)]
struct Args {
    /// Folder containing the JSON documents to clean
    #[arg(default_value = DEFAULT_FOLDER)]
    folder: PathBuf,

    /// Report what would change without writing any file
    #[arg(short = 'n', long = "dry-run")]
    dry_run: bool,

    /// Skip files matching pattern (can be used multiple times)
    #[arg(short = 'I', long = "ignore", value_name = "PATTERN")]
    ignore: Vec<String>,

    /// Print a JSON run summary instead of status lines
    #[arg(long = "json")]
    json: bool,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Log every dropped key and pruned array element to stderr
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default level.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(std::io::stderr().is_terminal())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    let config = ScrubConfig {
        folder: args.folder.clone(),
        dry_run: args.dry_run,
        ignore_patterns: args.ignore.clone(),
    };
    let scrubber = Scrubber::new(config, KeyPolicy::regions());

    let result = if args.json {
        scrubber.run(&mut JsonReporter::new())
    } else {
        let mut reporter = ConsoleReporter::stdout(should_use_color(args.color), args.dry_run);
        scrubber.run(&mut reporter)
    };

    match result {
        Ok(summary) => process::exit(exit_code(&summary)),
        Err(ScrubError::ListDir { path, source }) => {
            eprintln!(
                "regionscrub: cannot access '{}': {}",
                path.display(),
                source
            );
            process::exit(1);
        }
        Err(e) => {
            eprintln!("regionscrub: {}", e);
            process::exit(1);
        }
    }
}

fn exit_code(summary: &RunSummary) -> i32 {
    if summary.is_success() { 0 } else { 1 }
}
