//! CLI module - Command-line interface definitions and handlers
//!
//! The tool takes single-dash options of the form `-exclude=log,tmp` and
//! `-max=500`, freely mixed with file patterns. Tokens are first split into
//! options (anything starting with `-`) and patterns; recognised options are
//! rewritten into their `--name=value` form for clap, unrecognised ones are
//! dropped.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};

use crate::core::options::InvocationOptions;
use crate::flows::concat::{run_concat, ConcatOptions, ConcatOutcome};
use crate::output::launcher::Opener;
use crate::output::writer::default_output_path;
use crate::report;

/// Options that take a value (`-name=value`)
const VALUE_OPTIONS: &[&str] = &["exclude", "max", "opener"];

/// Options without a value (`-name`)
const FLAG_OPTIONS: &[&str] = &["no-open", "quiet", "verbose", "no-color"];

/// catcp - concatenate files into one text file and open it.
#[derive(Parser, Debug)]
#[command(name = "catcp")]
#[command(
    author,
    version,
    about,
    args_override_self = true,
    override_usage = "catcp [options] [pattern ...]",
    long_about = r#"catcp reads the given files (literal paths or wildcard patterns containing
* or ?), wraps each one in a banner and writes them all to a single UTF-8 file
in the temp directory. The file is then opened with the default viewer.

Each file appears as:
    ===== File: <absolute-path> =====
    <lines>
    ===== End of <absolute-path> =====

Options are written with a single dash (-exclude=log,tmp); the double-dash
spelling is accepted too. Unknown options are ignored."#,
    after_help = r#"Examples:
    catcp -exclude=log,tmp -max=500 file1.txt file2.txt
    catcp file1.txt file2.txt file3.txt -exclude=log,tmp
    catcp *.txt *.cs -exclude=log,tmp
    catcp text*.* text.* te*t.*"#
)]
pub struct Cli {
    /// Exclude files whose base name contains any of these substrings.
    #[arg(
        long,
        value_name = "P1,P2,...",
        long_help = "Exclude files whose base name (not the full path) contains any of the\n\
comma-separated substrings. Matching is literal and case-sensitive.\n\n\
May be given more than once; the terms accumulate."
    )]
    pub exclude: Vec<String>,

    /// Maximum number of lines to read from each file (default 10000).
    #[arg(
        long,
        value_name = "N",
        long_help = "Maximum number of lines to read from the start of each file.\n\n\
Defaults to 10000. An invalid value prints a warning and the default is used.\n\
Only the first occurrence counts."
    )]
    pub max: Vec<String>,

    /// Program used to open the output file instead of the default viewer.
    #[arg(
        long,
        value_name = "COMMAND",
        env = "CATCP_OPENER",
        long_help = "Program used to open the output file, e.g. \"code -r\". The output path is\n\
appended as the last argument.\n\n\
Defaults to the platform's handler (xdg-open, open, or start)."
    )]
    pub opener: Option<String>,

    /// Write the output file and print its path instead of opening it.
    #[arg(long)]
    pub no_open: bool,

    /// Do not print the summary line.
    #[arg(long)]
    pub quiet: bool,

    /// Enable debug diagnostics on stderr.
    #[arg(
        long,
        long_help = "Enable debug diagnostics on stderr (resolved files, ignored options,\n\
launch commands). RUST_LOG overrides this."
    )]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long)]
    pub no_color: bool,

    /// Files or wildcard patterns.
    #[arg(value_name = "PATTERN")]
    pub patterns: Vec<String>,

    /// Option tokens that were not recognised
    #[arg(skip)]
    pub ignored: Vec<String>,
}

/// Split raw arguments (program name first) into options and patterns and
/// rewrite the options for clap. Returns the rewritten argument list and the
/// option tokens that were dropped.
pub fn normalize_args(args: Vec<String>) -> (Vec<String>, Vec<String>) {
    let mut args = args.into_iter();
    let program = args.next().unwrap_or_else(|| "catcp".to_string());

    let (options, patterns): (Vec<String>, Vec<String>) =
        args.partition(|arg| arg.starts_with('-'));

    let mut normalized = vec![program];
    let mut ignored = Vec::new();
    for token in options {
        match normalize_option(&token) {
            Some(option) => normalized.push(option),
            None => ignored.push(token),
        }
    }

    normalized.push("--".to_string());
    normalized.extend(patterns);
    (normalized, ignored)
}

fn normalize_option(token: &str) -> Option<String> {
    if token == "--help" || token == "--version" {
        return Some(token.to_string());
    }

    let name = token
        .strip_prefix("--")
        .or_else(|| token.strip_prefix('-'))?;

    match name.split_once('=') {
        Some((key, value)) if VALUE_OPTIONS.contains(&key) => Some(format!("--{}={}", key, value)),
        Some(_) => None,
        None if FLAG_OPTIONS.contains(&name) => Some(format!("--{}", name)),
        None => None,
    }
}

/// Parse raw process arguments. Returns `None` when no arguments were given.
///
/// `--help`, `--version` and clap errors print their message and exit.
pub fn parse(args: Vec<String>) -> Option<Cli> {
    if args.len() <= 1 {
        return None;
    }

    let (normalized, ignored) = normalize_args(args);
    let mut cli = Cli::try_parse_from(normalized).unwrap_or_else(|e| e.exit());
    cli.ignored = ignored;
    Some(cli)
}

/// Print usage to stdout
pub fn print_usage() -> Result<()> {
    Cli::command()
        .print_help()
        .context("Failed to print usage")?;
    println!();
    Ok(())
}

/// Handle an invocation without any arguments
pub fn run_missing_parameters() -> Result<()> {
    report::error("Missing parameters.");
    print_usage()
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        report::disable_color();
    }

    for token in &cli.ignored {
        tracing::debug!(token = %token, "ignoring unrecognized option");
    }

    let (invocation, warning) = InvocationOptions::from_raw(&cli.exclude, &cli.max);
    if let Some(warning) = warning {
        report::warn(warning.code(), &warning);
    }

    let base_dir = std::env::current_dir().context("Cannot determine the current directory")?;

    let opener = if cli.no_open {
        None
    } else {
        Some(
            cli.opener
                .as_deref()
                .and_then(Opener::from_command_line)
                .unwrap_or_else(Opener::platform_default),
        )
    };

    if let Some(opener) = &opener {
        tracing::debug!(program = opener.program(), "viewer selected");
    }

    let opts = ConcatOptions {
        patterns: cli.patterns,
        invocation,
        base_dir,
        output_path: default_output_path(),
        opener,
        quiet: cli.quiet,
    };

    match run_concat(&opts) {
        ConcatOutcome::NoFiles => {
            report::error("No files specified or no files matched the patterns.");
            print_usage()?;
        }
        // Already reported; the viewer is not launched
        ConcatOutcome::WriteFailed => {}
        ConcatOutcome::Written(stats) => {
            tracing::debug!(
                output = %stats.output_path.display(),
                files = stats.files,
                lines = stats.lines,
                read_failures = stats.read_failures,
                launched = stats.launched,
                "done"
            );
        }
    }

    Ok(())
}
