//! catcp - concatenate files into one bannered text file and open it
//!
//! catcp provides:
//! - Literal paths and `*`/`?` wildcard patterns, deduplicated
//! - Exclusion by base-name substring (`-exclude=`)
//! - A per-file line cap (`-max=`)
//! - One UTF-8 output file in the temp directory, opened with the default viewer

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod cli;
mod core;
mod flows;
mod output;
mod report;

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args_os()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    let Some(cli) = cli::parse(args) else {
        return cli::run_missing_parameters();
    };

    init_tracing(cli.verbose);
    cli::run(cli)
}
