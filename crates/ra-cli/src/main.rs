//! relalg CLI - evaluate relational-algebra queries over text-declared relations

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod render;

use cli::Cli;
use commands::{check, eval};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.global.verbose);

    match &cli.command {
        cli::Commands::Eval(args) => eval::execute(args, &cli.global),
        cli::Commands::Check(args) => check::execute(args, &cli.global),
    }
}

/// Install the logger: warnings by default, debug with `--verbose`.
/// `RUST_LOG` takes precedence over both.
fn init_logging(verbose: bool) {
    let level = if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}
