//! dburl CLI - Command-line interface for inspecting database URLs.

use clap::Parser;

use dburl_cli::cli::{Cli, Command};
use dburl_cli::commands;
use dburl_cli::config::Config;
use dburl_cli::error::CliResult;
use dburl_cli::output;
use dburl_parser::logging;

fn main() {
    logging::init();

    if let Err(e) = run() {
        output::newline();
        output::error(&e.to_string());
        std::process::exit(1);
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    let config = Config::resolve(cli.config.as_deref())?;

    match cli.command {
        Command::Parse(args) => commands::parse::run(args, &config),
        Command::Detect(args) => commands::detect::run(args),
        Command::Demo(args) => commands::demo::run(args, &config),
        Command::Version => commands::version::run(),
    }
}
