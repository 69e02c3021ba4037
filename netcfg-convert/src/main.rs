use anyhow::{Context, Result};
use clap::Parser;
use netcfg_convert::{default_settings, load_settings, Settings};
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod convert_cmd;
mod path_guard;

use cli::{Cli, Command};
use convert_cmd::Conversion;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    tracing::debug!(?cli, "parsed command line");

    let settings = resolve_settings(&cli)?;

    match cli.command {
        Command::BraceToSet(args) => convert_cmd::run_convert(Conversion::BraceToSet, args, &settings),
        Command::XmlToCli(args) => convert_cmd::run_convert(Conversion::XmlToCli, args, &settings),
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    match &cli.settings {
        Some(path) => load_settings(path)
            .with_context(|| format!("failed to load settings from {}", path.display())),
        None => Ok(default_settings()),
    }
}
