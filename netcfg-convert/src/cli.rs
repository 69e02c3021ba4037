use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use netcfg_convert::InputMode;

#[derive(Parser, Debug)]
#[command(name = "netcfg-convert", version)]
#[command(about = "Convert network device configurations between vendor syntaxes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    /// Settings TOML file. Embedded defaults are used when omitted.
    #[arg(long, global = true)]
    pub settings: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Convert a PAN-OS brace configuration to set commands.
    BraceToSet(ConvertArgs),
    /// Convert a Calix-style XML configuration to indented CLI commands.
    XmlToCli(ConvertArgs),
}

#[derive(Parser, Debug)]
pub struct ConvertArgs {
    /// Configuration file path, or the configuration text with `--mode string`.
    pub input: String,
    /// How INPUT is interpreted: `file` or `string`.
    #[arg(long, value_parser = parse_mode)]
    pub mode: Option<InputMode>,
    /// Write the result to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_mode(raw: &str) -> Result<InputMode, String> {
    raw.parse().map_err(|err: netcfg_convert::ConvertError| err.to_string())
}
