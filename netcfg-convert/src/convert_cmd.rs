use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use netcfg_convert::{xml_to_cli, InputMode, Settings};
use serde::Serialize;
use tracing::info;

use crate::cli::{ConvertArgs, OutputFormat};
use crate::path_guard::refuse_overwrite;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Conversion {
    BraceToSet,
    XmlToCli,
}

impl Conversion {
    fn target_format(self) -> &'static str {
        match self {
            Self::BraceToSet => "set",
            Self::XmlToCli => "cli",
        }
    }
}

#[derive(Debug, Serialize)]
struct ConversionReport<'a> {
    format: &'static str,
    lines: Vec<&'a str>,
}

/// Run one conversion and print or write its result.
pub fn run_convert(kind: Conversion, args: ConvertArgs, settings: &Settings) -> Result<()> {
    let mode = args.mode.unwrap_or(settings.mode);
    if let (Some(output), InputMode::File) = (&args.output, mode) {
        refuse_overwrite(output, Path::new(&args.input))?;
    }

    info!(?kind, %mode, "converting configuration");
    let converted = match kind {
        Conversion::BraceToSet => settings.brace_converter().convert_source(&args.input, mode),
        Conversion::XmlToCli => xml_to_cli(&args.input, mode),
    }
    .with_context(|| format!("{} conversion failed", kind.target_format()))?;

    let line_count = converted.lines().count();
    let rendered = match args.format {
        OutputFormat::Text => converted,
        OutputFormat::Json => serde_json::to_string_pretty(&ConversionReport {
            format: kind.target_format(),
            lines: converted.lines().collect(),
        })?,
    };

    match &args.output {
        Some(path) => {
            let mut contents = rendered;
            if !contents.is_empty() {
                contents.push('\n');
            }
            fs::write(path, contents)
                .with_context(|| format!("failed to write output {}", path.display()))?;
            eprintln!(
                "{}",
                format!("wrote {line_count} lines to {}", path.display()).cyan()
            );
        }
        None if rendered.is_empty() => {}
        None => println!("{rendered}"),
    }

    Ok(())
}
