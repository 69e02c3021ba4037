//! PAN-OS brace configuration to flat `set` commands.
//!
//! The brace dialect nests blocks with `{`/`}` and ends leaf statements with
//! `;`. Each opened block pushes its header (the line minus the `{`) onto a
//! path stack, and every leaf statement is emitted as `set` followed by the
//! concatenated stack and the statement itself.
//!
//! Stack segments are joined without a separator. A header such as
//! `mgt-config {` already carries its trailing space once the brace is
//! removed, so the joined path reads `mgt-config users admin phash *`.
//! Headers that do not end in whitespace are glued to the next segment.
//!
//! The conversion is best-effort: unbalanced braces, comments and any other
//! unrecognised line shapes are skipped without error.

use tracing::{debug, instrument, trace};

use crate::error::ConvertError;
use crate::source::{resolve_source, InputMode};

/// Line endings that open a multi-line quoted banner block.
pub const DEFAULT_BANNER_MARKERS: [&str; 2] = ["login-banner \"", "content \""];

const ROOT_TOKEN: &str = "config ";

/// Brace-to-set converter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BraceToSet {
    banner_markers: Vec<String>,
}

impl Default for BraceToSet {
    fn default() -> Self {
        Self::with_banner_markers(DEFAULT_BANNER_MARKERS)
    }
}

impl BraceToSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a converter recognising the given banner-open markers.
    pub fn with_banner_markers<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            banner_markers: markers.into_iter().map(Into::into).collect(),
        }
    }

    pub fn banner_markers(&self) -> &[String] {
        &self.banner_markers
    }

    /// Convert brace configuration lines into output lines.
    ///
    /// Banner bodies are copied without trimming; the closing banner line
    /// (the first one holding a `"`) is cut at its first `;`. Statements
    /// whose trimmed form ends in `";` are dropped.
    pub fn convert_lines<I, S>(&self, lines: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut stack: Vec<String> = Vec::new();
        let mut out: Vec<String> = Vec::new();
        let mut lines = lines.into_iter();

        while let Some(raw) = lines.next() {
            let line = raw.as_ref().trim();

            if line.ends_with(';') && !line.ends_with("\";") {
                let statement = cut_at_terminator(line);
                let path = join_path(&stack, statement);
                out.push(format!("set {}", strip_root(&path)).trim_end().to_string());
            } else if self.opens_banner(line) {
                let path = join_path(&stack, line);
                out.push(format!("set {}", strip_root(&path)));

                for banner in lines.by_ref() {
                    let banner = banner.as_ref();
                    if banner.contains('"') {
                        out.push(cut_at_terminator(banner).to_string());
                        break;
                    }
                    out.push(banner.to_string());
                }
            } else if let Some(header) = line.strip_suffix('{') {
                stack.push(header.to_string());
            } else if line == "}" {
                stack.pop();
            } else if line.ends_with("\";") {
                trace!(line, "skipping statement ending in a quoted value");
            }
        }

        if !stack.is_empty() {
            debug!(open_blocks = stack.len(), "input ended inside an open block");
        }
        out
    }

    /// Convert brace configuration text, joining the result with newlines.
    pub fn convert_text(&self, text: &str) -> String {
        self.convert_lines(text.lines()).join("\n")
    }

    /// Resolve `config` according to `mode` and convert it.
    #[instrument(skip_all, fields(mode = %mode))]
    pub fn convert_source(&self, config: &str, mode: InputMode) -> Result<String, ConvertError> {
        let text = resolve_source(config, mode)?;
        let output = self.convert_text(&text);
        debug!(bytes_in = text.len(), bytes_out = output.len(), "brace conversion finished");
        Ok(output)
    }

    fn opens_banner(&self, line: &str) -> bool {
        self.banner_markers
            .iter()
            .any(|marker| line.ends_with(marker.as_str()))
    }
}

/// Convert brace configuration lines using the default banner markers.
pub fn convert_lines<I, S>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    BraceToSet::default().convert_lines(lines)
}

/// Convert a brace configuration, read from a file or given inline, to `set` form.
pub fn brace_to_set(config: &str, mode: InputMode) -> Result<String, ConvertError> {
    BraceToSet::default().convert_source(config, mode)
}

fn cut_at_terminator(line: &str) -> &str {
    line.split_once(';').map_or(line, |(head, _)| head)
}

fn join_path(stack: &[String], tail: &str) -> String {
    let mut path = stack.concat();
    path.push_str(tail);
    path
}

// Drops everything up to and including the first `config ` token.
fn strip_root(path: &str) -> &str {
    path.split_once(ROOT_TOKEN).map_or(path, |(_, rest)| rest)
}
