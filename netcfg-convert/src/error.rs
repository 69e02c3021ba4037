use thiserror::Error;
use xml_tree_core::ParseError;

/// Errors returned by the conversion entry points.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The input mode was neither `file` nor `string`.
    #[error("invalid input mode '{0}': expected 'file' or 'string'")]
    InvalidMode(String),
    /// A file-mode source could not be read.
    #[error("failed to read configuration {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The XML source could not be parsed.
    #[error(transparent)]
    Xml(#[from] ParseError),
}
