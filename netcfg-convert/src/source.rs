//! Resolution of the raw configuration text handed to the converters.

use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::fs;
use std::str::FromStr;

use serde::Deserialize;
use tracing::debug;

use crate::error::ConvertError;

/// How a configuration argument should be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum InputMode {
    /// The argument is a path to a file holding the configuration.
    #[default]
    File,
    /// The argument is the configuration text itself.
    String,
}

impl FromStr for InputMode {
    type Err = ConvertError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "string" => Ok(Self::String),
            _ => Err(ConvertError::InvalidMode(raw.to_string())),
        }
    }
}

impl TryFrom<String> for InputMode {
    type Error = ConvertError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        raw.parse()
    }
}

impl Display for InputMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::File => write!(f, "file"),
            Self::String => write!(f, "string"),
        }
    }
}

/// Turn a configuration argument into configuration text.
///
/// String mode borrows the argument unchanged; file mode reads the named file.
pub fn resolve_source(config: &str, mode: InputMode) -> Result<Cow<'_, str>, ConvertError> {
    match mode {
        InputMode::String => Ok(Cow::Borrowed(config)),
        InputMode::File => {
            debug!(path = config, "reading configuration file");
            fs::read_to_string(config)
                .map(Cow::Owned)
                .map_err(|source| ConvertError::Io {
                    path: config.to_string(),
                    source,
                })
        }
    }
}
