//! Network device configuration conversion between vendor syntaxes.
//!
//! Two independent, stateless converters are provided:
//!
//! - [`brace_to_set`] — PAN-OS brace-nested configuration to flat `set` commands,
//!   including multi-line quoted banner blocks.
//! - [`xml_to_cli`] — Calix-style XML configuration to indented CLI commands.
//!
//! Both accept the configuration either inline or as a file path, selected
//! by an [`InputMode`], and return the converted text with lines joined by
//! `\n` and no trailing newline.
//!
//! # Examples
//!
//! ```
//! use netcfg_convert::{brace_to_set, xml_to_cli, InputMode};
//!
//! let set = brace_to_set("config {\n  hostname fw1;\n}", InputMode::String)?;
//! assert_eq!(set, "set hostname fw1");
//!
//! let cli = xml_to_cli("<config><hostname>olt-1</hostname></config>", InputMode::String)?;
//! assert_eq!(cli, "hostname olt-1");
//! # Ok::<(), netcfg_convert::ConvertError>(())
//! ```
//!
//! The XML parser lives in `xml-tree-core`; everything dialect-specific lives
//! in this crate.

pub mod brace_to_set;
pub mod error;
pub mod settings;
pub mod source;
pub mod xml_to_cli;

pub use brace_to_set::{brace_to_set, BraceToSet};
pub use error::ConvertError;
pub use settings::{default_settings, load_settings, Settings, SettingsError};
pub use source::{resolve_source, InputMode};
pub use xml_to_cli::{render_cli, try_xml_to_cli, xml_to_cli};
