//! Generic XML element-tree parsing used by the configuration converters.

pub mod parser;
pub mod tree;

pub use parser::{parse, parse_str, ParseError};
pub use tree::XmlNode;
