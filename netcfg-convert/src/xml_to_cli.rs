//! Calix-style XML configuration to indented CLI commands.
//!
//! Every element becomes one line: the tag name, then its trimmed text when
//! present. Indentation is two spaces per nesting level, counted from the
//! element tree and never from the source whitespace. The document element
//! itself is never printed; its children start at column zero.
//!
//! Two tags are directives rather than nodes. `exit` prints as a bare
//! keyword and `no` prints as `no <text>`, both one level shallower than
//! their siblings so they line up with the block they close or negate.
//! Elements tagged `config` are transparent containers at any depth.

use tracing::{debug, error, instrument};
use xml_tree_core::{parse_str, ParseError, XmlNode};

use crate::error::ConvertError;
use crate::source::{resolve_source, InputMode};

const INDENT_UNIT: &str = "  ";
const CONTAINER_TAG: &str = "config";
const EXIT_TAG: &str = "exit";
const NO_TAG: &str = "no";

/// Render a parsed configuration tree as CLI lines joined by newlines.
pub fn render_cli(root: XmlNode) -> String {
    let wrapper = XmlNode::with_children(CONTAINER_TAG, root.children);
    let mut lines = Vec::new();
    emit(&wrapper, 0, &mut lines);
    lines.join("\n")
}

/// Convert XML text to CLI form, surfacing parse failures.
pub fn try_xml_to_cli(xml: &str) -> Result<String, ParseError> {
    let root = parse_str(xml)?;
    Ok(render_cli(root))
}

/// Convert an XML configuration, read from a file or given inline, to CLI form.
///
/// Malformed XML is logged and produces an empty string. Only an unreadable
/// source is returned as an error.
#[instrument(skip_all, fields(mode = %mode))]
pub fn xml_to_cli(config: &str, mode: InputMode) -> Result<String, ConvertError> {
    let text = resolve_source(config, mode)?;
    match try_xml_to_cli(&text) {
        Ok(output) => {
            debug!(bytes_in = text.len(), bytes_out = output.len(), "xml conversion finished");
            Ok(output)
        }
        Err(err) => {
            error!(error = %err, "failed to parse XML configuration");
            Ok(String::new())
        }
    }
}

fn emit(node: &XmlNode, depth: usize, lines: &mut Vec<String>) {
    let line = match node.tag.as_str() {
        CONTAINER_TAG => {
            for child in &node.children {
                emit(child, depth, lines);
            }
            return;
        }
        EXIT_TAG => format!("{}{EXIT_TAG}", indent(depth.saturating_sub(1))),
        NO_TAG => match node.trimmed_text() {
            Some(subject) => format!("{}{NO_TAG} {subject}", indent(depth.saturating_sub(1))),
            None => format!("{}{NO_TAG}", indent(depth.saturating_sub(1))),
        },
        tag => match node.trimmed_text() {
            Some(text) => format!("{}{tag} {text}", indent(depth)),
            None => format!("{}{tag}", indent(depth)),
        },
    };
    lines.push(line);

    for child in &node.children {
        emit(child, depth + 1, lines);
    }
}

fn indent(depth: usize) -> String {
    INDENT_UNIT.repeat(depth)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use xml_tree_core::{parse_str, ParseError};

    use super::{render_cli, try_xml_to_cli, xml_to_cli};
    use crate::error::ConvertError;
    use crate::source::InputMode;

    #[test]
    fn renders_nested_interface_block() {
        let xml = "<config><interface><gigabitethernet><name>1/1/1</name><shutdown>false</shutdown></gigabitethernet></interface></config>";
        assert_eq!(
            try_xml_to_cli(xml).expect("convert"),
            "interface\n  gigabitethernet\n    name 1/1/1\n    shutdown false"
        );
    }

    #[test]
    fn root_tag_name_is_never_printed() {
        let xml = "<data><hostname>olt-1</hostname></data>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "hostname olt-1");
    }

    #[test]
    fn exit_and_no_render_at_parent_indent() {
        let xml = "<config><interface><ethernet><name>x1</name><no>shutdown</no><exit/></ethernet></interface></config>";
        assert_eq!(
            try_xml_to_cli(xml).expect("convert"),
            "interface\n  ethernet\n    name x1\n  no shutdown\n  exit"
        );
    }

    #[test]
    fn top_level_directives_stay_at_column_zero() {
        let xml = "<config><no>ntp</no><exit/></config>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "no ntp\nexit");
    }

    #[test]
    fn empty_no_prints_bare_keyword() {
        let xml = "<config><vlan><no/></vlan></config>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "vlan\nno");
    }

    #[test]
    fn nested_config_is_transparent() {
        let xml = "<config><system><config><hostname>a</hostname></config></system></config>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "system\n  hostname a");
    }

    #[test]
    fn text_is_trimmed_and_source_indent_ignored() {
        let xml = "<config>\n        <ntp>\n   <server>\n      10.0.0.1\n   </server>\n</ntp>\n</config>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "ntp\n  server 10.0.0.1");
    }

    #[test]
    fn trailing_text_stays_off_the_parent_line() {
        let xml = "<config><interface>eth0<name>x</name> tail</interface></config>";
        assert_eq!(try_xml_to_cli(xml).expect("convert"), "interface eth0\n  name x");
    }

    #[test]
    fn every_descendant_yields_one_line() {
        let xml = "<config><a><b>1</b><c><d/><exit/></c></a><no>e</no></config>";
        let root = parse_str(xml).expect("parse");
        let expected = root.descendant_count();
        let output = render_cli(root);
        assert_eq!(output.lines().count(), expected);
    }

    #[test]
    fn empty_root_renders_nothing() {
        assert_eq!(try_xml_to_cli("<config/>").expect("convert"), "");
    }

    #[test]
    fn strict_conversion_surfaces_parse_error() {
        let err = try_xml_to_cli("<config><interface>").expect_err("should fail");
        assert!(matches!(err, ParseError::Malformed(_)));
    }

    #[test]
    fn malformed_xml_yields_empty_output() {
        let output = xml_to_cli("<config><interface>", InputMode::String).expect("lenient");
        assert_eq!(output, "");
    }

    #[test]
    fn unreadable_file_is_still_an_error() {
        let err = xml_to_cli("/nonexistent/olt.xml", InputMode::File)
            .expect_err("missing file should fail");
        assert!(matches!(err, ConvertError::Io { .. }));
    }
}
