use std::fs;
use std::path::PathBuf;

use pretty_assertions::assert_eq;
use xml_tree_core::{parse, parse_str, ParseError, XmlNode};

fn fixture(path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join(path)
}

fn leaf(tag: &str, text: &str) -> XmlNode {
    XmlNode {
        text: Some(text.to_string()),
        ..XmlNode::new(tag)
    }
}

fn tags(node: &XmlNode) -> Vec<&str> {
    node.children.iter().map(|child| child.tag.as_str()).collect()
}

#[test]
fn parses_nested_elements_in_document_order() {
    let node = parse_str(
        "<config><interface><gigabitethernet><name>1/1/1</name><shutdown>false</shutdown></gigabitethernet></interface></config>",
    )
    .expect("parse should succeed");

    let expected = XmlNode::with_children(
        "config",
        vec![XmlNode::with_children(
            "interface",
            vec![XmlNode::with_children(
                "gigabitethernet",
                vec![leaf("name", "1/1/1"), leaf("shutdown", "false")],
            )],
        )],
    );
    assert_eq!(node, expected);
}

#[test]
fn skips_layout_whitespace_and_keeps_empty_elements() {
    let node = parse_str("<config>\n  <vlan>\n    <exit/>\n  </vlan>\n</config>\n")
        .expect("parse should succeed");

    assert_eq!(tags(&node), vec!["vlan"]);
    let vlan = &node.children[0];
    assert_eq!(vlan.text, None);
    assert_eq!(tags(vlan), vec!["exit"]);
}

#[test]
fn decodes_entities_and_cdata() {
    let node = parse_str("<config><a>x &amp; y</a><b><![CDATA[<raw>]]></b></config>")
        .expect("parse should succeed");

    assert_eq!(node.children[0].trimmed_text(), Some("x & y"));
    assert_eq!(node.children[1].trimmed_text(), Some("<raw>"));
}

#[test]
fn text_after_first_child_is_not_element_text() {
    let node = parse_str("<config><interface>eth0<name>x</name> tail</interface></config>")
        .expect("parse should succeed");

    let interface = &node.children[0];
    assert_eq!(interface.trimmed_text(), Some("eth0"));
    assert_eq!(interface.children, vec![leaf("name", "x")]);
}

#[test]
fn rejects_unterminated_element() {
    let err = parse_str("<config><interface>").expect_err("parse should fail");
    assert!(matches!(err, ParseError::Malformed(_)), "{err}");
}

#[test]
fn rejects_mismatched_closing_tag() {
    assert!(parse_str("<config><a></b></config>").is_err());
}

#[test]
fn rejects_multiple_roots_and_empty_documents() {
    assert!(parse_str("<a/><b/>").is_err());
    assert!(matches!(
        parse_str("  ").expect_err("parse should fail"),
        ParseError::Malformed(_)
    ));
}

#[test]
fn parses_calix_fixture_root() {
    let bytes = fs::read(fixture("fixtures/calix_basic.xml")).expect("fixture read");
    let node = parse(&bytes).expect("fixture parse");

    assert_eq!(node.tag, "config");
    assert_eq!(tags(&node), vec!["hostname", "ntp", "interface", "vlan", "no"]);
}
