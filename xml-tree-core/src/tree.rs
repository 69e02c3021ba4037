/// A generic XML element node.
///
/// Attributes are not retained; configuration dialects handled here carry
/// their data in element names and text only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XmlNode {
    /// Element tag name.
    pub tag: String,
    /// Child elements in document order.
    pub children: Vec<XmlNode>,
    /// Optional text content.
    pub text: Option<String>,
}

impl XmlNode {
    /// Create a new XML node with no children or text.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            children: Vec::new(),
            text: None,
        }
    }

    /// Create a node owning `children`.
    pub fn with_children(tag: impl Into<String>, children: Vec<XmlNode>) -> Self {
        Self {
            tag: tag.into(),
            children,
            text: None,
        }
    }

    /// Text content with surrounding whitespace removed; `None` when blank.
    pub fn trimmed_text(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Number of elements below this node, excluding the node itself.
    pub fn descendant_count(&self) -> usize {
        self.children
            .iter()
            .map(|child| 1 + child.descendant_count())
            .sum()
    }
}
