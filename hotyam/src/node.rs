//! The node classifier: turns tree values into HTML nodes.
//!
//! Classification tries alternatives in a fixed order and keeps the first
//! success. A bare string is a [`Literal`]; a one-element list holding a
//! string (or null) is [`EscapableText`]; a one-entry mapping is an element,
//! self-closing when its value is a mapping or null, with a closing tag
//! otherwise. All failures are [`NotParsed`] values, never panics.
//!
//! The subtle case is an element's content list: its head may be an
//! attribute dict or a first child. [`Attributes::parse_strict`] refuses the
//! ambiguous shape (an unwrapped one-entry mapping), and
//! [`ElementWithContent::parse`] treats that refusal as "the head is a
//! child node".

use serde_yaml_ng::Value;

use crate::attrs::Attributes;
use crate::error::NotParsed;
use crate::tracing_macros::debug;

/// Already-safe text, emitted verbatim. Source: a bare string.
#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    /// The text, rendered without escaping.
    pub text: String,
}

impl Literal {
    /// Succeeds iff the value is exactly a string.
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        match value {
            Value::String(text) => Ok(Self { text: text.clone() }),
            _ => Err(NotParsed::new("Literal", value, "not text")),
        }
    }
}

/// Text that is escaped (or markdown-converted) when rendered.
/// Source: a one-element list holding a string or null.
#[derive(Debug, Clone, PartialEq)]
pub struct EscapableText {
    /// The text; `None` renders as the empty string.
    pub text: Option<String>,
}

impl EscapableText {
    /// Succeeds iff the value is a one-element list holding a string or null.
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        let Value::Sequence(seq) = value else {
            return Err(NotParsed::new("EscapableText", value, "not a singleton list"));
        };
        if seq.len() != 1 {
            return Err(NotParsed::new("EscapableText", value, "not a singleton list"));
        }
        match &seq[0] {
            Value::String(text) => Ok(Self {
                text: Some(text.clone()),
            }),
            Value::Null => Ok(Self { text: None }),
            _ => Err(NotParsed::new(
                "EscapableText",
                value,
                "not singleton list containing text or null",
            )),
        }
    }
}

/// A self-closing element like `<hr>` or `<img src="...">`.
/// Source: a one-entry mapping whose value is a mapping or null.
#[derive(Debug, Clone, PartialEq)]
pub struct EmptyElement {
    /// Tag name as written in the source.
    pub tag: String,
    /// The element's attributes.
    pub attrs: Attributes,
}

impl EmptyElement {
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        let Some((key, attrs_value)) = single_entry(value) else {
            return Err(NotParsed::new(
                "EmptyElement",
                value,
                "not a dict containing 1 entry",
            ));
        };
        let tag = tag_name("EmptyElement", key, value)?;
        let attrs = Attributes::parse_permissive(attrs_value)?;
        Ok(Self { tag, attrs })
    }
}

/// An element with a closing tag.
/// Source: a one-entry mapping whose value is anything but a mapping or null.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementWithContent {
    /// Tag name as written in the source.
    pub tag: String,
    /// Attributes pulled from the head of the content list, if it parsed
    /// strictly as an attribute dict.
    pub attrs: Attributes,
    /// The element's children, in source order.
    pub children: NodeList,
}

impl ElementWithContent {
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        let Some((key, content)) = single_entry(value) else {
            return Err(NotParsed::new(
                "ElementWithContent",
                value,
                "not a dict containing 1 entry",
            ));
        };
        let tag = tag_name("ElementWithContent", key, value)?;

        // `[]` and `[null]` mean no attributes and no children.
        if let Value::Sequence(seq) = content
            && matches!(seq.as_slice(), [] | [Value::Null])
        {
            return Ok(Self {
                tag,
                attrs: Attributes::empty(),
                children: NodeList::empty(),
            });
        }

        let (attrs, children) = match content {
            Value::Sequence(seq) => match Attributes::parse_strict(&seq[0]) {
                Ok(attrs) => (attrs, NodeList::from_slice(&seq[1..])?),
                // The disambiguation escape hatch: a head that strict
                // attribute parsing refuses is an ordinary child node.
                Err(_) => {
                    debug!("<{tag}>: content head is not an attribute dict, parsing it as a child");
                    (Attributes::empty(), NodeList::from_slice(seq)?)
                }
            },
            other => (Attributes::empty(), NodeList::parse(other)?),
        };

        Ok(Self {
            tag,
            attrs,
            children,
        })
    }
}

/// A parsed HTML node.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Already-safe text emitted verbatim.
    Literal(Literal),
    /// Text escaped or markdown-converted at render time.
    Escapable(EscapableText),
    /// A self-closing element.
    Empty(EmptyElement),
    /// An element with a closing tag.
    Element(ElementWithContent),
}

impl Node {
    /// Classify a tree value as a node: text first, then element.
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        parse_text(value)
            .or_else(|_| parse_element(value))
            .map_err(|_| NotParsed::new("Node", value, "not a valid HTML node"))
    }

    /// True for both text variants.
    pub fn is_text(&self) -> bool {
        matches!(self, Node::Literal(_) | Node::Escapable(_))
    }

    /// True for both element variants.
    pub fn is_element(&self) -> bool {
        matches!(self, Node::Empty(_) | Node::Element(_))
    }

    /// Get as an element with content.
    pub fn as_element(&self) -> Option<&ElementWithContent> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Get as a self-closing element.
    pub fn as_empty(&self) -> Option<&EmptyElement> {
        match self {
            Node::Empty(element) => Some(element),
            _ => None,
        }
    }
}

/// Try both text shapes; surface only the group-level failure.
fn parse_text(value: &Value) -> Result<Node, NotParsed> {
    Literal::parse(value)
        .map(Node::Literal)
        .or_else(|_| EscapableText::parse(value).map(Node::Escapable))
        .map_err(|_| NotParsed::new("Text", value, "not a valid text node"))
}

/// Try both element shapes; surface only the group-level failure.
fn parse_element(value: &Value) -> Result<Node, NotParsed> {
    EmptyElement::parse(value)
        .map(Node::Empty)
        .or_else(|_| ElementWithContent::parse(value).map(Node::Element))
        .map_err(|_| NotParsed::new("Element", value, "not a valid element"))
}

/// Zero or more sibling nodes, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeList {
    nodes: Vec<Node>,
}

impl NodeList {
    /// A list with no nodes.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a value as siblings: a sequence member-by-member, anything
    /// else as a single node wrapped in a one-element list.
    pub fn parse(value: &Value) -> Result<Self, NotParsed> {
        match value {
            Value::Sequence(seq) => Self::from_slice(seq),
            other => Ok(Self {
                nodes: vec![Node::parse(other)?],
            }),
        }
    }

    /// Parse each value as a node, failing on the first failure
    /// (propagated unchanged).
    pub fn from_slice(values: &[Value]) -> Result<Self, NotParsed> {
        let nodes = values.iter().map(Node::parse).collect::<Result<_, _>>()?;
        Ok(Self { nodes })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Node> {
        self.nodes.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }
}

impl<'a> IntoIterator for &'a NodeList {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

fn single_entry(value: &Value) -> Option<(&Value, &Value)> {
    match value {
        Value::Mapping(mapping) if mapping.len() == 1 => mapping.iter().next(),
        _ => None,
    }
}

/// Element tags come from mapping keys, which may be any scalar; non-string
/// scalars take the same canonical text forms attribute values render with.
fn tag_name(component: &str, key: &Value, whole: &Value) -> Result<String, NotParsed> {
    match key {
        Value::String(tag) => Ok(tag.clone()),
        Value::Bool(tag) => Ok(tag.to_string()),
        Value::Number(tag) => Ok(tag.to_string()),
        _ => Err(NotParsed::new(
            component,
            whole,
            "tag must be text, a number, or a bool",
        )),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml_ng::from_str(source).expect("test yaml should parse")
    }

    #[test]
    fn test_literal_is_exactly_a_string() {
        let literal = Literal::parse(&yaml("'123'")).unwrap();
        assert_eq!(literal.text, "123");

        let failure = Literal::parse(&yaml("123")).unwrap_err();
        assert_eq!(failure.message, "Literal: not text");
    }

    #[test]
    fn test_escapable_text_shapes() {
        let text = EscapableText::parse(&yaml("- Jekyll & Hyde")).unwrap();
        assert_eq!(text.text.as_deref(), Some("Jekyll & Hyde"));

        let null = EscapableText::parse(&yaml("- null")).unwrap();
        assert_eq!(null.text, None);

        let failure = EscapableText::parse(&yaml("plain")).unwrap_err();
        assert_eq!(failure.message, "EscapableText: not a singleton list");

        let failure = EscapableText::parse(&yaml("[a, b]")).unwrap_err();
        assert_eq!(failure.message, "EscapableText: not a singleton list");

        let failure = EscapableText::parse(&yaml("- true")).unwrap_err();
        assert_eq!(
            failure.message,
            "EscapableText: not singleton list containing text or null"
        );
    }

    #[test]
    fn test_empty_element() {
        let hr = EmptyElement::parse(&yaml("hr:")).unwrap();
        assert_eq!(hr.tag, "hr");
        assert!(hr.attrs.is_empty());

        let link = EmptyElement::parse(&yaml(
            "link: {rel: stylesheet, type: text/css, href: styles.css}",
        ))
        .unwrap();
        assert_eq!(link.tag, "link");
        assert_eq!(link.attrs.len(), 3);
    }

    #[test]
    fn test_empty_element_rejects_other_shapes() {
        let failure = EmptyElement::parse(&yaml("[hr]")).unwrap_err();
        assert_eq!(failure.message, "EmptyElement: not a dict containing 1 entry");

        assert!(EmptyElement::parse(&yaml("{a: '1', b: '2'}")).is_err());
    }

    #[test]
    fn test_empty_element_propagates_attr_failure() {
        let failure = EmptyElement::parse(&yaml("div: text")).unwrap_err();
        assert_eq!(failure.message, "Attributes: not a dict or null");
    }

    #[test]
    fn test_element_with_text_content() {
        let div = ElementWithContent::parse(&yaml("div: text")).unwrap();
        assert_eq!(div.tag, "div");
        assert!(div.attrs.is_empty());
        assert_eq!(div.children.len(), 1);
    }

    #[test]
    fn test_element_with_empty_content_list() {
        for source in ["div: []", "div: [null]"] {
            let div = ElementWithContent::parse(&yaml(source)).unwrap();
            assert!(div.attrs.is_empty(), "{source}");
            assert!(div.children.is_empty(), "{source}");
        }
    }

    #[test]
    fn test_element_pulls_wrapped_attributes_from_head() {
        let div = ElementWithContent::parse(&yaml("div: [[{class: content}]]")).unwrap();
        assert_eq!(div.attrs.len(), 1);
        assert!(div.children.is_empty());
    }

    #[test]
    fn test_element_routes_refused_head_to_children() {
        // An unwrapped one-entry mapping fails strict attribute parsing,
        // so both entries become child elements.
        let div = ElementWithContent::parse(&yaml("div: [{a: '1'}, {b: '2'}]")).unwrap();
        assert!(div.attrs.is_empty());
        assert_eq!(div.children.len(), 2);
        assert_eq!(div.children.get(0).unwrap().as_element().unwrap().tag, "a");
        assert_eq!(div.children.get(1).unwrap().as_element().unwrap().tag, "b");
    }

    #[test]
    fn test_element_attributes_plus_children() {
        let div =
            ElementWithContent::parse(&yaml("div: [{class: a, id: b}, [text], {hr: null}]"))
                .unwrap();
        assert_eq!(div.attrs.len(), 2);
        assert_eq!(div.children.len(), 2);
        assert!(div.children.get(0).unwrap().is_text());
        assert!(div.children.get(1).unwrap().as_empty().is_some());
    }

    #[test]
    fn test_node_parse_order() {
        assert!(matches!(Node::parse(&yaml("text")).unwrap(), Node::Literal(_)));
        assert!(matches!(Node::parse(&yaml("- text")).unwrap(), Node::Escapable(_)));
        assert!(matches!(Node::parse(&yaml("hr:")).unwrap(), Node::Empty(_)));
        assert!(matches!(Node::parse(&yaml("div: text")).unwrap(), Node::Element(_)));
    }

    #[test]
    fn test_node_failure_names_outer_category() {
        let failure = Node::parse(&yaml("123")).unwrap_err();
        assert_eq!(failure.message, "Node: not a valid HTML node");
        assert_eq!(failure.node, yaml("123"));
    }

    #[test]
    fn test_group_failures_name_their_category() {
        assert_eq!(
            parse_text(&yaml("123")).unwrap_err().message,
            "Text: not a valid text node"
        );
        assert_eq!(
            parse_element(&yaml("123")).unwrap_err().message,
            "Element: not a valid element"
        );
    }

    #[test]
    fn test_node_list_wraps_single_values() {
        let nodes = NodeList::parse(&yaml("hr:")).unwrap();
        assert_eq!(nodes.len(), 1);
        assert!(nodes.get(0).unwrap().is_element());
    }

    #[test]
    fn test_node_list_parses_members_in_order() {
        let nodes = NodeList::parse(&yaml("[{li: one}, {li: two}]")).unwrap();
        assert_eq!(nodes.len(), 2);
        let tags: Vec<&str> = nodes
            .iter()
            .map(|node| node.as_element().unwrap().tag.as_str())
            .collect();
        assert_eq!(tags, ["li", "li"]);
    }

    #[test]
    fn test_node_list_propagates_member_failure_unchanged() {
        let failure = NodeList::parse(&yaml("[{li: one}, 123]")).unwrap_err();
        assert_eq!(failure.message, "Node: not a valid HTML node");
        assert_eq!(failure.node, yaml("123"));
    }

    #[test]
    fn test_reparsing_is_stable() {
        let value = yaml("div: [{class: a}, [text], {hr: null}]");
        assert_eq!(Node::parse(&value).unwrap(), Node::parse(&value).unwrap());
    }
}
