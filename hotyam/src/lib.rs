//! YAML-to-HTML compiler with layout-aware pretty-printing.
//!
//! hotyam consumes a document tree already parsed from YAML (a
//! `serde_yaml_ng::Value`) and compiles it to indented HTML:
//! - **Classification**: bare strings are literal text, one-element lists
//!   are escapable text, one-entry mappings are elements (self-closing when
//!   their value is a mapping or null)
//! - **Disambiguation**: explicit rules decide whether the head of an
//!   element's content list is an attribute dict or a first child
//! - **Layout**: each element renders inline or as an indented block,
//!   driven by a per-tag table, configuration overrides, and the aggregate
//!   style of its children
//! - **Failures as values**: every parse attempt returns a result; nothing
//!   panics on malformed trees
//!
//! # Example
//!
//! ```rust
//! let nodes = hotyam::parse_str("p: Hello, world!").unwrap();
//! assert_eq!(nodes.to_html(), "<p>Hello, world!</p>");
//!
//! let nodes = hotyam::parse_str("img: {src: pic.gif, width: 100px}").unwrap();
//! assert_eq!(nodes.to_html(), r#"<img src="pic.gif" width="100px">"#);
//!
//! // Escapable text goes through markdown when enabled.
//! use hotyam::RenderOptions;
//! let nodes = hotyam::parse_str("div:\n- - 'some *markdown*'").unwrap();
//! assert_eq!(
//!     nodes.render(&RenderOptions::default().markdown()),
//!     "<div>\n  <p>some <em>markdown</em></p>\n</div>"
//! );
//! ```

mod tracing_macros;

pub mod attrs;
pub mod markdown;
pub mod node;
pub mod render;
pub mod style;

mod error;

// Re-export the classifier types at the crate root for convenience
pub use attrs::{AttributeValue, Attributes};
pub use error::{Error, NotParsed};
pub use node::{ElementWithContent, EmptyElement, EscapableText, Literal, Node, NodeList};
pub use render::RenderOptions;
pub use style::RenderStyle;

// The tree types this crate consumes, produced by the external parser
pub use serde_yaml_ng::{Mapping, Number, Value};

/// Parse a tree value as a list of sibling nodes.
///
/// A sequence is parsed member by member; anything else becomes a
/// one-element list.
pub fn parse(value: &Value) -> Result<NodeList, NotParsed> {
    NodeList::parse(value)
}

/// Parse YAML source text and classify the resulting tree.
pub fn parse_str(source: &str) -> Result<NodeList, Error> {
    let value: Value = serde_yaml_ng::from_str(source)?;
    Ok(parse(&value)?)
}
