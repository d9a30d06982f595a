//! The recursive pretty-printer producing indented HTML text.
//!
//! Rendering always consults the style resolver first: an element whose
//! children aggregate to block opens on its own line and indents them by
//! two spaces; otherwise everything stays on one line. The current line
//! prefix is threaded through the recursion — block children extend it,
//! inline runs reset it to empty.

use std::collections::BTreeMap;
use std::fmt::Write;

use serde_yaml_ng::Value;

use crate::attrs::{AttributeValue, Attributes};
use crate::markdown::markdown;
use crate::node::{ElementWithContent, EmptyElement, EscapableText, Literal, Node, NodeList};
use crate::style::RenderStyle;

/// Options for HTML rendering.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Convert escapable text through markdown instead of plain escaping
    /// (default: false).
    pub markdown: bool,
    /// Feature-flag names passed to the markdown converter.
    pub markdown_extras: Vec<String>,
    /// Indentation the whole document starts at (default: empty).
    pub line_prefix: String,
    /// Per-tag style overrides; keys are lowercased tag names.
    pub style_overrides: BTreeMap<String, RenderStyle>,
    /// Style for tags absent from the static table (default: Block).
    pub unknown_element_style: RenderStyle,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            markdown: false,
            markdown_extras: Vec::new(),
            line_prefix: String::new(),
            style_overrides: BTreeMap::new(),
            unknown_element_style: RenderStyle::Block,
        }
    }
}

impl RenderOptions {
    /// Create new default options (plain escaping, no indentation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable markdown conversion for escapable text.
    pub fn markdown(mut self) -> Self {
        self.markdown = true;
        self
    }

    /// Add a markdown feature flag (implies markdown conversion).
    pub fn with_markdown_extra(mut self, extra: impl Into<String>) -> Self {
        self.markdown_extras.push(extra.into());
        self.markdown = true;
        self
    }

    /// Set the indentation the whole document starts at.
    pub fn with_line_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.line_prefix = prefix.into();
        self
    }

    /// Override the render style for one tag (case-insensitive).
    pub fn with_tag_style(mut self, tag: &str, style: RenderStyle) -> Self {
        self.style_overrides.insert(tag.to_ascii_lowercase(), style);
        self
    }

    /// Set the render style for tags absent from the static table.
    pub fn with_unknown_element_style(mut self, style: RenderStyle) -> Self {
        self.unknown_element_style = style;
        self
    }
}

/// Escape text content: `&`, `<`, and `>` only — quotes stay as written.
fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape an attribute value: quotes escaped as well.
fn escape_attr(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// Prefix every line of `text`. Empty text stays empty.
fn add_prefix(text: &str, prefix: &str) -> String {
    if prefix.is_empty() {
        return text.to_string();
    }
    text.split_inclusive('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect()
}

impl AttributeValue {
    /// Render to attribute text: null is empty, bools are `true`/`false`,
    /// numbers their canonical decimal form, strings escaped.
    pub fn render(&self) -> String {
        match self.value() {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => n.to_string(),
            Value::String(s) => escape_attr(s),
            // Ruled out at parse time.
            _ => String::new(),
        }
    }
}

impl Attributes {
    /// Render as `' name="value"'` pairs, in ascending name order.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in self.iter() {
            let _ = write!(out, " {}=\"{}\"", name, value.render());
        }
        out
    }
}

impl Literal {
    fn render_at(&self, prefix: &str) -> String {
        add_prefix(&self.text, prefix)
    }
}

impl EscapableText {
    fn render_at(&self, options: &RenderOptions, prefix: &str) -> String {
        let Some(text) = &self.text else {
            return String::new();
        };
        let body = if options.markdown {
            let mut fragment = markdown(text, &options.markdown_extras);
            // The converter contract: one trailing line terminator.
            if fragment.ends_with('\n') {
                fragment.pop();
            }
            fragment
        } else {
            escape_text(text)
        };
        add_prefix(&body, prefix)
    }
}

impl EmptyElement {
    fn render_at(&self, prefix: &str) -> String {
        format!("{prefix}<{}{}>", self.tag, self.attrs.render())
    }
}

impl ElementWithContent {
    fn render_at(&self, options: &RenderOptions, prefix: &str) -> String {
        let tag = &self.tag;
        let attrs = self.attrs.render();
        let child_prefix = format!("{prefix}  ");
        let content = self.children.render_at(options, &child_prefix);
        if self.children.render_style(options) == RenderStyle::Block {
            format!("{prefix}<{tag}{attrs}>\n{content}\n{prefix}</{tag}>")
        } else {
            format!("{prefix}<{tag}{attrs}>{content}</{tag}>")
        }
    }
}

impl Node {
    fn render_at(&self, options: &RenderOptions, prefix: &str) -> String {
        match self {
            Node::Literal(literal) => literal.render_at(prefix),
            Node::Escapable(text) => text.render_at(options, prefix),
            Node::Empty(element) => element.render_at(prefix),
            Node::Element(element) => element.render_at(options, prefix),
        }
    }

    /// Render this node, starting at `options.line_prefix`.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.render_at(options, &options.line_prefix)
    }

    /// Render with default options.
    pub fn to_html(&self) -> String {
        self.render(&RenderOptions::default())
    }
}

impl NodeList {
    fn render_at(&self, options: &RenderOptions, prefix: &str) -> String {
        if self.is_empty() {
            return String::new();
        }
        if self.render_style(options) == RenderStyle::Block {
            let lines: Vec<String> = self
                .iter()
                .map(|node| node.render_at(options, prefix))
                .collect();
            lines.join("\n")
        } else {
            let runs: Vec<String> = self
                .iter()
                .map(|node| node.render_at(options, ""))
                .collect();
            runs.join(" ")
        }
    }

    /// Render the sibling list, starting at `options.line_prefix`.
    pub fn render(&self, options: &RenderOptions) -> String {
        self.render_at(options, &options.line_prefix)
    }

    /// Render with default options.
    pub fn to_html(&self) -> String {
        self.render(&RenderOptions::default())
    }
}

// =============================================================================
// Tests
// =============================================================================
