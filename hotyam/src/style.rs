//! Per-node render styles and their resolution.
//!
//! Every node renders either inline (on one line with its siblings) or as a
//! block (own lines, indented). A third style, "according to children",
//! defers the choice to the aggregate style of the element's children: it
//! stays inline until any child is a block.

use crate::node::{ElementWithContent, EmptyElement, EscapableText, Literal, Node, NodeList};
use crate::render::RenderOptions;

/// How a node's markup is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderStyle {
    /// On one line, joined to siblings with single spaces.
    Inline,
    /// On its own lines, indented under its parent.
    Block,
    /// Inline unless any child resolves to block.
    AccordingToChildren,
}

/// Tags rendered inline by default.
const INLINE_TAGS: &[&str] = &[
    "a", "abbr", "acronym", "b", "bdo", "big", "cite", "code", "dfn", "em", "i", "img", "input",
    "kbd", "label", "q", "samp", "select", "small", "span", "strong", "sub", "sup", "textarea",
    "tt", "var",
];

/// Tags that defer to their children by default.
const ACCORDING_TO_CHILDREN_TAGS: &[&str] = &["button", "del", "ins", "map", "object", "script"];

/// Tags rendered as blocks by default.
const BLOCK_TAGS: &[&str] = &[
    "address", "article", "aside", "audio", "blockquote", "br", "canvas", "dd", "div", "dl", "dt",
    "fieldset", "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6",
    "header", "hgroup", "hr", "li", "noscript", "ol", "output", "p", "pre", "section", "table",
    "tbody", "td", "tfoot", "th", "thead", "tr", "ul", "video",
];

fn table_style(tag: &str) -> Option<RenderStyle> {
    if INLINE_TAGS.contains(&tag) {
        return Some(RenderStyle::Inline);
    }
    if ACCORDING_TO_CHILDREN_TAGS.contains(&tag) {
        return Some(RenderStyle::AccordingToChildren);
    }
    if BLOCK_TAGS.contains(&tag) {
        return Some(RenderStyle::Block);
    }
    None
}

/// Resolve a tag's style: configured override, then the static table, then
/// the configured style for unknown elements. Lookup is case-insensitive.
pub fn tag_style(options: &RenderOptions, tag: &str) -> RenderStyle {
    let tag = tag.to_ascii_lowercase();
    if let Some(style) = options.style_overrides.get(&tag) {
        return *style;
    }
    table_style(&tag).unwrap_or(options.unknown_element_style)
}

impl Literal {
    /// Literals are always inline.
    pub fn render_style(&self, _options: &RenderOptions) -> RenderStyle {
        RenderStyle::Inline
    }
}

impl EscapableText {
    /// Markdown conversion produces block-level markup (`<p>`, headings);
    /// plain escaped text stays inline.
    pub fn render_style(&self, options: &RenderOptions) -> RenderStyle {
        if options.markdown {
            RenderStyle::Block
        } else {
            RenderStyle::Inline
        }
    }
}

impl EmptyElement {
    /// A self-closing element has no children to inspect, so
    /// "according to children" coerces to inline.
    pub fn render_style(&self, options: &RenderOptions) -> RenderStyle {
        match tag_style(options, &self.tag) {
            RenderStyle::AccordingToChildren => RenderStyle::Inline,
            style => style,
        }
    }
}

impl ElementWithContent {
    pub fn render_style(&self, options: &RenderOptions) -> RenderStyle {
        match tag_style(options, &self.tag) {
            RenderStyle::AccordingToChildren => self.children.render_style(options),
            style => style,
        }
    }
}

impl Node {
    /// The style this node contributes to its parent list's aggregate.
    pub fn render_style(&self, options: &RenderOptions) -> RenderStyle {
        match self {
            Node::Literal(literal) => literal.render_style(options),
            Node::Escapable(text) => text.render_style(options),
            Node::Empty(element) => element.render_style(options),
            Node::Element(element) => element.render_style(options),
        }
    }
}

impl NodeList {
    /// Aggregate style: inline when empty, block as soon as any member is
    /// block, inline otherwise.
    pub fn render_style(&self, options: &RenderOptions) -> RenderStyle {
        if self
            .iter()
            .any(|node| node.render_style(options) == RenderStyle::Block)
        {
            RenderStyle::Block
        } else {
            RenderStyle::Inline
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
