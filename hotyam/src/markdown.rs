//! The markdown collaborator for escapable text nodes.
//!
//! Conversion is treated as an opaque function text → HTML fragment. The
//! fragment ends in one trailing line terminator (for non-empty input),
//! which the renderer strips.

use pulldown_cmark::{Options, Parser, html};

/// Convert markdown text to an HTML fragment.
///
/// `extras` are feature-flag names; unrecognized names are ignored so
/// configurations written against other converters keep working.
pub fn markdown(text: &str, extras: &[String]) -> String {
    let mut options = Options::empty();
    for extra in extras {
        match extra.as_str() {
            "tables" => options.insert(Options::ENABLE_TABLES),
            "footnotes" => options.insert(Options::ENABLE_FOOTNOTES),
            "strike" => options.insert(Options::ENABLE_STRIKETHROUGH),
            "smarty-pants" => options.insert(Options::ENABLE_SMART_PUNCTUATION),
            "task_list" => options.insert(Options::ENABLE_TASKLISTS),
            _ => {}
        }
    }

    let parser = Parser::new_ext(text, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paragraph_with_trailing_terminator() {
        assert_eq!(markdown("hello", &[]), "<p>hello</p>\n");
    }

    #[test]
    fn test_entities_escaped() {
        assert_eq!(markdown("a & b", &[]), "<p>a &amp; b</p>\n");
    }

    #[test]
    fn test_setext_heading() {
        assert_eq!(markdown("Heading\n=======", &[]), "<h1>Heading</h1>\n");
    }

    #[test]
    fn test_strike_extra() {
        let plain = markdown("~~gone~~", &[]);
        assert!(!plain.contains("<del>"));

        let extras = vec!["strike".to_string()];
        let struck = markdown("~~gone~~", &extras);
        assert!(struck.contains("<del>gone</del>"));
    }

    #[test]
    fn test_unknown_extra_ignored() {
        let extras = vec!["no-such-extra".to_string()];
        assert_eq!(markdown("hello", &extras), "<p>hello</p>\n");
    }
}
