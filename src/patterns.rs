//! Compiled regex patterns and selector vocabularies.
//!
//! All patterns are compiled once at startup using `LazyLock` for efficiency.
//! The tag lists here are the closed vocabularies the document accessors
//! answer queries against; the core never builds selectors dynamically.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Text Normalization Patterns
// =============================================================================

/// Matches runs of whitespace for collapsing to single spaces.
pub static WHITESPACE_NORMALIZE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE_NORMALIZE regex"));

/// Matches runs of non-alphanumeric characters for phrase normalization.
pub static NON_ALNUM_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("NON_ALNUM_RUN regex"));

// =============================================================================
// Boilerplate Detection Patterns
// =============================================================================

/// Matches text fragments that open with a known boilerplate phrase.
///
/// These are chrome leftovers (teasers, ad labels, subscription prompts,
/// legal footers) that survive structural filtering because they sit inside
/// otherwise content-like tags.
pub static BOILERPLATE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)^(read more|related|advertisement|sponsored|sign up|subscribe|share|follow us|copyright|all rights reserved)",
    )
    .expect("BOILERPLATE_PREFIX regex")
});

// =============================================================================
// Encoding Detection Patterns
// =============================================================================

/// Matches a charset declaration in a `<meta>` tag.
///
/// Covers both `<meta charset="...">` and the legacy
/// `<meta http-equiv="Content-Type" content="...; charset=...">` form.
pub static META_CHARSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?\s*([a-z0-9_\-]+)"#)
        .expect("META_CHARSET regex")
});

// =============================================================================
// Selector Vocabularies
// =============================================================================

/// Embedded linked-data metadata scripts.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Tags whose subtrees are structural chrome, never content.
///
/// A block node with any of these in its ancestor chain is dropped:
/// navigation, page furniture, forms, embedded media, interactive controls.
pub const EXCLUDED_TAGS: &[&str] = &[
    "nav", "header", "footer", "aside", "form", "script", "style", "iframe", "embed", "object",
    "video", "audio", "canvas", "svg", "button", "select", "input", "textarea", "dialog",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whitespace_normalize_collapses_spaces() {
        let result = WHITESPACE_NORMALIZE.replace_all("hello \t\n  world", " ");
        assert_eq!(result, "hello world");
    }

    #[test]
    fn boilerplate_prefix_matches_case_insensitively() {
        assert!(BOILERPLATE_PREFIX.is_match("Read More about this topic"));
        assert!(BOILERPLATE_PREFIX.is_match("SPONSORED: buy now"));
        assert!(BOILERPLATE_PREFIX.is_match("all rights reserved."));
        assert!(!BOILERPLATE_PREFIX.is_match("The sharing economy grew last year"));
    }

    #[test]
    fn boilerplate_prefix_anchors_at_start() {
        assert!(!BOILERPLATE_PREFIX.is_match("You should read more books"));
    }

    #[test]
    fn meta_charset_finds_declaration() {
        let html = r#"<meta http-equiv="Content-Type" content="text/html; charset=ISO-8859-1">"#;
        match META_CHARSET.captures(html) {
            Some(c) => assert_eq!(&c[1], "ISO-8859-1"),
            None => panic!("expected charset capture"),
        }
    }
}
