//! Typed text blocks and block extraction.
//!
//! A [`Block`] is the unit everything downstream operates on: a normalized,
//! non-empty run of inline text with a tag kind and a document position.
//! Extraction walks the block-level descendants of a container, drops
//! structural chrome and boilerplate, and dedupes by lowercase text.

use std::collections::HashSet;

use crate::accessor::{DocumentAccessor, QueryTarget};
use crate::options::Options;
use crate::patterns::{BOILERPLATE_PREFIX, WHITESPACE_NORMALIZE};

/// Kind of block-level tag a block was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagKind {
    /// A paragraph.
    Paragraph,
    /// A heading of the given level (2-6).
    Heading(u8),
    /// A block quote.
    Quote,
    /// A list item.
    ListItem,
}

impl TagKind {
    /// Map a lowercase tag name to its block kind.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(Self::Paragraph),
            "h2" => Some(Self::Heading(2)),
            "h3" => Some(Self::Heading(3)),
            "h4" => Some(Self::Heading(4)),
            "h5" => Some(Self::Heading(5)),
            "h6" => Some(Self::Heading(6)),
            "blockquote" => Some(Self::Quote),
            "li" => Some(Self::ListItem),
            _ => None,
        }
    }

    /// Whether this kind is a heading.
    #[must_use]
    pub fn is_heading(self) -> bool {
        matches!(self, Self::Heading(_))
    }

    /// Minimum character count for a block of this kind.
    ///
    /// Shorter fragments are discarded as noise (nav labels, bylines).
    #[must_use]
    pub fn min_chars(self, options: &Options) -> usize {
        match self {
            Self::ListItem => options.min_list_item_chars,
            Self::Heading(_) => options.min_heading_chars,
            Self::Paragraph | Self::Quote => options.min_block_chars,
        }
    }
}

/// A normalized unit of extracted body text.
///
/// `node` is the opaque accessor handle for the source element, usable by a
/// presentation layer for highlighting. Blocks synthesized from linked-data
/// text carry no handle.
#[derive(Debug, Clone)]
pub struct Block<N> {
    /// Ordinal position in the extracted sequence.
    pub index: usize,
    /// Whitespace-collapsed inline text, never empty.
    pub text: String,
    /// Tag kind of the source element.
    pub kind: TagKind,
    /// Back-reference to the source node, if any.
    pub node: Option<N>,
}

/// Blocks harvested from one container plus filtering counters.
pub(crate) struct BlockHarvest<N> {
    pub blocks: Vec<Block<N>>,
    /// Number of block nodes dropped for opening with a boilerplate phrase.
    pub boilerplate_hits: usize,
}

/// Collapse whitespace runs to single spaces and trim.
pub(crate) fn normalize_text(text: &str) -> String {
    WHITESPACE_NORMALIZE.replace_all(text, " ").trim().to_string()
}

/// Extract the ordered, deduplicated block sequence under `scope`.
///
/// Malformed or absent nodes simply produce fewer blocks; an empty result is
/// valid.
#[must_use]
pub fn extract_blocks<A: DocumentAccessor>(
    doc: &A,
    scope: &A::Node,
    options: &Options,
) -> Vec<Block<A::Node>> {
    harvest_blocks(doc, scope, options).blocks
}

/// Extraction with filtering counters, for container scoring.
pub(crate) fn harvest_blocks<A: DocumentAccessor>(
    doc: &A,
    scope: &A::Node,
    options: &Options,
) -> BlockHarvest<A::Node> {
    let mut blocks = Vec::new();
    let mut seen = HashSet::new();
    let mut boilerplate_hits = 0;

    for node in doc.query(scope, QueryTarget::Blocks) {
        let Some(kind) = doc.tag_kind(&node) else {
            continue;
        };
        if doc.in_excluded_subtree(&node) {
            continue;
        }

        let text = normalize_text(&doc.text(&node));
        if text.is_empty() {
            continue;
        }
        if BOILERPLATE_PREFIX.is_match(&text) {
            boilerplate_hits += 1;
            continue;
        }
        if text.chars().count() < kind.min_chars(options) {
            continue;
        }

        // First occurrence wins; later duplicates are dropped.
        if !seen.insert(text.to_lowercase()) {
            continue;
        }

        blocks.push(Block {
            index: blocks.len(),
            text,
            kind,
            node: Some(node),
        });
    }

    BlockHarvest {
        blocks,
        boilerplate_hits,
    }
}

/// Concatenate block texts with single-space separators.
pub(crate) fn joined_text<N>(blocks: &[Block<N>]) -> String {
    blocks
        .iter()
        .map(|b| b.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
