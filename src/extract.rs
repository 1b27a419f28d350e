//! Article body extraction pipeline.
//!
//! Three sources are tried in order, first valid result wins: the linked-data
//! articleBody field, explicitly marked articleBody containers, and the
//! scored-container search. A document where none validate yields a typed
//! absence with diagnostic reasons — a normal, cheap outcome for non-article
//! pages, not an error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::accessor::{DocumentAccessor, QueryTarget};
use crate::block::{harvest_blocks, joined_text, normalize_text, Block, TagKind};
use crate::container::{meets_body_gate, select_container};
use crate::metadata::find_article_body;
use crate::options::Options;
use crate::patterns::BOILERPLATE_PREFIX;

/// Which fallback source produced the article body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BodySource {
    /// The articleBody field of an embedded linked-data record.
    LinkedData,
    /// One or more containers explicitly marked as the article body.
    MarkedContainer,
    /// The best-scoring candidate container.
    ScoredContainer,
    /// No source validated.
    Absent,
}

/// Result of article body extraction.
///
/// `reasons` accumulates short diagnostic tags in pipeline order, for
/// observability rather than control flow.
#[derive(Debug, Clone)]
pub struct ArticleExtraction<N> {
    /// The canonical block sequence, empty when absent.
    pub blocks: Vec<Block<N>>,
    /// Concatenated body text, if a source validated.
    pub body_text: Option<String>,
    /// The source that won, or `Absent`.
    pub source: BodySource,
    /// Ordered diagnostic tags.
    pub reasons: Vec<String>,
}

impl<N> ArticleExtraction<N> {
    /// Whether a body was found.
    #[must_use]
    pub fn is_found(&self) -> bool {
        self.source != BodySource::Absent
    }

    fn absent(reasons: Vec<String>) -> Self {
        Self {
            blocks: Vec::new(),
            body_text: None,
            source: BodySource::Absent,
            reasons,
        }
    }
}

/// Extract the article body block sequence from a document.
///
/// `linked_data` carries the document's pre-decoded JSON-LD records; pass an
/// empty slice when none were found. The document tree is never mutated.
#[must_use]
pub fn extract_article<A: DocumentAccessor>(
    doc: &A,
    linked_data: &[Value],
    options: &Options,
) -> ArticleExtraction<A::Node> {
    let mut reasons = Vec::new();

    // Source (a): linked-data articleBody.
    let body = find_article_body(linked_data);
    if body.is_absent() {
        reasons.push("linked-data:no-record".to_string());
    } else {
        let blocks = linked_data_blocks(body.into_paragraphs(), options);
        if meets_body_gate(&blocks, options) {
            reasons.push("linked-data:accepted".to_string());
            debug!(blocks = blocks.len(), "body from linked data");
            return found(blocks, BodySource::LinkedData, reasons);
        }
        reasons.push("linked-data:below-threshold".to_string());
    }

    let Some(root) = doc.root() else {
        reasons.push("document:empty".to_string());
        return ArticleExtraction::absent(reasons);
    };

    // Source (b): explicitly marked articleBody containers.
    let markers = top_level_markers(doc, &root);
    if markers.is_empty() {
        reasons.push("marked-container:no-marker".to_string());
    } else {
        let blocks = merged_marker_blocks(doc, &markers, options);
        if meets_body_gate(&blocks, options) {
            reasons.push("marked-container:accepted".to_string());
            debug!(markers = markers.len(), blocks = blocks.len(), "body from marked container");
            return found(blocks, BodySource::MarkedContainer, reasons);
        }
        reasons.push("marked-container:below-threshold".to_string());
    }

    // Source (c): scored-container search.
    if let Some(candidate) = select_container(doc, &root, options) {
        reasons.push(format!("scored-container:score={}", candidate.score));
        debug!(score = candidate.score, "body from scored container");
        return found(candidate.blocks, BodySource::ScoredContainer, reasons);
    }
    reasons.push("scored-container:none".to_string());

    ArticleExtraction::absent(reasons)
}

fn found<N>(blocks: Vec<Block<N>>, source: BodySource, reasons: Vec<String>) -> ArticleExtraction<N> {
    let body_text = Some(joined_text(&blocks));
    ArticleExtraction {
        blocks,
        body_text,
        source,
        reasons,
    }
}

/// Build paragraph blocks from linked-data body text.
///
/// Applies the same normalization, boilerplate, length, and dedupe rules as
/// tree extraction; these blocks carry no node back-reference.
fn linked_data_blocks<N>(paragraphs: Vec<String>, options: &Options) -> Vec<Block<N>> {
    let mut blocks: Vec<Block<N>> = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for paragraph in paragraphs {
        let text = normalize_text(&paragraph);
        if text.is_empty() || BOILERPLATE_PREFIX.is_match(&text) {
            continue;
        }
        if text.chars().count() < options.min_block_chars {
            continue;
        }
        if !seen.insert(text.to_lowercase()) {
            continue;
        }
        blocks.push(Block {
            index: blocks.len(),
            text,
            kind: TagKind::Paragraph,
            node: None,
        });
    }

    blocks
}

/// ArticleBody markers with nested duplicates removed.
///
/// Publishers sometimes mark both a wrapper and its inner column; keeping
/// only markers not contained in an already-kept marker avoids extracting
/// the same text twice.
fn top_level_markers<A: DocumentAccessor>(doc: &A, root: &A::Node) -> Vec<A::Node> {
    let mut kept: Vec<A::Node> = Vec::new();
    for marker in doc.query(root, QueryTarget::ArticleBodyMarkers) {
        if !kept.iter().any(|k| doc.contains(k, &marker)) {
            kept.push(marker);
        }
    }
    kept
}

/// Extract and merge blocks across markers into one deduplicated sequence.
fn merged_marker_blocks<A: DocumentAccessor>(
    doc: &A,
    markers: &[A::Node],
    options: &Options,
) -> Vec<Block<A::Node>> {
    let mut merged: Vec<Block<A::Node>> = Vec::new();
    let mut seen = std::collections::HashSet::new();

    for marker in markers {
        for block in harvest_blocks(doc, marker, options).blocks {
            if !seen.insert(block.text.to_lowercase()) {
                continue;
            }
            merged.push(Block {
                index: merged.len(),
                ..block
            });
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accessor::fixture::FixtureDocument;
    use serde_json::json;

    const LONG: &str = "This sentence is comfortably longer than twenty characters and keeps going.";

    fn empty_fixture() -> FixtureDocument {
        FixtureDocument::new()
    }

    fn article_doc() -> FixtureDocument {
        let mut doc = FixtureDocument::new();
        let body = doc.child(doc.root_id(), "body", "");
        let article = doc.child(body, "article", "");
        for i in 0..4 {
            doc.child(article, "p", &format!("{LONG} Tree paragraph number {i}."));
        }
        doc
    }

    fn linked_record(paragraphs: usize) -> Value {
        let body: Vec<String> = (0..paragraphs)
            .map(|i| format!("{LONG} Linked paragraph number {i}."))
            .collect();
        json!({ "@type": "NewsArticle", "articleBody": body })
    }

    #[test]
    fn linked_data_wins_over_tree_sources() {
        let doc = article_doc();
        let records = vec![linked_record(4)];

        let extraction = extract_article(&doc, &records, &Options::default());
        assert_eq!(extraction.source, BodySource::LinkedData);
        assert!(extraction.is_found());
        assert_eq!(extraction.blocks.len(), 4);
        assert!(extraction.blocks.iter().all(|b| b.node.is_none()));
        assert_eq!(extraction.reasons, vec!["linked-data:accepted"]);
    }

    #[test]
    fn thin_linked_data_falls_through_to_tree() {
        let doc = article_doc();
        let records = vec![linked_record(2)]; // two paragraphs, below the block gate

        let extraction = extract_article(&doc, &records, &Options::default());
        assert_eq!(extraction.source, BodySource::ScoredContainer);
        assert_eq!(extraction.reasons[0], "linked-data:below-threshold");
    }

    #[test]
    fn marked_container_beats_scoring() {
        let mut doc = FixtureDocument::new();
        let body = doc.child(doc.root_id(), "body", "");
        let marked = doc.child_marked(body, "div", "");
        for i in 0..4 {
            doc.child(marked, "p", &format!("{LONG} Marked paragraph number {i}."));
        }
        // A bigger unmarked container that scoring would otherwise prefer.
        let other = doc.child(body, "div", "");
        for i in 0..8 {
            doc.child(other, "p", &format!("{LONG} Decoy paragraph number {i}."));
        }

        let extraction = extract_article(&doc, &[], &Options::default());
        assert_eq!(extraction.source, BodySource::MarkedContainer);
        assert!(extraction
            .blocks
            .iter()
            .all(|b| b.text.contains("Marked paragraph")));
    }

    #[test]
    fn nested_markers_extract_once() {
        let mut doc = FixtureDocument::new();
        let body = doc.child(doc.root_id(), "body", "");
        let outer = doc.child_marked(body, "div", "");
        let inner = doc.child_marked(outer, "div", "");
        for i in 0..4 {
            doc.child(inner, "p", &format!("{LONG} Nested paragraph number {i}."));
        }

        let extraction = extract_article(&doc, &[], &Options::default());
        assert_eq!(extraction.source, BodySource::MarkedContainer);
        assert_eq!(extraction.blocks.len(), 4);
    }

    #[test]
    fn scored_container_is_the_last_resort() {
        let doc = article_doc();

        let extraction = extract_article(&doc, &[], &Options::default());
        assert_eq!(extraction.source, BodySource::ScoredContainer);
        assert_eq!(extraction.reasons.len(), 3);
        assert_eq!(extraction.reasons[0], "linked-data:no-record");
        assert_eq!(extraction.reasons[1], "marked-container:no-marker");
        assert!(extraction.reasons[2].starts_with("scored-container:score="));
    }

    #[test]
    fn short_two_paragraph_page_yields_absent() {
        let mut doc = empty_fixture();
        let body = doc.child(doc.root_id(), "body", "");
        let div = doc.child(body, "div", "");
        // Two paragraphs totalling 180 characters: below both gates.
        doc.child(div, "p", &"a".repeat(90));
        doc.child(div, "p", &"b".repeat(90));

        let extraction = extract_article(&doc, &[], &Options::default());
        assert_eq!(extraction.source, BodySource::Absent);
        assert!(extraction.body_text.is_none());
        assert!(extraction.blocks.is_empty());
        assert_eq!(
            extraction.reasons,
            vec!["linked-data:no-record", "marked-container:no-marker", "scored-container:none"]
        );
    }

    #[test]
    fn body_text_joins_blocks_with_single_spaces() {
        let doc = article_doc();
        let extraction = extract_article(&doc, &[], &Options::default());
        let body_text = match extraction.body_text {
            Some(text) => text,
            None => panic!("expected a body"),
        };
        assert!(body_text.contains("number 0. This sentence"));
        assert!(!body_text.contains("  "));
    }
}
