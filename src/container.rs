//! Candidate container enumeration and composite scoring.
//!
//! Out of many plausible containers, pick the one most likely to hold the
//! article body: seed candidates from semantic markers and paragraph-rich
//! containers, extract blocks per candidate, and score block composition
//! against link density and boilerplate noise.

use tracing::debug;

use crate::accessor::{ContainerRole, DocumentAccessor, QueryTarget};
use crate::block::{harvest_blocks, joined_text, normalize_text, Block, TagKind};
use crate::options::Options;

/// Weight per paragraph block.
const PARAGRAPH_WEIGHT: i64 = 180;
/// Weight per heading block.
const HEADING_WEIGHT: i64 = 60;
/// Weight per list-item block.
const LIST_ITEM_WEIGHT: i64 = 30;
/// Weight per quote block.
const QUOTE_WEIGHT: i64 = 90;
/// Penalty scale for link density.
const LINK_DENSITY_PENALTY: f64 = 1200.0;
/// Penalty per boilerplate hit inside the container.
const BOILERPLATE_PENALTY: i64 = 250;
/// Flat bonus for semantic article / articleBody markers.
const ARTICLE_BONUS: i64 = 500;
/// Flat bonus for main-role markers.
const MAIN_BONUS: i64 = 250;

/// A surviving candidate with its extracted blocks and composite score.
pub(crate) struct ScoredCandidate<N> {
    pub node: N,
    pub blocks: Vec<Block<N>>,
    pub score: i64,
}

/// Fraction of a container's visible text that sits inside anchor text.
///
/// Returns 0 for containers without text; capped at 1 so nested anchors
/// cannot push the ratio past the whole.
#[must_use]
pub fn link_density<A: DocumentAccessor>(doc: &A, scope: &A::Node) -> f64 {
    let total = normalize_text(&doc.text(scope)).chars().count();
    if total == 0 {
        return 0.0;
    }

    let link_chars: usize = doc
        .query(scope, QueryTarget::Anchors)
        .iter()
        .map(|anchor| normalize_text(&doc.text(anchor)).chars().count())
        .sum();

    (link_chars as f64 / total as f64).min(1.0)
}

/// Composite container score over an extracted block sequence.
pub(crate) fn composite_score<N>(
    blocks: &[Block<N>],
    boilerplate_hits: usize,
    density: f64,
    role: ContainerRole,
) -> i64 {
    let text_len = joined_text(blocks).chars().count() as i64;

    let mut paragraphs = 0;
    let mut headings = 0;
    let mut list_items = 0;
    let mut quotes = 0;
    for block in blocks {
        match block.kind {
            TagKind::Paragraph => paragraphs += 1,
            TagKind::Heading(_) => headings += 1,
            TagKind::ListItem => list_items += 1,
            TagKind::Quote => quotes += 1,
        }
    }

    let role_bonus = match role {
        ContainerRole::Article => ARTICLE_BONUS,
        ContainerRole::Main => MAIN_BONUS,
        ContainerRole::Generic => 0,
    };

    text_len
        + PARAGRAPH_WEIGHT * paragraphs
        + HEADING_WEIGHT * headings
        + LIST_ITEM_WEIGHT * list_items
        + QUOTE_WEIGHT * quotes
        - (LINK_DENSITY_PENALTY * density).round() as i64
        - BOILERPLATE_PENALTY * boilerplate_hits as i64
        + role_bonus
}

/// Whether a block sequence has enough substance to be an article body.
pub(crate) fn meets_body_gate<N>(blocks: &[Block<N>], options: &Options) -> bool {
    blocks.len() >= options.min_blocks
        && joined_text(blocks).chars().count() >= options.min_body_chars
}

/// Choose the best-scoring container under `root`, if any passes the gate.
///
/// Candidates are enumerated as semantic seeds first, then containers ranked
/// by qualifying-paragraph count, the whole set capped to bound cost on large
/// documents. Ties keep the earlier-enumerated candidate.
pub(crate) fn select_container<A: DocumentAccessor>(
    doc: &A,
    root: &A::Node,
    options: &Options,
) -> Option<ScoredCandidate<A::Node>> {
    let mut candidates: Vec<A::Node> = Vec::new();
    let mut push_unique = |list: &mut Vec<A::Node>, node: A::Node| {
        if !list.iter().any(|existing| doc.same_node(existing, &node)) {
            list.push(node);
        }
    };

    for seed in doc.query(root, QueryTarget::SemanticSeeds) {
        push_unique(&mut candidates, seed);
    }

    let mut ranked: Vec<(A::Node, usize)> = doc
        .query(root, QueryTarget::Containers)
        .into_iter()
        .filter_map(|container| {
            let count = qualifying_paragraphs(doc, &container, options);
            (count >= 2).then_some((container, count))
        })
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    for (container, _) in ranked {
        push_unique(&mut candidates, container);
    }
    candidates.truncate(options.max_candidates);

    debug!(candidates = candidates.len(), "scoring containers");

    let mut best: Option<ScoredCandidate<A::Node>> = None;
    for node in candidates {
        let harvest = harvest_blocks(doc, &node, options);
        if harvest.blocks.is_empty() || !meets_body_gate(&harvest.blocks, options) {
            continue;
        }

        let density = link_density(doc, &node);
        let score = composite_score(
            &harvest.blocks,
            harvest.boilerplate_hits,
            density,
            doc.container_role(&node),
        );

        // Strictly-greater keeps the earlier candidate on ties.
        if best.as_ref().is_none_or(|b| score > b.score) {
            best = Some(ScoredCandidate {
                node,
                blocks: harvest.blocks,
                score,
            });
        }
    }

    if let Some(candidate) = &best {
        debug!(score = candidate.score, blocks = candidate.blocks.len(), "container selected");
    }
    best
}

/// Count paragraph descendants long enough to be content.
fn qualifying_paragraphs<A: DocumentAccessor>(doc: &A, scope: &A::Node, options: &Options) -> usize {
    doc.query(scope, QueryTarget::Paragraphs)
        .iter()
        .filter(|p| normalize_text(&doc.text(p)).chars().count() >= options.min_block_chars)
        .count()
}
