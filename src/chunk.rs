//! Sliding-window chunk candidates and corpus statistics.
//!
//! Chunks are contiguous windows of 1-3 blocks, generated lazily from a
//! block sequence and never mutated afterwards. Corpus statistics over the
//! full candidate set are computed once and frozen before any scoring.

use std::collections::HashMap;

use crate::block::Block;
use crate::options::Options;
use crate::tokenize::{normalize_phrase, tokenize};

/// A contiguous window of blocks considered as one unit for ranking.
#[derive(Debug, Clone)]
pub struct ChunkCandidate {
    /// First block index of the window (inclusive).
    pub start: usize,
    /// Last block index of the window (inclusive).
    pub end: usize,
    /// Window size in blocks.
    pub window: usize,
    /// Block texts joined with single spaces.
    pub text: String,
    /// Phrase-normalized text (alphanumeric and spaces only).
    pub normalized: String,
    /// Scoring tokens in order.
    pub tokens: Vec<String>,
    /// Term frequency per token.
    pub term_frequency: HashMap<String, usize>,
    /// Total token count.
    pub token_count: usize,
    /// Whether the window's first block is a heading.
    pub starts_with_heading: bool,
}

/// Corpus statistics over one candidate set, frozen before scoring.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    /// Candidates containing each term at least once.
    pub document_frequency: HashMap<String, usize>,
    /// Mean token count across candidates.
    pub avg_len: f64,
    /// Total candidate count.
    pub total: usize,
}

/// Generate every chunk candidate over a block sequence.
///
/// For each window size up to `options.max_window`, a window slides across
/// the sequence with step 1. Windows whose text tokenizes to nothing are
/// skipped. Ranges are unique across the result by construction.
#[must_use]
pub fn build_chunks<N>(blocks: &[Block<N>], options: &Options) -> Vec<ChunkCandidate> {
    let mut chunks = Vec::new();

    for window in 1..=options.max_window.min(blocks.len()) {
        for start in 0..=blocks.len() - window {
            let end = start + window - 1;
            let text = blocks[start..=end]
                .iter()
                .map(|b| b.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");

            let tokens = tokenize(&text);
            if tokens.is_empty() {
                continue;
            }

            let mut term_frequency: HashMap<String, usize> = HashMap::new();
            for token in &tokens {
                *term_frequency.entry(token.clone()).or_insert(0) += 1;
            }

            chunks.push(ChunkCandidate {
                start,
                end,
                window,
                normalized: normalize_phrase(&text),
                text,
                token_count: tokens.len(),
                tokens,
                term_frequency,
                starts_with_heading: blocks[start].kind.is_heading(),
            });
        }
    }

    chunks
}

/// Compute document frequencies and mean length over a candidate set.
#[must_use]
pub fn corpus_stats(chunks: &[ChunkCandidate]) -> CorpusStats {
    let mut document_frequency: HashMap<String, usize> = HashMap::new();
    let mut token_total = 0usize;

    for chunk in chunks {
        token_total += chunk.token_count;
        for term in chunk.term_frequency.keys() {
            *document_frequency.entry(term.clone()).or_insert(0) += 1;
        }
    }

    let total = chunks.len();
    let avg_len = if total == 0 {
        0.0
    } else {
        token_total as f64 / total as f64
    };

    CorpusStats {
        document_frequency,
        avg_len,
        total,
    }
}
