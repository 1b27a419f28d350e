//! Title-to-passage ranking.
//!
//! Chunks are scored against the title with a BM25-derived term relevance
//! function plus bigram-adjacency, exact-phrase, and leading-heading boosts.
//! The scored list is reduced to a non-redundant top-K by greedy selection
//! under a block-range overlap cap. Absence of signal yields an empty match
//! list, never an error.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::block::Block;
use crate::chunk::{build_chunks, corpus_stats, ChunkCandidate, CorpusStats};
use crate::options::Options;
use crate::tokenize::{normalize_phrase, tokenize};

/// One ranked passage, final and immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedMatch {
    /// First block index of the passage (inclusive).
    pub start: usize,
    /// Last block index of the passage (inclusive).
    pub end: usize,
    /// Relevance score, rounded to 4 decimals.
    pub score: f64,
    /// Full passage text.
    pub text: String,
    /// Display snippet, at most 180 characters.
    pub snippet: String,
}

/// Result of ranking one block sequence against a title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankingResult {
    /// Number of query tokens the title produced.
    pub query_token_count: usize,
    /// Number of chunk candidates generated.
    pub chunk_count: usize,
    /// Ranked, non-redundant matches, best first.
    pub matches: Vec<RankedMatch>,
}

impl RankingResult {
    fn empty(query_token_count: usize) -> Self {
        Self {
            query_token_count,
            chunk_count: 0,
            matches: Vec::new(),
        }
    }
}

/// Rank passages of a block sequence against a title.
///
/// Deterministic: the same (blocks, title) pair always yields identical
/// output. An empty title or block sequence short-circuits to an empty
/// result without building chunks.
#[must_use]
pub fn rank_passages<N>(blocks: &[Block<N>], title: &str, options: &Options) -> RankingResult {
    let query_tokens = tokenize(title);
    if query_tokens.is_empty() || blocks.is_empty() {
        return RankingResult::empty(query_tokens.len());
    }

    let chunks = build_chunks(blocks, options);
    if chunks.is_empty() {
        return RankingResult::empty(query_tokens.len());
    }

    let stats = corpus_stats(&chunks);
    let query_tf = distinct_query_terms(&query_tokens);

    let phrase = normalize_phrase(title);
    let phrase = (phrase.chars().count() >= options.min_phrase_chars).then_some(phrase);

    let mut scored: Vec<(usize, f64)> = chunks
        .iter()
        .enumerate()
        .filter_map(|(idx, chunk)| {
            let score =
                score_chunk(chunk, &query_tokens, &query_tf, &stats, phrase.as_deref(), options);
            (score > 0.0).then_some((idx, score))
        })
        .collect();

    collapse_identical_ranges(&mut scored, &chunks);

    // Stable sort keeps enumeration order on ties.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    let mut matches: Vec<RankedMatch> = Vec::new();
    for (idx, score) in scored {
        if matches.len() >= options.max_matches {
            break;
        }
        let chunk = &chunks[idx];
        let redundant = matches.iter().any(|m| {
            overlap_ratio((m.start, m.end), (chunk.start, chunk.end)) > options.max_overlap_ratio
        });
        if !redundant {
            matches.push(emit_match(chunk, score, options));
        }
    }

    debug!(chunks = chunks.len(), matches = matches.len(), "ranking complete");

    RankingResult {
        query_token_count: query_tokens.len(),
        chunk_count: chunks.len(),
        matches,
    }
}

/// Block-range overlap ratio: intersection length over the shorter range.
#[must_use]
pub fn overlap_ratio(a: (usize, usize), b: (usize, usize)) -> f64 {
    let inter_start = a.0.max(b.0);
    let inter_end = a.1.min(b.1);
    if inter_end < inter_start {
        return 0.0;
    }

    let intersection = inter_end - inter_start + 1;
    let shorter = (a.1 - a.0 + 1).min(b.1 - b.0 + 1);
    intersection as f64 / shorter as f64
}

/// Distinct query terms with their in-query frequencies, first-seen order.
fn distinct_query_terms(query_tokens: &[String]) -> Vec<(String, usize)> {
    let mut terms: Vec<(String, usize)> = Vec::new();
    for token in query_tokens {
        match terms.iter_mut().find(|(term, _)| term == token) {
            Some((_, count)) => *count += 1,
            None => terms.push((token.clone(), 1)),
        }
    }
    terms
}

fn score_chunk(
    chunk: &ChunkCandidate,
    query_tokens: &[String],
    query_tf: &[(String, usize)],
    stats: &CorpusStats,
    phrase: Option<&str>,
    options: &Options,
) -> f64 {
    let mut score = 0.0;

    let k1 = options.bm25_k1;
    let b = options.bm25_b;
    let n = stats.total as f64;
    let chunk_len = chunk.token_count as f64;

    for (term, qf) in query_tf {
        let tf = chunk.term_frequency.get(term).copied().unwrap_or(0);
        let df = stats.document_frequency.get(term).copied().unwrap_or(0);
        if tf == 0 || df == 0 {
            continue;
        }

        let idf = (1.0 + (n - df as f64 + 0.5) / (df as f64 + 0.5)).ln();
        let length_ratio = if stats.avg_len > 0.0 {
            chunk_len / stats.avg_len
        } else {
            1.0
        };
        let tf = tf as f64;
        let tf_weight = tf * (k1 + 1.0) / (tf + k1 * (1.0 - b + b * length_ratio));
        let query_weight = 1.0 + (1.0 + *qf as f64).ln();

        score += idf * tf_weight * query_weight;
    }

    if query_tokens.len() >= 2 && chunk.tokens.len() >= 2 {
        let chunk_pairs: HashSet<(&str, &str)> = chunk
            .tokens
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
            .collect();
        for pair in query_tokens.windows(2) {
            if chunk_pairs.contains(&(pair[0].as_str(), pair[1].as_str())) {
                score += options.bigram_boost;
            }
        }
    }

    if let Some(phrase) = phrase {
        // The boost rewards finding the title inside a longer passage; a
        // chunk that is just the title restated earns nothing extra here.
        if chunk.normalized.len() > phrase.len() && chunk.normalized.contains(phrase) {
            score += options.phrase_boost;
        }
    }

    if chunk.starts_with_heading {
        score += options.heading_boost;
    }

    score
}

/// Collapse candidates sharing an identical block range to the best one.
///
/// Ranges are unique by construction under the current windowing, so this is
/// normally a no-op; it is kept as a safety invariant against future
/// windowing changes.
fn collapse_identical_ranges(scored: &mut Vec<(usize, f64)>, chunks: &[ChunkCandidate]) {
    let mut best_for_range: HashMap<(usize, usize), (usize, f64)> = HashMap::new();
    for &(idx, score) in scored.iter() {
        let range = (chunks[idx].start, chunks[idx].end);
        match best_for_range.get(&range) {
            Some(&(_, kept)) if kept >= score => {}
            _ => {
                best_for_range.insert(range, (idx, score));
            }
        }
    }
    scored.retain(|&(idx, _)| {
        let range = (chunks[idx].start, chunks[idx].end);
        best_for_range.get(&range).is_some_and(|&(kept, _)| kept == idx)
    });
}

fn emit_match(chunk: &ChunkCandidate, score: f64, options: &Options) -> RankedMatch {
    RankedMatch {
        start: chunk.start,
        end: chunk.end,
        score: (score * 10_000.0).round() / 10_000.0,
        text: chunk.text.clone(),
        snippet: snippet_of(&chunk.text, options.max_snippet_chars),
    }
}

/// Truncate to the snippet budget, ellipsis included.
fn snippet_of(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut snippet: String = text.chars().take(max_chars.saturating_sub(3)).collect();
    snippet.push_str("...");
    snippet
}
