//! Configuration options for extraction and ranking.
//!
//! The `Options` struct carries every tunable used by the pipeline. The
//! defaults implement the documented behavior; changing them shifts the
//! precision/recall balance of container selection and the shape of the
//! ranked match list.

/// Configuration options for extraction and ranking.
///
/// All fields are public for easy configuration. Use `Default::default()`
/// for standard settings.
///
/// # Example
///
/// ```rust
/// use passagemark::Options;
///
/// // Use defaults
/// let options = Options::default();
///
/// // Customize specific fields
/// let options = Options {
///     max_matches: 5,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct Options {
    /// Maximum number of candidate containers scored per document.
    ///
    /// Bounds extraction cost on large, div-heavy pages.
    ///
    /// Default: `30`
    pub max_candidates: usize,

    /// Minimum concatenated block text length for a body to be accepted.
    ///
    /// Default: `250`
    pub min_body_chars: usize,

    /// Minimum number of blocks for a body to be accepted.
    ///
    /// Default: `3`
    pub min_blocks: usize,

    /// Minimum characters for a list-item block.
    ///
    /// Default: `8`
    pub min_list_item_chars: usize,

    /// Minimum characters for a heading block.
    ///
    /// Default: `10`
    pub min_heading_chars: usize,

    /// Minimum characters for any other block (paragraphs, quotes).
    ///
    /// Default: `20`
    pub min_block_chars: usize,

    /// Largest sliding-window size, in blocks, for chunk generation.
    ///
    /// Default: `3`
    pub max_window: usize,

    /// Maximum number of ranked matches returned.
    ///
    /// Default: `10`
    pub max_matches: usize,

    /// Maximum block-range overlap ratio between two accepted matches.
    ///
    /// Overlap ratio is the intersecting index span divided by the shorter
    /// of the two spans.
    ///
    /// Default: `0.6`
    pub max_overlap_ratio: f64,

    /// BM25 term-frequency saturation parameter.
    ///
    /// Default: `1.2`
    pub bm25_k1: f64,

    /// BM25 length-normalization parameter.
    ///
    /// Default: `0.75`
    pub bm25_b: f64,

    /// Additive boost per shared consecutive query-token pair.
    ///
    /// Default: `0.35`
    pub bigram_boost: f64,

    /// Additive boost when the normalized title appears verbatim in a chunk.
    ///
    /// Applied only when the normalized title is at least
    /// `min_phrase_chars` long.
    ///
    /// Default: `1.2`
    pub phrase_boost: f64,

    /// Minimum normalized-title length for the exact-phrase boost.
    ///
    /// Default: `8`
    pub min_phrase_chars: usize,

    /// Additive boost when a chunk's leading block is a heading.
    ///
    /// Default: `0.2`
    pub heading_boost: f64,

    /// Maximum snippet length in characters, ellipsis included.
    ///
    /// Default: `180`
    pub max_snippet_chars: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_candidates: 30,
            min_body_chars: 250,
            min_blocks: 3,
            min_list_item_chars: 8,
            min_heading_chars: 10,
            min_block_chars: 20,
            max_window: 3,
            max_matches: 10,
            max_overlap_ratio: 0.6,
            bm25_k1: 1.2,
            bm25_b: 0.75,
            bigram_boost: 0.35,
            phrase_boost: 1.2,
            min_phrase_chars: 8,
            heading_boost: 0.2,
            max_snippet_chars: 180,
        }
    }
}
