//! # passagemark
//!
//! Article body extraction and title-to-passage ranking for single HTML
//! documents.
//!
//! Given one document, the crate locates the container most likely to hold
//! the primary narrative content, segments it into clean text blocks, and
//! ranks overlapping multi-block passages against a short query string (a
//! title). It is the analytic core behind a "jump to the relevant part of
//! this page" feature: the caller takes the returned block ranges and does
//! its own scrolling or highlighting.
//!
//! ## Quick Start
//!
//! ```rust
//! use passagemark::scan;
//!
//! let html = r#"<html><body><article>
//! <h2>Climate Policy Overview</h2>
//! <p>The climate policy overview sets out how the accord will be phased in across member states.</p>
//! <p>Parliament debated the measure for three days before ministers signed the final accord text.</p>
//! <p>Critics demanded more detail on enforcement, funding, and the timetable for national plans.</p>
//! </article></body></html>"#;
//!
//! let report = scan(html, "Climate Policy Overview")?;
//! assert!(!report.ranking.matches.is_empty());
//! # Ok::<(), passagemark::Error>(())
//! ```
//!
//! ## Pipeline
//!
//! - **Extraction**: a fallback chain tries the linked-data articleBody
//!   field, explicitly marked articleBody containers, and finally a scored
//!   search over candidate containers (block composition vs link density).
//! - **Ranking**: sliding 1-3 block windows are scored with a BM25-derived
//!   relevance function plus phrase, adjacency, and heading boosts, then
//!   reduced to a non-redundant top-K list.
//!
//! Everything is stateless and synchronous; the document tree is read-only.
//! Non-article pages yield typed absences, not errors.

mod error;
mod options;
mod patterns;

/// Document accessor capability and the shipped adapters.
pub mod accessor;

/// Typed text blocks and block extraction.
pub mod block;

/// Sliding-window chunk candidates and corpus statistics.
pub mod chunk;

/// Candidate container enumeration and composite scoring.
pub mod container;

/// Character encoding detection for byte input.
pub mod encoding;

/// Article body extraction pipeline.
pub mod extract;

/// Linked-data article records.
pub mod metadata;

/// Title-to-passage ranking.
pub mod rank;

/// Navigation session over a ranking result.
pub mod session;

/// Tokenization and phrase normalization.
pub mod tokenize;

// Public API - re-exports
pub use accessor::html::HtmlDocument;
pub use block::{extract_blocks, Block, TagKind};
pub use error::{Error, Result};
pub use extract::{extract_article, ArticleExtraction, BodySource};
pub use options::Options;
pub use rank::{rank_passages, RankedMatch, RankingResult};
pub use session::PassageSession;

use serde::{Deserialize, Serialize};

/// Combined outcome of extraction and ranking for one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    /// Concatenated article body text.
    pub body_text: String,
    /// Which fallback source produced the body.
    pub source: BodySource,
    /// Ordered diagnostic tags from the extraction pipeline.
    pub reasons: Vec<String>,
    /// Ranked passages for the title.
    pub ranking: RankingResult,
}

/// Scan an HTML document for passages relevant to a title, with defaults.
///
/// Returns `Err(Error::NoContent)` when no article body validates and
/// `Err(Error::EmptyQuery)` when the title tokenizes to nothing. Callers who
/// prefer absences over errors can drive [`extract_article`] and
/// [`rank_passages`] directly.
///
/// # Example
///
/// ```rust
/// use passagemark::{scan, Error};
///
/// let html = "<html><body><p>too short</p></body></html>";
/// assert!(matches!(scan(html, "anything here"), Err(Error::NoContent)));
/// ```
pub fn scan(html: &str, title: &str) -> Result<ScanReport> {
    scan_with_options(html, title, &Options::default())
}

/// Scan with custom options.
pub fn scan_with_options(html: &str, title: &str, options: &Options) -> Result<ScanReport> {
    if tokenize::tokenize(title).is_empty() {
        return Err(Error::EmptyQuery);
    }

    let doc = HtmlDocument::parse(html);
    let extraction = extract_article(&doc, doc.linked_data(), options);
    let Some(body_text) = extraction.body_text else {
        return Err(Error::NoContent);
    };

    let ranking = rank_passages(&extraction.blocks, title, options);
    Ok(ScanReport {
        body_text,
        source: extraction.source,
        reasons: extraction.reasons,
        ranking,
    })
}

/// Scan raw HTML bytes with automatic charset detection.
///
/// The bytes are transcoded to UTF-8 first (see [`encoding`]); invalid
/// sequences become replacement characters rather than errors.
pub fn scan_bytes(html: &[u8], title: &str) -> Result<ScanReport> {
    scan_bytes_with_options(html, title, &Options::default())
}

/// Scan raw HTML bytes with custom options.
pub fn scan_bytes_with_options(html: &[u8], title: &str, options: &Options) -> Result<ScanReport> {
    let html_str = encoding::transcode_to_utf8(html);
    scan_with_options(&html_str, title, options)
}
