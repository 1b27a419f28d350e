//! Error types for the Result-returning convenience wrappers.
//!
//! The extraction and ranking core never raises errors: missing content and
//! empty queries are typed absences. This enum exists only so the top-level
//! `scan*` functions can offer a conventional `Result` surface.

/// Error type for the top-level scan operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No plausible article body was found after exhausting the fallback chain.
    #[error("no extractable article body found")]
    NoContent,

    /// The title tokenized to zero query terms.
    #[error("title produced no query tokens")]
    EmptyQuery,
}

/// Result type alias for scan operations.
pub type Result<T> = std::result::Result<T, Error>;
