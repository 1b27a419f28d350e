//! Navigation session over a ranking result.
//!
//! A presentation layer steps through ranked passages (jump to the next
//! relevant part, back to the previous one). The session is an explicit,
//! externally-owned cursor constructed from a [`RankingResult`]; it holds no
//! document state and never mutates the result it walks.

use crate::rank::{RankedMatch, RankingResult};

/// Cursor over the matches of one ranking result.
#[derive(Debug, Clone)]
pub struct PassageSession {
    result: RankingResult,
    cursor: Option<usize>,
}

impl PassageSession {
    /// Build a session over a ranking result.
    #[must_use]
    pub fn new(result: RankingResult) -> Self {
        Self {
            result,
            cursor: None,
        }
    }

    /// The underlying ranking result.
    #[must_use]
    pub fn result(&self) -> &RankingResult {
        &self.result
    }

    /// The match the cursor currently points at.
    #[must_use]
    pub fn current(&self) -> Option<&RankedMatch> {
        self.cursor.and_then(|idx| self.result.matches.get(idx))
    }

    /// Advance to the next match, wrapping past the last back to the best.
    #[allow(clippy::should_implement_trait)] // cursor with wrap-around, not an iterator
    pub fn next(&mut self) -> Option<&RankedMatch> {
        let len = self.result.matches.len();
        if len == 0 {
            return None;
        }
        self.cursor = Some(match self.cursor {
            Some(idx) => (idx + 1) % len,
            None => 0,
        });
        self.current()
    }

    /// Step back to the previous match, wrapping before the best to the last.
    pub fn previous(&mut self) -> Option<&RankedMatch> {
        let len = self.result.matches.len();
        if len == 0 {
            return None;
        }
        self.cursor = Some(match self.cursor {
            Some(0) | None => len - 1,
            Some(idx) => idx - 1,
        });
        self.current()
    }

    /// Number of matches available to step through.
    #[must_use]
    pub fn len(&self) -> usize {
        self.result.matches.len()
    }

    /// Whether the session has no matches.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.result.matches.is_empty()
    }
}
