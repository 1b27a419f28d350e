//! Tokenization and phrase normalization shared by query and chunk scoring.
//!
//! The tokenizer feeds the term-level relevance function; phrase
//! normalization is a separate, looser transform used only for
//! exact-substring phrase matching.

use crate::patterns::NON_ALNUM_RUN;

/// Closed list of common function words dropped from token streams.
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "if", "of", "in", "on", "at", "to", "for", "with", "by",
    "from", "as", "is", "are", "was", "were", "be", "been", "it", "its", "this", "that", "these",
    "those", "not",
];

/// Check whether a token is on the stop list.
#[must_use]
pub fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Tokenize text for term scoring.
///
/// Lowercases the input and extracts maximal runs of `[a-z0-9]`, allowing a
/// single internal apostrophe joining two runs (so `"fox's"` stays one
/// token). Tokens of length 1 and stop-list words are dropped.
///
/// # Example
///
/// ```rust
/// use passagemark::tokenize::tokenize;
///
/// assert_eq!(tokenize("The Quick, Fox's nap!"), vec!["quick", "fox's", "nap"]);
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut has_apostrophe = false;

    let chars: Vec<char> = text.chars().flat_map(char::to_lowercase).collect();
    for (i, &ch) in chars.iter().enumerate() {
        if ch.is_ascii_alphanumeric() {
            current.push(ch);
            continue;
        }

        // A typographic or ASCII apostrophe joins two runs, at most once per
        // token, and only when flanked by alphanumerics on both sides.
        if (ch == '\'' || ch == '\u{2019}')
            && !current.is_empty()
            && !has_apostrophe
            && chars.get(i + 1).is_some_and(char::is_ascii_alphanumeric)
        {
            current.push('\'');
            has_apostrophe = true;
            continue;
        }

        flush_token(&mut current, &mut has_apostrophe, &mut tokens);
    }
    flush_token(&mut current, &mut has_apostrophe, &mut tokens);

    tokens
}

fn flush_token(current: &mut String, has_apostrophe: &mut bool, tokens: &mut Vec<String>) {
    if current.chars().count() > 1 && !is_stop_word(current) {
        tokens.push(std::mem::take(current));
    } else {
        current.clear();
    }
    *has_apostrophe = false;
}

/// Normalize text for exact-phrase matching.
///
/// Lowercases, replaces every non-alphanumeric run with a single space, and
/// trims. Unlike [`tokenize`] this keeps stop words and single letters, so a
/// title phrase survives verbatim.
#[must_use]
pub fn normalize_phrase(text: &str) -> String {
    let lowered = text.to_lowercase();
    NON_ALNUM_RUN.replace_all(&lowered, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_strips_punctuation_and_stop_words() {
        assert_eq!(tokenize("The Quick, Fox's nap!"), vec!["quick", "fox's", "nap"]);
    }

    #[test]
    fn tokenize_drops_single_letter_tokens() {
        assert_eq!(tokenize("I x y climate"), vec!["climate"]);
    }

    #[test]
    fn tokenize_allows_one_internal_apostrophe() {
        assert_eq!(tokenize("don't"), vec!["don't"]);
        // A second apostrophe splits the token.
        assert_eq!(tokenize("rock'n'roll"), vec!["rock'n", "roll"]);
    }

    #[test]
    fn tokenize_rejects_leading_and_trailing_apostrophes() {
        assert_eq!(tokenize("'quoted' dogs' tails"), vec!["quoted", "dogs", "tails"]);
    }

    #[test]
    fn tokenize_treats_typographic_apostrophe_like_ascii() {
        assert_eq!(tokenize("fox\u{2019}s"), vec!["fox's"]);
    }

    #[test]
    fn tokenize_keeps_digits() {
        assert_eq!(tokenize("covid-19 response in 2021"), vec!["covid", "19", "response", "2021"]);
    }

    #[test]
    fn tokenize_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("the a an").is_empty());
    }

    #[test]
    fn normalize_phrase_collapses_non_alnum_runs() {
        assert_eq!(normalize_phrase("Climate -- Policy: Overview?!"), "climate policy overview");
    }

    #[test]
    fn normalize_phrase_keeps_stop_words() {
        assert_eq!(normalize_phrase("The State of the Union"), "the state of the union");
    }

    #[test]
    fn normalize_phrase_trims() {
        assert_eq!(normalize_phrase("  hello world  "), "hello world");
        assert_eq!(normalize_phrase("!!!"), "");
    }
}
