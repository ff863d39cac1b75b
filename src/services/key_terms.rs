use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::generation::{MAX_KEY_TERMS, MIN_KEY_TERM_LEN, STOPWORDS};

static TOKEN_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\W+").expect("TOKEN_SPLIT_RE is a valid regex pattern"));

/// Extracts up to five distinct salient terms from `text`, lower-cased and in
/// order of first occurrence. Tokens of three characters or fewer and common
/// stopwords are dropped. Deterministic for identical input.
pub fn extract_key_terms(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    let mut terms: Vec<String> = Vec::new();

    for token in TOKEN_SPLIT_RE.split(&lowered) {
        if token.chars().count() < MIN_KEY_TERM_LEN {
            continue;
        }
        if STOPWORDS.contains(&token) {
            continue;
        }
        if terms.iter().any(|t| t == token) {
            continue;
        }
        terms.push(token.to_string());
        if terms.len() == MAX_KEY_TERMS {
            break;
        }
    }

    terms
}
