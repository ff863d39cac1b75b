use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::domain::TextChunk;

// A sentence is any run of text up to and including its terminal punctuation.
static SENTENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("SENTENCE_RE is a valid regex pattern"));

/// Collapses runs of whitespace (including newlines) into single spaces and
/// trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Splits `text` into chunks of at most `max_length` characters, packing
/// whole sentences greedily in their original order.
///
/// A single sentence longer than `max_length` becomes its own oversized
/// chunk; sentences are never split in the middle. A trailing fragment
/// without terminal punctuation counts as a sentence, so no characters are
/// lost beyond whitespace normalization.
pub fn segment(text: &str, max_length: usize) -> Vec<TextChunk> {
    let normalized = normalize_whitespace(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let mut sentences: Vec<&str> = Vec::new();
    let mut last_end = 0;
    for matched in SENTENCE_RE.find_iter(&normalized) {
        sentences.push(matched.as_str());
        last_end = matched.end();
    }
    let remainder = &normalized[last_end..];
    if !remainder.trim().is_empty() {
        sentences.push(remainder);
    }

    let mut chunks = Vec::new();
    let mut current = String::new();
    for sentence in sentences {
        if current.chars().count() + sentence.chars().count() <= max_length {
            current.push_str(sentence);
        } else {
            if !current.is_empty() {
                chunks.push(TextChunk::new(current.trim()));
            }
            current = sentence.to_string();
        }
    }
    if !current.trim().is_empty() {
        chunks.push(TextChunk::new(current.trim()));
    }

    chunks
}
