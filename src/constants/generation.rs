//! Fixed parameters of the question-generation pipeline.
//!
//! The delimiter and answer marker are a wire contract shared between the
//! prompt instructions, the response validator and the fallback formatter.
//! Changing either breaks parsing of everything the model was ever told to
//! emit, so they live here rather than next to any single consumer.

/// Literal token separating question and options in model output.
pub const OPTION_DELIMITER: &str = "<$$$>";

/// Prefix marking the correct-answer segment of model output.
pub const ANSWER_MARKER: &str = "$ANSWER$";

/// Default upper bound on chunk length, in characters.
pub const DEFAULT_MAX_CHUNK_LEN: usize = 250;

/// Maximum number of key terms extracted from a chunk.
pub const MAX_KEY_TERMS: usize = 5;

/// Tokens shorter than this are never key terms.
pub const MIN_KEY_TERM_LEN: usize = 4;

/// Consecutive unusable chunks tolerated before the orchestrator skips ahead.
pub const MAX_CONSECUTIVE_FAILURES: u32 = 3;

/// Language used when detection fails or a code is unsupported.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Sentinel language code meaning "detect from the text".
pub const AUTO_LANGUAGE: &str = "auto";

/// Common words excluded from key-term extraction.
pub const STOPWORDS: [&str; 14] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];
