use serde::{Deserialize, Serialize};

/// A bounded, contiguous slice of normalized source text. Chunks are created
/// once per request by the segmenter and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct TextChunk {
    text: String,
}

impl TextChunk {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Text before the first `.`, trimmed. A chunk without a sentence
    /// terminator is its own main topic.
    pub fn main_topic(&self) -> &str {
        self.text
            .split('.')
            .next()
            .unwrap_or(&self.text)
            .trim()
    }
}

impl std::fmt::Display for TextChunk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}
