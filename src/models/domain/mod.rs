pub mod chunk;
pub mod question;

pub use chunk::TextChunk;
pub use question::{GenerationResult, Provenance, Question, QuestionCandidate};
