use crate::{
    constants::generation::{ANSWER_MARKER, OPTION_DELIMITER},
    errors::FormatError,
    models::domain::{Provenance, QuestionCandidate},
};

// question + 4 options + answer segment
const MIN_SEGMENTS: usize = 6;

/// Parses raw model output against the delimiter contract.
///
/// Splitting on the delimiter must yield at least six segments: question,
/// four options, and the marker-prefixed answer. Extra trailing segments are
/// ignored. The answer text is stored as emitted and is deliberately not
/// required to equal one of the options; options themselves must be pairwise
/// distinct.
pub fn parse(raw_text: &str) -> Result<QuestionCandidate, FormatError> {
    let raw_text = raw_text.trim();

    if !raw_text.contains(OPTION_DELIMITER) {
        return Err(FormatError::MissingDelimiter);
    }
    if !raw_text.contains(ANSWER_MARKER) {
        return Err(FormatError::MissingAnswerMarker);
    }

    let segments: Vec<&str> = raw_text.split(OPTION_DELIMITER).collect();
    if segments.len() < MIN_SEGMENTS {
        return Err(FormatError::NotEnoughSegments(segments.len()));
    }

    let question = segments[0].trim().to_string();
    let options: Vec<String> = segments[1..5].iter().map(|s| s.trim().to_string()).collect();

    for (i, option) in options.iter().enumerate() {
        if options[..i].contains(option) {
            return Err(FormatError::DuplicateOptions);
        }
    }

    let answer_segment = segments[5].trim();
    let answer = answer_segment
        .strip_prefix(ANSWER_MARKER)
        .unwrap_or(answer_segment)
        .trim()
        .to_string();

    Ok(QuestionCandidate {
        question,
        options,
        answer,
        provenance: Provenance::Generated,
    })
}
