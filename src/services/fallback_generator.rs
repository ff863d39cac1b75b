use std::sync::Arc;

use crate::{
    models::domain::{Provenance, QuestionCandidate, TextChunk},
    services::{
        key_terms::extract_key_terms, prompt_builder::TemplateSelector,
        segmenter::normalize_whitespace,
    },
};

struct FallbackPhrasing {
    /// Question text with a `{term}` placeholder.
    text: &'static str,
    /// Used when the chunk yields no key terms.
    generic: &'static str,
}

static EN_PHRASINGS: &[FallbackPhrasing] = &[
    FallbackPhrasing {
        text: "What is the primary focus of the text regarding {term}?",
        generic: "this topic",
    },
    FallbackPhrasing {
        text: "Which aspect of {term} does the text mainly discuss?",
        generic: "the subject",
    },
    FallbackPhrasing {
        text: "What is the main argument presented about {term}?",
        generic: "this topic",
    },
];

static ES_PHRASINGS: &[FallbackPhrasing] = &[
    FallbackPhrasing {
        text: "¿Cuál es el enfoque principal del texto sobre {term}?",
        generic: "este tema",
    },
    FallbackPhrasing {
        text: "¿Qué aspecto de {term} discute principalmente el texto?",
        generic: "el tema",
    },
    FallbackPhrasing {
        text: "¿Cuál es el argumento principal presentado sobre {term}?",
        generic: "este tema",
    },
];

static FR_PHRASINGS: &[FallbackPhrasing] = &[
    FallbackPhrasing {
        text: "Quel est le point principal du texte concernant {term}?",
        generic: "ce sujet",
    },
    FallbackPhrasing {
        text: "Quel aspect de {term} le texte discute-t-il principalement?",
        generic: "le sujet",
    },
    FallbackPhrasing {
        text: "Quel est l'argument principal présenté sur {term}?",
        generic: "ce sujet",
    },
];

fn phrasings_for(language: &str) -> &'static [FallbackPhrasing] {
    match language {
        "es" => ES_PHRASINGS,
        "fr" => FR_PHRASINGS,
        _ => EN_PHRASINGS,
    }
}

/// Deterministic, model-free question generator. The first option is always
/// the answer, by construction; only the question phrasing is subject to
/// template selection.
pub struct FallbackGenerator {
    selector: Arc<dyn TemplateSelector>,
}

impl FallbackGenerator {
    pub fn new(selector: Arc<dyn TemplateSelector>) -> Self {
        Self { selector }
    }

    /// Returns `None` only for a chunk that is empty after normalization.
    pub fn generate(&self, chunk: &TextChunk, language: &str) -> Option<QuestionCandidate> {
        if chunk.is_empty() {
            return None;
        }

        let clean_text = normalize_whitespace(chunk.text());
        let key_terms = extract_key_terms(&clean_text);
        let main_topic = chunk.main_topic().to_string();

        let options = build_options(&main_topic, &key_terms);

        let phrasings = phrasings_for(language);
        let phrasing = &phrasings[self.selector.select(phrasings.len())];
        let term = key_terms
            .first()
            .map(String::as_str)
            .unwrap_or(phrasing.generic);
        let question = phrasing.text.replace("{term}", term);

        let answer = options[0].clone();
        Some(QuestionCandidate {
            question,
            options,
            answer,
            provenance: Provenance::Fallback,
        })
    }
}

fn build_options(main_topic: &str, key_terms: &[String]) -> Vec<String> {
    if key_terms.len() >= 3 {
        let distractors = vec![
            format!(
                "The relationship between {} and {}",
                key_terms[0], key_terms[1]
            ),
            format!("The impact of {} on {}", key_terms[2], key_terms[0]),
            format!(
                "The development of {} through {}",
                key_terms[1], key_terms[2]
            ),
        ];

        let mut options = vec![main_topic.to_string()];
        options.extend(distractors);

        // Key terms are distinct, so the templated distractors differ from
        // each other; only a collision with the topic itself can occur.
        let distinct = options
            .iter()
            .enumerate()
            .all(|(i, o)| !options[..i].contains(o));
        if distinct {
            return options;
        }
    }

    vec![
        main_topic.to_string(),
        format!("A different aspect of {}", main_topic),
        format!("Historical development of {}", main_topic),
        format!("Future implications of {}", main_topic),
    ]
}
