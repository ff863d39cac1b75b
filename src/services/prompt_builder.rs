use std::sync::Arc;

use rand::Rng;

use crate::{
    constants::generation::{ANSWER_MARKER, OPTION_DELIMITER},
    models::domain::TextChunk,
    services::{key_terms::extract_key_terms, segmenter::normalize_whitespace},
};

/// Source of template indices. Injectable so tests can pin the choice that is
/// otherwise pseudo-random in production.
pub trait TemplateSelector: Send + Sync {
    /// Returns an index in `0..upper`. `upper` is always at least 1.
    fn select(&self, upper: usize) -> usize;
}

pub struct RandomTemplateSelector;

impl TemplateSelector for RandomTemplateSelector {
    fn select(&self, upper: usize) -> usize {
        rand::thread_rng().gen_range(0..upper)
    }
}

/// Template selector that always picks the same index, clamped to the table
/// size. Used by tests to make template choice reproducible.
pub struct FixedTemplateSelector(pub usize);

impl TemplateSelector for FixedTemplateSelector {
    fn select(&self, upper: usize) -> usize {
        self.0.min(upper - 1)
    }
}

struct QuestionTypeTemplate {
    lead: &'static str,
    context: ContextHint,
}

enum ContextHint {
    /// Prefix completed with the first two key terms joined by the language's
    /// conjunction.
    TermPair(&'static str),
    /// Prefix completed with all key terms joined by ", ".
    TermList(&'static str),
    Fixed(&'static str),
}

struct LanguageTable {
    templates: &'static [QuestionTypeTemplate],
    pair_conjunction: &'static str,
    generic_topic: &'static str,
    /// Instruction scaffold with `{text}`, `{context}`, `{lead}`, `{format}`
    /// placeholders.
    instruction: &'static str,
}

static EN_TABLE: LanguageTable = LanguageTable {
    templates: &[
        QuestionTypeTemplate {
            lead: "Based on the text, what is the main purpose of",
            context: ContextHint::TermPair("Consider the relationship between "),
        },
        QuestionTypeTemplate {
            lead: "Which of the following best explains how",
            context: ContextHint::TermList("Focus on the key concepts: "),
        },
        QuestionTypeTemplate {
            lead: "What is the primary relationship between",
            context: ContextHint::Fixed("Analyze the connection between different elements"),
        },
        QuestionTypeTemplate {
            lead: "How does the text characterize",
            context: ContextHint::Fixed("Consider the description and analysis provided"),
        },
    ],
    pair_conjunction: " and ",
    generic_topic: "this topic",
    instruction: "Generate a multiple choice question about this text.\n\n\
Text: \"{text}\"\n\n\
CONTEXT: {context}\n\
QUESTION TYPE: {lead}\n\n\
IMPORTANT: Follow this EXACT format:\n\
{format}\n\n\
Requirements:\n\
1. Question should be specific and based on the text content\n\
2. Options must be distinct and realistic\n\
3. Make options similar in length and style\n\
4. Correct answer must be clearly supported by the text\n\
5. Avoid obvious incorrect options",
};

static ES_TABLE: LanguageTable = LanguageTable {
    templates: &[
        QuestionTypeTemplate {
            lead: "Según el texto, ¿cuál es el propósito principal de",
            context: ContextHint::TermPair("Considera la relación entre "),
        },
        QuestionTypeTemplate {
            lead: "¿Cuál de las siguientes opciones explica mejor cómo",
            context: ContextHint::TermList("Enfócate en los conceptos clave: "),
        },
    ],
    pair_conjunction: " y ",
    generic_topic: "este tema",
    instruction: "Genera una pregunta de opción múltiple sobre este texto.\n\n\
Texto: \"{text}\"\n\n\
CONTEXTO: {context}\n\
TIPO DE PREGUNTA: {lead}\n\n\
IMPORTANTE: Sigue este formato EXACTO:\n\
{format}",
};

static FR_TABLE: LanguageTable = LanguageTable {
    templates: &[
        QuestionTypeTemplate {
            lead: "D'après le texte, quel est l'objectif principal de",
            context: ContextHint::TermPair("Considérez la relation entre "),
        },
        QuestionTypeTemplate {
            lead: "Laquelle des options suivantes explique le mieux comment",
            context: ContextHint::TermList("Concentrez-vous sur les concepts clés: "),
        },
    ],
    pair_conjunction: " et ",
    generic_topic: "ce sujet",
    instruction: "Créez une question à choix multiples à partir de ce texte.\n\n\
Texte: \"{text}\"\n\n\
CONTEXTE: {context}\n\
TYPE DE QUESTION: {lead}\n\n\
IMPORTANT: Suivez ce format EXACT:\n\
{format}",
};

fn table_for(language: &str) -> &'static LanguageTable {
    match language {
        "es" => &ES_TABLE,
        "fr" => &FR_TABLE,
        _ => &EN_TABLE,
    }
}

fn required_format() -> String {
    format!(
        "[Your complete question]{d}[First option - most relevant]{d}\
[Second option - partially relevant]{d}[Third option - related but incorrect]{d}\
[Fourth option - clearly incorrect]{d}{m}[Correct option]",
        d = OPTION_DELIMITER,
        m = ANSWER_MARKER,
    )
}

/// Builds language-specific model prompts for a chunk. Building never fails;
/// a chunk without usable key terms falls back to generic phrasing.
pub struct PromptBuilder {
    selector: Arc<dyn TemplateSelector>,
}

impl PromptBuilder {
    pub fn new(selector: Arc<dyn TemplateSelector>) -> Self {
        Self { selector }
    }

    pub fn build_prompt(&self, chunk: &TextChunk, language: &str) -> String {
        let table = table_for(language);
        let clean_text = normalize_whitespace(chunk.text());
        let key_terms = extract_key_terms(&clean_text);

        let template = &table.templates[self.selector.select(table.templates.len())];
        let context = match &template.context {
            ContextHint::TermPair(prefix) => {
                let pair = match key_terms.len() {
                    0 => table.generic_topic.to_string(),
                    1 => key_terms[0].clone(),
                    _ => key_terms[..2].join(table.pair_conjunction),
                };
                format!("{}{}", prefix, pair)
            }
            ContextHint::TermList(prefix) => {
                let list = if key_terms.is_empty() {
                    table.generic_topic.to_string()
                } else {
                    key_terms.join(", ")
                };
                format!("{}{}", prefix, list)
            }
            ContextHint::Fixed(text) => text.to_string(),
        };

        table
            .instruction
            .replace("{text}", &clean_text)
            .replace("{context}", &context)
            .replace("{lead}", template.lead)
            .replace("{format}", &required_format())
    }
}
