use crate::constants::generation::{AUTO_LANGUAGE, DEFAULT_LANGUAGE};

/// Language-detection collaborator. Detection failure is not an error; the
/// caller substitutes the default language.
pub trait LanguageDetector: Send + Sync {
    fn detect(&self, text: &str) -> Option<String>;
}

/// Minimal deterministic detector over the three languages the prompt tables
/// support. Counts hits of high-frequency function words; the clear winner
/// is reported, anything ambiguous is a detection failure.
pub struct MarkerWordDetector;

const EN_MARKERS: &[&str] = &["the", "and", "is", "are", "was", "that", "this", "have"];
const ES_MARKERS: &[&str] = &["el", "los", "las", "una", "que", "es", "son", "y"];
const FR_MARKERS: &[&str] = &["le", "les", "une", "est", "et", "sont", "dans", "pour"];

impl LanguageDetector for MarkerWordDetector {
    fn detect(&self, text: &str) -> Option<String> {
        let lowered = text.to_lowercase();
        let tokens: Vec<&str> = lowered
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
            .collect();

        let count = |markers: &[&str]| tokens.iter().filter(|t| markers.contains(*t)).count();
        let scores = [
            ("en", count(EN_MARKERS)),
            ("es", count(ES_MARKERS)),
            ("fr", count(FR_MARKERS)),
        ];

        let best = scores.iter().max_by_key(|(_, n)| *n)?;
        if best.1 == 0 {
            return None;
        }
        let tied = scores.iter().filter(|(_, n)| *n == best.1).count() > 1;
        if tied {
            return None;
        }

        Some(best.0.to_string())
    }
}

/// Resolves the requested language code before the pipeline runs: the "auto"
/// sentinel goes through the detector, with the default language as the
/// failure substitute. Any other code passes through untouched.
pub fn resolve_language(requested: &str, text: &str, detector: &dyn LanguageDetector) -> String {
    if requested != AUTO_LANGUAGE {
        return requested.to_string();
    }

    match detector.detect(text) {
        Some(code) => code,
        None => {
            log::info!("language detection failed, using {}", DEFAULT_LANGUAGE);
            DEFAULT_LANGUAGE.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_english_text() {
        let detected = MarkerWordDetector.detect("The cats are mammals and this is known.");
        assert_eq!(detected.as_deref(), Some("en"));
    }

    #[test]
    fn detects_spanish_text() {
        let detected = MarkerWordDetector.detect("Los gatos son mamíferos y es sabido que duermen.");
        assert_eq!(detected.as_deref(), Some("es"));
    }

    #[test]
    fn detects_french_text() {
        let detected = MarkerWordDetector.detect("Les chats sont des mammifères et le chien est fidèle.");
        assert_eq!(detected.as_deref(), Some("fr"));
    }

    #[test]
    fn unknown_text_fails_detection() {
        assert!(MarkerWordDetector.detect("zzz qqq www").is_none());
        assert!(MarkerWordDetector.detect("").is_none());
    }

    #[test]
    fn resolve_passes_explicit_codes_through() {
        let resolved = resolve_language("fr", "The cats are mammals.", &MarkerWordDetector);
        assert_eq!(resolved, "fr");
    }

    #[test]
    fn resolve_auto_detects_from_text() {
        let resolved = resolve_language("auto", "Los gatos son mamíferos y es sabido.", &MarkerWordDetector);
        assert_eq!(resolved, "es");
    }

    #[test]
    fn resolve_auto_falls_back_to_default_on_failure() {
        let resolved = resolve_language("auto", "zzz qqq", &MarkerWordDetector);
        assert_eq!(resolved, "en");
    }
}
