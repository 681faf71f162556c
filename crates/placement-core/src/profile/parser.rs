use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::ExtractError;
use crate::lexicon::Lexicon;
use crate::profile::fields::ParsedProfileFields;
use crate::profile::nlp::{NlpEngine, RuleBasedNlp};
use crate::profile::phone;

/// Degree keywords that mark an organization entity as educational even when
/// it names no university or college. Dots are optional after each prefix.
static DEGREE_KEYWORD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:b\.?tech|m\.?tech|bachelor|master|ph\.?d)\b").expect("degree pattern")
});

/// Heuristic resume field parser.
///
/// `parse` never fails: empty or unparseable input produces all-empty fields.
/// Construction decides which NLP engine backs sentence and entity
/// segmentation; if none could be initialized at startup, use [`degraded`]
/// and every parse degrades to an empty result instead of crashing the
/// upload flow.
///
/// [`degraded`]: ResumeParser::degraded
pub struct ResumeParser {
    lexicon: Lexicon,
    engine: Option<Box<dyn NlpEngine>>,
}

impl ResumeParser {
    /// Parser with the default lexicon and the built-in rule-based engine.
    pub fn new() -> Self {
        Self::with_engine(Lexicon::default(), Box::new(RuleBasedNlp))
    }

    /// Parser with a custom lexicon and engine.
    pub fn with_engine(lexicon: Lexicon, engine: Box<dyn NlpEngine>) -> Self {
        Self {
            lexicon,
            engine: Some(engine),
        }
    }

    /// Degraded mode: no NLP engine is available, so every call to `parse`
    /// returns empty fields. Logged at construction so operators can tell a
    /// degraded deployment apart from resumes that genuinely match nothing.
    pub fn degraded(lexicon: Lexicon) -> Self {
        tracing::warn!("no NLP engine available; resume parsing will return empty fields");
        Self {
            lexicon,
            engine: None,
        }
    }

    /// Derives profile fields from extracted resume text. Never fails.
    pub fn parse(&self, text: &str) -> ParsedProfileFields {
        let Some(engine) = self.engine.as_deref() else {
            return ParsedProfileFields::default();
        };

        let mut fields = ParsedProfileFields::default();
        let text_lower = text.to_lowercase();

        for skill in &self.lexicon.skills {
            if text_lower.contains(skill.keyword.as_str()) {
                fields.skills.insert(skill.label.clone());
            }
        }

        for entity in engine.organizations(text) {
            let entity_lower = entity.to_lowercase();
            let is_institution = self
                .lexicon
                .education_markers
                .iter()
                .any(|marker| entity_lower.contains(marker.as_str()));
            if is_institution || DEGREE_KEYWORD.is_match(&entity) {
                fields.education.insert(entity);
            }
        }

        for sentence in engine.sentences(text) {
            let sentence_lower = sentence.to_lowercase();
            if self
                .lexicon
                .experience_markers
                .iter()
                .any(|marker| sentence_lower.contains(marker.as_str()))
            {
                fields.experience.insert(sentence);
            }
        }

        fields.phone_number = phone::find_phone_number(text);
        fields
    }

    /// Extracts a resume file and parses the result in one step — the shape
    /// of the profile-upload call site. Extraction failures propagate so the
    /// caller can leave stored fields unchanged; parsing itself cannot fail.
    pub fn parse_file(&self, path: &Path) -> Result<ParsedProfileFields, ExtractError> {
        let text = crate::extract::extract_file(path)?;
        let fields = self.parse(&text);
        tracing::debug!(
            skills = fields.skills.len(),
            education = fields.education.len(),
            experience = fields.experience.len(),
            phone = fields.phone_number.is_some(),
            "parsed resume {}",
            path.display()
        );
        Ok(fields)
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
