use once_cell::sync::Lazy;
use regex::Regex;

/// The narrow seam between the field parser and whatever does sentence
/// segmentation and organization recognition.
///
/// The matching rules in [`super::ResumeParser`] only ever see sequences of
/// strings, so they stay testable against a stub engine, and a heavier NLP
/// backend can be swapped in without touching them.
pub trait NlpEngine: Send + Sync {
    /// Splits text into sentences, best-effort.
    fn sentences(&self, text: &str) -> Vec<String>;

    /// Surface forms of organization-like entities, verbatim.
    fn organizations(&self, text: &str) -> Vec<String>;
}

/// Runs of capitalized tokens, optionally glued by a short connector word.
/// Over-generates on purpose; the parser filters candidates afterwards.
static ORG_CANDIDATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][A-Za-z&.'-]*(?:[ \t]+(?:(?:of|and|for|the|in)[ \t]+)?[A-Z][A-Za-z&.'-]*)*")
        .expect("organization candidate pattern")
});

/// The shipped engine: deterministic, rule-driven, no model files to load.
///
/// Sentences end at terminal punctuation or a line break. Organization
/// candidates are consecutive capitalized tokens, which is crude but adequate
/// for the "contains university/college or a degree keyword" filter applied
/// downstream.
pub struct RuleBasedNlp;

impl NlpEngine for RuleBasedNlp {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for (i, c) in text.char_indices() {
            if matches!(c, '.' | '!' | '?' | '\n') {
                let end = i + c.len_utf8();
                let sentence = text[start..end].trim();
                if !sentence.is_empty() {
                    sentences.push(sentence.to_string());
                }
                start = end;
            }
        }
        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        sentences
    }

    fn organizations(&self, text: &str) -> Vec<String> {
        // The token class admits '.' for abbreviations like "B.Tech", so a
        // sentence-final period sticks to the last token; strip it.
        ORG_CANDIDATE
            .find_iter(text)
            .map(|m| m.as_str().trim_end_matches('.').to_string())
            .filter(|candidate| !candidate.is_empty())
            .collect()
    }
}
