use once_cell::sync::Lazy;
use regex::Regex;

/// Indian mobile numbers: optional +91 prefix, ten digits starting 6-9.
static INDIA_MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:\+91[\s-]?)?[6789]\d{9}\b").expect("india mobile pattern"));

/// Fallback international/local shape: optional country code, 3-3-4 groups
/// with optional separators.
static GENERIC_PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\+?\d{1,3}[-. ]?)?\(?\d{3}\)?[-. ]?\d{3}[-. ]?\d{4}\b")
        .expect("generic phone pattern")
});

/// First Indian-mobile match in the text, else first generic match, else
/// `None`. Whichever pattern fires, its first match wins.
pub fn find_phone_number(text: &str) -> Option<String> {
    INDIA_MOBILE
        .find(text)
        .or_else(|| GENERIC_PHONE.find(text))
        .map(|m| m.as_str().to_string())
}
