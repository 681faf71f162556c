use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Structured fields recovered from one resume parse.
///
/// Empty collections mean "nothing matched", never failure. The record is
/// immutable once returned; whether and how it is merged into the persisted
/// student profile is the caller's decision.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedProfileFields {
    pub skills: BTreeSet<String>,
    pub education: BTreeSet<String>,
    pub experience: BTreeSet<String>,
    pub phone_number: Option<String>,
}

impl ParsedProfileFields {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
            && self.education.is_empty()
            && self.experience.is_empty()
            && self.phone_number.is_none()
    }

    /// Skills joined for display and storage, e.g. `"Python, Sql"`.
    pub fn skills_display(&self) -> String {
        self.skills.iter().cloned().collect::<Vec<_>>().join(", ")
    }

    /// Education mentions, one per line.
    pub fn education_display(&self) -> String {
        self.education.iter().cloned().collect::<Vec<_>>().join("\n")
    }

    /// Experience sentences, one per line.
    pub fn experience_display(&self) -> String {
        self.experience.iter().cloned().collect::<Vec<_>>().join("\n")
    }

    /// Per-field merge against previously stored values: any field this parse
    /// left empty keeps the stored value. Use this at the profile-save call
    /// site so a thin resume never wipes fields a richer one filled in.
    pub fn merge_onto(mut self, stored: Self) -> Self {
        if self.skills.is_empty() {
            self.skills = stored.skills;
        }
        if self.education.is_empty() {
            self.education = stored.education;
        }
        if self.experience.is_empty() {
            self.experience = stored.experience;
        }
        if self.phone_number.is_none() {
            self.phone_number = stored.phone_number;
        }
        self
    }
}
