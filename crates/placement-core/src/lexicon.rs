//! Heuristic vocabulary tables.
//!
//! The matching logic in `profile` and `eligibility` is fixed; the vocabulary
//! it scans for lives here, so deployments can extend the tables from a TOML
//! file instead of shipping a code change. Defaults reproduce the keyword
//! lists the portal launched with.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A skill probe: `keyword` is matched case-insensitively as a substring of
/// the resume text, `label` is the canonical form recorded on the profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillKeyword {
    pub keyword: String,
    pub label: String,
}

/// The vocabulary consulted by the resume parser and the eligibility
/// evaluator. Any field left out of a TOML override keeps its default table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Lexicon {
    /// Skill substrings and their display labels.
    #[serde(default = "default_skills")]
    pub skills: Vec<SkillKeyword>,
    /// Substrings that mark an organization entity as educational.
    #[serde(default = "default_education_markers")]
    pub education_markers: Vec<String>,
    /// Substrings that mark a sentence as experience-related.
    #[serde(default = "default_experience_markers")]
    pub experience_markers: Vec<String>,
    /// Branch abbreviations recognized inside eligibility criteria.
    #[serde(default = "default_branch_tokens")]
    pub branch_tokens: Vec<String>,
}

const DEFAULT_SKILLS: &[(&str, &str)] = &[
    ("python", "Python"),
    ("java", "Java"),
    ("django", "Django"),
    ("react", "React"),
    ("sql", "Sql"),
    ("data analysis", "Data analysis"),
    ("machine learning", "Machine learning"),
    ("web development", "Web development"),
    ("javascript", "Javascript"),
    ("html", "Html"),
    ("css", "Css"),
    ("c++", "C++"),
    ("aws", "Aws"),
    ("git", "Git"),
];

fn default_skills() -> Vec<SkillKeyword> {
    DEFAULT_SKILLS
        .iter()
        .map(|&(keyword, label)| SkillKeyword {
            keyword: keyword.to_string(),
            label: label.to_string(),
        })
        .collect()
}

fn default_education_markers() -> Vec<String> {
    vec!["university".to_string(), "college".to_string()]
}

fn default_experience_markers() -> Vec<String> {
    vec![
        "experience".to_string(),
        "worked at".to_string(),
        "software engineer".to_string(),
    ]
}

fn default_branch_tokens() -> Vec<String> {
    ["cse", "it", "ece", "eee", "mech", "civil"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            skills: default_skills(),
            education_markers: default_education_markers(),
            experience_markers: default_experience_markers(),
            branch_tokens: default_branch_tokens(),
        }
    }
}

impl Lexicon {
    /// Parses a TOML override. Unknown keys are rejected; omitted tables keep
    /// their defaults. Probe strings are lower-cased (labels are kept as-is).
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let lexicon: Lexicon = toml::from_str(raw).context("parsing lexicon TOML")?;
        Ok(lexicon.normalized())
    }

    /// Reads a lexicon override from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading lexicon file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }

    fn normalized(mut self) -> Self {
        for skill in &mut self.skills {
            skill.keyword = skill.keyword.to_lowercase();
        }
        for marker in self
            .education_markers
            .iter_mut()
            .chain(self.experience_markers.iter_mut())
            .chain(self.branch_tokens.iter_mut())
        {
            *marker = marker.to_lowercase();
        }
        self
    }
}
