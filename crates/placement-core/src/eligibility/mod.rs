//! Free-text eligibility evaluation.
//!
//! Job eligibility criteria are informal text written by coordinators
//! ("CSE/IT branches only, min CGPA 7.5, no backlogs"). The evaluator parses
//! the phrases it recognizes and is deliberately permissive about everything
//! else: a clause that cannot be parsed never disqualifies a student.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// The slice of a student profile consulted for eligibility. Read-only;
/// evaluation never mutates or caches anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentSnapshot {
    pub branch: String,
    pub cgpa: Option<f64>,
    /// `None` means the count was never recorded, which skips the backlog
    /// check entirely.
    pub backlogs: Option<u32>,
}

static MIN_CGPA: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"min(?:imum)?\s+cgpa\s+(\d+\.?\d*)").expect("min cgpa pattern"));

static NO_BACKLOGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"no\s+backlogs").expect("no backlogs pattern"));

static MAX_BACKLOGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"max(?:imum)?\s+backlogs\s+(\d+)").expect("max backlogs pattern"));

/// Evaluates criteria text against student snapshots.
///
/// The branch vocabulary comes from the [`Lexicon`]; the CGPA and backlog
/// phrases are fixed. Construction compiles the branch alternation once so
/// evaluation over a whole job list stays cheap.
pub struct EligibilityEvaluator {
    branch_tokens: Option<Regex>,
}

impl EligibilityEvaluator {
    pub fn new(lexicon: &Lexicon) -> Self {
        let branch_tokens = if lexicon.branch_tokens.is_empty() {
            None
        } else {
            let alternation = lexicon
                .branch_tokens
                .iter()
                .map(|token| regex::escape(token))
                .collect::<Vec<_>>()
                .join("|");
            // Whole words only: "it" must not fire inside "opportunity".
            Regex::new(&format!(r"\b(?:{alternation})\b")).ok()
        };
        Self { branch_tokens }
    }

    /// Returns whether the student may view/apply for a job with these
    /// criteria. Deterministic and stateless — the job-list filter and the
    /// apply gate call this with identical arguments and must agree.
    pub fn is_eligible(&self, criteria: &str, snapshot: &StudentSnapshot) -> bool {
        let criteria = criteria.to_lowercase();
        // Conjunction with short-circuit: once a check rejects, nothing
        // downstream can un-reject.
        self.branch_check(&criteria, snapshot)
            && cgpa_check(&criteria, snapshot)
            && backlog_check(&criteria, snapshot)
    }

    fn branch_check(&self, criteria: &str, snapshot: &StudentSnapshot) -> bool {
        if criteria.contains("all branches") || criteria.contains("any branch") {
            return true;
        }
        let Some(tokens) = &self.branch_tokens else {
            return true;
        };
        if !tokens.is_match(criteria) {
            // The criteria text doesn't constrain by branch at all.
            return true;
        }
        criteria.contains(&snapshot.branch.to_lowercase())
    }
}

fn cgpa_check(criteria: &str, snapshot: &StudentSnapshot) -> bool {
    let Some(cgpa) = snapshot.cgpa else {
        return true;
    };
    let Some(caps) = MIN_CGPA.captures(criteria) else {
        return true;
    };
    match caps[1].parse::<f64>() {
        Ok(required) => cgpa >= required,
        Err(_) => true,
    }
}

fn backlog_check(criteria: &str, snapshot: &StudentSnapshot) -> bool {
    let Some(backlogs) = snapshot.backlogs else {
        return true;
    };
    if NO_BACKLOGS.is_match(criteria) {
        return backlogs == 0;
    }
    let Some(caps) = MAX_BACKLOGS.captures(criteria) else {
        return true;
    };
    match caps[1].parse::<u32>() {
        // Counts too large for u32 fall through to "does not disqualify".
        Ok(allowed) => backlogs <= allowed,
        Err(_) => true,
    }
}

static DEFAULT_EVALUATOR: Lazy<EligibilityEvaluator> =
    Lazy::new(|| EligibilityEvaluator::new(&Lexicon::default()));

/// Evaluation with the default branch vocabulary. Both eligibility call sites
/// (filtering the visible job list and gating the apply action) go through
/// this one function, so they cannot disagree for the same inputs.
pub fn is_eligible(criteria: &str, snapshot: &StudentSnapshot) -> bool {
    DEFAULT_EVALUATOR.is_eligible(criteria, snapshot)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(branch: &str, cgpa: Option<f64>, backlogs: Option<u32>) -> StudentSnapshot {
        StudentSnapshot {
            branch: branch.to_string(),
            cgpa,
            backlogs,
        }
    }

    #[test]
    fn test_all_branches_with_met_cgpa_is_eligible() {
        let s = snapshot("mech", Some(8.0), Some(0));
        assert!(is_eligible("Open to all branches, min CGPA 7.5", &s));
    }

    #[test]
    fn test_branch_mismatch_rejects() {
        let s = snapshot("mech", Some(9.0), Some(0));
        assert!(!is_eligible("CSE/IT branches only, no backlogs", &s));
    }

    #[test]
    fn test_backlog_violation_rejects() {
        let s = snapshot("cse", Some(9.0), Some(1));
        assert!(!is_eligible("CSE/IT branches only, no backlogs", &s));
    }

    #[test]
    fn test_cgpa_threshold_is_inclusive() {
        let s = snapshot("cse", Some(7.0), Some(0));
        assert!(is_eligible("Minimum CGPA 7.0", &s));
    }

    #[test]
    fn test_cgpa_below_threshold_rejects() {
        let s = snapshot("cse", Some(6.9), Some(0));
        assert!(!is_eligible("Minimum CGPA 7.0", &s));
    }

    #[test]
    fn test_unparseable_criteria_is_fully_permissive() {
        let criteria = "Great opportunity for freshers!";
        assert!(is_eligible(criteria, &snapshot("mech", Some(5.0), Some(7))));
        assert!(is_eligible(criteria, &snapshot("", None, None)));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let s = snapshot("ece", Some(7.2), Some(2));
        let criteria = "ECE or EEE, min CGPA 7, maximum backlogs 2";
        assert_eq!(is_eligible(criteria, &s), is_eligible(criteria, &s));
        assert!(is_eligible(criteria, &s));
    }

    #[test]
    fn test_any_branch_passes_branch_check_unconditionally() {
        let s = snapshot("mech", None, None);
        assert!(is_eligible("Any branch may apply, cse preferred", &s));
    }

    #[test]
    fn test_branch_token_inside_a_word_does_not_constrain() {
        // "it" occurs inside "opportunity"; as a raw substring scan it would
        // spuriously lock the job to students whose branch appears verbatim.
        let s = snapshot("mech", None, None);
        assert!(is_eligible("An opportunity for motivated students", &s));
    }

    #[test]
    fn test_missing_cgpa_skips_the_cgpa_check() {
        let s = snapshot("cse", None, Some(0));
        assert!(is_eligible("CSE only, minimum cgpa 9.9", &s));
    }

    #[test]
    fn test_missing_backlog_count_skips_the_backlog_check() {
        let s = snapshot("cse", Some(9.0), None);
        assert!(is_eligible("CSE only, no backlogs", &s));
    }

    #[test]
    fn test_max_backlogs_boundary_is_inclusive() {
        let criteria = "max backlogs 2";
        assert!(is_eligible(criteria, &snapshot("cse", None, Some(2))));
        assert!(!is_eligible(criteria, &snapshot("cse", None, Some(3))));
    }

    #[test]
    fn test_no_backlogs_allows_exactly_zero() {
        let criteria = "no backlogs";
        assert!(is_eligible(criteria, &snapshot("cse", None, Some(0))));
        assert!(!is_eligible(criteria, &snapshot("cse", None, Some(1))));
    }

    #[test]
    fn test_rejection_short_circuits_later_checks() {
        // Branch already rejects; the (violated) backlog clause must not be
        // what decides, and the verdict must stay a rejection.
        let s = snapshot("civil", Some(9.9), Some(9));
        assert!(!is_eligible("CSE only, no backlogs", &s));
    }

    #[test]
    fn test_backlog_count_overflow_is_permissive() {
        let s = snapshot("cse", None, Some(3));
        assert!(is_eligible("maximum backlogs 99999999999999999999", &s));
    }

    #[test]
    fn test_custom_branch_vocabulary() {
        let lexicon = Lexicon::from_toml_str("branch_tokens = [\"aiml\"]").unwrap();
        let evaluator = EligibilityEvaluator::new(&lexicon);
        let s = snapshot("mech", None, None);
        // "cse" is not in the custom vocabulary, so this criteria text no
        // longer constrains by branch.
        assert!(evaluator.is_eligible("cse students preferred", &s));
        assert!(!evaluator.is_eligible("aiml students only", &s));
    }

    #[test]
    fn test_empty_branch_vocabulary_never_constrains() {
        let lexicon = Lexicon::from_toml_str("branch_tokens = []").unwrap();
        let evaluator = EligibilityEvaluator::new(&lexicon);
        assert!(evaluator.is_eligible("cse only", &snapshot("mech", None, None)));
    }
}
