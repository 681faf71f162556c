//! Core of a campus placement portal: resume text extraction, best-effort
//! profile-field parsing, and free-text job-eligibility evaluation.
//!
//! The portal's CRUD layer owns persistence, uploads, and screens; this crate
//! owns the three text-processing pieces it calls into:
//!
//! 1. [`extract`] turns an uploaded PDF or DOCX resume into plain text.
//! 2. [`profile::ResumeParser`] derives skills, education, experience
//!    sentences and a phone number from that text.
//! 3. [`eligibility`] decides whether a student may view or apply for a job
//!    whose eligibility criteria are informal free text.
//!
//! Everything is pure and synchronous: callers can fan out across students
//! and jobs without coordination, and identical inputs always produce
//! identical outputs.

pub mod eligibility;
pub mod errors;
pub mod extract;
pub mod lexicon;
pub mod profile;

pub use eligibility::{is_eligible, EligibilityEvaluator, StudentSnapshot};
pub use errors::ExtractError;
pub use extract::{extract_bytes, extract_file, DocumentFormat};
pub use lexicon::Lexicon;
pub use profile::{ParsedProfileFields, ResumeParser};
