//! Extracts and parses a resume file, printing the recovered profile fields.
//!
//! Usage: `cargo run --example parse_resume -- path/to/resume.pdf`

use std::path::PathBuf;

use anyhow::{bail, Result};
use placement_core::ResumeParser;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: parse_resume <resume.pdf|resume.docx>");
    };

    let fields = ResumeParser::new().parse_file(&path)?;

    println!("skills:     {}", fields.skills_display());
    println!("education:  {}", fields.education_display().replace('\n', " | "));
    println!("experience: {}", fields.experience_display().replace('\n', " | "));
    println!("phone:      {}", fields.phone_number.as_deref().unwrap_or("-"));
    Ok(())
}
