//! The `examtrack validate` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::submission::{self, SubmissionDefaults};

pub fn execute(submission_path: PathBuf, config: Option<PathBuf>) -> Result<()> {
    let config = super::load_config(config.as_deref())?;
    let defaults = SubmissionDefaults {
        selector: config.default_selector,
        category: config.default_category,
    };
    let submission = submission::parse_submission(&submission_path, &defaults)?;

    println!(
        "Submission: {} ({}, {})",
        submission.name, submission.date, submission.selector
    );

    let warnings = submission::validate_submission(&submission);
    for w in &warnings {
        let prefix = w
            .subject
            .map(|s| format!("  [{s}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Submission valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
