//! The `examtrack evaluate` command.

use std::path::PathBuf;

use anyhow::Result;

use crate::history::{ExamHistory, ExamRecord};
use crate::render;
use crate::submission::{self, SubmissionDefaults};

pub fn execute(
    submission_path: PathBuf,
    format: Option<String>,
    record: bool,
    history: Option<PathBuf>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config.as_deref())?;
    let format = super::output_format(format, &config)?;

    let defaults = SubmissionDefaults {
        selector: config.default_selector,
        category: config.default_category.clone(),
    };
    let submission = submission::parse_submission(&submission_path, &defaults)?;

    if submission.first.total_answered() == 0 && submission.second.total_answered() == 0 {
        anyhow::bail!(
            "submission {} has no answered questions",
            submission_path.display()
        );
    }

    if !submission.merit.base_value.is_finite() {
        anyhow::bail!(
            "merit base_value in {} must be a finite number",
            submission_path.display()
        );
    }

    for sheet in [&submission.first, &submission.second] {
        for subject in sheet.over_limit() {
            tracing::warn!(
                "{subject}: {} answers exceed {} questions, clamping",
                sheet.get(subject).answered(),
                subject.max_questions()
            );
        }
    }

    let bundle = examtrack_core::evaluate(
        &submission.first.clamped(),
        &submission.second.clamped(),
        &submission.merit,
        submission.selector,
    );

    println!("{}", render::render_evaluation(&submission.name, &bundle, format)?);

    if record {
        let path = super::history_path(history, &config);
        let mut history = ExamHistory::load_or_default(&path)?;
        let record = ExamRecord::new(submission.name, submission.date, bundle);
        let id = record.id;
        history.push(record);
        history.save_json(&path)?;
        tracing::info!("history now holds {} exam(s)", history.records.len());
        eprintln!("Recorded {id} to {}", path.display());
    }

    Ok(())
}
