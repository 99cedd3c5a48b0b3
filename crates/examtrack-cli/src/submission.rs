//! TOML exam submission parser.
//!
//! Loads one exam's raw answer counts and merit input from a TOML file, and
//! checks it for the mistakes the scoring core deliberately does not reject.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;

use examtrack_core::merit::{category_coefficient, known_categories};
use examtrack_core::{AnswerSheet, Half, MeritInput, Selector, Subject, SubjectAnswerCount};

/// Intermediate TOML structure for submission files.
#[derive(Debug, Deserialize)]
struct TomlSubmission {
    exam: TomlExamHeader,
    #[serde(default)]
    merit: Option<TomlMerit>,
    #[serde(default)]
    first: BTreeMap<String, SubjectAnswerCount>,
    #[serde(default)]
    second: BTreeMap<String, SubjectAnswerCount>,
}

#[derive(Debug, Deserialize)]
struct TomlExamHeader {
    name: String,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    selector: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TomlMerit {
    base_value: f64,
    #[serde(default)]
    category: Option<String>,
}

/// Values used when a submission leaves a field out.
#[derive(Debug, Clone)]
pub struct SubmissionDefaults {
    pub selector: Selector,
    pub category: String,
}

/// One parsed exam submission.
#[derive(Debug, Clone)]
pub struct Submission {
    pub name: String,
    pub date: NaiveDate,
    pub selector: Selector,
    pub merit: MeritInput,
    /// Whether the file had a `[merit]` table.
    pub has_merit: bool,
    pub first: AnswerSheet,
    pub second: AnswerSheet,
}

/// Parse a submission file.
pub fn parse_submission(path: &Path, defaults: &SubmissionDefaults) -> Result<Submission> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read submission file: {}", path.display()))?;

    parse_submission_str(&content, path, defaults)
}

/// Parse a TOML string into a `Submission` (useful for testing).
pub fn parse_submission_str(
    content: &str,
    source_path: &Path,
    defaults: &SubmissionDefaults,
) -> Result<Submission> {
    let parsed: TomlSubmission = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let selector = match parsed.exam.selector {
        Some(s) => s.parse::<Selector>()?,
        None => defaults.selector,
    };

    let date = match parsed.exam.date {
        Some(d) => NaiveDate::parse_from_str(d.trim(), "%Y-%m-%d")
            .with_context(|| format!("invalid exam date '{d}', expected YYYY-MM-DD"))?,
        None => chrono::Local::now().date_naive(),
    };

    let has_merit = parsed.merit.is_some();
    let merit = match parsed.merit {
        Some(m) => MeritInput::new(
            m.base_value,
            m.category.unwrap_or_else(|| defaults.category.clone()),
        ),
        None => MeritInput::new(0.0, defaults.category.clone()),
    };

    Ok(Submission {
        name: parsed.exam.name,
        date,
        selector,
        merit,
        has_merit,
        first: answer_sheet(Half::First, parsed.first)?,
        second: answer_sheet(Half::Second, parsed.second)?,
    })
}

fn answer_sheet(half: Half, raw: BTreeMap<String, SubjectAnswerCount>) -> Result<AnswerSheet> {
    raw.into_iter()
        .map(|(name, counts)| {
            let subject = Subject::lookup(half, &name)
                .with_context(|| format!("in [{half}] answers"))?;
            Ok::<_, anyhow::Error>((subject, counts))
        })
        .collect()
}

/// A warning from submission validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The subject concerned (if applicable).
    pub subject: Option<Subject>,
    /// Warning message.
    pub message: String,
}

impl ValidationWarning {
    fn general(message: impl Into<String>) -> Self {
        Self {
            subject: None,
            message: message.into(),
        }
    }

    fn for_subject(subject: Subject, message: impl Into<String>) -> Self {
        Self {
            subject: Some(subject),
            message: message.into(),
        }
    }
}

/// Validate a submission for common issues.
pub fn validate_submission(submission: &Submission) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();
    let selector = submission.selector;

    if submission.first.total_answered() == 0 && submission.second.total_answered() == 0 {
        warnings.push(ValidationWarning::general(
            "no questions answered in either half",
        ));
    }

    // Answers beyond the question count are clamped before scoring
    for sheet in [&submission.first, &submission.second] {
        for subject in sheet.over_limit() {
            let counts = sheet.get(subject);
            warnings.push(ValidationWarning::for_subject(
                subject,
                format!(
                    "{} answers exceed {} questions and will be clamped",
                    counts.answered(),
                    subject.max_questions()
                ),
            ));
        }
    }

    // Answers for a half the selector skips are ignored
    if selector.is_second_only() && submission.first.total_answered() > 0 {
        warnings.push(ValidationWarning::general(format!(
            "selector {selector} skips the first half; its answers are ignored"
        )));
    }
    if selector.is_first_only() && submission.second.total_answered() > 0 {
        warnings.push(ValidationWarning::general(format!(
            "selector {selector} skips the second half; its answers are ignored"
        )));
    }

    // Second-half subjects outside the selected combination
    if !selector.is_first_only() {
        let scored = selector.second_track_kind().subjects();
        for (subject, counts) in submission.second.iter() {
            if counts.answered() > 0 && !scored.contains(&subject) {
                warnings.push(ValidationWarning::for_subject(
                    subject,
                    format!("not part of the {selector} combination; answers are ignored"),
                ));
            }
        }
    }

    if !submission.has_merit {
        warnings.push(ValidationWarning::general(
            "no [merit] table; merit credit will be 0",
        ));
    } else if !(0.0..=100.0).contains(&submission.merit.base_value) {
        warnings.push(ValidationWarning::general(format!(
            "merit base_value {} is outside 0-100",
            submission.merit.base_value
        )));
    }

    if category_coefficient(&submission.merit.category).is_none() {
        warnings.push(ValidationWarning::general(format!(
            "unknown school category '{}'; the default coefficient applies (known: {})",
            submission.merit.category,
            known_categories().collect::<Vec<_>>().join(", ")
        )));
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[exam]
name = "Mock exam 3"
date = "2026-03-14"
selector = "quantitative"

[merit]
base_value = 85.0
category = "anatolian"

[first]
turkish = { correct = 30, incorrect = 5 }
mathematics = { correct = 25, incorrect = 10 }
science = { correct = 15, incorrect = 3 }
social-sciences = { correct = 18, incorrect = 2 }

[second]
mathematics = { correct = 30, incorrect = 5 }
physics = { correct = 12, incorrect = 2 }
chemistry = { correct = 10, incorrect = 3 }
biology = { correct = 8, incorrect = 5 }
"#;

    fn defaults() -> SubmissionDefaults {
        SubmissionDefaults {
            selector: Selector::Quantitative,
            category: "anatolian".into(),
        }
    }

    fn parse(toml: &str) -> Result<Submission> {
        parse_submission_str(toml, &PathBuf::from("test.toml"), &defaults())
    }

    #[test]
    fn parse_valid_submission() {
        let sub = parse(VALID_TOML).unwrap();
        assert_eq!(sub.name, "Mock exam 3");
        assert_eq!(sub.date, NaiveDate::from_ymd_opt(2026, 3, 14).unwrap());
        assert_eq!(sub.selector, Selector::Quantitative);
        assert_eq!(
            sub.first.get(Subject::BasicMathematics),
            SubjectAnswerCount::new(25, 10)
        );
        assert_eq!(
            sub.second.get(Subject::Mathematics),
            SubjectAnswerCount::new(30, 5)
        );
        assert_eq!(sub.merit.base_value, 85.0);
        assert!(validate_submission(&sub).is_empty());
    }

    #[test]
    fn parse_missing_optional_fields() {
        let sub = parse(
            r#"
[exam]
name = "Quick"

[first]
turkish = { correct = 10 }
"#,
        )
        .unwrap();
        assert_eq!(sub.selector, Selector::Quantitative);
        assert_eq!(sub.first.get(Subject::Turkish), SubjectAnswerCount::new(10, 0));
        assert!(!sub.has_merit);
        assert_eq!(sub.merit.category, "anatolian");
        assert!(sub.second.is_empty());
    }

    #[test]
    fn legacy_selector_accepted() {
        let sub = parse(
            r#"
[exam]
name = "Legacy"
selector = "ayt_sozel"
"#,
        )
        .unwrap();
        assert_eq!(sub.selector, Selector::VerbalSecondOnly);
    }

    #[test]
    fn unknown_selector_is_error() {
        let err = parse(
            r#"
[exam]
name = "Bad"
selector = "medicine"
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown selector: medicine"));
    }

    #[test]
    fn subject_from_wrong_half_is_error() {
        let err = parse(
            r#"
[exam]
name = "Bad"

[first]
physics = { correct = 3, incorrect = 0 }
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("unknown subject"));
    }

    #[test]
    fn invalid_date_is_error() {
        let err = parse(
            r#"
[exam]
name = "Bad"
date = "14/03/2026"
"#,
        )
        .unwrap_err();
        assert!(format!("{err:#}").contains("invalid exam date"));
    }

    #[test]
    fn parse_malformed_toml() {
        assert!(parse("this is not [valid toml }{").is_err());
    }

    #[test]
    fn validate_empty_submission() {
        let sub = parse(
            r#"
[exam]
name = "Empty"

[merit]
base_value = 70.0
"#,
        )
        .unwrap();
        let warnings = validate_submission(&sub);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no questions answered")));
    }

    #[test]
    fn validate_over_limit_and_ignored_subjects() {
        let sub = parse(
            r#"
[exam]
name = "Sloppy"
selector = "balanced"

[merit]
base_value = 70.0
category = "boarding"

[first]
science = { correct = 18, incorrect = 5 }

[second]
mathematics = { correct = 20, incorrect = 2 }
physics = { correct = 5, incorrect = 1 }
"#,
        )
        .unwrap();
        let warnings = validate_submission(&sub);
        assert!(warnings
            .iter()
            .any(|w| w.subject == Some(Subject::Science) && w.message.contains("clamped")));
        assert!(warnings
            .iter()
            .any(|w| w.subject == Some(Subject::Physics) && w.message.contains("ignored")));
        assert!(warnings.iter().any(|w| w.message.contains("unknown school category")
            && w.message.contains("known: anatolian, vocational")));
    }

    #[test]
    fn validate_skipped_half_with_answers() {
        let sub = parse(
            r#"
[exam]
name = "First only"
selector = "first-only"

[merit]
base_value = 70.0

[first]
turkish = { correct = 20, incorrect = 2 }

[second]
mathematics = { correct = 20, incorrect = 2 }
"#,
        )
        .unwrap();
        let warnings = validate_submission(&sub);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("skips the second half")));
    }

    #[test]
    fn validate_nan_base_value() {
        let sub = parse(
            r#"
[exam]
name = "Typo"

[merit]
base_value = nan

[first]
turkish = { correct = 20, incorrect = 2 }
"#,
        )
        .unwrap();
        assert!(sub.merit.base_value.is_nan());
        let warnings = validate_submission(&sub);
        assert!(warnings.iter().any(|w| w.message.contains("outside 0-100")));
    }
}
