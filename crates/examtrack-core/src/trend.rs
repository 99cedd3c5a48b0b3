//! Trend direction and subject strength analysis.
//!
//! Works on a history of evaluation bundles ordered newest-first. The caller
//! is responsible for that ordering; nothing here sorts.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::engine::EvaluationBundle;
use crate::model::Subject;
use crate::track::TrackKind;

/// Composite change, in points, beyond which the trend is not stable.
pub const TREND_THRESHOLD: f64 = 10.0;

/// Subjects scoring below this share of their questions are weak.
pub const WEAK_BELOW_PERCENT: f64 = 40.0;

/// Subjects scoring above this share of their questions are strong.
pub const STRONG_ABOVE_PERCENT: f64 = 70.0;

/// Direction of the composite score between the two newest results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Improving,
    Declining,
    Stable,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Improving => write!(f, "improving"),
            Direction::Declining => write!(f, "declining"),
            Direction::Stable => write!(f, "stable"),
        }
    }
}

/// Trend and strength analysis of the newest result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendReport {
    pub direction: Direction,
    /// Composite change from the previous result, if there is one.
    pub composite_change: Option<f64>,
    /// Net of each first-track subject as a percentage of its questions.
    pub subject_percentages: BTreeMap<Subject, f64>,
    pub strong_subjects: BTreeSet<Subject>,
    pub weak_subjects: BTreeSet<Subject>,
    /// Weak-subject advice first, then strong-subject advice.
    pub recommendations: Vec<String>,
}

/// Classify a composite change.
pub fn classify_change(change: f64) -> Direction {
    if change > TREND_THRESHOLD {
        Direction::Improving
    } else if change < -TREND_THRESHOLD {
        Direction::Declining
    } else {
        Direction::Stable
    }
}

/// Analyze a newest-first history. Returns `None` for an empty history.
///
/// Direction compares only the two newest composites; the subject breakdown
/// looks only at the newest first-track result.
pub fn analyze(history: &[EvaluationBundle]) -> Option<TrendReport> {
    let latest = history.first()?;

    let composite_change = history
        .get(1)
        .map(|previous| latest.composite - previous.composite);
    let direction = composite_change.map_or(Direction::Stable, classify_change);

    let subject_percentages: BTreeMap<Subject, f64> = TrackKind::Foundational
        .subjects()
        .iter()
        .map(|&subject| {
            let net = latest.first_track.net(subject);
            (subject, net * 100.0 / subject.max_questions() as f64)
        })
        .collect();

    let weak_subjects: BTreeSet<Subject> = subject_percentages
        .iter()
        .filter(|&(_, &pct)| pct < WEAK_BELOW_PERCENT)
        .map(|(&subject, _)| subject)
        .collect();
    let strong_subjects: BTreeSet<Subject> = subject_percentages
        .iter()
        .filter(|&(_, &pct)| pct > STRONG_ABOVE_PERCENT)
        .map(|(&subject, _)| subject)
        .collect();

    let mut recommendations = Vec::new();
    if !weak_subjects.is_empty() {
        recommendations.push(format!(
            "Focus more of your study time on {}.",
            join_names(&weak_subjects)
        ));
    }
    if !strong_subjects.is_empty() {
        recommendations.push(format!(
            "Keep up your performance in {}.",
            join_names(&strong_subjects)
        ));
    }

    Some(TrendReport {
        direction,
        composite_change,
        subject_percentages,
        strong_subjects,
        weak_subjects,
        recommendations,
    })
}

fn join_names(subjects: &BTreeSet<Subject>) -> String {
    subjects
        .iter()
        .map(|s| s.display_name())
        .collect::<Vec<_>>()
        .join(", ")
}
