//! Net and raw score computation.
//!
//! A subject's net is its correct count minus a quarter point per incorrect
//! answer, floored at zero. Nets sum into a section, and a track's raw score
//! maps the section net onto the 100-based scale.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::{AnswerSheet, Subject};
use crate::track::TrackKind;

/// Incorrect answers that cancel one correct answer.
pub const INCORRECT_PER_PENALTY: f64 = 4.0;

/// Raw score points awarded per net.
pub const POINTS_PER_NET: f64 = 4.0;

/// Lowest raw score on the scale; also the score of a track not taken.
pub const RAW_SCORE_FLOOR: f64 = 100.0;

/// Net for one subject: `max(0, correct - incorrect / 4)`.
pub fn score_subject(correct: f64, incorrect: f64) -> f64 {
    (correct - incorrect / INCORRECT_PER_PENALTY).max(0.0)
}

/// Raw score for a section net: `max(100, net * 4 + 100)`.
pub fn raw_score(total_net: f64) -> f64 {
    (total_net * POINTS_PER_NET + RAW_SCORE_FLOOR).max(RAW_SCORE_FLOOR)
}

/// Nets for a group of subjects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionResult {
    /// Sum of the subject nets.
    pub net: f64,
    /// Net per subject.
    pub subjects: BTreeMap<Subject, f64>,
}

/// Score each of `subjects` on `sheet` and sum the nets.
pub fn score_section(sheet: &AnswerSheet, subjects: &[Subject]) -> SectionResult {
    let subjects: BTreeMap<Subject, f64> = subjects
        .iter()
        .map(|&subject| {
            let counts = sheet.get(subject);
            (
                subject,
                score_subject(counts.correct as f64, counts.incorrect as f64),
            )
        })
        .collect();
    let net = subjects.values().sum();
    SectionResult { net, subjects }
}

/// Scores for one half of the exam.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackResult {
    /// Subject combination the track was scored over.
    pub kind: TrackKind,
    /// Net per scored subject. Empty for a track that was not taken.
    pub per_subject_nets: BTreeMap<Subject, f64>,
    /// Sum of the subject nets.
    pub total_net: f64,
    /// Raw score on the 100-based scale.
    pub raw_score: f64,
}

impl TrackResult {
    /// The floor result reported for a track that was not administered.
    pub fn neutral() -> Self {
        Self {
            kind: TrackKind::Skipped,
            per_subject_nets: BTreeMap::new(),
            total_net: 0.0,
            raw_score: RAW_SCORE_FLOOR,
        }
    }

    pub fn is_neutral(&self) -> bool {
        self.kind == TrackKind::Skipped
    }

    /// Net for `subject`, zero when the track did not score it.
    pub fn net(&self, subject: Subject) -> f64 {
        self.per_subject_nets.get(&subject).copied().unwrap_or(0.0)
    }
}

/// Score `answers` over the subject list of `kind`.
///
/// Answers for subjects outside the track are ignored. A track kind with no
/// subjects yields [`TrackResult::neutral`] without looking at the answers.
pub fn compose_track(answers: &AnswerSheet, kind: TrackKind) -> TrackResult {
    let subjects = kind.subjects();
    if subjects.is_empty() {
        return TrackResult::neutral();
    }

    let section = score_section(answers, subjects);
    let result = TrackResult {
        kind,
        total_net: section.net,
        raw_score: raw_score(section.net),
        per_subject_nets: section.subjects,
    };
    tracing::trace!(
        track = %kind,
        total_net = result.total_net,
        raw_score = result.raw_score,
        "composed track"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn subject_net_subtracts_quarter_per_incorrect() {
        assert!(approx(score_subject(30.0, 5.0), 28.75));
        assert!(approx(score_subject(25.0, 10.0), 22.5));
    }

    #[test]
    fn subject_net_never_negative() {
        assert_eq!(score_subject(0.0, 40.0), 0.0);
        assert_eq!(score_subject(2.0, 12.0), 0.0);
        for correct in 0..=40u32 {
            for incorrect in 0..=(40 - correct) {
                assert!(score_subject(correct as f64, incorrect as f64) >= 0.0);
            }
        }
    }

    #[test]
    fn raw_score_maps_net_to_scale() {
        assert!(approx(raw_score(40.0), 260.0));
        assert!(approx(raw_score(0.0), 100.0));
        assert!(approx(raw_score(120.0), 580.0));
    }

    #[test]
    fn section_sums_listed_subjects_only() {
        let sheet = AnswerSheet::new()
            .with(Subject::Turkish, 30, 5)
            .with(Subject::Physics, 14, 0);
        let section = score_section(&sheet, &[Subject::Turkish, Subject::Science]);
        assert!(approx(section.net, 28.75));
        assert_eq!(section.subjects.len(), 2);
        assert_eq!(section.subjects[&Subject::Science], 0.0);
        assert!(!section.subjects.contains_key(&Subject::Physics));
    }

    #[test]
    fn foundational_track_from_sample_sheet() {
        let sheet = AnswerSheet::new()
            .with(Subject::Turkish, 30, 5)
            .with(Subject::BasicMathematics, 25, 10)
            .with(Subject::Science, 15, 3)
            .with(Subject::SocialSciences, 18, 2);
        let track = compose_track(&sheet, TrackKind::Foundational);
        // 28.75 + 22.5 + 14.25 + 17.5
        assert!(approx(track.total_net, 83.0));
        assert!(approx(track.raw_score, 432.0));
        assert!(approx(track.net(Subject::Science), 14.25));
    }

    #[test]
    fn quantitative_track_with_forty_net() {
        let sheet = AnswerSheet::new()
            .with(Subject::Mathematics, 20, 0)
            .with(Subject::Physics, 8, 0)
            .with(Subject::Chemistry, 6, 0)
            .with(Subject::Biology, 6, 0);
        let track = compose_track(&sheet, TrackKind::Quantitative);
        assert!(approx(track.total_net, 40.0));
        assert!(approx(track.raw_score, 260.0));
    }

    #[test]
    fn verbal_track_scores_seven_subjects() {
        let sheet = AnswerSheet::new()
            .with(Subject::Literature, 20, 4)
            .with(Subject::Religion, 6, 0)
            .with(Subject::Mathematics, 40, 0);
        let track = compose_track(&sheet, TrackKind::Verbal);
        assert_eq!(track.per_subject_nets.len(), 7);
        assert!(approx(track.total_net, 25.0));
        assert_eq!(track.net(Subject::Mathematics), 0.0);
    }

    #[test]
    fn skipped_track_is_neutral_regardless_of_answers() {
        let sheet = AnswerSheet::new()
            .with(Subject::Turkish, 40, 0)
            .with(Subject::Mathematics, 40, 0);
        let track = compose_track(&sheet, TrackKind::Skipped);
        assert_eq!(track, TrackResult::neutral());
        assert_eq!(track.total_net, 0.0);
        assert_eq!(track.raw_score, 100.0);
        assert!(track.is_neutral());
    }

    #[test]
    fn raw_score_floor_holds_for_empty_sheet() {
        let sheet = AnswerSheet::new();
        for kind in [
            TrackKind::Foundational,
            TrackKind::Quantitative,
            TrackKind::Balanced,
            TrackKind::Verbal,
            TrackKind::Language,
        ] {
            assert!(compose_track(&sheet, kind).raw_score >= RAW_SCORE_FLOOR);
        }
    }
}
