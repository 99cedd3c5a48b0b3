//! Full evaluation of one exam submission.
//!
//! Runs the track composer for each half that was administered, computes
//! merit credit, and combines everything into a composite score.

use serde::{Deserialize, Serialize};

use crate::composite::composite_score;
use crate::merit::{compute_merit_credit, MeritCredit};
use crate::model::AnswerSheet;
use crate::scoring::{compose_track, TrackResult};
use crate::track::Selector;

/// Diploma grade and school category used for merit credit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeritInput {
    /// Diploma grade on a 0–100 scale.
    pub base_value: f64,
    /// School category, e.g. "anatolian" or "vocational".
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    "anatolian".to_string()
}

impl MeritInput {
    pub fn new(base_value: f64, category: impl Into<String>) -> Self {
        Self {
            base_value,
            category: category.into(),
        }
    }
}

/// Everything computed for one exam submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationBundle {
    /// Result of the first half (neutral if not administered).
    pub first_track: TrackResult,
    /// Result of the second half (neutral if not administered).
    pub second_track: TrackResult,
    /// Merit credit added to the composite.
    pub merit_credit: MeritCredit,
    /// Final composite placement score.
    pub composite: f64,
    /// Selector the submission was evaluated under.
    pub selector: Selector,
}

/// Evaluate one exam submission.
///
/// A half that the selector marks as not administered is reported as the
/// neutral track result, and its floor raw score still takes part in the
/// composite weighting.
pub fn evaluate(
    first_answers: &AnswerSheet,
    second_answers: &AnswerSheet,
    merit: &MeritInput,
    selector: Selector,
) -> EvaluationBundle {
    let first_track = if selector.is_second_only() {
        TrackResult::neutral()
    } else {
        compose_track(first_answers, selector.first_track_kind())
    };

    let second_track = if selector.is_first_only() {
        TrackResult::neutral()
    } else {
        compose_track(second_answers, selector.second_track_kind())
    };

    let merit_credit = compute_merit_credit(merit.base_value, &merit.category);

    let composite = composite_score(
        first_track.raw_score,
        second_track.raw_score,
        merit_credit.value,
        selector,
    );

    tracing::debug!(
        %selector,
        first_raw = first_track.raw_score,
        second_raw = second_track.raw_score,
        merit = merit_credit.value,
        composite,
        "evaluated submission"
    );

    EvaluationBundle {
        first_track,
        second_track,
        merit_credit,
        composite,
        selector,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subject;
    use crate::track::TrackKind;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    fn first_sheet() -> AnswerSheet {
        AnswerSheet::new()
            .with(Subject::Turkish, 30, 5)
            .with(Subject::BasicMathematics, 25, 10)
            .with(Subject::Science, 15, 3)
            .with(Subject::SocialSciences, 18, 2)
    }

    fn second_sheet() -> AnswerSheet {
        AnswerSheet::new()
            .with(Subject::Mathematics, 30, 5)
            .with(Subject::Physics, 12, 2)
            .with(Subject::Chemistry, 10, 3)
            .with(Subject::Biology, 8, 5)
    }

    #[test]
    fn full_quantitative_evaluation() {
        let bundle = evaluate(
            &first_sheet(),
            &second_sheet(),
            &MeritInput::new(85.0, "anatolian"),
            Selector::Quantitative,
        );

        assert!(approx(bundle.first_track.total_net, 83.0));
        assert!(approx(bundle.first_track.raw_score, 432.0));
        // 28.75 + 11.5 + 9.25 + 6.75
        assert!(approx(bundle.second_track.total_net, 56.25));
        assert!(approx(bundle.second_track.raw_score, 325.0));
        assert!(approx(bundle.merit_credit.value, 51.0));
        // 432 * 0.4 + 325 * 0.6 + 51
        assert!(approx(bundle.composite, 418.8));
        assert_eq!(bundle.selector, Selector::Quantitative);
    }

    #[test]
    fn second_only_skips_first_track() {
        let bundle = evaluate(
            &first_sheet(),
            &second_sheet(),
            &MeritInput::new(85.0, "anatolian"),
            Selector::QuantitativeSecondOnly,
        );
        assert!(bundle.first_track.is_neutral());
        assert_eq!(bundle.first_track.raw_score, 100.0);
        assert_eq!(bundle.second_track.kind, TrackKind::Quantitative);
        // Neutral first track still contributes 100 * 0.4.
        assert!(approx(bundle.composite, 40.0 + 325.0 * 0.6 + 51.0));
        assert_eq!(bundle.selector, Selector::QuantitativeSecondOnly);
    }

    #[test]
    fn first_only_skips_second_track() {
        let bundle = evaluate(
            &first_sheet(),
            &second_sheet(),
            &MeritInput::new(85.0, "anatolian"),
            Selector::FirstOnly,
        );
        assert_eq!(bundle.first_track.kind, TrackKind::Foundational);
        assert!(bundle.second_track.is_neutral());
        assert!(approx(bundle.composite, 432.0 * 0.4 + 60.0 + 51.0));
    }

    #[test]
    fn balanced_ignores_science_answers() {
        let second = second_sheet().with(Subject::Literature, 20, 0);
        let bundle = evaluate(
            &first_sheet(),
            &second,
            &MeritInput::new(0.0, "anatolian"),
            Selector::Balanced,
        );
        assert_eq!(bundle.second_track.kind, TrackKind::Balanced);
        assert!(approx(bundle.second_track.total_net, 28.75 + 20.0));
        assert_eq!(bundle.second_track.net(Subject::Physics), 0.0);
    }

    #[test]
    fn language_selector_scores_foreign_language() {
        let second = AnswerSheet::new().with(Subject::ForeignLanguage, 60, 8);
        let bundle = evaluate(
            &first_sheet(),
            &second,
            &MeritInput::new(90.0, "anatolian"),
            Selector::Language,
        );
        assert!(approx(bundle.second_track.total_net, 58.0));
        assert!(approx(bundle.second_track.raw_score, 332.0));
        assert!(approx(bundle.composite, 432.0 * 0.5 + 332.0 * 0.5 + 54.0));
    }

    #[test]
    fn bundle_serializes_to_plain_json() {
        let bundle = evaluate(
            &first_sheet(),
            &second_sheet(),
            &MeritInput::new(85.0, "anatolian"),
            Selector::VerbalSecondOnly,
        );
        let value = serde_json::to_value(&bundle).unwrap();
        assert_eq!(value["selector"], "verbal-second-only");
        assert_eq!(value["first_track"]["kind"], "skipped");
        assert!(approx(value["merit_credit"].as_f64().unwrap(), 51.0));
        let back: EvaluationBundle = serde_json::from_value(value).unwrap();
        assert_eq!(back.selector, bundle.selector);
        assert!(approx(back.composite, bundle.composite));
    }

    #[test]
    fn composite_floor_holds_for_empty_submission() {
        for selector in Selector::ALL {
            let bundle = evaluate(
                &AnswerSheet::new(),
                &AnswerSheet::new(),
                &MeritInput::new(0.0, "anatolian"),
                selector,
            );
            assert!(bundle.composite >= 100.0);
        }
    }
}
