//! Composite placement score.

use serde::{Deserialize, Serialize};

use crate::scoring::RAW_SCORE_FLOOR;
use crate::track::Selector;

/// Weights applied to the first and second track raw scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub first: f64,
    pub second: f64,
}

/// Weights used by every selector without its own entry.
pub const DEFAULT_WEIGHTS: Weights = Weights {
    first: 0.4,
    second: 0.6,
};

const LANGUAGE_WEIGHTS: Weights = Weights {
    first: 0.5,
    second: 0.5,
};

/// Weighting scheme for a selector.
///
/// Only the plain selectors have table entries; the second-only and
/// first-only selectors use [`DEFAULT_WEIGHTS`].
pub fn weights_for(selector: Selector) -> Weights {
    match selector {
        Selector::Quantitative | Selector::Balanced | Selector::Verbal => DEFAULT_WEIGHTS,
        Selector::Language => LANGUAGE_WEIGHTS,
        Selector::QuantitativeSecondOnly
        | Selector::BalancedSecondOnly
        | Selector::VerbalSecondOnly
        | Selector::FirstOnly => DEFAULT_WEIGHTS,
    }
}

/// `max(100, first_raw * w1 + second_raw * w2 + merit_credit)`.
///
/// The floor is the minimum composite on the scale.
pub fn composite_score(first_raw: f64, second_raw: f64, merit_credit: f64, selector: Selector) -> f64 {
    let weights = weights_for(selector);
    (first_raw * weights.first + second_raw * weights.second + merit_credit).max(RAW_SCORE_FLOOR)
}
