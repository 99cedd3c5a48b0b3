//! Second-track score needed to reach a target composite.

use serde::{Deserialize, Serialize};

use crate::composite::weights_for;
use crate::scoring::{POINTS_PER_NET, RAW_SCORE_FLOOR};
use crate::track::Selector;

/// Highest raw score reachable on the scale.
pub const MAX_RAW_SCORE: f64 = 500.0;

/// Highest net reachable on a second track.
pub const MAX_SECOND_TRACK_NET: f64 = 80.0;

/// What the second track must produce for a target composite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Requirement {
    /// Required raw score, never shown below the floor.
    pub required_raw_score: f64,
    /// Required total net on the second track.
    pub required_net: f64,
    /// Whether the requirement is within reach on this scale.
    pub feasible: bool,
}

/// Back-solve the composite formula for the second track.
///
/// Feasibility is judged on the unfloored raw score, so a target already
/// met by the first track and merit alone is always feasible.
pub fn required_second_track(
    target_composite: f64,
    first_raw: f64,
    merit_credit: f64,
    selector: Selector,
) -> Requirement {
    let weights = weights_for(selector);
    let raw = (target_composite - first_raw * weights.first - merit_credit) / weights.second;
    let required_net = ((raw - RAW_SCORE_FLOOR) / POINTS_PER_NET).max(0.0);

    Requirement {
        required_raw_score: raw.max(RAW_SCORE_FLOOR),
        required_net,
        feasible: raw <= MAX_RAW_SCORE && required_net <= MAX_SECOND_TRACK_NET,
    }
}
