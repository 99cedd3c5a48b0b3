//! Merit credit from the secondary school diploma grade.
//!
//! The school category only adjusts the coefficient. An unrecognized category
//! is not an error: it falls back to the default coefficient.

use serde::{Deserialize, Serialize};

/// Coefficient applied to categories without a specific entry.
pub const DEFAULT_COEFFICIENT: f64 = 0.12;

/// Multiplier turning a 100-point diploma grade into a 500-point scale.
const GRADE_SCALE: f64 = 5.0;

/// Upper bound of the merit credit.
pub const MAX_CREDIT: f64 = 100.0;

/// Known school categories and their coefficients.
const CATEGORY_COEFFICIENTS: &[(&str, f64)] = &[
    ("anatolian", 0.12),
    ("vocational", 0.18),
    ("religious-vocational", 0.12),
    ("fine-arts", 0.12),
    ("sports", 0.12),
];

/// Legacy identifiers accepted for the categories above.
const CATEGORY_ALIASES: &[(&str, &str)] = &[
    ("anadolu", "anatolian"),
    ("meslek", "vocational"),
    ("imam-hatip", "religious-vocational"),
    ("guzel-sanatlar", "fine-arts"),
    ("spor", "sports"),
];

/// Coefficient for a school category, or `None` if the category is unknown.
pub fn category_coefficient(category: &str) -> Option<f64> {
    let normalized = category.trim().to_lowercase().replace('_', "-");
    let canonical = CATEGORY_ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, name)| *name)
        .unwrap_or(normalized.as_str());
    CATEGORY_COEFFICIENTS
        .iter()
        .find(|(name, _)| *name == canonical)
        .map(|(_, coefficient)| *coefficient)
}

/// Names of all recognized school categories.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_COEFFICIENTS.iter().map(|(name, _)| *name)
}

/// Merit credit: `clamp(base_value * 5 * coefficient, 0, 100)`.
///
/// A non-finite base value earns no credit.
pub fn compute_merit_credit(base_value: f64, category: &str) -> MeritCredit {
    if !base_value.is_finite() {
        tracing::debug!(base_value, "non-finite merit base value, no credit");
        return MeritCredit { value: 0.0 };
    }

    let coefficient = category_coefficient(category).unwrap_or_else(|| {
        tracing::debug!(
            category,
            coefficient = DEFAULT_COEFFICIENT,
            "unknown school category, using default coefficient"
        );
        DEFAULT_COEFFICIENT
    });
    let value = (base_value * GRADE_SCALE * coefficient).clamp(0.0, MAX_CREDIT);
    MeritCredit { value }
}

/// Bounded secondary credit added to the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeritCredit {
    /// Credit in `[0, 100]`.
    pub value: f64,
}
