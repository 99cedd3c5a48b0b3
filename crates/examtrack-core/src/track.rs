//! Track kinds and exam selectors.
//!
//! A [`TrackKind`] names the fixed subject list one half of the exam is
//! scored over. A [`Selector`] names the whole exam configuration: which
//! halves were administered, which second-half subject combination applies,
//! and which weighting scheme the composite uses.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::model::{Half, Subject};

/// A subject combination that one track is scored over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrackKind {
    /// The first half, identical for every candidate.
    Foundational,
    /// Mathematics and natural sciences.
    Quantitative,
    /// Mathematics with literature and first-level social sciences.
    Balanced,
    /// Literature and the full social sciences battery.
    Verbal,
    /// Foreign language.
    Language,
    /// The track was not administered; scored as the neutral result.
    Skipped,
}

const FOUNDATIONAL_SUBJECTS: &[Subject] = &[
    Subject::Turkish,
    Subject::BasicMathematics,
    Subject::Science,
    Subject::SocialSciences,
];

const QUANTITATIVE_SUBJECTS: &[Subject] = &[
    Subject::Mathematics,
    Subject::Physics,
    Subject::Chemistry,
    Subject::Biology,
];

const BALANCED_SUBJECTS: &[Subject] = &[
    Subject::Mathematics,
    Subject::Literature,
    Subject::History1,
    Subject::Geography1,
];

const VERBAL_SUBJECTS: &[Subject] = &[
    Subject::Literature,
    Subject::History1,
    Subject::Geography1,
    Subject::History2,
    Subject::Geography2,
    Subject::Philosophy,
    Subject::Religion,
];

const LANGUAGE_SUBJECTS: &[Subject] = &[Subject::ForeignLanguage];

impl TrackKind {
    /// The subjects this track sums over. Empty for [`TrackKind::Skipped`].
    pub fn subjects(self) -> &'static [Subject] {
        match self {
            TrackKind::Foundational => FOUNDATIONAL_SUBJECTS,
            TrackKind::Quantitative => QUANTITATIVE_SUBJECTS,
            TrackKind::Balanced => BALANCED_SUBJECTS,
            TrackKind::Verbal => VERBAL_SUBJECTS,
            TrackKind::Language => LANGUAGE_SUBJECTS,
            TrackKind::Skipped => &[],
        }
    }

    /// The exam half this track belongs to, if any.
    pub fn half(self) -> Option<Half> {
        match self {
            TrackKind::Foundational => Some(Half::First),
            TrackKind::Quantitative
            | TrackKind::Balanced
            | TrackKind::Verbal
            | TrackKind::Language => Some(Half::Second),
            TrackKind::Skipped => None,
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            TrackKind::Foundational => "foundational",
            TrackKind::Quantitative => "quantitative",
            TrackKind::Balanced => "balanced",
            TrackKind::Verbal => "verbal",
            TrackKind::Language => "language",
            TrackKind::Skipped => "skipped",
        }
    }
}

impl fmt::Display for TrackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for TrackKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "foundational" | "tyt" => Ok(TrackKind::Foundational),
            "quantitative" | "sayisal" => Ok(TrackKind::Quantitative),
            "balanced" | "esit-agirlik" => Ok(TrackKind::Balanced),
            "verbal" | "sozel" => Ok(TrackKind::Verbal),
            "language" | "dil" => Ok(TrackKind::Language),
            "skipped" | "none" => Ok(TrackKind::Skipped),
            _ => Err(ConfigError::UnknownTrackKind(s.to_string())),
        }
    }
}

/// Which exam configuration a submission was taken under.
///
/// The `*SecondOnly` variants mean the first half was not administered and
/// reuse the subject combination of their plain counterpart for the second
/// half. [`Selector::FirstOnly`] means the second half was not administered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Selector {
    #[default]
    #[serde(alias = "sayisal")]
    Quantitative,
    #[serde(alias = "esit_agirlik")]
    Balanced,
    #[serde(alias = "sozel")]
    Verbal,
    #[serde(alias = "dil")]
    Language,
    #[serde(alias = "ayt_sayisal")]
    QuantitativeSecondOnly,
    #[serde(alias = "ayt_esit_agirlik")]
    BalancedSecondOnly,
    #[serde(alias = "ayt_sozel")]
    VerbalSecondOnly,
    #[serde(alias = "tyt_only")]
    FirstOnly,
}

impl Selector {
    pub const ALL: [Selector; 8] = [
        Selector::Quantitative,
        Selector::Balanced,
        Selector::Verbal,
        Selector::Language,
        Selector::QuantitativeSecondOnly,
        Selector::BalancedSecondOnly,
        Selector::VerbalSecondOnly,
        Selector::FirstOnly,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Selector::Quantitative => "quantitative",
            Selector::Balanced => "balanced",
            Selector::Verbal => "verbal",
            Selector::Language => "language",
            Selector::QuantitativeSecondOnly => "quantitative-second-only",
            Selector::BalancedSecondOnly => "balanced-second-only",
            Selector::VerbalSecondOnly => "verbal-second-only",
            Selector::FirstOnly => "first-only",
        }
    }

    /// True when the first half was not administered.
    pub fn is_second_only(self) -> bool {
        matches!(
            self,
            Selector::QuantitativeSecondOnly
                | Selector::BalancedSecondOnly
                | Selector::VerbalSecondOnly
        )
    }

    /// True when the second half was not administered.
    pub fn is_first_only(self) -> bool {
        self == Selector::FirstOnly
    }

    /// Track kind used to score the first half.
    pub fn first_track_kind(self) -> TrackKind {
        if self.is_second_only() {
            TrackKind::Skipped
        } else {
            TrackKind::Foundational
        }
    }

    /// Track kind used to score the second half, with any second-only
    /// marker stripped.
    pub fn second_track_kind(self) -> TrackKind {
        match self {
            Selector::Quantitative | Selector::QuantitativeSecondOnly => TrackKind::Quantitative,
            Selector::Balanced | Selector::BalancedSecondOnly => TrackKind::Balanced,
            Selector::Verbal | Selector::VerbalSecondOnly => TrackKind::Verbal,
            Selector::Language => TrackKind::Language,
            Selector::FirstOnly => TrackKind::Skipped,
        }
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Selector {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "quantitative" | "sayisal" => Ok(Selector::Quantitative),
            "balanced" | "esit-agirlik" => Ok(Selector::Balanced),
            "verbal" | "sozel" => Ok(Selector::Verbal),
            "language" | "dil" => Ok(Selector::Language),
            "quantitative-second-only" | "ayt-sayisal" => Ok(Selector::QuantitativeSecondOnly),
            "balanced-second-only" | "ayt-esit-agirlik" => Ok(Selector::BalancedSecondOnly),
            "verbal-second-only" | "ayt-sozel" => Ok(Selector::VerbalSecondOnly),
            "first-only" | "tyt-only" => Ok(Selector::FirstOnly),
            _ => Err(ConfigError::UnknownSelector(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_parse_accepts_canonical_and_legacy_ids() {
        for selector in Selector::ALL {
            assert_eq!(selector.id().parse::<Selector>().unwrap(), selector);
        }
        assert_eq!("sayisal".parse::<Selector>().unwrap(), Selector::Quantitative);
        assert_eq!(
            "ayt_esit_agirlik".parse::<Selector>().unwrap(),
            Selector::BalancedSecondOnly
        );
        assert_eq!("tyt_only".parse::<Selector>().unwrap(), Selector::FirstOnly);
        assert_eq!("DIL".parse::<Selector>().unwrap(), Selector::Language);
    }

    #[test]
    fn unknown_selector_is_config_error() {
        let err = "medicine".parse::<Selector>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownSelector("medicine".into()));
    }

    #[test]
    fn unknown_track_kind_is_config_error() {
        let err = "engineering".parse::<TrackKind>().unwrap_err();
        assert_eq!(err, ConfigError::UnknownTrackKind("engineering".into()));
    }

    #[test]
    fn second_only_strips_to_plain_kind() {
        assert_eq!(
            Selector::QuantitativeSecondOnly.second_track_kind(),
            Selector::Quantitative.second_track_kind()
        );
        assert_eq!(
            Selector::BalancedSecondOnly.second_track_kind(),
            TrackKind::Balanced
        );
        assert_eq!(Selector::VerbalSecondOnly.second_track_kind(), TrackKind::Verbal);
        assert_eq!(
            Selector::VerbalSecondOnly.first_track_kind(),
            TrackKind::Skipped
        );
    }

    #[test]
    fn first_only_skips_second_track() {
        assert!(Selector::FirstOnly.is_first_only());
        assert_eq!(Selector::FirstOnly.first_track_kind(), TrackKind::Foundational);
        assert_eq!(Selector::FirstOnly.second_track_kind(), TrackKind::Skipped);
    }

    #[test]
    fn track_subjects_stay_within_their_half() {
        for kind in [
            TrackKind::Foundational,
            TrackKind::Quantitative,
            TrackKind::Balanced,
            TrackKind::Verbal,
            TrackKind::Language,
        ] {
            let half = kind.half().unwrap();
            assert!(kind.subjects().iter().all(|s| s.half() == half), "{kind}");
        }
        assert!(TrackKind::Skipped.subjects().is_empty());
    }

    #[test]
    fn selector_serde_uses_kebab_case_and_legacy_aliases() {
        let json = serde_json::to_string(&Selector::BalancedSecondOnly).unwrap();
        assert_eq!(json, r#""balanced-second-only""#);
        let legacy: Selector = serde_json::from_str(r#""ayt_sozel""#).unwrap();
        assert_eq!(legacy, Selector::VerbalSecondOnly);
    }
}
