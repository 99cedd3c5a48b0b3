//! Core data model types for examtrack.
//!
//! Subjects, the two exam halves they belong to, and the answer sheets that
//! carry raw correct/incorrect counts into the scoring pipeline.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// The two halves of the exam whose raw scores combine into a composite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Half {
    /// The foundational half every candidate takes.
    First,
    /// The advanced, field-specific half.
    Second,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::First => write!(f, "first"),
            Half::Second => write!(f, "second"),
        }
    }
}

/// Every subject on the scale.
///
/// Declaration order is the display order used in answer sheets and
/// reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    Turkish,
    BasicMathematics,
    Science,
    SocialSciences,
    Mathematics,
    Physics,
    Chemistry,
    Biology,
    Literature,
    #[serde(rename = "history-1")]
    History1,
    #[serde(rename = "geography-1")]
    Geography1,
    #[serde(rename = "history-2")]
    History2,
    #[serde(rename = "geography-2")]
    Geography2,
    Philosophy,
    Religion,
    ForeignLanguage,
}

impl Subject {
    /// All subjects in declaration order.
    pub const ALL: [Subject; 16] = [
        Subject::Turkish,
        Subject::BasicMathematics,
        Subject::Science,
        Subject::SocialSciences,
        Subject::Mathematics,
        Subject::Physics,
        Subject::Chemistry,
        Subject::Biology,
        Subject::Literature,
        Subject::History1,
        Subject::Geography1,
        Subject::History2,
        Subject::Geography2,
        Subject::Philosophy,
        Subject::Religion,
        Subject::ForeignLanguage,
    ];

    /// Which half of the exam this subject appears in.
    pub fn half(self) -> Half {
        match self {
            Subject::Turkish
            | Subject::BasicMathematics
            | Subject::Science
            | Subject::SocialSciences => Half::First,
            _ => Half::Second,
        }
    }

    /// Number of questions the subject has on a full exam.
    pub fn max_questions(self) -> u32 {
        match self {
            Subject::Turkish => 40,
            Subject::BasicMathematics => 40,
            Subject::Science => 20,
            Subject::SocialSciences => 20,
            Subject::Mathematics => 40,
            Subject::Physics => 14,
            Subject::Chemistry => 13,
            Subject::Biology => 13,
            Subject::Literature => 24,
            Subject::History1 => 10,
            Subject::Geography1 => 6,
            Subject::History2 => 11,
            Subject::Geography2 => 11,
            Subject::Philosophy => 12,
            Subject::Religion => 6,
            Subject::ForeignLanguage => 80,
        }
    }

    /// Canonical identifier, as used in serialized data.
    pub fn id(self) -> &'static str {
        match self {
            Subject::Turkish => "turkish",
            Subject::BasicMathematics => "basic-mathematics",
            Subject::Science => "science",
            Subject::SocialSciences => "social-sciences",
            Subject::Mathematics => "mathematics",
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Biology => "biology",
            Subject::Literature => "literature",
            Subject::History1 => "history-1",
            Subject::Geography1 => "geography-1",
            Subject::History2 => "history-2",
            Subject::Geography2 => "geography-2",
            Subject::Philosophy => "philosophy",
            Subject::Religion => "religion",
            Subject::ForeignLanguage => "foreign-language",
        }
    }

    /// Human-readable name for reports and recommendations.
    pub fn display_name(self) -> &'static str {
        match self {
            Subject::Turkish => "Turkish",
            Subject::BasicMathematics => "Basic Mathematics",
            Subject::Science => "Science",
            Subject::SocialSciences => "Social Sciences",
            Subject::Mathematics => "Mathematics",
            Subject::Physics => "Physics",
            Subject::Chemistry => "Chemistry",
            Subject::Biology => "Biology",
            Subject::Literature => "Literature",
            Subject::History1 => "History I",
            Subject::Geography1 => "Geography I",
            Subject::History2 => "History II",
            Subject::Geography2 => "Geography II",
            Subject::Philosophy => "Philosophy",
            Subject::Religion => "Religion",
            Subject::ForeignLanguage => "Foreign Language",
        }
    }

    /// Resolve a subject name written inside one half of a submission.
    ///
    /// "mathematics" (and "matematik") is ambiguous across halves and
    /// resolves to the mathematics section of `half`. Every other name must
    /// belong to `half`.
    pub fn lookup(half: Half, name: &str) -> Result<Subject, ConfigError> {
        let normalized = name.trim().to_lowercase().replace('_', "-");
        let subject = match (half, normalized.as_str()) {
            (Half::First, "mathematics" | "matematik") => Subject::BasicMathematics,
            (Half::Second, "matematik") => Subject::Mathematics,
            _ => normalized
                .parse::<Subject>()
                .map_err(|_| ConfigError::UnknownSubject(name.to_string()))?,
        };
        if subject.half() != half {
            return Err(ConfigError::UnknownSubject(format!("{name} (in {half} half)")));
        }
        Ok(subject)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Subject {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "turkish" | "turkce" => Ok(Subject::Turkish),
            "basic-mathematics" => Ok(Subject::BasicMathematics),
            "science" | "fen" => Ok(Subject::Science),
            "social-sciences" | "social" | "sosyal" => Ok(Subject::SocialSciences),
            "mathematics" => Ok(Subject::Mathematics),
            "physics" | "fizik" => Ok(Subject::Physics),
            "chemistry" | "kimya" => Ok(Subject::Chemistry),
            "biology" | "biyoloji" => Ok(Subject::Biology),
            "literature" | "edebiyat" => Ok(Subject::Literature),
            "history-1" | "history1" | "tarih1" => Ok(Subject::History1),
            "geography-1" | "geography1" | "cografya1" => Ok(Subject::Geography1),
            "history-2" | "history2" | "tarih2" => Ok(Subject::History2),
            "geography-2" | "geography2" | "cografya2" => Ok(Subject::Geography2),
            "philosophy" | "felsefe" => Ok(Subject::Philosophy),
            "religion" | "din" => Ok(Subject::Religion),
            "foreign-language" | "language" | "yabanci-dil" => Ok(Subject::ForeignLanguage),
            _ => Err(ConfigError::UnknownSubject(s.to_string())),
        }
    }
}

/// Raw answer counts for one subject.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectAnswerCount {
    /// Questions answered correctly.
    #[serde(default)]
    pub correct: u32,
    /// Questions answered incorrectly. Blank answers are not counted.
    #[serde(default)]
    pub incorrect: u32,
}

impl SubjectAnswerCount {
    pub fn new(correct: u32, incorrect: u32) -> Self {
        Self { correct, incorrect }
    }

    /// Number of questions that received an answer.
    pub fn answered(&self) -> u32 {
        self.correct.saturating_add(self.incorrect)
    }

    /// Limit the counts so that no more than `max` questions are answered.
    ///
    /// `correct` is kept (up to `max`) and `incorrect` absorbs any excess.
    pub fn clamped(&self, max: u32) -> Self {
        let correct = self.correct.min(max);
        let incorrect = self.incorrect.min(max - correct);
        Self { correct, incorrect }
    }
}

/// Answer counts for a set of subjects.
///
/// Subjects that were never recorded count as zero correct and zero
/// incorrect.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSheet {
    counts: BTreeMap<Subject, SubjectAnswerCount>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, replacing any previous counts for `subject`.
    pub fn with(mut self, subject: Subject, correct: u32, incorrect: u32) -> Self {
        self.set(subject, SubjectAnswerCount::new(correct, incorrect));
        self
    }

    pub fn set(&mut self, subject: Subject, counts: SubjectAnswerCount) {
        self.counts.insert(subject, counts);
    }

    /// Counts for `subject`, or zero when it was never recorded.
    pub fn get(&self, subject: Subject) -> SubjectAnswerCount {
        self.counts.get(&subject).copied().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Subject, SubjectAnswerCount)> + '_ {
        self.counts.iter().map(|(s, c)| (*s, *c))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of answered questions across every subject.
    pub fn total_answered(&self) -> u32 {
        self.counts
            .values()
            .map(SubjectAnswerCount::answered)
            .fold(0u32, u32::saturating_add)
    }

    /// Subjects whose counts exceed the subject's question count.
    pub fn over_limit(&self) -> Vec<Subject> {
        self.counts
            .iter()
            .filter(|(subject, counts)| counts.answered() > subject.max_questions())
            .map(|(subject, _)| *subject)
            .collect()
    }

    /// A copy with every subject clamped to its question count.
    pub fn clamped(&self) -> Self {
        Self {
            counts: self
                .counts
                .iter()
                .map(|(subject, counts)| (*subject, counts.clamped(subject.max_questions())))
                .collect(),
        }
    }
}

impl FromIterator<(Subject, SubjectAnswerCount)> for AnswerSheet {
    fn from_iter<I: IntoIterator<Item = (Subject, SubjectAnswerCount)>>(iter: I) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}
