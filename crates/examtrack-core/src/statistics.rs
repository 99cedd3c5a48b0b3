//! Aggregate statistics over a history of results.
//!
//! Like [`crate::trend`], every function here takes the history newest-first
//! and never sorts it. A `window` keeps only the newest `n` results.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::engine::EvaluationBundle;
use crate::error::ConfigError;
use crate::model::{Half, Subject};

/// Number of results averaged at each end of a series for the trend.
const TREND_SPAN: usize = 3;

/// Summary of one numeric series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesStats {
    pub avg: f64,
    pub min: f64,
    pub max: f64,
    /// Mean of the newest three values minus mean of the oldest three.
    /// Zero unless the series has at least six values.
    pub trend: f64,
    /// Number of values the summary was computed from.
    pub count: usize,
}

impl SeriesStats {
    /// Summarize an oldest-first series.
    pub fn from_values(values: &[f64]) -> Self {
        if values.is_empty() {
            return Self::default();
        }

        let n = values.len();
        let avg = values.iter().sum::<f64>() / n as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let trend = if n >= TREND_SPAN * 2 {
            let oldest = mean(&values[..TREND_SPAN]);
            let newest = mean(&values[n - TREND_SPAN..]);
            newest - oldest
        } else {
            0.0
        };

        Self {
            avg,
            min,
            max,
            trend,
            count: n,
        }
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Statistics over a window of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryStatistics {
    /// First-track total net, over results where it is positive.
    pub first_track_net: SeriesStats,
    /// Second-track total net, over results where it is positive.
    pub second_track_net: SeriesStats,
    /// Composite score, over results where it is positive.
    pub composite: SeriesStats,
    /// Number of results in the window.
    pub total_exams: usize,
}

/// A value that can be charted across results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Net of one subject, from whichever track scored it.
    SubjectNet(Subject),
    /// Basic mathematics net plus second-track mathematics net.
    CombinedMathematics,
    FirstTrackNet,
    SecondTrackNet,
    Composite,
}

impl Metric {
    /// Value of the metric for one result.
    pub fn value(self, bundle: &EvaluationBundle) -> f64 {
        match self {
            Metric::SubjectNet(subject) => match subject.half() {
                Half::First => bundle.first_track.net(subject),
                Half::Second => bundle.second_track.net(subject),
            },
            Metric::CombinedMathematics => {
                bundle.first_track.net(Subject::BasicMathematics)
                    + bundle.second_track.net(Subject::Mathematics)
            }
            Metric::FirstTrackNet => bundle.first_track.total_net,
            Metric::SecondTrackNet => bundle.second_track.total_net,
            Metric::Composite => bundle.composite,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::SubjectNet(subject) => write!(f, "{subject}"),
            Metric::CombinedMathematics => write!(f, "combined-mathematics"),
            Metric::FirstTrackNet => write!(f, "first-net"),
            Metric::SecondTrackNet => write!(f, "second-net"),
            Metric::Composite => write!(f, "composite"),
        }
    }
}

impl FromStr for Metric {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first-net" | "first" => Ok(Metric::FirstTrackNet),
            "second-net" | "second" => Ok(Metric::SecondTrackNet),
            "composite" => Ok(Metric::Composite),
            "combined-mathematics" | "math" | "matematik" => Ok(Metric::CombinedMathematics),
            other => other.parse().map(Metric::SubjectNet),
        }
    }
}

/// The newest `window` results, reordered oldest-first.
fn oldest_first(history: &[EvaluationBundle], window: Option<usize>) -> Vec<&EvaluationBundle> {
    let take = window.unwrap_or(history.len()).min(history.len());
    history[..take].iter().rev().collect()
}

/// Summarize a newest-first history. Returns `None` for an empty window.
///
/// Zero values are left out of each series, so results where a track was
/// not taken do not drag its averages down.
pub fn summarize(history: &[EvaluationBundle], window: Option<usize>) -> Option<HistoryStatistics> {
    let results = oldest_first(history, window);
    if results.is_empty() {
        return None;
    }

    let series = |metric: Metric| -> SeriesStats {
        let values: Vec<f64> = results
            .iter()
            .map(|b| metric.value(b))
            .filter(|v| *v > 0.0)
            .collect();
        SeriesStats::from_values(&values)
    };

    Some(HistoryStatistics {
        first_track_net: series(Metric::FirstTrackNet),
        second_track_net: series(Metric::SecondTrackNet),
        composite: series(Metric::Composite),
        total_exams: results.len(),
    })
}

/// Oldest-first values of `metric`, rounded to two decimals, for charting.
pub fn progress_series(
    history: &[EvaluationBundle],
    metric: Metric,
    window: Option<usize>,
) -> Vec<f64> {
    oldest_first(history, window)
        .into_iter()
        .map(|b| (metric.value(b) * 100.0).round() / 100.0)
        .collect()
}
