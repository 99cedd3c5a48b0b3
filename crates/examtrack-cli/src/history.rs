//! Local JSON history of recorded exam results.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use examtrack_core::EvaluationBundle;

/// One recorded exam.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamRecord {
    /// Unique record identifier.
    pub id: Uuid,
    /// Name of the practice exam.
    pub name: String,
    /// Day the exam was taken.
    pub date: NaiveDate,
    /// When the record was written.
    pub recorded_at: DateTime<Utc>,
    /// Computed scores.
    pub bundle: EvaluationBundle,
}

impl ExamRecord {
    pub fn new(name: impl Into<String>, date: NaiveDate, bundle: EvaluationBundle) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            recorded_at: Utc::now(),
            bundle,
        }
    }
}

/// All recorded exams, in insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExamHistory {
    #[serde(default)]
    pub records: Vec<ExamRecord>,
}

impl ExamHistory {
    /// Load a history file, or start an empty history if it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_json(path)
        } else {
            tracing::debug!("no history at {}, starting empty", path.display());
            Ok(Self::default())
        }
    }

    /// Load a history from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read history from {}", path.display()))?;
        let history: ExamHistory =
            serde_json::from_str(&content).context("failed to parse history JSON")?;
        Ok(history)
    }

    /// Save the history as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize history")?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write history to {}", path.display()))?;
        Ok(())
    }

    pub fn push(&mut self, record: ExamRecord) {
        self.records.push(record);
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records ordered newest exam date first; ties go to the later recording.
    pub fn newest_first(&self) -> Vec<&ExamRecord> {
        let mut records: Vec<&ExamRecord> = self.records.iter().collect();
        records.sort_by(|a, b| {
            b.date
                .cmp(&a.date)
                .then_with(|| b.recorded_at.cmp(&a.recorded_at))
        });
        records
    }

    /// Bundles ordered newest first, ready for trend analysis.
    pub fn bundles_newest_first(&self) -> Vec<EvaluationBundle> {
        self.newest_first()
            .into_iter()
            .map(|r| r.bundle.clone())
            .collect()
    }
}
