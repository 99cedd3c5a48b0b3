//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use examtrack_core::Selector;

/// Environment variable overriding the history file location.
pub const HISTORY_ENV: &str = "EXAMTRACK_HISTORY";

/// Top-level examtrack configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamtrackConfig {
    /// JSON file recorded results are appended to.
    #[serde(default = "default_history_path")]
    pub history_path: PathBuf,
    /// Selector used when a submission does not name one.
    #[serde(default)]
    pub default_selector: Selector,
    /// School category used when a submission has no `[merit]` category.
    #[serde(default = "default_category")]
    pub default_category: String,
    /// Output format: text, json, markdown.
    #[serde(default = "default_format")]
    pub default_format: String,
    /// How many of the newest results `analyze` summarizes (all if unset).
    #[serde(default)]
    pub stats_window: Option<usize>,
}

fn default_history_path() -> PathBuf {
    PathBuf::from("examtrack-history.json")
}
fn default_category() -> String {
    "anatolian".to_string()
}
fn default_format() -> String {
    "text".to_string()
}

impl Default for ExamtrackConfig {
    fn default() -> Self {
        Self {
            history_path: default_history_path(),
            default_selector: Selector::default(),
            default_category: default_category(),
            default_format: default_format(),
            stats_window: None,
        }
    }
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order:
/// 1. `examtrack.toml` in the current directory
/// 2. `~/.config/examtrack/config.toml`
///
/// `EXAMTRACK_HISTORY` overrides `history_path` in every case.
pub fn load_config_from(path: Option<&Path>) -> Result<ExamtrackConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("examtrack.toml");
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|dir| dir.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!("loading config from {}", path.display());
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config_str(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ExamtrackConfig::default(),
    };

    if let Ok(history) = std::env::var(HISTORY_ENV) {
        if !history.is_empty() {
            config.history_path = PathBuf::from(history);
        }
    }

    Ok(config)
}

fn parse_config_str(content: &str) -> Result<ExamtrackConfig> {
    Ok(toml::from_str(content)?)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("examtrack"))
}
