pub mod analyze;
pub mod evaluate;
pub mod init;
pub mod require;
pub mod validate;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};

use crate::config::{self, ExamtrackConfig};
use crate::render::OutputFormat;

pub(crate) fn load_config(path: Option<&Path>) -> Result<ExamtrackConfig> {
    config::load_config_from(path)
}

/// Pick the format flag if given, else the configured default.
pub(crate) fn output_format(flag: Option<String>, config: &ExamtrackConfig) -> Result<OutputFormat> {
    flag.unwrap_or_else(|| config.default_format.clone())
        .parse::<OutputFormat>()
        .map_err(|e| anyhow!(e))
}

/// Pick the history flag if given, else the configured path.
pub(crate) fn history_path(flag: Option<PathBuf>, config: &ExamtrackConfig) -> PathBuf {
    flag.unwrap_or_else(|| config.history_path.clone())
}
