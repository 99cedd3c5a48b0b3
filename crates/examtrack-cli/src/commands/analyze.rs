//! The `examtrack analyze` command.

use std::path::PathBuf;

use anyhow::Result;

use examtrack_core::statistics::{progress_series, summarize, Metric};
use examtrack_core::trend::analyze;

use crate::history::ExamHistory;
use crate::render::{self, Analysis, ProgressSeries};

pub fn execute(
    history: Option<PathBuf>,
    window: Option<usize>,
    metric: Option<String>,
    format: Option<String>,
    config: Option<PathBuf>,
) -> Result<()> {
    let config = super::load_config(config.as_deref())?;
    let format = super::output_format(format, &config)?;
    let metric = metric.map(|m| m.parse::<Metric>()).transpose()?;

    let path = super::history_path(history, &config);
    let history = ExamHistory::load_or_default(&path)?;
    if history.is_empty() {
        tracing::info!("no exams recorded in {}", path.display());
    }
    let bundles = history.bundles_newest_first();
    let window = window.or(config.stats_window);

    tracing::debug!(
        "analyzing {} exam(s) from {}",
        bundles.len(),
        path.display()
    );

    let analysis = Analysis {
        trend: analyze(&bundles),
        statistics: summarize(&bundles, window),
        series: metric.map(|m| ProgressSeries::new(m, progress_series(&bundles, m, window))),
    };

    println!("{}", render::render_analysis(&analysis, format)?);
    Ok(())
}
