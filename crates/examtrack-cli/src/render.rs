//! Text, JSON and markdown rendering of results.

use std::fmt;
use std::str::FromStr;

use anyhow::Result;
use comfy_table::{Cell, Table};
use serde::Serialize;

use examtrack_core::requirement::Requirement;
use examtrack_core::scoring::TrackResult;
use examtrack_core::statistics::{HistoryStatistics, Metric, SeriesStats};
use examtrack_core::trend::TrendReport;
use examtrack_core::EvaluationBundle;

/// How command output is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            other => Err(format!("unknown output format: {other}")),
        }
    }
}

fn track_table(label: &str, track: &TrackResult) -> Table {
    let mut table = Table::new();
    table.set_header(vec![format!("{label} ({})", track.kind), "Net".to_string()]);
    for (subject, net) in &track.per_subject_nets {
        table.add_row(vec![
            Cell::new(subject.display_name()),
            Cell::new(format!("{net:.2}")),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total net"),
        Cell::new(format!("{:.2}", track.total_net)),
    ]);
    table.add_row(vec![
        Cell::new("Raw score"),
        Cell::new(format!("{:.2}", track.raw_score)),
    ]);
    table
}

fn track_markdown(md: &mut String, label: &str, track: &TrackResult) {
    md.push_str(&format!("### {label} ({})\n\n", track.kind));
    if track.is_neutral() {
        md.push_str("Not taken; counted at the floor raw score of 100.\n\n");
        return;
    }
    md.push_str("| Subject | Net |\n");
    md.push_str("|---------|-----|\n");
    for (subject, net) in &track.per_subject_nets {
        md.push_str(&format!("| {} | {net:.2} |\n", subject.display_name()));
    }
    md.push_str(&format!(
        "| **Total** | **{:.2}** |\n\nRaw score: {:.2}\n\n",
        track.total_net, track.raw_score
    ));
}

/// Render one evaluated submission.
pub fn render_evaluation(name: &str, bundle: &EvaluationBundle, format: OutputFormat) -> Result<String> {
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(bundle)?,
        OutputFormat::Markdown => {
            let mut md = format!("## {name}\n\nSelector: `{}`\n\n", bundle.selector);
            track_markdown(&mut md, "First track", &bundle.first_track);
            track_markdown(&mut md, "Second track", &bundle.second_track);
            md.push_str(&format!(
                "Merit credit: {:.2}\n\n**Composite score: {:.2}**\n",
                bundle.merit_credit.value, bundle.composite
            ));
            md
        }
        OutputFormat::Text => {
            let mut out = format!("{name} [{}]\n\n", bundle.selector);
            if bundle.first_track.is_neutral() {
                out.push_str("First track: not taken (raw score 100.00)\n");
            } else {
                out.push_str(&format!("{}\n", track_table("First track", &bundle.first_track)));
            }
            if bundle.second_track.is_neutral() {
                out.push_str("Second track: not taken (raw score 100.00)\n");
            } else {
                out.push_str(&format!(
                    "{}\n",
                    track_table("Second track", &bundle.second_track)
                ));
            }
            out.push_str(&format!(
                "\nMerit credit: {:.2}\nComposite score: {:.2}",
                bundle.merit_credit.value, bundle.composite
            ));
            out
        }
    })
}

/// Render an inverse requirement.
pub fn render_requirement(requirement: &Requirement, format: OutputFormat) -> Result<String> {
    let verdict = if requirement.feasible {
        "achievable"
    } else {
        "not achievable on this scale"
    };
    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(requirement)?,
        OutputFormat::Markdown => format!(
            "| Required raw score | Required net | Feasible |\n|---|---|---|\n| {:.2} | {:.2} | {} |\n",
            requirement.required_raw_score,
            requirement.required_net,
            if requirement.feasible { "yes" } else { "no" }
        ),
        OutputFormat::Text => format!(
            "Required second-track raw score: {:.2}\nRequired second-track net: {:.2}\nTarget is {verdict}",
            requirement.required_raw_score, requirement.required_net
        ),
    })
}

/// Everything `analyze` reports.
#[derive(Debug, Serialize)]
pub struct Analysis {
    pub trend: Option<TrendReport>,
    pub statistics: Option<HistoryStatistics>,
    pub series: Option<ProgressSeries>,
}

/// Chart data for one metric.
#[derive(Debug, Serialize)]
pub struct ProgressSeries {
    pub metric: String,
    pub values: Vec<f64>,
}

impl ProgressSeries {
    pub fn new(metric: Metric, values: Vec<f64>) -> Self {
        Self {
            metric: metric.to_string(),
            values,
        }
    }
}

fn stats_row(label: &str, stats: &SeriesStats) -> Vec<Cell> {
    vec![
        Cell::new(label),
        Cell::new(stats.count),
        Cell::new(format!("{:.2}", stats.avg)),
        Cell::new(format!("{:.2}", stats.min)),
        Cell::new(format!("{:.2}", stats.max)),
        Cell::new(format!("{:+.2}", stats.trend)),
    ]
}

/// Render trend analysis and history statistics.
pub fn render_analysis(analysis: &Analysis, format: OutputFormat) -> Result<String> {
    if format == OutputFormat::Json {
        return Ok(serde_json::to_string_pretty(analysis)?);
    }

    let Some(trend) = &analysis.trend else {
        return Ok("No recorded exams yet. Use `examtrack evaluate --record` to add one.".into());
    };

    let markdown = format == OutputFormat::Markdown;
    let mut out = String::new();

    if markdown {
        out.push_str("## Performance analysis\n\n");
    }
    out.push_str(&format!("Trend: {}", trend.direction));
    if let Some(change) = trend.composite_change {
        out.push_str(&format!(" ({change:+.2} composite)"));
    }
    out.push_str("\n\n");

    if let Some(stats) = &analysis.statistics {
        if markdown {
            out.push_str("| Series | Exams | Avg | Min | Max | Trend |\n");
            out.push_str("|---|---|---|---|---|---|\n");
            for (label, s) in [
                ("First-track net", &stats.first_track_net),
                ("Second-track net", &stats.second_track_net),
                ("Composite", &stats.composite),
            ] {
                out.push_str(&format!(
                    "| {label} | {} | {:.2} | {:.2} | {:.2} | {:+.2} |\n",
                    s.count, s.avg, s.min, s.max, s.trend
                ));
            }
            out.push('\n');
        } else {
            let mut table = Table::new();
            table.set_header(vec!["Series", "Exams", "Avg", "Min", "Max", "Trend"]);
            table.add_row(stats_row("First-track net", &stats.first_track_net));
            table.add_row(stats_row("Second-track net", &stats.second_track_net));
            table.add_row(stats_row("Composite", &stats.composite));
            out.push_str(&format!("{table}\n"));
            out.push_str(&format!("Exams analyzed: {}\n\n", stats.total_exams));
        }
    }

    let names = |set: &std::collections::BTreeSet<examtrack_core::Subject>| {
        set.iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    };
    if !trend.strong_subjects.is_empty() {
        out.push_str(&format!("Strong subjects: {}\n", names(&trend.strong_subjects)));
    }
    if !trend.weak_subjects.is_empty() {
        out.push_str(&format!("Weak subjects: {}\n", names(&trend.weak_subjects)));
    }

    if !trend.recommendations.is_empty() {
        out.push_str(if markdown {
            "\n### Recommendations\n\n"
        } else {
            "\nRecommendations:\n"
        });
        for rec in &trend.recommendations {
            out.push_str(&format!("- {rec}\n"));
        }
    }

    if let Some(series) = &analysis.series {
        let values: Vec<String> = series.values.iter().map(|v| format!("{v:.2}")).collect();
        out.push_str(&format!(
            "\nProgress ({}, oldest first): {}\n",
            series.metric,
            values.join(" -> ")
        ));
    }

    Ok(out.trim_end().to_string())
}
