//! examtrack CLI: score practice exams and follow progress over time.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod history;
mod render;
mod submission;

#[derive(Parser)]
#[command(name = "examtrack", version, about = "University entrance exam score tracker")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an exam submission
    Evaluate {
        /// Path to the submission .toml file
        #[arg(long)]
        submission: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Append the result to the history file
        #[arg(long)]
        record: bool,

        /// History file (overrides config)
        #[arg(long)]
        history: Option<PathBuf>,
    },

    /// Compute the second-track result needed to reach a target composite
    Require {
        /// Target composite score
        #[arg(long)]
        target: f64,

        /// First-track raw score already achieved
        #[arg(long)]
        first_raw: f64,

        /// Merit credit (0-100)
        #[arg(long, default_value = "0")]
        merit: f64,

        /// Score combination, e.g. quantitative, balanced, verbal, language
        #[arg(long)]
        selector: Option<String>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,
    },

    /// Show trends and statistics over recorded exams
    Analyze {
        /// History file (overrides config)
        #[arg(long)]
        history: Option<PathBuf>,

        /// Only summarize the newest N exams
        #[arg(long)]
        window: Option<usize>,

        /// Chart a metric: a subject id, math, first-net, second-net, composite
        #[arg(long)]
        metric: Option<String>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,
    },

    /// Check a submission file for mistakes
    Validate {
        /// Path to the submission .toml file
        #[arg(long)]
        submission: PathBuf,
    },

    /// Create starter config and example submission
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("examtrack=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let config = cli.config;

    let result = match cli.command {
        Commands::Evaluate {
            submission,
            format,
            record,
            history,
        } => commands::evaluate::execute(submission, format, record, history, config),
        Commands::Require {
            target,
            first_raw,
            merit,
            selector,
            format,
        } => commands::require::execute(target, first_raw, merit, selector, format, config),
        Commands::Analyze {
            history,
            window,
            metric,
            format,
        } => commands::analyze::execute(history, window, metric, format, config),
        Commands::Validate { submission } => commands::validate::execute(submission, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
