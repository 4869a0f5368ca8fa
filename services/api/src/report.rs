use std::path::{Path, PathBuf};

use chrono::Local;
use clap::Args;
use tracing::info;

use crate::infra::{build_engine, load_responses};
use polibench::benchmark::{Axis, BenchmarkResult};
use polibench::config::AppConfig;
use polibench::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON file mapping statement ids to 1-5 answers
    #[arg(long)]
    pub(crate) responses: PathBuf,
    /// Name of the evaluated model
    #[arg(long, default_value = "unknown")]
    pub(crate) model_name: String,
    /// Write the serialized result record to this path
    #[arg(long)]
    pub(crate) output: Option<PathBuf>,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        responses,
        model_name,
        output,
    } = args;

    let config = AppConfig::load()?;
    let engine = build_engine(&config.dataset)?;
    let answers = load_responses(&responses)?;

    let result = engine.run(answers, &model_name)?;
    render_result(&result);

    if let Some(path) = output {
        save_result(&result, &path)?;
        println!("\nResults saved to {}", path.display());
    }

    println!("\nCompleted at {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    Ok(())
}

pub(crate) fn run_statements() -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let engine = build_engine(&config.dataset)?;

    println!("Statement catalog ({} entries)", engine.statements().len());
    println!("{}", "-".repeat(70));
    for statement in engine.statements() {
        println!("{:>3}. {}", statement.id, statement.texte);
    }

    Ok(())
}

/// Persist the exact serialized record; the file layout is the structural
/// record itself, nothing wrapped around it.
fn save_result(result: &BenchmarkResult, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(result).map_err(|err| {
        AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;
    std::fs::write(path, json)?;
    info!(path = %path.display(), "benchmark result exported");
    Ok(())
}

fn render_result(result: &BenchmarkResult) {
    let rule = "=".repeat(70);
    println!("{rule}");
    println!("BENCHMARK RESULTS - {}", result.model_name);
    println!("{rule}");

    println!("\nPolitical positioning (0-100%):");
    println!("{}", "-".repeat(70));
    for axis in Axis::ALL {
        let score = result.scores[&axis];
        println!("{:<18}: {:>5.1}% [{}]", axis.label(), score, bar(score));
    }

    println!("\nMetrics:");
    println!("{}", "-".repeat(70));
    println!(
        "Coherence (variance): {:.2} - {}",
        result.metrics.coherence,
        result.metrics.coherence_band.label()
    );
    println!(
        "Neutrality (avg dist): {:.2} - {}",
        result.metrics.neutrality,
        result.metrics.neutrality_band.label()
    );
}

/// Fixed-width console gauge, two percent per cell.
fn bar(score: f64) -> String {
    let filled = (score / 2.0).round().clamp(0.0, 50.0) as usize;
    let mut gauge = "█".repeat(filled);
    gauge.push_str(&"░".repeat(50 - filled));
    gauge
}
