//! Induces, prunes and cross-validates a party-affiliation decision tree.

use anyhow::{Context, Result};
use std::path::PathBuf;
use tracing::info;
use votetree::evaluation::Measurement;
use votetree::tasks::{Experiment, ExperimentOutcome};
use votetree::ui::cli::drivers::InquireDriver;
use votetree::ui::cli::wizard::prompt_parameters;
use votetree::ui::types::ExperimentParameters;
use votetree::ui::types::schema::schema_json;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    if std::env::args().nth(1).as_deref() == Some("--schema") {
        println!("{}", schema_json::<ExperimentParameters>()?);
        return Ok(());
    }

    let params = load_parameters()?;
    let experiment = Experiment::from_parameters(&params)
        .with_context(|| format!("preparing {}", params.dataset_path.display()))?;
    let outcome = experiment.run().context("running experiment")?;
    print_outcome(&outcome);

    if let Some(path) = &params.report_path {
        outcome
            .cross_validation
            .export(path, params.report_format)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = %path.display(), format = %params.report_format, "exported report");
    }
    Ok(())
}

/// Checks (in order):
/// 1. First CLI argument as config path
/// 2. `VOTETREE_CONFIG` environment variable
/// 3. Interactive wizard
fn load_parameters() -> Result<ExperimentParameters> {
    let config_path: Option<PathBuf> = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("VOTETREE_CONFIG").ok())
        .map(PathBuf::from);

    match config_path {
        Some(path) => {
            info!(path = %path.display(), "loading configuration from file");
            ExperimentParameters::from_json_file(&path)
                .with_context(|| format!("reading {}", path.display()))
        }
        None => prompt_parameters(&InquireDriver),
    }
}

fn print_outcome(outcome: &ExperimentOutcome) {
    println!("THE TREE BEFORE PRUNING:");
    print!("{}", outcome.unpruned);
    println!();

    if let Some(pruned) = &outcome.pruned {
        println!("THE PRUNED TREE:");
        print!("{pruned}");
        println!();
    }

    if let Some(acc) = outcome.training_accuracy {
        println!("Training accuracy: {acc:.4}");
    }
    if let Some(acc) = outcome.tuning_accuracy {
        println!("Tuning accuracy: {acc:.4}");
    }
    if let Some(acc) = outcome.testing_accuracy {
        println!("Testing accuracy: {acc:.4}");
    }
    print_metrics("Tuning", &outcome.tuning_metrics);
    print_metrics("Testing", &outcome.testing_metrics);

    for entry in outcome.cross_validation.entries() {
        match (entry.accuracy, &entry.error) {
            (Some(acc), _) => println!("Left out representative {} accuracy: {acc:.4}", entry.omitted_id),
            (None, Some(e)) => println!("Left out representative {} failed: {e}", entry.omitted_id),
            (None, None) => {}
        }
    }
    if let Some(mean) = outcome.cross_validation.mean_accuracy() {
        println!("Mean leave-one-out accuracy: {mean:.4}");
    }
}

fn print_metrics(set: &str, metrics: &[Measurement]) {
    if metrics.is_empty() {
        return;
    }
    let line: Vec<String> = metrics
        .iter()
        .map(|m| format!("{}={:.4}", m.name, m.value))
        .collect();
    println!("{set} metrics: {}", line.join(" "));
}
