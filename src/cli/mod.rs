// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// Entry point for all user interaction. Parses arguments with
// clap, resolves the WorkflowConfig, delegates to Layer 2 and
// prints the results.
//
// Four commands are supported:
//   1. `inspect` — preview + data-quality report of the raw CSV
//   2. `clean`   — raw CSV → cleaned Text,Language CSV
//   3. `train`   — fit, evaluate, save, then demo predictions
//   4. `predict` — label texts with a saved model
//
// Failure policy:
//   - inspect: a missing file is reported and the command
//     still exits successfully
//   - clean / train / predict: errors are reported and the
//     process exits non-zero
//
// Reference: Rust Book §7 (Modules), §12 (CLI programs)

pub mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use commands::{ApplyOverrides, CleanArgs, Commands, InspectArgs, PredictArgs, TrainArgs};

use crate::application::{
    clean_use_case::CleanUseCase,
    config::WorkflowConfig,
    inspect_use_case::{InspectUseCase, InspectionResult},
    predict_use_case::PredictUseCase,
    train_use_case::{TrainUseCase, TrainingReport},
};
use crate::data::dataset::Row;
use crate::ml::pipeline::Prediction;

const RULE_WIDTH: usize = 50;

#[derive(Parser, Debug)]
#[command(
    name = "lang-detect",
    version,
    about = "Inspect and clean a labelled text dataset, train a language classifier, and predict."
)]
pub struct Cli {
    /// JSON file with workflow settings (paths, seed, hyperparameters)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Resolve the configuration, then dispatch to the matching command.
    pub fn run(self) -> Result<()> {
        let Cli { config, command } = self;
        let cfg = WorkflowConfig::load(config.as_deref())
            .context("cannot load configuration")?;

        match command {
            Commands::Inspect(args) => run_inspect(args, cfg),
            Commands::Clean(args)   => run_clean(args, cfg),
            Commands::Train(args)   => run_train(args, cfg),
            Commands::Predict(args) => run_predict(args, cfg),
        }
    }
}

fn resolve(args: &impl ApplyOverrides, mut cfg: WorkflowConfig) -> Result<WorkflowConfig> {
    args.apply(&mut cfg);
    cfg.validate()?;
    tracing::debug!("Resolved configuration: {:?}", cfg);
    Ok(cfg)
}

fn rule() {
    println!("\n{}\n", "=".repeat(RULE_WIDTH));
}

// ─── inspect ──────────────────────────────────────────────────────────────────
fn run_inspect(args: InspectArgs, cfg: WorkflowConfig) -> Result<()> {
    let cfg = resolve(&args, cfg)?;

    match InspectUseCase::new(&cfg).execute() {
        Ok(result) => {
            print_inspection(&result, cfg.top_languages);
            Ok(())
        }
        Err(e) if e.is_missing_file() => {
            tracing::error!("{e}");
            println!("Error: {e}");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

fn print_inspection(result: &InspectionResult, top_languages: usize) {
    let report = &result.report;

    println!("--- First {} Rows of the Dataset ---", result.preview.len());
    println!("{}", result.headers.join(" | "));
    for row in &result.preview {
        println!("{}", format_row(row));
    }
    rule();

    println!("--- Missing Values Check ---");
    for (column, missing) in &report.missing_values {
        println!("{column:<12} {missing}");
    }
    if report.total_missing() == 0 {
        println!("--> Verdict: No missing (null) values found.");
    }
    rule();

    println!("--- Empty String Check in 'Text' Column ---");
    println!("Number of rows with empty or whitespace-only text: {}", report.empty_text_count);
    if report.empty_text_count == 0 {
        println!("--> Verdict: No empty text entries found.");
    }
    rule();

    println!("--- Language Distribution (Top {top_languages}) ---");
    for (language, count) in report.top_languages(top_languages) {
        println!("{language:<12} {count}");
    }
    println!("\nTotal unique languages: {}", report.unique_languages());
    rule();
}

fn format_row(row: &Row) -> String {
    row.iter()
        .map(|cell| cell.as_deref().unwrap_or("NaN"))
        .collect::<Vec<_>>()
        .join(" | ")
}

// ─── clean ────────────────────────────────────────────────────────────────────
fn run_clean(args: CleanArgs, cfg: WorkflowConfig) -> Result<()> {
    let cfg = resolve(&args, cfg)?;

    println!("Starting data cleaning process...");
    let summary = CleanUseCase::new(&cfg).execute().map_err(|e| {
        tracing::error!("{e}");
        e
    })?;

    println!("Loaded {}: {} rows", cfg.raw_data_path.display(), summary.loaded_rows);
    println!(
        "Rows after dropping missing values: {} ({} dropped)",
        summary.rows_after_drop_null,
        summary.dropped_null()
    );
    println!(
        "Rows after removing empty text rows: {} ({} dropped)",
        summary.rows_written,
        summary.dropped_empty()
    );
    println!(
        "Data cleaning complete. Cleaned data saved to {}",
        cfg.cleaned_data_path.display()
    );
    Ok(())
}

// ─── train ────────────────────────────────────────────────────────────────────
fn run_train(args: TrainArgs, cfg: WorkflowConfig) -> Result<()> {
    let cfg = resolve(&args, cfg)?;

    let result = TrainUseCase::new(&cfg).execute();
    match &result {
        Ok(report) => print_training_report(report),
        Err(e) => {
            tracing::error!("{e}");
            println!("\nModel training failed: {e}");
        }
    }

    // the demo runs even after a failed run if an older artifact exists
    println!("\n--- Testing the saved model with sample inputs ---");
    match PredictUseCase::new(&cfg) {
        Ok(use_case) => print_predictions(&use_case.execute(&[])),
        Err(e) => println!("Error: {e}. Cannot run demonstration."),
    }

    result.map(|_| ()).context("model training failed")
}

fn print_training_report(report: &TrainingReport) {
    println!("\n--- Training Complete ---");
    println!("Model saved to: {}", report.model_path.display());
    println!("Train rows: {}, test rows: {}", report.train_rows, report.test_rows);
    println!("Vocabulary size: {}", report.vocabulary_size);
    println!("Languages: {} ({})", report.languages.len(), report.languages.join(", "));
    println!("Model Accuracy on Test Data: {:.4}", report.accuracy);
    for score in &report.metrics.per_language {
        println!(
            "  {:<12} support={:<5} recall={:.4}",
            score.language,
            score.support,
            score.recall()
        );
    }
}

// ─── predict ──────────────────────────────────────────────────────────────────
fn run_predict(args: PredictArgs, cfg: WorkflowConfig) -> Result<()> {
    let cfg = resolve(&args, cfg)?;
    let use_case = PredictUseCase::new(&cfg)?;
    print_predictions(&use_case.execute(&args.texts));
    Ok(())
}

fn print_predictions(predictions: &[(String, Prediction)]) {
    for (text, prediction) in predictions {
        println!("Input: '{text}'");
        println!(
            "--> Predicted Language: {} (p={:.3})\n",
            prediction.language, prediction.confidence
        );
    }
}
