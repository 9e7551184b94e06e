// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Defines the four subcommands: `inspect`, `clean`, `train`
// and `predict`, and their flags.
//
// Every flag is optional: when absent, the value comes from the
// --config file or the built-in defaults (see WorkflowConfig).
//
// Reference: Rust Book §12 (Building a CLI Program)

use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::application::config::WorkflowConfig;

/// The top-level subcommands available to the user
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a preview and data-quality checks for the raw dataset
    Inspect(InspectArgs),

    /// Normalise the raw dataset into the cleaned Text,Language file
    Clean(CleanArgs),

    /// Train, evaluate and save a model, then run the sample predictions
    Train(TrainArgs),

    /// Predict the language of texts with a saved model
    Predict(PredictArgs),
}

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Raw CSV with Text and Language columns
    #[arg(long)]
    pub raw_data: Option<PathBuf>,

    /// Number of rows to preview
    #[arg(long)]
    pub preview_rows: Option<usize>,

    /// Number of languages to list in the distribution
    #[arg(long)]
    pub top_languages: Option<usize>,
}

#[derive(Args, Debug)]
pub struct CleanArgs {
    /// Raw CSV with Text and Language columns
    #[arg(long)]
    pub raw_data: Option<PathBuf>,

    /// Destination for the cleaned CSV (overwritten)
    #[arg(long)]
    pub cleaned_data: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct TrainArgs {
    /// Cleaned CSV produced by `clean`
    #[arg(long)]
    pub cleaned_data: Option<PathBuf>,

    /// Where to write the model artifact (overwritten)
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Fraction of rows held out for testing
    #[arg(long)]
    pub test_fraction: Option<f64>,

    /// Seed for the train/test shuffle
    #[arg(long)]
    pub seed: Option<u64>,

    /// Naive Bayes additive smoothing
    #[arg(long)]
    pub alpha: Option<f64>,

    /// Largest n-gram size fed to the vectorizer
    #[arg(long)]
    pub ngram_max: Option<usize>,
}

#[derive(Args, Debug)]
pub struct PredictArgs {
    /// Saved model artifact
    #[arg(long)]
    pub model: Option<PathBuf>,

    /// Text to classify (repeatable); the sample sentences are used when omitted
    #[arg(long = "text")]
    pub texts: Vec<String>,
}

/// Copy every flag the user actually passed onto the config.
pub trait ApplyOverrides {
    fn apply(&self, cfg: &mut WorkflowConfig);
}

impl ApplyOverrides for InspectArgs {
    fn apply(&self, cfg: &mut WorkflowConfig) {
        if let Some(p) = &self.raw_data     { cfg.raw_data_path = p.clone(); }
        if let Some(n) = self.preview_rows  { cfg.preview_rows  = n; }
        if let Some(n) = self.top_languages { cfg.top_languages = n; }
    }
}

impl ApplyOverrides for CleanArgs {
    fn apply(&self, cfg: &mut WorkflowConfig) {
        if let Some(p) = &self.raw_data     { cfg.raw_data_path     = p.clone(); }
        if let Some(p) = &self.cleaned_data { cfg.cleaned_data_path = p.clone(); }
    }
}

impl ApplyOverrides for TrainArgs {
    fn apply(&self, cfg: &mut WorkflowConfig) {
        if let Some(p) = &self.cleaned_data { cfg.cleaned_data_path = p.clone(); }
        if let Some(p) = &self.model        { cfg.model_path        = p.clone(); }
        if let Some(f) = self.test_fraction { cfg.test_fraction     = f; }
        if let Some(s) = self.seed          { cfg.seed              = s; }
        if let Some(a) = self.alpha         { cfg.alpha             = a; }
        if let Some(n) = self.ngram_max     { cfg.ngram_max         = n; }
    }
}

impl ApplyOverrides for PredictArgs {
    fn apply(&self, cfg: &mut WorkflowConfig) {
        if let Some(p) = &self.model { cfg.model_path = p.clone(); }
    }
}
