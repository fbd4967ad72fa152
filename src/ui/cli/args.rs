use std::path::PathBuf;

use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand, ValueHint};
use serde_json::Value;

use crate::core::instances::Instance;
use crate::core::value::FeatureValue;
use crate::ui::types::Settings;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Train and query a categorical Naive Bayes classifier"
)]
pub struct Cli {
    /// JSON settings file (label_field, dataset_path, model_path, log_path)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Model file to write or read (overrides settings)
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub model: Option<PathBuf>,

    /// Name of the class column in the dataset (overrides settings)
    #[arg(long, global = true, value_name = "FIELD")]
    pub label: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fit a model on a JSON-lines dataset and persist it
    Train(TrainArgs),
    /// Classify one instance with the persisted model
    Predict(PredictArgs),
    /// Fit, then log predictions and accuracy for a test split
    Evaluate(EvaluateArgs),
    /// Train on the default dataset, classify the textbook instance, log the training pass
    Run,
}

#[derive(Debug, Args)]
pub struct TrainArgs {
    /// Dataset file, one JSON object per line
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    /// Feature values as KEY=VALUE
    #[arg(value_name = "KEY=VALUE", required = true, value_parser = parse_key_value)]
    pub features: Vec<KeyValue>,

    /// Also print the score of every class
    #[arg(long)]
    pub votes: bool,
}

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Dataset file, one JSON object per line
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub data: Option<PathBuf>,

    /// Classification log to write (overrides settings)
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log: Option<PathBuf>,

    /// Fraction of rows held out for testing; 0 scores the training rows
    #[arg(long, default_value_t = 0.0, value_name = "FRACTION")]
    pub holdout: f64,

    /// Seed for the holdout shuffle
    #[arg(long, default_value_t = 42, value_name = "N")]
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyValue {
    pub key: String,
    pub value: FeatureValue,
}

impl Cli {
    /// Settings file (or defaults) with command-line overrides applied.
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => Settings::from_file(path)?,
            None => Settings::default(),
        };
        if let Some(model) = &self.model {
            settings.model_path = model.clone();
        }
        if let Some(label) = &self.label {
            settings.label_field = label.clone();
        }
        match &self.command {
            Some(Command::Train(args)) => {
                if let Some(data) = &args.data {
                    settings.dataset_path = data.clone();
                }
            }
            Some(Command::Evaluate(args)) => {
                if let Some(data) = &args.data {
                    settings.dataset_path = data.clone();
                }
                if let Some(log) = &args.log {
                    settings.log_path = log.clone();
                }
            }
            Some(Command::Predict(_)) | Some(Command::Run) | None => {}
        }
        Ok(settings)
    }
}

impl PredictArgs {
    pub fn instance(&self) -> Instance {
        self.features
            .iter()
            .map(|kv| (kv.key.clone(), kv.value.clone()))
            .collect()
    }
}

fn parse_key_value(raw: &str) -> Result<KeyValue, String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| "expected KEY=VALUE".to_string())?;
    let key = key.trim();
    if key.is_empty() {
        return Err("key cannot be empty".to_string());
    }

    let value = parse_literal(value.trim()).map_err(|e| e.to_string())?;

    Ok(KeyValue {
        key: key.to_string(),
        value,
    })
}

fn parse_literal(raw: &str) -> Result<FeatureValue> {
    if raw.is_empty() {
        return Ok(FeatureValue::Text(String::new()));
    }

    let parsed = match serde_json::from_str::<Value>(raw) {
        Ok(v) => v,
        Err(_) => return Ok(FeatureValue::Text(raw.to_string())),
    };
    match FeatureValue::from_json(&parsed) {
        Ok(Some(v)) => Ok(v),
        Ok(None) => Err(anyhow!("value cannot be null")),
        Err(_) => Err(anyhow!("value '{raw}' is not categorical")),
    }
}
