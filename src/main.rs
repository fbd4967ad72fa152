use anyhow::{Context, Result};
use clap::Parser;

use tennis_bayes::classifiers::bayes::{NaiveBayes, Scorer};
use tennis_bayes::core::dataset::Dataset;
use tennis_bayes::core::instances::Instance;
use tennis_bayes::tasks::HoldoutEvaluator;
use tennis_bayes::ui::cli::args::{Cli, Command, EvaluateArgs, PredictArgs};
use tennis_bayes::ui::types::Settings;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const FG_CYAN: &str = "\x1b[36m";
const FG_GREY: &str = "\x1b[90m";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let settings = cli.settings().context("failed to resolve settings")?;

    match &cli.command {
        Some(Command::Train(_)) => {
            print_header("Train", &settings);
            train(&settings)?;
        }
        Some(Command::Predict(args)) => predict(&settings, args)?,
        Some(Command::Evaluate(args)) => {
            print_header("Evaluate", &settings);
            evaluate(&settings, args)?;
        }
        Some(Command::Run) | None => {
            print_header("Naive Bayes", &settings);
            run_reference(&settings)?;
        }
    }

    Ok(())
}

fn load_dataset(settings: &Settings) -> Result<Dataset> {
    Dataset::from_json_lines(&settings.dataset_path, &settings.label_field).with_context(|| {
        format!(
            "failed to load dataset from {}",
            settings.dataset_path.display()
        )
    })
}

fn train(settings: &Settings) -> Result<()> {
    let dataset = load_dataset(settings)?;
    let model = NaiveBayes::new(settings.model_store())
        .fit(&dataset)
        .context("training failed")?;
    println!(
        "Trained on {} rows, {} classes, model saved to {}",
        dataset.len(),
        model.number_of_classes(),
        settings.model_path.display()
    );
    Ok(())
}

fn predict(settings: &Settings, args: &PredictArgs) -> Result<()> {
    let scorer = Scorer::new(settings.model_store());
    let (label, votes) = scorer
        .predict_with_votes(&args.instance())
        .context("prediction failed")?;
    println!("Predicted class: {label}");

    if args.votes {
        for (class, score) in &votes {
            println!("  {class}: {score:e}");
        }
    }
    Ok(())
}

fn evaluate(settings: &Settings, args: &EvaluateArgs) -> Result<()> {
    let dataset = load_dataset(settings)?;
    let summary = HoldoutEvaluator::new(
        NaiveBayes::new(settings.model_store()),
        settings.classification_log(),
        args.holdout,
        args.seed,
    )
    .context("failed to construct HoldoutEvaluator")?
    .run(&dataset)
    .context("evaluation failed")?;

    println!("{summary}");
    Ok(())
}

/// Train on the dataset, classify the textbook day, then log the training pass.
fn run_reference(settings: &Settings) -> Result<()> {
    let dataset = load_dataset(settings)?;
    let learner = NaiveBayes::new(settings.model_store());
    learner.fit(&dataset).context("training failed")?;

    let scorer = Scorer::new(settings.model_store());
    let day = Instance::new()
        .with_value("Outlook", "Sunny")
        .with_value("Temperature", "Cool")
        .with_value("Humidity", "High")
        .with_value("Wind", "Weak");
    let label = scorer.predict(&day).context("prediction failed")?;
    println!("Predicted class: {label}");

    let log = settings.classification_log();
    let summary = log
        .write(&dataset, &scorer)
        .with_context(|| format!("failed to write {}", log.path().display()))?;
    println!("{summary}");
    Ok(())
}

fn print_header(title: &str, settings: &Settings) {
    println!("{BOLD}{FG_CYAN}▶ {title}{RESET}");
    println!(
        "{DIM}label={}{RESET}  {DIM}model={}{RESET}  {}",
        settings.label_field,
        settings.model_path.display(),
        timestamp_now()
    );
    println!(
        "{FG_GREY}────────────────────────────────────────────────────────────────────────{RESET}"
    );
}

fn timestamp_now() -> String {
    use chrono::{Local, SecondsFormat};
    let now = Local::now();
    format!(
        "{DIM}{}{}",
        now.to_rfc3339_opts(SecondsFormat::Secs, true),
        RESET
    )
}
