use crate::classifiers::bayes::{NaiveBayes, Scorer};
use crate::core::dataset::Dataset;
use crate::error::{ClassifierError, DatasetError};
use crate::evaluation::{ClassificationLog, EvaluationSummary};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

/// Fit on one part of a dataset, reload the persisted model, and log
/// predictions for the other part.
///
/// With a holdout of `0.0` the whole dataset is used for both sides.
pub struct HoldoutEvaluator {
    learner: NaiveBayes,
    log: ClassificationLog,
    holdout: f64,
    seed: u64,
}

impl HoldoutEvaluator {
    pub fn new(
        learner: NaiveBayes,
        log: ClassificationLog,
        holdout: f64,
        seed: u64,
    ) -> Result<Self, TaskError> {
        if !(0.0..1.0).contains(&holdout) {
            return Err(DatasetError::InvalidHoldout(holdout).into());
        }
        Ok(Self {
            learner,
            log,
            holdout,
            seed,
        })
    }

    pub fn run(&self, dataset: &Dataset) -> Result<EvaluationSummary, TaskError> {
        let (train, test) = if self.holdout == 0.0 {
            log::warn!("no holdout requested, scoring on the training rows");
            (dataset.clone(), dataset.clone())
        } else {
            dataset.split(self.holdout, self.seed)?
        };

        log::info!(
            "evaluating with {} training and {} test rows (seed {})",
            train.len(),
            test.len(),
            self.seed
        );

        self.learner.fit(&train)?;
        let scorer = Scorer::with_model(self.learner.store().load()?);
        Ok(self.log.write(&test, &scorer)?)
    }
}
