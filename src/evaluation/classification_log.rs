use crate::classifiers::Classifier;
use crate::core::dataset::Dataset;
use crate::core::instance_header::InstanceHeader;
use crate::core::instances::Instance;
use crate::error::ClassifierError;
use crate::evaluation::EvaluationSummary;
use std::fs::File;
use std::io::{BufWriter, Error, Write};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_PATH: &str = "classification_log.txt";

/// Human-readable per-row record of a scoring pass, closed by the accuracy.
///
/// ```text
/// Features: {Outlook: Sunny, Temperature: Hot, Humidity: High, Wind: Weak}
/// Actual Class: No, Predicted Class: No
///
/// Accuracy: 92.86%
/// ```
pub struct ClassificationLog {
    path: PathBuf,
}

impl Default for ClassificationLog {
    fn default() -> Self {
        Self::new(DEFAULT_LOG_PATH)
    }
}

impl ClassificationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Scores every row of `dataset` with `classifier` and overwrites the log.
    /// The file is only touched once every prediction succeeded.
    pub fn write(
        &self,
        dataset: &Dataset,
        classifier: &dyn Classifier,
    ) -> Result<EvaluationSummary, ClassifierError> {
        let mut predictions = Vec::with_capacity(dataset.len());
        for record in dataset.iter() {
            predictions.push(classifier.predict(&record.instance)?);
        }

        let mut correct = 0u64;
        for (record, predicted) in dataset.iter().zip(&predictions) {
            if predicted.as_deref() == Some(record.class_value()) {
                correct += 1;
            }
        }
        let summary = EvaluationSummary::new(dataset.len() as u64, correct);

        self.export(dataset, &predictions, &summary)
            .map_err(|source| ClassifierError::Io {
                path: self.path.clone(),
                source,
            })?;

        log::info!(
            "wrote {} predictions to {} ({})",
            summary.instances_seen,
            self.path.display(),
            summary
        );
        Ok(summary)
    }

    fn export(
        &self,
        dataset: &Dataset,
        predictions: &[Option<String>],
        summary: &EvaluationSummary,
    ) -> Result<(), Error> {
        let mut w = BufWriter::new(File::create(&self.path)?);
        for (record, predicted) in dataset.iter().zip(predictions) {
            writeln!(
                w,
                "Features: {}",
                format_features(dataset.header(), &record.instance)
            )?;
            writeln!(
                w,
                "Actual Class: {}, Predicted Class: {}",
                record.class_value(),
                predicted.as_deref().unwrap_or("<none>")
            )?;
            writeln!(w)?;
        }
        writeln!(w, "{summary}")?;
        w.flush()
    }
}

/// Present features in header column order; absent ones are skipped.
pub(crate) fn format_features(header: &InstanceHeader, instance: &Instance) -> String {
    let parts: Vec<String> = header
        .attribute_names()
        .filter_map(|name| instance.value_of(name).map(|v| format!("{name}: {v}")))
        .collect();
    format!("{{{}}}", parts.join(", "))
}
