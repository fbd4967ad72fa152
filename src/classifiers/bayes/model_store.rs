use crate::classifiers::bayes::Model;
use crate::error::ClassifierError;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_MODEL_PATH: &str = "naive_bayes_model.json";

/// The JSON file that hands a fitted model from training to scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelStore {
    path: PathBuf,
}

impl Default for ModelStore {
    fn default() -> Self {
        Self::new(DEFAULT_MODEL_PATH)
    }
}

impl ModelStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Replaces the file atomically: the model is written to a sibling temp
    /// file which is then renamed over the target.
    pub fn save(&self, model: &Model) -> Result<(), ClassifierError> {
        let io_err = |source: std::io::Error| ClassifierError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        serde_json::to_writer_pretty(&mut tmp, model).map_err(|e| io_err(e.into()))?;
        writeln!(tmp).map_err(io_err)?;
        tmp.as_file().sync_all().map_err(io_err)?;
        tmp.persist(&self.path).map_err(|e| io_err(e.error))?;

        log::info!(
            "saved model with {} classes to {}",
            model.number_of_classes(),
            self.path.display()
        );
        Ok(())
    }

    pub fn load(&self) -> Result<Model, ClassifierError> {
        let raw = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ClassifierError::ModelNotFound {
                path: self.path.clone(),
            },
            _ => ClassifierError::Io {
                path: self.path.clone(),
                source,
            },
        })?;

        let corrupt = |reason: String| ClassifierError::ModelCorrupt {
            path: self.path.clone(),
            reason,
        };

        let model: Model = serde_json::from_str(&raw).map_err(|e| corrupt(e.to_string()))?;
        model.validate().map_err(corrupt)?;

        log::info!(
            "loaded model with {} classes from {}",
            model.number_of_classes(),
            self.path.display()
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::bayes::NaiveBayes;
    use crate::testing::dummies::play_tennis_dataset;
    use tempfile::tempdir;

    fn fitted() -> Model {
        NaiveBayes::estimate(&play_tennis_dataset()).unwrap()
    }

    #[test]
    fn default_store_points_at_well_known_file() {
        assert_eq!(ModelStore::default().path(), Path::new(DEFAULT_MODEL_PATH));
    }

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        let model = fitted();

        store.save(&model).unwrap();
        assert!(store.exists());
        assert_eq!(store.load().unwrap(), model);
    }

    #[test]
    fn save_overwrites_previous_model() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        fs::write(store.path(), "stale contents that are not json").unwrap();

        let model = fitted();
        store.save(&model).unwrap();
        assert_eq!(store.load().unwrap(), model);

        let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(leftovers.len(), 1);
    }

    #[test]
    fn load_missing_file_is_model_not_found() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("absent.json"));
        let err = store.load().unwrap_err();
        assert!(matches!(err, ClassifierError::ModelNotFound { ref path } if path == store.path()));
    }

    #[test]
    fn load_malformed_json_is_model_corrupt() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));

        for bad in [
            "{not json",
            r#"{"class_priors":{"Yes":1.0}}"#,
            r#"{"class_priors":{"Yes":"high"},"conditional_probabilities":{"Yes":{}}}"#,
            r#"{"class_priors":{"Yes":1.0},"conditional_probabilities":{"Yes":0.5}}"#,
            r#"{"class_priors":{"Yes":1.0},"conditional_probabilities":{}}"#,
        ] {
            fs::write(store.path(), bad).unwrap();
            let err = store.load().unwrap_err();
            assert!(
                matches!(err, ClassifierError::ModelCorrupt { .. }),
                "input {bad} gave {err:?}"
            );
        }
    }

    #[test]
    fn store_in_missing_directory_reports_io() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("nested/missing/model.json"));
        let err = store.save(&fitted()).unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
    }
}
