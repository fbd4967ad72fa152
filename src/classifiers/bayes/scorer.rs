use crate::classifiers::bayes::{Model, ModelStore};
use crate::classifiers::{Classifier, Votes, argmax};
use crate::core::instances::Instance;
use crate::error::ClassifierError;
use std::borrow::Cow;

enum ModelSource {
    Store(ModelStore),
    Loaded(Model),
}

/// Scores instances against a persisted model.
///
/// A scorer built with [`Scorer::new`] reloads the model from its store on
/// every call, so it always sees the latest fit. [`Scorer::with_model`] pins an
/// already loaded model, which is what batch evaluation wants.
pub struct Scorer {
    source: ModelSource,
}

impl Scorer {
    pub fn new(store: ModelStore) -> Self {
        Self {
            source: ModelSource::Store(store),
        }
    }

    pub fn with_model(model: Model) -> Self {
        Self {
            source: ModelSource::Loaded(model),
        }
    }

    fn model(&self) -> Result<Cow<'_, Model>, ClassifierError> {
        match &self.source {
            ModelSource::Store(store) => store.load().map(Cow::Owned),
            ModelSource::Loaded(model) => Ok(Cow::Borrowed(model)),
        }
    }

    /// Most probable label for `instance`; ties go to the smallest label.
    pub fn predict(&self, instance: &Instance) -> Result<String, ClassifierError> {
        self.predict_with_votes(instance).map(|(label, _)| label)
    }

    /// The winning label together with the scores it was chosen from, both
    /// taken from a single model load.
    pub fn predict_with_votes(
        &self,
        instance: &Instance,
    ) -> Result<(String, Votes), ClassifierError> {
        let model = self.model()?;
        let votes = Self::do_naive_bayes_prediction(instance, &model);
        let label = argmax(&votes)
            .map(str::to_string)
            .ok_or_else(|| ClassifierError::ModelCorrupt {
                path: self.path_hint(),
                reason: "model has no classes".to_string(),
            })?;
        Ok((label, votes))
    }

    fn path_hint(&self) -> std::path::PathBuf {
        match &self.source {
            ModelSource::Store(store) => store.path().to_path_buf(),
            ModelSource::Loaded(_) => std::path::PathBuf::from("<in-memory>"),
        }
    }

    /// `prior(c) * prod conditional(c, "f:v")` over the instance's pairs, with
    /// keys absent from the model contributing a factor of 1. Products are
    /// taken in linear space, so very wide instances can underflow to zero.
    pub fn do_naive_bayes_prediction(instance: &Instance, model: &Model) -> Votes {
        let keys: Vec<String> = instance.composite_keys().collect();

        let mut votes = Votes::new();
        for (class, &prior) in &model.class_priors {
            let mut score = prior;
            for key in &keys {
                score *= model.conditional_or_neutral(class, key);
            }
            log::debug!("score({class}) = {score:e}");
            votes.insert(class.clone(), score);
        }
        votes
    }
}

impl Classifier for Scorer {
    fn get_votes_for_instance(&self, instance: &Instance) -> Result<Votes, ClassifierError> {
        let model = self.model()?;
        Ok(Self::do_naive_bayes_prediction(instance, &model))
    }
}
