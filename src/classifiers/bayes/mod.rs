mod model;
mod model_store;
mod naive_bayes;
mod scorer;

pub use model::Model;
pub use model_store::{DEFAULT_MODEL_PATH, ModelStore};
pub use naive_bayes::NaiveBayes;
pub use scorer::Scorer;
