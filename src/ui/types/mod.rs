mod settings;

pub use settings::{DEFAULT_DATASET_PATH, DEFAULT_LABEL_FIELD, Settings};
