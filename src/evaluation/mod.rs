mod classification_log;
mod summary;

pub use classification_log::{ClassificationLog, DEFAULT_LOG_PATH};
pub use summary::EvaluationSummary;
