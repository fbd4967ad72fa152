mod holdout_evaluator;

pub use holdout_evaluator::{HoldoutEvaluator, TaskError};
