pub mod attribute_class_observers;
pub mod bayes;
pub mod classifier;

pub use classifier::{Classifier, Votes, argmax};
