mod instance;
mod labeled_instance;

pub use instance::Instance;
pub use labeled_instance::LabeledInstance;
