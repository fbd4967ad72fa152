use crate::core::instances::Instance;

/// A training row: the feature values plus the class token.
#[derive(Debug, Clone, PartialEq)]
pub struct LabeledInstance {
    pub instance: Instance,
    pub label: String,
}

impl LabeledInstance {
    pub fn new(instance: Instance, label: impl Into<String>) -> Self {
        Self {
            instance,
            label: label.into(),
        }
    }

    pub fn class_value(&self) -> &str {
        &self.label
    }
}
