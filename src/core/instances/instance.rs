use crate::core::value::FeatureValue;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An unlabeled row: feature name to categorical value. Features may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instance {
    values: BTreeMap<String, FeatureValue>,
}

impl Instance {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(
        mut self,
        feature: impl Into<String>,
        value: impl Into<FeatureValue>,
    ) -> Self {
        self.insert(feature, value);
        self
    }

    pub fn insert(
        &mut self,
        feature: impl Into<String>,
        value: impl Into<FeatureValue>,
    ) -> Option<FeatureValue> {
        self.values.insert(feature.into(), value.into())
    }

    pub fn value_of(&self, feature: &str) -> Option<&FeatureValue> {
        self.values.get(feature)
    }

    pub fn is_missing(&self, feature: &str) -> bool {
        !self.values.contains_key(feature)
    }

    pub fn number_of_attributes(&self) -> usize {
        self.values.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FeatureValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `"<feature>:<value>"` keys for every present feature, in feature-name order.
    pub fn composite_keys(&self) -> impl Iterator<Item = String> + '_ {
        self.values.iter().map(|(k, v)| v.composite_key(k))
    }
}

impl<K, V> FromIterator<(K, V)> for Instance
where
    K: Into<String>,
    V: Into<FeatureValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut instance = Instance::new();
        for (k, v) in iter {
            instance.insert(k, v);
        }
        instance
    }
}
