use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const PRIOR_SUM_TOLERANCE: f64 = 1e-6;

/// Learned Naive Bayes parameters, exactly as persisted.
///
/// `conditional_probabilities[class]["<feature>:<value>"]` holds the smoothed
/// P(feature = value | class). Both maps are ordered so the JSON form is stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Model {
    #[serde(alias = "class_prior_probabilities")]
    pub class_priors: BTreeMap<String, f64>,
    pub conditional_probabilities: BTreeMap<String, BTreeMap<String, f64>>,
}

impl Model {
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.class_priors.keys().map(String::as_str)
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_priors.len()
    }

    pub fn prior(&self, class: &str) -> Option<f64> {
        self.class_priors.get(class).copied()
    }

    /// Stored conditional for `key`, or the neutral factor 1 when the class or
    /// the key was never seen in training.
    pub fn conditional_or_neutral(&self, class: &str, key: &str) -> f64 {
        self.conditional_probabilities
            .get(class)
            .and_then(|table| table.get(key))
            .copied()
            .unwrap_or(1.0)
    }

    /// Checks the invariants a freshly fitted model satisfies; a failure
    /// describes the first violation found.
    pub fn validate(&self) -> Result<(), String> {
        if self.class_priors.is_empty() {
            return Err("model has no classes".to_string());
        }

        for (class, &p) in &self.class_priors {
            if !in_unit_interval(p) {
                return Err(format!("prior for class '{class}' is out of range: {p}"));
            }
            if !self.conditional_probabilities.contains_key(class) {
                return Err(format!("class '{class}' has no conditional table"));
            }
        }

        let total: f64 = self.class_priors.values().sum();
        if (total - 1.0).abs() > PRIOR_SUM_TOLERANCE {
            return Err(format!("class priors sum to {total}, expected 1"));
        }

        for (class, table) in &self.conditional_probabilities {
            if !self.class_priors.contains_key(class) {
                return Err(format!("conditional table for unknown class '{class}'"));
            }
            for (key, &p) in table {
                if !in_unit_interval(p) {
                    return Err(format!(
                        "conditional '{key}' for class '{class}' is out of range: {p}"
                    ));
                }
            }
        }

        Ok(())
    }
}

#[inline]
fn in_unit_interval(p: f64) -> bool {
    p.is_finite() && p > 0.0 && p <= 1.0
}
