use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A categorical token read from a dataset row or a prediction request.
///
/// Equality, ordering of keys and hashing all go through [`FeatureValue::token`],
/// so `5`, `5.0` and `"5"` are the same category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FeatureValue {
    Boolean(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Text(String),
}

/// Returned when a JSON value cannot be used as a categorical token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotCategorical;

impl FeatureValue {
    pub fn token(&self) -> String {
        match self {
            FeatureValue::Boolean(b) => b.to_string(),
            FeatureValue::Integer(n) => n.to_string(),
            FeatureValue::Unsigned(n) => n.to_string(),
            FeatureValue::Float(x) => format!("{x}"),
            FeatureValue::Text(s) => s.clone(),
        }
    }

    /// `Ok(None)` for JSON `null`, which marks the value as absent.
    pub fn from_json(value: &Value) -> Result<Option<Self>, NotCategorical> {
        match value {
            Value::Null => Ok(None),
            Value::Bool(b) => Ok(Some(FeatureValue::Boolean(*b))),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Some(FeatureValue::Integer(i)))
                } else if let Some(u) = n.as_u64() {
                    Ok(Some(FeatureValue::Unsigned(u)))
                } else if let Some(x) = n.as_f64() {
                    Ok(Some(FeatureValue::Float(x)))
                } else {
                    Err(NotCategorical)
                }
            }
            Value::String(s) => Ok(Some(FeatureValue::Text(s.clone()))),
            Value::Array(_) | Value::Object(_) => Err(NotCategorical),
        }
    }

    /// Builds the `"<feature>:<value>"` lookup key shared by training and scoring.
    #[inline]
    pub fn composite_key(&self, feature: &str) -> String {
        composite_key(feature, &self.token())
    }
}

#[inline]
pub fn composite_key(feature: &str, token: &str) -> String {
    format!("{feature}:{token}")
}

impl PartialEq for FeatureValue {
    fn eq(&self, other: &Self) -> bool {
        self.token() == other.token()
    }
}

impl Eq for FeatureValue {}

impl Hash for FeatureValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.token().hash(state)
    }
}

impl fmt::Display for FeatureValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token())
    }
}

impl From<&str> for FeatureValue {
    fn from(value: &str) -> Self {
        FeatureValue::Text(value.to_string())
    }
}

impl From<String> for FeatureValue {
    fn from(value: String) -> Self {
        FeatureValue::Text(value)
    }
}

impl From<i64> for FeatureValue {
    fn from(value: i64) -> Self {
        FeatureValue::Integer(value)
    }
}

impl From<u64> for FeatureValue {
    fn from(value: u64) -> Self {
        FeatureValue::Unsigned(value)
    }
}

impl From<f64> for FeatureValue {
    fn from(value: f64) -> Self {
        FeatureValue::Float(value)
    }
}

impl From<bool> for FeatureValue {
    fn from(value: bool) -> Self {
        FeatureValue::Boolean(value)
    }
}
