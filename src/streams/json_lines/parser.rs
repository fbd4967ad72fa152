use crate::core::instance_header::InstanceHeader;
use crate::core::instances::{Instance, LabeledInstance};
use crate::core::value::FeatureValue;
use crate::error::{ClassifierError, DatasetError};
use serde_json::{Map, Value};
use std::io::BufRead;

pub(crate) fn is_comment_or_empty(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t.starts_with('#') || t.starts_with("//")
}

/// Reads one JSON object per line, declaring feature columns on `header` in the
/// order their keys first appear. `line` numbers in errors are 1-based.
pub(crate) fn read_records<R: BufRead>(
    reader: R,
    header: &mut InstanceHeader,
) -> Result<Vec<LabeledInstance>, DatasetError> {
    let label_field = header.label_field().to_string();
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if is_comment_or_empty(&line) {
            continue;
        }
        let map = parse_object_line(&line, idx + 1)?;
        for name in feature_names_in_order(&map, &label_field) {
            header.declare_feature(name);
        }
        records.push(record_from_map(&map, idx + 1, &label_field)?);
    }
    Ok(records)
}

pub(crate) fn parse_object_line(
    line: &str,
    line_no: usize,
) -> Result<Map<String, Value>, DatasetError> {
    let value: Value = serde_json::from_str(line.trim()).map_err(|source| DatasetError::Parse {
        line: line_no,
        source,
    })?;
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(DatasetError::NotAnObject { line: line_no }),
    }
}

#[cfg(test)]
fn parse_record_line(
    line: &str,
    line_no: usize,
    label_field: &str,
) -> Result<LabeledInstance, DatasetError> {
    let map = parse_object_line(line, line_no)?;
    record_from_map(&map, line_no, label_field)
}

/// Splits a JSON object into features and label. `null` features are dropped.
pub(crate) fn record_from_map(
    map: &Map<String, Value>,
    line_no: usize,
    label_field: &str,
) -> Result<LabeledInstance, DatasetError> {
    let unsupported = |field: &str| DatasetError::UnsupportedValue {
        line: line_no,
        field: field.to_string(),
    };

    let label = match map.get(label_field) {
        Some(raw) => FeatureValue::from_json(raw).map_err(|_| unsupported(label_field))?,
        None => None,
    };
    let Some(label) = label else {
        return Err(DatasetError::Schema {
            line: line_no,
            source: ClassifierError::UnknownFeatureSchema {
                field: label_field.to_string(),
            },
        });
    };

    let mut instance = Instance::new();
    for (name, raw) in map {
        if name == label_field {
            continue;
        }
        if let Some(v) = FeatureValue::from_json(raw).map_err(|_| unsupported(name))? {
            instance.insert(name.clone(), v);
        }
    }

    Ok(LabeledInstance::new(instance, label.token()))
}

/// Names of the non-label keys of a row, in the order they appear in the line.
pub(crate) fn feature_names_in_order<'a>(
    map: &'a Map<String, Value>,
    label_field: &'a str,
) -> impl Iterator<Item = &'a str> {
    map.keys().map(String::as_str).filter(move |k| *k != label_field)
}
