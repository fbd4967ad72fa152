use crate::core::instance_header::InstanceHeader;
use crate::core::instances::LabeledInstance;
use crate::error::DatasetError;
use crate::streams::json_lines::{feature_names_in_order, read_records, record_from_map};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// A labeled dataset held fully in memory. The header carries the value
/// universe of every feature computed over exactly these records.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: InstanceHeader,
    records: Vec<LabeledInstance>,
}

impl Dataset {
    pub fn from_json_lines<P: AsRef<Path>>(
        path: P,
        label_field: &str,
    ) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let relation = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "unnamed_relation".to_string());
        let reader = BufReader::new(File::open(path)?);
        Self::from_reader(reader, relation, label_field)
    }

    pub fn from_reader<R: BufRead>(
        reader: R,
        relation: String,
        label_field: &str,
    ) -> Result<Self, DatasetError> {
        let mut header = InstanceHeader::new(relation, label_field.to_string());
        let records = read_records(reader, &mut header)?;
        Ok(Self::with_header(header, records))
    }

    /// Builds a dataset from in-memory JSON objects, with the same rules as
    /// [`Dataset::from_json_lines`]. Row numbers in errors are 1-based.
    pub fn from_rows<I>(label_field: &str, rows: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = Map<String, Value>>,
    {
        let mut header = InstanceHeader::new("in_memory".to_string(), label_field.to_string());
        let mut records = Vec::new();
        for (idx, row) in rows.into_iter().enumerate() {
            for name in feature_names_in_order(&row, label_field) {
                header.declare_feature(name);
            }
            records.push(record_from_map(&row, idx + 1, label_field)?);
        }
        Ok(Self::with_header(header, records))
    }

    /// `header` supplies the relation, label field and column order; value
    /// universes are recomputed from `records`.
    fn with_header(template: InstanceHeader, records: Vec<LabeledInstance>) -> Self {
        let mut header = InstanceHeader::new(
            template.relation_name().to_string(),
            template.label_field().to_string(),
        );
        for name in template.attribute_names() {
            header.declare_feature(name);
        }
        for record in &records {
            header.observe_class(record.class_value());
            for (name, value) in record.instance.iter() {
                header.observe_feature(name, &value.token());
            }
        }
        Dataset { header, records }
    }

    pub fn header(&self) -> &InstanceHeader {
        &self.header
    }

    pub fn records(&self) -> &[LabeledInstance] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &LabeledInstance> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Shuffles with a seeded RNG and moves `round(len * holdout)` rows to the
    /// second dataset. The first one keeps at least one row when any exist.
    pub fn split(&self, holdout: f64, seed: u64) -> Result<(Dataset, Dataset), DatasetError> {
        if !(0.0..1.0).contains(&holdout) {
            return Err(DatasetError::InvalidHoldout(holdout));
        }

        let mut indices: Vec<usize> = (0..self.records.len()).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        indices.shuffle(&mut rng);

        let n_test = ((self.records.len() as f64) * holdout).round() as usize;
        let n_test = n_test.min(self.records.len().saturating_sub(1));
        let (test_idx, train_idx) = indices.split_at(n_test);

        let pick = |idx: &[usize]| -> Vec<LabeledInstance> {
            let mut sorted = idx.to_vec();
            sorted.sort_unstable();
            sorted.into_iter().map(|i| self.records[i].clone()).collect()
        };

        Ok((
            Self::with_header(self.header.clone(), pick(train_idx)),
            Self::with_header(self.header.clone(), pick(test_idx)),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ClassifierError;
    use crate::testing::dummies::{play_tennis_dataset, play_tennis_rows};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn play_tennis_header_has_four_features_and_two_classes() {
        let ds = play_tennis_dataset();
        assert_eq!(ds.len(), 14);
        let names: Vec<_> = ds.header().attribute_names().collect();
        assert_eq!(names, vec!["Outlook", "Temperature", "Humidity", "Wind"]);
        assert_eq!(ds.header().number_of_classes(), 2);
        assert_eq!(ds.header().attributes[0].number_of_values(), 3);
        assert_eq!(ds.header().label_field(), "PlayTennis");
    }

    #[test]
    fn from_json_lines_reads_file_and_names_relation() {
        let mut tf = NamedTempFile::with_suffix(".json").unwrap();
        for row in play_tennis_rows() {
            writeln!(tf, "{}", Value::Object(row)).unwrap();
        }
        tf.flush().unwrap();

        let ds = Dataset::from_json_lines(tf.path(), "PlayTennis").unwrap();
        assert_eq!(ds.len(), 14);
        let stem = tf.path().file_stem().unwrap().to_string_lossy().into_owned();
        assert_eq!(ds.header().relation_name(), stem);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Dataset::from_json_lines("no/such/data.json", "PlayTennis").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }

    #[test]
    fn from_rows_reports_unknown_label_column() {
        let rows = vec![obj(json!({"a": "x", "y": "p"})), obj(json!({"a": "z"}))];
        let err = Dataset::from_rows("y", rows).unwrap_err();
        match err {
            DatasetError::Schema {
                line: 2,
                source: ClassifierError::UnknownFeatureSchema { field },
            } => assert_eq!(field, "y"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let ds = Dataset::from_rows("y", Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.header().number_of_attributes(), 0);
    }

    #[test]
    fn split_is_deterministic_and_partitions_rows() {
        let ds = play_tennis_dataset();
        let (train_a, test_a) = ds.split(0.3, 7).unwrap();
        let (train_b, test_b) = ds.split(0.3, 7).unwrap();

        assert_eq!(test_a.len(), 4);
        assert_eq!(train_a.len(), 10);
        assert_eq!(train_a.records(), train_b.records());
        assert_eq!(test_a.records(), test_b.records());

        let mut all: Vec<_> = train_a.iter().chain(test_a.iter()).cloned().collect();
        let mut orig: Vec<_> = ds.records().to_vec();
        let key = |r: &LabeledInstance| format!("{:?}", r);
        all.sort_by_key(key);
        orig.sort_by_key(key);
        assert_eq!(all, orig);
    }

    #[test]
    fn split_keeps_column_order_and_recomputes_universes() {
        let ds = play_tennis_dataset();
        let (train, _) = ds.split(0.5, 1).unwrap();
        let names: Vec<_> = train.header().attribute_names().collect();
        assert_eq!(names, vec!["Outlook", "Temperature", "Humidity", "Wind"]);
        let observed: usize = train
            .header()
            .attributes
            .iter()
            .map(|a| a.number_of_values())
            .sum();
        let full: usize = ds.header().attributes.iter().map(|a| a.number_of_values()).sum();
        assert!(observed <= full);
    }

    #[test]
    fn split_zero_keeps_everything_for_training() {
        let ds = play_tennis_dataset();
        let (train, test) = ds.split(0.0, 3).unwrap();
        assert_eq!(train.len(), 14);
        assert!(test.is_empty());
    }

    #[test]
    fn split_rejects_out_of_range_fraction() {
        let ds = play_tennis_dataset();
        assert!(matches!(ds.split(1.0, 0), Err(DatasetError::InvalidHoldout(_))));
        assert!(matches!(ds.split(-0.1, 0), Err(DatasetError::InvalidHoldout(_))));
    }
}
