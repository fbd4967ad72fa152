use crate::classifiers::attribute_class_observers::NominalAttributeClassObserver;
use crate::classifiers::bayes::{Model, ModelStore};
use crate::core::dataset::Dataset;
use crate::core::value::composite_key;
use crate::error::ClassifierError;
use std::collections::BTreeMap;

/// Fits a categorical Naive Bayes model and persists it through a [`ModelStore`].
#[derive(Debug, Clone, Default)]
pub struct NaiveBayes {
    store: ModelStore,
}

impl NaiveBayes {
    pub fn new(store: ModelStore) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Estimates the model and overwrites the persisted one. Nothing is written
    /// when estimation fails.
    pub fn fit(&self, dataset: &Dataset) -> Result<Model, ClassifierError> {
        let model = Self::estimate(dataset)?;
        self.store.save(&model)?;
        log::info!(
            "fitted {} rows of '{}' into {} classes",
            dataset.len(),
            dataset.header().relation_name(),
            model.number_of_classes()
        );
        Ok(model)
    }

    /// Priors are class frequencies. For every class `c` and feature `f`, each
    /// value `v` seen for `f` anywhere in the dataset gets
    /// `(count(f = v, c) + 1) / (n_c + |values of f|)`.
    pub fn estimate(dataset: &Dataset) -> Result<Model, ClassifierError> {
        if dataset.is_empty() {
            return Err(ClassifierError::EmptyDataset);
        }

        let header = dataset.header();
        let class_attribute = header.class_attribute();

        let mut observed_class_distribution = vec![0.0; header.number_of_classes()];
        let mut attribute_observers =
            vec![NominalAttributeClassObserver::new(); header.number_of_attributes()];

        for record in dataset.iter() {
            let Some(class_val) = class_attribute.index_of_value(record.class_value()) else {
                continue;
            };
            observed_class_distribution[class_val] += 1.0;

            for (att_index, attribute) in header.attributes.iter().enumerate() {
                let Some(value) = record.instance.value_of(attribute.name()) else {
                    continue;
                };
                if let Some(att_val) = attribute.index_of_value(&value.token()) {
                    attribute_observers[att_index].observe_attribute_class(att_val, class_val, 1.0);
                }
            }
        }

        let observed_class_sum: f64 = observed_class_distribution.iter().sum();
        let mut model = Model::default();

        for (class_val, label) in class_attribute.enumerate_values() {
            let class_weight = observed_class_distribution[class_val];
            model
                .class_priors
                .insert(label.clone(), class_weight / observed_class_sum);

            let mut table = BTreeMap::new();
            for (attribute, observer) in header.attributes.iter().zip(&attribute_observers) {
                let universe_size = attribute.number_of_values();
                for (att_val, token) in attribute.enumerate_values() {
                    if let Some(p) = observer.probability_of_attribute_value_given_class(
                        att_val,
                        class_val,
                        class_weight,
                        universe_size,
                    ) {
                        table.insert(composite_key(attribute.name(), token), p);
                    }
                }
            }
            model.conditional_probabilities.insert(label.clone(), table);
        }

        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::{play_tennis_dataset, play_tennis_rows};
    use serde_json::{Map, Value, json};
    use tempfile::tempdir;

    const EPS: f64 = 1e-12;

    fn approx(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    fn obj(v: Value) -> Map<String, Value> {
        match v {
            Value::Object(m) => m,
            _ => unreachable!(),
        }
    }

    #[test]
    fn priors_are_class_frequencies() {
        let m = NaiveBayes::estimate(&play_tennis_dataset()).unwrap();
        assert!(approx(m.prior("Yes").unwrap(), 9.0 / 14.0, EPS));
        assert!(approx(m.prior("No").unwrap(), 5.0 / 14.0, EPS));
        assert!(approx(m.class_priors.values().sum::<f64>(), 1.0, EPS));
    }

    #[test]
    fn conditionals_use_add_one_smoothing_over_global_values() {
        let m = NaiveBayes::estimate(&play_tennis_dataset()).unwrap();
        let no = &m.conditional_probabilities["No"];
        let yes = &m.conditional_probabilities["Yes"];

        assert!(approx(no["Outlook:Sunny"], 4.0 / 8.0, EPS));
        assert!(approx(no["Temperature:Cool"], 2.0 / 8.0, EPS));
        assert!(approx(no["Humidity:High"], 5.0 / 7.0, EPS));
        assert!(approx(no["Wind:Weak"], 3.0 / 7.0, EPS));
        // never co-occurs with No, still non-zero
        assert!(approx(no["Outlook:Overcast"], 1.0 / 8.0, EPS));

        assert!(approx(yes["Outlook:Sunny"], 3.0 / 12.0, EPS));
        assert!(approx(yes["Temperature:Cool"], 4.0 / 12.0, EPS));
        assert!(approx(yes["Humidity:High"], 4.0 / 11.0, EPS));
        assert!(approx(yes["Wind:Weak"], 7.0 / 11.0, EPS));
    }

    #[test]
    fn every_class_table_covers_every_global_value() {
        let ds = play_tennis_dataset();
        let m = NaiveBayes::estimate(&ds).unwrap();
        let expected_keys: usize = ds
            .header()
            .attributes
            .iter()
            .map(|a| a.number_of_values())
            .sum();
        for class in m.classes() {
            assert_eq!(m.conditional_probabilities[class].len(), expected_keys);
        }
    }

    #[test]
    fn conditionals_sum_to_one_per_class_and_feature() {
        let ds = play_tennis_dataset();
        let m = NaiveBayes::estimate(&ds).unwrap();
        for class in m.classes() {
            for attribute in &ds.header().attributes {
                let sum: f64 = attribute
                    .values
                    .iter()
                    .map(|v| {
                        m.conditional_probabilities[class][&composite_key(attribute.name(), v)]
                    })
                    .sum();
                assert!(approx(sum, 1.0, 1e-9), "{class}/{} sums to {sum}", attribute.name());
            }
        }
    }

    #[test]
    fn conditionals_lie_in_open_closed_unit_interval() {
        let m = NaiveBayes::estimate(&play_tennis_dataset()).unwrap();
        for table in m.conditional_probabilities.values() {
            for &p in table.values() {
                assert!(p > 0.0 && p <= 1.0);
            }
        }
        assert_eq!(m.validate(), Ok(()));
    }

    #[test]
    fn single_class_single_value_gives_probability_one() {
        let ds = Dataset::from_rows("y", vec![obj(json!({"a": "x", "y": "only"}))]).unwrap();
        let m = NaiveBayes::estimate(&ds).unwrap();
        assert_eq!(m.prior("only"), Some(1.0));
        assert_eq!(m.conditional_probabilities["only"]["a:x"], 1.0);
    }

    #[test]
    fn label_only_rows_give_empty_tables() {
        let ds =
            Dataset::from_rows("y", vec![obj(json!({"y": "a"})), obj(json!({"y": "b"}))]).unwrap();
        let m = NaiveBayes::estimate(&ds).unwrap();
        assert_eq!(m.number_of_classes(), 2);
        assert!(m.conditional_probabilities["a"].is_empty());
        assert!(m.conditional_probabilities["b"].is_empty());
        assert_eq!(m.validate(), Ok(()));
    }

    #[test]
    fn numeric_and_text_tokens_share_keys() {
        let ds = Dataset::from_rows(
            "y",
            vec![
                obj(json!({"size": 5, "y": "p"})),
                obj(json!({"size": "5", "y": "p"})),
                obj(json!({"size": 7, "y": "n"})),
            ],
        )
        .unwrap();
        assert_eq!(ds.header().attributes[0].number_of_values(), 2);

        let m = NaiveBayes::estimate(&ds).unwrap();
        assert!(approx(m.conditional_probabilities["p"]["size:5"], 3.0 / 4.0, EPS));
        assert!(approx(m.conditional_probabilities["p"]["size:7"], 1.0 / 4.0, EPS));
    }

    #[test]
    fn absent_features_do_not_count_but_class_size_does() {
        let ds = Dataset::from_rows(
            "y",
            vec![
                obj(json!({"a": "x", "y": "p"})),
                obj(json!({"a": null, "y": "p"})),
                obj(json!({"a": "z", "y": "n"})),
            ],
        )
        .unwrap();
        let m = NaiveBayes::estimate(&ds).unwrap();
        // n_p = 2 rows, |V(a)| = 2
        assert!(approx(m.conditional_probabilities["p"]["a:x"], 2.0 / 4.0, EPS));
        assert!(approx(m.conditional_probabilities["p"]["a:z"], 1.0 / 4.0, EPS));
    }

    #[test]
    fn empty_dataset_fails_and_writes_nothing() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        let nb = NaiveBayes::new(store.clone());

        let empty = Dataset::from_rows("PlayTennis", Vec::new()).unwrap();
        let err = nb.fit(&empty).unwrap_err();
        assert!(matches!(err, ClassifierError::EmptyDataset));
        assert!(!store.exists());
    }

    #[test]
    fn fit_persists_the_returned_model() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        let nb = NaiveBayes::new(store.clone());

        let model = nb.fit(&play_tennis_dataset()).unwrap();
        assert_eq!(store.load().unwrap(), model);
    }

    #[test]
    fn refit_replaces_instead_of_merging() {
        let dir = tempdir().unwrap();
        let store = ModelStore::new(dir.path().join("model.json"));
        let nb = NaiveBayes::new(store.clone());
        nb.fit(&play_tennis_dataset()).unwrap();

        let other = Dataset::from_rows(
            "PlayTennis",
            vec![obj(json!({"Outlook": "Rain", "PlayTennis": "Maybe"}))],
        )
        .unwrap();
        nb.fit(&other).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.classes().collect::<Vec<_>>(), vec!["Maybe"]);
        assert_eq!(loaded.conditional_probabilities["Maybe"].len(), 1);
    }

    #[test]
    fn estimate_is_deterministic_regardless_of_row_order() {
        let rows = play_tennis_rows();
        let mut reversed = rows.clone();
        reversed.reverse();
        let a = NaiveBayes::estimate(&Dataset::from_rows("PlayTennis", rows).unwrap()).unwrap();
        let b = NaiveBayes::estimate(&Dataset::from_rows("PlayTennis", reversed).unwrap()).unwrap();
        for class in a.classes() {
            assert!(approx(a.prior(class).unwrap(), b.prior(class).unwrap(), EPS));
            for (k, v) in &a.conditional_probabilities[class] {
                assert!(approx(*v, b.conditional_probabilities[class][k], EPS));
            }
        }
    }
}
