/// Per-class value counts for one categorical feature.
///
/// Value and class indices are the ones assigned by the dataset header, so the
/// smoothing universe is the header's value count for the feature, not the
/// values this observer happened to see for a given class.
#[derive(Debug, Clone, Default)]
pub struct NominalAttributeClassObserver {
    attribute_value_distribution_per_class: Vec<Vec<f64>>,
}

impl NominalAttributeClassObserver {
    pub fn new() -> NominalAttributeClassObserver {
        NominalAttributeClassObserver {
            attribute_value_distribution_per_class: Vec::new(),
        }
    }

    #[inline]
    fn ensure_class(&mut self, class_val: usize) {
        if class_val >= self.attribute_value_distribution_per_class.len() {
            self.attribute_value_distribution_per_class
                .resize_with(class_val + 1, Vec::new);
        }
    }

    #[inline]
    fn ensure_value(&mut self, class_val: usize, att_val: usize) {
        self.ensure_class(class_val);
        let row = &mut self.attribute_value_distribution_per_class[class_val];
        if att_val >= row.len() {
            row.resize(att_val + 1, 0.0);
        }
    }

    pub fn observe_attribute_class(&mut self, att_val: usize, class_val: usize, weight: f64) {
        self.ensure_value(class_val, att_val);
        self.attribute_value_distribution_per_class[class_val][att_val] += weight;
    }

    pub fn count(&self, att_val: usize, class_val: usize) -> f64 {
        self.attribute_value_distribution_per_class
            .get(class_val)
            .and_then(|row| row.get(att_val))
            .copied()
            .unwrap_or(0.0)
    }

    /// Add-one estimate `(count + 1) / (class_weight + universe_size)`.
    ///
    /// `class_weight` is the number of rows of the class, `universe_size` the
    /// number of distinct values of the feature over the whole dataset.
    pub fn probability_of_attribute_value_given_class(
        &self,
        att_val: usize,
        class_val: usize,
        class_weight: f64,
        universe_size: usize,
    ) -> Option<f64> {
        if universe_size == 0 || att_val >= universe_size {
            return None;
        }
        let count = self.count(att_val, class_val);
        Some((count + 1.0) / (class_weight + universe_size as f64))
    }
}
