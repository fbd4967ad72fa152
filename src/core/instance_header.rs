use crate::core::attributes::NominalAttribute;
use std::fmt;

/// Schema of a labeled dataset: the feature columns in first-seen order and the
/// class column, each with the full set of tokens observed across all rows.
#[derive(Clone, PartialEq)]
pub struct InstanceHeader {
    relation_name: String,
    pub attributes: Vec<NominalAttribute>,
    class_attribute: NominalAttribute,
}

impl InstanceHeader {
    pub fn new(relation_name: String, label_field: String) -> InstanceHeader {
        InstanceHeader {
            relation_name,
            attributes: Vec::new(),
            class_attribute: NominalAttribute::new(label_field),
        }
    }

    pub fn relation_name(&self) -> &str {
        &self.relation_name
    }

    pub fn label_field(&self) -> &str {
        self.class_attribute.name()
    }

    pub fn class_attribute(&self) -> &NominalAttribute {
        &self.class_attribute
    }

    pub fn number_of_attributes(&self) -> usize {
        self.attributes.len()
    }

    pub fn number_of_classes(&self) -> usize {
        self.class_attribute.number_of_values()
    }

    pub fn index_of_attribute(&self, name: &str) -> Option<usize> {
        self.attributes.iter().position(|a| a.name() == name)
    }

    pub fn attribute_names(&self) -> impl Iterator<Item = &str> {
        self.attributes.iter().map(|a| a.name())
    }

    pub(crate) fn observe_class(&mut self, token: &str) -> usize {
        self.class_attribute.observe(token)
    }

    /// Registers `token` under feature `name`, appending the column if new.
    pub(crate) fn observe_feature(&mut self, name: &str, token: &str) -> usize {
        let idx = match self.index_of_attribute(name) {
            Some(idx) => idx,
            None => {
                self.attributes.push(NominalAttribute::new(name.to_string()));
                self.attributes.len() - 1
            }
        };
        self.attributes[idx].observe(token)
    }

    /// Ensures a column exists even when every row leaves it empty.
    pub(crate) fn declare_feature(&mut self, name: &str) {
        if self.index_of_attribute(name).is_none() {
            self.attributes.push(NominalAttribute::new(name.to_string()));
        }
    }
}

impl fmt::Debug for InstanceHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InstanceHeader")
            .field("relation_name", &self.relation_name)
            .field("label_field", &self.label_field())
            .field("n_attributes", &self.attributes.len())
            .field("n_classes", &self.number_of_classes())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observe_feature_appends_columns_in_first_seen_order() {
        let mut h = InstanceHeader::new("weather".into(), "PlayTennis".into());
        h.observe_feature("Outlook", "Sunny");
        h.observe_feature("Wind", "Weak");
        h.observe_feature("Outlook", "Rain");
        h.declare_feature("Humidity");

        let names: Vec<_> = h.attribute_names().collect();
        assert_eq!(names, vec!["Outlook", "Wind", "Humidity"]);
        assert_eq!(h.attributes[0].number_of_values(), 2);
        assert_eq!(h.attributes[2].number_of_values(), 0);
        assert_eq!(h.index_of_attribute("Wind"), Some(1));
        assert_eq!(h.index_of_attribute("PlayTennis"), None);
    }

    #[test]
    fn classes_are_tracked_on_the_label_column() {
        let mut h = InstanceHeader::new("weather".into(), "PlayTennis".into());
        assert_eq!(h.observe_class("No"), 0);
        assert_eq!(h.observe_class("Yes"), 1);
        assert_eq!(h.observe_class("No"), 0);
        assert_eq!(h.number_of_classes(), 2);
        assert_eq!(h.label_field(), "PlayTennis");
        assert_eq!(h.relation_name(), "weather");
    }
}
