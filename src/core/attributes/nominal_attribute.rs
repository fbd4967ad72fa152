use std::collections::HashMap;

/// A categorical column together with every distinct token it took in a dataset,
/// kept in first-seen order.
#[derive(Debug, Clone, PartialEq)]
pub struct NominalAttribute {
    pub name: String,
    pub values: Vec<String>,
    pub label_to_index: HashMap<String, usize>,
}

impl NominalAttribute {
    pub fn new(name: String) -> NominalAttribute {
        NominalAttribute {
            name,
            values: Vec::new(),
            label_to_index: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registers `token` if unseen and returns its index.
    pub fn observe(&mut self, token: &str) -> usize {
        if let Some(&idx) = self.label_to_index.get(token) {
            return idx;
        }
        let idx = self.values.len();
        self.values.push(token.to_string());
        self.label_to_index.insert(token.to_string(), idx);
        idx
    }

    pub fn index_of_value(&self, token: &str) -> Option<usize> {
        self.label_to_index.get(token).copied()
    }

    pub fn number_of_values(&self) -> usize {
        self.values.len()
    }

    pub fn enumerate_values(&self) -> impl Iterator<Item = (usize, &String)> {
        self.values.iter().enumerate()
    }
}
