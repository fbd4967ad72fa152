mod parser;

pub(crate) use parser::{feature_names_in_order, read_records, record_from_map};
