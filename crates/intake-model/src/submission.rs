use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::field::FieldDescriptor;

/// Form identifier for the Vanderbilt assessment questionnaire.
pub const VANDERBILT_FORM: &str = "vanderbilt";

/// One parsed form submission: which form it came from and the submitted
/// fields in document order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Submission {
    pub form: String,
    pub fields: Vec<FieldDescriptor>,
}

impl Submission {
    pub fn is_vanderbilt(&self) -> bool {
        self.form == VANDERBILT_FORM
    }

    /// Raw name -> value pairs, for consumers that address fields by name
    /// (the scorer, the report formatter). Later duplicates win, matching
    /// how repeated request parameters overwrite each other.
    pub fn answers(&self) -> BTreeMap<&str, &str> {
        self.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str()))
            .collect()
    }

    /// Value of a named field, or the empty string when absent. Absent
    /// optional data defaults rather than erroring.
    pub fn answer(&self, name: &str) -> &str {
        self.fields
            .iter()
            .rev()
            .find(|field| field.name == name)
            .map(|field| field.value.as_str())
            .unwrap_or("")
    }
}
