use serde::{Deserialize, Serialize};

/// Validation outcome for a single field: zero or more display messages,
/// in check order. The first entry is the primary message for inline UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldReport {
    pub field: String,
    pub errors: Vec<String>,
}

impl FieldReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validation outcome for a whole form, one entry per field in document
/// order. Re-evaluating the same inputs yields an identical report.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FormReport {
    pub form: String,
    pub fields: Vec<FieldReport>,
}

impl FormReport {
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: form.into(),
            fields: Vec::new(),
        }
    }

    pub fn add(&mut self, field: FieldReport) {
        self.fields.push(field);
    }

    /// The form is valid iff every field's error list is empty.
    pub fn is_valid(&self) -> bool {
        self.fields.iter().all(FieldReport::is_valid)
    }

    /// First field in document order with a non-empty error list. Used by
    /// the UI layer to direct attention (scrolling); strictly traversal
    /// order, never severity.
    pub fn first_invalid(&self) -> Option<&FieldReport> {
        self.fields.iter().find(|field| !field.is_valid())
    }

    pub fn invalid_count(&self) -> usize {
        self.fields.iter().filter(|field| !field.is_valid()).count()
    }

    pub fn error_count(&self) -> usize {
        self.fields.iter().map(|field| field.errors.len()).sum()
    }
}

/// Whether the caller should block the submission, and where to send the
/// user. The engine only reports; the submission decision belongs to the
/// caller consuming this value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatingDecision {
    pub block_submission: bool,
    pub first_invalid_field: Option<String>,
}
