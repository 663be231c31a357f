pub mod catalog;
pub mod error;
pub mod field;
pub mod report;
pub mod score;
pub mod submission;

pub use catalog::{CatalogEntry, LimitPrefixes, RuleCatalog};
pub use error::{IntakeError, Result};
pub use field::{FieldDescriptor, FieldRule};
pub use report::{FieldReport, FormReport, GatingDecision};
pub use score::{
    DomainScore, HYPERACTIVITY_FIELDS, INATTENTION_FIELDS, ITEMS_PER_DOMAIN, Interpretation,
    SIGNIFICANT_ITEM_COUNT, SYMPTOM_THRESHOLD, ScoreReport, SymptomResponses,
};
pub use submission::{Submission, VANDERBILT_FORM};
