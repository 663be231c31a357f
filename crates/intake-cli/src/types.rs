use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use intake_model::{
    FieldRule, FormReport, GatingDecision, IntakeError, LimitPrefixes, Result, RuleCatalog,
    ScoreReport, Submission,
};
use intake_report::NotificationMessage;

/// On-disk submission bundle: the validation configuration supplied by the
/// configuration collaborator plus one parsed submission.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmissionBundle {
    #[serde(default)]
    pub catalog: RuleCatalog,
    #[serde(default)]
    pub prefixes: LimitPrefixes,
    pub submission: Submission,
}

impl SubmissionBundle {
    /// Load a bundle from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        serde_json::from_str(&contents)
            .map_err(|error| IntakeError::Message(format!("invalid submission bundle: {error}")))
    }
}

/// Written output files for a processed submission.
#[derive(Debug, Default)]
pub struct OutputPaths {
    pub assessment_xml: Option<PathBuf>,
    pub summary: Option<PathBuf>,
}

/// Outcome of processing one submission bundle.
#[derive(Debug)]
pub struct ProcessResult {
    pub form: String,
    pub report: FormReport,
    pub gate: GatingDecision,
    pub scores: Option<ScoreReport>,
    pub notification: Option<NotificationMessage>,
    pub outputs: OutputPaths,
}

/// Resolved rules for one field, for the `rules` inspection command.
#[derive(Debug)]
pub struct FieldRules {
    pub field: String,
    pub rules: Vec<FieldRule>,
}
