//! Submission processing pipeline: load, validate, gate, score, write.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use tracing::{debug, info, info_span, warn};

use intake_model::{ScoreReport, Submission};
use intake_report::{
    notification_message, render_summary, report_basename, write_assessment_xml,
};
use intake_score::{responses_from_answers, score};
use intake_validate::{gate_submission, resolve_rules, validate_form};

use crate::logging::redact_value;
use crate::types::{FieldRules, OutputPaths, ProcessResult, SubmissionBundle};

/// Options for processing a submission bundle.
#[derive(Debug, Clone)]
pub struct ProcessOptions {
    pub bundle_path: PathBuf,
    /// Default: `<bundle dir>/output`.
    pub output_dir: Option<PathBuf>,
    /// Validate and report without writing output files.
    pub dry_run: bool,
}

/// Process one submission bundle.
///
/// Validation always runs; the submission is gated on its result. Scoring
/// and report output happen only for a Vanderbilt submission that passed
/// the gate. A blocked submission is not an error -- the result carries
/// the report and the gating decision for the caller to present.
pub fn run_process(options: &ProcessOptions) -> Result<ProcessResult> {
    let bundle = load_bundle(&options.bundle_path)?;
    let span = info_span!("process", form = %bundle.submission.form);
    let _guard = span.enter();

    let mut submission = bundle.submission;
    resolve_rules(&mut submission.fields, &bundle.catalog, &bundle.prefixes);
    info!(fields = submission.fields.len(), "validating submission");

    let report = validate_form(&submission.form, &submission.fields);
    let gate = gate_submission(&report);
    if gate.block_submission {
        warn!(
            invalid_fields = report.invalid_count(),
            first_invalid = gate.first_invalid_field.as_deref(),
            "submission blocked by validation"
        );
        return Ok(ProcessResult {
            form: submission.form,
            report,
            gate,
            scores: None,
            notification: None,
            outputs: OutputPaths::default(),
        });
    }

    let mut scores = None;
    let mut notification = None;
    let mut outputs = OutputPaths::default();
    if submission.is_vanderbilt() {
        let submitted_on = Local::now().date_naive();
        let score_report = score(&responses_from_answers(&submission.answers()));
        info!(
            inattention = score_report.inattention.symptom_count,
            hyperactivity = score_report.hyperactivity.symptom_count,
            interpretation = %score_report.interpretation,
            "scored vanderbilt submission"
        );

        if options.dry_run {
            debug!("dry run, skipping report output");
        } else {
            outputs = write_outputs(options, &submission, &score_report, submitted_on)?;
        }

        let attachments = [&outputs.assessment_xml, &outputs.summary]
            .into_iter()
            .flatten()
            .map(|path| path.display().to_string())
            .collect();
        notification = Some(notification_message(
            &submission,
            &score_report,
            submitted_on,
            attachments,
        ));
        scores = Some(score_report);
    }

    Ok(ProcessResult {
        form: submission.form.clone(),
        report,
        gate,
        scores,
        notification,
        outputs,
    })
}

/// Resolve and list the rules that apply to each field of a bundle.
pub fn run_rules(bundle_path: &Path) -> Result<Vec<FieldRules>> {
    let bundle = load_bundle(bundle_path)?;
    let mut submission = bundle.submission;
    resolve_rules(&mut submission.fields, &bundle.catalog, &bundle.prefixes);
    Ok(submission
        .fields
        .into_iter()
        .map(|field| FieldRules {
            field: field.name,
            rules: field.rules,
        })
        .collect())
}

fn load_bundle(path: &Path) -> Result<SubmissionBundle> {
    SubmissionBundle::load(path).with_context(|| format!("load {}", path.display()))
}

fn write_outputs(
    options: &ProcessOptions,
    submission: &Submission,
    scores: &ScoreReport,
    submitted_on: NaiveDate,
) -> Result<OutputPaths> {
    let output_dir = options.output_dir.clone().unwrap_or_else(|| {
        options
            .bundle_path
            .parent()
            .unwrap_or(Path::new("."))
            .join("output")
    });
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("create {}", output_dir.display()))?;

    // File names carry the student identity, so they only reach the log
    // behind the --log-data gate.
    let basename = report_basename(submission, submitted_on);
    debug!(basename = redact_value(&basename), "building report files");

    let xml_path = output_dir.join(format!("{basename}.xml"));
    write_assessment_xml(&xml_path, submission, scores, submitted_on)?;

    let summary_path = output_dir.join(format!("{basename}_summary.txt"));
    let summary = render_summary(submission, scores, submitted_on);
    fs::write(&summary_path, summary)
        .with_context(|| format!("write {}", summary_path.display()))?;

    info!(output_dir = %output_dir.display(), "wrote assessment reports");
    Ok(OutputPaths {
        assessment_xml: Some(xml_path),
        summary: Some(summary_path),
    })
}
