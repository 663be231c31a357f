//! Whole-form evaluation and submission gating.

use intake_model::{FieldDescriptor, FieldReport, FormReport, GatingDecision};

use crate::field::validate_field;

/// Validate every field of a form, in document order.
///
/// The report carries one entry per field (valid fields get an empty error
/// list) so the UI can clear stale inline messages. Re-validation of
/// unchanged inputs yields an identical report; this runs on both
/// per-field events and submission attempts.
pub fn validate_form(form: &str, fields: &[FieldDescriptor]) -> FormReport {
    let mut report = FormReport::new(form);
    for field in fields {
        report.add(FieldReport {
            field: field.name.clone(),
            errors: validate_field(field),
        });
    }
    if report.is_valid() {
        tracing::debug!(form = %report.form, "form is valid");
    } else {
        tracing::debug!(
            form = %report.form,
            invalid_fields = report.invalid_count(),
            first_invalid = report.first_invalid().map(|field| field.field.as_str()),
            "form is invalid"
        );
    }
    report
}

/// Decide whether the caller should block the submission.
///
/// The engine never aborts a submission on its own; it reports, and the
/// caller consumes this decision before dispatching anything. The first
/// invalid field is identified strictly by traversal order, for directing
/// user attention.
pub fn gate_submission(report: &FormReport) -> GatingDecision {
    if report.is_valid() {
        return GatingDecision::default();
    }
    GatingDecision {
        block_submission: true,
        first_invalid_field: report.first_invalid().map(|field| field.field.clone()),
    }
}
