//! Plain-text summary report.

use chrono::NaiveDate;

use intake_model::{DomainScore, ScoreReport, Submission};

use crate::common::{DISPLAY_DATE_FORMAT, display_date};

/// Render the human-readable results summary that accompanies the XML
/// document.
pub fn render_summary(
    submission: &Submission,
    scores: &ScoreReport,
    submitted_on: NaiveDate,
) -> String {
    let date = submitted_on.format(DISPLAY_DATE_FORMAT);
    let first = submission.answer("student_first_name");
    let last = submission.answer("student_last_name");
    let dob_display = display_date(submission.answer("student_dob"));
    let dob = or_default(&dob_display, "N/A");
    let respondent = or_default(submission.answer("respondent_name"), "Unknown");
    let relationship = or_default(submission.answer("respondent_relationship"), "N/A");

    let mut summary = format!(
        "NICHQ VANDERBILT ASSESSMENT SCALE - RESULTS
============================================

Date: {date}
Student: {first} {last}
DOB: {dob}
Completed by: {respondent} ({relationship})

SCORING CRITERIA:
-----------------
Each item rated on 0-3 scale:
  0 = Never    1 = Occasionally    2 = Often    3 = Very Often

Clinical significance: 6 or more items rated 2-3 in a domain

RESULTS:
--------

"
    );

    summary.push_str(&domain_section(
        "INATTENTION DOMAIN (Questions 1-9)",
        &scores.inattention,
    ));
    summary.push_str(&domain_section(
        "HYPERACTIVITY/IMPULSIVITY DOMAIN (Questions 10-18)",
        &scores.hyperactivity,
    ));

    summary.push_str(&format!(
        "CLINICAL INTERPRETATION:
------------------------
{interpretation}

IMPORTANT NOTE:
--------------
This is a screening tool, not a diagnostic instrument.
Positive results indicate need for comprehensive evaluation.
Diagnosis requires clinical interview, multiple informants, and
assessment of functional impairment across multiple settings.
",
        interpretation = scores.interpretation
    ));

    summary
}

fn domain_section(heading: &str, score: &DomainScore) -> String {
    let significance = if score.clinically_significant {
        "YES (\u{2265}6 items)"
    } else {
        "No (<6 items)"
    };
    format!(
        "{heading}:
  Items rated 2 or 3: {count} out of 9
  Raw score: {raw}
  Clinically Significant: {significance}

",
        count = score.symptom_count,
        raw = score.raw_score,
    )
}

fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}
