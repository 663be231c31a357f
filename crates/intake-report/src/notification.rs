//! Notification message assembly.
//!
//! Builds the subject, body, and attachment list handed to the delivery
//! collaborator. Transport is out of scope here; assembly is not.

use chrono::NaiveDate;

use intake_model::{DomainScore, ScoreReport, Submission};

use crate::common::{DISPLAY_DATE_FORMAT, display_date, file_date};

/// A fully assembled notification, ready for a delivery collaborator.
#[derive(Debug, Clone)]
pub struct NotificationMessage {
    pub subject: String,
    pub body: String,
    pub attachments: Vec<String>,
}

/// File-name stem for a submission's report files:
/// `{first}_{last}_{mmddyyyy}_vanderbilt`, using the student's DOB date
/// when present, else the submission date.
pub fn report_basename(submission: &Submission, submitted_on: NaiveDate) -> String {
    let first = submission.answer("student_first_name");
    let last = submission.answer("student_last_name");
    let date = file_date(submission.answer("student_dob"), submitted_on);
    format!("{first}_{last}_{date}_vanderbilt")
}

/// Assemble the results notification for a scored submission.
///
/// The subject carries the interpretation so a positive screen is visible
/// without opening the message.
pub fn notification_message(
    submission: &Submission,
    scores: &ScoreReport,
    submitted_on: NaiveDate,
    attachments: Vec<String>,
) -> NotificationMessage {
    let first = submission.answer("student_first_name");
    let last = submission.answer("student_last_name");
    let dob = display_date(submission.answer("student_dob"));
    let respondent = submission.answer("respondent_name");
    let respondent = if respondent.is_empty() {
        "Unknown"
    } else {
        respondent
    };
    let date = submitted_on.format(DISPLAY_DATE_FORMAT);
    let interpretation = scores.interpretation;

    let subject = format!("Vanderbilt Assessment - {first} {last} - {interpretation}");

    let body = format!(
        "Vanderbilt Assessment Results

Student: {first} {last}
DOB: {dob}
Completed by: {respondent}
Date: {date}

RESULTS:
--------
Inattention: {inattention_line}
Hyperactivity/Impulsivity: {hyperactivity_line}

Clinical Interpretation: {interpretation}

See attached files for complete results.
",
        inattention_line = domain_line(&scores.inattention),
        hyperactivity_line = domain_line(&scores.hyperactivity),
    );

    NotificationMessage {
        subject,
        body,
        attachments,
    }
}

fn domain_line(score: &DomainScore) -> String {
    let marker = if score.clinically_significant {
        "POSITIVE"
    } else {
        "negative"
    };
    format!("{}/9 items rated 2-3 ({marker})", score.symptom_count)
}
