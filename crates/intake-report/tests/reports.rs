//! Report formatting tests over a scored submission.

use chrono::NaiveDate;

use intake_model::{FieldDescriptor, Submission, VANDERBILT_FORM};
use intake_report::{
    notification_message, render_summary, report_basename, write_assessment_xml,
};
use intake_score::{responses_from_answers, score};

fn submission() -> Submission {
    let mut fields = vec![
        field("student_first_name", "Jordan"),
        field("student_last_name", "Ellis"),
        field("student_dob", "2017-03-09"),
        field("respondent_name", "Casey Ellis"),
        field("respondent_relationship", "Parent"),
    ];
    // Six inattention items at threshold: Predominantly Inattentive.
    for name in [
        "q1_fails_attention",
        "q2_difficulty_sustaining",
        "q3_not_listening",
        "q4_not_follow_through",
        "q5_difficulty_organizing",
        "q6_avoids_tasks",
    ] {
        fields.push(field(name, "2"));
    }
    Submission {
        form: VANDERBILT_FORM.to_string(),
        fields,
    }
}

fn field(name: &str, value: &str) -> FieldDescriptor {
    FieldDescriptor {
        value: value.to_string(),
        ..FieldDescriptor::new(name)
    }
}

fn submitted_on() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 6).unwrap()
}

#[test]
fn assessment_xml_carries_scores_and_responses() {
    let submission = submission();
    let scores = score(&responses_from_answers(&submission.answers()));

    let path = std::env::temp_dir().join(format!(
        "intake_assessment_{}.xml",
        std::process::id()
    ));
    write_assessment_xml(&path, &submission, &scores, submitted_on()).expect("write xml");
    let xml = std::fs::read_to_string(&path).expect("read xml back");
    std::fs::remove_file(&path).ok();

    assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    assert!(xml.contains("<vanderbilt_assessment>"));
    assert!(xml.contains("<form_type>NICHQ Vanderbilt Assessment Scale</form_type>"));
    assert!(xml.contains("<submission_date>08/06/2026</submission_date>"));
    assert!(xml.contains("<first_name>Jordan</first_name>"));
    assert!(xml.contains("<date_of_birth>03/09/2017</date_of_birth>"));

    // Inattention positive, hyperactivity negative.
    assert!(xml.contains("<items_rated_2_or_3>6</items_rated_2_or_3>"));
    assert!(xml.contains("<clinically_significant>Yes</clinically_significant>"));
    assert!(xml.contains("<clinically_significant>No</clinically_significant>"));
    assert!(xml.contains(
        "<clinical_interpretation>Indicative of ADHD, Predominantly Inattentive Type</clinical_interpretation>"
    ));

    // All 18 items are present; unanswered ones default to 0.
    assert!(xml.contains("<question_1_inattention>2</question_1_inattention>"));
    assert!(xml.contains("<question_9_inattention>0</question_9_inattention>"));
    assert!(xml.contains("<question_10_hyperactivity>0</question_10_hyperactivity>"));
    assert!(xml.contains("<question_18_hyperactivity>0</question_18_hyperactivity>"));
}

#[test]
fn summary_lists_criteria_results_and_disclaimer() {
    let submission = submission();
    let scores = score(&responses_from_answers(&submission.answers()));
    let summary = render_summary(&submission, &scores, submitted_on());

    assert!(summary.starts_with("NICHQ VANDERBILT ASSESSMENT SCALE - RESULTS"));
    assert!(summary.contains("Student: Jordan Ellis"));
    assert!(summary.contains("DOB: 03/09/2017"));
    assert!(summary.contains("Completed by: Casey Ellis (Parent)"));
    assert!(summary.contains("INATTENTION DOMAIN (Questions 1-9):"));
    assert!(summary.contains("Items rated 2 or 3: 6 out of 9"));
    assert!(summary.contains("Clinically Significant: YES (\u{2265}6 items)"));
    assert!(summary.contains("Clinically Significant: No (<6 items)"));
    assert!(summary.contains("Indicative of ADHD, Predominantly Inattentive Type"));
    assert!(summary.contains("This is a screening tool, not a diagnostic instrument."));
}

#[test]
fn notification_subject_and_body() {
    let submission = submission();
    let scores = score(&responses_from_answers(&submission.answers()));
    let message = notification_message(
        &submission,
        &scores,
        submitted_on(),
        vec!["Jordan_Ellis_03092017_vanderbilt.xml".to_string()],
    );

    assert_eq!(
        message.subject,
        "Vanderbilt Assessment - Jordan Ellis - Indicative of ADHD, Predominantly Inattentive Type"
    );
    assert_eq!(message.attachments.len(), 1);
    insta::assert_snapshot!(message.body, @r"
    Vanderbilt Assessment Results

    Student: Jordan Ellis
    DOB: 03/09/2017
    Completed by: Casey Ellis
    Date: 08/06/2026

    RESULTS:
    --------
    Inattention: 6/9 items rated 2-3 (POSITIVE)
    Hyperactivity/Impulsivity: 0/9 items rated 2-3 (negative)

    Clinical Interpretation: Indicative of ADHD, Predominantly Inattentive Type

    See attached files for complete results.
    ");
}

#[test]
fn basename_uses_dob_then_submission_date() {
    let submission = submission();
    assert_eq!(
        report_basename(&submission, submitted_on()),
        "Jordan_Ellis_03092017_vanderbilt"
    );

    let mut anonymous = submission;
    anonymous.fields.retain(|field| field.name != "student_dob");
    assert_eq!(
        report_basename(&anonymous, submitted_on()),
        "Jordan_Ellis_08062026_vanderbilt"
    );
}
