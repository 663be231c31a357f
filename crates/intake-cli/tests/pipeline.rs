//! Integration tests for the submission processing pipeline.

use std::fs;
use std::path::PathBuf;

use intake_cli::pipeline::{ProcessOptions, run_process, run_rules};
use intake_model::{FieldRule, Interpretation};

fn temp_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("intake_cli_{tag}_{}", std::process::id()));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn write_bundle(dir: &PathBuf, name: &str, json: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, json).expect("write bundle");
    path
}

fn vanderbilt_bundle(first_name: &str) -> String {
    format!(
        r#"{{
  "catalog": [
    {{"marker": "letters_space", "classes": ["letters", "spaces"]}},
    {{"marker": "digits", "classes": ["numbers"]}}
  ],
  "prefixes": {{"min": "min_", "max": "max_"}},
  "submission": {{
    "form": "vanderbilt",
    "fields": [
      {{"name": "student_first_name", "value": "{first_name}", "required": true, "markers": ["letters_space", "min_2"]}},
      {{"name": "student_last_name", "value": "Ellis", "required": true, "markers": ["letters_space"]}},
      {{"name": "student_dob", "value": "2017-03-09"}},
      {{"name": "respondent_name", "value": "Casey Ellis"}},
      {{"name": "respondent_relationship", "value": "Parent"}},
      {{"name": "q1_fails_attention", "value": "2"}},
      {{"name": "q2_difficulty_sustaining", "value": "2"}},
      {{"name": "q3_not_listening", "value": "2"}},
      {{"name": "q4_not_follow_through", "value": "2"}},
      {{"name": "q5_difficulty_organizing", "value": "2"}},
      {{"name": "q6_avoids_tasks", "value": "2"}}
    ]
  }}
}}"#
    )
}

#[test]
fn valid_vanderbilt_bundle_is_scored_and_written() {
    let dir = temp_dir("valid");
    let bundle = write_bundle(&dir, "submission.json", &vanderbilt_bundle("Jordan"));
    let output_dir = dir.join("output");

    let result = run_process(&ProcessOptions {
        bundle_path: bundle,
        output_dir: Some(output_dir.clone()),
        dry_run: false,
    })
    .expect("process bundle");

    assert!(!result.gate.block_submission);
    assert!(result.report.is_valid());

    let scores = result.scores.expect("vanderbilt submission is scored");
    assert_eq!(scores.inattention.symptom_count, 6);
    assert_eq!(scores.interpretation, Interpretation::InattentiveType);

    let xml_path = result.outputs.assessment_xml.expect("xml written");
    let summary_path = result.outputs.summary.expect("summary written");
    assert!(xml_path.starts_with(&output_dir));
    let xml = fs::read_to_string(&xml_path).expect("read xml");
    assert!(xml.contains("<clinical_interpretation>"));
    let summary = fs::read_to_string(&summary_path).expect("read summary");
    assert!(summary.contains("Student: Jordan Ellis"));

    let notification = result.notification.expect("notification assembled");
    assert!(notification.subject.starts_with("Vanderbilt Assessment - Jordan Ellis"));
    assert_eq!(notification.attachments.len(), 2);

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn invalid_bundle_is_blocked_and_writes_nothing() {
    let dir = temp_dir("invalid");
    // Required first name is empty: the submission must be blocked.
    let bundle = write_bundle(&dir, "submission.json", &vanderbilt_bundle(""));
    let output_dir = dir.join("output");

    let result = run_process(&ProcessOptions {
        bundle_path: bundle,
        output_dir: Some(output_dir.clone()),
        dry_run: false,
    })
    .expect("process bundle");

    assert!(result.gate.block_submission);
    assert_eq!(
        result.gate.first_invalid_field.as_deref(),
        Some("student_first_name")
    );
    assert!(result.scores.is_none());
    assert!(result.notification.is_none());
    assert!(result.outputs.assessment_xml.is_none());
    assert!(!output_dir.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn dry_run_scores_without_writing() {
    let dir = temp_dir("dry_run");
    let bundle = write_bundle(&dir, "submission.json", &vanderbilt_bundle("Jordan"));
    let output_dir = dir.join("output");

    let result = run_process(&ProcessOptions {
        bundle_path: bundle,
        output_dir: Some(output_dir.clone()),
        dry_run: true,
    })
    .expect("process bundle");

    assert!(!result.gate.block_submission);
    assert!(result.scores.is_some());
    assert!(result.outputs.assessment_xml.is_none());
    assert!(!output_dir.exists());

    fs::remove_dir_all(&dir).ok();
}

#[test]
fn rules_command_lists_resolved_rules() {
    let dir = temp_dir("rules");
    let bundle = write_bundle(&dir, "submission.json", &vanderbilt_bundle("Jordan"));

    let fields = run_rules(&bundle).expect("resolve rules");
    let first = fields
        .iter()
        .find(|field| field.field == "student_first_name")
        .expect("first name field present");
    assert_eq!(
        first.rules,
        vec![
            FieldRule::MinimumLength(2),
            FieldRule::PatternSet(vec!["letters".to_string(), "spaces".to_string()]),
        ]
    );

    let dob = fields
        .iter()
        .find(|field| field.field == "student_dob")
        .expect("dob field present");
    assert!(dob.rules.is_empty());

    fs::remove_dir_all(&dir).ok();
}
