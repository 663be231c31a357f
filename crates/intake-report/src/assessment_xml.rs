//! Assessment XML output generation.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use intake_model::{
    HYPERACTIVITY_FIELDS, INATTENTION_FIELDS, ScoreReport, Submission,
};

use crate::common::{DISPLAY_DATE_FORMAT, display_date, write_text_element, yes_no};

/// Form type recorded in the assessment_info block.
const FORM_TYPE: &str = "NICHQ Vanderbilt Assessment Scale";

/// Write the structured assessment document for a scored submission.
///
/// The document carries the submission metadata, the per-domain scoring
/// results, the clinical interpretation, and all 18 individual item
/// ratings, so the receiving side can re-derive the scores if it needs
/// to.
pub fn write_assessment_xml(
    output_path: &Path,
    submission: &Submission,
    scores: &ScoreReport,
    submitted_on: NaiveDate,
) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).with_context(|| format!("create {}", parent.display()))?;
        }
    }
    let file =
        File::create(output_path).with_context(|| format!("create {}", output_path.display()))?;
    let writer = BufWriter::new(file);
    let mut xml = Writer::new_with_indent(writer, b' ', 2);

    xml.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    xml.write_event(Event::Start(BytesStart::new("vanderbilt_assessment")))?;

    xml.write_event(Event::Start(BytesStart::new("assessment_info")))?;
    write_text_element(
        &mut xml,
        "submission_date",
        &submitted_on.format(DISPLAY_DATE_FORMAT).to_string(),
    )?;
    write_text_element(&mut xml, "form_type", FORM_TYPE)?;
    xml.write_event(Event::End(BytesEnd::new("assessment_info")))?;

    xml.write_event(Event::Start(BytesStart::new("student")))?;
    write_text_element(&mut xml, "first_name", submission.answer("student_first_name"))?;
    write_text_element(&mut xml, "last_name", submission.answer("student_last_name"))?;
    write_text_element(
        &mut xml,
        "date_of_birth",
        &display_date(submission.answer("student_dob")),
    )?;
    xml.write_event(Event::End(BytesEnd::new("student")))?;

    xml.write_event(Event::Start(BytesStart::new("respondent")))?;
    write_text_element(&mut xml, "name", submission.answer("respondent_name"))?;
    write_text_element(
        &mut xml,
        "relationship",
        submission.answer("respondent_relationship"),
    )?;
    xml.write_event(Event::End(BytesEnd::new("respondent")))?;

    xml.write_event(Event::Start(BytesStart::new("scoring_results")))?;
    write_domain_results(
        &mut xml,
        "inattention",
        scores.inattention.symptom_count,
        scores.inattention.raw_score,
        scores.inattention.clinically_significant,
    )?;
    write_domain_results(
        &mut xml,
        "hyperactivity_impulsivity",
        scores.hyperactivity.symptom_count,
        scores.hyperactivity.raw_score,
        scores.hyperactivity.clinically_significant,
    )?;
    write_text_element(
        &mut xml,
        "clinical_interpretation",
        &scores.interpretation.to_string(),
    )?;
    xml.write_event(Event::End(BytesEnd::new("scoring_results")))?;

    // Individual responses, all 18 symptom items.
    xml.write_event(Event::Start(BytesStart::new("symptom_responses")))?;
    for (index, field) in INATTENTION_FIELDS.iter().enumerate() {
        let element = format!("question_{}_inattention", index + 1);
        write_text_element(&mut xml, &element, answer_or_zero(submission, field))?;
    }
    for (index, field) in HYPERACTIVITY_FIELDS.iter().enumerate() {
        let element = format!("question_{}_hyperactivity", index + 10);
        write_text_element(&mut xml, &element, answer_or_zero(submission, field))?;
    }
    xml.write_event(Event::End(BytesEnd::new("symptom_responses")))?;

    xml.write_event(Event::End(BytesEnd::new("vanderbilt_assessment")))?;
    Ok(())
}

fn write_domain_results<W: std::io::Write>(
    xml: &mut Writer<W>,
    element: &str,
    symptom_count: u8,
    raw_score: u8,
    significant: bool,
) -> Result<()> {
    xml.write_event(Event::Start(BytesStart::new(element)))?;
    write_text_element(xml, "items_rated_2_or_3", &symptom_count.to_string())?;
    write_text_element(xml, "raw_score", &raw_score.to_string())?;
    write_text_element(xml, "clinically_significant", yes_no(significant))?;
    xml.write_event(Event::End(BytesEnd::new(element)))?;
    Ok(())
}

fn answer_or_zero<'a>(submission: &'a Submission, field: &str) -> &'a str {
    let value = submission.answer(field);
    if value.is_empty() { "0" } else { value }
}
