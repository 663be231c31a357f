//! Vanderbilt scoring and interpretation.
//!
//! Clinical criteria: a symptom domain is clinically significant when six
//! or more of its nine items are rated 2 or 3 (of 0-3). Inattention alone
//! maps to the Predominantly Inattentive type, hyperactivity/impulsivity
//! alone to the Predominantly Hyperactive-Impulsive type, both to the
//! Combined type, neither means criteria are not met.

use std::collections::BTreeMap;

use intake_model::{
    DomainScore, HYPERACTIVITY_FIELDS, INATTENTION_FIELDS, ITEMS_PER_DOMAIN, Interpretation,
    SIGNIFICANT_ITEM_COUNT, SYMPTOM_THRESHOLD, ScoreReport, SymptomResponses,
};

/// Highest rating an item can carry.
const MAX_RATING: u8 = 3;

/// Extract the 18 symptom ratings from raw submitted answers.
///
/// Items are addressed by the fixed `q1_..`..`q18_..` field names. A
/// missing or non-numeric answer counts as 0; scoring must not fail on an
/// incomplete submission -- whether to reject it is the caller's call.
/// Out-of-range ratings clamp to 3.
pub fn responses_from_answers(answers: &BTreeMap<&str, &str>) -> SymptomResponses {
    let mut responses = SymptomResponses::default();
    for (index, field) in INATTENTION_FIELDS.iter().enumerate() {
        responses.inattention[index] = rating(answers.get(field).copied());
    }
    for (index, field) in HYPERACTIVITY_FIELDS.iter().enumerate() {
        responses.hyperactivity[index] = rating(answers.get(field).copied());
    }
    responses
}

/// Score a response set.
///
/// A pure function: the same responses always produce the same report,
/// which the scoring of a clinical instrument requires for auditability.
pub fn score(responses: &SymptomResponses) -> ScoreReport {
    let inattention = score_domain(&responses.inattention);
    let hyperactivity = score_domain(&responses.hyperactivity);

    let interpretation = match (
        inattention.clinically_significant,
        hyperactivity.clinically_significant,
    ) {
        (true, true) => Interpretation::CombinedType,
        (true, false) => Interpretation::InattentiveType,
        (false, true) => Interpretation::HyperactiveImpulsiveType,
        (false, false) => Interpretation::NoCriteriaMet,
    };

    ScoreReport {
        inattention,
        hyperactivity,
        interpretation,
    }
}

fn score_domain(items: &[u8; ITEMS_PER_DOMAIN]) -> DomainScore {
    let symptom_count = items
        .iter()
        .filter(|&&value| value >= SYMPTOM_THRESHOLD)
        .count() as u8;
    let raw_score = items.iter().sum();
    DomainScore {
        symptom_count,
        raw_score,
        clinically_significant: symptom_count >= SIGNIFICANT_ITEM_COUNT,
    }
}

fn rating(raw: Option<&str>) -> u8 {
    raw.and_then(|value| value.trim().parse::<u8>().ok())
        .unwrap_or(0)
        .min(MAX_RATING)
}
