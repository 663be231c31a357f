use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of items in each symptom domain.
pub const ITEMS_PER_DOMAIN: usize = 9;

/// Rating at or above which an item counts toward clinical significance.
pub const SYMPTOM_THRESHOLD: u8 = 2;

/// Items rated at threshold or above needed for a domain to be clinically
/// significant.
pub const SIGNIFICANT_ITEM_COUNT: u8 = 6;

/// Submission field names for the inattention items (questions 1-9).
pub const INATTENTION_FIELDS: [&str; ITEMS_PER_DOMAIN] = [
    "q1_fails_attention",
    "q2_difficulty_sustaining",
    "q3_not_listening",
    "q4_not_follow_through",
    "q5_difficulty_organizing",
    "q6_avoids_tasks",
    "q7_loses_things",
    "q8_easily_distracted",
    "q9_forgetful",
];

/// Submission field names for the hyperactivity/impulsivity items
/// (questions 10-18).
pub const HYPERACTIVITY_FIELDS: [&str; ITEMS_PER_DOMAIN] = [
    "q10_fidgets",
    "q11_leaves_seat",
    "q12_runs_climbs",
    "q13_difficulty_quiet",
    "q14_on_the_go",
    "q15_talks_excessively",
    "q16_blurts_answers",
    "q17_difficulty_waiting",
    "q18_interrupts",
];

/// The 18 symptom ratings of a Vanderbilt submission, split into the two
/// fixed domains. Each value is 0-3; unanswered items are 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomResponses {
    pub inattention: [u8; ITEMS_PER_DOMAIN],
    pub hyperactivity: [u8; ITEMS_PER_DOMAIN],
}

/// Score for one symptom domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainScore {
    /// Items rated 2 or 3, out of 9.
    pub symptom_count: u8,
    /// Sum of all nine ratings, 0-27.
    pub raw_score: u8,
    /// True when `symptom_count` reaches six.
    pub clinically_significant: bool,
}

/// Clinical interpretation of a scored submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interpretation {
    CombinedType,
    InattentiveType,
    HyperactiveImpulsiveType,
    NoCriteriaMet,
}

impl fmt::Display for Interpretation {
    // User-facing copy; these strings appear verbatim in reports and
    // notification subjects.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Interpretation::CombinedType => "Indicative of ADHD, Combined Type",
            Interpretation::InattentiveType => {
                "Indicative of ADHD, Predominantly Inattentive Type"
            }
            Interpretation::HyperactiveImpulsiveType => {
                "Indicative of ADHD, Predominantly Hyperactive-Impulsive Type"
            }
            Interpretation::NoCriteriaMet => "Does not meet ADHD criteria",
        };
        f.write_str(text)
    }
}

/// Complete scoring outcome for one submission. Immutable once produced;
/// the same responses always score identically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub inattention: DomainScore,
    pub hyperactivity: DomainScore,
    pub interpretation: Interpretation,
}
