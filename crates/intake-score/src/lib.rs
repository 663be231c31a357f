//! Clinical scoring for the NICHQ Vanderbilt Assessment Scale.
//!
//! The Vanderbilt scale is a public-domain ADHD screening questionnaire:
//! 18 symptom items rated 0-3, split into an inattention domain (items
//! 1-9) and a hyperactivity/impulsivity domain (items 10-18). This crate
//! turns raw submitted answers into a deterministic [`ScoreReport`].
//!
//! Scoring is a screening aid, not a diagnosis; the report formatter
//! attaches the corresponding disclaimer.
//!
//! [`ScoreReport`]: intake_model::ScoreReport

mod vanderbilt;

pub use vanderbilt::{responses_from_answers, score};
