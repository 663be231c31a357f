//! Per-field check evaluation.

use intake_model::{FieldDescriptor, FieldRule};

use crate::pattern::validate_patterns;
use crate::rules::effective_rules;

/// Evaluate one field against its effective rules.
///
/// Checks run in a fixed order regardless of how the rules were derived:
/// Required, MinimumLength, MaximumLength, PatternSet, then any unknown
/// rules. Returns one message per failing rule; an empty list means the
/// field is valid. Pure -- any UI update is the caller's concern.
pub fn validate_field(field: &FieldDescriptor) -> Vec<String> {
    let rules = effective_rules(field);
    let value = field.value.as_str();
    let mut errors = Vec::new();

    if let Some(error) = required_error(&rules, value) {
        errors.push(error);
    }
    if let Some(error) = minimum_length_error(&rules, value) {
        errors.push(error);
    }
    if let Some(error) = maximum_length_error(&rules, value) {
        errors.push(error);
    }
    if let Some(error) = pattern_error(&rules, value) {
        errors.push(error);
    }
    for rule in &rules {
        if let FieldRule::Unknown(token) = rule {
            tracing::error!(field = %field.name, token = %token, "unknown validation method");
            errors.push(format!("Unknown validation method \"{token}\""));
        }
    }

    errors
}

fn required_error(rules: &[FieldRule], value: &str) -> Option<String> {
    if !rules.contains(&FieldRule::Required) {
        return None;
    }
    if value.is_empty() {
        return Some("Please fill in the required field.".to_string());
    }
    None
}

fn minimum_length_error(rules: &[FieldRule], value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let min = rules.iter().find_map(|rule| match rule {
        FieldRule::MinimumLength(min) => Some(*min),
        _ => None,
    })?;
    if value.chars().count() < min {
        return Some(format!("Minimum length: {min} characters"));
    }
    None
}

fn maximum_length_error(rules: &[FieldRule], value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let max = rules.iter().find_map(|rule| match rule {
        FieldRule::MaximumLength(max) => Some(*max),
        _ => None,
    })?;
    if value.chars().count() > max {
        return Some(format!("Maximum length: {max} characters"));
    }
    None
}

fn pattern_error(rules: &[FieldRule], value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    let classes = rules.iter().find_map(|rule| match rule {
        FieldRule::PatternSet(classes) => Some(classes.as_slice()),
        _ => None,
    })?;
    validate_patterns(classes, value)
}
