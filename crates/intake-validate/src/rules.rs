//! Rule resolution from declarative field markers.
//!
//! Marker tokens are the short strings a form author attaches to a field
//! (historically CSS classes). Resolution maps them to typed rules once,
//! when descriptors are constructed; only the Required rule is derived per
//! validation call, because it depends on live visibility.

use intake_model::{FieldDescriptor, FieldRule, LimitPrefixes, RuleCatalog};

/// Resolve a field's marker tokens into typed rules.
///
/// Length bounds use a first-match policy: the first token starting with
/// the min (resp. max) prefix determines the bound and later matches are
/// ignored. Every token equal to a catalog marker contributes all of that
/// entry's pattern classes, in catalog order, accumulated without
/// deduplication into a single trailing `PatternSet`.
pub fn resolve_field_rules(
    markers: &[String],
    catalog: &RuleCatalog,
    prefixes: &LimitPrefixes,
) -> Vec<FieldRule> {
    let mut rules = Vec::new();

    if let Some(rule) = length_bound(markers, &prefixes.min, FieldRule::MinimumLength) {
        rules.push(rule);
    }
    if let Some(rule) = length_bound(markers, &prefixes.max, FieldRule::MaximumLength) {
        rules.push(rule);
    }

    let mut classes: Vec<String> = Vec::new();
    for marker in markers {
        classes.extend(catalog.classes_for(marker).map(str::to_string));
    }
    if !classes.is_empty() {
        rules.push(FieldRule::PatternSet(classes));
    }

    rules
}

/// Resolve rules for every field of a form in place.
pub fn resolve_rules(
    fields: &mut [FieldDescriptor],
    catalog: &RuleCatalog,
    prefixes: &LimitPrefixes,
) {
    for field in fields {
        field.rules = resolve_field_rules(&field.markers, catalog, prefixes);
    }
}

/// The rules in effect for one validation pass.
///
/// Required is prepended iff the field is both flagged required and
/// currently visible; a field hidden from the user is never required,
/// overriding its static attribute. Must be recomputed on every event
/// since visibility can change between them.
pub fn effective_rules(field: &FieldDescriptor) -> Vec<FieldRule> {
    let mut rules = Vec::with_capacity(field.rules.len() + 1);
    if field.required && field.visible {
        rules.push(FieldRule::Required);
    }
    rules.extend(field.rules.iter().cloned());
    rules
}

fn length_bound(
    markers: &[String],
    prefix: &str,
    bound: fn(usize) -> FieldRule,
) -> Option<FieldRule> {
    // An empty prefix would match every token; treat it as disabled.
    if prefix.is_empty() {
        return None;
    }
    let marker = markers.iter().find(|marker| marker.starts_with(prefix))?;
    match marker[prefix.len()..].parse::<usize>() {
        Ok(limit) => Some(bound(limit)),
        Err(_) => Some(FieldRule::Unknown(marker.clone())),
    }
}
