//! Field and form validation for intake forms.
//!
//! This crate is the validation engine behind the practice's web forms:
//!
//! - **Rule resolution**: derives typed rules from a field's declarative
//!   marker tokens plus the configured validation-method catalog
//! - **Pattern matching**: character-class tests over {letters, numbers,
//!   spaces} with the deployed user-facing failure copy
//! - **Field checks**: Required, MinimumLength, MaximumLength, PatternSet
//!   in fixed order, with unknown-rule surfacing
//! - **Form gating**: per-field reports, first-invalid-field selection,
//!   and the block/allow decision consumed by the submission layer
//!
//! # Example
//!
//! ```
//! use intake_model::{FieldDescriptor, LimitPrefixes, RuleCatalog};
//! use intake_validate::{gate_submission, resolve_rules, validate_form};
//!
//! let catalog = RuleCatalog::default();
//! let prefixes = LimitPrefixes::default();
//!
//! let mut fields = vec![FieldDescriptor::new("patient_name")];
//! fields[0].required = true;
//! resolve_rules(&mut fields, &catalog, &prefixes);
//!
//! let report = validate_form("pcp_referral", &fields);
//! let gate = gate_submission(&report);
//! assert!(gate.block_submission);
//! ```

mod field;
mod form;
mod pattern;
mod rules;

pub use field::validate_field;
pub use form::{gate_submission, validate_form};
pub use pattern::validate_patterns;
pub use rules::{effective_rules, resolve_field_rules, resolve_rules};
