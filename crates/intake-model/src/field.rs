use serde::{Deserialize, Serialize};

/// A single typed validation rule attached to a field.
///
/// Rules are resolved once from a field's marker tokens when the descriptor
/// is constructed. The `Required` rule is the exception: whether it applies
/// depends on the field's visibility at the moment of validation, so it is
/// derived per validation call rather than stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "rule", content = "arg")]
pub enum FieldRule {
    Required,
    MinimumLength(usize),
    MaximumLength(usize),
    /// Accumulated pattern-class names, in marker/catalog order, duplicates
    /// preserved. Unrecognized names are tolerated and skipped by the
    /// matcher.
    PatternSet(Vec<String>),
    /// A marker that looked like a rule but could not be resolved. Kept so
    /// catalog misconfiguration surfaces as a visible validation error
    /// instead of being silently dropped.
    Unknown(String),
}

/// One input-capable form field as supplied by the form-rendering
/// collaborator.
///
/// `rules` holds the typed rules resolved from `markers` at construction
/// time (see `intake-validate`). `required` and `visible` stay raw because
/// the effective Required rule must be recomputed on every validation
/// event: a field hidden from the user is never required, whatever its
/// static attribute says.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub name: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub markers: Vec<String>,
    #[serde(skip)]
    pub rules: Vec<FieldRule>,
}

fn default_visible() -> bool {
    true
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            required: false,
            visible: true,
            value: String::new(),
            markers: Vec::new(),
            rules: Vec::new(),
        }
    }
}
