use serde::{Deserialize, Serialize};

/// One catalog entry: a marker token and the pattern-class names it expands
/// to, in the order they should accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub marker: String,
    pub classes: Vec<String>,
}

/// The validation-method catalog: marker token -> pattern classes.
///
/// Supplied by the configuration collaborator and loaded once per form
/// render. Read-only to the engine; passed explicitly into rule resolution
/// rather than living in ambient global state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleCatalog {
    pub entries: Vec<CatalogEntry>,
}

impl RuleCatalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Self { entries }
    }

    /// All classes mapped to `marker`, in catalog order. An exact-match
    /// lookup; markers are case-sensitive like the CSS classes they came
    /// from.
    pub fn classes_for(&self, marker: &str) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(move |entry| entry.marker == marker)
            .flat_map(|entry| entry.classes.iter().map(String::as_str))
    }
}

/// The two configured marker prefixes that declare length bounds, e.g.
/// `min_` in `min_5`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitPrefixes {
    pub min: String,
    pub max: String,
}

impl Default for LimitPrefixes {
    fn default() -> Self {
        Self {
            min: "min_".to_string(),
            max: "max_".to_string(),
        }
    }
}
