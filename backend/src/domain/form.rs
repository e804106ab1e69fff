//! Flat form submissions.
//!
//! Every action consumes a mapping of field name to raw string value exactly
//! as the browser posted it. Typed decoding happens in the action that owns
//! the form, never here.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Raw form payload: field name to string value, no nesting, no files.
///
/// # Examples
/// ```
/// use backend::domain::FormPayload;
///
/// let form = FormPayload::from_pairs([("status", "paid")]);
/// assert_eq!(form.get("status"), Some("paid"));
/// assert_eq!(form.get("amount"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormPayload(HashMap<String, String>);

impl FormPayload {
    /// Build a payload from `(name, value)` pairs. Later duplicates win.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }

    /// Raw value submitted for `name`, if the field was present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Whether the payload carries no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, String>> for FormPayload {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}
