//! Frontend Models
//!
//! Data structures matching the sous-type endpoint and the form selectors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Value of the parent (TypeBien) selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParentSelection(String);

impl ParentSelection {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Only the empty string means "none chosen"; other values are sent as-is
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ParentSelection {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for ParentSelection {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for ParentSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One sous-type entry (matches backend `SousTypeBien` row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChildOption {
    #[serde(rename = "SousTypeBienID", deserialize_with = "id_from_string_or_number")]
    pub id: String,
    #[serde(rename = "SousTypeBienName")]
    pub label: String,
}

impl ChildOption {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Endpoint response, in the order received
pub type ChildOptionList = Vec<ChildOption>;

/// 2^53: integral floats below this convert to i64 exactly
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// SQLite rows serialize ids as numbers; hand-written fixtures use strings.
fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => format!("{}", n as i64),
        RawId::Float(n) => n.to_string(),
    })
}
