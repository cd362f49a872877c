//! Permissive slot for service fields whose JSON type varies.
//!
//! The passport service emits fields such as `recycled_percentage` as a
//! string, a number or a boolean depending on how the record was entered.
//! Decoding keeps whatever arrived; callers resolve a concrete type lazily.

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// A scalar JSON value of unknown shape.
///
/// Absent fields decode as [`RawJsonValue::Null`].
///
/// # Examples
/// ```
/// use passport_client::domain::RawJsonValue;
///
/// let from_text: RawJsonValue = serde_json::from_str("\"50\"").unwrap();
/// let from_number: RawJsonValue = serde_json::from_str("50").unwrap();
/// assert_eq!(from_text.as_f64(), Some(50.0));
/// assert_eq!(from_number.as_f64(), Some(50.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawJsonValue {
    /// JSON `null` or a missing field.
    #[default]
    Null,
    /// JSON boolean.
    Bool(bool),
    /// JSON number, kept with its original precision.
    Number(Number),
    /// JSON string.
    Text(String),
}

impl RawJsonValue {
    /// Whether the slot holds nothing.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Resolve as a number.
    ///
    /// Strings are trimmed and may carry a trailing `%`. Booleans do not
    /// resolve.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            Self::Text(text) => text
                .trim()
                .trim_end_matches('%')
                .trim_end()
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite()),
            Self::Null | Self::Bool(_) => None,
        }
    }

    /// Resolve as a boolean.
    ///
    /// Accepts `true`/`false`, `yes`/`no`, `y`/`n` and `1`/`0` in any case;
    /// numbers resolve to `true` when non-zero.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            Self::Number(number) => number.as_f64().map(|value| value != 0.0),
            Self::Text(text) => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "yes" | "y" | "1" => Some(true),
                "false" | "no" | "n" | "0" => Some(false),
                _ => None,
            },
            Self::Null => None,
        }
    }

    /// Render for display; `None` for null.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::Bool(flag) => Some(flag.to_string()),
            Self::Number(number) => Some(number.to_string()),
            Self::Text(text) => Some(text.clone()),
        }
    }
}

impl From<bool> for RawJsonValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for RawJsonValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

impl From<&str> for RawJsonValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}
