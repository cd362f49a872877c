//! JSON decoding with case-insensitive field matching.
//!
//! The service is not consistent about field-name casing. Object keys are
//! matched against the target struct's declared field names ignoring ASCII
//! case; an exact match wins over a differently cased duplicate. Map and
//! [`Value`] targets see the keys exactly as sent.

use serde::de::value::{MapDeserializer, SeqDeserializer};
use serde::de::{DeserializeOwned, IntoDeserializer, Visitor};
use serde::{Deserializer, forward_to_deserialize_any};
use serde_json::{Map, Value};

use crate::domain::ApiResult;
use crate::domain::ports::ApiCallError;

/// Decode a response body into `T` using the access layer's rules.
///
/// Useful for callers parsing the raw envelopes returned by write calls.
///
/// # Examples
/// ```
/// use passport_client::decode_json;
/// use passport_client::domain::SupplierSummary;
///
/// let supplier = decode_json::<SupplierSummary>(r#"{"ID": 3, "Supplier_Name": "Loom"}"#);
/// assert_eq!(
///     supplier.value().and_then(|s| s.supplier_name.as_deref()),
///     Some("Loom")
/// );
///
/// assert!(decode_json::<SupplierSummary>("").is_failure());
/// ```
pub fn decode_json<T: DeserializeOwned>(body: &str) -> ApiResult<T> {
    decode(body).into()
}

pub(super) fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiCallError> {
    if body.trim().is_empty() {
        return Err(ApiCallError::decode("response body is empty"));
    }
    let document: Value = serde_json::from_str(body)
        .map_err(|error| ApiCallError::decode(format!("invalid JSON payload: {error}")))?;
    T::deserialize(CaseInsensitive(document))
        .map_err(|error| ApiCallError::decode(format!("unexpected payload shape: {error}")))
}

/// Parsed document whose struct keys match declared fields ignoring case.
struct CaseInsensitive(Value);

impl CaseInsensitive {
    fn visit_object<'de, V: Visitor<'de>>(
        entries: Map<String, Value>,
        visitor: V,
    ) -> Result<V::Value, serde_json::Error> {
        let mut access: MapDeserializer<'de, _, serde_json::Error> =
            MapDeserializer::new(entries.into_iter().map(|(key, value)| (key, Self(value))));
        let visited = visitor.visit_map(&mut access)?;
        access.end()?;
        Ok(visited)
    }
}

impl<'de> IntoDeserializer<'de, serde_json::Error> for CaseInsensitive {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self::Deserializer {
        self
    }
}

impl<'de> Deserializer<'de> for CaseInsensitive {
    type Error = serde_json::Error;

    fn deserialize_any<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(entries) => Self::visit_object(entries, visitor),
            Value::Array(items) => {
                let mut access: SeqDeserializer<_, serde_json::Error> =
                    SeqDeserializer::new(items.into_iter().map(Self));
                let visited = visitor.visit_seq(&mut access)?;
                access.end()?;
                Ok(visited)
            }
            scalar => scalar.deserialize_any(visitor),
        }
    }

    fn deserialize_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        fields: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Object(entries) => Self::visit_object(match_fields(entries, fields), visitor),
            other => Self(other).deserialize_any(visitor),
        }
    }

    fn deserialize_option<V: Visitor<'de>>(self, visitor: V) -> Result<V::Value, Self::Error> {
        match self.0 {
            Value::Null => visitor.visit_none(),
            other => visitor.visit_some(Self(other)),
        }
    }

    fn deserialize_newtype_struct<V: Visitor<'de>>(
        self,
        _name: &'static str,
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        visitor.visit_newtype_struct(self)
    }

    fn deserialize_enum<V: Visitor<'de>>(
        self,
        name: &'static str,
        variants: &'static [&'static str],
        visitor: V,
    ) -> Result<V::Value, Self::Error> {
        self.0.deserialize_enum(name, variants, visitor)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map identifier
        ignored_any
    }
}

/// Rename keys to the declared field they equal ignoring ASCII case.
///
/// Unmatched keys pass through so unknown fields are still ignored.
fn match_fields(entries: Map<String, Value>, fields: &[&str]) -> Map<String, Value> {
    let mut matched = Map::with_capacity(entries.len());
    for (key, value) in entries {
        let declared = fields
            .iter()
            .find(|field| field.eq_ignore_ascii_case(&key))
            .filter(|field| **field != key);
        match declared {
            Some(field) => {
                matched.entry(*field).or_insert(value);
            }
            None => {
                matched.insert(key, value);
            }
        }
    }
    matched
}
