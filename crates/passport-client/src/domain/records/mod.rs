//! Typed passport records decoded from service responses.
//!
//! Field names mirror the service's snake_case wire names one-to-one. Records
//! are built only by decoding a response body and are never patched in place;
//! edits are sent back as fresh values.

mod material;
mod passport_info;
mod product;
mod raw_value;
mod supplier;

use serde::{Deserialize, Deserializer};

pub use material::{MaterialCertification, MaterialComposition, MaterialDetail};
pub use passport_info::{CareInfo, CircularityInfo, SustainabilityInfo};
pub use product::ProductSummary;
pub use raw_value::RawJsonValue;
pub use supplier::{SupplierDetail, SupplierSummary};

/// Decode an optional collection, treating `null` like a missing field.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
