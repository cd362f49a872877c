//! Material records and their nested composition and certification rows.

use serde::{Deserialize, Serialize};

use super::{RawJsonValue, null_as_empty};

/// One constituent of a material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialComposition {
    /// Constituent name, e.g. `organic cotton`.
    pub component_name: Option<String>,
    /// Share of the material; string, number or boolean on the wire.
    #[serde(default)]
    pub content_value: RawJsonValue,
    /// Unit for `content_value`, usually `%`.
    pub content_unit: Option<String>,
    /// Whether the constituent is recycled; shape varies on the wire.
    #[serde(default)]
    pub recycled: RawJsonValue,
    /// Recycled share of the constituent; shape varies on the wire.
    #[serde(default)]
    pub recycled_percentage: RawJsonValue,
    /// Country of origin.
    pub origin_country: Option<String>,
}

/// A certification attached to a material or supplier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialCertification {
    /// Certification scheme, e.g. `GOTS`.
    pub certification_name: Option<String>,
    /// Issuing body.
    pub certification_body: Option<String>,
    /// Certificate reference.
    pub certificate_number: Option<String>,
    /// Expiry date as emitted by the service.
    pub valid_until: Option<String>,
}

/// Full material record from `GET /api/materials/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialDetail {
    /// Service-assigned identifier.
    pub id: i64,
    /// Display name.
    pub material_name: Option<String>,
    /// Material family, e.g. `textile`.
    pub material_type: Option<String>,
    /// Free-text description.
    pub description: Option<String>,
    /// Ordered constituents; empty when absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub compositions: Vec<MaterialComposition>,
    /// Ordered certifications; empty when absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<MaterialCertification>,
}
