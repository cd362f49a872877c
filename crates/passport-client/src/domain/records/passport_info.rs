//! Per-product passport sections: care, circularity and sustainability.

use serde::{Deserialize, Serialize};

use super::{MaterialCertification, RawJsonValue, null_as_empty};

/// Care section from `GET /api/products/{id}/care`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareInfo {
    /// Owning product identifier.
    pub product_id: Option<i64>,
    /// Washing guidance.
    pub washing_instructions: Option<String>,
    /// Drying guidance.
    pub drying_instructions: Option<String>,
    /// Ironing guidance.
    pub ironing_instructions: Option<String>,
    /// Bleaching guidance.
    pub bleaching_instructions: Option<String>,
    /// Professional cleaning guidance.
    pub dry_cleaning_instructions: Option<String>,
    /// Repair guidance.
    pub repair_instructions: Option<String>,
}

/// Circularity section from `GET /api/products/{id}/circularity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircularityInfo {
    /// Owning product identifier.
    pub product_id: Option<i64>,
    /// Recyclability statement.
    pub recyclability: Option<String>,
    /// Whether the product contains recycled content; shape varies on the wire.
    #[serde(default)]
    pub recycled: RawJsonValue,
    /// Recycled content share; shape varies on the wire.
    #[serde(default)]
    pub recycled_percentage: RawJsonValue,
    /// Take-back scheme description.
    pub take_back_program: Option<String>,
    /// End-of-life guidance.
    pub end_of_life_instructions: Option<String>,
    /// Repairability score on the service's scale.
    pub repairability_score: Option<f64>,
}

/// Sustainability section from `GET /api/products/{id}/sustainability`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SustainabilityInfo {
    /// Owning product identifier.
    pub product_id: Option<i64>,
    /// Carbon footprint in kg CO2e.
    pub carbon_footprint: Option<f64>,
    /// Water usage in litres.
    pub water_usage: Option<f64>,
    /// Energy consumption in kWh.
    pub energy_consumption: Option<f64>,
    /// Free-text impact summary.
    pub environmental_impact: Option<String>,
    /// Environmental certifications; empty when absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<MaterialCertification>,
}
