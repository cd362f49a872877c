//! Supplier records.

use serde::{Deserialize, Serialize};

use super::{MaterialCertification, null_as_empty};

/// One supplier as listed by `GET /api/suppliers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierSummary {
    /// Service-assigned identifier.
    pub id: i64,
    /// Display name.
    pub supplier_name: Option<String>,
    /// Role in the chain, e.g. `spinner` or `assembler`.
    pub supplier_type: Option<String>,
    /// Country of operation.
    pub country: Option<String>,
}

/// Full supplier record from `GET /api/suppliers/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDetail {
    /// Service-assigned identifier.
    pub id: i64,
    /// Display name.
    pub supplier_name: Option<String>,
    /// Role in the chain.
    pub supplier_type: Option<String>,
    /// Country of operation.
    pub country: Option<String>,
    /// City of operation.
    pub city: Option<String>,
    /// Postal address.
    pub address: Option<String>,
    /// Contact mailbox.
    pub contact_email: Option<String>,
    /// Ordered certifications; empty when absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub certifications: Vec<MaterialCertification>,
    /// Upstream partners in supply order; empty when absent.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub supply_chain: Vec<SupplierSummary>,
}
