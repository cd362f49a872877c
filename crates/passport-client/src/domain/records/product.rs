//! Product listing rows.

use serde::{Deserialize, Serialize};

/// One product as listed by `GET /api/products`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSummary {
    /// Service-assigned identifier.
    pub id: i64,
    /// External product identifier (GTIN, SKU or similar).
    pub product_id: Option<String>,
    /// Display name.
    pub product_name: Option<String>,
    /// Brand label.
    pub brand: Option<String>,
    /// Product category.
    pub category: Option<String>,
    /// Model or style reference.
    pub model_number: Option<String>,
    /// Owning tenant, when the service runs multi-tenant.
    pub tenant_id: Option<String>,
    /// Creation timestamp as emitted by the service.
    pub created_at: Option<String>,
    /// Last update timestamp as emitted by the service.
    pub updated_at: Option<String>,
}
