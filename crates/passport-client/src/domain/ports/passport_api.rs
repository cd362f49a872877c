//! Collaborator contract exposed to the dashboard UI.
//!
//! The UI layer renders whatever comes back: a `Failure` message inline, an
//! absent body as an empty placeholder. No method here returns `Err`.

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    AdminKey, ApiResult, CareInfo, CircularityInfo, MaterialDetail, ProductSummary,
    SupplierDetail, SupplierSummary, SustainabilityInfo, TenantKey,
};

/// Operations the dashboard screens drive against the passport service.
#[async_trait]
pub trait PassportApi: Send + Sync {
    /// Validate and retain an administrative key.
    async fn authenticate(&self, key: AdminKey) -> bool;

    /// Forget the administrative key.
    async fn logout(&self);

    /// Whether an administrative key is retained.
    fn is_authenticated(&self) -> bool;

    /// Raw body of an admin-scoped GET; `None` on transport failure.
    async fn get_raw(&self, path: &str) -> Option<String>;

    /// Raw body of a tenant-scoped GET; `None` on transport failure.
    async fn get_with_tenant_key(&self, path: &str, tenant_key: &TenantKey) -> Option<String>;

    /// Raw body of a POST; `None` on transport failure.
    async fn post_json(&self, path: &str, body: &Value) -> Option<String>;

    /// Raw body of a PUT; `None` on transport failure.
    async fn put_json(&self, path: &str, body: &Value) -> Option<String>;

    /// Raw body of a DELETE; `None` on transport failure.
    async fn delete_resource(&self, path: &str) -> Option<String>;

    /// Product listing.
    async fn products(&self) -> ApiResult<Vec<ProductSummary>>;

    /// One product.
    async fn product(&self, id: i64) -> ApiResult<ProductSummary>;

    /// Material listing; nested lists may be empty in listing rows.
    async fn materials(&self) -> ApiResult<Vec<MaterialDetail>>;

    /// One material with compositions and certifications.
    async fn material(&self, id: i64) -> ApiResult<MaterialDetail>;

    /// Supplier listing.
    async fn suppliers(&self) -> ApiResult<Vec<SupplierSummary>>;

    /// One supplier with its supply chain.
    async fn supplier(&self, id: i64) -> ApiResult<SupplierDetail>;

    /// Care section of a product.
    async fn care_info(&self, product_id: i64) -> ApiResult<CareInfo>;

    /// Circularity section of a product.
    async fn circularity_info(&self, product_id: i64) -> ApiResult<CircularityInfo>;

    /// Sustainability section of a product.
    async fn sustainability_info(&self, product_id: i64) -> ApiResult<SustainabilityInfo>;
}
