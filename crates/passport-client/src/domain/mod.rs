//! Domain types for the passport access layer.
//!
//! Nothing here performs I/O: records, credentials, the result type and the
//! ports that outbound adapters implement.

mod api_result;
mod credential_store;
mod credentials;
pub mod ports;
mod records;
pub mod resources;

pub use api_result::ApiResult;
pub use credential_store::CredentialStore;
pub use credentials::{AdminKey, TenantKey};
pub use records::{
    CareInfo, CircularityInfo, MaterialCertification, MaterialComposition, MaterialDetail,
    ProductSummary, RawJsonValue, SupplierDetail, SupplierSummary, SustainabilityInfo,
};
