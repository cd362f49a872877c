//! Relative resource paths served by the passport service.
//!
//! Every path is relative to the configured base endpoint.

/// Admin-only endpoint used to validate an administrative key.
pub const ADMIN_STATS: &str = "/api/admin/stats";
/// Product collection.
pub const PRODUCTS: &str = "/api/products";
/// Material collection.
pub const MATERIALS: &str = "/api/materials";
/// Supplier collection.
pub const SUPPLIERS: &str = "/api/suppliers";

/// Path to one product.
#[must_use]
pub fn product(id: i64) -> String {
    format!("{PRODUCTS}/{id}")
}

/// Path to a product's care section.
#[must_use]
pub fn product_care(id: i64) -> String {
    format!("{PRODUCTS}/{id}/care")
}

/// Path to a product's circularity section.
#[must_use]
pub fn product_circularity(id: i64) -> String {
    format!("{PRODUCTS}/{id}/circularity")
}

/// Path to a product's sustainability section.
#[must_use]
pub fn product_sustainability(id: i64) -> String {
    format!("{PRODUCTS}/{id}/sustainability")
}

/// Path to one material.
#[must_use]
pub fn material(id: i64) -> String {
    format!("{MATERIALS}/{id}")
}

/// Path to one supplier.
#[must_use]
pub fn supplier(id: i64) -> String {
    format!("{SUPPLIERS}/{id}")
}

/// Tenant-facing passport for one product, read with a tenant key.
#[must_use]
pub fn public_product(id: i64) -> String {
    format!("/api/public/products/{id}")
}
