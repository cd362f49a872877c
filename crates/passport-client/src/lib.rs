//! Typed access layer for the digital product passport REST service.
//!
//! The dashboard UI talks to the passport service only through this crate.
//! It authenticates with an administrative key, attaches the right credential
//! to each request, decodes JSON into typed records and reports every failure
//! as a value rather than an error.
//!
//! # Overview
//!
//! - [`domain::CredentialStore`] holds zero or one administrative key.
//! - [`PassportClient`] executes requests and returns [`domain::ApiResult`]
//!   for typed reads or `Option<String>` for raw and mutating calls.
//! - [`domain::ports::PassportApi`] is the collaborator contract the UI
//!   consumes.
//!
//! # Example
//!
//! ```rust,no_run
//! use passport_client::PassportClient;
//! use passport_client::domain::{ApiResult, ProductSummary};
//!
//! # async fn run() -> Result<(), passport_client::ClientBuildError> {
//! let client = PassportClient::new("https://passport.example")?;
//! if client.authenticate("admin-secret").await {
//!     match client.get_typed::<Vec<ProductSummary>>("/api/products").await {
//!         ApiResult::Success(products) => println!("{} products", products.len()),
//!         ApiResult::Failure(message) => eprintln!("{message}"),
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod config;
pub mod domain;
pub mod outbound;

pub use config::{ClientSettings, DeploymentVariant};
pub use outbound::http::{
    ADMIN_KEY_HEADER, ClientBuildError, PassportClient, TENANT_KEY_HEADER, decode_json,
};
