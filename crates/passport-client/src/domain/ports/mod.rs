//! Domain ports for the passport service.
//!
//! The domain owns the collaborator contract exposed to the dashboard UI and
//! the probe used to validate administrative credentials. Outbound adapters
//! implement both.

mod api_call_error;
mod credential_probe;
mod passport_api;

pub use api_call_error::ApiCallError;
pub use credential_probe::CredentialProbe;
pub use passport_api::PassportApi;
