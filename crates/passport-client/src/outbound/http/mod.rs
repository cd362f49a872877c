//! HTTP adapter for the passport service.
//!
//! A thin reqwest implementation of the executor plus the JSON codec it
//! decodes with.

mod client;
mod codec;

pub use client::{ADMIN_KEY_HEADER, ClientBuildError, PassportClient, TENANT_KEY_HEADER};
pub use codec::decode_json;
