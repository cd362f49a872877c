//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **http**: reqwest-backed executor for the passport REST service

pub mod http;
