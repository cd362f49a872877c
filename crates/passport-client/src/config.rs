//! Client configuration loaded via OrthoConfig.
//!
//! Values come from `PASSPORT_*` environment variables or a configuration
//! file. Keys are converted into zeroizing credential types on access.

use std::fmt;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{AdminKey, TenantKey};

const DEFAULT_BASE_URL: &str = "https://localhost:5001";

/// Which dashboard build the client serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeploymentVariant {
    /// Administrative access only; tenant-scoped reads are refused locally.
    #[default]
    AdminOnly,
    /// Administrative access plus tenant-scoped reads.
    MultiTenant,
}

impl DeploymentVariant {
    /// Whether tenant-scoped reads may reach the network.
    #[must_use]
    pub const fn allows_tenant_reads(self) -> bool {
        matches!(self, Self::MultiTenant)
    }
}

/// Configuration values for the passport API client.
#[derive(Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PASSPORT")]
pub struct ClientSettings {
    /// Base endpoint every resource path is resolved against.
    pub base_url: Option<String>,
    /// Administrative key to authenticate with at startup.
    pub admin_key: Option<String>,
    /// Default tenant key for tenant-scoped reads.
    pub tenant_key: Option<String>,
    /// Enable the multi-tenant deployment variant.
    #[ortho_config(default = false)]
    pub multi_tenant: bool,
}

impl ClientSettings {
    /// Return the configured base URL, falling back to the default.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Configured administrative key, ignoring blank values.
    #[must_use]
    pub fn admin_key(&self) -> Option<AdminKey> {
        non_blank(self.admin_key.as_deref()).map(AdminKey::new)
    }

    /// Configured tenant key, ignoring blank values.
    #[must_use]
    pub fn tenant_key(&self) -> Option<TenantKey> {
        non_blank(self.tenant_key.as_deref()).map(TenantKey::new)
    }

    /// Deployment variant selected by `multi_tenant`.
    #[must_use]
    pub const fn variant(&self) -> DeploymentVariant {
        if self.multi_tenant {
            DeploymentVariant::MultiTenant
        } else {
            DeploymentVariant::AdminOnly
        }
    }
}

impl fmt::Debug for ClientSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientSettings")
            .field("base_url", &self.base_url())
            .field("admin_key", &self.admin_key())
            .field("tenant_key", &self.tenant_key())
            .field("multi_tenant", &self.multi_tenant)
            .finish()
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|raw| !raw.trim().is_empty())
}
