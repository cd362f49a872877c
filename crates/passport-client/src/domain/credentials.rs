//! Credential primitives for the passport service.
//!
//! Both key kinds are opaque secrets. They are held in zeroizing buffers and
//! never rendered through `Debug`; logs refer to a key by its fingerprint.

use std::fmt;

use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

/// Length of a key fingerprint in bytes before hex encoding.
const FINGERPRINT_BYTES: usize = 8;

/// Administrative credential sent as `X-Admin-Key`.
///
/// Authorises create/update/delete and every admin read. At most one is
/// active per [`CredentialStore`](super::CredentialStore).
///
/// # Examples
/// ```
/// use passport_client::domain::AdminKey;
///
/// let key = AdminKey::new("s3cret");
/// assert_eq!(key.expose(), "s3cret");
/// assert!(!format!("{key:?}").contains("s3cret"));
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AdminKey(Zeroizing<String>);

impl AdminKey {
    /// Wrap a raw administrative key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Raw key material for the request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    /// Truncated SHA-256 fingerprint safe to emit in logs.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        fingerprint(self.expose())
    }
}

impl fmt::Debug for AdminKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AdminKey").field(&self.fingerprint()).finish()
    }
}

impl From<&str> for AdminKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for AdminKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

/// Tenant-scoped credential sent as `X-API-Key`.
///
/// Supplied per call for tenant-facing reads and never retained.
#[derive(Clone, PartialEq, Eq)]
pub struct TenantKey(Zeroizing<String>);

impl TenantKey {
    /// Wrap a raw tenant key.
    pub fn new(value: impl Into<String>) -> Self {
        Self(Zeroizing::new(value.into()))
    }

    /// Raw key material for the request header.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for TenantKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TenantKey")
            .field(&fingerprint(self.expose()))
            .finish()
    }
}

impl From<&str> for TenantKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

fn fingerprint(secret: &str) -> String {
    let digest = Sha256::digest(secret.as_bytes());
    hex::encode(&digest[..FINGERPRINT_BYTES])
}
