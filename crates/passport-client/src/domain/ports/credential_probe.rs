//! Driven port used to validate an administrative key before it is retained.

use async_trait::async_trait;

use crate::domain::AdminKey;

/// Lightweight authorised call that tells whether a key is accepted.
///
/// Implementations must absorb every failure and answer `false`.
#[async_trait]
pub trait CredentialProbe: Send + Sync {
    /// Return `true` when the service accepts `key` as administrative.
    async fn probe(&self, key: &AdminKey) -> bool;
}
