//! Owner of the single administrative credential.
//!
//! The store is an explicit value shared by reference (usually behind an
//! `Arc`) between every call site. Reads take a short read lock;
//! `authenticate` and `logout` are serialised through an async writer gate so
//! a probe in flight cannot race a logout.

use std::sync::{PoisonError, RwLock};

use tokio::sync::Mutex;
use tracing::{info, warn};

use super::AdminKey;
use super::ports::CredentialProbe;

/// Holds zero or one active administrative credential.
///
/// ## State machine
/// - `Unauthenticated` → `Authenticated` when a probe accepts the key.
/// - `Authenticated` → `Unauthenticated` on logout.
/// - Any failed authentication ends in `Unauthenticated`, whatever the prior
///   state.
///
/// There is no implicit expiry.
#[derive(Debug, Default)]
pub struct CredentialStore {
    active: RwLock<Option<AdminKey>>,
    writer: Mutex<()>,
}

impl CredentialStore {
    /// Create an unauthenticated store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `key` with `probe` and retain it on success.
    ///
    /// A rejected key, or a probe that could not reach the service, clears
    /// any previously retained credential.
    pub async fn authenticate<P>(&self, key: AdminKey, probe: &P) -> bool
    where
        P: CredentialProbe + ?Sized,
    {
        let _writer = self.writer.lock().await;
        let key_fingerprint = key.fingerprint();
        if probe.probe(&key).await {
            self.replace(Some(key));
            info!(%key_fingerprint, "administrative credential accepted");
            true
        } else {
            self.replace(None);
            warn!(%key_fingerprint, "administrative credential rejected");
            false
        }
    }

    /// Drop the retained credential. Idempotent.
    pub async fn logout(&self) {
        let _writer = self.writer.lock().await;
        if self.replace(None).is_some() {
            info!("administrative credential cleared");
        }
    }

    /// Whether a credential is currently retained.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Snapshot of the retained credential for one outgoing request.
    #[must_use]
    pub fn current(&self) -> Option<AdminKey> {
        self.active
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn replace(&self, next: Option<AdminKey>) -> Option<AdminKey> {
        let mut slot = self.active.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *slot, next)
    }
}
