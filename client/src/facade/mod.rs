//! # Query/Mutation Façade
//!
//! The request boundary the dashboards call. Reads are cached per exact
//! parameter tuple with at most one in-flight backend call per key; writes
//! validate their input first, then invalidate the read caches their domain
//! declares for them, so dependent views re-fetch on their next read.
//!
//! Invalidation is declared once per domain as a write-op → tag map (see the
//! `*_TAGS` constants in each domain module) rather than scattered across
//! call sites.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::core::error::{ClientError, Result};

pub mod admin;
pub mod agent;
pub mod landing;
pub mod wallet;

pub use admin::AdminFacade;
pub use agent::AgentFacade;
pub use landing::LandingFacade;
pub use wallet::WalletFacade;

use backend::MockBackend;

/// All four domain façades over one backend.
pub struct Facade {
    pub wallet: WalletFacade,
    pub agent: AgentFacade,
    pub admin: AdminFacade,
    pub landing: LandingFacade,
}

impl Facade {
    pub fn new(backend: Arc<MockBackend>) -> Self {
        Self {
            wallet: WalletFacade::new(backend.clone()),
            agent: AgentFacade::new(backend.clone()),
            admin: AdminFacade::new(backend.clone()),
            landing: LandingFacade::new(backend),
        }
    }
}

/// One cached query: a map from parameter tuple to a lazily-filled slot.
///
/// Concurrent callers for the same key share a single in-flight load.
/// [`Query::invalidate`] detaches every slot; a load still in flight on a
/// detached slot resolves for its callers but is never re-attached, so the
/// next read after an invalidation always hits the backend fresh. Failed
/// loads leave the slot empty and are retried on the next call.
pub(crate) struct Query<K, V> {
    slots: Mutex<HashMap<K, Arc<OnceCell<V>>>>,
}

impl<K, V> Query<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            slots: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) async fn fetch<F, Fut>(&self, key: K, load: F) -> backend::Result<V>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = backend::Result<V>>,
    {
        let slot = self.slots.lock().entry(key).or_default().clone();
        slot.get_or_try_init(load).await.map(|value| value.clone())
    }

    pub(crate) fn invalidate(&self) {
        self.slots.lock().clear();
    }
}

/// Reject non-positive amounts before they reach the backend.
pub(crate) fn require_positive(amount: i64, field: &str) -> Result<()> {
    if amount <= 0 {
        return Err(ClientError::Validation(format!(
            "{} must be greater than 0",
            field
        )));
    }
    Ok(())
}

/// Reject blank identifiers before they reach the backend.
pub(crate) fn require_filled(value: &str, field: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::Validation(format!(
            "{} cannot be empty",
            field
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_amounts_pass() {
        assert!(require_positive(1, "Amount").is_ok());
        assert!(require_positive(0, "Amount").is_err());
        assert!(require_positive(-50, "Amount").is_err());
    }

    #[test]
    fn blank_fields_fail() {
        assert!(require_filled("01710001122", "Recipient").is_ok());
        assert!(require_filled("   ", "Recipient").is_err());
    }
}
