//! # Admin Store
//!
//! Platform-wide view: the moderation directory of users and agents, and the
//! global transaction ledger across every domain. Moderation flips directory
//! statuses in place; the ledger itself is read-only here.

use shared::{
    Ack, AdminStats, AdminTxn, AdminTxnFilter, DirectoryEntry, DirectoryFilter, DirectoryRole,
    DirectoryStatus, Envelope,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::latency::Latency;
use crate::store::{matches_query, paginate, seed};

pub struct AdminStore {
    latency: Latency,
    inner: RwLock<AdminState>,
}

struct AdminState {
    users: Vec<DirectoryEntry>,
    /// Newest first.
    txns: Vec<AdminTxn>,
}

impl AdminStore {
    /// Store seeded with the demo directory and global ledger.
    pub fn new(latency: Latency) -> Self {
        Self::with_records(latency, seed::directory(), seed::global_txns())
    }

    /// Store with caller-supplied directory and ledger (ledger newest first).
    pub fn with_records(
        latency: Latency,
        users: Vec<DirectoryEntry>,
        txns: Vec<AdminTxn>,
    ) -> Self {
        Self {
            latency,
            inner: RwLock::new(AdminState { users, txns }),
        }
    }

    /// Headline counts and gross volume, recomputed on every call.
    pub async fn stats(&self) -> AdminStats {
        self.latency.simulate().await;
        let state = self.inner.read().await;
        AdminStats {
            total_users: state
                .users
                .iter()
                .filter(|u| u.role == DirectoryRole::User)
                .count(),
            total_agents: state
                .users
                .iter()
                .filter(|u| u.role == DirectoryRole::Agent)
                .count(),
            tx_count: state.txns.len(),
            volume: state.txns.iter().map(|t| t.amount).sum(),
        }
    }

    /// The moderation directory. Filter order: role, then status, then free
    /// text over name/email/phone. Small enough to return whole.
    pub async fn users(&self, filter: DirectoryFilter) -> Envelope<DirectoryEntry> {
        self.latency.simulate().await;
        let state = self.inner.read().await;
        Self::directory_page(&state.users, &filter)
    }

    /// The directory restricted to agents, with the same filtering.
    pub async fn agents(&self, filter: DirectoryFilter) -> Envelope<DirectoryEntry> {
        self.latency.simulate().await;
        let state = self.inner.read().await;
        Self::directory_page(
            &state.users,
            &DirectoryFilter {
                role: Some(DirectoryRole::Agent),
                ..filter
            },
        )
    }

    fn directory_page(
        users: &[DirectoryEntry],
        filter: &DirectoryFilter,
    ) -> Envelope<DirectoryEntry> {
        let items: Vec<DirectoryEntry> = users
            .iter()
            .filter(|u| filter.role.map_or(true, |r| u.role == r))
            .filter(|u| filter.status.map_or(true, |s| u.status == s))
            .filter(|u| {
                filter.query.as_deref().map_or(true, |q| {
                    matches_query(
                        q,
                        &[
                            Some(u.name.as_str()),
                            Some(u.email.as_str()),
                            u.phone.as_deref(),
                        ],
                    )
                })
            })
            .cloned()
            .collect();
        let total = items.len();
        Envelope {
            items,
            total,
            page: 1,
            page_size: total.max(1),
        }
    }

    /// Flip a user between blocked and active. Unknown ids are ignored.
    pub async fn toggle_user(&self, id: &str) -> Result<Ack> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.status = if user.status == DirectoryStatus::Blocked {
                DirectoryStatus::Active
            } else {
                DirectoryStatus::Blocked
            };
            debug!(%id, status = ?user.status, "user toggled");
        }
        Ok(Ack { ok: true })
    }

    /// Move an agent to active. Unknown ids are ignored.
    pub async fn approve_agent(&self, id: &str) -> Result<Ack> {
        self.set_status(id, DirectoryStatus::Active).await
    }

    /// Move an agent to blocked. Unknown ids are ignored.
    pub async fn suspend_agent(&self, id: &str) -> Result<Ack> {
        self.set_status(id, DirectoryStatus::Blocked).await
    }

    async fn set_status(&self, id: &str, status: DirectoryStatus) -> Result<Ack> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        if let Some(user) = state.users.iter_mut().find(|u| u.id == id) {
            user.status = status;
            debug!(%id, ?status, "directory status set");
        }
        Ok(Ack { ok: true })
    }

    /// Filtered, paginated global ledger page. Filter order: type, then free
    /// text over id/actor.
    pub async fn global_txns(&self, filter: AdminTxnFilter) -> Envelope<AdminTxn> {
        self.latency.simulate().await;
        let state = self.inner.read().await;

        let filtered: Vec<AdminTxn> = state
            .txns
            .iter()
            .filter(|t| filter.txn_type.map_or(true, |ty| t.txn_type == ty))
            .filter(|t| {
                filter.query.as_deref().map_or(true, |q| {
                    matches_query(q, &[Some(t.id.as_str()), Some(t.actor.as_str())])
                })
            })
            .cloned()
            .collect();

        paginate(&filtered, filter.page, filter.page_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn toggle_flips_between_blocked_and_active() {
        let store = AdminStore::new(Latency::None);

        // u_3 seeds as blocked (index 2 of the status cycle).
        store.toggle_user("u_3").await.unwrap();
        let users = store.users(DirectoryFilter::default()).await;
        let u3 = users.items.iter().find(|u| u.id == "u_3").unwrap();
        assert_eq!(u3.status, DirectoryStatus::Active);

        store.toggle_user("u_3").await.unwrap();
        let users = store.users(DirectoryFilter::default()).await;
        let u3 = users.items.iter().find(|u| u.id == "u_3").unwrap();
        assert_eq!(u3.status, DirectoryStatus::Blocked);
    }

    #[tokio::test]
    async fn moderating_an_unknown_id_is_a_quiet_no_op() {
        let store = AdminStore::new(Latency::None);
        let before = store.users(DirectoryFilter::default()).await;

        let ack = store.toggle_user("u_does_not_exist").await.unwrap();
        assert!(ack.ok);
        store.approve_agent("nope").await.unwrap();

        let after = store.users(DirectoryFilter::default()).await;
        assert_eq!(before.items, after.items);
    }

    #[tokio::test]
    async fn approve_and_suspend_assign_the_target_status() {
        let store = AdminStore::new(Latency::None);

        // u_16 seeds as an agent with pending status.
        store.approve_agent("u_16").await.unwrap();
        let agents = store.agents(DirectoryFilter::default()).await;
        let agent = agents.items.iter().find(|u| u.id == "u_16").unwrap();
        assert_eq!(agent.status, DirectoryStatus::Active);

        store.suspend_agent("u_16").await.unwrap();
        let agents = store.agents(DirectoryFilter::default()).await;
        let agent = agents.items.iter().find(|u| u.id == "u_16").unwrap();
        assert_eq!(agent.status, DirectoryStatus::Blocked);
    }

    #[tokio::test]
    async fn stats_partition_the_directory_by_role() {
        let store = AdminStore::new(Latency::None);
        let stats = store.stats().await;
        // Every fifth of the 42 seeded entries is an agent.
        assert_eq!(stats.total_agents, 9);
        assert_eq!(stats.total_users, 33);
        assert_eq!(stats.tx_count, 120);
        assert!(stats.volume > 0);
    }

    #[tokio::test]
    async fn agents_listing_never_leaks_plain_users() {
        let store = AdminStore::new(Latency::None);
        let agents = store.agents(DirectoryFilter::default()).await;
        assert!(agents.items.iter().all(|u| u.role == DirectoryRole::Agent));
        assert_eq!(agents.total, 9);
    }

    #[tokio::test]
    async fn directory_query_searches_name_email_and_phone() {
        let store = AdminStore::new(Latency::None);

        let by_email = store
            .users(DirectoryFilter {
                query: Some("user7@zpay".to_string()),
                ..DirectoryFilter::default()
            })
            .await;
        assert_eq!(by_email.total, 1);
        assert_eq!(by_email.items[0].id, "u_7");

        let by_phone = store
            .users(DirectoryFilter {
                query: Some("01710000005".to_string()),
                ..DirectoryFilter::default()
            })
            .await;
        assert_eq!(by_phone.total, 1);
        assert_eq!(by_phone.items[0].id, "u_6");
    }
}
