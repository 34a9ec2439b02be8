use std::sync::Arc;

use shared::{
    Ack, AdminStats, AdminTxn, AdminTxnFilter, DirectoryEntry, DirectoryFilter, Envelope,
};
use tracing::debug;

use crate::core::error::Result;
use crate::core::service::AdminApi;
use crate::facade::{require_filled, Query};

/// Cached reads a moderation write can stale. The global ledger is read-only
/// from this dashboard, so no write ever invalidates it and it has no tag.
#[derive(Clone, Copy)]
enum AdminTag {
    Stats,
    Users,
    Agents,
}

const TOGGLE_USER_TAGS: &[AdminTag] = &[AdminTag::Users, AdminTag::Stats];
const APPROVE_AGENT_TAGS: &[AdminTag] = &[AdminTag::Agents, AdminTag::Stats];
const SUSPEND_AGENT_TAGS: &[AdminTag] = &[AdminTag::Agents, AdminTag::Stats];

pub struct AdminFacade {
    api: Arc<dyn AdminApi>,
    stats: Query<(), AdminStats>,
    users: Query<DirectoryFilter, Envelope<DirectoryEntry>>,
    agents: Query<DirectoryFilter, Envelope<DirectoryEntry>>,
    global_txns: Query<AdminTxnFilter, Envelope<AdminTxn>>,
}

impl AdminFacade {
    pub fn new(api: Arc<dyn AdminApi>) -> Self {
        Self {
            api,
            stats: Query::new(),
            users: Query::new(),
            agents: Query::new(),
            global_txns: Query::new(),
        }
    }

    pub async fn stats(&self) -> Result<AdminStats> {
        let api = Arc::clone(&self.api);
        let stats = self
            .stats
            .fetch((), move || async move { api.stats().await })
            .await?;
        Ok(stats)
    }

    pub async fn users(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>> {
        let api = Arc::clone(&self.api);
        let load_filter = filter.clone();
        let page = self
            .users
            .fetch(filter, move || async move { api.users(load_filter).await })
            .await?;
        Ok(page)
    }

    pub async fn agents(&self, filter: DirectoryFilter) -> Result<Envelope<DirectoryEntry>> {
        let api = Arc::clone(&self.api);
        let load_filter = filter.clone();
        let page = self
            .agents
            .fetch(filter, move || async move { api.agents(load_filter).await })
            .await?;
        Ok(page)
    }

    pub async fn global_txns(&self, filter: AdminTxnFilter) -> Result<Envelope<AdminTxn>> {
        let filter = normalize(filter);
        let api = Arc::clone(&self.api);
        let load_filter = filter.clone();
        let page = self
            .global_txns
            .fetch(filter, move || async move {
                api.global_txns(load_filter).await
            })
            .await?;
        Ok(page)
    }

    pub async fn toggle_user(&self, id: &str) -> Result<Ack> {
        require_filled(id, "User id")?;
        let ack = self.api.toggle_user(id).await?;
        self.invalidate(TOGGLE_USER_TAGS);
        Ok(ack)
    }

    pub async fn approve_agent(&self, id: &str) -> Result<Ack> {
        require_filled(id, "Agent id")?;
        let ack = self.api.approve_agent(id).await?;
        self.invalidate(APPROVE_AGENT_TAGS);
        Ok(ack)
    }

    pub async fn suspend_agent(&self, id: &str) -> Result<Ack> {
        require_filled(id, "Agent id")?;
        let ack = self.api.suspend_agent(id).await?;
        self.invalidate(SUSPEND_AGENT_TAGS);
        Ok(ack)
    }

    fn invalidate(&self, tags: &[AdminTag]) {
        debug!(tags = tags.len(), "invalidating admin caches");
        for tag in tags {
            match tag {
                AdminTag::Stats => self.stats.invalidate(),
                AdminTag::Users => self.users.invalidate(),
                AdminTag::Agents => self.agents.invalidate(),
            }
        }
    }
}

fn normalize(filter: AdminTxnFilter) -> AdminTxnFilter {
    AdminTxnFilter {
        page: filter.page.max(1),
        page_size: filter.page_size.max(1),
        ..filter
    }
}
