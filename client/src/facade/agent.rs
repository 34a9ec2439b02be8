use std::sync::Arc;

use shared::{AgentSummary, AgentTxn, AgentTxnFilter, CashRequest, Envelope, TxnReceipt};
use tracing::debug;

use crate::core::error::Result;
use crate::core::service::AgentApi;
use crate::facade::{require_filled, require_positive, Query};

/// Cached reads of the agent domain.
#[derive(Clone, Copy)]
enum AgentTag {
    Summary,
    Txns,
}

/// Cash-in and cash-out both land in today's totals and the ledger.
const AGENT_WRITE_TAGS: &[AgentTag] = &[AgentTag::Summary, AgentTag::Txns];

pub struct AgentFacade {
    api: Arc<dyn AgentApi>,
    summary: Query<(), AgentSummary>,
    txns: Query<AgentTxnFilter, Envelope<AgentTxn>>,
}

impl AgentFacade {
    pub fn new(api: Arc<dyn AgentApi>) -> Self {
        Self {
            api,
            summary: Query::new(),
            txns: Query::new(),
        }
    }

    pub async fn summary(&self) -> Result<AgentSummary> {
        let api = Arc::clone(&self.api);
        let summary = self
            .summary
            .fetch((), move || async move { api.summary().await })
            .await?;
        Ok(summary)
    }

    pub async fn txns(&self, filter: AgentTxnFilter) -> Result<Envelope<AgentTxn>> {
        let filter = normalize(filter);
        let api = Arc::clone(&self.api);
        let load_filter = filter.clone();
        let page = self
            .txns
            .fetch(filter, move || async move { api.txns(load_filter).await })
            .await?;
        Ok(page)
    }

    pub async fn cash_in(&self, req: CashRequest) -> Result<TxnReceipt> {
        require_filled(&req.user, "Customer")?;
        require_positive(req.amount, "Amount")?;
        let receipt = self.api.cash_in(req).await?;
        self.invalidate(AGENT_WRITE_TAGS);
        Ok(receipt)
    }

    pub async fn cash_out(&self, req: CashRequest) -> Result<TxnReceipt> {
        require_filled(&req.user, "Customer")?;
        require_positive(req.amount, "Amount")?;
        let receipt = self.api.cash_out(req).await?;
        self.invalidate(AGENT_WRITE_TAGS);
        Ok(receipt)
    }

    fn invalidate(&self, tags: &[AgentTag]) {
        debug!(tags = tags.len(), "invalidating agent caches");
        for tag in tags {
            match tag {
                AgentTag::Summary => self.summary.invalidate(),
                AgentTag::Txns => self.txns.invalidate(),
            }
        }
    }
}

fn normalize(filter: AgentTxnFilter) -> AgentTxnFilter {
    AgentTxnFilter {
        page: filter.page.max(1),
        page_size: filter.page_size.max(1),
        ..filter
    }
}
