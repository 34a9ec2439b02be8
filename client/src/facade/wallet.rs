use std::sync::Arc;

use shared::{
    Ack, DepositRequest, Envelope, SendRequest, Txn, TxnFilter, WalletSummary, WithdrawRequest,
};
use tracing::debug;

use crate::core::error::Result;
use crate::core::service::WalletApi;
use crate::facade::{require_filled, require_positive, Query};

/// Cached reads of the wallet domain.
#[derive(Clone, Copy)]
enum WalletTag {
    Summary,
    Txns,
}

/// Every wallet mutation moves the balance and the ledger together, so each
/// one stales the whole domain cache.
const WALLET_WRITE_TAGS: &[WalletTag] = &[WalletTag::Summary, WalletTag::Txns];

pub struct WalletFacade {
    api: Arc<dyn WalletApi>,
    summary: Query<(), WalletSummary>,
    txns: Query<TxnFilter, Envelope<Txn>>,
}

impl WalletFacade {
    pub fn new(api: Arc<dyn WalletApi>) -> Self {
        Self {
            api,
            summary: Query::new(),
            txns: Query::new(),
        }
    }

    pub async fn summary(&self) -> Result<WalletSummary> {
        let api = Arc::clone(&self.api);
        let summary = self
            .summary
            .fetch((), move || async move { api.summary().await })
            .await?;
        Ok(summary)
    }

    pub async fn txns(&self, filter: TxnFilter) -> Result<Envelope<Txn>> {
        let filter = normalize(filter);
        let api = Arc::clone(&self.api);
        let load_filter = filter.clone();
        let page = self
            .txns
            .fetch(filter, move || async move { api.txns(load_filter).await })
            .await?;
        Ok(page)
    }

    pub async fn deposit(&self, req: DepositRequest) -> Result<Ack> {
        require_positive(req.amount, "Amount")?;
        let ack = self.api.deposit(req).await?;
        self.invalidate(WALLET_WRITE_TAGS);
        Ok(ack)
    }

    pub async fn withdraw(&self, req: WithdrawRequest) -> Result<Ack> {
        require_positive(req.amount, "Amount")?;
        let ack = self.api.withdraw(req).await?;
        self.invalidate(WALLET_WRITE_TAGS);
        Ok(ack)
    }

    pub async fn send(&self, req: SendRequest) -> Result<Ack> {
        require_positive(req.amount, "Amount")?;
        require_filled(&req.to, "Recipient")?;
        let ack = self.api.send(req).await?;
        self.invalidate(WALLET_WRITE_TAGS);
        Ok(ack)
    }

    fn invalidate(&self, tags: &[WalletTag]) {
        debug!(tags = tags.len(), "invalidating wallet caches");
        for tag in tags {
            match tag {
                WalletTag::Summary => self.summary.invalidate(),
                WalletTag::Txns => self.txns.invalidate(),
            }
        }
    }
}

/// Clamp paging so `{page: 0}` and `{page: 1}` share a cache entry as well
/// as a result.
fn normalize(filter: TxnFilter) -> TxnFilter {
    TxnFilter {
        page: filter.page.max(1),
        page_size: filter.page_size.max(1),
        ..filter
    }
}
