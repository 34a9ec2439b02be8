//! # Agent Store
//!
//! The agent booth ledger: cash handed in or out on behalf of customers,
//! newest record first. The agent earns a flat 0.6% commission on monthly
//! volume, shown on the dashboard.

use chrono::Utc;
use shared::{
    AgentSummary, AgentTxn, AgentTxnFilter, AgentTxnType, CashRequest, Envelope, TxnReceipt,
    TxnStatus,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::latency::Latency;
use crate::store::{in_current_month, matches_query, paginate, seed, start_of_today};

/// Commission rate on monthly volume, in basis points.
const COMMISSION_BPS: i64 = 60;

pub struct AgentStore {
    latency: Latency,
    inner: RwLock<AgentState>,
}

struct AgentState {
    /// Newest first.
    txns: Vec<AgentTxn>,
    next_id: usize,
}

impl AgentState {
    fn record(&mut self, txn_type: AgentTxnType, req: CashRequest, default_note: &str) -> String {
        let id = format!("a_tx_{}", self.next_id);
        self.next_id += 1;
        self.txns.insert(
            0,
            AgentTxn {
                id: id.clone(),
                txn_type,
                user: req.user,
                amount: req.amount,
                note: Some(req.note.unwrap_or_else(|| default_note.to_string())),
                status: TxnStatus::Success,
                created_at: Utc::now(),
            },
        );
        id
    }
}

impl AgentStore {
    /// Store seeded with the demo ledger.
    pub fn new(latency: Latency) -> Self {
        Self::with_records(latency, seed::agent_txns())
    }

    /// Store with a caller-supplied ledger, newest first.
    pub fn with_records(latency: Latency, txns: Vec<AgentTxn>) -> Self {
        let next_id = txns.len() + 1;
        Self {
            latency,
            inner: RwLock::new(AgentState { txns, next_id }),
        }
    }

    /// Store with no history, as a freshly onboarded agent would see.
    pub fn empty(latency: Latency) -> Self {
        Self::with_records(latency, Vec::new())
    }

    /// Today's cash movement plus the running monthly commission,
    /// recomputed from the ledger on every call.
    pub async fn summary(&self) -> AgentSummary {
        self.latency.simulate().await;
        let state = self.inner.read().await;

        let today = start_of_today();
        let mut today_cash_in = 0;
        let mut today_cash_out = 0;
        let mut month_volume = 0;
        for txn in &state.txns {
            if txn.created_at >= today {
                match txn.txn_type {
                    AgentTxnType::CashIn => today_cash_in += txn.amount,
                    AgentTxnType::CashOut => today_cash_out += txn.amount,
                }
            }
            if in_current_month(txn.created_at) {
                month_volume += txn.amount;
            }
        }

        AgentSummary {
            today_cash_in,
            today_cash_out,
            month_commission: (month_volume as f64 * COMMISSION_BPS as f64 / 10_000.0).round()
                as i64,
        }
    }

    /// Filtered, paginated ledger page. Filter order: type, then free text
    /// over id/user/note.
    pub async fn txns(&self, filter: AgentTxnFilter) -> Envelope<AgentTxn> {
        self.latency.simulate().await;
        let state = self.inner.read().await;

        let filtered: Vec<AgentTxn> = state
            .txns
            .iter()
            .filter(|t| filter.txn_type.map_or(true, |ty| t.txn_type == ty))
            .filter(|t| {
                filter.query.as_deref().map_or(true, |q| {
                    matches_query(
                        q,
                        &[Some(t.id.as_str()), Some(t.user.as_str()), t.note.as_deref()],
                    )
                })
            })
            .cloned()
            .collect();

        paginate(&filtered, filter.page, filter.page_size)
    }

    pub async fn cash_in(&self, req: CashRequest) -> Result<TxnReceipt> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        let id = state.record(AgentTxnType::CashIn, req, "Cash-in");
        debug!(%id, "cash-in recorded");
        Ok(TxnReceipt { ok: true, id })
    }

    pub async fn cash_out(&self, req: CashRequest) -> Result<TxnReceipt> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        let id = state.record(AgentTxnType::CashOut, req, "Cash-out");
        debug!(%id, "cash-out recorded");
        Ok(TxnReceipt { ok: true, id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_booth_accumulates_todays_cash_movement() {
        let store = AgentStore::empty(Latency::None);

        let receipt = store
            .cash_in(CashRequest {
                user: "01710001122".to_string(),
                amount: 800,
                note: None,
            })
            .await
            .unwrap();
        assert!(receipt.ok);
        assert_eq!(receipt.id, "a_tx_1");

        store
            .cash_out(CashRequest {
                user: "01710001122".to_string(),
                amount: 300,
                note: None,
            })
            .await
            .unwrap();

        let summary = store.summary().await;
        assert_eq!(summary.today_cash_in, 800);
        assert_eq!(summary.today_cash_out, 300);
        // 0.6% of 1100, rounded.
        assert_eq!(summary.month_commission, 7);
    }

    #[tokio::test]
    async fn missing_note_falls_back_to_the_operation_label() {
        let store = AgentStore::empty(Latency::None);
        store
            .cash_in(CashRequest {
                user: "biz@shop.com".to_string(),
                amount: 100,
                note: None,
            })
            .await
            .unwrap();

        let page = store.txns(AgentTxnFilter::default()).await;
        assert_eq!(page.items[0].note.as_deref(), Some("Cash-in"));
    }

    #[tokio::test]
    async fn type_filter_only_returns_matching_records() {
        let store = AgentStore::new(Latency::None);
        let page = store
            .txns(AgentTxnFilter {
                txn_type: Some(AgentTxnType::CashOut),
                page_size: 100,
                ..AgentTxnFilter::default()
            })
            .await;
        assert!(page
            .items
            .iter()
            .all(|t| t.txn_type == AgentTxnType::CashOut));
        // Seeds alternate cash-in/cash-out, so cash-out gets the smaller half.
        assert_eq!(page.total, 31);
    }

    #[tokio::test]
    async fn free_text_matches_the_customer_field() {
        let store = AgentStore::empty(Latency::None);
        store
            .cash_in(CashRequest {
                user: "01755550000".to_string(),
                amount: 50,
                note: None,
            })
            .await
            .unwrap();
        store
            .cash_in(CashRequest {
                user: "biz@shop.com".to_string(),
                amount: 60,
                note: None,
            })
            .await
            .unwrap();

        let page = store
            .txns(AgentTxnFilter {
                query: Some("BIZ@".to_string()),
                ..AgentTxnFilter::default()
            })
            .await;
        assert_eq!(page.total, 1);
        assert_eq!(page.items[0].user, "biz@shop.com");
    }
}
