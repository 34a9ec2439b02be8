//! # Wallet Store
//!
//! The personal wallet: a running balance plus an append-only transaction
//! ledger, newest record first. The balance and the ledger are mutated under
//! one write lock so they can never disagree.

use chrono::Utc;
use shared::{
    Ack, DepositRequest, Envelope, SendRequest, Txn, TxnFilter, TxnStatus, TxnType,
    WalletSummary, WithdrawRequest,
};
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{ApiError, Result};
use crate::latency::Latency;
use crate::store::{matches_query, paginate, seed, start_of_today};

pub struct WalletStore {
    latency: Latency,
    inner: RwLock<WalletState>,
}

struct WalletState {
    balance: i64,
    /// Newest first.
    txns: Vec<Txn>,
    next_id: usize,
}

impl WalletState {
    /// Append a record and adjust the balance in one step.
    fn record(
        &mut self,
        txn_type: TxnType,
        amount: i64,
        counterparty: Option<String>,
        note: Option<String>,
    ) -> String {
        let id = format!("u_tx_{}", self.next_id);
        self.next_id += 1;

        if txn_type.is_credit() {
            self.balance += amount;
        } else {
            self.balance -= amount;
        }
        self.txns.insert(
            0,
            Txn {
                id: id.clone(),
                txn_type,
                amount,
                counterparty,
                note,
                status: TxnStatus::Success,
                created_at: Utc::now(),
            },
        );
        id
    }
}

impl WalletStore {
    /// Store seeded with the demo ledger and opening balance.
    pub fn new(latency: Latency) -> Self {
        Self::with_records(latency, seed::OPENING_BALANCE, seed::wallet_txns())
    }

    /// Store with a caller-supplied ledger, newest first.
    pub fn with_records(latency: Latency, balance: i64, txns: Vec<Txn>) -> Self {
        let next_id = txns.len() + 1;
        Self {
            latency,
            inner: RwLock::new(WalletState {
                balance,
                txns,
                next_id,
            }),
        }
    }

    /// Current balance plus today's inflow and outflow, recomputed from the
    /// ledger on every call.
    pub async fn summary(&self) -> WalletSummary {
        self.latency.simulate().await;
        let state = self.inner.read().await;

        let today = start_of_today();
        let mut today_in = 0;
        let mut today_out = 0;
        for txn in &state.txns {
            if txn.created_at >= today {
                if txn.txn_type.is_credit() {
                    today_in += txn.amount;
                } else {
                    today_out += txn.amount;
                }
            }
        }

        WalletSummary {
            balance: state.balance,
            today_in,
            today_out,
        }
    }

    /// Filtered, paginated ledger page. Filter order: type, then free text
    /// over id/note/counterparty, then inclusive date bounds.
    pub async fn txns(&self, filter: TxnFilter) -> Envelope<Txn> {
        self.latency.simulate().await;
        let state = self.inner.read().await;

        let filtered: Vec<Txn> = state
            .txns
            .iter()
            .filter(|t| filter.txn_type.map_or(true, |ty| t.txn_type == ty))
            .filter(|t| {
                filter.query.as_deref().map_or(true, |q| {
                    matches_query(
                        q,
                        &[
                            Some(t.id.as_str()),
                            t.note.as_deref(),
                            t.counterparty.as_deref(),
                        ],
                    )
                })
            })
            .filter(|t| filter.from.map_or(true, |from| t.created_at >= from))
            .filter(|t| filter.to.map_or(true, |to| t.created_at <= to))
            .cloned()
            .collect();

        paginate(&filtered, filter.page, filter.page_size)
    }

    pub async fn deposit(&self, req: DepositRequest) -> Result<Ack> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        let id = state.record(TxnType::Deposit, req.amount, None, req.note);
        debug!(%id, amount = req.amount, "deposit recorded");
        Ok(Ack { ok: true })
    }

    pub async fn withdraw(&self, req: WithdrawRequest) -> Result<Ack> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        if req.amount > state.balance {
            return Err(ApiError::InsufficientBalance {
                requested: req.amount,
                available: state.balance,
            });
        }
        let id = state.record(TxnType::Withdraw, req.amount, None, req.note);
        debug!(%id, amount = req.amount, "withdrawal recorded");
        Ok(Ack { ok: true })
    }

    pub async fn send(&self, req: SendRequest) -> Result<Ack> {
        self.latency.simulate().await;
        let mut state = self.inner.write().await;
        if req.amount > state.balance {
            return Err(ApiError::InsufficientBalance {
                requested: req.amount,
                available: state.balance,
            });
        }
        let id = state.record(TxnType::Send, req.amount, Some(req.to), req.note);
        debug!(%id, amount = req.amount, "send recorded");
        Ok(Ack { ok: true })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> WalletStore {
        WalletStore::new(Latency::None)
    }

    #[tokio::test]
    async fn deposit_raises_balance_and_lands_first_in_the_ledger() {
        let store = store();
        assert_eq!(store.summary().await.balance, 5000);

        store
            .deposit(DepositRequest {
                amount: 1500,
                note: Some("Top-up".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(store.summary().await.balance, 6500);
        let page = store.txns(TxnFilter::default()).await;
        assert_eq!(page.items[0].txn_type, TxnType::Deposit);
        assert_eq!(page.items[0].amount, 1500);
    }

    #[tokio::test]
    async fn every_write_moves_the_balance_by_the_signed_amount() {
        let store = WalletStore::with_records(Latency::None, 10_000, Vec::new());

        store
            .deposit(DepositRequest {
                amount: 700,
                note: None,
            })
            .await
            .unwrap();
        assert_eq!(store.summary().await.balance, 10_700);

        store
            .withdraw(WithdrawRequest {
                amount: 200,
                note: None,
            })
            .await
            .unwrap();
        assert_eq!(store.summary().await.balance, 10_500);

        store
            .send(SendRequest {
                amount: 500,
                to: "01710001122".to_string(),
                note: None,
            })
            .await
            .unwrap();
        assert_eq!(store.summary().await.balance, 10_000);
    }

    #[tokio::test]
    async fn overspending_is_rejected_and_leaves_state_untouched() {
        let store = WalletStore::with_records(Latency::None, 100, Vec::new());

        let err = store
            .withdraw(WithdrawRequest {
                amount: 500,
                note: None,
            })
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::InsufficientBalance {
                requested: 500,
                available: 100
            }
        ));

        assert_eq!(store.summary().await.balance, 100);
        assert_eq!(store.txns(TxnFilter::default()).await.total, 0);
    }

    #[tokio::test]
    async fn ids_stay_unique_across_writes() {
        let store = store();
        store
            .deposit(DepositRequest {
                amount: 10,
                note: None,
            })
            .await
            .unwrap();
        store
            .deposit(DepositRequest {
                amount: 20,
                note: None,
            })
            .await
            .unwrap();

        let all = store
            .txns(TxnFilter {
                page_size: 100,
                ..TxnFilter::default()
            })
            .await;
        let mut ids: Vec<&str> = all.items.iter().map(|t| t.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), all.items.len());
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty_with_correct_total() {
        let store = store();
        let page = store
            .txns(TxnFilter {
                page: 99,
                ..TxnFilter::default()
            })
            .await;
        assert!(page.items.is_empty());
        assert_eq!(page.total, 32);
    }
}
