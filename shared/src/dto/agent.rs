use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::TxnStatus;

/// Direction of an agent booth transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AgentTxnType {
    CashIn,
    CashOut,
}

/// An agent ledger record: cash handed over the counter for a customer's
/// wallet. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentTxn {
    pub id: String,
    #[serde(rename = "type")]
    pub txn_type: AgentTxnType,
    /// Customer identifier, phone or email.
    pub user: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: TxnStatus,
    pub created_at: DateTime<Utc>,
}

/// Agent dashboard headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AgentSummary {
    pub today_cash_in: i64,
    pub today_cash_out: i64,
    pub month_commission: i64,
}

/// Filter and paging parameters for the agent ledger listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AgentTxnFilter {
    pub page: usize,
    pub page_size: usize,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub txn_type: Option<AgentTxnType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Default for AgentTxnFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            txn_type: None,
            query: None,
        }
    }
}

/// Cash-in / cash-out request issued from the agent dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CashRequest {
    /// Customer identifier, phone or email.
    pub user: String,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
