use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Direction of a personal-wallet transaction.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxnType {
    Deposit,
    Withdraw,
    Send,
    Receive,
}

impl TxnType {
    /// Whether the transaction adds to the wallet balance.
    pub fn is_credit(&self) -> bool {
        matches!(self, TxnType::Deposit | TxnType::Receive)
    }
}

/// Settlement status. Records are created settled; the other variants exist
/// for wire compatibility with a real backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TxnStatus {
    Success,
    Pending,
    Failed,
}

/// A personal-wallet ledger record. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Txn {
    pub id: String,
    #[serde(rename = "type")]
    pub txn_type: TxnType,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub counterparty: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub status: TxnStatus,
    pub created_at: DateTime<Utc>,
}

/// Wallet dashboard headline numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletSummary {
    pub balance: i64,
    pub today_in: i64,
    pub today_out: i64,
}

/// Filter and paging parameters for the wallet transaction listing.
///
/// Defaults apply at construction: first page, ten records, no filters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct TxnFilter {
    pub page: usize,
    pub page_size: usize,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub txn_type: Option<TxnType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<DateTime<Utc>>,
}

impl Default for TxnFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            txn_type: None,
            query: None,
            from: None,
            to: None,
        }
    }
}

/// Deposit request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepositRequest {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Withdrawal request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WithdrawRequest {
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Peer-to-peer send request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SendRequest {
    pub amount: i64,
    pub to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
