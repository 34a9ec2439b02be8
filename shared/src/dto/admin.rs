use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::wallet::TxnStatus;

/// Platform-wide headline numbers for the admin dashboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminStats {
    pub total_users: usize,
    pub total_agents: usize,
    pub tx_count: usize,
    /// Gross transaction volume in BDT.
    pub volume: i64,
}

/// Moderation status of a directory entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryStatus {
    Active,
    Blocked,
    Pending,
}

/// Account kind of a directory entry. Immutable after creation; admins are
/// not listed in the directory.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DirectoryRole {
    User,
    Agent,
}

/// One row of the moderation directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub status: DirectoryStatus,
    pub role: DirectoryRole,
}

/// Transaction kind in the global ledger, the union of wallet and agent
/// record types.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum AdminTxnType {
    Deposit,
    Withdraw,
    Send,
    Receive,
    CashIn,
    CashOut,
}

/// A record of the platform-wide ledger. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdminTxn {
    pub id: String,
    #[serde(rename = "type")]
    pub txn_type: AdminTxnType,
    pub amount: i64,
    /// Who moved the money: phone, email, or account id.
    pub actor: String,
    pub status: TxnStatus,
    pub created_at: DateTime<Utc>,
}

/// Filter parameters for the user/agent directory. The directory is small
/// and returned whole, so there is no paging here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct DirectoryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<DirectoryRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DirectoryStatus>,
}

/// Filter and paging parameters for the global ledger listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct AdminTxnFilter {
    pub page: usize,
    pub page_size: usize,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub txn_type: Option<AdminTxnType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl Default for AdminTxnFilter {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 10,
            txn_type: None,
            query: None,
        }
    }
}

/// Moderation request targeting one directory entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ModerationRequest {
    pub id: String,
}
