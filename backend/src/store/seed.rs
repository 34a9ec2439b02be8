//! Demo data the stores start from. Amounts are randomized inside fixed
//! ranges; everything else cycles deterministically so the dashboards always
//! have something plausible to show.

use chrono::{Duration, Utc};
use rand::Rng;
use shared::{
    AdminTxn, AdminTxnType, AgentTxn, AgentTxnType, DirectoryEntry, DirectoryRole,
    DirectoryStatus, Txn, TxnStatus, TxnType,
};

/// Opening balance of the demo wallet, in BDT.
pub const OPENING_BALANCE: i64 = 5000;

const WALLET_SEED_COUNT: usize = 32;
const AGENT_SEED_COUNT: usize = 63;
const DIRECTORY_SEED_COUNT: usize = 42;
const GLOBAL_SEED_COUNT: usize = 120;

const FIRST_NAMES: [&str; 6] = ["Shahid", "Farhana", "Rafi", "Tanvir", "Maliha", "Arif"];
const COUNTERPARTIES: [&str; 3] = ["01710001122", "01720002233", "shop@zpay.dev"];
const WALLET_NOTES: [&str; 4] = ["Top-up", "Withdrawal", "Rent", "Gift"];
const AGENT_NOTES: [&str; 3] = ["Agent booth", "Store payout", "Wallet top-up"];
const GLOBAL_ACTORS: [&str; 4] = [
    "01710001122",
    "01720002233",
    "biz@shop.com",
    "user@demo.com",
];

/// Wallet ledger seed: newest first, one record every six hours.
pub fn wallet_txns() -> Vec<Txn> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    (0..WALLET_SEED_COUNT)
        .map(|i| {
            let txn_type = [
                TxnType::Deposit,
                TxnType::Withdraw,
                TxnType::Send,
                TxnType::Receive,
            ][i % 4];
            Txn {
                id: format!("u_tx_{}", i + 1),
                txn_type,
                amount: rng.gen_range(100..2100),
                counterparty: Some(COUNTERPARTIES[i % 3].to_string()),
                note: Some(WALLET_NOTES[i % 4].to_string()),
                status: TxnStatus::Success,
                created_at: now - Duration::hours(6 * i as i64),
            }
        })
        .collect()
}

/// Agent ledger seed: newest first, one record every five hours.
pub fn agent_txns() -> Vec<AgentTxn> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    (0..AGENT_SEED_COUNT)
        .map(|i| AgentTxn {
            id: format!("a_tx_{}", i + 1),
            txn_type: if i % 2 == 0 {
                AgentTxnType::CashIn
            } else {
                AgentTxnType::CashOut
            },
            user: COUNTERPARTIES[i % 3].to_string(),
            amount: rng.gen_range(300..3300),
            note: Some(AGENT_NOTES[i % 3].to_string()),
            status: TxnStatus::Success,
            created_at: now - Duration::hours(5 * i as i64),
        })
        .collect()
}

/// Moderation directory seed; every fifth entry is an agent.
pub fn directory() -> Vec<DirectoryEntry> {
    (0..DIRECTORY_SEED_COUNT)
        .map(|i| DirectoryEntry {
            id: format!("u_{}", i + 1),
            name: format!("{} {}", FIRST_NAMES[i % 6], i + 1),
            email: format!("user{}@zpay.dev", i + 1),
            phone: Some(format!("017{}", 10_000_000 + i)),
            status: [
                DirectoryStatus::Active,
                DirectoryStatus::Active,
                DirectoryStatus::Blocked,
                DirectoryStatus::Pending,
            ][i % 4],
            role: if i % 5 == 0 {
                DirectoryRole::Agent
            } else {
                DirectoryRole::User
            },
        })
        .collect()
}

/// Global ledger seed: newest first, one record every three hours.
pub fn global_txns() -> Vec<AdminTxn> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    (0..GLOBAL_SEED_COUNT)
        .map(|i| AdminTxn {
            id: format!("g_tx_{}", i + 1),
            txn_type: [
                AdminTxnType::Deposit,
                AdminTxnType::Withdraw,
                AdminTxnType::Send,
                AdminTxnType::Receive,
                AdminTxnType::CashIn,
                AdminTxnType::CashOut,
            ][i % 6],
            amount: rng.gen_range(200..8200),
            actor: GLOBAL_ACTORS[i % 4].to_string(),
            status: TxnStatus::Success,
            created_at: now - Duration::hours(3 * i as i64),
        })
        .collect()
}
